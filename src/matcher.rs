//! The resolution pipeline and the matcher instance that owns statistics.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use country_types::{MatchResult, MatcherStatistics, PlaceWithCountry, UnresolvedLocation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::normalize::{Normalized, normalize};
use crate::stats::StatisticsAggregator;
use crate::tiers::{TIERS, TierInput};

/// Tunables that do not affect which country wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Runner-up candidates reported with a fuzzy match
    pub max_alternatives: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self { max_alternatives: 3 }
    }
}

/// Run every tier in priority order against an immutable catalog.
///
/// Deterministic: same `(raw, year, catalog, config)` gives the same result.
pub fn resolve(catalog: &Catalog, config: &MatcherConfig, raw: &str, year: Option<i32>) -> MatchResult {
    let place = match normalize(raw) {
        Normalized::Empty => return MatchResult::none(),
        Normalized::Place(p) => p,
    };
    let input = TierInput {
        place: &place,
        year,
        catalog,
        max_alternatives: config.max_alternatives,
    };

    for (method, tier) in TIERS {
        if let Some(result) = tier(&input) {
            debug!(raw, %method, iso2 = ?result.iso2, confidence = result.confidence, "tier matched");
            return result;
        }
        debug!(raw, %method, "tier abstained");
    }
    MatchResult::none()
}

// ── Matcher instance ─────────────────────────────────────────────────

/// A country matcher over a shared catalog. Safe to share across threads;
/// statistics updates are serialized behind one lock.
#[derive(Debug)]
pub struct CountryMatcher {
    catalog: Arc<Catalog>,
    config: MatcherConfig,
    stats: Mutex<StatisticsAggregator>,
}

impl CountryMatcher {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_config(catalog, MatcherConfig::default())
    }

    pub fn with_config(catalog: Arc<Catalog>, config: MatcherConfig) -> Self {
        Self {
            catalog,
            config,
            stats: Mutex::new(StatisticsAggregator::new()),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolve without touching statistics.
    pub fn match_country(&self, raw: &str, year: Option<i32>) -> MatchResult {
        resolve(&self.catalog, &self.config, raw, year)
    }

    /// Resolve one event's place and record the outcome.
    pub fn process_place(
        &self,
        raw: &str,
        year: Option<i32>,
        individual_id: Option<&str>,
        event_type: Option<&str>,
    ) -> PlaceWithCountry {
        let place = PlaceWithCountry {
            original: raw.to_string(),
            individual_id: individual_id.map(str::to_string),
            event_type: event_type.map(str::to_string),
            country: Some(self.match_country(raw, year)),
        };
        self.lock_stats().record(&place);
        place
    }

    pub fn statistics(&self) -> MatcherStatistics {
        self.lock_stats().snapshot()
    }

    pub fn reset_statistics(&self) {
        self.lock_stats().reset();
    }

    pub fn unresolved_locations(&self) -> Vec<UnresolvedLocation> {
        self.lock_stats().unresolved().to_vec()
    }

    // A panic mid-record leaves at worst one partially counted call.
    fn lock_stats(&self) -> MutexGuard<'_, StatisticsAggregator> {
        self.stats.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CountryMatcher {
    fn default() -> Self {
        Self::new(Arc::new(Catalog::builtin()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use country_types::MatchMethod;

    #[test]
    fn test_empty_input_short_circuits() {
        let m = CountryMatcher::default();
        for raw in ["", "   ", "\t\n"] {
            let r = m.match_country(raw, Some(1900));
            assert_eq!(r, MatchResult::none());
        }
    }

    #[test]
    fn test_match_country_leaves_statistics_alone() {
        let m = CountryMatcher::default();
        m.match_country("France", None);
        assert_eq!(m.statistics().total_locations, 0);
    }

    #[test]
    fn test_process_place_wraps_ids() {
        let m = CountryMatcher::default();
        let p = m.process_place("Paris, France", Some(1850), Some("@I7@"), Some("death"));
        assert_eq!(p.original, "Paris, France");
        assert_eq!(p.individual_id.as_deref(), Some("@I7@"));
        assert_eq!(p.event_type.as_deref(), Some("death"));
        let c = p.country.unwrap();
        assert_eq!(c.iso2.as_deref(), Some("FR"));
        assert_eq!(c.method, MatchMethod::Pattern);
    }

    #[test]
    fn test_alternatives_limit_from_config() {
        let catalog = Arc::new(Catalog::builtin());
        let m = CountryMatcher::with_config(catalog, MatcherConfig { max_alternatives: 0 });
        let r = m.match_country("Austrai", None);
        assert_eq!(r.method, MatchMethod::Fuzzy);
        assert!(r.alternatives.is_empty());
    }

    #[test]
    fn test_config_defaults_from_empty_json() {
        let cfg: MatcherConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, MatcherConfig::default());
    }

    #[test]
    fn test_unresolved_in_call_order() {
        let m = CountryMatcher::default();
        m.process_place("XYZ123", None, Some("@I1@"), None);
        m.process_place("France", None, None, None);
        m.process_place("", None, Some("@I2@"), Some("burial"));
        let u = m.unresolved_locations();
        assert_eq!(u.len(), 2);
        assert_eq!(u[0].original, "XYZ123");
        assert_eq!(u[1].individual_id.as_deref(), Some("@I2@"));
    }
}
