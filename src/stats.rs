//! Confidence bucketing and the per-matcher statistics accumulator.

use country_types::{MatchResult, MatcherStatistics, PlaceWithCountry, UnresolvedLocation};

pub const HIGH_THRESHOLD: f64 = 0.9;
pub const MEDIUM_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBucket {
    High,
    Medium,
    Low,
}

impl ConfidenceBucket {
    /// Bucket for a resolved match; `None` for the no-match sentinel.
    pub fn classify(result: &MatchResult) -> Option<Self> {
        if !result.is_match() || result.confidence <= 0.0 {
            return None;
        }
        Some(if result.confidence >= HIGH_THRESHOLD {
            Self::High
        } else if result.confidence >= MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        })
    }
}

/// Counters and unresolved log since construction or the last reset.
#[derive(Debug, Default)]
pub struct StatisticsAggregator {
    stats: MatcherStatistics,
}

impl StatisticsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, place: &PlaceWithCountry) {
        self.stats.total_locations += 1;

        let none = MatchResult::none();
        let result = place.country.as_ref().unwrap_or(&none);
        self.stats.methods.increment(result.method);

        match ConfidenceBucket::classify(result) {
            Some(ConfidenceBucket::High) => self.stats.matched.high += 1,
            Some(ConfidenceBucket::Medium) => self.stats.matched.medium += 1,
            Some(ConfidenceBucket::Low) => self.stats.matched.low += 1,
            None => self.stats.unresolved.push(UnresolvedLocation {
                original: place.original.clone(),
                individual_id: place.individual_id.clone(),
                event_type: place.event_type.clone(),
            }),
        }
    }

    pub fn snapshot(&self) -> MatcherStatistics {
        self.stats.clone()
    }

    pub fn unresolved(&self) -> &[UnresolvedLocation] {
        &self.stats.unresolved
    }

    pub fn reset(&mut self) {
        self.stats = MatcherStatistics::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use country_types::MatchMethod;

    fn place(original: &str, result: MatchResult) -> PlaceWithCountry {
        PlaceWithCountry {
            original: original.into(),
            individual_id: Some("@I1@".into()),
            event_type: Some("birth".into()),
            country: Some(result),
        }
    }

    #[test]
    fn test_bucket_boundaries() {
        let at = |c: f64| ConfidenceBucket::classify(&MatchResult::new("FR", c, MatchMethod::Fuzzy, "X"));
        assert_eq!(at(1.0), Some(ConfidenceBucket::High));
        assert_eq!(at(0.9), Some(ConfidenceBucket::High));
        assert_eq!(at(0.89), Some(ConfidenceBucket::Medium));
        assert_eq!(at(0.7), Some(ConfidenceBucket::Medium));
        assert_eq!(at(0.69), Some(ConfidenceBucket::Low));
        assert_eq!(at(0.3), Some(ConfidenceBucket::Low));
        assert_eq!(ConfidenceBucket::classify(&MatchResult::none()), None);
    }

    #[test]
    fn test_record_counts_and_unresolved() {
        let mut agg = StatisticsAggregator::new();
        agg.record(&place("USA", MatchResult::new("US", 1.0, MatchMethod::Exact, "US")));
        agg.record(&place("Texas", MatchResult::new("US", 0.85, MatchMethod::Region, "TEXAS")));
        agg.record(&place("Frnace", MatchResult::new("FR", 0.59, MatchMethod::Fuzzy, "FRANCE")));
        agg.record(&place("XYZ123", MatchResult::none()));

        let s = agg.snapshot();
        assert_eq!(s.total_locations, 4);
        assert_eq!((s.matched.high, s.matched.medium, s.matched.low), (1, 1, 1));
        assert_eq!(s.methods.exact, 1);
        assert_eq!(s.methods.region, 1);
        assert_eq!(s.methods.fuzzy, 1);
        assert_eq!(s.methods.none, 1);
        assert_eq!(s.unresolved.len(), 1);
        assert_eq!(s.unresolved[0].original, "XYZ123");
        assert_eq!(s.unresolved[0].event_type.as_deref(), Some("birth"));
        assert_eq!(s.matched.total() + s.unresolved.len(), s.total_locations);
    }

    #[test]
    fn test_missing_country_counts_as_none() {
        let mut agg = StatisticsAggregator::new();
        agg.record(&PlaceWithCountry {
            original: "?".into(),
            individual_id: None,
            event_type: None,
            country: None,
        });
        let s = agg.snapshot();
        assert_eq!(s.methods.none, 1);
        assert_eq!(agg.unresolved().len(), 1);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut agg = StatisticsAggregator::new();
        agg.record(&place("XYZ", MatchResult::none()));
        agg.reset();
        assert_eq!(agg.snapshot(), MatcherStatistics::default());
    }
}
