use serde::{Deserialize, Serialize};

// ── Match method ─────────────────────────────────────────────────────────

/// Which resolution tier produced a match. `None` means no tier did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMethod {
    Exact,
    Alias,
    Pattern,
    Region,
    Historical,
    Fuzzy,
    None,
}

impl MatchMethod {
    /// Every method, in tier priority order.
    pub const ALL: [MatchMethod; 7] = [
        Self::Exact,
        Self::Alias,
        Self::Pattern,
        Self::Region,
        Self::Historical,
        Self::Fuzzy,
        Self::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Alias => "alias",
            Self::Pattern => "pattern",
            Self::Region => "region",
            Self::Historical => "historical",
            Self::Fuzzy => "fuzzy",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Match result ─────────────────────────────────────────────────────────

/// A secondary candidate reported alongside a fuzzy match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub iso2: String,
    pub confidence: f64,
    pub reason: String,
}

/// The outcome of resolving one place string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub iso2: Option<String>,
    pub confidence: f64,
    pub method: MatchMethod,
    /// The code, alias, segment or window that triggered the match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_on: Option<String>,
    /// Runner-up candidates, highest confidence first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<Alternative>,
}

impl MatchResult {
    /// The no-match sentinel: no country, confidence 0, method `none`.
    pub fn none() -> Self {
        Self {
            iso2: None,
            confidence: 0.0,
            method: MatchMethod::None,
            matched_on: None,
            alternatives: Vec::new(),
        }
    }

    pub fn new(iso2: &str, confidence: f64, method: MatchMethod, matched_on: &str) -> Self {
        Self {
            iso2: Some(iso2.to_string()),
            confidence,
            method,
            matched_on: Some(matched_on.to_string()),
            alternatives: Vec::new(),
        }
    }

    pub fn is_match(&self) -> bool {
        self.iso2.is_some()
    }
}

// ── Per-record wrapper ───────────────────────────────────────────────────

/// A place string from one genealogical event, with its resolved country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceWithCountry {
    pub original: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub individual_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<MatchResult>,
}

// ── Statistics snapshot ──────────────────────────────────────────────────

/// An input that no tier could resolve, kept for later review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnresolvedLocation {
    pub original: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub individual_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
}

/// Counts of matched inputs per confidence bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceBuckets {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl ConfidenceBuckets {
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

/// One counter per match method, so every key is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodCounts {
    pub exact: usize,
    pub alias: usize,
    pub pattern: usize,
    pub region: usize,
    pub historical: usize,
    pub fuzzy: usize,
    pub none: usize,
}

impl MethodCounts {
    pub fn get(&self, method: MatchMethod) -> usize {
        match method {
            MatchMethod::Exact => self.exact,
            MatchMethod::Alias => self.alias,
            MatchMethod::Pattern => self.pattern,
            MatchMethod::Region => self.region,
            MatchMethod::Historical => self.historical,
            MatchMethod::Fuzzy => self.fuzzy,
            MatchMethod::None => self.none,
        }
    }

    pub fn increment(&mut self, method: MatchMethod) {
        let slot = match method {
            MatchMethod::Exact => &mut self.exact,
            MatchMethod::Alias => &mut self.alias,
            MatchMethod::Pattern => &mut self.pattern,
            MatchMethod::Region => &mut self.region,
            MatchMethod::Historical => &mut self.historical,
            MatchMethod::Fuzzy => &mut self.fuzzy,
            MatchMethod::None => &mut self.none,
        };
        *slot += 1;
    }

    pub fn total(&self) -> usize {
        MatchMethod::ALL.iter().map(|m| self.get(*m)).sum()
    }
}

/// Everything a matcher has recorded since construction or its last reset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatcherStatistics {
    pub total_locations: usize,
    pub matched: ConfidenceBuckets,
    pub methods: MethodCounts,
    pub unresolved: Vec<UnresolvedLocation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_counts_cover_every_method() {
        let mut counts = MethodCounts::default();
        for m in MatchMethod::ALL {
            counts.increment(m);
        }
        assert_eq!(counts.total(), 7);
        assert!(MatchMethod::ALL.iter().all(|m| counts.get(*m) == 1));
    }

    #[test]
    fn test_none_sentinel() {
        let r = MatchResult::none();
        assert!(!r.is_match());
        assert_eq!(r.confidence, 0.0);
        assert_eq!(r.method, MatchMethod::None);
    }

    #[test]
    fn test_method_display_matches_serde_name() {
        assert_eq!(MatchMethod::Historical.to_string(), "historical");
        assert_eq!(MatchMethod::None.as_str(), "none");
    }
}
