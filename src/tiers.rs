//! The six resolution tiers, highest priority first.
//!
//! Every tier is a pure function of the normalized place, the optional
//! event year and the catalog. A tier either returns a match or abstains;
//! the pipeline in [`crate::matcher`] takes the first match in [`TIERS`]
//! order.

use country_types::{Alternative, MatchMethod, MatchResult};

use crate::catalog::{Catalog, CountryRecord};
use crate::normalize::{MAX_WINDOW, Normalized, NormalizedPlace, key_forms, normalize};

pub const EXACT_CONFIDENCE: f64 = 1.0;
pub const ALIAS_CONFIDENCE: f64 = 0.95;
pub const PATTERN_CONFIDENCE: f64 = 0.90;
pub const REGION_CONFIDENCE: f64 = 0.85;
pub const HISTORICAL_CONFIDENCE: f64 = 0.75;
/// Fuzzy similarity is scaled by this so a perfect fuzzy score stays below the pattern tier.
pub const FUZZY_CEILING: f64 = 0.89;
/// Fuzzy matches scoring below this are discarded.
pub const FUZZY_FLOOR: f64 = 0.3;

/// Everything a tier may read.
pub struct TierInput<'a> {
    pub place: &'a NormalizedPlace,
    pub year: Option<i32>,
    pub catalog: &'a Catalog,
    pub max_alternatives: usize,
}

pub type TierFn = fn(&TierInput<'_>) -> Option<MatchResult>;

/// Tier order is part of the matching contract.
pub const TIERS: [(MatchMethod, TierFn); 6] = [
    (MatchMethod::Exact, exact),
    (MatchMethod::Alias, alias),
    (MatchMethod::Pattern, pattern),
    (MatchMethod::Region, region),
    (MatchMethod::Historical, historical),
    (MatchMethod::Fuzzy, fuzzy),
];

fn hit(rec: &CountryRecord, confidence: f64, method: MatchMethod, matched_on: &str) -> MatchResult {
    MatchResult::new(&rec.iso2, confidence, method, matched_on)
}

/// First form of `key` that `find` accepts, with the form that matched.
fn lookup<'k, 'c>(
    key: &'k str,
    find: impl Fn(&str) -> Option<&'c CountryRecord>,
) -> Option<(&'c CountryRecord, &'k str)> {
    key_forms(key).find_map(|form| find(form).map(|rec| (rec, form)))
}

// ── 1. Exact code ────────────────────────────────────────────────────

/// Whole input is an ISO2 or ISO3 code.
pub fn exact(input: &TierInput<'_>) -> Option<MatchResult> {
    let (rec, _) = lookup(&input.place.folded, |k| input.catalog.code(k))?;
    Some(hit(rec, EXACT_CONFIDENCE, MatchMethod::Exact, &rec.iso2))
}

// ── 2. Alias ─────────────────────────────────────────────────────────

/// Whole input is a canonical name or alias.
pub fn alias(input: &TierInput<'_>) -> Option<MatchResult> {
    let (rec, key) = lookup(&input.place.folded, |k| input.catalog.alias(k))?;
    Some(hit(rec, ALIAS_CONFIDENCE, MatchMethod::Alias, key))
}

// ── 3. Hierarchical pattern ──────────────────────────────────────────

/// "City[, State][, Country]": resolve from the trailing segment.
pub fn pattern(input: &TierInput<'_>) -> Option<MatchResult> {
    let place = input.place;
    if !place.is_hierarchical() {
        return None;
    }
    let catalog = input.catalog;
    let n = place.segments.len();
    let last = &place.segments[n - 1];
    let found = |rec: &CountryRecord, on: &str| Some(hit(rec, PATTERN_CONFIDENCE, MatchMethod::Pattern, on));

    // A bare trailing code wins even where it is also a US state
    // abbreviation: "Boston, MA" is Morocco.
    if let Some((rec, on)) = lookup(&last.folded, |k| catalog.code(k).or_else(|| catalog.alias(k))) {
        return found(rec, on);
    }

    // Aliases written with a comma, e.g. "Korea, Republic of"
    let joined = format!("{}, {}", place.segments[n - 2].folded, last.folded);
    if let Some((rec, on)) = lookup(&joined, |k| catalog.alias(k)) {
        return found(rec, on);
    }

    for window in last.trailing_windows(MAX_WINDOW) {
        if let Some((rec, on)) = lookup(&window, |k| catalog.alias(k).or_else(|| catalog.code(k))) {
            return found(rec, on);
        }
        // "New Mexico", "New South Wales": the region owns every shorter tail.
        if key_forms(&window).any(|k| catalog.is_region(k)) {
            break;
        }
    }
    None
}

// ── 4. Region ────────────────────────────────────────────────────────

/// A known subdivision anywhere in the input, trailing segments first.
pub fn region(input: &TierInput<'_>) -> Option<MatchResult> {
    let place = input.place;
    let catalog = input.catalog;
    let found = |rec: &CountryRecord, on: &str| Some(hit(rec, REGION_CONFIDENCE, MatchMethod::Region, on));

    if let Some((rec, on)) = lookup(&place.folded, |k| catalog.region(k)) {
        return found(rec, on);
    }
    for segment in place.segments.iter().rev() {
        if let Some((rec, on)) = lookup(&segment.folded, |k| catalog.region(k)) {
            return found(rec, on);
        }
        for window in segment.all_windows(MAX_WINDOW) {
            if let Some((rec, on)) = lookup(&window, |k| catalog.region(k)) {
                return found(rec, on);
            }
        }
    }
    None
}

// ── 5. Historical ────────────────────────────────────────────────────

/// A defunct state, only when the event year falls inside its window.
pub fn historical(input: &TierInput<'_>) -> Option<MatchResult> {
    let year = input.year?;
    let place = input.place;
    let catalog = input.catalog;

    let mut keys = vec![place.folded.as_str()];
    if place.is_hierarchical() {
        if let Some(last) = place.last_segment() {
            keys.push(last.folded.as_str());
        }
    }
    keys.into_iter().find_map(|key| {
        lookup(key, |k| catalog.historical(k, year))
            .map(|(rec, on)| hit(rec, HISTORICAL_CONFIDENCE, MatchMethod::Historical, on))
    })
}

/// The match a tier ranked above [`historical`] gives for `raw`, if any.
/// A defunct-state name with such a match can never reach the historical tier.
pub fn preempting_match(catalog: &Catalog, raw: &str) -> Option<MatchResult> {
    let Normalized::Place(place) = normalize(raw) else {
        return None;
    };
    let input = TierInput {
        place: &place,
        year: None,
        catalog,
        max_alternatives: 0,
    };
    TIERS
        .into_iter()
        .take_while(|(method, _)| *method != MatchMethod::Historical)
        .find_map(|(_, tier)| tier(&input))
}

// ── 6. Fuzzy ─────────────────────────────────────────────────────────

/// Scaled similarity in `[0, FUZZY_CEILING]` for an edit distance.
pub fn fuzzy_confidence(distance: usize, input_len: usize, candidate_len: usize) -> f64 {
    let longest = input_len.max(candidate_len);
    if longest == 0 {
        return 0.0;
    }
    let similarity = (1.0 - distance as f64 / longest as f64).clamp(0.0, 1.0);
    similarity * FUZZY_CEILING
}

struct Scored<'a> {
    confidence: f64,
    distance: usize,
    order: usize,
    key: &'a str,
    record: usize,
}

/// Closest canonical name or alias by Levenshtein distance.
pub fn fuzzy(input: &TierInput<'_>) -> Option<MatchResult> {
    let query = input.place.folded.as_str();
    let query_len = query.chars().count();
    let catalog = input.catalog;

    // Best candidate per country, in catalog order.
    let mut best: Vec<Scored<'_>> = Vec::new();
    for (order, cand) in catalog.fuzzy_candidates().iter().enumerate() {
        let distance = strsim::levenshtein(query, &cand.key);
        let confidence = fuzzy_confidence(distance, query_len, cand.char_len);
        if confidence < FUZZY_FLOOR {
            continue;
        }
        let scored = Scored {
            confidence,
            distance,
            order,
            key: &cand.key,
            record: cand.record,
        };
        match best.iter_mut().find(|s| s.record == cand.record) {
            Some(prev) => {
                if ranks_before(&scored, prev) {
                    *prev = scored;
                }
            }
            None => best.push(scored),
        }
    }

    best.sort_by(|a, b| {
        b.confidence
            .total_cmp(&a.confidence)
            .then(a.distance.cmp(&b.distance))
            .then(a.order.cmp(&b.order))
    });

    let mut ranked = best.into_iter();
    let primary = ranked.next()?;
    let mut result = hit(
        catalog.record(primary.record),
        primary.confidence,
        MatchMethod::Fuzzy,
        primary.key,
    );
    result.alternatives = ranked
        .take(input.max_alternatives)
        .map(|s| Alternative {
            iso2: catalog.record(s.record).iso2.clone(),
            confidence: s.confidence,
            reason: format!("edit distance {} from \"{}\"", s.distance, s.key),
        })
        .collect();
    Some(result)
}

fn ranks_before(a: &Scored<'_>, b: &Scored<'_>) -> bool {
    a.confidence > b.confidence || (a.confidence == b.confidence && a.distance < b.distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(tier: TierFn, raw: &str, year: Option<i32>) -> Option<MatchResult> {
        let catalog = Catalog::builtin();
        let Normalized::Place(place) = normalize(raw) else {
            panic!("empty input {raw:?}");
        };
        let input = TierInput {
            place: &place,
            year,
            catalog: &catalog,
            max_alternatives: 3,
        };
        tier(&input)
    }

    fn iso(r: &Option<MatchResult>) -> Option<&str> {
        r.as_ref().and_then(|m| m.iso2.as_deref())
    }

    #[test]
    fn test_exact_iso2_and_iso3() {
        let r = run(exact, "usa", None);
        assert_eq!(iso(&r), Some("US"));
        assert_eq!(r.unwrap().matched_on.as_deref(), Some("US"));
        assert_eq!(iso(&run(exact, "De", None)), Some("DE"));
        assert!(run(exact, "France", None).is_none());
    }

    #[test]
    fn test_alias_whole_string_only() {
        assert_eq!(iso(&run(alias, "deutschland", None)), Some("DE"));
        assert_eq!(iso(&run(alias, "Scotland", None)), Some("GB"));
        assert!(run(alias, "Deutschland Nord", None).is_none());
    }

    #[test]
    fn test_pattern_last_segment() {
        let r = run(pattern, "Paris, France", None).unwrap();
        assert_eq!(r.iso2.as_deref(), Some("FR"));
        assert_eq!(r.confidence, PATTERN_CONFIDENCE);
        assert_eq!(r.matched_on.as_deref(), Some("FRANCE"));
        assert_eq!(iso(&run(pattern, "Lyon, Rhône, FRA", None)), Some("FR"));
    }

    #[test]
    fn test_pattern_requires_hierarchy() {
        assert!(run(pattern, "France", None).is_none());
        assert!(run(pattern, "Born in France", None).is_none());
    }

    #[test]
    fn test_pattern_joined_segments() {
        let r = run(pattern, "Seoul, Korea, Republic of", None).unwrap();
        assert_eq!(r.iso2.as_deref(), Some("KR"));
        assert_eq!(r.matched_on.as_deref(), Some("KOREA, REPUBLIC OF"));
    }

    #[test]
    fn test_pattern_trailing_window() {
        let r = run(pattern, "New York City, the United States", None).unwrap();
        assert_eq!(r.iso2.as_deref(), Some("US"));
        assert_eq!(r.matched_on.as_deref(), Some("UNITED STATES"));
    }

    #[test]
    fn test_pattern_region_stops_window_search() {
        // "Mexico" and "Wales" are aliases, but here they are tails of regions
        assert!(run(pattern, "Santa Fe, New Mexico", None).is_none());
        assert!(run(pattern, "Sydney, New South Wales", None).is_none());
    }

    #[test]
    fn test_region_any_window() {
        let r = run(region, "Born in Texas", None).unwrap();
        assert_eq!(r.iso2.as_deref(), Some("US"));
        assert_eq!(r.confidence, REGION_CONFIDENCE);
        assert_eq!(r.matched_on.as_deref(), Some("TEXAS"));
        assert_eq!(iso(&run(region, "Santa Fe, New Mexico", None)), Some("US"));
        assert_eq!(iso(&run(region, "Sydney, New South Wales", None)), Some("AU"));
    }

    #[test]
    fn test_region_prefers_trailing_segment() {
        assert_eq!(iso(&run(region, "Victoria, British Columbia", None)), Some("CA"));
    }

    #[test]
    fn test_historical_needs_year_in_window() {
        let r = run(historical, "East Germany", Some(1975)).unwrap();
        assert_eq!(r.iso2.as_deref(), Some("DE"));
        assert_eq!(r.confidence, HISTORICAL_CONFIDENCE);
        assert!(run(historical, "East Germany", Some(1995)).is_none());
        assert!(run(historical, "East Germany", None).is_none());
    }

    #[test]
    fn test_historical_last_segment() {
        assert_eq!(iso(&run(historical, "Saigon, South Vietnam", Some(1968))), Some("VN"));
    }

    #[test]
    fn test_trailing_punctuation_stripped_per_tier() {
        assert_eq!(iso(&run(exact, "USA.", None)), Some("US"));
        let r = run(alias, "England.", None).unwrap();
        assert_eq!(r.iso2.as_deref(), Some("GB"));
        assert_eq!(r.matched_on.as_deref(), Some("ENGLAND"));
        let r = run(region, "Born in Texas.", None).unwrap();
        assert_eq!(r.iso2.as_deref(), Some("US"));
        assert_eq!(r.matched_on.as_deref(), Some("TEXAS"));
        assert_eq!(iso(&run(pattern, "Lyon, France;", None)), Some("FR"));
        assert_eq!(iso(&run(historical, "East Germany!", Some(1975))), Some("DE"));
    }

    #[test]
    fn test_dotted_alias_kept_verbatim() {
        let r = run(alias, "U.S.A.", None).unwrap();
        assert_eq!(r.iso2.as_deref(), Some("US"));
        assert_eq!(r.matched_on.as_deref(), Some("U.S.A."));
        let r = run(pattern, "Boston, U.S.", None).unwrap();
        assert_eq!(r.matched_on.as_deref(), Some("U.S."));
    }

    #[test]
    fn test_region_with_period_stops_window_search() {
        assert!(run(pattern, "Santa Fe, New Mexico.", None).is_none());
        assert_eq!(iso(&run(region, "Santa Fe, New Mexico.", None)), Some("US"));
    }

    #[test]
    fn test_trailing_code_read_as_country() {
        // US state abbreviations are not regions; a trailing code is a country code
        let r = run(pattern, "Boston, MA", None).unwrap();
        assert_eq!(r.iso2.as_deref(), Some("MA"));
        assert_eq!(r.matched_on.as_deref(), Some("MA"));
        assert_eq!(iso(&run(pattern, "Denver, CO", None)), Some("CO"));
    }

    #[test]
    fn test_preempting_match() {
        let catalog = Catalog::builtin();
        let r = preempting_match(&catalog, "Kingdom of Hawaii").unwrap();
        assert_eq!(r.method, MatchMethod::Region);
        assert!(preempting_match(&catalog, "East Germany").is_none());
        assert!(preempting_match(&catalog, "").is_none());
    }

    #[test]
    fn test_fuzzy_confidence_bounds() {
        assert_eq!(fuzzy_confidence(0, 6, 6), FUZZY_CEILING);
        assert_eq!(fuzzy_confidence(9, 6, 6), 0.0);
        assert_eq!(fuzzy_confidence(0, 0, 0), 0.0);
        assert!(fuzzy_confidence(1, 6, 6) < FUZZY_CEILING);
    }

    #[test]
    fn test_fuzzy_typo() {
        let r = run(fuzzy, "Germny", None).unwrap();
        assert_eq!(r.iso2.as_deref(), Some("DE"));
        assert_eq!(r.method, MatchMethod::Fuzzy);
        assert!(r.confidence >= FUZZY_FLOOR && r.confidence < PATTERN_CONFIDENCE);
        assert_eq!(r.matched_on.as_deref(), Some("GERMANY"));
    }

    #[test]
    fn test_fuzzy_alternatives_ordered_and_distinct() {
        let r = run(fuzzy, "Austrai", None).unwrap();
        assert!(r.alternatives.len() <= 3);
        let mut prev = r.confidence;
        for alt in &r.alternatives {
            assert!(alt.confidence <= prev);
            assert!(alt.confidence >= FUZZY_FLOOR);
            assert_ne!(Some(alt.iso2.as_str()), r.iso2.as_deref());
            assert!(alt.reason.starts_with("edit distance "));
            prev = alt.confidence;
        }
    }

    #[test]
    fn test_fuzzy_rejects_nonsense() {
        assert!(run(fuzzy, "XYZ123", None).is_none());
    }
}
