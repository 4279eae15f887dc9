//! Place-string normalization: folding, comma segments, token windows.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Longest token window any tier will try.
pub const MAX_WINDOW: usize = 4;

// A token is a run of anything that is not whitespace or list punctuation.
// Hyphens, dots and apostrophes stay inside tokens ("Noord-Holland", "U.S.A.").
static RE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[^\s,;:()\[\]"]+"#).unwrap());

/// Fold a string into its comparison key: strip diacritics, uppercase,
/// collapse whitespace runs to a single space.
pub fn fold(s: &str) -> String {
    let stripped: String = s.nfd().filter(|c| !is_combining_mark(*c)).collect();
    stripped
        .to_uppercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

const TRAILING_PUNCT: &[char] = &['.', ';', '!'];

/// Lookup forms of a folded key: the key itself, then the key without
/// trailing sentence punctuation when that differs. Dotted keys such as
/// "U.S.A." are therefore always tried verbatim first.
pub fn key_forms(key: &str) -> impl Iterator<Item = &str> {
    let stripped = key.trim_end_matches(TRAILING_PUNCT).trim_end();
    let extra = (!stripped.is_empty() && stripped != key).then_some(stripped);
    std::iter::once(key).chain(extra)
}

// ── Types ────────────────────────────────────────────────────────────

/// One comma-separated part of a place string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub folded: String,
    pub tokens: Vec<String>,
}

impl Segment {
    fn new(raw: &str) -> Self {
        let folded = fold(raw);
        let tokens = RE_TOKEN
            .find_iter(&folded)
            .map(|m| m.as_str().to_string())
            .collect();
        Segment { folded, tokens }
    }

    /// Windows that end at the last token, longest first.
    pub fn trailing_windows(&self, max: usize) -> Vec<String> {
        let n = self.tokens.len();
        (1..=max.min(n))
            .rev()
            .map(|len| self.tokens[n - len..].join(" "))
            .collect()
    }

    /// Every contiguous window, longest first, right to left within a length.
    pub fn all_windows(&self, max: usize) -> Vec<String> {
        let n = self.tokens.len();
        let mut out = Vec::new();
        for len in (1..=max.min(n)).rev() {
            for start in (0..=n - len).rev() {
                out.push(self.tokens[start..start + len].join(" "));
            }
        }
        out
    }
}

/// A non-empty place string ready for the tiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPlace {
    /// The whole input, folded
    pub folded: String,
    /// Non-empty comma segments in input order
    pub segments: Vec<Segment>,
}

impl NormalizedPlace {
    pub fn last_segment(&self) -> Option<&Segment> {
        self.segments.last()
    }

    pub fn is_hierarchical(&self) -> bool {
        self.segments.len() >= 2
    }
}

/// Result of normalizing raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    /// Empty or whitespace-only input; no tier runs.
    Empty,
    Place(NormalizedPlace),
}

/// Normalize a raw place string. Never fails.
pub fn normalize(input: &str) -> Normalized {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Normalized::Empty;
    }

    let segments = trimmed
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Segment::new)
        .collect();

    Normalized::Place(NormalizedPlace {
        folded: fold(trimmed),
        segments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(s: &str) -> NormalizedPlace {
        match normalize(s) {
            Normalized::Place(p) => p,
            Normalized::Empty => panic!("unexpected empty for {s:?}"),
        }
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(normalize(""), Normalized::Empty);
        assert_eq!(normalize("   \t\n"), Normalized::Empty);
    }

    #[test]
    fn test_fold_case_and_diacritics() {
        assert_eq!(fold("Österreich"), "OSTERREICH");
        assert_eq!(fold("  côte   d'Ivoire "), "COTE D'IVOIRE");
        assert_eq!(fold("Preußen"), "PREUSSEN");
    }

    #[test]
    fn test_segments() {
        let p = place(" Paris ,  France ");
        assert_eq!(p.folded, "PARIS , FRANCE");
        let segs: Vec<&str> = p.segments.iter().map(|s| s.folded.as_str()).collect();
        assert_eq!(segs, vec!["PARIS", "FRANCE"]);
        assert!(p.is_hierarchical());
    }

    #[test]
    fn test_empty_segments_dropped() {
        let p = place("Boston,, Massachusetts,");
        assert_eq!(p.segments.len(), 2);
        assert_eq!(p.last_segment().unwrap().folded, "MASSACHUSETTS");
    }

    #[test]
    fn test_single_segment() {
        let p = place("Born in Texas");
        assert_eq!(p.segments.len(), 1);
        assert!(!p.is_hierarchical());
        assert_eq!(p.segments[0].tokens, vec!["BORN", "IN", "TEXAS"]);
    }

    #[test]
    fn test_trailing_windows_longest_first() {
        let p = place("Sydney, New South Wales");
        let seg = p.last_segment().unwrap();
        assert_eq!(
            seg.trailing_windows(MAX_WINDOW),
            vec!["NEW SOUTH WALES", "SOUTH WALES", "WALES"]
        );
    }

    #[test]
    fn test_trailing_windows_capped() {
        let p = place("a b c d e f");
        let w = p.segments[0].trailing_windows(MAX_WINDOW);
        assert_eq!(w.first().unwrap(), "C D E F");
        assert_eq!(w.len(), 4);
    }

    #[test]
    fn test_all_windows_order() {
        let p = place("born in texas");
        assert_eq!(
            p.segments[0].all_windows(MAX_WINDOW),
            vec!["BORN IN TEXAS", "IN TEXAS", "BORN IN", "TEXAS", "IN", "BORN"]
        );
    }

    #[test]
    fn test_key_forms_strip_trailing_punctuation() {
        assert_eq!(key_forms("TEXAS.").collect::<Vec<_>>(), vec!["TEXAS.", "TEXAS"]);
        assert_eq!(key_forms("ENGLAND!;").collect::<Vec<_>>(), vec!["ENGLAND!;", "ENGLAND"]);
        assert_eq!(key_forms("U.S.A.").collect::<Vec<_>>(), vec!["U.S.A.", "U.S.A"]);
        assert_eq!(key_forms("FRANCE").collect::<Vec<_>>(), vec!["FRANCE"]);
        assert_eq!(key_forms("...").collect::<Vec<_>>(), vec!["..."]);
    }

    #[test]
    fn test_trailing_period_stays_on_last_token() {
        let p = place("Born in Texas.");
        assert_eq!(p.segments[0].tokens.last().unwrap(), "TEXAS.");
    }

    #[test]
    fn test_non_ascii_accepted() {
        let p = place("Москва, Россия");
        assert_eq!(p.segments.len(), 2);
        assert_eq!(p.last_segment().unwrap().folded, "РОССИЯ");
    }
}
