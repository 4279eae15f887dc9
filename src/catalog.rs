//! The Country Catalog: immutable reference records plus the flat lookup
//! index every tier reads from.
//!
//! Keys are folded with [`fold`] once at construction. Current states feed
//! the code, name/alias, region and fuzzy-candidate indexes; defunct states
//! feed only the historical index, so a defunct name is never matched
//! without a year.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

use country_types::MatchMethod;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::catalog_data::{COUNTRIES, HISTORICAL};
use crate::normalize::fold;
use crate::tiers::preempting_match;

// ── Types ────────────────────────────────────────────────────────────

/// Inclusive validity window of a defunct state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalRange {
    pub valid_from: i32,
    pub valid_to: i32,
    /// The state's own ISO code, if it had one (DD, SU, YU, …)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub former_code: Option<String>,
}

impl HistoricalRange {
    pub fn contains(&self, year: i32) -> bool {
        self.valid_from <= year && year <= self.valid_to
    }
}

/// One catalog entry. For defunct states `iso2`/`iso3` are those of the
/// present-day country the state resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub iso2: String,
    pub iso3: String,
    pub canonical_name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historical: Option<HistoricalRange>,
}

impl CountryRecord {
    pub fn is_historical(&self) -> bool {
        self.historical.is_some()
    }

    /// Canonical name followed by aliases, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.canonical_name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("cannot read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid {kind} code {code:?} in record {name:?}")]
    InvalidCode {
        kind: &'static str,
        code: String,
        name: String,
    },
    #[error("code {code} is claimed by both {first} and {second}")]
    DuplicateCode {
        code: String,
        first: String,
        second: String,
    },
    #[error("{kind} {key:?} is claimed by both {first} and {second}")]
    DuplicateKey {
        kind: &'static str,
        key: String,
        first: String,
        second: String,
    },
    #[error("region {key:?} of {region_owner} collides with a name or code of {other}")]
    RegionConflict {
        key: String,
        region_owner: String,
        other: String,
    },
    #[error("historical name {name:?} is always resolved first by the {method} tier via {matched_on:?}")]
    ShadowedHistorical {
        name: String,
        method: MatchMethod,
        matched_on: String,
    },
    #[error("historical record {name:?} has valid_from {valid_from} after valid_to {valid_to}")]
    InvalidRange {
        name: String,
        valid_from: i32,
        valid_to: i32,
    },
}

/// A canonical name or alias the fuzzy tier compares against.
#[derive(Debug, Clone)]
pub struct FuzzyCandidate {
    pub key: String,
    pub char_len: usize,
    pub record: usize,
}

/// Overlay document accepted by [`Catalog::with_overlay_json`].
#[derive(Debug, Deserialize)]
struct OverlayFile {
    countries: Vec<CountryRecord>,
}

// ── Catalog ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<CountryRecord>,
    codes: HashMap<String, usize>,
    names: HashMap<String, usize>,
    regions: HashMap<String, usize>,
    historical: HashMap<String, Vec<usize>>,
    fuzzy: Vec<FuzzyCandidate>,
}

impl Catalog {
    /// The embedded catalog. Collisions, if any crept into the table, are
    /// logged and resolved first-wins.
    pub fn builtin() -> Self {
        let (catalog, problems) = Self::build(builtin_records());
        for p in &problems {
            warn!("embedded catalog: {p}");
        }
        info!(
            records = catalog.records.len(),
            keys = catalog.names.len() + catalog.regions.len(),
            "built embedded country catalog"
        );
        catalog
    }

    /// Build a catalog from explicit records, rejecting any ambiguity.
    pub fn from_records(records: Vec<CountryRecord>) -> Result<Self, CatalogError> {
        let (catalog, problems) = Self::build(records);
        match problems.into_iter().next() {
            Some(first) => Err(first),
            None => Ok(catalog),
        }
    }

    /// Merge an overlay document into a copy of this catalog.
    ///
    /// A current-state record whose `iso2` already exists extends that
    /// record's aliases and regions; anything else is appended.
    pub fn with_overlay_json(&self, json: &str) -> Result<Self, CatalogError> {
        let overlay: OverlayFile = serde_json::from_str(json)?;
        let mut records = self.records.clone();
        let (mut extended, mut added) = (0usize, 0usize);

        for rec in overlay.countries {
            let existing = if rec.is_historical() {
                None
            } else {
                records
                    .iter_mut()
                    .find(|r| !r.is_historical() && r.iso2.eq_ignore_ascii_case(&rec.iso2))
            };
            match existing {
                Some(target) => {
                    target.aliases.extend(rec.aliases);
                    target.regions.extend(rec.regions);
                    extended += 1;
                }
                None => {
                    records.push(rec);
                    added += 1;
                }
            }
        }

        info!(extended, added, "merged catalog overlay");
        Self::from_records(records)
    }

    pub fn with_overlay_file(&self, path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.with_overlay_json(&json)
    }

    /// Index `records`, first-wins on every collision. Each collision is
    /// reported in the returned problem list.
    fn build(records: Vec<CountryRecord>) -> (Self, Vec<CatalogError>) {
        let mut problems: Vec<CatalogError> = Vec::new();
        let mut catalog = Catalog {
            records,
            codes: HashMap::new(),
            names: HashMap::new(),
            regions: HashMap::new(),
            historical: HashMap::new(),
            fuzzy: Vec::new(),
        };

        // Codes first: exact lookups and the alias/region checks depend on them.
        for (idx, rec) in catalog.records.iter().enumerate() {
            for (kind, code, len) in [("ISO2", &rec.iso2, 2), ("ISO3", &rec.iso3, 3)] {
                if code.len() != len || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                    problems.push(CatalogError::InvalidCode {
                        kind,
                        code: code.clone(),
                        name: rec.canonical_name.clone(),
                    });
                    continue;
                }
                if rec.is_historical() {
                    continue;
                }
                match catalog.codes.entry(code.to_ascii_uppercase()) {
                    Entry::Vacant(v) => {
                        v.insert(idx);
                    }
                    Entry::Occupied(o) if *o.get() != idx => {
                        problems.push(CatalogError::DuplicateCode {
                            code: o.key().clone(),
                            first: catalog.records[*o.get()].iso2.clone(),
                            second: rec.iso2.clone(),
                        });
                    }
                    Entry::Occupied(_) => {}
                }
            }
        }

        for (idx, rec) in catalog.records.iter().enumerate() {
            if let Some(range) = &rec.historical {
                if range.valid_from > range.valid_to {
                    problems.push(CatalogError::InvalidRange {
                        name: rec.canonical_name.clone(),
                        valid_from: range.valid_from,
                        valid_to: range.valid_to,
                    });
                }
                for name in rec.names() {
                    let key = fold(name);
                    let owners = catalog.historical.entry(key.clone()).or_default();
                    if owners.contains(&idx) {
                        continue;
                    }
                    // A defunct name may be reused by another state only in a disjoint window.
                    let overlapping = owners.iter().copied().find(|&other| {
                        catalog.records[other]
                            .historical
                            .as_ref()
                            .is_some_and(|o| o.valid_from <= range.valid_to && range.valid_from <= o.valid_to)
                    });
                    match overlapping {
                        Some(first) => problems.push(CatalogError::DuplicateKey {
                            kind: "historical name",
                            key,
                            first: catalog.records[first].canonical_name.clone(),
                            second: rec.canonical_name.clone(),
                        }),
                        None => owners.push(idx),
                    }
                }
                continue;
            }

            for name in rec.names() {
                let key = fold(name);
                if key.is_empty() {
                    continue;
                }
                // The exact tier runs first, so such an alias could never match.
                if let Some(&owner) = catalog.codes.get(&key) {
                    problems.push(CatalogError::DuplicateKey {
                        kind: "alias shadowed by code",
                        key,
                        first: catalog.records[owner].iso2.clone(),
                        second: rec.iso2.clone(),
                    });
                    continue;
                }
                match catalog.names.entry(key) {
                    Entry::Vacant(v) => {
                        catalog.fuzzy.push(FuzzyCandidate {
                            char_len: v.key().chars().count(),
                            key: v.key().clone(),
                            record: idx,
                        });
                        v.insert(idx);
                    }
                    Entry::Occupied(o) if *o.get() != idx => {
                        problems.push(CatalogError::DuplicateKey {
                            kind: "alias",
                            key: o.key().clone(),
                            first: catalog.records[*o.get()].iso2.clone(),
                            second: rec.iso2.clone(),
                        });
                    }
                    Entry::Occupied(_) => {}
                }
            }
        }

        for (idx, rec) in catalog.records.iter().enumerate() {
            if rec.is_historical() {
                continue;
            }
            for region in &rec.regions {
                let key = fold(region);
                if key.is_empty() {
                    continue;
                }
                let clash = catalog.names.get(&key).or_else(|| catalog.codes.get(&key));
                if let Some(&other) = clash {
                    problems.push(CatalogError::RegionConflict {
                        key,
                        region_owner: rec.iso2.clone(),
                        other: catalog.records[other].iso2.clone(),
                    });
                    continue;
                }
                match catalog.regions.entry(key) {
                    Entry::Vacant(v) => {
                        v.insert(idx);
                    }
                    Entry::Occupied(o) if *o.get() != idx => {
                        problems.push(CatalogError::DuplicateKey {
                            kind: "region",
                            key: o.key().clone(),
                            first: catalog.records[*o.get()].iso2.clone(),
                            second: rec.iso2.clone(),
                        });
                    }
                    Entry::Occupied(_) => {}
                }
            }
        }

        // Needs the finished index: the earlier tiers run against it.
        let shadowed = catalog.shadowed_historical_names();
        problems.extend(shadowed);

        (catalog, problems)
    }

    fn shadowed_historical_names(&self) -> Vec<CatalogError> {
        let mut out = Vec::new();
        for rec in self.records.iter().filter(|r| r.is_historical()) {
            for name in rec.names() {
                if let Some(m) = preempting_match(self, name) {
                    out.push(CatalogError::ShadowedHistorical {
                        name: name.to_string(),
                        method: m.method,
                        matched_on: m.matched_on.unwrap_or_default(),
                    });
                }
            }
        }
        out
    }

    // ── Lookups ──────────────────────────────────────────────────────

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The current-state record holding this ISO2 code.
    pub fn by_iso2(&self, iso2: &str) -> Option<&CountryRecord> {
        let idx = *self.codes.get(&iso2.to_ascii_uppercase())?;
        let rec = &self.records[idx];
        rec.iso2.eq_ignore_ascii_case(iso2).then_some(rec)
    }

    /// Exact ISO2/ISO3 lookup on a folded key.
    pub fn code(&self, key: &str) -> Option<&CountryRecord> {
        let n = key.chars().count();
        if n != 2 && n != 3 {
            return None;
        }
        self.codes.get(key).map(|&i| &self.records[i])
    }

    /// Whole-key canonical-name or alias lookup on a folded key.
    pub fn alias(&self, key: &str) -> Option<&CountryRecord> {
        self.names.get(key).map(|&i| &self.records[i])
    }

    pub fn region(&self, key: &str) -> Option<&CountryRecord> {
        self.regions.get(key).map(|&i| &self.records[i])
    }

    pub fn is_region(&self, key: &str) -> bool {
        self.regions.contains_key(key)
    }

    /// The first defunct state named `key` whose window contains `year`.
    pub fn historical(&self, key: &str, year: i32) -> Option<&CountryRecord> {
        self.historical.get(key)?.iter().map(|&i| &self.records[i]).find(|r| {
            r.historical
                .as_ref()
                .is_some_and(|range| range.contains(year))
        })
    }

    /// Fuzzy candidates in catalog order.
    pub fn fuzzy_candidates(&self) -> &[FuzzyCandidate] {
        &self.fuzzy
    }

    pub fn record(&self, idx: usize) -> &CountryRecord {
        &self.records[idx]
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The embedded table as owned records, current states first.
pub fn builtin_records() -> Vec<CountryRecord> {
    let current = COUNTRIES.iter().map(|c| CountryRecord {
        iso2: c.iso2.to_string(),
        iso3: c.iso3.to_string(),
        canonical_name: c.name.to_string(),
        aliases: c.aliases.iter().map(|s| s.to_string()).collect(),
        regions: c.regions.iter().map(|s| s.to_string()).collect(),
        historical: None,
    });
    let defunct = HISTORICAL.iter().map(|h| CountryRecord {
        iso2: h.iso2.to_string(),
        iso3: h.iso3.to_string(),
        canonical_name: h.name.to_string(),
        aliases: h.aliases.iter().map(|s| s.to_string()).collect(),
        regions: Vec::new(),
        historical: Some(HistoricalRange {
            valid_from: h.valid_from,
            valid_to: h.valid_to,
            former_code: h.former_code.map(str::to_string),
        }),
    });
    current.chain(defunct).collect()
}
