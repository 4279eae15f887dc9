//! Resolve free-text genealogical place names to ISO-3166 countries.
//!
//! ```no_run
//! use place_country::CountryMatcher;
//!
//! let matcher = CountryMatcher::default();
//! let r = matcher.match_country("Paris, France", None);
//! assert_eq!(r.iso2.as_deref(), Some("FR"));
//! ```

pub mod catalog;
mod catalog_data;
pub mod matcher;
pub mod normalize;
pub mod scanner;
pub mod stats;
pub mod tiers;

pub use catalog::{Catalog, CatalogError, CountryRecord, HistoricalRange};
pub use country_types::{
    Alternative, ConfidenceBuckets, MatchMethod, MatchResult, MatcherStatistics, MethodCounts,
    PlaceWithCountry, UnresolvedLocation,
};
pub use matcher::{CountryMatcher, MatcherConfig, resolve};
