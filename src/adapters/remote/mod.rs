//! Tournament API adapters.
//!
//! Implementations of the CategorySummarySource port.

mod http_category_source;

pub use http_category_source::{HttpCategorySummarySource, TournamentApiConfig};
