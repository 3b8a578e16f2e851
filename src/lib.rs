//! Beginwise Schools - school directory search service
//!
//! Scores schools from a static directory against a parent's preferred
//! localities, boards and fee range, and exposes the distinct values of
//! each attribute for building search filters.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{SchoolMatcher, FeeRange, FeeParseError};
pub use models::{School, SchoolQuery, ScoredSchool, MatchedAttribute, SearchOutcome, SearchSchoolsRequest};
pub use services::{Catalog, CatalogError};
