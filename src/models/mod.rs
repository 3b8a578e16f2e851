// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{School, SchoolQuery, ScoredSchool, MatchedAttribute, SearchOutcome, NO_MATCHES_MESSAGE};
pub use requests::SearchSchoolsRequest;
pub use responses::{NoMatchesResponse, HealthResponse, ErrorResponse};
