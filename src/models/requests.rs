use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::SchoolQuery;

/// Request body for the school search endpoint
///
/// Every field is optional; a missing field places no constraint on that
/// criterion.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SearchSchoolsRequest {
    #[validate(length(max = 100))]
    #[serde(default)]
    pub addresses: Vec<String>,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub boards: Vec<String>,
    #[validate(length(max = 64))]
    #[serde(default)]
    pub fees: Option<String>,
}

impl From<SearchSchoolsRequest> for SchoolQuery {
    fn from(req: SearchSchoolsRequest) -> Self {
        SchoolQuery {
            addresses: req.addresses,
            boards: req.boards,
            fees: req.fees.unwrap_or_default(),
        }
    }
}
