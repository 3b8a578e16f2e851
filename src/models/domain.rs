use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Message returned when a search yields no schools
pub const NO_MATCHES_MESSAGE: &str = "No schools found matching the criteria.";

/// School record from the static directory dataset
///
/// Only `address`, `board` and `fees` are interpreted by the matcher.
/// Every other attribute is kept verbatim in `extra` and written back
/// alongside the typed fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub address: String,
    pub board: String,
    pub fees: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl School {
    pub fn new(address: impl Into<String>, board: impl Into<String>, fees: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            board: board.into(),
            fees: fees.into(),
            extra: Map::new(),
        }
    }

    /// Attach a pass-through attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Search criteria
///
/// An empty list or an empty `fees` string means "no constraint" on that
/// criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchoolQuery {
    pub addresses: Vec<String>,
    pub boards: Vec<String>,
    pub fees: String,
}

/// One of the three independent match dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchedAttribute {
    Address,
    Board,
    Fees,
}

/// A school together with the criteria it satisfied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSchool {
    #[serde(flatten)]
    pub school: School,
    pub matched: u8,
    #[serde(rename = "matchedAttributes")]
    pub matched_attributes: Vec<MatchedAttribute>,
}

/// Result of a search
///
/// `NoMatches` is not a failure; it tells the caller to render an empty
/// state.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Matches(Vec<ScoredSchool>),
    NoMatches { message: String },
}

impl SearchOutcome {
    pub fn no_matches() -> Self {
        SearchOutcome::NoMatches {
            message: NO_MATCHES_MESSAGE.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SearchOutcome::NoMatches { .. })
    }

    /// Scored schools, empty for `NoMatches`
    pub fn schools(&self) -> &[ScoredSchool] {
        match self {
            SearchOutcome::Matches(schools) => schools,
            SearchOutcome::NoMatches { .. } => &[],
        }
    }
}
