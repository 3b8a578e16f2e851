use std::fmt;
use thiserror::Error;

/// Errors produced while parsing a `"<min>-<max>"` fee string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeeParseError {
    #[error("fee range is empty")]
    Empty,

    #[error("fee range '{0}' has no '-' separator")]
    MissingSeparator(String),

    #[error("invalid fee amount '{0}'")]
    InvalidAmount(String),

    #[error("fee range minimum {min} exceeds maximum {max}")]
    Inverted { min: u64, max: u64 },
}

/// Inclusive annual fee range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeeRange {
    pub min: u64,
    pub max: u64,
}

impl FeeRange {
    pub fn new(min: u64, max: u64) -> Result<Self, FeeParseError> {
        if min > max {
            return Err(FeeParseError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    /// Parse `"<min>-<max>"`, tolerating thousands separators and
    /// surrounding whitespace on either side of the dash
    pub fn parse(raw: &str) -> Result<Self, FeeParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FeeParseError::Empty);
        }

        let (min, max) = trimmed
            .split_once('-')
            .ok_or_else(|| FeeParseError::MissingSeparator(trimmed.to_string()))?;

        Self::new(parse_amount(min)?, parse_amount(max)?)
    }

    /// True if `self` lies entirely within `outer`
    ///
    /// Overlap is not enough: both bounds must be inside.
    #[inline]
    pub fn is_within(&self, outer: &FeeRange) -> bool {
        self.min >= outer.min && self.max <= outer.max
    }
}

impl fmt::Display for FeeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Lower bound of a fee bracket, used for ordering the bracket list
///
/// Only the part before the first `-` is inspected, so a bracket with a
/// broken upper bound still sorts by its minimum.
pub fn lower_bound(raw: &str) -> Option<u64> {
    let head = raw.split('-').next().unwrap_or_default();
    parse_amount(head).ok()
}

fn parse_amount(raw: &str) -> Result<u64, FeeParseError> {
    let digits: String = raw
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    if digits.is_empty() {
        return Err(FeeParseError::InvalidAmount(raw.trim().to_string()));
    }

    digits
        .parse::<u64>()
        .map_err(|_| FeeParseError::InvalidAmount(raw.trim().to_string()))
}
