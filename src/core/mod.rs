// Core algorithm exports
pub mod criteria;
pub mod fees;
pub mod matcher;

pub use criteria::{matches_address, matches_board, matches_fees};
pub use fees::{FeeRange, FeeParseError, lower_bound};
pub use matcher::SchoolMatcher;
