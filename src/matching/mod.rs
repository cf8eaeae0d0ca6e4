//! Approximate name matching used for search suggestions.

use thiserror::Error;

pub mod distance;
pub mod search;
pub mod similarity;

pub use distance::distance;
pub use search::SearchService;
pub use similarity::{SimilarityMatcher, similarity};

#[derive(Debug, Error, PartialEq)]
pub enum MatchError {
    #[error("threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),
    #[error("input of {len} characters exceeds the comparison limit of {max}")]
    InputTooLong { len: usize, max: usize },
}

pub type MatchResult<T> = Result<T, MatchError>;
