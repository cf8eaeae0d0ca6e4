use crate::matching::distance::distance;
use crate::matching::{MatchError, MatchResult};
use crate::{MAX_COMPARE_LEN, SIMILARITY_THRESHOLD};

/// Normalized closeness of two strings in `[0, 1]`, ignoring case.
///
/// `1.0` means identical. Two empty strings are identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    score(&a, &b)
}

fn score(lower_a: &str, lower_b: &str) -> f64 {
    let max_len = lower_a.chars().count().max(lower_b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - distance(lower_a, lower_b) as f64 / max_len as f64
}

fn check_threshold(threshold: f64) -> MatchResult<f64> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(MatchError::InvalidThreshold(threshold))
    }
}

/// Decides whether two names refer to the same place.
///
/// Checks run cheapest first: absence, case-insensitive equality,
/// case-insensitive containment, and only then the edit-distance score
/// against the threshold. Inputs longer than `max_len` characters are
/// refused before the edit-distance stage.
#[derive(Clone, Debug, PartialEq)]
pub struct SimilarityMatcher {
    threshold: f64,
    max_len: usize,
}

impl Default for SimilarityMatcher {
    fn default() -> Self {
        Self {
            threshold: SIMILARITY_THRESHOLD,
            max_len: MAX_COMPARE_LEN,
        }
    }
}

impl SimilarityMatcher {
    pub fn new(threshold: f64, max_len: usize) -> MatchResult<Self> {
        Ok(Self {
            threshold: check_threshold(threshold)?,
            max_len,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Rejects a single input that could never reach the fuzzy stage.
    pub fn check_len(&self, value: &str) -> MatchResult<()> {
        let len = value.chars().count();
        if len > self.max_len {
            return Err(MatchError::InputTooLong {
                len,
                max: self.max_len,
            });
        }
        Ok(())
    }

    /// Compares `a` and `b` using the configured threshold.
    pub fn are_similar(&self, a: Option<&str>, b: Option<&str>) -> MatchResult<bool> {
        self.compare(a, b, self.threshold)
    }

    /// Compares `a` and `b` using `threshold` for this call only.
    pub fn are_similar_with(
        &self,
        a: Option<&str>,
        b: Option<&str>,
        threshold: f64,
    ) -> MatchResult<bool> {
        self.compare(a, b, check_threshold(threshold)?)
    }

    fn compare(&self, a: Option<&str>, b: Option<&str>, threshold: f64) -> MatchResult<bool> {
        // Blank values only ever match themselves.
        let (a, b) = match (a, b) {
            (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => (a, b),
            _ => return Ok(a == b),
        };

        let lower_a = a.to_lowercase();
        let lower_b = b.to_lowercase();

        if lower_a == lower_b {
            return Ok(true);
        }

        if lower_a.contains(lower_b.as_str()) || lower_b.contains(lower_a.as_str()) {
            return Ok(true);
        }

        self.check_len(&lower_a)?;
        self.check_len(&lower_b)?;

        Ok(score(&lower_a, &lower_b) >= threshold)
    }
}
