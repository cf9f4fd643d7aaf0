//! Weighted combination of semantic similarity and keyword coverage.
//!
//! Inputs are expected in [0, 100]. Nothing here clamps: a similarity
//! provider that yields negative cosine values produces a negative score.

pub const SEMANTIC_WEIGHT: f64 = 0.6;
pub const KEYWORD_WEIGHT: f64 = 0.4;

pub fn aggregate(semantic_score: f64, keyword_score: f64) -> f64 {
    semantic_score * SEMANTIC_WEIGHT + keyword_score * KEYWORD_WEIGHT
}

/// Convert a raw cosine similarity in [-1, 1] to the percent scale.
pub fn semantic_from_cosine(cosine: f64) -> f64 {
    cosine * 100.0
}

/// Round to one decimal place for reporting.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
