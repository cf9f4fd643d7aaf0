use assessor_core::{SimilarityError, SimilarityRequest};
use async_trait::async_trait;

/// Semantic similarity between a candidate transcript and the ideal answer,
/// on the [0, 100] scale.
#[async_trait]
pub trait SimilarityScorer: Send + Sync {
    fn name(&self) -> &str;
    async fn initialize(&mut self, config: toml::Value) -> Result<(), SimilarityError>;
    async fn score(&self, request: &SimilarityRequest<'_>) -> Result<f64, SimilarityError>;
}
