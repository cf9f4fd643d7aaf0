use crate::similarity::SimilarityScorer;
use assessor_core::{SimilarityError, SimilarityRequest};
use async_trait::async_trait;

/// Gives every response the same similarity score (`score`, default 0).
pub struct ConstantScorer {
    score: f64,
}

impl ConstantScorer {
    pub fn new() -> Self {
        Self { score: 0.0 }
    }

    pub fn with_score(score: f64) -> Self {
        Self { score }
    }
}

impl Default for ConstantScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SimilarityScorer for ConstantScorer {
    fn name(&self) -> &str {
        "constant"
    }

    async fn initialize(&mut self, config: toml::Value) -> Result<(), SimilarityError> {
        if let Some(value) = config.get("score") {
            self.score = value
                .as_float()
                .or_else(|| value.as_integer().map(|i| i as f64))
                .ok_or_else(|| {
                    SimilarityError::InitializationFailed(
                        "'score' in constant config must be a number".to_string(),
                    )
                })?;
        }
        tracing::info!(score = self.score, "ConstantScorer initialized");
        Ok(())
    }

    async fn score(&self, _request: &SimilarityRequest<'_>) -> Result<f64, SimilarityError> {
        Ok(self.score)
    }
}
