use crate::scoring::semantic_from_cosine;
use crate::similarity::SimilarityScorer;
use assessor_core::{SimilarityError, SimilarityRequest};
use async_trait::async_trait;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreScale {
    /// Values are already on the [0, 100] scale.
    #[default]
    Percent,
    /// Raw cosine similarity in [-1, 1].
    Cosine,
}

/// Similarity scores computed ahead of time, keyed by recording id.
///
/// ```toml
/// [similarity]
/// provider = "table"
///
/// [similarity.options]
/// scale = "cosine"
///
/// [similarity.options.scores]
/// interview_question_1 = 0.85
/// ```
pub struct TableScorer {
    scores: HashMap<String, f64>,
    scale: ScoreScale,
}

impl TableScorer {
    pub fn new() -> Self {
        Self {
            scores: HashMap::new(),
            scale: ScoreScale::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl Default for TableScorer {
    fn default() -> Self {
        Self::new()
    }
}

fn as_number(value: &toml::Value) -> Option<f64> {
    value
        .as_float()
        .or_else(|| value.as_integer().map(|i| i as f64))
}

#[async_trait]
impl SimilarityScorer for TableScorer {
    fn name(&self) -> &str {
        "table"
    }

    async fn initialize(&mut self, config: toml::Value) -> Result<(), SimilarityError> {
        self.scale = match config.get("scale").and_then(|v| v.as_str()) {
            None | Some("percent") => ScoreScale::Percent,
            Some("cosine") => ScoreScale::Cosine,
            Some(other) => {
                return Err(SimilarityError::InitializationFailed(format!(
                    "unknown scale '{other}', expected 'percent' or 'cosine'"
                )));
            }
        };

        let table = config
            .get("scores")
            .and_then(|v| v.as_table())
            .ok_or_else(|| {
                SimilarityError::InitializationFailed(
                    "missing 'scores' table in table config".to_string(),
                )
            })?;

        let mut scores = HashMap::with_capacity(table.len());
        for (id, value) in table {
            let score = as_number(value).ok_or_else(|| {
                SimilarityError::InitializationFailed(format!("score for '{id}' is not a number"))
            })?;
            scores.insert(id.clone(), score);
        }
        self.scores = scores;

        tracing::info!(
            entries = self.scores.len(),
            scale = ?self.scale,
            "TableScorer initialized"
        );
        Ok(())
    }

    async fn score(&self, request: &SimilarityRequest<'_>) -> Result<f64, SimilarityError> {
        let raw = self
            .scores
            .get(request.source_id)
            .copied()
            .ok_or_else(|| SimilarityError::Missing(request.source_id.to_string()))?;
        Ok(match self.scale {
            ScoreScale::Percent => raw,
            ScoreScale::Cosine => semantic_from_cosine(raw),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(scale: Option<&str>, entries: &[(&str, toml::Value)]) -> toml::Value {
        let mut scores = toml::map::Map::new();
        for (id, v) in entries {
            scores.insert(id.to_string(), v.clone());
        }
        let mut t = toml::map::Map::new();
        if let Some(scale) = scale {
            t.insert("scale".to_string(), toml::Value::String(scale.to_string()));
        }
        t.insert("scores".to_string(), toml::Value::Table(scores));
        toml::Value::Table(t)
    }

    fn request(source_id: &str) -> SimilarityRequest<'_> {
        SimilarityRequest {
            source_id,
            candidate: "",
            reference: "",
        }
    }

    #[tokio::test]
    async fn test_table_scorer_percent_lookup() {
        let mut scorer = TableScorer::new();
        scorer
            .initialize(config(
                None,
                &[
                    ("q1", toml::Value::Float(85.0)),
                    ("q2", toml::Value::Integer(40)),
                ],
            ))
            .await
            .unwrap();
        assert_eq!(scorer.len(), 2);
        assert_eq!(scorer.score(&request("q1")).await.unwrap(), 85.0);
        assert_eq!(scorer.score(&request("q2")).await.unwrap(), 40.0);
    }

    #[tokio::test]
    async fn test_table_scorer_cosine_scale_is_unclamped() {
        let mut scorer = TableScorer::new();
        scorer
            .initialize(config(
                Some("cosine"),
                &[
                    ("q1", toml::Value::Float(0.5)),
                    ("q2", toml::Value::Float(-0.25)),
                ],
            ))
            .await
            .unwrap();
        assert_eq!(scorer.score(&request("q1")).await.unwrap(), 50.0);
        assert_eq!(scorer.score(&request("q2")).await.unwrap(), -25.0);
    }

    #[tokio::test]
    async fn test_table_scorer_missing_entry() {
        let mut scorer = TableScorer::new();
        scorer
            .initialize(config(None, &[("q1", toml::Value::Float(1.0))]))
            .await
            .unwrap();
        match scorer.score(&request("q9")).await {
            Err(SimilarityError::Missing(id)) => assert_eq!(id, "q9"),
            other => panic!("expected Missing, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_table_scorer_requires_scores_table() {
        let mut scorer = TableScorer::new();
        let result = scorer
            .initialize(toml::Value::Table(Default::default()))
            .await;
        match result {
            Err(SimilarityError::InitializationFailed(msg)) => assert!(msg.contains("scores")),
            _ => panic!("expected InitializationFailed"),
        }
    }

    #[tokio::test]
    async fn test_table_scorer_rejects_unknown_scale() {
        let mut scorer = TableScorer::new();
        let result = scorer.initialize(config(Some("logit"), &[])).await;
        assert!(matches!(result, Err(SimilarityError::InitializationFailed(_))));
    }

    #[tokio::test]
    async fn test_table_scorer_rejects_non_numeric_score() {
        let mut scorer = TableScorer::new();
        let result = scorer
            .initialize(config(None, &[("q1", toml::Value::Boolean(true))]))
            .await;
        assert!(matches!(result, Err(SimilarityError::InitializationFailed(_))));
    }
}
