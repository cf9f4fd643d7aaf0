use crate::similarity::SimilarityScorer;
use crate::transcriber::Transcriber;
use assessor_core::{SimilarityError, TranscriptionError};
use std::collections::HashMap;

pub struct ProviderRegistry {
    transcribers: HashMap<String, fn() -> Box<dyn Transcriber>>,
    scorers: HashMap<String, fn() -> Box<dyn SimilarityScorer>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            transcribers: HashMap::new(),
            scorers: HashMap::new(),
        };
        registry.register_transcriber("null", || {
            Box::new(crate::null_transcriber::NullTranscriber::new())
        });
        registry.register_transcriber("whisper-json", || {
            Box::new(crate::whisper_json::WhisperJsonTranscriber::new())
        });
        registry.register_scorer("constant", || {
            Box::new(crate::constant_scorer::ConstantScorer::new())
        });
        registry.register_scorer("table", || {
            Box::new(crate::table_scorer::TableScorer::new())
        });
        registry
    }

    pub fn register_transcriber(&mut self, name: &str, factory: fn() -> Box<dyn Transcriber>) {
        self.transcribers.insert(name.to_string(), factory);
    }

    pub fn register_scorer(&mut self, name: &str, factory: fn() -> Box<dyn SimilarityScorer>) {
        self.scorers.insert(name.to_string(), factory);
    }

    pub fn create_transcriber(&self, name: &str) -> Result<Box<dyn Transcriber>, TranscriptionError> {
        self.transcribers
            .get(name)
            .map(|f| f())
            .ok_or_else(|| TranscriptionError::ProviderNotFound(name.to_string()))
    }

    pub fn create_scorer(&self, name: &str) -> Result<Box<dyn SimilarityScorer>, SimilarityError> {
        self.scorers
            .get(name)
            .map(|f| f())
            .ok_or_else(|| SimilarityError::ProviderNotFound(name.to_string()))
    }

    /// Create a transcriber by name and initialize it with its options.
    pub async fn init_transcriber(
        &self,
        name: &str,
        config: toml::Value,
    ) -> Result<Box<dyn Transcriber>, TranscriptionError> {
        let mut transcriber = self.create_transcriber(name)?;
        transcriber.initialize(config).await?;
        Ok(transcriber)
    }

    /// Create a similarity scorer by name and initialize it with its options.
    pub async fn init_scorer(
        &self,
        name: &str,
        config: toml::Value,
    ) -> Result<Box<dyn SimilarityScorer>, SimilarityError> {
        let mut scorer = self.create_scorer(name)?;
        scorer.initialize(config).await?;
        Ok(scorer)
    }

    pub fn list_transcribers(&self) -> Vec<&str> {
        self.transcribers.keys().map(|s| s.as_str()).collect()
    }

    pub fn list_scorers(&self) -> Vec<&str> {
        self.scorers.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
