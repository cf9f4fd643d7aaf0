use assessor_core::{TranscriptionError, TranscriptionResult};
use async_trait::async_trait;
use std::path::Path;

/// Source of transcripts for candidate recordings.
///
/// Implementations only hand over results produced elsewhere; they are
/// looked up by name through [`ProviderRegistry`](crate::ProviderRegistry).
#[async_trait]
pub trait Transcriber: Send + Sync {
    fn name(&self) -> &str;
    async fn initialize(&mut self, config: toml::Value) -> Result<(), TranscriptionError>;
    async fn transcribe(&self, source: &Path) -> Result<TranscriptionResult, TranscriptionError>;
    async fn shutdown(&self) -> Result<(), TranscriptionError>;
}
