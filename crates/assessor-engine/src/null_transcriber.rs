use crate::transcriber::Transcriber;
use assessor_core::{TranscriptionError, TranscriptionResult};
use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns an empty transcript for every recording.
pub struct NullTranscriber {
    call_count: AtomicUsize,
}

impl NullTranscriber {
    pub fn new() -> Self {
        Self {
            call_count: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }
}

impl Default for NullTranscriber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transcriber for NullTranscriber {
    fn name(&self) -> &str {
        "null"
    }

    async fn initialize(&mut self, _config: toml::Value) -> Result<(), TranscriptionError> {
        Ok(())
    }

    async fn transcribe(&self, source: &Path) -> Result<TranscriptionResult, TranscriptionError> {
        let count = self.call_count.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::trace!("NullTranscriber call #{count} for {}", source.display());
        Ok(TranscriptionResult::default())
    }

    async fn shutdown(&self) -> Result<(), TranscriptionError> {
        Ok(())
    }
}
