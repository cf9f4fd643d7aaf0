use crate::sink_trait::ReportSink;
use assessor_core::{AssessmentResult, ReportError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Emits each result as a structured `tracing` event.
pub struct LogSink {
    include_transcript: bool,
    write_count: AtomicUsize,
}

impl LogSink {
    pub fn new() -> Self {
        Self {
            include_transcript: false,
            write_count: AtomicUsize::new(0),
        }
    }

    pub fn write_count(&self) -> usize {
        self.write_count.load(Ordering::Relaxed)
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportSink for LogSink {
    fn name(&self) -> &str {
        "log"
    }

    async fn initialize(&mut self, config: toml::Value) -> Result<(), ReportError> {
        if let Some(value) = config.get("include_transcript") {
            self.include_transcript = value.as_bool().ok_or_else(|| {
                ReportError::InitializationFailed(
                    "'include_transcript' must be a boolean".to_string(),
                )
            })?;
        }
        Ok(())
    }

    async fn write_result(&self, result: &AssessmentResult) -> Result<(), ReportError> {
        if self.include_transcript {
            tracing::info!(
                source_id = %result.source_id,
                final_score = result.final_score,
                wpm = result.wpm,
                fillers = result.filler_count,
                missed = %result.missed_keywords,
                transcript = %result.transcript,
                "{}",
                result.feedback
            );
        } else {
            tracing::info!(
                source_id = %result.source_id,
                final_score = result.final_score,
                wpm = result.wpm,
                fillers = result.filler_count,
                missed = %result.missed_keywords,
                "{}",
                result.feedback
            );
        }
        self.write_count.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn is_healthy(&self) -> bool {
        true
    }

    async fn shutdown(&self) -> Result<(), ReportError> {
        Ok(())
    }
}
