use crate::sink_trait::ReportSink;
use assessor_core::{AssessmentResult, ReportError};
use async_trait::async_trait;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

const TSV_HEADER: &str =
    "source_id\tfinal_score\twpm\tfiller_count\ttranscript\tmissed_keywords\tfeedback";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    JsonLines,
    Tsv,
}

impl ReportFormat {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "jsonl" | "json" => Some(ReportFormat::JsonLines),
            "tsv" => Some(ReportFormat::Tsv),
            _ => None,
        }
    }
}

/// Appends one line per result to a file.
pub struct FileSink {
    output_path: Mutex<Option<PathBuf>>,
    format: ReportFormat,
    write_count: AtomicUsize,
}

impl FileSink {
    pub fn new() -> Self {
        Self {
            output_path: Mutex::new(None),
            format: ReportFormat::default(),
            write_count: AtomicUsize::new(0),
        }
    }

    pub fn write_count(&self) -> usize {
        self.write_count.load(Ordering::Relaxed)
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }
}

impl Default for FileSink {
    fn default() -> Self {
        Self::new()
    }
}

fn tsv_field(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}

fn tsv_row(result: &AssessmentResult) -> String {
    format!(
        "{}\t{:.1}\t{}\t{}\t{}\t{}\t{}",
        tsv_field(&result.source_id),
        result.final_score,
        result.wpm,
        result.filler_count,
        tsv_field(&result.transcript),
        tsv_field(&result.missed_keywords),
        tsv_field(&result.feedback),
    )
}

#[async_trait]
impl ReportSink for FileSink {
    fn name(&self) -> &str {
        "file"
    }

    async fn initialize(&mut self, config: toml::Value) -> Result<(), ReportError> {
        let path = config
            .get("path")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                ReportError::InitializationFailed("missing 'path' in config".to_string())
            })?;

        if let Some(format) = config.get("format") {
            let name = format.as_str().unwrap_or_default();
            self.format = ReportFormat::parse(name).ok_or_else(|| {
                ReportError::InitializationFailed(format!(
                    "unknown format '{name}', expected 'jsonl' or 'tsv'"
                ))
            })?;
        }

        let mut guard = self
            .output_path
            .lock()
            .map_err(|_| ReportError::InitializationFailed("sink lock poisoned".to_string()))?;
        *guard = Some(PathBuf::from(path));
        Ok(())
    }

    async fn write_result(&self, result: &AssessmentResult) -> Result<(), ReportError> {
        let guard = self
            .output_path
            .lock()
            .map_err(|_| ReportError::WriteFailed("sink lock poisoned".to_string()))?;
        let path = guard
            .as_ref()
            .ok_or_else(|| ReportError::WriteFailed("not initialized".to_string()))?;

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| ReportError::WriteFailed(e.to_string()))?;

        let line = match self.format {
            ReportFormat::JsonLines => serde_json::to_string(result)
                .map_err(|e| ReportError::WriteFailed(e.to_string()))?,
            ReportFormat::Tsv => {
                let is_empty = file
                    .metadata()
                    .map(|m| m.len() == 0)
                    .map_err(|e| ReportError::WriteFailed(e.to_string()))?;
                if is_empty {
                    writeln!(file, "{TSV_HEADER}")
                        .map_err(|e| ReportError::WriteFailed(e.to_string()))?;
                }
                tsv_row(result)
            }
        };

        writeln!(file, "{line}").map_err(|e| ReportError::WriteFailed(e.to_string()))?;

        self.write_count.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn is_healthy(&self) -> bool {
        self.output_path
            .lock()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    async fn shutdown(&self) -> Result<(), ReportError> {
        tracing::debug!(written = self.write_count(), "FileSink shut down");
        Ok(())
    }
}
