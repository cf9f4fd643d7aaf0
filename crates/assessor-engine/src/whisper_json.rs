use crate::transcriber::Transcriber;
use assessor_core::{SpeechSegment, TranscriptionError, TranscriptionResult};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct WhisperOutput {
    text: String,
    #[serde(default)]
    segments: Vec<WhisperSegment>,
}

#[derive(Debug, Deserialize)]
struct WhisperSegment {
    start: f64,
    end: f64,
}

/// Reads the JSON written by `whisper --output_format json`.
///
/// Without a `dir` option the transcript is expected next to the recording
/// (`talk.webm` → `talk.json`), or at the source path itself when it already
/// ends in `.json`. With `dir`, it is `<dir>/<stem>.json`.
pub struct WhisperJsonTranscriber {
    dir: Option<PathBuf>,
}

impl WhisperJsonTranscriber {
    pub fn new() -> Self {
        Self { dir: None }
    }

    fn transcript_path(&self, source: &Path) -> Result<PathBuf, TranscriptionError> {
        if let Some(dir) = &self.dir {
            let stem = source.file_stem().ok_or_else(|| {
                TranscriptionError::NotFound(format!("no file stem in {}", source.display()))
            })?;
            let mut name = stem.to_os_string();
            name.push(".json");
            return Ok(dir.join(name));
        }
        if source.extension().is_some_and(|ext| ext == "json") {
            Ok(source.to_path_buf())
        } else {
            Ok(source.with_extension("json"))
        }
    }
}

impl Default for WhisperJsonTranscriber {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_output(content: &str, path: &Path) -> Result<TranscriptionResult, TranscriptionError> {
    let output: WhisperOutput = serde_json::from_str(content)
        .map_err(|e| TranscriptionError::Malformed(format!("{}: {e}", path.display())))?;

    let mut segments = Vec::with_capacity(output.segments.len());
    let mut previous_end = 0.0_f64;
    for (i, seg) in output.segments.iter().enumerate() {
        if !seg.start.is_finite() || !seg.end.is_finite() || seg.start > seg.end {
            return Err(TranscriptionError::Malformed(format!(
                "{}: segment {i} has invalid bounds {}..{}",
                path.display(),
                seg.start,
                seg.end
            )));
        }
        if seg.end < previous_end {
            return Err(TranscriptionError::Malformed(format!(
                "{}: segment {i} ends before the previous segment",
                path.display()
            )));
        }
        previous_end = seg.end;
        segments.push(SpeechSegment {
            start: seg.start,
            end: seg.end,
        });
    }

    Ok(TranscriptionResult {
        text: output.text.trim().to_string(),
        segments,
    })
}

#[async_trait]
impl Transcriber for WhisperJsonTranscriber {
    fn name(&self) -> &str {
        "whisper-json"
    }

    async fn initialize(&mut self, config: toml::Value) -> Result<(), TranscriptionError> {
        self.dir = match config.get("dir") {
            Some(value) => {
                let dir = value.as_str().ok_or_else(|| {
                    TranscriptionError::InitializationFailed(
                        "'dir' in whisper-json config must be a string".to_string(),
                    )
                })?;
                Some(PathBuf::from(dir))
            }
            None => None,
        };

        tracing::info!(dir = ?self.dir, "WhisperJsonTranscriber initialized");
        Ok(())
    }

    async fn transcribe(&self, source: &Path) -> Result<TranscriptionResult, TranscriptionError> {
        let path = self.transcript_path(source)?;
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(TranscriptionError::NotFound(path.display().to_string()));
            }
            Err(e) => {
                return Err(TranscriptionError::Unreadable(format!(
                    "{}: {e}",
                    path.display()
                )));
            }
        };
        let result = parse_output(&content, &path)?;
        tracing::debug!(
            path = %path.display(),
            segments = result.segments.len(),
            "loaded whisper transcript"
        );
        Ok(result)
    }

    async fn shutdown(&self) -> Result<(), TranscriptionError> {
        Ok(())
    }
}
