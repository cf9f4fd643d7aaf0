use crate::assess::assess;
use crate::similarity::SimilarityScorer;
use crate::transcriber::Transcriber;
use assessor_core::{AssessmentResult, ReferenceSet, SimilarityRequest};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{mpsc, Semaphore};

/// Counts of what happened to each recording in a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub assessed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.assessed + self.skipped + self.failed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Assessed,
    Skipped,
    Failed,
}

#[derive(Clone)]
struct Shared {
    references: Arc<ReferenceSet>,
    transcriber: Arc<dyn Transcriber>,
    scorer: Arc<dyn SimilarityScorer>,
    result_tx: mpsc::UnboundedSender<AssessmentResult>,
}

/// Runs the assessment pipeline over a batch of candidate recordings and
/// publishes each result on a channel.
pub struct AssessmentHost {
    shared: Shared,
    result_rx: Option<mpsc::UnboundedReceiver<AssessmentResult>>,
}

impl AssessmentHost {
    pub fn new(
        references: ReferenceSet,
        transcriber: Box<dyn Transcriber>,
        scorer: Box<dyn SimilarityScorer>,
    ) -> Self {
        let (result_tx, result_rx) = mpsc::unbounded_channel();
        Self {
            shared: Shared {
                references: Arc::new(references),
                transcriber: Arc::from(transcriber),
                scorer: Arc::from(scorer),
                result_tx,
            },
            result_rx: Some(result_rx),
        }
    }

    pub fn take_result_receiver(&mut self) -> Option<mpsc::UnboundedReceiver<AssessmentResult>> {
        self.result_rx.take()
    }

    /// Assess every input, at most `concurrency` at a time. Recordings
    /// without a reference answer are skipped; provider failures are logged
    /// and counted without stopping the batch.
    pub async fn run(&self, inputs: Vec<PathBuf>, concurrency: usize) -> BatchSummary {
        let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
        let mut handles = Vec::with_capacity(inputs.len());

        for source in inputs {
            let permit = match Arc::clone(&semaphore).acquire_owned().await {
                Ok(permit) => permit,
                Err(e) => {
                    tracing::error!("batch semaphore closed: {e}");
                    break;
                }
            };
            let shared = self.shared.clone();
            handles.push(tokio::spawn(async move {
                let _permit = permit;
                process_one(&source, &shared).await
            }));
        }

        let mut summary = BatchSummary::default();
        for handle in handles {
            match handle.await {
                Ok(Outcome::Assessed) => summary.assessed += 1,
                Ok(Outcome::Skipped) => summary.skipped += 1,
                Ok(Outcome::Failed) => summary.failed += 1,
                Err(e) => {
                    tracing::error!("assessment task panicked: {e}");
                    summary.failed += 1;
                }
            }
        }

        tracing::info!(
            assessed = summary.assessed,
            skipped = summary.skipped,
            failed = summary.failed,
            "batch complete"
        );
        summary
    }

    /// Shut down the providers. Dropping the host closes the result channel.
    pub async fn shutdown(self) {
        if let Err(e) = self.shared.transcriber.shutdown().await {
            tracing::warn!(
                transcriber = %self.shared.transcriber.name(),
                "transcriber shutdown failed: {e}"
            );
        }
    }
}

/// Reference lookup key: the file name without its extension.
pub fn reference_key(source: &Path) -> Option<String> {
    source
        .file_stem()
        .map(|stem| stem.to_string_lossy().trim().to_string())
}

async fn process_one(source: &Path, shared: &Shared) -> Outcome {
    let source_id = source
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| source.display().to_string());

    let Some(key) = reference_key(source) else {
        tracing::warn!(source_id = %source_id, "skipping: cannot derive a reference id");
        return Outcome::Skipped;
    };
    let Some(reference) = shared.references.get(&key) else {
        tracing::warn!(
            source_id = %source_id,
            "skipping: no reference answer for id '{key}'"
        );
        return Outcome::Skipped;
    };

    let transcription = match shared.transcriber.transcribe(source).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(
                source_id = %source_id,
                transcriber = %shared.transcriber.name(),
                "transcription failed: {e}"
            );
            return Outcome::Failed;
        }
    };

    let duration = transcription.resolved_duration();
    if transcription.speech_end() != Some(duration) {
        tracing::debug!(
            source_id = %source_id,
            speech_end = ?transcription.speech_end(),
            "no usable segment timing, using fallback duration"
        );
    }

    let request = SimilarityRequest {
        source_id: &key,
        candidate: &transcription.text,
        reference: &reference.ideal_answer,
    };
    let semantic_score = match shared.scorer.score(&request).await {
        Ok(score) => score,
        Err(e) => {
            tracing::error!(
                source_id = %source_id,
                scorer = %shared.scorer.name(),
                "similarity scoring failed: {e}"
            );
            return Outcome::Failed;
        }
    };
    if !(0.0..=100.0).contains(&semantic_score) {
        tracing::warn!(
            source_id = %source_id,
            semantic_score,
            "semantic score outside [0, 100], final score is not clamped"
        );
    }

    let result = assess(
        &source_id,
        &transcription.text,
        duration,
        reference,
        semantic_score,
    );
    tracing::info!(
        source_id = %source_id,
        final_score = result.final_score,
        wpm = result.wpm,
        fillers = result.filler_count,
        "assessed"
    );

    if shared.result_tx.send(result).is_err() {
        tracing::debug!(source_id = %source_id, "result receiver dropped");
    }
    Outcome::Assessed
}
