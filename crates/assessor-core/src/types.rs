use serde::Serialize;
use std::fmt;

/// Duration used when a transcription carries no usable timing.
pub const FALLBACK_DURATION_SECS: f64 = 1.0;

/// The ideal answer and required concepts for one interview question.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceAnswer {
    pub id: String,
    pub ideal_answer: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeechSegment {
    pub start: f64,
    pub end: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranscriptionResult {
    pub text: String,
    pub segments: Vec<SpeechSegment>,
}

impl TranscriptionResult {
    /// End boundary of the last segment, if there is one.
    pub fn speech_end(&self) -> Option<f64> {
        self.segments.last().map(|s| s.end)
    }

    /// Duration in seconds to use for pacing. Never zero.
    pub fn resolved_duration(&self) -> f64 {
        match self.speech_end() {
            Some(end) if end.is_finite() && end > 0.0 => end,
            _ => FALLBACK_DURATION_SECS,
        }
    }
}

/// A filler term and how many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillerHit {
    pub term: &'static str,
    pub count: usize,
}

impl fmt::Display for FillerHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.term, self.count)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LexicalFindings {
    pub filler_count: usize,
    pub filler_details: Vec<FillerHit>,
    pub missed_keywords: Vec<String>,
    pub matched_keywords: Vec<String>,
    pub keyword_score: f64,
}

/// Final per-recording record handed to the report sinks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResult {
    pub source_id: String,
    pub final_score: f64,
    pub wpm: u32,
    pub filler_count: usize,
    pub transcript: String,
    pub missed_keywords: String,
    pub feedback: String,
}

/// Input handed to a similarity provider.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityRequest<'a> {
    pub source_id: &'a str,
    pub candidate: &'a str,
    pub reference: &'a str,
}
