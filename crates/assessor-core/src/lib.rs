pub mod config;
pub mod error;
pub mod reference;
pub mod types;

pub use config::{AppConfig, ProviderConfig, ReportSinkConfig};
pub use error::{ConfigError, ReferenceError, ReportError, SimilarityError, TranscriptionError};
pub use reference::{split_keywords, ReferenceSet};
pub use types::{
    AssessmentResult, FillerHit, LexicalFindings, ReferenceAnswer, SimilarityRequest,
    SpeechSegment, TranscriptionResult, FALLBACK_DURATION_SECS,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(start: f64, end: f64) -> SpeechSegment {
        SpeechSegment { start, end }
    }

    #[test]
    fn test_transcription_duration_is_last_segment_end() {
        let result = TranscriptionResult {
            text: "hello world".to_string(),
            segments: vec![segment(0.0, 4.5), segment(4.5, 20.0)],
        };
        assert_eq!(result.speech_end(), Some(20.0));
        assert_eq!(result.resolved_duration(), 20.0);
    }

    #[test]
    fn test_transcription_without_segments_falls_back() {
        let result = TranscriptionResult {
            text: "hello".to_string(),
            segments: Vec::new(),
        };
        assert_eq!(result.speech_end(), None);
        assert_eq!(result.resolved_duration(), FALLBACK_DURATION_SECS);
    }

    #[test]
    fn test_transcription_zero_end_falls_back() {
        let result = TranscriptionResult {
            text: String::new(),
            segments: vec![segment(0.0, 0.0)],
        };
        assert_eq!(result.speech_end(), Some(0.0));
        assert_eq!(result.resolved_duration(), FALLBACK_DURATION_SECS);
    }

    #[test]
    fn test_filler_hit_display() {
        let hit = FillerHit { term: "um", count: 3 };
        assert_eq!(hit.to_string(), "um:3");
    }

    #[test]
    fn test_assessment_result_fields() {
        let result = AssessmentResult {
            source_id: "q1.webm".to_string(),
            final_score: 91.0,
            wpm: 63,
            filler_count: 4,
            transcript: "hello".to_string(),
            missed_keywords: String::new(),
            feedback: "ok".to_string(),
        };
        let cloned = result.clone();
        assert_eq!(result, cloned);
        assert_eq!(cloned.wpm, 63);
    }
}
