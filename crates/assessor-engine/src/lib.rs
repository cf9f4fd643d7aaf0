pub mod assess;
pub mod constant_scorer;
pub mod feedback;
pub mod host;
pub mod lexical;
pub mod null_transcriber;
pub mod pacing;
pub mod registry;
pub mod scoring;
pub mod similarity;
pub mod table_scorer;
pub mod transcriber;
pub mod whisper_json;

pub use assess::assess;
pub use constant_scorer::ConstantScorer;
pub use feedback::{feedback_items, synthesize, FeedbackItem};
pub use host::{reference_key, AssessmentHost, BatchSummary};
pub use lexical::{analyze, FILLER_WORDS};
pub use null_transcriber::NullTranscriber;
pub use pacing::{compute_wpm, count_words};
pub use registry::ProviderRegistry;
pub use scoring::{aggregate, round_to_tenth, semantic_from_cosine, KEYWORD_WEIGHT, SEMANTIC_WEIGHT};
pub use similarity::SimilarityScorer;
pub use table_scorer::{ScoreScale, TableScorer};
pub use transcriber::Transcriber;
pub use whisper_json::WhisperJsonTranscriber;
