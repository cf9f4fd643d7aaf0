use crate::{feedback, lexical, pacing, scoring};
use assessor_core::{AssessmentResult, ReferenceAnswer};

/// Score one transcript against its reference answer.
///
/// `speech_duration_secs` must already be resolved (positive), and
/// `semantic_score` comes from an external similarity provider on the
/// [0, 100] scale. Callers skip recordings that have no reference answer.
pub fn assess(
    source_id: &str,
    transcript: &str,
    speech_duration_secs: f64,
    reference: &ReferenceAnswer,
    semantic_score: f64,
) -> AssessmentResult {
    let findings = lexical::analyze(transcript, &reference.keywords);
    let word_count = pacing::count_words(transcript);
    let wpm = pacing::compute_wpm(word_count, speech_duration_secs);
    let final_score = scoring::aggregate(semantic_score, findings.keyword_score);
    let feedback = feedback::synthesize(
        wpm,
        semantic_score,
        &findings.missed_keywords,
        findings.filler_count,
    );

    tracing::debug!(
        source_id = %source_id,
        reference_id = %reference.id,
        word_count,
        wpm,
        semantic_score,
        keyword_score = findings.keyword_score,
        final_score,
        fillers = %findings
            .filler_details
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        "assessed response"
    );

    AssessmentResult {
        source_id: source_id.to_string(),
        final_score: scoring::round_to_tenth(final_score),
        wpm: wpm as u32,
        filler_count: findings.filler_count,
        transcript: transcript.to_string(),
        missed_keywords: findings.missed_keywords.join(", "),
        feedback,
    }
}
