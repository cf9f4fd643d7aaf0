/// Number of whitespace-delimited tokens in a transcript.
pub fn count_words(transcript: &str) -> usize {
    transcript.split_whitespace().count()
}

/// Words per minute. `duration_secs` must already be resolved to a positive
/// value (see `TranscriptionResult::resolved_duration`).
pub fn compute_wpm(word_count: usize, duration_secs: f64) -> f64 {
    word_count as f64 / duration_secs * 60.0
}
