//! Filler-word detection and keyword coverage over a transcript.
//!
//! Fillers only count when surrounded by whitespace on both sides, so `like`
//! inside `likely` is ignored, and so is a filler at the very start or end of
//! the transcript. Keywords use plain substring containment and may match
//! inside a longer word.

use assessor_core::{FillerHit, LexicalFindings};
use std::collections::HashSet;

pub const FILLER_WORDS: [&str; 7] = [
    "um", "uh", "like", "you know", "actually", "basically", "i mean",
];

pub fn analyze(transcript: &str, required_keywords: &[String]) -> LexicalFindings {
    let normalized = transcript.to_lowercase();

    let mut filler_count = 0;
    let mut filler_details = Vec::new();
    for term in FILLER_WORDS {
        let count = count_bounded(&normalized, term);
        if count > 0 {
            filler_count += count;
            filler_details.push(FillerHit { term, count });
        }
    }

    let mut seen = HashSet::new();
    let mut matched_keywords = Vec::new();
    let mut missed_keywords = Vec::new();
    for keyword in required_keywords {
        let needle = keyword.to_lowercase();
        if !seen.insert(needle.clone()) {
            continue;
        }
        if normalized.contains(&needle) {
            matched_keywords.push(keyword.clone());
        } else {
            missed_keywords.push(keyword.clone());
        }
    }

    let required = matched_keywords.len() + missed_keywords.len();
    let keyword_score = if required == 0 {
        100.0
    } else {
        matched_keywords.len() as f64 / required as f64 * 100.0
    };

    LexicalFindings {
        filler_count,
        filler_details,
        missed_keywords,
        matched_keywords,
        keyword_score,
    }
}

/// Count occurrences of `term` with whitespace immediately before and after.
fn count_bounded(text: &str, term: &str) -> usize {
    text.match_indices(term)
        .filter(|(start, _)| {
            let before = text[..*start].chars().next_back();
            let after = text[start + term.len()..].chars().next();
            before.is_some_and(char::is_whitespace) && after.is_some_and(char::is_whitespace)
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_filler_inside_word_not_counted() {
        let findings = analyze("it is likely to rain", &[]);
        assert_eq!(findings.filler_count, 0);
        assert!(findings.filler_details.is_empty());
    }

    #[test]
    fn test_filler_at_edges_not_counted() {
        let findings = analyze("um I think so um", &[]);
        assert_eq!(findings.filler_count, 0);
    }

    #[test]
    fn test_filler_mid_sentence_counted_case_insensitive() {
        let findings = analyze("so UM I Like this, you know, a lot", &[]);
        // "you know," is followed by a comma, not whitespace
        assert_eq!(findings.filler_count, 2);
        assert_eq!(
            findings.filler_details,
            vec![
                FillerHit { term: "um", count: 1 },
                FillerHit { term: "like", count: 1 },
            ]
        );
    }

    #[test]
    fn test_adjacent_fillers_share_whitespace() {
        let findings = analyze("well um um um okay", &[]);
        assert_eq!(findings.filler_count, 3);
    }

    #[test]
    fn test_multi_word_fillers() {
        let findings = analyze("so i mean it works you know that", &[]);
        assert_eq!(findings.filler_count, 2);
        let terms: Vec<_> = findings.filler_details.iter().map(|h| h.term).collect();
        assert_eq!(terms, vec!["you know", "i mean"]);
    }

    #[test]
    fn test_filler_details_follow_vocabulary_order() {
        let findings = analyze("a basically b um c uh d actually e", &[]);
        let rendered: Vec<_> = findings
            .filler_details
            .iter()
            .map(|h| h.to_string())
            .collect();
        assert_eq!(rendered, vec!["um:1", "uh:1", "actually:1", "basically:1"]);
    }

    #[test]
    fn test_keyword_substring_match() {
        let findings = analyze("Our Systems learn from data quickly", &keywords(&["system", "learn from data"]));
        assert_eq!(findings.matched_keywords, keywords(&["system", "learn from data"]));
        assert!(findings.missed_keywords.is_empty());
        assert_eq!(findings.keyword_score, 100.0);
    }

    #[test]
    fn test_keyword_partial_coverage() {
        let findings = analyze(
            "labeled data is used here",
            &keywords(&["labeled data", "unlabeled", "clustering", "labels"]),
        );
        assert_eq!(findings.matched_keywords, keywords(&["labeled data"]));
        assert_eq!(
            findings.missed_keywords,
            keywords(&["unlabeled", "clustering", "labels"])
        );
        assert_eq!(findings.keyword_score, 25.0);
    }

    #[test]
    fn test_empty_keyword_set_is_full_coverage() {
        assert_eq!(analyze("anything at all", &[]).keyword_score, 100.0);
        assert_eq!(analyze("", &[]).keyword_score, 100.0);
    }

    #[test]
    fn test_duplicate_keywords_deduplicated_case_insensitively() {
        let findings = analyze(
            "we use systems",
            &keywords(&["Systems", "systems", "data", "DATA"]),
        );
        assert_eq!(findings.matched_keywords, keywords(&["Systems"]));
        assert_eq!(findings.missed_keywords, keywords(&["data"]));
        assert_eq!(findings.keyword_score, 50.0);
    }

    #[test]
    fn test_matched_and_missed_partition_keywords() {
        let required = keywords(&["alpha", "Beta", "gamma", "ALPHA", "delta"]);
        let findings = analyze("alpha and beta only", &required);

        let mut union: Vec<String> = findings
            .matched_keywords
            .iter()
            .chain(findings.missed_keywords.iter())
            .map(|k| k.to_lowercase())
            .collect();
        union.sort();
        assert_eq!(union, vec!["alpha", "beta", "delta", "gamma"]);

        for k in &findings.matched_keywords {
            assert!(!findings
                .missed_keywords
                .iter()
                .any(|m| m.eq_ignore_ascii_case(k)));
        }
    }

    #[test]
    fn test_empty_transcript_matches_nothing() {
        let findings = analyze("", &keywords(&["x"]));
        assert_eq!(findings.filler_count, 0);
        assert!(findings.matched_keywords.is_empty());
        assert_eq!(findings.missed_keywords, keywords(&["x"]));
        assert_eq!(findings.keyword_score, 0.0);
    }
}
