//! Rule-based feedback. Every rule is evaluated, in a fixed order:
//! pacing, keyword coverage, filler usage, semantic relevance.

use std::fmt;

pub const SLOW_WPM: f64 = 110.0;
pub const FAST_WPM: f64 = 160.0;
pub const MAX_FILLERS: usize = 4;
pub const MIN_SEMANTIC_SCORE: f64 = 60.0;

#[derive(Debug, Clone, PartialEq)]
pub enum FeedbackItem {
    TooSlow,
    TooFast,
    GoodPacing,
    MissedConcepts(Vec<String>),
    AllCovered,
    TooManyFillers,
    LowRelevance,
}

impl fmt::Display for FeedbackItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackItem::TooSlow => {
                f.write_str("Speaking pace is too slow, try to bring more energy.")
            }
            FeedbackItem::TooFast => {
                f.write_str("Speaking pace is too fast, slow down a little to stay clear.")
            }
            FeedbackItem::GoodPacing => f.write_str("Speaking pace is good."),
            FeedbackItem::MissedConcepts(missed) => write!(
                f,
                "You did not mention these concepts: '{}'.",
                missed.join(", ")
            ),
            FeedbackItem::AllCovered => f.write_str("All key points were covered."),
            FeedbackItem::TooManyFillers => {
                f.write_str("Cut down on 'um/uh/like' to sound more professional.")
            }
            FeedbackItem::LowRelevance => {
                f.write_str("The answer is not very relevant to the ideal answer.")
            }
        }
    }
}

pub fn feedback_items(
    wpm: f64,
    semantic_score: f64,
    missed_keywords: &[String],
    filler_count: usize,
) -> Vec<FeedbackItem> {
    let mut items = Vec::with_capacity(4);

    items.push(if wpm < SLOW_WPM {
        FeedbackItem::TooSlow
    } else if wpm > FAST_WPM {
        FeedbackItem::TooFast
    } else {
        FeedbackItem::GoodPacing
    });

    items.push(if missed_keywords.is_empty() {
        FeedbackItem::AllCovered
    } else {
        FeedbackItem::MissedConcepts(missed_keywords.to_vec())
    });

    if filler_count > MAX_FILLERS {
        items.push(FeedbackItem::TooManyFillers);
    }

    if semantic_score < MIN_SEMANTIC_SCORE {
        items.push(FeedbackItem::LowRelevance);
    }

    items
}

/// Render the feedback cascade as a single space-separated string.
pub fn synthesize(
    wpm: f64,
    semantic_score: f64,
    missed_keywords: &[String],
    filler_count: usize,
) -> String {
    feedback_items(wpm, semantic_score, missed_keywords, filler_count)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
