//! Keyword-based risk classification of free text.
//!
//! Text is trimmed and lowercased, then matched by plain substring containment
//! against three fixed lists. There is no tokenization: `"mad"` hits inside
//! `"made"`, and `"stressed"` counts for both `"stress"` and `"stressed"`.
//!
//! ```text
//! high-distress phrase present ─────────────► high
//! neg >= 2 && neg >= pos ───────────────────► negative
//! pos >= 2 && pos >  neg ───────────────────► positive
//! neg >= 1 && neg >= pos ───────────────────► negative
//! pos >= 1 && pos >  neg ───────────────────► positive
//! otherwise ────────────────────────────────► neutral
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Phrases that indicate acute self-harm risk. Any single match wins.
pub const HIGH_DISTRESS_PHRASES: &[&str] = &[
    "i want to die",
    "want to die",
    "kill myself",
    "end my life",
    "suicide",
    "take my life",
    "don't want to live",
    "dont want to live",
    "i can't go on",
    "i cant go on",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "sad",
    "depressed",
    "depressing",
    "hopeless",
    "stressed",
    "stress",
    "overwhelmed",
    "anxious",
    "anxiety",
    "angry",
    "mad",
    "furious",
    "frustrated",
    "worried",
    "panic",
    "tired",
    "exhausted",
    "burnt out",
    "burned out",
    "lonely",
];

pub const POSITIVE_WORDS: &[&str] = &[
    "happy",
    "good",
    "great",
    "calm",
    "relaxed",
    "fine",
    "better",
    "excited",
    "motivated",
    "hopeful",
    "grateful",
];

// ---------------------------------------------------------------------------
// RiskCategory
// ---------------------------------------------------------------------------

/// Result of classifying a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    High,
    Negative,
    Positive,
    Neutral,
}

impl RiskCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Negative => "negative",
            Self::Positive => "positive",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// Category plus the keywords that produced it.
///
/// When a high-distress phrase matches, keyword counting is skipped and both
/// hit lists stay empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub category: RiskCategory,
    pub distress_phrase: Option<&'static str>,
    pub negative_hits: Vec<&'static str>,
    pub positive_hits: Vec<&'static str>,
}

impl Analysis {
    #[must_use]
    pub fn negative_count(&self) -> usize {
        self.negative_hits.len()
    }

    #[must_use]
    pub fn positive_count(&self) -> usize {
        self.positive_hits.len()
    }
}

/// Classify `text` into a [`RiskCategory`].
#[must_use]
pub fn classify(text: &str) -> RiskCategory {
    analyze(text).category
}

/// Classify `text` and report which keywords matched.
#[must_use]
pub fn analyze(text: &str) -> Analysis {
    let normalized = normalize(text);

    if let Some(phrase) = first_match(&normalized, HIGH_DISTRESS_PHRASES) {
        tracing::debug!(category = "high", "distress phrase matched");
        return Analysis {
            category: RiskCategory::High,
            distress_phrase: Some(phrase),
            negative_hits: Vec::new(),
            positive_hits: Vec::new(),
        };
    }

    let negative_hits = all_matches(&normalized, NEGATIVE_WORDS);
    let positive_hits = all_matches(&normalized, POSITIVE_WORDS);
    let category = decide(negative_hits.len(), positive_hits.len());

    tracing::debug!(
        %category,
        neg_hits = negative_hits.len(),
        pos_hits = positive_hits.len(),
        "classified text"
    );

    Analysis {
        category,
        distress_phrase: None,
        negative_hits,
        positive_hits,
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

fn first_match(text: &str, needles: &'static [&'static str]) -> Option<&'static str> {
    needles.iter().copied().find(|needle| text.contains(needle))
}

fn all_matches(text: &str, needles: &'static [&'static str]) -> Vec<&'static str> {
    needles
        .iter()
        .copied()
        .filter(|needle| text.contains(needle))
        .collect()
}

/// Tie-break ladder. Order matters: the `>= 2` rungs are checked before `>= 1`.
const fn decide(neg: usize, pos: usize) -> RiskCategory {
    if neg >= 2 && neg >= pos {
        RiskCategory::Negative
    } else if pos >= 2 && pos > neg {
        RiskCategory::Positive
    } else if neg >= 1 && neg >= pos {
        RiskCategory::Negative
    } else if pos >= 1 && pos > neg {
        RiskCategory::Positive
    } else {
        RiskCategory::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_prefers_negative_on_ties() {
        assert_eq!(decide(2, 2), RiskCategory::Negative);
        assert_eq!(decide(1, 1), RiskCategory::Negative);
    }

    #[test]
    fn ladder_needs_strict_majority_for_positive() {
        assert_eq!(decide(1, 2), RiskCategory::Positive);
        assert_eq!(decide(0, 1), RiskCategory::Positive);
        assert_eq!(decide(3, 4), RiskCategory::Positive);
    }

    #[test]
    fn ladder_defaults_to_neutral() {
        assert_eq!(decide(0, 0), RiskCategory::Neutral);
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  I Feel SAD \n"), "i feel sad");
    }

    #[test]
    fn keyword_lists_are_lowercase() {
        for word in HIGH_DISTRESS_PHRASES
            .iter()
            .chain(NEGATIVE_WORDS)
            .chain(POSITIVE_WORDS)
        {
            assert_eq!(*word, word.to_lowercase());
        }
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_string(&RiskCategory::Negative).expect("serialize");
        assert_eq!(json, "\"negative\"");
    }
}
