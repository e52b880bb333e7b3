//! Mood labels, the mood → score table, and the journal entry record.
//!
//! Scores run 1 (worst) to 5 (best) and are fixed at write time. A label that
//! is not in the table scores [`DEFAULT_SCORE`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Score assigned to a mood label that is not in the table.
pub const DEFAULT_SCORE: u8 = 3;

// ---------------------------------------------------------------------------
// Mood
// ---------------------------------------------------------------------------

/// The fixed set of moods a journal entry can record.
///
/// Serialized with the capitalized label (`"Happy"`), which is also the form
/// written to the mood log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Calm,
    #[default]
    Okay,
    Worried,
    Anxious,
    Stressed,
    Sad,
    Angry,
    Frustrated,
    Tired,
}

impl Mood {
    /// All moods in display order.
    pub const ALL: [Self; 10] = [
        Self::Happy,
        Self::Calm,
        Self::Okay,
        Self::Worried,
        Self::Anxious,
        Self::Stressed,
        Self::Sad,
        Self::Angry,
        Self::Frustrated,
        Self::Tired,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Calm => "Calm",
            Self::Okay => "Okay",
            Self::Worried => "Worried",
            Self::Anxious => "Anxious",
            Self::Stressed => "Stressed",
            Self::Sad => "Sad",
            Self::Angry => "Angry",
            Self::Frustrated => "Frustrated",
            Self::Tired => "Tired",
        }
    }

    /// Score for this mood, higher is better.
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn score(self) -> u8 {
        match self {
            Self::Happy => 5,
            Self::Calm => 4,
            Self::Okay => 3,
            Self::Worried => 2,
            Self::Anxious => 2,
            Self::Stressed => 1,
            Self::Sad => 1,
            Self::Angry => 1,
            Self::Frustrated => 1,
            Self::Tired => 2,
        }
    }

    /// Exact, case-sensitive lookup of a stored label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mood| mood.as_str() == label)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive parse for user input. Stored labels go through
/// [`Mood::from_label`] instead.
impl FromStr for Mood {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|mood| mood.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::InvalidMood {
                label: s.to_string(),
                expected: Self::ALL
                    .into_iter()
                    .map(Self::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Score for a raw mood label, falling back to [`DEFAULT_SCORE`].
#[must_use]
pub fn score_for_label(label: &str) -> u8 {
    Mood::from_label(label).map_or(DEFAULT_SCORE, Mood::score)
}

// ---------------------------------------------------------------------------
// MoodEntry
// ---------------------------------------------------------------------------

/// One journaled record.
///
/// `mood` is kept as the raw label so entries written with an unknown label
/// still carry it through to the log. `score` is computed once in
/// [`MoodEntry::new`] and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: String,
    pub mood: String,
    pub note: String,
    pub score: u8,
}

impl MoodEntry {
    #[must_use]
    pub fn new(date: impl Into<String>, mood: impl Into<String>, note: impl Into<String>) -> Self {
        let mood = mood.into();
        let score = score_for_label(&mood);
        Self {
            date: date.into(),
            mood,
            note: note.into(),
            score,
        }
    }
}
