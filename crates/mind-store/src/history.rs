//! Read-side views over the mood log: the tabular listing, the trend series,
//! and summary statistics.
//!
//! Scores are coerced per row (unparseable → default score). Dates are kept as
//! stored for the listing; only rows whose date parses make it into the trend.

use chrono::NaiveDate;
use serde::Serialize;

use crate::record::MoodRecord;

/// A row of the tabular listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRow {
    pub date: String,
    pub mood: String,
    pub score: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A point on the mood trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodStats {
    pub entries: usize,
    pub average_score: Option<f64>,
    pub most_frequent_mood: Option<String>,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodHistory {
    /// Newest first by stored date text.
    pub rows: Vec<HistoryRow>,
    /// Oldest first by parsed date.
    pub trend: Vec<TrendPoint>,
    /// Rows left out of the trend because their date did not parse.
    pub excluded_from_trend: usize,
}

impl MoodHistory {
    #[must_use]
    pub fn from_records(records: &[MoodRecord]) -> Self {
        let mut rows: Vec<HistoryRow> = records
            .iter()
            .map(|record| HistoryRow {
                date: record.date.clone(),
                mood: record.mood.clone(),
                score: record.score_value(),
                note: Some(record.note.clone()),
            })
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));

        let mut trend: Vec<TrendPoint> = records
            .iter()
            .filter_map(|record| {
                record.parsed_date().map(|date| TrendPoint {
                    date,
                    score: record.score_value(),
                })
            })
            .collect();
        trend.sort_by_key(|point| point.date);

        let excluded_from_trend = records.len() - trend.len();
        if excluded_from_trend > 0 {
            tracing::debug!(excluded_from_trend, "some mood log dates could not be parsed");
        }

        Self {
            rows,
            trend,
            excluded_from_trend,
        }
    }

    /// Drop note text from the listing.
    #[must_use]
    pub fn without_notes(mut self) -> Self {
        for row in &mut self.rows {
            row.note = None;
        }
        self
    }

    /// Keep only the newest `limit` rows of the listing.
    #[must_use]
    pub fn truncated(mut self, limit: usize) -> Self {
        self.rows.truncate(limit);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl MoodStats {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_records(records: &[MoodRecord]) -> Self {
        let entries = records.len();
        let average_score = if entries == 0 {
            None
        } else {
            // Stored scores can be anything up to i64::MAX; sum in f64.
            let total: f64 = records
                .iter()
                .map(|record| record.score_value() as f64)
                .sum();
            Some(total / entries as f64)
        };

        let mut counts: Vec<(&str, usize)> = Vec::new();
        for record in records {
            match counts.iter_mut().find(|(mood, _)| *mood == record.mood) {
                Some((_, count)) => *count += 1,
                None => counts.push((record.mood.as_str(), 1)),
            }
        }
        // Earliest-seen mood wins a tie.
        let most_frequent_mood = counts
            .iter()
            .fold(None::<(&str, usize)>, |best, &(mood, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((mood, count)),
            })
            .map(|(mood, _)| mood.to_string());

        let dates: Vec<NaiveDate> = records.iter().filter_map(MoodRecord::parsed_date).collect();

        Self {
            entries,
            average_score,
            most_frequent_mood,
            first_date: dates.iter().min().copied(),
            last_date: dates.iter().max().copied(),
        }
    }
}
