use chrono::{DateTime, NaiveDate, NaiveDateTime};
use mind_core::{DEFAULT_SCORE, MoodEntry};
use serde::{Deserialize, Serialize};

/// Column names in file order.
pub const COLUMNS: [&str; 4] = ["date", "mood", "note", "score"];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];
// 2^63 is exactly representable; anything at or beyond it would saturate.
const I64_MAX_F64: f64 = 9_223_372_036_854_775_808.0;
const I64_MIN_F64: f64 = -9_223_372_036_854_775_808.0;

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// One row of the mood log exactly as stored.
///
/// All fields are text. A hand-edited file can hold anything in `score` or
/// `date`; use [`MoodRecord::score_value`] and [`MoodRecord::parsed_date`] to
/// read them with fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodRecord {
    pub date: String,
    pub mood: String,
    pub note: String,
    pub score: String,
}

impl MoodRecord {
    /// Score as an integer. Decimal text truncates toward zero; anything that
    /// is not a finite number inside the `i64` range reads as the default score.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn score_value(&self) -> i64 {
        let raw = self.score.trim();
        raw.parse::<i64>()
            .ok()
            .or_else(|| {
                raw.parse::<f64>()
                    .ok()
                    .map(f64::trunc)
                    .filter(|value| (I64_MIN_F64..I64_MAX_F64).contains(value))
                    .map(|value| value as i64)
            })
            .unwrap_or_else(|| i64::from(DEFAULT_SCORE))
    }

    /// Calendar date of the entry, if the stored text parses as one.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        if raw.is_empty() {
            return None;
        }

        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
            .or_else(|| {
                DateTime::parse_from_rfc3339(raw)
                    .ok()
                    .map(|dt| dt.date_naive())
            })
            .or_else(|| {
                DATETIME_FORMATS
                    .iter()
                    .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
                    .map(|dt| dt.date())
            })
    }

    pub(crate) fn fields(&self) -> [&str; 4] {
        [
            self.date.as_str(),
            self.mood.as_str(),
            self.note.as_str(),
            self.score.as_str(),
        ]
    }
}

impl From<&MoodEntry> for MoodRecord {
    fn from(entry: &MoodEntry) -> Self {
        Self {
            date: entry.date.clone(),
            mood: entry.mood.clone(),
            note: entry.note.clone(),
            score: entry.score.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_score(score: &str) -> MoodRecord {
        MoodRecord {
            score: score.to_string(),
            ..MoodRecord::default()
        }
    }

    fn with_date(date: &str) -> MoodRecord {
        MoodRecord {
            date: date.to_string(),
            ..MoodRecord::default()
        }
    }

    #[test]
    fn score_parses_integers_and_decimals() {
        assert_eq!(with_score("5").score_value(), 5);
        assert_eq!(with_score(" 2 ").score_value(), 2);
        assert_eq!(with_score("4.0").score_value(), 4);
        assert_eq!(with_score("1.9").score_value(), 1);
    }

    #[test]
    fn unparseable_score_defaults_to_three() {
        assert_eq!(with_score("").score_value(), 3);
        assert_eq!(with_score("great").score_value(), 3);
        assert_eq!(with_score("NaN").score_value(), 3);
        assert_eq!(with_score("inf").score_value(), 3);
    }

    #[test]
    fn out_of_range_decimal_score_defaults_to_three() {
        assert_eq!(with_score("1e300").score_value(), 3);
        assert_eq!(with_score("-1e19").score_value(), 3);
        assert_eq!(with_score("9223372036854775807").score_value(), i64::MAX);
    }

    #[test]
    fn parses_iso_and_common_date_forms() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9);
        assert_eq!(with_date("2024-03-09").parsed_date(), expected);
        assert_eq!(with_date("2024/03/09").parsed_date(), expected);
        assert_eq!(with_date("2024-03-09 21:15:00").parsed_date(), expected);
        assert_eq!(with_date("2024-03-09T21:15:00+08:00").parsed_date(), expected);
    }

    #[test]
    fn bad_dates_do_not_parse() {
        assert_eq!(with_date("").parsed_date(), None);
        assert_eq!(with_date("yesterday").parsed_date(), None);
        assert_eq!(with_date("2024-02-30").parsed_date(), None);
    }

    #[test]
    fn entry_converts_with_integer_score_text() {
        let entry = MoodEntry::new("2024-01-01", "Calm", "walk");
        let record = MoodRecord::from(&entry);
        assert_eq!(record.score, "4");
        assert_eq!(record.fields(), ["2024-01-01", "Calm", "walk", "4"]);
    }
}
