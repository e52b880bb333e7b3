use chrono::NaiveDate;
use mind_core::Mood;

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}' (expected YYYY-MM-DD): {error}"))
}

/// Parse a mood label, ignoring case.
pub fn parse_mood(raw: &str) -> anyhow::Result<Mood> {
    raw.parse::<Mood>().map_err(anyhow::Error::from)
}
