use mind_config::GeneralConfig;

use crate::cli::GlobalFlags;

/// Number of rows `journal list` shows.
///
/// `journal list --limit` beats the global `--limit`, which beats
/// `general.default_limit`. A limit of 0 shows every entry.
#[must_use]
pub fn listing_limit(local: Option<u32>, flags: &GlobalFlags, general: &GeneralConfig) -> usize {
    match local.or(flags.limit).unwrap_or(general.default_limit) {
        0 => usize::MAX,
        limit => usize::try_from(limit).unwrap_or(usize::MAX),
    }
}
