//! Domain extraction from downloaded list content.

use std::collections::BTreeSet;

/// Lines starting with this marker are comments
pub const COMMENT_MARKER: char = '#';

/// Extract the distinct domain entries from a text blob.
///
/// Each line is trimmed; blank lines and lines starting with `#` are dropped.
/// Remaining lines are kept verbatim (no hostname validation, no stripping of
/// a leading address), deduplicated case-sensitively and returned in
/// ascending lexicographic order.
pub fn extract_domains(blob: &str) -> Vec<String> {
    blob.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
