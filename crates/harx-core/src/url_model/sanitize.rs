//! Forbidden-character handling for derived filenames.
//!
//! Two passes over the same character set, with different treatment:
//! the query string gets underscores (keeps it readable), the final
//! composed name gets outright deletion. The asymmetry is load-bearing
//! for output compatibility; see `derive_output_filename`.

/// Characters that are invalid in filenames on at least one major OS.
const FORBIDDEN: &[char] = &['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

fn is_forbidden(c: char) -> bool {
    FORBIDDEN.contains(&c)
}

/// Replaces each forbidden character with `_`. Applied to the query
/// string before it is appended to the base name.
pub fn replace_forbidden(s: &str) -> String {
    s.chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect()
}

/// Deletes every forbidden character. Applied to the whole composed
/// name as the last sanitization step.
pub fn strip_forbidden(s: &str) -> String {
    s.chars().filter(|c| !is_forbidden(*c)).collect()
}
