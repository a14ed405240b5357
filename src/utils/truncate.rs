//! Character-bounded string truncation.

/// Truncates a string to at most `max_chars` characters, respecting UTF-8
/// boundaries.
pub fn truncate_chars(mut s: String, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => {
            s.truncate(idx);
            s
        }
        None => s,
    }
}
