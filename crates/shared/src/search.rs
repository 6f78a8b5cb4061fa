//! Free-text search helpers.

/// Escapes LIKE/ILIKE metacharacters in a user-supplied search term.
///
/// `%` and `_` are wildcards in SQL pattern matching; a raw term containing
/// them would match unintended rows.
pub fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Builds a `%term%` ILIKE pattern from a raw search term.
///
/// The term is trimmed and escaped; an empty or whitespace-only term yields
/// `None` so callers can skip the filter entirely.
pub fn like_pattern(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("%{}%", escape_like(trimmed)))
    }
}
