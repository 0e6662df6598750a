//! Free-text and date-phrase splitting for matched commands.
//!
//! The split is independent of whether date resolution later succeeds: a
//! present-but-unparseable date phrase never blanks out the free text.

/// Split a command remainder into `(free_text, candidate_date_phrase)`.
///
/// Leading whitespace and a conversational "me to " prefix are dropped
/// ("remind me to do this" and "remind do this" read the same). The first
/// `:` separates free text from the candidate date phrase; whitespace
/// around the colon is irrelevant, so " : ", ": " and ":" are equivalent.
/// Without a colon the whole trimmed remainder is free text and no date
/// phrase is attempted.
pub fn split_payload(rest: &str) -> (&str, Option<&str>) {
    let rest = strip_me_to(rest.trim_start());
    match rest.find(':') {
        Some(idx) => {
            let text = rest[..idx].trim();
            let phrase = rest[idx + 1..].trim();
            (text, Some(phrase))
        }
        None => (rest.trim(), None),
    }
}

/// Strip a leading "me to " (case-insensitive).
fn strip_me_to(s: &str) -> &str {
    const PREFIX: &str = "me to ";
    match s.get(..PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(PREFIX) => &s[PREFIX.len()..],
        _ => s,
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
