//! The extraction facade: one line of chat in, structured intent out.
//!
//! Ties the registry, the payload split, and the date grammar together:
//! match command → split remainder → parse date phrase → resolve against
//! the anchor. Every failure path degrades to empty/absent fields; this
//! function never errors and never panics, whatever the input.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::command::CommandRegistry;
use crate::datetime::resolve_phrase;
use crate::payload::split_payload;

/// The structured intent extracted from one chat line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    /// Matched command keyword; empty when no registered command matched.
    pub command: String,
    /// Free-text payload; empty for commands without one.
    pub text: String,
    /// Absolute due moment, when a date phrase was present and resolved.
    /// Absent covers both "no phrase supplied" and "phrase did not parse".
    pub due: Option<DateTime<Local>>,
}

impl ExtractionResult {
    fn unmatched() -> Self {
        Self {
            command: String::new(),
            text: String::new(),
            due: None,
        }
    }
}

/// Extract command, payload, and due moment from a chat line, anchored on
/// an explicit "now".
///
/// Pure: the result depends only on `input`, the registry, and `now` (the
/// anchor only influences relative-day keywords and the year of explicit
/// dates). Two calls with the same arguments yield identical results.
pub fn extract_at(
    registry: &CommandRegistry,
    input: &str,
    now: DateTime<Local>,
) -> ExtractionResult {
    let Some(matched) = registry.match_line(input) else {
        return ExtractionResult::unmatched();
    };

    if !matched.spec.requires_payload() {
        return ExtractionResult {
            command: matched.spec.name().to_string(),
            text: String::new(),
            due: None,
        };
    }

    let (text, phrase) = split_payload(matched.rest);
    let due = phrase.and_then(|p| resolve_phrase(p, now).ok());

    ExtractionResult {
        command: matched.spec.name().to_string(),
        text: text.to_string(),
        due,
    }
}

/// Convenience wrapper anchored on the current local time.
pub fn extract(registry: &CommandRegistry, input: &str) -> ExtractionResult {
    extract_at(registry, input, Local::now())
}

// ── Tests ───────────────────────────────────────────────────────────────────
