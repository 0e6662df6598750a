//! # intent-engine
//!
//! Command and due-date extraction for a chat reminder bot.
//!
//! A single line of chat ("remind me to pay rent:9jun 10:30pm") is turned
//! into a structured intent: which registered command the line invokes,
//! the free-text payload, and an optional absolute due moment parsed from
//! a trailing natural-language date phrase.
//!
//! Matching and resolution are pure functions of the input line, the
//! registry, and an explicit "now" anchor — no system clock access inside
//! the engine, no shared mutable state. The registry is built once and can
//! be read concurrently without synchronization. Malformed input of any
//! kind degrades to empty/absent fields; nothing here panics or errors at
//! the facade.
//!
//! ```
//! use chrono::{Local, TimeZone};
//! use intent_engine::{extract_at, CommandRegistry};
//!
//! let registry = CommandRegistry::standard();
//! let now = Local.with_ymd_and_hms(2026, 4, 15, 12, 0, 0).single().unwrap();
//!
//! let res = extract_at(&registry, "remind me to pay rent:9jun 10:30pm", now);
//! assert_eq!(res.command, "remind");
//! assert_eq!(res.text, "pay rent");
//! assert!(res.due.is_some());
//! ```
//!
//! ## Modules
//!
//! - [`command`] — keyword registry and boundary-checked matching
//! - [`payload`] — free-text / date-phrase splitting
//! - [`datetime`] — the date-time grammar and anchored resolution
//! - [`extract`] — the facade tying the three together
//! - [`error`] — error types

pub mod command;
pub mod datetime;
pub mod error;
pub mod extract;
pub mod payload;

pub use command::{CommandMatch, CommandRegistry, CommandSpec};
pub use datetime::{parse_clock_time, parse_date_part, resolve_phrase, ClockTime, DatePart, DateTimePhrase};
pub use error::IntentError;
pub use extract::{extract, extract_at, ExtractionResult};
