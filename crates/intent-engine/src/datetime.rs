//! Natural-language due-date grammar and anchored resolution.
//!
//! Recognizes a trailing chat phrase such as "today 10:35pm", "tmr 9:00am",
//! or "9jun 10:30pm" and resolves it to an absolute local moment. The
//! grammar is two small, independently testable pieces — a date part and a
//! 12-hour clock time — combined by a resolver. All resolution is anchored
//! on an explicit "now" supplied by the caller; no function here reads the
//! system clock, which keeps everything pure and deterministic under test.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, TimeZone};

use crate::error::{IntentError, Result};

/// The date half of a phrase: a relative-day keyword or an explicit
/// day-of-month plus month abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePart {
    /// "today" — the anchor's calendar date.
    Today,
    /// "tomorrow", "tmr", or "tml" — the anchor's date plus one day.
    Tomorrow,
    /// A day immediately followed by a 3-letter month, e.g. "9jun".
    /// Calendar validity (no "31feb") is checked at resolution.
    Explicit { day: u32, month: u32 },
}

/// A 12-hour clock time already mapped to a 24-hour hour/minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    /// Hour, 0-23.
    pub hour: u32,
    /// Minute, 0-59.
    pub minute: u32,
}

/// A parsed-but-unresolved date-time phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimePhrase {
    pub date: DatePart,
    pub time: ClockTime,
}

impl DateTimePhrase {
    /// Parse a candidate phrase: a date part and a clock time separated by
    /// whitespace, nothing else. Any extra token fails the parse.
    pub fn parse(s: &str) -> Option<Self> {
        let mut tokens = s.split_whitespace();
        let date = parse_date_part(tokens.next()?)?;
        let time = parse_clock_time(tokens.next()?)?;
        if tokens.next().is_some() {
            return None;
        }
        Some(Self { date, time })
    }

    /// Resolve against an anchor "now" to an absolute local moment, at zero
    /// seconds and zero sub-second precision.
    ///
    /// An explicit day+month resolves in the anchor's year with no
    /// rollover: "9jun" typed in December still means June 9 of that same
    /// year.
    pub fn resolve(&self, now: DateTime<Local>) -> Result<DateTime<Local>> {
        let date = match self.date {
            DatePart::Today => now.date_naive(),
            DatePart::Tomorrow => now
                .date_naive()
                .succ_opt()
                .ok_or_else(|| IntentError::InvalidDate("tomorrow overflows the calendar".into()))?,
            DatePart::Explicit { day, month } => NaiveDate::from_ymd_opt(now.year(), month, day)
                .ok_or_else(|| {
                    IntentError::InvalidDate(format!(
                        "no day {day} in month {month} of {}",
                        now.year()
                    ))
                })?,
        };
        let time = NaiveTime::from_hms_opt(self.time.hour, self.time.minute, 0)
            .ok_or_else(|| IntentError::InvalidDate(format!("bad clock time {:?}", self.time)))?;

        Local
            .from_local_datetime(&date.and_time(time))
            .single()
            .ok_or_else(|| {
                IntentError::InvalidDate(format!(
                    "ambiguous or nonexistent local time {date} {time}"
                ))
            })
    }
}

/// Resolve a raw candidate phrase to an absolute local moment.
///
/// # Errors
///
/// Returns [`IntentError::InvalidPhrase`] when the phrase does not match
/// the grammar, or [`IntentError::InvalidDate`] when the date half names a
/// day that does not exist in the calendar (e.g. "31feb"). Callers that do
/// not care *why* a phrase failed can `.ok()` the result — the extraction
/// facade does exactly that.
pub fn resolve_phrase(phrase: &str, now: DateTime<Local>) -> Result<DateTime<Local>> {
    let parsed = DateTimePhrase::parse(phrase).ok_or_else(|| {
        IntentError::InvalidPhrase(format!("cannot parse date phrase: '{}'", phrase.trim()))
    })?;
    parsed.resolve(now)
}

// ── Grammar pieces ──────────────────────────────────────────────────────────

/// Parse the date half of a phrase: "today", a tomorrow synonym, or an
/// explicit "9jun"-style day+month. Case-insensitive.
pub fn parse_date_part(s: &str) -> Option<DatePart> {
    let lower = s.to_ascii_lowercase();
    match lower.as_str() {
        "today" => return Some(DatePart::Today),
        "tomorrow" | "tmr" | "tml" => return Some(DatePart::Tomorrow),
        _ => {}
    }

    // Explicit form: 1-2 digits immediately followed by a month abbreviation.
    let digits_end = lower.find(|c: char| !c.is_ascii_digit())?;
    if digits_end == 0 || digits_end > 2 {
        return None;
    }
    let day: u32 = lower[..digits_end].parse().ok()?;
    let month = parse_month_abbrev(&lower[digits_end..])?;
    if !(1..=31).contains(&day) {
        return None;
    }
    Some(DatePart::Explicit { day, month })
}

/// Parse a 12-hour clock time: `H:MM` directly followed by `am`/`pm`, as in
/// "10:35pm" or "9:05am". Hour must be 1-12, minutes exactly two digits.
pub fn parse_clock_time(s: &str) -> Option<ClockTime> {
    let lower = s.to_ascii_lowercase();
    let (body, is_pm) = if let Some(rest) = lower.strip_suffix("pm") {
        (rest, true)
    } else if let Some(rest) = lower.strip_suffix("am") {
        (rest, false)
    } else {
        return None;
    };

    let (h, m) = body.split_once(':')?;
    if h.is_empty() || h.len() > 2 || !h.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if m.len() != 2 || !m.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hour12: u32 = h.parse().ok()?;
    let minute: u32 = m.parse().ok()?;
    if !(1..=12).contains(&hour12) || minute > 59 {
        return None;
    }

    let hour = match (hour12, is_pm) {
        (12, true) => 12,
        (12, false) => 0,
        (h, true) => h + 12,
        (h, false) => h,
    };
    Some(ClockTime { hour, minute })
}

/// Map a 3-letter month abbreviation to its number (1-12).
fn parse_month_abbrev(s: &str) -> Option<u32> {
    match s {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
