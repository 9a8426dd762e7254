//! Date and duration grammar.
//!
//! A date field is either an absolute literal (`2024-01-31`,
//! `2024-01-31 08:30`, RFC 3339) or a relative expression
//! `<duration> after <id>` anchored on an item parsed earlier.
//! A duration is a signed magnitude followed by a one-letter unit; unit
//! letters are case-sensitive because `m` (minute) and `M` (month) collide.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, TimeDelta};

use crate::error::ErrorKind;
use crate::syntax::types::Schedule;

/// Separator between duration and reference in a relative date.
pub const AFTER_MARKER: &str = " after ";

/// Bare prefix form, used when no duration precedes the reference.
pub const AFTER_PREFIX: &str = "after ";

/// Duration assumed when a relative date has nothing before `after`.
const ZERO_DURATION: &str = "0D";

const MS_PER_SECOND: f64 = 1_000.0;
const MS_PER_MINUTE: f64 = 60.0 * MS_PER_SECOND;
const MS_PER_HOUR: f64 = 60.0 * MS_PER_MINUTE;
const MS_PER_DAY: f64 = 24.0 * MS_PER_HOUR;

/// Datetime literal formats tried after the plain `%Y-%m-%d` date.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

// ─── Unit ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Day,
    Week,
    Hour,
    Minute,
    Month,
    Second,
    Year,
}

impl Unit {
    /// Unit letters in the order they are listed in error messages.
    pub const SYMBOLS: [char; 7] = ['D', 'W', 'H', 'm', 'M', 'S', 'Y'];

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'D' => Some(Unit::Day),
            'W' => Some(Unit::Week),
            'H' => Some(Unit::Hour),
            'm' => Some(Unit::Minute),
            'M' => Some(Unit::Month),
            'S' => Some(Unit::Second),
            'Y' => Some(Unit::Year),
            _ => None,
        }
    }

    /// Add `amount` of this unit to `from`. None on calendar overflow.
    ///
    /// Fixed-length units keep fractional amounts to the millisecond, so
    /// `1.5H` is 90 minutes and `0.5D` is 12 hours. They are never truncated
    /// to whole units. Months and years truncate to whole months.
    pub fn add_to(self, from: NaiveDateTime, amount: f64) -> Option<NaiveDateTime> {
        match self {
            Unit::Day => add_millis(from, amount * MS_PER_DAY),
            Unit::Week => add_millis(from, amount * 7.0 * MS_PER_DAY),
            Unit::Hour => add_millis(from, amount * MS_PER_HOUR),
            Unit::Minute => add_millis(from, amount * MS_PER_MINUTE),
            Unit::Second => add_millis(from, amount * MS_PER_SECOND),
            Unit::Month => add_months_rollover(from, whole(amount)?),
            Unit::Year => add_months_rollover(from, whole(amount * 12.0)?),
        }
    }
}

fn whole(amount: f64) -> Option<i64> {
    let t = amount.trunc();
    // Far beyond any representable calendar date anyway.
    if t.abs() > 1.0e12 {
        return None;
    }
    Some(t as i64)
}

fn add_millis(from: NaiveDateTime, ms: f64) -> Option<NaiveDateTime> {
    let ms = ms.round();
    if !ms.is_finite() || ms.abs() > 9.0e15 {
        return None;
    }
    from.checked_add_signed(TimeDelta::try_milliseconds(ms as i64)?)
}

/// Add calendar months, letting an out-of-range day spill into the next
/// month: Jan 31 + 1 month is Mar 2 (leap year) or Mar 3.
pub fn add_months_rollover(from: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let total = i64::from(from.year())
        .checked_mul(12)?
        .checked_add(i64::from(from.month0()))?
        .checked_add(months)?;
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month = u32::try_from(total.rem_euclid(12)).ok()? + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let date = first.checked_add_days(Days::new(u64::from(from.day() - 1)))?;
    Some(date.and_time(from.time()))
}

// ─── Durations ───────────────────────────────────────────────────────────────

/// Parse `duration` (e.g. `3D`, `-2W`, `1.5H`) and add it to `from`.
pub fn parse_duration(duration: &str, from: NaiveDateTime) -> Result<NaiveDateTime, ErrorKind> {
    let Some(symbol) = duration.chars().last() else {
        return Err(ErrorKind::UnknownUnit(duration.to_string()));
    };
    let unit =
        Unit::from_symbol(symbol).ok_or_else(|| ErrorKind::UnknownUnit(duration.to_string()))?;
    let amount = &duration[..duration.len() - symbol.len_utf8()];
    let amount = parse_magnitude(amount).ok_or_else(|| {
        ErrorKind::Syntax(format!("'{amount}' in '{duration}' should be a number"))
    })?;
    unit.add_to(from, amount).ok_or_else(|| {
        ErrorKind::Syntax(format!("'{duration}' moves the date out of range"))
    })
}

/// An empty magnitude counts as zero.
fn parse_magnitude(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Duration first; if that fails for any reason, an absolute date literal.
///
/// The duration error is never surfaced. Only when both readings fail does
/// the absolute-date error come back.
pub fn try_parse_duration(s: &str, from: NaiveDateTime) -> Result<NaiveDateTime, ErrorKind> {
    match parse_duration(s, from) {
        Ok(date) => Ok(date),
        Err(_) => parse_absolute_date(s),
    }
}

// ─── Dates ───────────────────────────────────────────────────────────────────

/// Resolve a date field against the items parsed so far.
pub fn parse_date(s: &str, schedule: &Schedule) -> Result<NaiveDateTime, ErrorKind> {
    let Some((duration, reference)) = split_relative(s)? else {
        return parse_absolute_date(s);
    };
    let from = schedule
        .anchor(reference)
        .ok_or_else(|| ErrorKind::ReferenceNotFound(reference.to_string()))?;
    let duration = if duration.is_empty() {
        ZERO_DURATION
    } else {
        duration
    };
    parse_duration(duration, from)
}

/// Split a relative date into `(duration, reference)`; None for absolute dates.
fn split_relative(s: &str) -> Result<Option<(&str, &str)>, ErrorKind> {
    if let Some(reference) = s.strip_prefix(AFTER_PREFIX) {
        return Ok(Some(("", reference.trim())));
    }
    if !s.contains(AFTER_MARKER) {
        return Ok(None);
    }
    let parts: Vec<&str> = s.split(AFTER_MARKER).collect();
    if parts.len() != 2 {
        return Err(ErrorKind::Syntax(format!(
            "'{s}' should read like '1D{AFTER_MARKER}taskId' where 1D is a duration (number + unit)"
        )));
    }
    Ok(Some((parts[0].trim(), parts[1].trim())))
}

/// Parse a locale-independent absolute date or datetime literal.
pub fn parse_absolute_date(s: &str) -> Result<NaiveDateTime, ErrorKind> {
    let s = s.trim();
    if let Some(dt) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(dt);
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_utc());
    }
    Err(ErrorKind::InvalidDate(s.to_string()))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_dates.rs"]
mod tests;
