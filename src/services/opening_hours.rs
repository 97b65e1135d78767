//! Best-effort "open now" evaluation over free-text operating hours.
//!
//! This is a heuristic, not a calendar grammar. Known gaps:
//! - spans crossing midnight ("8pm-2am") are reported closed after midnight
//! - day ranges ("Mon-Fri") only count when today's abbreviation is spelled out
//! - only the first time span is read; holiday exceptions are ignored
//! - stray numbers are read as times ("ages 18+ 9am-5pm" spans 18:00 to 9:00)
//!
//! When the text cannot be read at all the outcome is [`OpenStatus::Unknown`],
//! which callers treat as open so a resource is never hidden for bad data.

use regex::Regex;
use std::sync::LazyLock;
use time::{OffsetDateTime, UtcOffset, Weekday};

static TIME_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})(?::(\d{2}))?\s*(am|pm)?").unwrap()
});

/// Source of the current time, injectable for tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

/// Wall clock shifted to a fixed UTC offset.
pub struct SystemClock {
    offset: UtcOffset,
}

impl SystemClock {
    pub fn new(utc_offset_hours: i8) -> Self {
        let offset = UtcOffset::from_hms(utc_offset_hours, 0, 0).unwrap_or_else(|e| {
            tracing::warn!(
                "Invalid UTC offset {}h ({}), using UTC",
                utc_offset_hours,
                e
            );
            UtcOffset::UTC
        });
        SystemClock { offset }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(self.offset)
    }
}

/// Always returns the same instant.
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenStatus {
    Open,
    Closed,
    /// Hours missing or unreadable
    Unknown,
}

impl OpenStatus {
    pub fn is_open(&self) -> bool {
        !matches!(self, OpenStatus::Closed)
    }
}

fn day_abbreviation(day: Weekday) -> &'static str {
    match day {
        Weekday::Monday => "mon",
        Weekday::Tuesday => "tue",
        Weekday::Wednesday => "wed",
        Weekday::Thursday => "thu",
        Weekday::Friday => "fri",
        Weekday::Saturday => "sat",
        Weekday::Sunday => "sun",
    }
}

/// Minutes since midnight for one captured time token.
fn to_minutes(hour: &str, minute: Option<&str>, meridiem: Option<&str>) -> Option<u32> {
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = match minute {
        Some(m) => m.parse().ok()?,
        None => 0,
    };
    if minute > 59 {
        return None;
    }

    let hour = match meridiem.map(str::to_lowercase).as_deref() {
        Some("am") if (1..=12).contains(&hour) => hour % 12,
        Some("pm") if (1..=12).contains(&hour) => hour % 12 + 12,
        Some(_) => return None,
        None if hour <= 23 => hour,
        None => return None,
    };

    Some(hour * 60 + minute)
}

/// Opening and closing minute of the first time span in `text`.
fn extract_span(text: &str) -> Option<(u32, u32)> {
    let mut minutes = TIME_TOKEN.captures_iter(text).take(2).map(|caps| {
        to_minutes(
            caps.get(1)?.as_str(),
            caps.get(2).map(|m| m.as_str()),
            caps.get(3).map(|m| m.as_str()),
        )
    });

    let open = minutes.next()??;
    let close = minutes.next()??;
    Some((open, close))
}

pub struct OpenNowEvaluator;

impl OpenNowEvaluator {
    /// Decide whether a resource with the given hours is open at `now`.
    pub fn evaluate(hours: Option<&str>, now: OffsetDateTime) -> OpenStatus {
        let Some(hours) = hours else {
            return OpenStatus::Unknown;
        };

        let text = hours.to_lowercase();
        if text.contains("24 hour") || text.contains("24/7") {
            return OpenStatus::Open;
        }

        let today = day_abbreviation(now.weekday());
        if !text.contains(today) && !text.contains("daily") && !text.contains("24") {
            return OpenStatus::Closed;
        }

        let Some((open, close)) = extract_span(&text) else {
            tracing::debug!("Could not read hours '{}', assuming open", hours);
            return OpenStatus::Unknown;
        };

        let current = u32::from(now.hour()) * 60 + u32::from(now.minute());
        if open <= current && current <= close {
            OpenStatus::Open
        } else {
            OpenStatus::Closed
        }
    }

    pub fn is_open(hours: Option<&str>, now: OffsetDateTime) -> bool {
        Self::evaluate(hours, now).is_open()
    }
}
