//! Chart axis labels.
//!
//! A one-day chart is labelled with the time of day, anything longer with the
//! calendar date. Both formats match what the dashboard has always shown:
//! hours above 12 become `h-12 PM`, every other hour (including 0 and 12) is
//! printed as-is with `AM`, minutes are never zero-padded, and dates are
//! `month/day/year` without padding.

use crate::shared::DayRange;
use chrono::{DateTime, Datelike, FixedOffset, Local, TimeZone, Timelike};

/// Time zone chart labels are rendered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelZone {
    /// System local time. The offset, daylight saving included, is resolved
    /// for each point separately.
    #[default]
    Local,
    /// One offset for every point.
    Fixed(FixedOffset),
}

impl LabelZone {
    pub fn label(&self, timestamp_ms: i64, days: DayRange) -> String {
        match self {
            LabelZone::Local => label(timestamp_ms, days, &Local),
            LabelZone::Fixed(offset) => label(timestamp_ms, days, offset),
        }
    }
}

/// Label for one point at `timestamp_ms`, rendered in `tz`.
pub fn label<Tz: TimeZone>(timestamp_ms: i64, days: DayRange, tz: &Tz) -> String {
    let Some(at) = tz.timestamp_millis_opt(timestamp_ms).single() else {
        return timestamp_ms.to_string();
    };
    if days.is_intraday() {
        time_of_day(&at)
    } else {
        calendar_date(&at)
    }
}

fn time_of_day<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    let hour = at.hour();
    let minute = at.minute();
    if hour > 12 {
        format!("{}:{} PM", hour - 12, minute)
    } else {
        format!("{}:{} AM", hour, minute)
    }
}

fn calendar_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    format!("{}/{}/{}", at.month(), at.day(), at.year())
}
