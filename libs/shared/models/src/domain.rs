use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// The seven weekday symbols used by weekly schedules. Exhaustive by
/// construction: unrecognized wire strings are dropped at the boundary
/// instead of flowing through as a fallthrough case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleDay {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl ScheduleDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleDay::Mon => "mon",
            ScheduleDay::Tue => "tue",
            ScheduleDay::Wed => "wed",
            ScheduleDay::Thu => "thu",
            ScheduleDay::Fri => "fri",
            ScheduleDay::Sat => "sat",
            ScheduleDay::Sun => "sun",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "mon" => Some(ScheduleDay::Mon),
            "tue" => Some(ScheduleDay::Tue),
            "wed" => Some(ScheduleDay::Wed),
            "thu" => Some(ScheduleDay::Thu),
            "fri" => Some(ScheduleDay::Fri),
            "sat" => Some(ScheduleDay::Sat),
            "sun" => Some(ScheduleDay::Sun),
            _ => None,
        }
    }
}

impl From<Weekday> for ScheduleDay {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => ScheduleDay::Mon,
            Weekday::Tue => ScheduleDay::Tue,
            Weekday::Wed => ScheduleDay::Wed,
            Weekday::Thu => ScheduleDay::Thu,
            Weekday::Fri => ScheduleDay::Fri,
            Weekday::Sat => ScheduleDay::Sat,
            Weekday::Sun => ScheduleDay::Sun,
        }
    }
}

/// One recurring working window. Invariant: `start < end`; entries
/// violating it are skipped (and counted) by the projector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyScheduleEntry {
    pub day: ScheduleDay,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// An already-confirmed appointment as the server reports it. The
/// `date_time` string is the canonical slot key (`DD.MM.YYYYTHH:MM`)
/// and is matched by exact equality, no tolerance window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub person_id: String,
    pub date_time: String,
}

/// A derived bookable time unit for one concrete calendar date.
/// Constructed fresh on every projection run, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// API date, `DD.MM.YYYY`.
    pub date: String,
    /// Slot start, `HH:MM`.
    pub time: String,
    /// Short localized weekday label.
    pub weekday: String,
    pub available: bool,
    pub booked: bool,
    /// Human-readable date for display.
    pub display_date: String,
}

impl TimeSlot {
    /// The canonical key matched against `BookingRecord.date_time`.
    pub fn slot_key(&self) -> String {
        format!("{}T{}", self.date, self.time)
    }
}
