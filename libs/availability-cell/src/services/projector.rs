use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike};
use tracing::debug;

use shared_models::{BookingRecord, ScheduleDay, Staff, TimeSlot, WeeklyScheduleEntry};
use shared_models::wire::RawScheduleEntry;
use shared_utils::{datetime, weekday};

use crate::models::{Projection, DEFAULT_HORIZON_DAYS, DEFAULT_SLOT_MINUTES};

/// Derives concrete bookable slots from a weekly recurring schedule
/// plus the list of already-confirmed bookings.
///
/// Purely a function of its inputs: same schedule, bookings and
/// reference date always yield the same slot sequence, chronological
/// and grouped by day. Days without a schedule entry contribute no
/// slots. Schedule boundaries are truncated to the whole hour before
/// slot generation (the policy the production backend exhibits);
/// malformed entries are skipped and counted rather than aborting the
/// projection.
pub fn project_slots(
    schedule: &[WeeklyScheduleEntry],
    bookings: &[BookingRecord],
    reference_date: NaiveDate,
    horizon_days: u32,
    slot_length_minutes: u32,
) -> Projection {
    let mut skipped = 0usize;
    let mut by_day: HashMap<ScheduleDay, &WeeklyScheduleEntry> = HashMap::new();
    for entry in schedule {
        if entry.start >= entry.end {
            skipped += 1;
            continue;
        }
        // At most one working window per weekday; last one wins.
        by_day.insert(entry.day, entry);
    }

    let mut slots = Vec::new();
    if slot_length_minutes == 0 {
        return Projection {
            slots,
            skipped_entries: skipped,
        };
    }

    for offset in 0..horizon_days {
        let date = reference_date + Duration::days(offset as i64);
        let day = ScheduleDay::from(date.weekday());
        let Some(entry) = by_day.get(&day).copied() else {
            continue;
        };

        let mut minute = entry.start.hour() * 60;
        let end_minute = entry.end.hour() * 60;
        while minute + slot_length_minutes <= end_minute {
            if let Some(time) = NaiveTime::from_hms_opt(minute / 60, minute % 60, 0) {
                let key = datetime::slot_key(date, time);
                let booked = bookings.iter().any(|b| b.date_time == key);
                slots.push(TimeSlot {
                    date: datetime::format_api_date(date),
                    time: time.format("%H:%M").to_string(),
                    weekday: weekday::short_label(day).to_string(),
                    available: !booked,
                    booked,
                    display_date: datetime::display_date(date),
                });
            }
            minute += slot_length_minutes;
        }
    }

    debug!(
        "Projected {} slots over {} days ({} schedule entries skipped)",
        slots.len(),
        horizon_days,
        skipped
    );

    Projection {
        slots,
        skipped_entries: skipped,
    }
}

/// Converts wire schedule entries to typed ones. Entries with unknown
/// weekday symbols or unparseable times are dropped; the count of
/// dropped entries is returned for diagnostics.
pub fn convert_entries(raw: &[RawScheduleEntry]) -> (Vec<WeeklyScheduleEntry>, usize) {
    let mut entries = Vec::with_capacity(raw.len());
    let mut dropped = 0usize;
    for item in raw {
        let day = ScheduleDay::parse(&item.day);
        let start = datetime::parse_schedule_time(&item.start);
        let end = datetime::parse_schedule_time(&item.end);
        match (day, start, end) {
            (Some(day), Some(start), Some(end)) => {
                entries.push(WeeklyScheduleEntry { day, start, end });
            }
            _ => {
                debug!(
                    "Dropping schedule entry with unrecognized fields: {} {}-{}",
                    item.day, item.start, item.end
                );
                dropped += 1;
            }
        }
    }
    (entries, dropped)
}

/// Projection for one staff member with the booking UI defaults:
/// a 7-day horizon of 60-minute slots.
pub fn staff_slots(staff: &Staff, reference_date: NaiveDate) -> Projection {
    let (entries, dropped) = convert_entries(&staff.weekly_schedule);
    let mut projection = project_slots(
        &entries,
        &staff.schedule,
        reference_date,
        DEFAULT_HORIZON_DAYS,
        DEFAULT_SLOT_MINUTES,
    );
    projection.skipped_entries += dropped;
    projection
}
