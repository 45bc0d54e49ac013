use shared_models::TimeSlot;

/// Look-ahead window and slot granularity the booking UI uses.
pub const DEFAULT_HORIZON_DAYS: u32 = 7;
pub const DEFAULT_SLOT_MINUTES: u32 = 60;

/// Result of one projection run. `skipped_entries` counts schedule
/// entries dropped as malformed (start >= end) or carrying an unknown
/// weekday symbol, for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub slots: Vec<TimeSlot>,
    pub skipped_entries: usize,
}

impl Projection {
    pub fn available_count(&self) -> usize {
        self.slots.iter().filter(|s| s.available).count()
    }
}
