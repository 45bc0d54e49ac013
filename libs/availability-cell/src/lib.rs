pub mod models;
pub mod services;

pub use models::{Projection, DEFAULT_HORIZON_DAYS, DEFAULT_SLOT_MINUTES};
pub use services::availability::AvailabilityService;
pub use services::projector::{convert_entries, project_slots, staff_slots};
