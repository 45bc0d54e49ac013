pub mod models;
pub mod services;

pub use models::{FlowState, ReservationForm, SmsStep, SubmitOutcome};
pub use services::cooldown::Cooldown;
pub use services::flow::ReservationFlow;
