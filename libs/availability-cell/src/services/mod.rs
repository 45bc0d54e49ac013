pub mod availability;
pub mod projector;
