pub mod datetime;
pub mod phone;
pub mod test_utils;
pub mod validation;
pub mod weekday;
