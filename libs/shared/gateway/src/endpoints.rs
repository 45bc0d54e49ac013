//! Logical operations exposed by the remote booking backend.

pub const CATEGORIES: &str = "/proxy/categories";
pub const BUSINESSES: &str = "/proxy/businesses";
pub const CATEGORIE_BUSINESS: &str = "/proxy/categorie-business";
pub const STAFF_CATEGORIE: &str = "/proxy/staff-categorie";
pub const SEND_SMS: &str = "/proxy/send-sms";
pub const REGISTRATION: &str = "/proxy/registration";
pub const SAVE_SCHEDULE: &str = "/proxy/save-schedule";
pub const SAVE_SCHEDULE2: &str = "/proxy/save-schedule2";
pub const GET_SCHEDULE: &str = "/proxy/schedule";
pub const PERSON_PROFILE: &str = "/proxy/person-profile";
