pub mod services;

pub use services::auth::AuthService;
pub use services::session::{InMemorySessionStore, SessionStore};
pub use services::sms::SmsService;
