use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub booking_api_url: String,
    pub booking_api_key: String,
    pub booking_api_timeout_ms: u64,
    pub booking_api_retry_attempts: u32,
    pub sms_resend_cooldown_secs: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            booking_api_url: env::var("BOOKING_API_URL")
                .unwrap_or_else(|_| {
                    warn!("BOOKING_API_URL not set, using empty value");
                    String::new()
                }),
            booking_api_key: env::var("BOOKING_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("BOOKING_API_KEY not set, using empty value");
                    String::new()
                }),
            booking_api_timeout_ms: env::var("BOOKING_API_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            booking_api_retry_attempts: env::var("BOOKING_API_RETRY_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            sms_resend_cooldown_secs: env::var("SMS_RESEND_COOLDOWN_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(45),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.booking_api_url.is_empty() && !self.booking_api_key.is_empty()
    }
}
