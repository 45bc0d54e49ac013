use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_gateway::{endpoints, BookingApiClient};
use shared_models::{AppError, SmsChallenge};
use shared_utils::validation;

/// Dispatches one-time verification codes. The phone number is checked
/// client-side first, so malformed input never reaches the network.
pub struct SmsService {
    client: Arc<BookingApiClient>,
}

impl SmsService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Arc::new(BookingApiClient::new(config)),
        }
    }

    pub fn with_client(client: Arc<BookingApiClient>) -> Self {
        Self { client }
    }

    /// Sends a code to `phone` (canonical 998XXXXXXXXX digits) and
    /// returns the challenge holding the opaque SMS session id.
    pub async fn send_code(&self, phone: &str) -> Result<SmsChallenge, AppError> {
        validation::validate_phone(phone)?;

        debug!("Requesting SMS code dispatch");
        let challenges = self
            .client
            .post::<SmsChallenge>(
                endpoints::SEND_SMS,
                json!({ "phone_number": phone }),
                None,
            )
            .await?
            .into_result()?;

        let challenge = challenges.into_iter().next().ok_or_else(|| {
            AppError::Protocol("SMS dispatch returned no challenge".to_string())
        })?;

        // The session id is matched back by the server at submission;
        // a non-UUID value means the dispatch response is unusable.
        Uuid::parse_str(&challenge.sms_session_id).map_err(|_| {
            AppError::Protocol("SMS dispatch returned a malformed session id".to_string())
        })?;

        info!("SMS code dispatched, session {}", challenge.sms_session_id);
        Ok(challenge)
    }
}
