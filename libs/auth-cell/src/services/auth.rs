use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};

use shared_config::AppConfig;
use shared_gateway::{endpoints, BookingApiClient};
use shared_models::{AppError, Identity, PersonProfile, RegistrationResponse, Session};
use shared_utils::validation;

use crate::services::session::{InMemorySessionStore, SessionStore};

/// SMS-based sign-in and profile lookup. A successful login persists
/// the returned token and identity into the session store as one
/// atomic write; a failed login leaves the store untouched.
pub struct AuthService {
    client: Arc<BookingApiClient>,
    store: Arc<dyn SessionStore>,
}

impl AuthService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Arc::new(BookingApiClient::new(config)),
            store: Arc::new(InMemorySessionStore::new()),
        }
    }

    pub fn with_parts(client: Arc<BookingApiClient>, store: Arc<dyn SessionStore>) -> Self {
        Self { client, store }
    }

    pub fn store(&self) -> Arc<dyn SessionStore> {
        Arc::clone(&self.store)
    }

    /// Exchanges a verified SMS challenge for an access token.
    pub async fn login_with_sms(
        &self,
        phone: &str,
        code: &str,
        sms_session_id: &str,
    ) -> Result<Session, AppError> {
        validation::validate_phone(phone)?;
        validation::validate_sms_code(code)?;

        debug!("Registering via SMS session {}", sms_session_id);
        let responses = self
            .client
            .post::<RegistrationResponse>(
                endpoints::REGISTRATION,
                json!({
                    "phone_number": phone,
                    "sms_session_id": sms_session_id,
                    "sms_password": code,
                }),
                None,
            )
            .await?
            .into_result()?;

        let registration = responses.into_iter().next().ok_or_else(|| {
            AppError::Protocol("registration returned no token".to_string())
        })?;

        let user_data = registration.user_data.unwrap_or_default();
        let session = Session {
            access_token: Some(registration.access_token),
            phone_number: Some(phone.to_string()),
            first_name: user_data.first_name,
            last_name: user_data.last_name,
            patronymic: user_data.patronymic,
            sms_session_id: None,
        };

        self.store.store(session.clone()).await;
        info!("Signed in, session persisted");
        Ok(session)
    }

    /// Profile of the signed-in user, used to pre-fill the
    /// quick-confirm booking path.
    pub async fn profile(&self, access_token: &str) -> Result<Identity, AppError> {
        debug!("Fetching person profile");
        let profiles = self
            .client
            .post::<PersonProfile>(endpoints::PERSON_PROFILE, json!({}), Some(access_token))
            .await?
            .into_result()?;

        let profile = profiles
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Protocol("profile lookup returned no rows".to_string()))?;

        Ok(Identity {
            last_name: profile.last_name,
            first_name: profile.first_name,
            patronymic: profile.patronymic,
            phone_number: profile.phone_number,
        })
    }

    pub async fn logout(&self) {
        info!("Signing out");
        self.store.clear().await;
    }
}
