use serde::{Deserialize, Serialize};

use crate::wire::Identity;

/// Client-held session state. An explicit value object threaded through
/// an injected store interface, so no component reaches into ambient
/// storage. All tokens are opaque strings with no client-side expiry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: Option<String>,
    pub phone_number: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub patronymic: Option<String>,
    pub sms_session_id: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.access_token
            .as_deref()
            .map(|t| !t.is_empty())
            .unwrap_or(false)
    }

    /// Identity snapshot used to pre-fill the quick-confirm path.
    pub fn identity(&self) -> Identity {
        Identity {
            last_name: self.last_name.clone().unwrap_or_default(),
            first_name: self.first_name.clone().unwrap_or_default(),
            patronymic: self.patronymic.clone().unwrap_or_default(),
            phone_number: self.phone_number.clone().unwrap_or_default(),
        }
    }
}
