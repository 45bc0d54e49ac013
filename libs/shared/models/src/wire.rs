use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::BookingRecord;
use crate::error::AppError;

/// Request pagination defaults used by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub offset: u32,
    pub limit: u32,
    #[serde(rename = "orderBy")]
    pub order_by: String,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 100,
            order_by: "ASC".to_string(),
        }
    }
}

/// Every request body is the parameters object wrapped in this
/// envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ApiEnvelope {
    pub parameters: Value,
    #[serde(flatten)]
    pub page: Page,
}

impl ApiEnvelope {
    pub fn new(parameters: Value) -> Self {
        Self {
            parameters,
            page: Page::default(),
        }
    }

    pub fn with_page(parameters: Value, page: Page) -> Self {
        Self { parameters, page }
    }
}

/// Uniform response shape: `result` is `"ok"` on success, `data` holds
/// the rows, `msg` carries the server's failure message.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub result: String,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub msg: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn is_ok(&self) -> bool {
        self.result == "ok"
    }

    /// Business-rule rejections surface the server message verbatim
    /// when present, otherwise a generic fallback.
    pub fn into_result(self) -> Result<Vec<T>, AppError> {
        if self.is_ok() {
            Ok(self.data)
        } else {
            Err(AppError::Rejected(
                self.msg
                    .unwrap_or_else(|| "Request rejected by server".to_string()),
            ))
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub categorie_id: i64,
    pub name: String,
    pub parent_id: i64,
    #[serde(default)]
    pub count_business: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    pub business_id: i64,
    #[serde(default)]
    pub parent_business_id: i64,
    #[serde(default)]
    pub inn: i64,
    #[serde(default)]
    pub addr: String,
    pub name: String,
    #[serde(default)]
    pub begin_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub description: String,
}

/// Schedule entry exactly as the wire carries it. The day symbol stays
/// a string here so that one unrecognized entry skips that entry
/// rather than failing the whole staff record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawScheduleEntry {
    pub day: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    pub staff_id: String,
    pub last_name: String,
    pub first_name: String,
    #[serde(default)]
    pub patronymic: String,
    #[serde(default)]
    pub urlimg: String,
    #[serde(default)]
    pub visit_time: i64,
    /// Existing bookings, read-only input to slot derivation.
    #[serde(default)]
    pub schedule: Vec<BookingRecord>,
    #[serde(default)]
    pub weekly_schedule: Vec<RawScheduleEntry>,
}

impl Staff {
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.last_name, self.first_name, self.patronymic)
            .trim_end()
            .to_string()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub patronymic: String,
    #[serde(default)]
    pub phone_number: String,
}

/// Issued by the SMS dispatch step. The one-time code rides along in
/// this backend as a development convenience; production systems do
/// not return it.
#[derive(Debug, Clone, Deserialize)]
pub struct SmsChallenge {
    pub sms_session_id: String,
    pub sms_password: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserData {
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub patronymic: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationResponse {
    #[serde(default)]
    pub status_code: String,
    pub access_token: String,
    #[serde(default)]
    pub user_data: Option<UserData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonProfile {
    pub person_id: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub patronymic: String,
    #[serde(default)]
    pub phone_number: String,
}

/// One row of the signed-in user's own reservation history.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleItem {
    pub schedule_date: String,
    pub schedule_time: String,
    #[serde(default)]
    pub staff_last_name: String,
    #[serde(default)]
    pub staff_first_name: String,
    #[serde(default)]
    pub staff_patronymic: String,
    #[serde(default)]
    pub urlimg: String,
    #[serde(default)]
    pub is_flag: String,
    pub business_id: i64,
    #[serde(default)]
    pub name: String,
}
