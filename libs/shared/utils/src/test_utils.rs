use serde_json::{json, Value};

use shared_config::AppConfig;

/// Config pointed at a mock server, for API-facing tests.
pub struct TestConfig {
    pub api_url: String,
    pub api_key: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:4000".to_string(),
            api_key: "test-api-key".to_string(),
        }
    }
}

impl TestConfig {
    pub fn for_mock_server(base_url: &str) -> Self {
        Self {
            api_url: base_url.to_string(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            booking_api_url: self.api_url.clone(),
            booking_api_key: self.api_key.clone(),
            booking_api_timeout_ms: 2_000,
            booking_api_retry_attempts: 0,
            sms_resend_cooldown_secs: 45,
        }
    }
}

/// Canned booking API bodies shared across the cells' test suites.
pub struct MockBookingResponses;

impl MockBookingResponses {
    pub fn ok(data: Vec<Value>) -> Value {
        json!({ "result": "ok", "data": data })
    }

    pub fn rejected(msg: &str) -> Value {
        json!({ "result": "error", "data": [], "msg": msg })
    }

    pub fn category(id: i64, name: &str, parent_id: i64) -> Value {
        json!({
            "categorie_id": id,
            "name": name,
            "parent_id": parent_id,
            "count_business": 3
        })
    }

    pub fn business(id: i64, name: &str) -> Value {
        json!({
            "business_id": id,
            "parent_business_id": 0,
            "inn": 123456789,
            "addr": "Ташкент, ул. Навои 10",
            "name": name,
            "begin_time": "09:00",
            "end_time": "18:00",
            "description": "Клиника"
        })
    }

    pub fn staff(staff_id: &str, bookings: Vec<Value>, weekly: Vec<Value>) -> Value {
        json!({
            "staff_id": staff_id,
            "last_name": "Иванов",
            "first_name": "Иван",
            "patronymic": "Иванович",
            "urlimg": "",
            "visit_time": 60,
            "schedule": bookings,
            "weekly_schedule": weekly
        })
    }

    pub fn weekly_entry(day: &str, start: &str, end: &str) -> Value {
        json!({ "day": day, "start": start, "end": end })
    }

    pub fn booking(person_id: &str, date_time: &str) -> Value {
        json!({ "person_id": person_id, "date_time": date_time })
    }

    pub fn sms_challenge(session_id: &str, code: i64) -> Value {
        json!({ "sms_session_id": session_id, "sms_password": code })
    }

    pub fn registration(access_token: &str) -> Value {
        json!({
            "status_code": "200",
            "access_token": access_token,
            "user_data": {
                "last_name": "Иванов",
                "first_name": "Иван",
                "patronymic": "Иванович"
            }
        })
    }

    pub fn person_profile(person_id: &str, phone: &str) -> Value {
        json!({
            "person_id": person_id,
            "last_name": "Иванов",
            "first_name": "Иван",
            "patronymic": "Иванович",
            "phone_number": phone
        })
    }
}
