use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde_json::{json, Value};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use auth_cell::{InMemorySessionStore, SessionStore, SmsService};
use shared_config::AppConfig;
use shared_gateway::{endpoints, BookingApiClient};
use shared_models::{AppError, TimeSlot};
use shared_utils::validation;

use crate::models::{FlowState, ReservationForm, SmsStep, SubmitOutcome};
use crate::services::cooldown::Cooldown;

#[derive(Default)]
struct FlowData {
    state: FlowState,
    staff_id: Option<String>,
    slot: Option<TimeSlot>,
    form: ReservationForm,
    sms_session_id: Option<String>,
    sms_code: Option<String>,
    cooldown: Cooldown,
    last_error: Option<AppError>,
}

/// Drives one booking attempt from slot selection to submission.
///
/// All mutable state sits behind one lock, so observers never see a
/// half-applied transition; the submission itself runs outside the
/// lock under a separate in-flight flag, which is what limits the flow
/// to a single reservation-mutating request at a time.
pub struct ReservationFlow {
    client: Arc<BookingApiClient>,
    sms: SmsService,
    store: Arc<dyn SessionStore>,
    cooldown_secs: u32,
    in_flight: AtomicBool,
    data: Mutex<FlowData>,
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl ReservationFlow {
    pub fn new(config: &AppConfig) -> Self {
        let client = Arc::new(BookingApiClient::new(config));
        Self {
            sms: SmsService::with_client(Arc::clone(&client)),
            client,
            store: Arc::new(InMemorySessionStore::new()),
            cooldown_secs: config.sms_resend_cooldown_secs,
            in_flight: AtomicBool::new(false),
            data: Mutex::new(FlowData::default()),
        }
    }

    pub fn with_parts(
        client: Arc<BookingApiClient>,
        store: Arc<dyn SessionStore>,
        cooldown_secs: u32,
    ) -> Self {
        Self {
            sms: SmsService::with_client(Arc::clone(&client)),
            client,
            store,
            cooldown_secs,
            in_flight: AtomicBool::new(false),
            data: Mutex::new(FlowData::default()),
        }
    }

    pub async fn state(&self) -> FlowState {
        self.data.lock().await.state
    }

    pub async fn last_error(&self) -> Option<AppError> {
        self.data.lock().await.last_error.clone()
    }

    pub async fn cooldown_remaining(&self) -> u32 {
        self.data.lock().await.cooldown.remaining()
    }

    /// One second of wall time passed; returns the remaining cooldown.
    pub async fn tick_cooldown(&self) -> u32 {
        self.data.lock().await.cooldown.tick()
    }

    /// Picks an available slot and opens the booking session. Signed-in
    /// users skip straight to quick-confirm with their stored identity.
    pub async fn select_slot(&self, staff_id: &str, slot: &TimeSlot) -> Result<FlowState, AppError> {
        let session = self.store.load().await;

        let mut data = self.data.lock().await;
        if data.state != FlowState::Idle {
            return Err(AppError::Validation(
                "Сначала завершите или отмените текущее бронирование.".to_string(),
            ));
        }
        if !slot.available {
            return Err(AppError::Rejected("Это время уже занято.".to_string()));
        }

        data.staff_id = Some(staff_id.to_string());
        data.slot = Some(slot.clone());
        data.sms_session_id = None;
        data.sms_code = None;
        data.last_error = None;

        data.state = if session.is_authenticated() {
            data.form = session.identity().into();
            FlowState::QuickConfirm
        } else {
            FlowState::MethodSelect
        };

        debug!("Slot {} selected, entering {:?}", slot.slot_key(), data.state);
        Ok(data.state)
    }

    pub async fn choose_sms_verification(&self) -> Result<FlowState, AppError> {
        let mut data = self.data.lock().await;
        if data.state != FlowState::MethodSelect {
            return Err(AppError::Validation(
                "Способ подтверждения уже выбран.".to_string(),
            ));
        }
        data.state = FlowState::SmsVerify(SmsStep::AwaitSend);
        Ok(data.state)
    }

    /// Patient identity for the anonymous path. Rejects invalid input
    /// before it can ever reach the network.
    pub async fn set_form(&self, form: ReservationForm) -> Result<(), AppError> {
        form.validate()?;
        let mut data = self.data.lock().await;
        match data.state {
            FlowState::MethodSelect | FlowState::SmsVerify(_) | FlowState::QuickConfirm => {
                data.form = form;
                Ok(())
            }
            _ => Err(AppError::Validation(
                "Данные пациента вводятся после выбора времени.".to_string(),
            )),
        }
    }

    /// Dispatches (or re-dispatches) the verification code and starts
    /// the resend cooldown.
    pub async fn send_code(&self) -> Result<(), AppError> {
        let mut data = self.data.lock().await;
        if !matches!(data.state, FlowState::SmsVerify(_)) {
            return Err(AppError::Validation(
                "Отправка кода доступна после выбора подтверждения по SMS.".to_string(),
            ));
        }
        if !data.cooldown.is_ready() {
            return Err(AppError::Validation(format!(
                "Повторная отправка будет доступна через {} с",
                data.cooldown.remaining()
            )));
        }

        let phone = data.form.phone_number.clone();
        let challenge = self.sms.send_code(&phone).await?;

        data.sms_session_id = Some(challenge.sms_session_id);
        data.sms_code = None;
        data.state = FlowState::SmsVerify(SmsStep::AwaitCode);
        data.cooldown.start(self.cooldown_secs);
        Ok(())
    }

    pub async fn resend_code(&self) -> Result<(), AppError> {
        self.send_code().await
    }

    /// Accepts the typed code. Shape-checked only; whether it matches
    /// is the server's call at submission time.
    pub async fn enter_code(&self, code: &str) -> Result<(), AppError> {
        validation::validate_sms_code(code)?;
        let mut data = self.data.lock().await;
        if data.state != FlowState::SmsVerify(SmsStep::AwaitCode) {
            return Err(AppError::Validation(
                "Сначала запросите SMS код.".to_string(),
            ));
        }
        data.sms_code = Some(code.to_string());
        Ok(())
    }

    /// Sends the reservation. At most one submission runs at a time; a
    /// concurrent call fails fast instead of queueing a duplicate.
    pub async fn submit(&self) -> Result<SubmitOutcome, AppError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(AppError::SubmissionInFlight);
        }
        let _guard = InFlightGuard(&self.in_flight);

        let session = self.store.load().await;

        let (endpoint, parameters, auth_token, resume, outcome) = {
            let mut data = self.data.lock().await;

            let resume = data.state;
            data.form.validate()?;
            let slot = data.slot.as_ref().ok_or_else(|| {
                AppError::Validation("Время приёма не выбрано.".to_string())
            })?;
            let staff_id = data.staff_id.clone().ok_or_else(|| {
                AppError::Validation("Специалист не выбран.".to_string())
            })?;

            let mut parameters = json!({
                "staff_id": staff_id,
                "date_time": slot.slot_key(),
                "last_name": data.form.last_name,
                "first_name": data.form.first_name,
                "patronymic": data.form.patronymic,
                "phone_number": data.form.phone_number,
            });

            // The two credentials are mutually exclusive: the token
            // rides in the Authorization header on the authenticated
            // endpoint, the SMS pair rides in the body on the other.
            let (endpoint, auth_token) = match data.state {
                FlowState::QuickConfirm => {
                    let token = session.access_token.clone().filter(|t| !t.is_empty());
                    let token = token.ok_or_else(|| {
                        AppError::Auth("Сессия истекла. Войдите заново.".to_string())
                    })?;
                    (endpoints::SAVE_SCHEDULE2, Some(token))
                }
                FlowState::SmsVerify(SmsStep::AwaitCode) => {
                    let sms_session_id = data.sms_session_id.clone().ok_or_else(|| {
                        AppError::Validation("Сначала запросите SMS код.".to_string())
                    })?;
                    let code = data.sms_code.clone().ok_or_else(|| {
                        AppError::Validation("Введите SMS код.".to_string())
                    })?;
                    parameters["sms_session_id"] = Value::String(sms_session_id);
                    parameters["sms_password"] = Value::String(code);
                    (endpoints::SAVE_SCHEDULE, None)
                }
                _ => {
                    return Err(AppError::Validation(
                        "Бронирование ещё не готово к отправке.".to_string(),
                    ));
                }
            };

            let outcome = SubmitOutcome {
                slot_key: slot.slot_key(),
                staff_id,
            };

            data.state = FlowState::Submitting;
            (endpoint, parameters, auth_token, resume, outcome)
        };

        debug!("Submitting reservation for {}", outcome.slot_key);
        let result = match self
            .client
            .post::<Value>(endpoint, parameters, auth_token.as_deref())
            .await
        {
            Ok(response) => response.into_result().map(|_| ()),
            Err(e) => Err(e),
        };

        let mut data = self.data.lock().await;
        match result {
            Ok(()) => {
                info!("Reservation confirmed for {}", outcome.slot_key);
                data.state = FlowState::Succeeded;
                data.sms_session_id = None;
                data.sms_code = None;
                data.cooldown = Cooldown::default();
                data.last_error = None;
                Ok(outcome)
            }
            Err(e) => {
                warn!("Reservation failed: {}", e);
                data.last_error = Some(e.clone());
                if matches!(&e, AppError::Rejected(msg) if mentions_sms_code(msg))
                    && resume == FlowState::SmsVerify(SmsStep::AwaitCode)
                {
                    // The dispatched code is spent; force a fresh send.
                    data.sms_session_id = None;
                    data.sms_code = None;
                    data.cooldown = Cooldown::default();
                    data.state = FlowState::SmsVerify(SmsStep::AwaitSend);
                } else {
                    data.state = resume;
                }
                Err(e)
            }
        }
    }

    /// Closes the booking session and discards its per-booking data.
    pub async fn cancel(&self) {
        let mut data = self.data.lock().await;
        *data = FlowData::default();
    }
}

/// Heuristic over the server's free-text rejection message: does it
/// blame the verification code?
fn mentions_sms_code(msg: &str) -> bool {
    let lower = msg.to_lowercase();
    lower.contains("код") || lower.contains("code") || lower.contains("sms")
}
