use shared_models::{AppError, Identity};
use shared_utils::validation;

/// Where the SMS verification sub-flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmsStep {
    /// No code dispatched yet (or the previous one was invalidated).
    AwaitSend,
    /// A code is out; waiting for the user to type it.
    AwaitCode,
}

/// The booking session states. One forward path per booking attempt;
/// failures roll back to the state the submission started from instead
/// of resting in a dead-end state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlowState {
    #[default]
    Idle,
    /// Slot picked, user chooses how to identify themselves.
    MethodSelect,
    SmsVerify(SmsStep),
    /// Signed-in path: identity pre-filled, no SMS round-trip.
    QuickConfirm,
    Submitting,
    Succeeded,
}

/// Patient identity for the anonymous (SMS) path. Quick-confirm fills
/// it from the stored session instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservationForm {
    pub last_name: String,
    pub first_name: String,
    pub patronymic: String,
    /// Canonical digits-only phone, 998XXXXXXXXX.
    pub phone_number: String,
}

impl ReservationForm {
    pub fn validate(&self) -> Result<(), AppError> {
        validation::validate_name(&self.last_name, "Фамилия")?;
        validation::validate_name(&self.first_name, "Имя")?;
        validation::validate_phone(&self.phone_number)?;
        Ok(())
    }
}

impl From<Identity> for ReservationForm {
    fn from(identity: Identity) -> Self {
        Self {
            last_name: identity.last_name,
            first_name: identity.first_name,
            patronymic: identity.patronymic,
            phone_number: identity.phone_number,
        }
    }
}

/// Returned by a successful submission so the caller can re-project
/// availability around the slot that was just taken.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub slot_key: String,
    pub staff_id: String,
}
