use shared_models::AppError;

use crate::phone::is_valid_phone;

pub const SMS_CODE_LENGTH: usize = 6;

/// Client-side checks, run before any network call. Failures surface
/// inline and are never sent to the server.
pub fn validate_phone(digits: &str) -> Result<(), AppError> {
    if is_valid_phone(digits) {
        Ok(())
    } else {
        Err(AppError::Validation(
            "Неверный формат номера. Используйте формат: 998XXXXXXXXX".to_string(),
        ))
    }
}

pub fn validate_sms_code(code: &str) -> Result<(), AppError> {
    if code.len() != SMS_CODE_LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation(format!(
            "SMS код должен содержать {} цифр",
            SMS_CODE_LENGTH
        )));
    }
    Ok(())
}

pub fn validate_name(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} обязательно", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use shared_models::AppError;

    use super::*;

    #[test]
    fn accepts_canonical_phone() {
        assert_matches!(validate_phone("998991234567"), Ok(()));
    }

    #[test]
    fn rejects_formatted_phone() {
        assert_matches!(validate_phone("998 99 123 45 67"), Err(AppError::Validation(_)));
    }

    #[test]
    fn sms_code_must_be_six_digits() {
        assert_matches!(validate_sms_code("123456"), Ok(()));
        assert_matches!(validate_sms_code("12345"), Err(AppError::Validation(_)));
        assert_matches!(validate_sms_code("12345a"), Err(AppError::Validation(_)));
    }

    #[test]
    fn names_must_be_non_blank() {
        assert_matches!(validate_name("Иван", "Имя"), Ok(()));
        assert_matches!(validate_name("  ", "Имя"), Err(AppError::Validation(_)));
    }
}
