//! User domain rules for the registration flow.

use crate::error::CoreError;

/// Maximum user display-name length in characters, measured after trimming.
pub const USER_NAME_MAX_CHARS: usize = 100;

/// Maximum email length in characters.
pub const EMAIL_MAX_CHARS: usize = 255;

/// Minimum password length in characters.
pub const PASSWORD_MIN_CHARS: usize = 8;

/// Validate a user display name.
pub fn validate_user_name(name: &str) -> Result<(), CoreError> {
    if name.is_empty() {
        return Err(CoreError::Validation(
            "User name must not be empty".to_string(),
        ));
    }
    if name.chars().count() > USER_NAME_MAX_CHARS {
        return Err(CoreError::Validation(format!(
            "User name must not exceed {USER_NAME_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

/// Validate the shape of an email address.
///
/// Deliberately loose: exactly one `@`, a non-empty local part, a domain
/// containing a dot, and no whitespace. Deliverability is not checked.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.chars().count() > EMAIL_MAX_CHARS {
        return Err(CoreError::Validation(format!(
            "Email must not exceed {EMAIL_MAX_CHARS} characters"
        )));
    }
    if email.contains(char::is_whitespace) {
        return Err(CoreError::Validation(
            "Email must not contain whitespace".to_string(),
        ));
    }
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => {
            return Err(CoreError::Validation(
                "Email must contain exactly one '@'".to_string(),
            ))
        }
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(CoreError::Validation(
            "Email is not a valid address".to_string(),
        ));
    }
    Ok(())
}
