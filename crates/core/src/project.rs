//! Project domain rules.
//!
//! Pure validation used by the API before any write reaches the store.

use crate::error::CoreError;

/// Minimum project name length in characters, measured after trimming.
pub const NAME_MIN_CHARS: usize = 5;

/// Maximum project name length in characters, measured after trimming.
pub const NAME_MAX_CHARS: usize = 50;

/// Validate a project name.
///
/// Rules:
/// - At least [`NAME_MIN_CHARS`] characters.
/// - At most [`NAME_MAX_CHARS`] characters.
///
/// Length is counted in characters, not bytes. Callers are expected to pass
/// the trimmed name; the accepted value is what gets stored.
pub fn validate_project_name(name: &str) -> Result<(), CoreError> {
    let chars = name.chars().count();
    if chars < NAME_MIN_CHARS {
        return Err(CoreError::Validation(format!(
            "Project name must be at least {NAME_MIN_CHARS} characters"
        )));
    }
    if chars > NAME_MAX_CHARS {
        return Err(CoreError::Validation(format!(
            "Project name must not exceed {NAME_MAX_CHARS} characters"
        )));
    }
    Ok(())
}
