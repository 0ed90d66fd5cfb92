//! Password confirmation

/// Validates the confirmation field against the current password.
///
/// Comparison is exact; neither side is trimmed.
pub fn validate_confirm(confirm: &str, password: &str) -> Result<(), String> {
    if confirm.is_empty() {
        return Err("Please confirm your password".to_string());
    }

    if confirm != password {
        return Err("Passwords do not match".to_string());
    }

    Ok(())
}
