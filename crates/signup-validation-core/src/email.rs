//! Email validation functions

use crate::name::trim_input;
use once_cell::sync::Lazy;
use regex::Regex;

/// local part, `@`, domain, `.`, suffix; none of them may hold whitespace or `@`
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Checks the simple three-part email shape.
///
/// This is deliberately loose: `a@b.c` passes, `a@b` and `a b@c.d` do not.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validates an email field value.
///
/// The value is trimmed, byte-order marks included, before both checks.
pub fn validate_email(email: &str) -> Result<(), String> {
    let email = trim_input(email);

    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }

    if !is_valid_email(email) {
        return Err("Enter a valid email address".to_string());
    }

    Ok(())
}
