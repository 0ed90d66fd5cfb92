//! Password validation functions

use serde::{Deserialize, Serialize};

/// Special characters accepted by the default rules
pub const DEFAULT_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Minimum password length used by the default rules
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Password complexity rules
///
/// Shared by [`validate_password`] and the strength score so both agree on
/// what counts as long enough and what counts as a special character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordRules {
    /// Minimum length, counted in characters
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    /// Characters that satisfy the special character rule
    #[serde(default = "default_special_chars")]
    pub special_chars: String,
}

fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

fn default_special_chars() -> String {
    DEFAULT_SPECIAL_CHARS.to_string()
}

impl Default for PasswordRules {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            special_chars: default_special_chars(),
        }
    }
}

impl PasswordRules {
    pub fn is_long_enough(&self, password: &str) -> bool {
        password.chars().count() >= self.min_length
    }

    pub fn has_special(&self, password: &str) -> bool {
        password.chars().any(|c| self.special_chars.contains(c))
    }
}

pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

pub fn has_letter(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_alphabetic())
}

pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

/// Validates a password against the rules
///
/// Rules are checked in a fixed order and only the first failure is reported:
/// empty, too short, missing digit, missing special character.
/// The password is never trimmed.
pub fn validate_password(password: &str, rules: &PasswordRules) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password cannot be empty".to_string());
    }

    if !rules.is_long_enough(password) {
        return Err(format!(
            "Password must be at least {} characters",
            rules.min_length
        ));
    }

    if !has_digit(password) {
        return Err("Password must include at least one number".to_string());
    }

    if !rules.has_special(password) {
        return Err("Password must include at least one special character".to_string());
    }

    Ok(())
}
