//! Custom garde validators for the registration fields
//!
//! These wrap the plain validators so a struct deriving `garde::Validate` can
//! reuse the exact rules and messages of the form.
//!
//! # Example
//!
//! ```ignore
//! use garde::Validate;
//!
//! #[derive(Validate)]
//! struct Registration {
//!     #[garde(custom(name_rule))]
//!     name: String,
//!     #[garde(custom(email_rule))]
//!     email: String,
//!     #[garde(custom(password_rule))]
//!     password: String,
//!     #[garde(custom(confirm_matches(&self.password)))]
//!     confirm: String,
//! }
//! ```

use crate::confirm::validate_confirm;
use crate::email::validate_email;
use crate::name::validate_name;
use crate::password::{validate_password, PasswordRules};

fn to_garde(result: Result<(), String>) -> Result<(), garde::Error> {
    result.map_err(garde::Error::new)
}

/// Validator: name must not be blank
pub fn name_rule(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    to_garde(validate_name(value))
}

/// Validator: simple three-part email shape
pub fn email_rule(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    to_garde(validate_email(value))
}

/// Validator: password complexity with the default rules
pub fn password_rule(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    to_garde(validate_password(value, &PasswordRules::default()))
}

/// Validator: password complexity with explicit rules, for use with
/// `#[garde(context(PasswordRules))]`
pub fn password_rule_with(value: &str, rules: &PasswordRules) -> Result<(), garde::Error> {
    to_garde(validate_password(value, rules))
}

/// Validator factory: confirmation must equal the given password
pub fn confirm_matches(password: &str) -> impl FnOnce(&str, &()) -> Result<(), garde::Error> + '_ {
    move |value, _ctx| to_garde(validate_confirm(value, password))
}
