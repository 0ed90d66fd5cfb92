// File: signup-form/src/validation.rs
// Purpose: Field checks over an explicit form-values struct

use crate::field::{Field, Fields};
use serde::{Deserialize, Serialize};
use signup_validation_core as core;
use signup_validation_core::PasswordRules;
use std::collections::HashMap;

/// Raw text of the four inputs
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormValues {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Confirm => &self.confirm,
        }
    }

    pub fn from_fields(fields: &Fields) -> Self {
        Self {
            name: fields.value(Field::Name).to_string(),
            email: fields.value(Field::Email).to_string(),
            password: fields.value(Field::Password).to_string(),
            confirm: fields.value(Field::Confirm).to_string(),
        }
    }
}

/// Outcome of one field validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCheck {
    pub valid: bool,
    /// Empty when valid
    pub message: String,
}

impl FieldCheck {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    pub fn from_result(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(message) => Self::error(message),
        }
    }
}

/// Result of validating every field at once
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: HashMap<Field, String>,
}

impl ValidationResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn get_error(&self, field: Field) -> Option<&String> {
        self.errors.get(&field)
    }

    /// First failing field in form order
    pub fn first_error(&self) -> Option<(Field, &String)> {
        Field::ALL
            .into_iter()
            .find_map(|field| self.errors.get(&field).map(|message| (field, message)))
    }
}

/// Runs the field validators with the configured password rules
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    rules: PasswordRules,
}

impl FormValidator {
    pub fn new(rules: PasswordRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &PasswordRules {
        &self.rules
    }

    /// Validates one field. Confirm also reads the password value.
    pub fn check(&self, field: Field, values: &FormValues) -> FieldCheck {
        let result = match field {
            Field::Name => core::validate_name(&values.name),
            Field::Email => core::validate_email(&values.email),
            Field::Password => core::validate_password(&values.password, &self.rules),
            Field::Confirm => core::validate_confirm(&values.confirm, &values.password),
        };

        FieldCheck::from_result(result)
    }

    /// Validates every field, collecting all failures
    pub fn validate(&self, values: &FormValues) -> ValidationResult {
        let errors: HashMap<Field, String> = Field::ALL
            .into_iter()
            .filter_map(|field| {
                let check = self.check(field, values);
                (!check.valid).then_some((field, check.message))
            })
            .collect();

        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}
