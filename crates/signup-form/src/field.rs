// File: signup-form/src/field.rs
// Purpose: Form fields, their visual state and cross-field dependencies

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four registration inputs, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Password,
    Confirm,
}

impl Field {
    /// All fields in form order. Focus and the aggregate check follow it.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Password, Field::Confirm];

    /// Element id of the input
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::Confirm => "confirm-password",
        }
    }

    /// Element id of the adjacent error region
    pub fn error_id(&self) -> &'static str {
        match self {
            Field::Name => "name-error",
            Field::Email => "email-error",
            Field::Password => "password-error",
            Field::Confirm => "confirm-error",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::Confirm => "Confirm password",
        }
    }

    /// Fields whose validity reads this field's value.
    ///
    /// Changing a field re-validates each of its dependents.
    pub fn dependents(&self) -> &'static [Field] {
        match self {
            Field::Password => &[Field::Confirm],
            Field::Name | Field::Email | Field::Confirm => &[],
        }
    }

    fn index(&self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Password => 2,
            Field::Confirm => 3,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Field {
    type Err = String;

    /// Accepts the element id or the lowercase variant name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "password" => Ok(Field::Password),
            "confirm" | "confirm-password" => Ok(Field::Confirm),
            other => Err(format!("Unknown field: {}", other)),
        }
    }
}

/// Visual validity marker of an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldStatus {
    /// Untouched or reset: neither valid nor invalid styling
    #[default]
    Neutral,
    Valid,
    Invalid,
}

impl FieldStatus {
    /// CSS class for the input; empty when neutral
    pub fn class(&self) -> &'static str {
        match self {
            FieldStatus::Neutral => "",
            FieldStatus::Valid => "valid",
            FieldStatus::Invalid => "invalid",
        }
    }
}

/// Current value and rendered state of one input
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldState {
    pub value: String,
    pub status: FieldStatus,
    /// Error message; empty unless the status is invalid
    pub message: String,
}

impl FieldState {
    pub fn set_valid(&mut self) {
        self.status = FieldStatus::Valid;
        self.message.clear();
    }

    pub fn set_invalid(&mut self, message: impl Into<String>) {
        self.status = FieldStatus::Invalid;
        self.message = message.into();
    }

    /// Clears value and styling back to the initial state
    pub fn clear(&mut self) {
        self.value.clear();
        self.status = FieldStatus::Neutral;
        self.message.clear();
    }
}

/// The four field states, indexed by [`Field`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fields {
    states: [FieldState; 4],
}

impl Fields {
    pub fn get(&self, field: Field) -> &FieldState {
        &self.states[field.index()]
    }

    pub fn get_mut(&mut self, field: Field) -> &mut FieldState {
        &mut self.states[field.index()]
    }

    pub fn value(&self, field: Field) -> &str {
        &self.get(field).value
    }

    /// First field in form order currently marked invalid
    pub fn first_invalid(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| self.get(*field).status == FieldStatus::Invalid)
    }

    pub fn clear(&mut self) {
        self.states.iter_mut().for_each(FieldState::clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_and_ids() {
        let ids: Vec<&str> = Field::ALL.iter().map(|f| f.id()).collect();
        assert_eq!(ids, vec!["name", "email", "password", "confirm-password"]);
    }

    #[test]
    fn test_dependents() {
        assert_eq!(Field::Password.dependents(), &[Field::Confirm]);
        assert!(Field::Name.dependents().is_empty());
        assert!(Field::Confirm.dependents().is_empty());
    }

    #[test]
    fn test_parse_field() {
        assert_eq!("confirm-password".parse::<Field>(), Ok(Field::Confirm));
        assert_eq!("confirm".parse::<Field>(), Ok(Field::Confirm));
        assert_eq!("email".parse::<Field>(), Ok(Field::Email));
        assert!("phone".parse::<Field>().is_err());
    }

    #[test]
    fn test_first_invalid_follows_form_order() {
        let mut fields = Fields::default();
        assert_eq!(fields.first_invalid(), None);

        fields.get_mut(Field::Confirm).set_invalid("Passwords do not match");
        fields.get_mut(Field::Email).set_invalid("Enter a valid email address");
        assert_eq!(fields.first_invalid(), Some(Field::Email));

        fields.get_mut(Field::Email).set_valid();
        assert_eq!(fields.first_invalid(), Some(Field::Confirm));
    }

    #[test]
    fn test_clear_resets_state() {
        let mut fields = Fields::default();
        let name = fields.get_mut(Field::Name);
        name.value = "Ann".to_string();
        name.set_invalid("oops");

        fields.clear();
        assert_eq!(fields.get(Field::Name), &FieldState::default());
    }
}
