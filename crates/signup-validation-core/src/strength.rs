//! Password strength scoring
//!
//! Strength is advisory feedback shown next to the password field. It never
//! decides whether the form can be submitted.

use crate::password::{has_digit, has_letter, has_uppercase, PasswordRules};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text shown instead of a rating while the password is empty
pub const STRENGTH_PLACEHOLDER: &str = "—";

/// Password strength categories, ordered weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// Maps a criteria score (0..=4) to a category
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => Strength::Weak,
            2 | 3 => Strength::Medium,
            _ => Strength::Strong,
        }
    }

    /// Lowercase name, also used as the CSS class of the label
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
        }
    }

    /// Capitalised label for display
    pub fn label(&self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Counts satisfied criteria: length, digit, special character, and a letter
/// together with an uppercase letter.
pub fn strength_score(password: &str, rules: &PasswordRules) -> u8 {
    let criteria = [
        rules.is_long_enough(password),
        has_digit(password),
        rules.has_special(password),
        has_letter(password) && has_uppercase(password),
    ];

    criteria.iter().filter(|&&met| met).count() as u8
}

pub fn password_strength(password: &str, rules: &PasswordRules) -> Strength {
    Strength::from_score(strength_score(password, rules))
}

/// What the strength label region shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "strength", rename_all = "lowercase")]
pub enum StrengthIndicator {
    /// Empty password: show [`STRENGTH_PLACEHOLDER`]
    #[default]
    Placeholder,
    Rated(Strength),
}

impl StrengthIndicator {
    pub fn for_password(password: &str, rules: &PasswordRules) -> Self {
        if password.is_empty() {
            StrengthIndicator::Placeholder
        } else {
            StrengthIndicator::Rated(password_strength(password, rules))
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthIndicator::Placeholder => STRENGTH_PLACEHOLDER,
            StrengthIndicator::Rated(strength) => strength.label(),
        }
    }

    /// CSS class for the label; empty for the placeholder
    pub fn class(&self) -> &'static str {
        match self {
            StrengthIndicator::Placeholder => "",
            StrengthIndicator::Rated(strength) => strength.as_str(),
        }
    }
}
