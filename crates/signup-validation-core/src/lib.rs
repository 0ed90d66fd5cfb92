//! Signup Validation Core
//!
//! Pure validation functions for the registration form fields.
//! Used by the form state machine and by the WASM bindings, so the browser
//! and native tests run exactly the same rules.

pub mod confirm;
pub mod email;
pub mod name;
pub mod password;
pub mod strength;

#[cfg(feature = "garde")]
pub mod garde_validators;

// Re-export all validators
pub use confirm::*;
pub use email::*;
pub use name::*;
pub use password::*;
pub use strength::*;

#[cfg(feature = "garde")]
pub use garde_validators::*;
