//! # Signup Form
//!
//! State machine behind a registration form: four validated fields, a
//! password strength indicator, submit gating, and persistence of each
//! successful submission into a named storage slot.
//!
//! ## Example
//!
//! ```rust
//! use signup_form::{Field, MemoryStorage, RegistrationForm, SubmitOutcome};
//!
//! let mut form = RegistrationForm::with_storage(MemoryStorage::new());
//! form.load();
//!
//! form.input(Field::Name, "Ann");
//! form.input(Field::Email, "ann@x.com");
//! form.input(Field::Password, "Abcdef1!");
//! assert!(form.input(Field::Confirm, "Abcdef1!"));
//!
//! let outcome = form.submit().unwrap();
//! assert!(matches!(outcome, SubmitOutcome::Saved(_)));
//! assert!(!form.submit_enabled());
//! ```

pub mod banner;
pub mod clock;
pub mod config;
pub mod field;
pub mod form;
pub mod record;
pub mod storage;
pub mod validation;

pub use banner::SuccessBanner;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{BannerConfig, FormConfig, StorageBackend, StorageConfig};
pub use field::{Field, FieldState, FieldStatus};
pub use form::{RegistrationForm, SubmitError, SubmitOutcome, ViewState};
pub use record::{RecordStore, StoreError, SubmissionRecord, DEFAULT_STORAGE_KEY};
pub use storage::{FilesystemStorage, MemoryStorage, Storage};
pub use validation::{FieldCheck, FormValidator, FormValues, ValidationResult};

pub use signup_validation_core::{Strength, StrengthIndicator};
