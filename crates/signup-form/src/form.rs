// File: signup-form/src/form.rs
// Purpose: Registration form state, validation cascade and submission

use crate::banner::SuccessBanner;
use crate::clock::{Clock, SystemClock};
use crate::config::FormConfig;
use crate::field::{Field, FieldState, FieldStatus, Fields};
use crate::record::{RecordStore, StoreError, SubmissionRecord};
use crate::storage::Storage;
use crate::validation::{FormValidator, FormValues};
use chrono::Duration;
use serde::Serialize;
use signup_validation_core::{trim_input, StrengthIndicator};
use thiserror::Error;

/// Result of a submission attempt that did not hit a persistence failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Record appended; the form has been reset
    Saved(SubmissionRecord),
    /// Some field is invalid; nothing was persisted
    Rejected { focus: Field },
}

/// Persistence failure during submit. The form keeps the user's input.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Could not save data locally: {0}")]
    Persist(#[from] StoreError),
}

/// The registration form.
///
/// Owns the four field states, the strength indicator, submit enablement and
/// the success banner. Every event handler runs to completion synchronously.
pub struct RegistrationForm<S, C = SystemClock> {
    validator: FormValidator,
    fields: Fields,
    strength: StrengthIndicator,
    submit_enabled: bool,
    banner: SuccessBanner,
    hide_after: Duration,
    store: RecordStore<S>,
    clock: C,
}

impl<S: Storage> RegistrationForm<S, SystemClock> {
    /// Form with default configuration and the wall clock
    pub fn with_storage(storage: S) -> Self {
        Self::new(storage, SystemClock, &FormConfig::default())
    }
}

impl<S: Storage, C: Clock> RegistrationForm<S, C> {
    pub fn new(storage: S, clock: C, config: &FormConfig) -> Self {
        Self {
            validator: FormValidator::new(config.password.clone()),
            fields: Fields::default(),
            strength: StrengthIndicator::Placeholder,
            submit_enabled: false,
            banner: SuccessBanner::default(),
            hide_after: config.success_banner.hide_after(),
            store: RecordStore::new(storage, config.storage.key.clone()),
            clock,
        }
    }

    /// Initial page load: runs the aggregate check once.
    pub fn load(&mut self) -> bool {
        self.check_all()
    }

    /// Input event on one field.
    ///
    /// Validates the field, then every field that declared a dependency on it,
    /// then the whole form. Returns whether submit is now enabled.
    pub fn input(&mut self, field: Field, value: impl Into<String>) -> bool {
        self.fields.get_mut(field).value = value.into();

        self.validate_field(field);
        for dependent in field.dependents() {
            self.validate_field(*dependent);
        }

        self.check_all()
    }

    /// Runs one field validator and applies its visual state.
    pub fn validate_field(&mut self, field: Field) -> bool {
        let values = FormValues::from_fields(&self.fields);
        let check = self.validator.check(field, &values);

        if field == Field::Password {
            self.strength = StrengthIndicator::for_password(&values.password, self.validator.rules());
        }

        let state = self.fields.get_mut(field);
        if check.valid {
            state.set_valid();
        } else {
            state.set_invalid(check.message);
        }

        tracing::debug!("Validated {}: valid={}", field, check.valid);
        check.valid
    }

    /// Aggregate check gating submit.
    ///
    /// Fields are validated in form order and marking stops at the first
    /// failure, so fields after it keep their previous state.
    pub fn check_all(&mut self) -> bool {
        let ok = Field::ALL.into_iter().all(|field| self.validate_field(field));
        self.submit_enabled = ok;

        tracing::debug!("Aggregate check: submit_enabled={}", ok);
        ok
    }

    /// Submit event.
    ///
    /// On a persistence failure the form is left exactly as it was, apart
    /// from the markers the aggregate check refreshed.
    pub fn submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        if !self.check_all() {
            let focus = self.fields.first_invalid().unwrap_or(Field::Name);
            tracing::warn!("Submission rejected, focusing {}", focus);
            return Ok(SubmitOutcome::Rejected { focus });
        }

        let now = self.clock.now();
        let now_ms = now.timestamp_millis();
        let name = trim_input(self.fields.value(Field::Name)).to_string();
        let email = trim_input(self.fields.value(Field::Email)).to_string();
        let password = self.fields.value(Field::Password).to_string();

        let saved = self.store.append_with(|newest| {
            let id = match newest {
                Some(id) if id >= now_ms => id.checked_add(1).ok_or(StoreError::IdExhausted(id))?,
                _ => now_ms,
            };

            Ok(SubmissionRecord {
                id,
                name,
                email,
                password,
            })
        });

        let record = match saved {
            Ok(record) => record,
            Err(e) => {
                tracing::error!("Failed to persist submission: {}", e);
                return Err(e.into());
            }
        };

        tracing::info!("Saved registration {} to slot '{}'", record.id, self.store.key());

        self.banner.show(now, self.hide_after);
        self.reset();

        Ok(SubmitOutcome::Saved(record))
    }

    /// Applies due success-banner hides. Returns true if the banner was hidden.
    pub fn tick(&mut self) -> bool {
        self.banner.tick(self.clock.now())
    }

    /// Clears every field, the strength indicator and submit enablement.
    pub fn reset(&mut self) {
        self.fields.clear();
        self.strength = StrengthIndicator::Placeholder;
        self.submit_enabled = false;
    }

    pub fn field(&self, field: Field) -> &FieldState {
        self.fields.get(field)
    }

    pub fn values(&self) -> FormValues {
        FormValues::from_fields(&self.fields)
    }

    pub fn strength(&self) -> StrengthIndicator {
        self.strength
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn success_visible(&self) -> bool {
        self.banner.is_visible()
    }

    pub fn hide_after(&self) -> Duration {
        self.hide_after
    }

    /// Every record persisted so far
    pub fn records(&self) -> Result<Vec<SubmissionRecord>, StoreError> {
        self.store.load()
    }

    /// Snapshot of everything the UI renders
    pub fn view(&self) -> ViewState {
        ViewState {
            fields: Field::ALL
                .into_iter()
                .map(|field| FieldView::new(field, self.fields.get(field)))
                .collect(),
            strength: StrengthView {
                label: self.strength.label(),
                class: self.strength.class(),
            },
            submit_enabled: self.submit_enabled,
            success_visible: self.banner.is_visible(),
        }
    }
}

/// Rendered state of one input and its error region
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldView {
    pub field: Field,
    pub id: &'static str,
    pub label: &'static str,
    pub error_id: &'static str,
    pub value: String,
    pub status: FieldStatus,
    pub class: &'static str,
    pub message: String,
}

impl FieldView {
    fn new(field: Field, state: &FieldState) -> Self {
        Self {
            field,
            id: field.id(),
            label: field.label(),
            error_id: field.error_id(),
            value: state.value.clone(),
            status: state.status,
            class: state.status.class(),
            message: state.message.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthView {
    pub label: &'static str,
    pub class: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub fields: Vec<FieldView>,
    pub strength: StrengthView,
    pub submit_enabled: bool,
    pub success_visible: bool,
}
