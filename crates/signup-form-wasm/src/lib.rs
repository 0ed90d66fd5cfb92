//! Signup Form WASM
//!
//! WebAssembly bindings for the registration form.
//! The page keeps its markup and CSS; Rust owns validation state, the
//! strength label, submit gating and the `localStorage` record slot.

use serde::{Deserialize, Serialize};
use signup_form::{
    Field, FieldCheck, FormConfig, FormValidator, FormValues, RegistrationForm,
    SubmissionRecord, SubmitOutcome,
};
use signup_validation_core as core;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod storage;

pub use storage::{BrowserClock, LocalStorage};

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Validation error returned to JavaScript
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

/// Submit result returned to JavaScript
#[derive(Serialize, Debug)]
#[serde(tag = "status", rename_all = "lowercase")]
enum SubmitResponse {
    Saved { record: SubmissionRecord },
    Rejected { focus: &'static str },
}

fn parse_field(field_name: &str) -> Result<Field, JsValue> {
    field_name.parse::<Field>().map_err(|e| JsValue::from_str(&e))
}

fn check_field(field_name: &str, values: &FormValues) -> Result<FieldCheck, String> {
    let field = field_name.parse::<Field>()?;
    Ok(FormValidator::default().check(field, values))
}

fn check_form(values: &FormValues) -> Vec<ValidationError> {
    let result = FormValidator::default().validate(values);

    Field::ALL
        .into_iter()
        .filter_map(|field| {
            result.get_error(field).map(|message| ValidationError {
                field: field.id().to_string(),
                message: message.clone(),
            })
        })
        .collect()
}

fn parse_values(values: JsValue) -> Result<FormValues, JsValue> {
    serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse form values: {}", e)))
}

/// Validate a single field against the current form values
///
/// # Example (JavaScript)
/// ```javascript
/// const { valid, message } = validateField('confirm-password', {
///     name: 'Ann', email: 'ann@x.com', password: 'Abcdef1!', confirm: 'Abcdef1?'
/// });
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field_name: &str, values: JsValue) -> Result<JsValue, JsValue> {
    let values = parse_values(values)?;
    let check = check_field(field_name, &values).map_err(|e| JsValue::from_str(&e))?;
    Ok(serde_wasm_bindgen::to_value(&check)?)
}

/// Validate every field; returns an array of errors in form order
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(values: JsValue) -> Result<JsValue, JsValue> {
    let values = parse_values(values)?;
    Ok(serde_wasm_bindgen::to_value(&check_form(&values))?)
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    core::is_valid_email(email)
}

/// Strength label for a password: "—", "Weak", "Medium" or "Strong"
#[wasm_bindgen(js_name = passwordStrength)]
pub fn password_strength_js(password: &str) -> String {
    core::StrengthIndicator::for_password(password, &core::PasswordRules::default())
        .label()
        .to_string()
}

/// Form state bound to `window.localStorage`
#[wasm_bindgen]
pub struct RegistrationFormHandle {
    form: Rc<RefCell<RegistrationForm<LocalStorage, BrowserClock>>>,
}

#[wasm_bindgen]
impl RegistrationFormHandle {
    /// Create a form; `config` is optional TOML text
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<String>) -> Result<RegistrationFormHandle, JsValue> {
        let config = match config {
            Some(text) => FormConfig::from_toml_str(&text)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {:#}", e)))?,
            None => FormConfig::default(),
        };
        let storage =
            LocalStorage::from_window().map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self {
            form: Rc::new(RefCell::new(RegistrationForm::new(
                storage,
                BrowserClock,
                &config,
            ))),
        })
    }

    /// Page load; returns whether submit is enabled
    pub fn load(&self) -> bool {
        self.form.borrow_mut().load()
    }

    /// Input event; returns whether submit is enabled
    pub fn input(&self, field_name: &str, value: &str) -> Result<bool, JsValue> {
        let field = parse_field(field_name)?;
        Ok(self.form.borrow_mut().input(field, value))
    }

    /// Submit event.
    ///
    /// Resolves to `{status: "saved", record}` or `{status: "rejected", focus}`
    /// where `focus` is the element id to focus. Throws the "Could not save
    /// data locally" message on persistence failure. After a save the banner
    /// hide is scheduled with `setTimeout`; `onHide` is called once it ran.
    pub fn submit(&self, on_hide: Option<js_sys::Function>) -> Result<JsValue, JsValue> {
        let outcome = self
            .form
            .borrow_mut()
            .submit()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let response = match outcome {
            SubmitOutcome::Saved(record) => {
                self.schedule_hide(on_hide)?;
                SubmitResponse::Saved { record }
            }
            SubmitOutcome::Rejected { focus } => SubmitResponse::Rejected { focus: focus.id() },
        };

        Ok(serde_wasm_bindgen::to_value(&response)?)
    }

    /// Current render state
    pub fn view(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.form.borrow().view())?)
    }

    /// Every stored record
    pub fn records(&self) -> Result<JsValue, JsValue> {
        let records = self
            .form
            .borrow()
            .records()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(serde_wasm_bindgen::to_value(&records)?)
    }

    fn schedule_hide(&self, on_hide: Option<js_sys::Function>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let delay = i32::try_from(self.form.borrow().hide_after().num_milliseconds())
            .unwrap_or(i32::MAX);

        let form = Rc::clone(&self.form);
        let callback = Closure::once_into_js(move || {
            let hidden = form.borrow_mut().tick();
            if let Some(on_hide) = on_hide {
                notify_hidden(&on_hide, hidden);
            }
        });

        window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay,
        )?;
        Ok(())
    }
}

/// Calls the page's hide callback. An exception it throws is logged to the
/// console, since nothing is left on the stack to return it to.
fn notify_hidden(on_hide: &js_sys::Function, hidden: bool) -> bool {
    match on_hide.call1(&JsValue::NULL, &JsValue::from_bool(hidden)) {
        Ok(_) => true,
        Err(e) => {
            web_sys::console::error_2(
                &JsValue::from_str("success banner hide callback failed:"),
                &e,
            );
            false
        }
    }
}
