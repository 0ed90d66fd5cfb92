//! Browser `localStorage` backend and clock

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use signup_form::{Clock, Storage};
use wasm_bindgen::JsValue;

/// Describe a thrown JS value (e.g. a `QuotaExceededError`)
pub(crate) fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// `window.localStorage`
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    pub fn from_window() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| anyhow!("no global window"))?;
        let inner = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| anyhow!("localStorage is not available"))?;

        Ok(Self { inner })
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.inner.set_item(key, value).map_err(js_error)
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.inner.remove_item(key).map_err(js_error)
    }

    fn name(&self) -> &'static str {
        "localStorage"
    }
}

/// `Date.now()`; `Utc::now()` is unavailable on wasm32-unknown-unknown
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
    }
}
