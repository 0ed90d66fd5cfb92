//! Storage backends for persisted form submissions

use anyhow::Result;

pub mod filesystem;
pub mod memory;

pub use filesystem::FilesystemStorage;
pub use memory::MemoryStorage;

/// Named string slots, the shape of browser `localStorage`
pub trait Storage {
    /// Get the raw value of a slot, `None` when absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value of a slot
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a slot; removing an absent slot is not an error
    fn delete(&self, key: &str) -> Result<()>;

    /// Get storage backend name
    fn name(&self) -> &'static str;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<()> {
        (**self).delete(key)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
