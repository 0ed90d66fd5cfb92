// File: signup-form/src/record.rs
// Purpose: Submission records and the append-only record slot

use crate::storage::Storage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default name of the storage slot holding all records
pub const DEFAULT_STORAGE_KEY: &str = "ifv_users_v1";

/// A single persisted registration entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    /// Creation time in milliseconds, unique within the slot
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Stored as entered
    pub password: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Backend(#[from] anyhow::Error),

    #[error("stored records are corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("failed to encode records: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("no record id left after {0}")]
    IdExhausted(i64),
}

/// The ordered sequence of records kept in one storage slot.
///
/// Reads default to an empty sequence when the slot is absent or holds an
/// empty string; writes always replace the slot with the full sequence.
pub struct RecordStore<S> {
    storage: S,
    key: String,
}

impl<S: Storage> RecordStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load every record. Corrupt data is an error, never treated as empty.
    pub fn load(&self) -> Result<Vec<SubmissionRecord>, StoreError> {
        match self.storage.get(&self.key)? {
            None => Ok(Vec::new()),
            Some(raw) if raw.is_empty() => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(StoreError::Corrupt),
        }
    }

    /// Append a record built by `make`, which receives the id of the newest
    /// existing record so it can pick a unique one. Nothing is written when
    /// `make` fails.
    pub fn append_with(
        &self,
        make: impl FnOnce(Option<i64>) -> Result<SubmissionRecord, StoreError>,
    ) -> Result<SubmissionRecord, StoreError> {
        let mut records = self.load()?;
        let record = make(records.iter().map(|r| r.id).max())?;
        records.push(record.clone());

        let encoded = serde_json::to_string(&records).map_err(StoreError::Encode)?;
        self.storage.set(&self.key, &encoded)?;

        tracing::debug!(
            "Wrote {} records to {} slot '{}'",
            records.len(),
            self.storage.name(),
            self.key
        );

        Ok(record)
    }

    pub fn append(&self, record: SubmissionRecord) -> Result<SubmissionRecord, StoreError> {
        self.append_with(|_| Ok(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use pretty_assertions::assert_eq;

    fn record(id: i64, name: &str) -> SubmissionRecord {
        SubmissionRecord {
            id,
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            password: "Abcdef1!".to_string(),
        }
    }

    #[test]
    fn test_absent_slot_is_empty() {
        let store = RecordStore::new(MemoryStorage::new(), DEFAULT_STORAGE_KEY);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_empty_slot_is_empty() {
        let storage = MemoryStorage::new();
        storage.set(DEFAULT_STORAGE_KEY, "").unwrap();
        let store = RecordStore::new(storage.clone(), DEFAULT_STORAGE_KEY);

        assert!(store.load().unwrap().is_empty());

        store.append(record(1, "Ann")).unwrap();
        assert_eq!(store.load().unwrap(), vec![record(1, "Ann")]);
    }

    #[test]
    fn test_failed_make_writes_nothing() {
        let storage = MemoryStorage::new();
        let store = RecordStore::new(storage.clone(), "users");
        store.append(record(i64::MAX, "Ann")).unwrap();
        let before = storage.get("users").unwrap();

        let result = store.append_with(|newest| {
            let id = newest.unwrap_or(0);
            id.checked_add(1)
                .map(|next| record(next, "Bob"))
                .ok_or(StoreError::IdExhausted(id))
        });

        assert!(matches!(result, Err(StoreError::IdExhausted(i64::MAX))));
        assert_eq!(storage.get("users").unwrap(), before);
    }

    #[test]
    fn test_append_preserves_order() {
        let storage = MemoryStorage::new();
        let store = RecordStore::new(storage.clone(), DEFAULT_STORAGE_KEY);

        store.append(record(1, "Ann")).unwrap();
        store.append(record(2, "Bob")).unwrap();

        assert_eq!(store.load().unwrap(), vec![record(1, "Ann"), record(2, "Bob")]);

        let raw = storage.get(DEFAULT_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(
            raw,
            r#"[{"id":1,"name":"Ann","email":"ann@x.com","password":"Abcdef1!"},{"id":2,"name":"Bob","email":"bob@x.com","password":"Abcdef1!"}]"#
        );
    }

    #[test]
    fn test_append_with_sees_newest_id() {
        let store = RecordStore::new(MemoryStorage::new(), "users");
        store.append(record(7, "Ann")).unwrap();
        store.append(record(3, "Bob")).unwrap();

        let saved = store
            .append_with(|newest| Ok(record(newest.unwrap_or(0) + 1, "Cid")))
            .unwrap();
        assert_eq!(saved.id, 8);
    }

    #[test]
    fn test_corrupt_slot_is_an_error() {
        let storage = MemoryStorage::new();
        storage.set("users", "{not json").unwrap();
        let store = RecordStore::new(storage.clone(), "users");

        assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
        assert!(matches!(
            store.append(record(1, "Ann")),
            Err(StoreError::Corrupt(_))
        ));

        // untouched
        assert_eq!(storage.get("users").unwrap().as_deref(), Some("{not json"));
    }

    #[test]
    fn test_extra_fields_in_stored_records_are_ignored() {
        let storage = MemoryStorage::new();
        storage
            .set(
                "users",
                r#"[{"id":1,"name":"Ann","email":"a@b.c","password":"x","extra":true}]"#,
            )
            .unwrap();
        let store = RecordStore::new(storage, "users");
        assert_eq!(store.load().unwrap().len(), 1);
    }
}
