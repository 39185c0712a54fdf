//! Database store wrapper.

use crate::error::{Error, Result};
use crate::kv::KeyValueStore;
use crate::models::*;
use lucid_core::Value;
use native_db::*;
use std::path::Path;
use std::sync::LazyLock;

// Static models for the database
static MODELS: LazyLock<Models> = LazyLock::new(|| {
    let mut models = Models::new();
    models
        .define::<StoredEntry>()
        .expect("StoredEntry model definition is valid");
    models
});

/// Durable key-value store backed by native_db.
pub struct Store {
    db: Database<'static>,
}

impl Store {
    /// Open or create a database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let db = Builder::new()
            .create(&MODELS, path)
            .map_err(|e| Error::Database(e.to_string()))?;
        tracing::info!(path = %path.display(), "Opened dream store");
        Ok(Self { db })
    }

    /// Create an in-memory database.
    pub fn in_memory() -> Result<Self> {
        let db = Builder::new()
            .create_in_memory(&MODELS)
            .map_err(|e| Error::Database(e.to_string()))?;
        tracing::info!("Opened in-memory dream store");
        Ok(Self { db })
    }

    /// Load all stored keys.
    pub fn keys(&self) -> Result<Vec<String>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<StoredEntry>()?;
        let iter = scan.all()?;
        let entries: std::result::Result<Vec<StoredEntry>, _> = iter.collect();
        let entries = entries.map_err(|e| Error::Database(e.to_string()))?;
        Ok(entries.into_iter().map(|e| e.key).collect())
    }

    #[cfg(test)]
    pub(crate) fn put_entry(&mut self, entry: StoredEntry) -> Result<()> {
        let rw = self.db.rw_transaction()?;
        rw.upsert(entry)?;
        rw.commit()?;
        Ok(())
    }
}

impl KeyValueStore for Store {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredEntry> = r.get().primary(key.to_string())?;
        stored.map(|s| s.to_value()).transpose()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let stored = StoredEntry::from_value(key, &value)?;
        let rw = self.db.rw_transaction()?;
        rw.upsert(stored)?;
        rw.commit()?;
        tracing::trace!(key, "Stored entry");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let rw = self.db.rw_transaction()?;
        let stored: Option<StoredEntry> = rw.get().primary(key.to_string())?;
        if let Some(s) = stored {
            rw.remove(s)?;
        }
        rw.commit()?;
        Ok(())
    }
}

impl From<native_db::db_type::Error> for Error {
    fn from(err: native_db::db_type::Error) -> Self {
        Error::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lucid_core::ValueMap;

    fn sample_value() -> Value {
        let mut map = ValueMap::new();
        map.insert("description".into(), Value::from("Dream 1"));
        map.insert("effects".into(), Value::from(vec![0i64, 2]));
        Value::Map(map)
    }

    #[test]
    fn test_in_memory_get_set_remove() {
        let mut store = Store::in_memory().unwrap();
        assert_eq!(store.get("Model").unwrap(), None);

        store.set("Model", sample_value()).unwrap();
        assert_eq!(store.get("Model").unwrap(), Some(sample_value()));

        store.set("Model", Value::Int(7)).unwrap();
        assert_eq!(store.get("Model").unwrap(), Some(Value::Int(7)));
        assert_eq!(store.keys().unwrap(), vec!["Model".to_string()]);

        store.remove("Model").unwrap();
        store.remove("Model").unwrap();
        assert_eq!(store.get("Model").unwrap(), None);
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn test_reopen_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dreams.db");

        {
            let mut store = Store::open(&path).unwrap();
            store.set("Model", sample_value()).unwrap();
        }

        let store = Store::open(&path).unwrap();
        assert_eq!(store.get("Model").unwrap(), Some(sample_value()));
    }
}
