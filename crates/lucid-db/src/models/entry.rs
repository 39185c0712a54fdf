//! Key-value entry model for database storage.

use crate::error::{Error, Result};
use lucid_core::{DecodeError, Value};
use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};

/// One stored key and its value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 1, version = 1)]
#[native_db]
pub struct StoredEntry {
    /// Primary key - the store key.
    #[primary_key]
    pub key: String,
    /// Serialized value.
    pub data: Vec<u8>,
}

impl StoredEntry {
    /// Create from a key and a value.
    pub fn from_value(key: &str, value: &Value) -> Result<Self> {
        let data = bincode::serialize(value).map_err(|e| Error::Serialization(e.to_string()))?;
        Ok(Self {
            key: key.to_string(),
            data,
        })
    }

    /// Convert back to a value.
    ///
    /// Bytes that do not deserialize are reported as a decode failure.
    pub fn to_value(&self) -> Result<Value> {
        bincode::deserialize(&self.data)
            .map_err(|e| Error::Decode(DecodeError::Corrupt(e.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lucid_core::ValueMap;

    #[test]
    fn test_entry_value_conversion() {
        let mut map = ValueMap::new();
        map.insert("dreams".into(), Value::List(vec![]));
        map.insert("favoriteCreature".into(), Value::Int(5));
        let value = Value::Map(map);

        let entry = StoredEntry::from_value("Model", &value).unwrap();
        assert_eq!(entry.key, "Model");
        assert_eq!(entry.to_value().unwrap(), value);
    }

    #[test]
    fn test_corrupt_entry() {
        let entry = StoredEntry {
            key: "Model".into(),
            data: vec![0xff, 0xff, 0xff, 0xff, 0xff],
        };
        assert!(matches!(
            entry.to_value(),
            Err(Error::Decode(DecodeError::Corrupt(_)))
        ));
    }
}
