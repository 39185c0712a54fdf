//! Saving and loading the dream list model.

use crate::error::Result;
use crate::kv::KeyValueStore;
use lucid_core::{DecodeError, Dream, DreamListModel, Value};

/// Key the list model is stored under.
pub const MODEL_KEY: &str = "Model";

/// Saves and loads the dream list model through a store handle.
///
/// Holds no data of its own; every call goes straight to the store.
#[derive(Debug)]
pub struct DataManager<S> {
    store: S,
}

impl<S: KeyValueStore> DataManager<S> {
    /// Wrap a store handle.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Save the model under [`MODEL_KEY`], replacing any previous one.
    pub fn save(&mut self, model: &DreamListModel) -> Result<()> {
        self.store.set(MODEL_KEY, Value::Map(model.encode()))?;
        tracing::debug!(key = MODEL_KEY, dreams = model.len(), "Saved dream list model");
        Ok(())
    }

    /// Load the saved model.
    ///
    /// Returns `Ok(None)` when nothing has been saved, and a decode error when
    /// the stored value is not a valid model.
    pub fn load(&self) -> Result<Option<DreamListModel>> {
        let Some(value) = self.store.get(MODEL_KEY)? else {
            tracing::debug!(key = MODEL_KEY, "No saved dream list model");
            return Ok(None);
        };

        let decoded = value
            .as_map()
            .ok_or(DecodeError::TypeMismatch {
                field: MODEL_KEY,
                expected: "map",
                got: value.type_name(),
            })
            .and_then(DreamListModel::decode);

        match decoded {
            Ok(model) => {
                tracing::debug!(key = MODEL_KEY, dreams = model.len(), "Loaded dream list model");
                Ok(Some(model))
            }
            Err(e) => {
                tracing::warn!(
                    key = MODEL_KEY,
                    error = %e,
                    stored = %value,
                    "Stored dream list model is invalid"
                );
                Err(e.into())
            }
        }
    }

    /// Load the saved model, or the initial model when nothing has been saved.
    pub fn load_or_initial(&self) -> Result<DreamListModel> {
        Ok(self.load()?.unwrap_or_else(DreamListModel::initial))
    }

    /// Delete the saved model.
    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(MODEL_KEY)
    }

    /// The three dreams a brand-new list starts with.
    pub fn default_seed_dreams() -> Vec<Dream> {
        lucid_core::default_seed_dreams()
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::kv::MemoryStore;
    use crate::models::StoredEntry;
    use crate::store::Store;
    use lucid_core::{Creature, Effect, UnicornColor, ValueMap};

    fn edited_model() -> DreamListModel {
        let mut model = DreamListModel::initial();
        model.favorite_creature = Creature::Shark;
        model.append(
            Dream::new("Night swim", Creature::Shark, [Effect::Rain, Effect::Fireflies])
                .with_number_of_creatures(5),
        );
        model
    }

    #[test]
    fn test_load_empty_store() {
        let manager = DataManager::new(MemoryStore::new());
        assert_eq!(manager.load().unwrap(), None);
        assert_eq!(manager.load_or_initial().unwrap(), DreamListModel::initial());
    }

    #[test]
    fn test_save_then_load() {
        let mut manager = DataManager::new(MemoryStore::new());
        manager.save(&edited_model()).unwrap();
        assert_eq!(manager.load().unwrap(), Some(edited_model()));

        manager.save(&DreamListModel::initial()).unwrap();
        assert_eq!(manager.load().unwrap(), Some(DreamListModel::initial()));
        assert_eq!(manager.store().len(), 1);
    }

    #[test]
    fn test_saved_shape() {
        let mut manager = DataManager::new(MemoryStore::new());
        manager.save(&DreamListModel::initial()).unwrap();

        let store = manager.into_inner();
        let stored = store.get("Model").unwrap().unwrap();
        assert_eq!(stored, Value::Map(DreamListModel::initial().encode()));
    }

    #[test]
    fn test_clear() {
        let mut manager = DataManager::new(MemoryStore::new());
        manager.save(&edited_model()).unwrap();
        manager.clear().unwrap();
        assert_eq!(manager.load().unwrap(), None);
    }

    #[test]
    fn test_corrupt_model_is_decode_error() {
        let mut store = MemoryStore::new();
        store.set(MODEL_KEY, Value::from("not a model")).unwrap();
        let manager = DataManager::new(store);
        assert!(matches!(
            manager.load(),
            Err(Error::Decode(DecodeError::TypeMismatch { field: "Model", .. }))
        ));
        assert!(manager.load_or_initial().is_err());
    }

    #[test]
    fn test_invalid_dream_is_decode_error() {
        let mut bad_dream = DreamListModel::initial().dreams()[0].encode();
        bad_dream.insert("effects".into(), Value::from(vec![6i64]));
        let mut map = ValueMap::new();
        map.insert("dreams".into(), Value::List(vec![Value::Map(bad_dream)]));

        let mut store = MemoryStore::new();
        store.set(MODEL_KEY, Value::Map(map)).unwrap();
        let manager = DataManager::new(store);
        assert!(matches!(
            manager.load(),
            Err(Error::Decode(DecodeError::InvalidCode { field: "effects", code: 6 }))
        ));
    }

    #[test]
    fn test_non_map_model_is_not_empty_state() {
        let stored = [Value::Null, Value::List(vec![]), Value::Int(0)];
        for value in stored {
            let got = value.type_name();
            let mut store = MemoryStore::new();
            store.set(MODEL_KEY, value).unwrap();
            let manager = DataManager::new(store);
            assert!(matches!(
                manager.load(),
                Err(Error::Decode(DecodeError::TypeMismatch {
                    field: "Model",
                    expected: "map",
                    got: g,
                })) if g == got
            ));
        }
    }

    #[test]
    fn test_corrupt_bytes_are_decode_error() {
        let mut store = Store::in_memory().unwrap();
        store
            .put_entry(StoredEntry {
                key: MODEL_KEY.to_string(),
                data: vec![0xff, 0xff, 0xff, 0xff, 0x01],
            })
            .unwrap();

        let manager = DataManager::new(store);
        assert!(matches!(
            manager.load(),
            Err(Error::Decode(DecodeError::Corrupt(_)))
        ));
        assert!(matches!(manager.load_or_initial(), Err(Error::Decode(_))));
    }

    #[test]
    fn test_zero_count_dream_saves_and_loads() {
        let mut model = DreamListModel::initial();
        model.append(
            Dream::new("Empty sky", Creature::Dragon, [Effect::Snow]).with_number_of_creatures(0),
        );

        let mut manager = DataManager::new(MemoryStore::new());
        manager.save(&model).unwrap();
        let loaded = manager.load_or_initial().unwrap();
        assert_eq!(loaded, model);
        assert_eq!(loaded.get(3).map(|d| d.number_of_creatures.get()), Some(1));
    }

    #[test]
    fn test_default_seed_dreams() {
        let seeds = DataManager::<MemoryStore>::default_seed_dreams();
        let descriptions: Vec<&str> = seeds.iter().map(|d| d.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Dream 1", "Dream 2", "Dream 3"]);
        assert_eq!(seeds[0].creature, Creature::Unicorn(UnicornColor::Pink));
        assert_eq!(seeds, DreamListModel::initial().dreams());
    }

    #[test]
    fn test_borrowed_native_store() {
        let mut store = Store::in_memory().unwrap();
        {
            let mut manager = DataManager::new(&mut store);
            manager.save(&edited_model()).unwrap();
        }
        assert!(store.get(MODEL_KEY).unwrap().is_some());
        assert_eq!(
            DataManager::new(&mut store).load().unwrap(),
            Some(edited_model())
        );
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dreams.db");

        {
            let mut manager = DataManager::new(Store::open(&path).unwrap());
            manager.save(&edited_model()).unwrap();
        }

        let manager = DataManager::new(Store::open(&path).unwrap());
        assert_eq!(manager.load().unwrap(), Some(edited_model()));
    }
}
