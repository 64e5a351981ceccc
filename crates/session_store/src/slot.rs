use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::SessionStoreError;
use crate::store::SharedStore;

/// A typed JSON value stored under one key.
///
/// Reading a missing or undecodable value yields `T::default()`; stale data
/// written by an older client must never make the widget unusable.
pub struct JsonSlot<T> {
    store: SharedStore,
    key: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for JsonSlot<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            key: self.key.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for JsonSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonSlot").field("key", &self.key).finish()
    }
}

impl<T> JsonSlot<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    #[must_use]
    pub fn new(store: SharedStore, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn load(&self) -> Result<T, SessionStoreError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(T::default());
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(error) => {
                tracing::debug!(key = %self.key, %error, "discarding undecodable stored value");
                Ok(T::default())
            }
        }
    }

    pub fn save(&self, value: &T) -> Result<(), SessionStoreError> {
        let encoded = serde_json::to_string(value)
            .map_err(|source| SessionStoreError::serialize(&self.key, source))?;
        self.store.set(&self.key, &encoded)
    }

    /// Load, apply `change`, save. Returns whatever `change` returns.
    pub fn update<R>(&self, change: impl FnOnce(&mut T) -> R) -> Result<R, SessionStoreError> {
        let mut value = self.load()?;
        let result = change(&mut value);
        self.save(&value)?;
        Ok(result)
    }

    pub fn clear(&self) -> Result<(), SessionStoreError> {
        self.store.remove(&self.key)
    }
}
