use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::SessionStoreError;

/// String key/value storage with interior mutability.
///
/// Implementations are shared between the token store, typed slots and the
/// emoji cache, so every method takes `&self`.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError>;

    fn remove(&self, key: &str) -> Result<(), SessionStoreError>;
}

pub type SharedStore = Arc<dyn KeyValueStore>;

/// Session-scoped tier. Dropped with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn shared() -> SharedStore {
        Arc::new(Self::new())
    }

    pub fn len(&self) -> usize {
        lock(&self.values).map(|values| values.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        Ok(lock(&self.values)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        lock(&self.values)?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionStoreError> {
        lock(&self.values)?.remove(key);
        Ok(())
    }
}

/// Persistent tier: a single JSON object file of string values.
///
/// The file is read on first access and rewritten in full on every mutation
/// through a sibling temporary file, so readers never observe a partial write.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: Mutex<Option<BTreeMap<String, String>>>,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            values: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn shared(path: impl Into<PathBuf>) -> SharedStore {
        Arc::new(Self::new(path))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn with_values<R>(
        &self,
        apply: impl FnOnce(&mut BTreeMap<String, String>) -> R,
    ) -> Result<R, SessionStoreError> {
        let mut guard = lock(&self.values)?;
        if guard.is_none() {
            *guard = Some(read_file(&self.path)?);
        }
        let values = guard.get_or_insert_with(BTreeMap::new);
        Ok(apply(values))
    }

    fn mutate(
        &self,
        apply: impl FnOnce(&mut BTreeMap<String, String>) -> bool,
    ) -> Result<(), SessionStoreError> {
        let mut guard = lock(&self.values)?;
        if guard.is_none() {
            *guard = Some(read_file(&self.path)?);
        }
        // The cache only takes the new map once it is on disk.
        let mut next = (*guard).clone().unwrap_or_default();
        if apply(&mut next) {
            write_file(&self.path, &next)?;
            *guard = Some(next);
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        self.with_values(|values| values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        self.mutate(|values| {
            let previous = values.insert(key.to_owned(), value.to_owned());
            previous.as_deref() != Some(value)
        })
    }

    fn remove(&self, key: &str) -> Result<(), SessionStoreError> {
        self.mutate(|values| values.remove(key).is_some())
    }
}

fn read_file(path: &Path) -> Result<BTreeMap<String, String>, SessionStoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(source) => return Err(SessionStoreError::io("reading storage file", path, source)),
    };
    if raw.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    let value = serde_json::from_str::<serde_json::Value>(&raw)
        .map_err(|source| SessionStoreError::parse(path, source))?;
    let serde_json::Value::Object(map) = value else {
        return Err(SessionStoreError::NotAnObject {
            path: path.to_path_buf(),
        });
    };

    let mut values = BTreeMap::new();
    for (key, value) in map {
        match value {
            serde_json::Value::String(value) => {
                values.insert(key, value);
            }
            _ => {
                return Err(SessionStoreError::NotAnObject {
                    path: path.to_path_buf(),
                })
            }
        }
    }
    Ok(values)
}

fn write_file(path: &Path, values: &BTreeMap<String, String>) -> Result<(), SessionStoreError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|source| SessionStoreError::io("creating storage directory", parent, source))?;
    }

    let encoded = serde_json::to_string_pretty(values)
        .map_err(|source| SessionStoreError::serialize(path.display().to_string(), source))?;
    let staging = path.with_extension("json.tmp");
    fs::write(&staging, encoded)
        .map_err(|source| SessionStoreError::io("writing storage file", &staging, source))?;
    fs::rename(&staging, path)
        .map_err(|source| SessionStoreError::io("replacing storage file", path, source))?;
    tracing::trace!(path = %path.display(), keys = values.len(), "storage file written");
    Ok(())
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, SessionStoreError> {
    mutex.lock().map_err(|_| SessionStoreError::Poisoned)
}
