use std::sync::RwLock;

use crate::error::SessionStoreError;
use crate::keys::TOKEN_KEY;
use crate::store::SharedStore;

/// Where a freshly issued token is remembered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    /// Survives only as long as the session tier does.
    Session,
    /// Survives restarts.
    Persistent,
}

/// The tier a resolved token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenTier {
    Memory,
    Session,
    Persistent,
}

/// Bearer token held across three tiers.
///
/// Precedence on read: explicit in-memory value, then the session tier, then
/// the persistent tier. Empty strings count as absent.
pub struct TokenStore {
    memory: RwLock<Option<String>>,
    session: SharedStore,
    persistent: SharedStore,
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("memory", &self.memory.read().map(|v| v.is_some()).unwrap_or(false))
            .finish_non_exhaustive()
    }
}

impl TokenStore {
    #[must_use]
    pub fn new(session: SharedStore, persistent: SharedStore) -> Self {
        Self {
            memory: RwLock::new(None),
            session,
            persistent,
        }
    }

    pub fn set_in_memory(&self, token: Option<String>) -> Result<(), SessionStoreError> {
        let mut memory = self.memory.write().map_err(|_| SessionStoreError::Poisoned)?;
        *memory = token.filter(|value| !value.trim().is_empty());
        Ok(())
    }

    /// Resolve the authoritative token and the tier it came from.
    pub fn resolve_with_tier(&self) -> Result<Option<(String, TokenTier)>, SessionStoreError> {
        let memory = self
            .memory
            .read()
            .map_err(|_| SessionStoreError::Poisoned)?
            .clone();
        if let Some(token) = memory {
            return Ok(Some((token, TokenTier::Memory)));
        }
        if let Some(token) = non_empty(self.session.get(TOKEN_KEY)?) {
            return Ok(Some((token, TokenTier::Session)));
        }
        Ok(non_empty(self.persistent.get(TOKEN_KEY)?).map(|token| (token, TokenTier::Persistent)))
    }

    pub fn resolve(&self) -> Result<Option<String>, SessionStoreError> {
        Ok(self.resolve_with_tier()?.map(|(token, _)| token))
    }

    /// Remember a token issued by login. The in-memory value and the other
    /// storage tier are cleared first so the new token is the only one left.
    pub fn remember(&self, token: &str, persistence: Persistence) -> Result<(), SessionStoreError> {
        self.set_in_memory(None)?;
        let (target, other) = match persistence {
            Persistence::Session => (&self.session, &self.persistent),
            Persistence::Persistent => (&self.persistent, &self.session),
        };
        other.remove(TOKEN_KEY)?;
        target.set(TOKEN_KEY, token)
    }

    /// Forget the token in every tier.
    pub fn clear(&self) -> Result<(), SessionStoreError> {
        let memory_cleared = self
            .memory
            .write()
            .map(|mut memory| *memory = None)
            .map_err(|_| SessionStoreError::Poisoned);
        let session_cleared = self.session.remove(TOKEN_KEY);
        let persistent_cleared = self.persistent.remove(TOKEN_KEY);
        memory_cleared?;
        session_cleared?;
        persistent_cleared
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
