//! Client-side storage tiers for the raline surfaces.
//!
//! Mirrors the browser storage model the widgets were designed around:
//! a session-scoped tier that lives as long as the process ([`MemoryStore`]),
//! a persistent tier backed by a JSON file ([`FileStore`]), typed slots over
//! either tier ([`JsonSlot`]) and the bearer-token resolver ([`TokenStore`]).

mod error;
mod keys;
mod paths;
mod slot;
mod store;
mod token;

pub use error::SessionStoreError;
pub use keys::{
    EDITOR_KEY, EMOJI_KEY, REACTION_KEY, TOKEN_KEY, USER_KEY, USER_META_KEY,
};
pub use paths::{storage_file, storage_root, STORAGE_FILE_NAME};
pub use slot::JsonSlot;
pub use store::{FileStore, KeyValueStore, MemoryStore, SharedStore};
pub use token::{Persistence, TokenStore, TokenTier};
