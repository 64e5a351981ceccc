//! Per-instance client state backed by storage slots.

use std::collections::BTreeMap;

use raline_api::UserInfo;
use serde::{Deserialize, Serialize};
use session_store::{
    JsonSlot, SessionStoreError, SharedStore, EDITOR_KEY, REACTION_KEY, USER_KEY, USER_META_KEY,
};

/// Commenter details remembered between visits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMeta {
    pub nick: String,
    pub mail: String,
    pub link: String,
}

/// Anonymous reaction votes: page identifier to chosen reaction index.
pub type ReactionVotes = BTreeMap<String, usize>;

/// Storage-backed state shared by the widgets of one client instance.
#[derive(Debug, Clone)]
pub struct ClientState {
    user: JsonSlot<Option<UserInfo>>,
    reaction: JsonSlot<ReactionVotes>,
    user_meta: JsonSlot<UserMeta>,
    editor: JsonSlot<String>,
}

impl ClientState {
    pub fn new(store: SharedStore) -> Self {
        Self {
            user: JsonSlot::new(store.clone(), USER_KEY),
            reaction: JsonSlot::new(store.clone(), REACTION_KEY),
            user_meta: JsonSlot::new(store.clone(), USER_META_KEY),
            editor: JsonSlot::new(store, EDITOR_KEY),
        }
    }

    /// Logged-in profile, if any.
    pub fn user_info(&self) -> Result<Option<UserInfo>, SessionStoreError> {
        Ok(self
            .user
            .load()?
            .filter(|user| user.token.as_deref().is_some_and(|token| !token.is_empty())))
    }

    pub fn token(&self) -> Result<Option<String>, SessionStoreError> {
        Ok(self.user_info()?.and_then(|user| user.token))
    }

    pub fn set_user_info(&self, user: &UserInfo) -> Result<(), SessionStoreError> {
        self.user.save(&Some(user.clone()))
    }

    pub fn clear_user_info(&self) -> Result<(), SessionStoreError> {
        self.user.clear()
    }

    pub fn vote(&self, identifier: &str) -> Result<Option<usize>, SessionStoreError> {
        Ok(self.reaction.load()?.get(identifier).copied())
    }

    /// Record or withdraw (`None`) the vote for `identifier`.
    pub fn set_vote(&self, identifier: &str, vote: Option<usize>) -> Result<(), SessionStoreError> {
        self.reaction.update(|votes| match vote {
            Some(index) => {
                votes.insert(identifier.to_owned(), index);
            }
            None => {
                votes.remove(identifier);
            }
        })
    }

    pub fn user_meta(&self) -> Result<UserMeta, SessionStoreError> {
        self.user_meta.load()
    }

    pub fn save_user_meta(&self, meta: &UserMeta) -> Result<(), SessionStoreError> {
        self.user_meta.save(meta)
    }

    pub fn draft(&self) -> Result<String, SessionStoreError> {
        self.editor.load()
    }

    pub fn save_draft(&self, draft: &str) -> Result<(), SessionStoreError> {
        self.editor.save(&draft.to_owned())
    }

    pub fn clear_draft(&self) -> Result<(), SessionStoreError> {
        self.editor.clear()
    }
}

#[cfg(test)]
mod tests {
    use raline_api::UserInfo;
    use session_store::MemoryStore;

    use super::{ClientState, UserMeta};

    #[test]
    fn user_without_token_counts_as_logged_out() {
        let state = ClientState::new(MemoryStore::shared());
        assert!(state.user_info().expect("load").is_none());

        state
            .set_user_info(&UserInfo {
                display_name: "ferris".to_owned(),
                ..UserInfo::default()
            })
            .expect("save");
        assert!(state.user_info().expect("load").is_none());

        state
            .set_user_info(&UserInfo {
                token: Some("t".to_owned()),
                ..UserInfo::default()
            })
            .expect("save");
        assert_eq!(state.token().expect("token").as_deref(), Some("t"));

        state.clear_user_info().expect("clear");
        assert!(state.token().expect("token").is_none());
    }

    #[test]
    fn votes_and_drafts_round_trip() {
        let state = ClientState::new(MemoryStore::shared());
        state.set_vote("/post", Some(2)).expect("vote");
        assert_eq!(state.vote("/post").expect("vote"), Some(2));
        state.set_vote("/post", None).expect("withdraw");
        assert_eq!(state.vote("/post").expect("vote"), None);

        state.save_draft("half a thought").expect("draft");
        assert_eq!(state.draft().expect("draft"), "half a thought");
        state.clear_draft().expect("clear");
        assert_eq!(state.draft().expect("draft"), "");

        let meta = UserMeta {
            nick: "ferris".to_owned(),
            ..UserMeta::default()
        };
        state.save_user_meta(&meta).expect("meta");
        assert_eq!(state.user_meta().expect("meta"), meta);
    }
}
