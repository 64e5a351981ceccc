//! Embeddable client for the raline comment service.
//!
//! # Overview
//! - [`RalineOptions`] are resolved into an immutable [`RalineConfig`] by
//!   [`resolve_config`]: defaults, locale lookup, server URL normalization.
//! - [`Raline`] ties a resolved config to a request client and the
//!   storage-backed [`ClientState`]; call [`Raline::update`] to re-resolve.
//! - Emoji sets are resolved by [`EmojiResolver`], which caches versioned
//!   manifests in storage.
//! - Comment text is rendered by [`parse_markdown`] after emoji substitution.
//! - The comment-count and recent-comments widgets write into caller-provided
//!   [`CountTarget`] and [`MountPoint`] implementations.
//!
//! The request layer lives in `raline_api` and storage tiers in
//! `session_store`; both are re-exported for convenience.

pub mod config;
pub mod dark;
pub mod emoji;
pub mod error;
pub mod instance;
pub mod markdown;
pub mod path;
pub mod search;
pub mod state;
pub mod submit;
pub mod time_ago;
pub mod upload;
pub mod widgets;

pub use raline_api;
pub use session_store;

pub use crate::config::i18n::{get_lang, get_locale, Locale, DEFAULT_LANG};
pub use crate::config::{
    get_meta, get_word_limit, resolve_config, CommentSorting, ConfigError, Feature, Highlighter,
    LoginMode, MetaField, RalineConfig, RalineOptions, TexRenderer, WordLimit,
};
pub use crate::dark::{get_dark_style, DarkMode};
pub use crate::emoji::{
    EmojiConfig, EmojiError, EmojiInfo, EmojiResolver, EmojiSource, EmojiTab, ManifestFetcher,
};
pub use crate::error::RalineError;
pub use crate::instance::Raline;
pub use crate::markdown::{parse_emoji, parse_markdown, MarkdownOptions};
pub use crate::search::{GiphySearch, ImageSearch, SearchImage};
pub use crate::state::{ClientState, UserMeta};
pub use crate::submit::{validate_submission, CommentDraft, SubmitError};
pub use crate::time_ago::get_time_ago;
pub use crate::upload::{DataUrlUploader, ImageUploader, UploadError, UploadImage};
pub use crate::widgets::{comment_count, CountTarget, MountPoint, RecentComments};
