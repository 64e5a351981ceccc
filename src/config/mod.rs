//! Option resolution.
//!
//! [`RalineOptions`] is what the embedding page passes in; [`resolve_config`]
//! turns it into a fully populated [`RalineConfig`]. Resolution is pure: no
//! storage or network access happens here.

pub mod defaults;
pub mod i18n;

use std::collections::BTreeMap;
use std::sync::Arc;

use raline_api::{normalize_server_url, SortBy};
use thiserror::Error;

use crate::dark::DarkMode;
use crate::emoji::EmojiSource;
use crate::path::{decode_path, DEFAULT_PATH};
use crate::search::ImageSearch;
use crate::upload::ImageUploader;

pub use i18n::{get_lang, get_locale, Locale, DEFAULT_LANG};

/// `(code, lang) -> html` for fenced code blocks.
pub type Highlighter = Arc<dyn Fn(&str, &str) -> String + Send + Sync>;

/// `(block_mode, tex) -> html` for math.
pub type TexRenderer = Arc<dyn Fn(bool, &str) -> String + Send + Sync>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("option 'server_url' is missing")]
    MissingServerUrl,
}

/// Optional feature switch: off, built-in implementation, or the caller's own.
#[derive(Debug, Clone, PartialEq)]
pub enum Feature<T> {
    Disabled,
    Default,
    Custom(T),
}

impl<T> Default for Feature<T> {
    fn default() -> Self {
        Self::Default
    }
}

impl<T> From<bool> for Feature<T> {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Default
        } else {
            Self::Disabled
        }
    }
}

impl<T> Feature<T> {
    pub fn resolve(self, default: impl FnOnce() -> T) -> Option<T> {
        match self {
            Self::Disabled => None,
            Self::Default => Some(default()),
            Self::Custom(value) => Some(value),
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }
}

/// Commenter metadata fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetaField {
    Nick,
    Mail,
    Link,
}

impl MetaField {
    pub const ALL: [MetaField; 3] = [Self::Nick, Self::Mail, Self::Link];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "nick" => Some(Self::Nick),
            "mail" => Some(Self::Mail),
            "link" => Some(Self::Link),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nick => "nick",
            Self::Mail => "mail",
            Self::Link => "link",
        }
    }
}

/// Keep only known meta names, in caller order.
pub fn get_meta<S: AsRef<str>>(meta: &[S]) -> Vec<MetaField> {
    meta.iter()
        .filter_map(|item| MetaField::parse(item.as_ref()))
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginMode {
    #[default]
    Enable,
    Disable,
    Force,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommentSorting {
    #[default]
    Latest,
    Oldest,
    Hottest,
}

impl CommentSorting {
    pub fn sort_by(self) -> SortBy {
        match self {
            Self::Latest => SortBy::InsertedAtDesc,
            Self::Oldest => SortBy::InsertedAtAsc,
            Self::Hottest => SortBy::LikeDesc,
        }
    }

    /// Locale key of the sorting tab label.
    pub fn locale_key(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Oldest => "oldest",
            Self::Hottest => "hottest",
        }
    }
}

/// Caller form of `word_limit`: a maximum or an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordLimit {
    Max(usize),
    Range(usize, usize),
}

/// `Max(n)` becomes `(0, n)`; `Max(0)` and unset mean no limit.
pub fn get_word_limit(limit: Option<WordLimit>) -> Option<(usize, usize)> {
    match limit? {
        WordLimit::Range(min, max) => Some((min, max)),
        WordLimit::Max(0) => None,
        WordLimit::Max(max) => Some((0, max)),
    }
}

/// Options as supplied by the embedding page.
#[derive(Clone, Default)]
pub struct RalineOptions {
    pub server_url: String,
    /// Page path; percent-decoded during resolution.
    pub path: Option<String>,
    pub lang: Option<String>,
    /// Per-key overrides merged over the resolved locale.
    pub locale: BTreeMap<String, String>,
    pub emoji: Feature<Vec<EmojiSource>>,
    pub meta: Option<Vec<String>>,
    pub required_meta: Vec<String>,
    pub dark: DarkMode,
    pub page_size: Option<u64>,
    pub word_limit: Option<WordLimit>,
    pub image_uploader: Feature<Arc<dyn ImageUploader>>,
    pub highlighter: Feature<Highlighter>,
    pub tex_renderer: Feature<TexRenderer>,
    pub copyright: Option<bool>,
    pub login: Option<LoginMode>,
    pub search: Feature<Arc<dyn ImageSearch>>,
    pub recaptcha_v3_key: Option<String>,
    pub turnstile_key: Option<String>,
    pub reaction: Feature<Vec<String>>,
    pub comment_sorting: Option<CommentSorting>,
}

impl RalineOptions {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            ..Self::default()
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn with_locale(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.locale.insert(key.into(), value.into());
        self
    }

    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_word_limit(mut self, limit: WordLimit) -> Self {
        self.word_limit = Some(limit);
        self
    }

    pub fn with_emoji(mut self, emoji: Feature<Vec<EmojiSource>>) -> Self {
        self.emoji = emoji;
        self
    }

    pub fn with_highlighter(mut self, highlighter: Feature<Highlighter>) -> Self {
        self.highlighter = highlighter;
        self
    }

    pub fn with_tex_renderer(mut self, tex_renderer: Feature<TexRenderer>) -> Self {
        self.tex_renderer = tex_renderer;
        self
    }

    pub fn with_login(mut self, login: LoginMode) -> Self {
        self.login = Some(login);
        self
    }

    pub fn with_comment_sorting(mut self, sorting: CommentSorting) -> Self {
        self.comment_sorting = Some(sorting);
        self
    }
}

/// Fully resolved options. Immutable once built; `Raline::update` builds a
/// new one.
#[derive(Clone)]
pub struct RalineConfig {
    /// Always carries a scheme and never ends with `/`.
    pub server_url: String,
    pub path: String,
    /// Always a supported tag or [`DEFAULT_LANG`].
    pub lang: String,
    pub locale: Locale,
    pub emoji: Vec<EmojiSource>,
    pub meta: Vec<MetaField>,
    pub required_meta: Vec<MetaField>,
    pub dark: DarkMode,
    pub page_size: u64,
    /// Inclusive `(min, max)`; `None` means unlimited.
    pub word_limit: Option<(usize, usize)>,
    pub image_uploader: Option<Arc<dyn ImageUploader>>,
    pub highlighter: Option<Highlighter>,
    pub tex_renderer: Option<TexRenderer>,
    pub copyright: bool,
    pub login: LoginMode,
    pub search: Option<Arc<dyn ImageSearch>>,
    pub recaptcha_v3_key: String,
    pub turnstile_key: String,
    /// Reaction image URLs; empty when reactions are off.
    pub reaction: Vec<String>,
    pub comment_sorting: CommentSorting,
}

pub fn resolve_config(options: &RalineOptions) -> Result<RalineConfig, ConfigError> {
    let options = options.clone();
    if options.server_url.trim().is_empty() {
        return Err(ConfigError::MissingServerUrl);
    }

    let raw_lang = options
        .lang
        .filter(|lang| !lang.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LANG.to_owned());
    let lang = get_lang(&raw_lang);
    let mut locale = get_locale(&lang);
    locale.merge(&options.locale);

    let meta = match &options.meta {
        Some(meta) => get_meta(meta),
        None => MetaField::ALL.to_vec(),
    };

    Ok(RalineConfig {
        server_url: normalize_server_url(&options.server_url),
        path: decode_path(options.path.as_deref().unwrap_or(DEFAULT_PATH)),
        locale,
        emoji: options
            .emoji
            .resolve(defaults::default_emoji)
            .unwrap_or_default(),
        meta,
        required_meta: get_meta(&options.required_meta),
        dark: options.dark,
        page_size: options.page_size.unwrap_or(defaults::DEFAULT_PAGE_SIZE),
        word_limit: get_word_limit(options.word_limit),
        image_uploader: options
            .image_uploader
            .resolve(|| defaults::default_uploader() as Arc<dyn ImageUploader>),
        highlighter: options.highlighter.resolve(defaults::default_highlighter),
        tex_renderer: options.tex_renderer.resolve(defaults::default_tex_renderer),
        copyright: options.copyright.unwrap_or(true),
        login: options.login.unwrap_or_default(),
        search: options
            .search
            .resolve(|| defaults::default_search(&raw_lang) as Arc<dyn ImageSearch>),
        recaptcha_v3_key: options.recaptcha_v3_key.unwrap_or_default(),
        turnstile_key: options.turnstile_key.unwrap_or_default(),
        reaction: options
            .reaction
            .resolve(defaults::default_reaction)
            .unwrap_or_default(),
        comment_sorting: options.comment_sorting.unwrap_or_default(),
        lang,
    })
}
