//! Emoji set resolution.
//!
//! An emoji set is either declared inline or named by a remote folder holding
//! an `info.json` manifest. Folders whose URL carries a semantic version
//! (`@1.2.0`) are immutable, so their manifests are cached in persistent
//! storage forever; unversioned folders are fetched on every resolution.

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, OnceLock};

use raline_api::url::remove_ending_slash;
use raline_api::{AbortSignal, RalineApiClient, RalineApiError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use session_store::{JsonSlot, SessionStoreError, SharedStore, EMOJI_KEY};
use thiserror::Error;

pub const MANIFEST_FILE: &str = "info.json";

/// One emoji set as described by a manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// File extension of every image in the set.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub icon: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmojiSource {
    /// Folder URL; `{folder}/info.json` is the manifest.
    Folder(String),
    Inline(EmojiInfo),
}

/// Picker tab: display name, icon URL and the lookup keys it offers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmojiTab {
    pub name: String,
    pub icon: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmojiConfig {
    pub tabs: Vec<EmojiTab>,
    /// `prefix + item` to image URL. Later sets overwrite earlier keys.
    pub map: BTreeMap<String, String>,
}

#[derive(Debug, Error)]
pub enum EmojiError {
    #[error("failed to fetch emoji manifest for {folder}: {source}")]
    Fetch {
        folder: String,
        #[source]
        source: RalineApiError,
    },

    #[error("invalid emoji manifest for {folder}: {source}")]
    Manifest {
        folder: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("emoji cache error: {0}")]
    Storage(#[from] SessionStoreError),
}

pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = Result<Value, RalineApiError>> + Send + 'a>>;

/// GET an absolute URL as JSON. A raised `abort` resolves to
/// [`RalineApiError::Cancelled`].
pub trait ManifestFetcher: Send + Sync {
    fn fetch_manifest<'a>(&'a self, url: &'a str, abort: Option<&'a AbortSignal>) -> FetchFuture<'a>;
}

impl ManifestFetcher for RalineApiClient {
    fn fetch_manifest<'a>(&'a self, url: &'a str, abort: Option<&'a AbortSignal>) -> FetchFuture<'a> {
        Box::pin(RalineApiClient::fetch_json(self, url, abort))
    }
}

fn version_regex() -> &'static Regex {
    static CACHED: OnceLock<Regex> = OnceLock::new();
    CACHED.get_or_init(|| Regex::new(r"@[0-9]+\.[0-9]+\.[0-9]+").expect("version regex must compile"))
}

/// Whether a folder URL pins a semantic version.
pub fn has_version(url: &str) -> bool {
    version_regex().is_match(url)
}

/// `folder/` + prefix + name + `.type`, skipping empty parts.
pub fn get_link(name: &str, folder: Option<&str>, prefix: Option<&str>, kind: Option<&str>) -> String {
    let mut link = String::new();
    if let Some(folder) = folder.filter(|folder| !folder.is_empty()) {
        link.push_str(folder);
        link.push('/');
    }
    link.push_str(prefix.unwrap_or_default());
    link.push_str(name);
    if let Some(kind) = kind.filter(|kind| !kind.is_empty()) {
        link.push('.');
        link.push_str(kind);
    }
    link
}

fn manifest_url(folder: &str) -> String {
    let absolute = if folder.starts_with("//") {
        format!("https:{folder}")
    } else {
        folder.to_owned()
    };
    format!("{absolute}/{MANIFEST_FILE}")
}

/// Resolves emoji sources into picker tabs and a lookup map. One per client
/// instance; owns the manifest cache slot.
pub struct EmojiResolver {
    cache: JsonSlot<BTreeMap<String, EmojiInfo>>,
    fetcher: Arc<dyn ManifestFetcher>,
}

impl EmojiResolver {
    pub fn new(store: SharedStore, fetcher: Arc<dyn ManifestFetcher>) -> Self {
        Self {
            cache: JsonSlot::new(store, EMOJI_KEY),
            fetcher,
        }
    }

    /// Manifest for one folder, from cache when the folder is versioned.
    pub async fn fetch_emoji(
        &self,
        folder: &str,
        abort: Option<&AbortSignal>,
    ) -> Result<EmojiInfo, EmojiError> {
        let link = remove_ending_slash(folder);
        let versioned = has_version(link);

        if versioned {
            if let Some(info) = self.cache.load()?.remove(link) {
                tracing::debug!(folder = link, "emoji manifest cache hit");
                return Ok(info);
            }
        }

        tracing::debug!(folder = link, versioned, "fetching emoji manifest");
        let body = self
            .fetcher
            .fetch_manifest(&manifest_url(link), abort)
            .await
            .map_err(|source| EmojiError::Fetch {
                folder: link.to_owned(),
                source,
            })?;
        let mut info: EmojiInfo =
            serde_json::from_value(body).map_err(|source| EmojiError::Manifest {
                folder: link.to_owned(),
                source,
            })?;
        info.folder = Some(link.to_owned());

        if versioned {
            self.cache.update(|cache| {
                cache.insert(link.to_owned(), info.clone());
            })?;
        }
        Ok(info)
    }

    pub async fn resolve(
        &self,
        sources: &[EmojiSource],
        abort: Option<&AbortSignal>,
    ) -> Result<EmojiConfig, EmojiError> {
        let mut infos = Vec::with_capacity(sources.len());
        for source in sources {
            infos.push(match source {
                EmojiSource::Folder(folder) => self.fetch_emoji(folder, abort).await?,
                EmojiSource::Inline(info) => info.clone(),
            });
        }
        Ok(build_emoji_config(&infos))
    }
}

/// Fold manifests into tabs and one flat map, in order.
pub fn build_emoji_config(infos: &[EmojiInfo]) -> EmojiConfig {
    let mut config = EmojiConfig::default();

    for info in infos {
        let folder = info.folder.as_deref();
        let prefix = info.prefix.as_deref();
        let kind = info.kind.as_deref();

        let items = info
            .items
            .iter()
            .map(|item| {
                let key = format!("{}{item}", prefix.unwrap_or_default());
                config
                    .map
                    .insert(key.clone(), get_link(item, folder, prefix, kind));
                key
            })
            .collect();

        config.tabs.push(EmojiTab {
            name: info.name.clone(),
            icon: get_link(&info.icon, folder, prefix, kind),
            items,
        });
    }

    config
}

#[cfg(test)]
mod tests {
    use super::{build_emoji_config, get_link, has_version, manifest_url, EmojiInfo};

    fn info(name: &str, prefix: &str, items: &[&str]) -> EmojiInfo {
        EmojiInfo {
            name: name.to_owned(),
            folder: Some(format!("https://cdn/{name}")),
            prefix: Some(prefix.to_owned()),
            kind: Some("png".to_owned()),
            icon: items[0].to_owned(),
            items: items.iter().map(|item| (*item).to_owned()).collect(),
        }
    }

    #[test]
    fn version_detection() {
        assert!(has_version("//unpkg.com/@waline/emojis@1.2.0/weibo"));
        assert!(!has_version("https://cdn.example.com/emojis/weibo"));
        assert!(!has_version("https://cdn.example.com/emojis@1.2/weibo"));
    }

    #[test]
    fn link_building_skips_missing_parts() {
        assert_eq!(get_link("smile", Some("https://a"), Some("p_"), Some("gif")), "https://a/p_smile.gif");
        assert_eq!(get_link("smile", None, None, None), "smile");
    }

    #[test]
    fn protocol_relative_manifest_urls_use_https() {
        assert_eq!(manifest_url("//cdn/x"), "https://cdn/x/info.json");
        assert_eq!(manifest_url("http://cdn/x"), "http://cdn/x/info.json");
    }

    #[test]
    fn later_sets_win_key_collisions() {
        let config = build_emoji_config(&[
            info("a", "x_", &["smile", "cry"]),
            info("b", "x_", &["smile"]),
        ]);
        assert_eq!(config.tabs.len(), 2);
        assert_eq!(config.tabs[0].items, vec!["x_smile", "x_cry"]);
        assert_eq!(config.tabs[0].icon, "https://cdn/a/x_smile.png");
        assert_eq!(config.map["x_smile"], "https://cdn/b/x_smile.png");
        assert_eq!(config.map["x_cry"], "https://cdn/a/x_cry.png");
    }
}
