//! GIF search seam for the editor picker.

use std::future::Future;
use std::pin::Pin;

use raline_api::{AbortSignal, RalineApiError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::emoji::ManifestFetcher;

const GIPHY_ENDPOINT: &str = "https://api.giphy.com/v1/gifs/";
const GIPHY_LIMIT: usize = 20;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchImage {
    pub src: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub preview: Option<String>,
}

pub type SearchFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<SearchImage>, RalineApiError>> + Send + 'a>>;

/// Image search provider. `fetcher` is the instance's JSON transport;
/// providers with their own transport may ignore it but should still honour
/// `abort`.
pub trait ImageSearch: Send + Sync {
    fn search<'a>(
        &'a self,
        fetcher: &'a dyn ManifestFetcher,
        word: &'a str,
        abort: Option<&'a AbortSignal>,
    ) -> SearchFuture<'a>;

    /// Images shown before the user types anything.
    fn default_images<'a>(
        &'a self,
        fetcher: &'a dyn ManifestFetcher,
        abort: Option<&'a AbortSignal>,
    ) -> SearchFuture<'a>;

    /// Next page of `word` after `current_count` results.
    fn more<'a>(
        &'a self,
        fetcher: &'a dyn ManifestFetcher,
        word: &'a str,
        current_count: usize,
        abort: Option<&'a AbortSignal>,
    ) -> SearchFuture<'a>;
}

/// Giphy search and trending feeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiphySearch {
    api_key: String,
    lang: String,
}

impl GiphySearch {
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            api_key: String::new(),
            lang: lang.into(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    fn url(&self, feed: &str, params: &[(&'static str, String)]) -> Result<Url, RalineApiError> {
        let mut url = Url::parse(GIPHY_ENDPOINT)
            .and_then(|base| base.join(feed))
            .map_err(|error| RalineApiError::InvalidBaseUrl(format!("{feed}: {error}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api_key", &self.api_key);
            pairs.append_pair("limit", &GIPHY_LIMIT.to_string());
            pairs.append_pair("lang", &self.lang);
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    async fn fetch(
        &self,
        fetcher: &dyn ManifestFetcher,
        feed: &str,
        params: Vec<(&'static str, String)>,
        abort: Option<&AbortSignal>,
    ) -> Result<Vec<SearchImage>, RalineApiError> {
        let url = self.url(feed, &params)?;
        let body = fetcher.fetch_manifest(url.as_str(), abort).await?;
        Ok(parse_giphy(&body))
    }
}

impl ImageSearch for GiphySearch {
    fn search<'a>(
        &'a self,
        fetcher: &'a dyn ManifestFetcher,
        word: &'a str,
        abort: Option<&'a AbortSignal>,
    ) -> SearchFuture<'a> {
        self.more(fetcher, word, 0, abort)
    }

    fn default_images<'a>(
        &'a self,
        fetcher: &'a dyn ManifestFetcher,
        abort: Option<&'a AbortSignal>,
    ) -> SearchFuture<'a> {
        Box::pin(self.fetch(fetcher, "trending", Vec::new(), abort))
    }

    fn more<'a>(
        &'a self,
        fetcher: &'a dyn ManifestFetcher,
        word: &'a str,
        current_count: usize,
        abort: Option<&'a AbortSignal>,
    ) -> SearchFuture<'a> {
        Box::pin(async move {
            let params = vec![("q", word.to_owned()), ("offset", current_count.to_string())];
            self.fetch(fetcher, "search", params, abort).await
        })
    }
}

fn parse_giphy(body: &Value) -> Vec<SearchImage> {
    body.get("data")
        .and_then(Value::as_array)
        .map(|gifs| {
            gifs.iter()
                .filter_map(|gif| {
                    let images = gif.get("images")?;
                    let src = images
                        .pointer("/downsized_medium/url")
                        .and_then(Value::as_str)?
                        .to_owned();
                    Some(SearchImage {
                        src,
                        title: gif.get("title").and_then(Value::as_str).map(str::to_owned),
                        preview: images
                            .pointer("/fixed_width_small/url")
                            .and_then(Value::as_str)
                            .map(str::to_owned),
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}
