use std::collections::BTreeMap;
use std::time::Duration;

/// Language sent with every request when the caller does not choose one.
pub const DEFAULT_LANG: &str = "en-US";

/// Transport configuration for raline API requests.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server URL; normalized before use. Takes precedence over `page_url`.
    pub server_url: Option<String>,
    /// Absolute URL of the admin page, used to infer the server when
    /// `server_url` is unset.
    pub page_url: Option<String>,
    /// Value of the `lang` query parameter, used for localized error text.
    pub lang: String,
    /// Optional `User-Agent` override.
    pub user_agent: Option<String>,
    /// Additional headers merged into request headers.
    pub extra_headers: BTreeMap<String, String>,
    /// Optional request timeout.
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            server_url: None,
            page_url: None,
            lang: DEFAULT_LANG.to_string(),
            user_agent: None,
            extra_headers: BTreeMap::new(),
            timeout: None,
        }
    }
}

impl ApiConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: Some(server_url.into()),
            ..Self::default()
        }
    }

    pub fn with_server_url(mut self, server_url: impl Into<String>) -> Self {
        self.server_url = Some(server_url.into());
        self
    }

    pub fn with_page_url(mut self, page_url: impl Into<String>) -> Self {
        self.page_url = Some(page_url.into());
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn insert_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.insert(key.into(), value.into());
        self
    }
}
