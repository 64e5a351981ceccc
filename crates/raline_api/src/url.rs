use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use crate::config::ApiConfig;
use crate::error::RalineApiError;

/// Namespace segment every endpoint lives under.
pub const API_NAMESPACE: &str = "api/";

/// Strip a single trailing slash.
pub fn remove_ending_slash(input: &str) -> &str {
    input.strip_suffix('/').unwrap_or(input)
}

/// Whether `input` starts with `http://`, `https://` or a protocol-relative `//`.
pub fn is_link_http(input: &str) -> bool {
    let lower = input.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("//")
}

/// Normalize a server URL: no trailing slash, always a scheme.
///
/// Normalization rules:
/// 1) strip one trailing `/`
/// 2) keep `http://` and `https://` URLs unchanged
/// 3) protocol-relative `//host` becomes `https://host`
/// 4) prefix `https://` otherwise
pub fn normalize_server_url(input: &str) -> String {
    let trimmed = remove_ending_slash(input.trim());
    if trimmed.starts_with("//") {
        return format!("https:{trimmed}");
    }
    if is_link_http(trimmed) {
        return trimmed.to_string();
    }
    format!("https://{trimmed}")
}

fn admin_page_regex() -> &'static Regex {
    static CACHED: OnceLock<Regex> = OnceLock::new();
    CACHED.get_or_init(|| Regex::new(r"^(.*?/)ui").expect("admin page regex must compile"))
}

/// Infer the server root from the URL of an admin page.
///
/// The admin UI is served under `<root>ui/...`; anything before the first
/// `ui` segment is the root. Pages outside that layout fall back to `/`.
pub fn infer_base_url(page_url: &str) -> Result<String, RalineApiError> {
    let page = Url::parse(page_url)
        .map_err(|error| RalineApiError::InvalidBaseUrl(format!("{page_url}: {error}")))?;
    let root = admin_page_regex()
        .captures(page.path())
        .and_then(|captures| captures.get(1))
        .map(|root| root.as_str())
        .unwrap_or("/");
    Ok(format!("{}{root}", page.origin().ascii_serialization()))
}

/// Resolve the `.../api/` prefix all endpoints are joined onto.
pub fn resolve_api_base(config: &ApiConfig) -> Result<Url, RalineApiError> {
    let root = match config
        .server_url
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
    {
        Some(server_url) => format!("{}/", normalize_server_url(server_url)),
        None => match config.page_url.as_deref() {
            Some(page_url) => infer_base_url(page_url)?,
            None => return Err(RalineApiError::MissingServerUrl),
        },
    };

    let prefix = format!("{root}{API_NAMESPACE}");
    Url::parse(&prefix).map_err(|error| RalineApiError::InvalidBaseUrl(format!("{prefix}: {error}")))
}

/// Join a relative endpoint path onto the API base and append query pairs,
/// finishing with the `lang` parameter.
pub fn build_endpoint(
    base: &Url,
    path: &str,
    query: &[(String, String)],
    lang: &str,
) -> Result<Url, RalineApiError> {
    let relative = path.trim_start_matches('/');
    let mut endpoint = base
        .join(relative)
        .map_err(|error| RalineApiError::InvalidBaseUrl(format!("{relative}: {error}")))?;
    {
        let mut pairs = endpoint.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
        pairs.append_pair("lang", lang);
    }
    Ok(endpoint)
}

#[cfg(test)]
mod tests {
    use super::{is_link_http, remove_ending_slash};

    #[test]
    fn only_one_trailing_slash_is_removed() {
        assert_eq!(remove_ending_slash("a//"), "a/");
        assert_eq!(remove_ending_slash("a"), "a");
    }

    #[test]
    fn link_detection_accepts_protocol_relative() {
        assert!(is_link_http("//cdn.example.com"));
        assert!(is_link_http("HTTPS://example.com"));
        assert!(!is_link_http("example.com"));
        assert!(!is_link_http("ftp://example.com"));
    }
}
