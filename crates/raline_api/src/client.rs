use std::future::Future;
use std::sync::{atomic::AtomicBool, atomic::Ordering, Arc};
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use session_store::TokenStore;
use url::Url;

use crate::config::ApiConfig;
use crate::error::{check_instance, status_error, RalineApiError};
use crate::headers::{build_headers, HEADER_RALINE_VERSION};
use crate::request::{RequestBody, RequestSpec};
use crate::response::ApiResponse;
use crate::url::{build_endpoint, resolve_api_base};

/// Caller-owned cancellation flag. Setting it abandons the in-flight call.
pub type AbortSignal = Arc<AtomicBool>;

pub fn abort_signal() -> AbortSignal {
    Arc::new(AtomicBool::new(false))
}

const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(25);

#[derive(Debug)]
pub struct RalineApiClient {
    http: Client,
    config: ApiConfig,
    tokens: Option<Arc<TokenStore>>,
}

impl RalineApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, RalineApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(RalineApiError::from)?;
        Ok(Self {
            http,
            config,
            tokens: None,
        })
    }

    /// Resolve bearer tokens from `tokens` for requests without an explicit one.
    pub fn with_token_store(mut self, tokens: Arc<TokenStore>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn token_store(&self) -> Option<&Arc<TokenStore>> {
        self.tokens.as_ref()
    }

    pub fn api_base(&self) -> Result<Url, RalineApiError> {
        resolve_api_base(&self.config)
    }

    pub fn endpoint(&self, path: &str, query: &[(String, String)]) -> Result<Url, RalineApiError> {
        build_endpoint(&self.api_base()?, path, query, &self.config.lang)
    }

    /// Explicit token first, then the token store's tier precedence.
    pub fn resolve_token(&self, explicit: Option<&str>) -> Result<Option<String>, RalineApiError> {
        if let Some(token) = explicit.map(str::trim).filter(|token| !token.is_empty()) {
            return Ok(Some(token.to_owned()));
        }
        match &self.tokens {
            Some(tokens) => Ok(tokens.resolve()?),
            None => Ok(None),
        }
    }

    pub fn build_headers(
        &self,
        token: Option<&str>,
        json_body: bool,
    ) -> Result<HeaderMap, RalineApiError> {
        let headers = build_headers(&self.config, token, json_body);
        let mut out = HeaderMap::new();
        for (key, value) in headers {
            out.insert(
                HeaderName::from_bytes(key.as_bytes())
                    .map_err(|_| RalineApiError::InvalidHeader(format!("invalid key: {key}")))?,
                HeaderValue::from_str(&value)
                    .map_err(|_| RalineApiError::InvalidHeader(format!("invalid value for {key}")))?,
            );
        }
        Ok(out)
    }

    pub fn build_request(&self, spec: RequestSpec) -> Result<RequestBuilder, RalineApiError> {
        let RequestSpec {
            method,
            path,
            query,
            body,
            token,
            ..
        } = spec;

        let url = self.endpoint(&path, &query)?;
        let token = self.resolve_token(token.as_deref())?;
        let json_body = body.as_ref().is_some_and(RequestBody::is_json);
        let headers = self.build_headers(token.as_deref(), json_body)?;

        let builder = self.http.request(method, url).headers(headers);
        Ok(match body {
            Some(RequestBody::Json(value)) => builder.body(serde_json::to_vec(&value)?),
            Some(RequestBody::Form(form)) => builder.multipart(form),
            None => builder,
        })
    }

    /// Issue one request and map the outcome.
    pub async fn send(
        &self,
        spec: RequestSpec,
        abort: Option<&AbortSignal>,
    ) -> Result<ApiResponse, RalineApiError> {
        if is_aborted(abort) {
            return Err(RalineApiError::Cancelled);
        }

        let operation = spec.operation.clone();
        let builder = self.build_request(spec)?;
        tracing::debug!(%operation, "sending raline api request");

        let response = await_or_cancel(builder.send(), abort).await??;
        let status = response.status();
        let version = response
            .headers()
            .get(HEADER_RALINE_VERSION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let text = await_or_cancel(response.text(), abort).await??;

        if !status.is_success() {
            let error = status_error(status, &text);
            tracing::warn!(%operation, status = status.as_u16(), %error, "raline api request failed");
            return Err(error);
        }

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str::<Value>(&text)?
        };
        if let Err(error) = check_instance(&operation, &body) {
            tracing::warn!(%operation, %error, "raline api reported a business error");
            return Err(error);
        }

        Ok(ApiResponse { version, body })
    }

    /// GET an absolute URL and parse it as JSON. No auth, no `lang` query.
    pub async fn fetch_json(
        &self,
        url: &str,
        abort: Option<&AbortSignal>,
    ) -> Result<Value, RalineApiError> {
        if is_aborted(abort) {
            return Err(RalineApiError::Cancelled);
        }
        let url = Url::parse(url)
            .map_err(|error| RalineApiError::InvalidBaseUrl(format!("{url}: {error}")))?;
        let response = await_or_cancel(self.http.get(url.clone()).send(), abort).await??;
        let status = response.status();
        let text = await_or_cancel(response.text(), abort).await??;
        if !status.is_success() {
            return Err(status_error(status, &text));
        }
        tracing::debug!(%url, "fetched json document");
        Ok(serde_json::from_str(&text)?)
    }
}

fn is_aborted(abort: Option<&AbortSignal>) -> bool {
    abort.is_some_and(|signal| signal.load(Ordering::Acquire))
}

async fn await_or_cancel<F>(
    future: F,
    abort: Option<&AbortSignal>,
) -> Result<F::Output, RalineApiError>
where
    F: Future,
{
    if abort.is_none() {
        return Ok(future.await);
    }

    let mut future = Box::pin(future);

    loop {
        if is_aborted(abort) {
            return Err(RalineApiError::Cancelled);
        }

        if let Ok(output) = tokio::time::timeout(CANCEL_POLL_INTERVAL, &mut future).await {
            if is_aborted(abort) {
                return Err(RalineApiError::Cancelled);
            }
            return Ok(output);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::{abort_signal, RalineApiClient};
    use crate::config::ApiConfig;
    use crate::error::RalineApiError;
    use crate::request::RequestSpec;

    #[tokio::test]
    async fn aborted_signal_short_circuits_before_any_network_io() {
        let client = RalineApiClient::new(ApiConfig::new("http://127.0.0.1:9")).expect("client");
        let abort = abort_signal();
        abort.store(true, Ordering::Release);

        let error = client
            .send(RequestSpec::get("token"), Some(&abort))
            .await
            .expect_err("aborted call must fail");
        assert!(matches!(error, RalineApiError::Cancelled));
    }

    #[test]
    fn explicit_token_wins_without_a_store() {
        let client = RalineApiClient::new(ApiConfig::new("example.com")).expect("client");
        assert_eq!(
            client.resolve_token(Some(" t ")).expect("resolve").as_deref(),
            Some("t")
        );
        assert!(client.resolve_token(None).expect("resolve").is_none());
    }
}
