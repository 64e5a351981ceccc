use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use session_store::SessionStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RalineApiError {
    #[error("server URL is missing and no admin page URL is available to infer it")]
    MissingServerUrl,

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx response. Rendered as `"{status} - {title}: {detail}"`.
    #[error("{status} - {title}: {detail}")]
    Status {
        status: u16,
        title: String,
        detail: String,
    },

    /// 2xx response whose payload carries an `instance` discriminator.
    #[error("{operation} {instance} failed with {title}: {detail}")]
    Business {
        operation: String,
        instance: String,
        title: String,
        detail: String,
    },

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("response is missing field '{0}'")]
    MissingField(&'static str),

    #[error("token storage error: {0}")]
    Storage(#[from] SessionStoreError),

    #[error("request was cancelled")]
    Cancelled,
}

impl RalineApiError {
    /// HTTP status for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server rejected the credentials. Callers re-authenticate
    /// on this; no refresh is attempted.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

/// Problem-details body returned with non-2xx responses and, with an
/// `instance`, inside otherwise successful ones.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorPayload {
    #[serde(default)]
    pub instance: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

/// Build the error for a non-2xx response from its status and raw body.
pub fn status_error(status: StatusCode, body: &str) -> RalineApiError {
    let fallback_title = || {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    };

    let (title, detail) = match serde_json::from_str::<ErrorPayload>(body) {
        Ok(payload) => (
            payload
                .title
                .filter(|title| !title.is_empty())
                .unwrap_or_else(fallback_title),
            payload.detail.unwrap_or_default(),
        ),
        Err(_) => (fallback_title(), body.trim().to_string()),
    };

    RalineApiError::Status {
        status: status.as_u16(),
        title,
        detail,
    }
}

/// Fail when a 2xx payload carries a non-empty `instance` field.
pub fn check_instance(operation: &str, body: &Value) -> Result<(), RalineApiError> {
    let Some(instance) = body
        .get("instance")
        .and_then(Value::as_str)
        .filter(|instance| !instance.is_empty())
    else {
        return Ok(());
    };

    let text = |key: &str| {
        body.get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    Err(RalineApiError::Business {
        operation: operation.to_string(),
        instance: instance.to_string(),
        title: text("title"),
        detail: text("detail"),
    })
}
