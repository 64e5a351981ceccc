use reqwest::multipart::Form;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::error::RalineApiError;

/// Request body. JSON bodies are serialized with a JSON content type;
/// multipart forms are passed to the transport untouched.
#[derive(Debug)]
pub enum RequestBody {
    Json(Value),
    Form(Form),
}

impl RequestBody {
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }
}

/// One API call: method, path relative to the `api/` namespace, query pairs,
/// optional body and optional explicit token.
#[derive(Debug)]
pub struct RequestSpec {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<RequestBody>,
    /// Beats every token-store tier when set.
    pub token: Option<String>,
    /// Name used in business-error messages, e.g. `"Get comment data"`.
    pub operation: String,
}

impl RequestSpec {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            operation: format!("{method} {path}"),
            method,
            path,
            query: Vec::new(),
            body: None,
            token: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    pub fn with_body<T: Serialize + ?Sized>(self, body: &T) -> Result<Self, RalineApiError> {
        Ok(self.with_json(serde_json::to_value(body)?))
    }

    pub fn with_form(mut self, form: Form) -> Self {
        self.body = Some(RequestBody::Form(form));
        self
    }

    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = token.map(str::to_owned);
        self
    }

    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = operation.into();
        self
    }
}
