//! Request payloads. Field names follow the server's wire format.

use serde::Serialize;

use crate::records::{CommentStatus, UserRole};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    /// One-time code for accounts with two-factor auth enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "recaptchaV3", skip_serializing_if = "Option::is_none")]
    pub recaptcha_v3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turnstile: Option<String>,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into()).filter(|code: &String| !code.is_empty());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub passwd: String,
    pub validate_code: String,
    #[serde(rename = "recaptchaV3", skip_serializing_if = "Option::is_none")]
    pub recaptcha_v3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turnstile: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ForgotRequest {
    pub email: String,
    pub password: String,
    pub validate_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct EmailRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TwoFactorConfirm {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

/// Partial update of the caller's own profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Admin update of another user's role or label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserPatch {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A comment being submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewComment {
    pub comment: String,
    pub url: String,
    pub ua: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Parent comment id when replying.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<i64>,
    /// Root comment id of the thread when replying.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rid: Option<i64>,
    /// Nickname of the comment being replied to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<String>,
    #[serde(rename = "recaptchaV3", skip_serializing_if = "Option::is_none")]
    pub recaptcha_v3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turnstile: Option<String>,
}

/// Partial comment update: moderation, content, pinning or like toggling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CommentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticky: Option<bool>,
    /// `true` to like, `false` to withdraw a like.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub like: Option<bool>,
}

impl CommentPatch {
    pub fn status(status: CommentStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn sticky(sticky: bool) -> Self {
        Self {
            sticky: Some(sticky),
            ..Self::default()
        }
    }

    pub fn like(like: bool) -> Self {
        Self {
            like: Some(like),
            ..Self::default()
        }
    }

    pub fn content(comment: impl Into<String>) -> Self {
        Self {
            comment: Some(comment.into()),
            ..Self::default()
        }
    }
}
