//! Records returned by the server.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Moderation state of a comment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    #[default]
    Approved,
    Waiting,
    Spam,
}

impl CommentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Waiting => "waiting",
            Self::Spam => "spam",
        }
    }
}

impl fmt::Display for CommentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account role. Any `verify*` value marks an account awaiting email
/// verification; unknown values are preserved verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    #[default]
    Guest,
    Verify(String),
    Other(String),
}

impl UserRole {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "admin" => Self::Admin,
            "guest" => Self::Guest,
            verify if verify.starts_with("verify") => Self::Verify(verify.to_owned()),
            other => Self::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Guest => "guest",
            Self::Verify(raw) | Self::Other(raw) => raw,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for UserRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Listing order accepted by `comment?type=list`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    #[default]
    InsertedAtDesc,
    InsertedAtAsc,
    LikeDesc,
}

impl SortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InsertedAtDesc => "insertedAt_desc",
            Self::InsertedAtAsc => "insertedAt_asc",
            Self::LikeDesc => "like_desc",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(alias = "id")]
    pub object_id: i64,
    #[serde(default)]
    pub url: String,
    /// Server-rendered HTML.
    #[serde(default)]
    pub comment: String,
    /// Raw markdown, only sent to logged-in users.
    #[serde(default)]
    pub orig: Option<String>,
    #[serde(default)]
    pub nick: Option<String>,
    #[serde(default)]
    pub mail: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub status: CommentStatus,
    #[serde(default, deserialize_with = "bool_or_int")]
    pub sticky: bool,
    #[serde(default)]
    pub like: i64,
    #[serde(default)]
    pub pid: Option<i64>,
    #[serde(default)]
    pub rid: Option<i64>,
    #[serde(default, rename = "user_id")]
    pub user_id: Option<i64>,
    #[serde(default, rename = "type")]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub level: Option<i64>,
    #[serde(default)]
    pub browser: Option<String>,
    #[serde(default)]
    pub os: Option<String>,
    #[serde(default)]
    pub addr: Option<String>,
    #[serde(default)]
    pub inserted_at: Option<String>,
    /// Creation time, milliseconds since the Unix epoch.
    #[serde(default)]
    pub time: i64,
    #[serde(default)]
    pub children: Vec<Comment>,
}

/// One page of `comment?type=list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPage {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub page_size: u64,
    #[serde(default)]
    pub total_pages: u64,
    #[serde(default)]
    pub data: Vec<Comment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default, rename = "objectId", alias = "id")]
    pub object_id: Option<i64>,
    #[serde(default, alias = "name", alias = "nick")]
    pub display_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "link")]
    pub url: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default, rename = "mailMd5")]
    pub mail_md5: Option<String>,
    #[serde(default, rename = "type")]
    pub role: UserRole,
    #[serde(default)]
    pub label: Option<String>,
    /// Present on login responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// One page of the admin user list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPage {
    #[serde(default)]
    pub page: u64,
    #[serde(default, alias = "totalPages")]
    pub total_pages: u64,
    #[serde(default, alias = "pageSize", alias = "size")]
    pub page_size: u64,
    #[serde(default, alias = "content")]
    pub data: Vec<UserInfo>,
}

/// Entry of the public user wall.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicUser {
    #[serde(default)]
    pub nick: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub level: Option<i64>,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Set when the server requires email verification before login.
    #[serde(default)]
    pub verify: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TwoFactorSetup {
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default, alias = "otpauthUrl")]
    pub otpauth_url: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

fn bool_or_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Bool(value) => Ok(value),
        Value::Number(number) => Ok(number.as_i64().unwrap_or(0) != 0),
        Value::Null => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected boolean or 0/1, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Comment, CommentStatus, UserInfo, UserRole};

    #[test]
    fn verify_roles_keep_their_raw_value() {
        assert_eq!(
            UserRole::parse("verify:abc"),
            UserRole::Verify("verify:abc".to_owned())
        );
        assert_eq!(UserRole::parse("admin"), UserRole::Admin);
        assert_eq!(UserRole::parse("owner").as_str(), "owner");
    }

    #[test]
    fn comment_accepts_numeric_sticky() {
        let comment: Comment = serde_json::from_value(json!({
            "objectId": 7,
            "comment": "<p>hi</p>",
            "status": "waiting",
            "sticky": 1,
            "like": 3
        }))
        .expect("comment should decode");
        assert!(comment.sticky);
        assert_eq!(comment.status, CommentStatus::Waiting);
        assert_eq!(comment.like, 3);
    }

    #[test]
    fn user_info_accepts_server_field_aliases() {
        let user: UserInfo = serde_json::from_value(json!({
            "id": 3,
            "name": "ferris",
            "type": "admin",
            "token": "t"
        }))
        .expect("user should decode");
        assert_eq!(user.object_id, Some(3));
        assert_eq!(user.display_name, "ferris");
        assert!(user.role.is_admin());
        assert_eq!(user.token.as_deref(), Some("t"));
    }
}
