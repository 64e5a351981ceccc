//! Request layer for the raline comment service.
//!
//! Every call is a single request: resolve the endpoint under the `api/`
//! namespace, append the `lang` query, attach the bearer token, encode the body,
//! then map non-2xx statuses and 2xx `instance` payloads to [`RalineApiError`].
//! There are no retries and no response caching. Each call accepts an optional
//! [`AbortSignal`]; a cancelled call resolves to [`RalineApiError::Cancelled`].
//!
//! Endpoint wrappers live in [`auth`], [`user`] and [`comment`] as inherent
//! methods on [`RalineApiClient`].

pub mod auth;
pub mod client;
pub mod comment;
pub mod config;
pub mod error;
pub mod headers;
pub mod payload;
pub mod records;
pub mod request;
pub mod response;
pub mod url;
pub mod user;

pub use client::{abort_signal, AbortSignal, RalineApiClient};
pub use comment::CommentQuery;
pub use config::ApiConfig;
pub use error::RalineApiError;
pub use payload::{
    CommentPatch, ForgotRequest, LoginRequest, NewComment, ProfileUpdate, RegisterRequest,
    TwoFactorConfirm, UserPatch,
};
pub use records::{
    Comment, CommentPage, CommentStatus, PublicUser, RegisterResponse, SortBy, TwoFactorSetup,
    UserInfo, UserPage, UserRole,
};
pub use request::{RequestBody, RequestSpec};
pub use response::ApiResponse;
pub use url::{infer_base_url, normalize_server_url};
