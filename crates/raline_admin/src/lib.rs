//! Admin surfaces for a raline server.
//!
//! ## Session
//!
//! [`auth::AuthService`] owns the bearer token through a
//! [`session_store::TokenStore`]: login remembers the issued token in the
//! session or persistent tier, logout clears every tier without contacting the
//! server. There is no refresh; a request that fails with an auth error means
//! the caller must log in again.
//!
//! ## Forms
//!
//! Every form in [`forms`] validates locally first. A form that fails
//! validation never reaches the network.
//!
//! ## Environment
//!
//! The `raline-admin` binary reads `RALINE_SERVER_URL`, `RALINE_LANG`,
//! `RALINE_DATA_DIR` and `RALINE_TIMEOUT_SEC` (see [`config::EnvConfig`]);
//! command-line flags take precedence. Log output honours `RUST_LOG`.

pub mod auth;
pub mod config;
pub mod countdown;
pub mod error;
pub mod forms;
pub mod users;

pub use auth::{AuthService, CodePurpose};
pub use config::EnvConfig;
pub use countdown::{Countdown, CountdownState, SEND_CODE_COOLDOWN_SECS};
pub use error::{AdminError, FormError};
pub use users::{actions_for, role_display, UserAction, UserAdmin};
