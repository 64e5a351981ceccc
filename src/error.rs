use raline_api::RalineApiError;
use session_store::SessionStoreError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::emoji::EmojiError;
use crate::submit::SubmitError;
use crate::upload::UploadError;

/// Any failure surfaced by a [`crate::Raline`] instance.
#[derive(Debug, Error)]
pub enum RalineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] RalineApiError),

    #[error("client storage error: {0}")]
    Storage(#[from] SessionStoreError),

    #[error(transparent)]
    Emoji(#[from] EmojiError),

    #[error(transparent)]
    Submit(#[from] SubmitError),

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error("{0} is disabled")]
    Disabled(&'static str),
}

pub type Result<T> = std::result::Result<T, RalineError>;
