use raline_api::RalineApiError;
use session_store::SessionStoreError;
use thiserror::Error;

/// Local validation failures. Messages are the admin UI's translation keys.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("please input email")]
    MissingEmail,

    #[error("please input password")]
    MissingPassword,

    #[error("nickname illegal")]
    IllegalNickname,

    #[error("minimum 6 characters required")]
    MissingCode,

    #[error("passwords don't match")]
    PasswordMismatch,

    #[error("nickname and homepage are required")]
    MissingProfile,

    #[error("please input avatar url")]
    MissingAvatar,

    #[error("please enter an exclusive label")]
    MissingLabel,
}

#[derive(Debug, Error)]
pub enum AdminError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Api(#[from] RalineApiError),

    #[error("session storage error: {0}")]
    Storage(#[from] SessionStoreError),

    #[error("not logged in")]
    NotLoggedIn,

    #[error("You can't set yourself to be guest!")]
    SelfDemotion,
}

pub type Result<T> = std::result::Result<T, AdminError>;
