//! Comment submission checks and payload building.
//!
//! Validation runs before any request; a failed check never reaches the
//! network.

use std::sync::OnceLock;

use raline_api::{NewComment, UserInfo};
use regex::Regex;
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::i18n::Locale;
use crate::config::{LoginMode, MetaField, RalineConfig};

const MIN_NICK_LENGTH: usize = 2;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("login is required to comment")]
    LoginRequired,

    #[error("nickname is missing or too short")]
    Nick,

    #[error("mail address is missing or malformed")]
    Mail,

    #[error("comment is empty")]
    EmptyContent,

    #[error("comment has {count} words, expected {min} to {max}")]
    WordLimit { count: usize, min: usize, max: usize },
}

impl SubmitError {
    /// Message for the commenter in the configured language.
    pub fn localized(&self, locale: &Locale) -> String {
        match self {
            Self::LoginRequired => locale.text("login").to_owned(),
            Self::Nick => locale.text("nickError").to_owned(),
            Self::Mail => locale.text("mailError").to_owned(),
            Self::EmptyContent => locale.text("placeholder").to_owned(),
            Self::WordLimit { count, min, max } => locale
                .text("wordHint")
                .replace("$0", &min.to_string())
                .replace("$1", &max.to_string())
                .replace("$2", &count.to_string()),
        }
    }
}

/// Editor contents at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentDraft {
    pub comment: String,
    pub nick: String,
    pub mail: String,
    pub link: String,
    /// Reply target: parent id, thread root id and the parent's nickname.
    pub pid: Option<i64>,
    pub rid: Option<i64>,
    pub at: Option<String>,
    pub ua: String,
    pub recaptcha_v3: Option<String>,
    pub turnstile: Option<String>,
}

fn mail_regex() -> &'static Regex {
    static CACHED: OnceLock<Regex> = OnceLock::new();
    CACHED.get_or_init(|| {
        Regex::new(r"^\w(?:[\w._-]*\w)?@(?:\w(?:[\w-]*\w)?\.)*\w+$").expect("mail regex must compile")
    })
}

pub fn is_valid_email(mail: &str) -> bool {
    mail_regex().is_match(mail)
}

/// Word count used for the word limit: user-perceived characters.
pub fn word_count(content: &str) -> usize {
    content.trim().graphemes(true).count()
}

/// Check a draft against the resolved options. Meta checks only apply to
/// anonymous commenters.
pub fn validate_submission(
    config: &RalineConfig,
    draft: &CommentDraft,
    logged_in: bool,
) -> Result<(), SubmitError> {
    if !logged_in {
        if config.login == LoginMode::Force {
            return Err(SubmitError::LoginRequired);
        }

        let nick = draft.nick.trim();
        let nick_required = config.required_meta.contains(&MetaField::Nick);
        if (nick_required && nick.is_empty())
            || (!nick.is_empty() && nick.graphemes(true).count() < MIN_NICK_LENGTH)
        {
            return Err(SubmitError::Nick);
        }

        let mail = draft.mail.trim();
        let mail_required = config.required_meta.contains(&MetaField::Mail);
        if (mail_required && mail.is_empty()) || (!mail.is_empty() && !is_valid_email(mail)) {
            return Err(SubmitError::Mail);
        }
    }

    if draft.comment.trim().is_empty() {
        return Err(SubmitError::EmptyContent);
    }

    if let Some((min, max)) = config.word_limit {
        let count = word_count(&draft.comment);
        if count < min || count > max {
            return Err(SubmitError::WordLimit { count, min, max });
        }
    }

    Ok(())
}

/// Request body for `add_comment`. Logged-in users are identified by their
/// profile; anonymous nicknames default to the locale's `anonymous`.
pub fn build_comment(config: &RalineConfig, draft: &CommentDraft, user: Option<&UserInfo>) -> NewComment {
    let non_empty = |value: &str| {
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_owned())
    };

    let (nick, mail, link) = match user {
        Some(user) => (
            non_empty(&user.display_name),
            user.email.clone(),
            user.url.clone(),
        ),
        None => (
            Some(non_empty(&draft.nick).unwrap_or_else(|| config.locale.text("anonymous").to_owned())),
            non_empty(&draft.mail),
            non_empty(&draft.link),
        ),
    };

    NewComment {
        comment: draft.comment.clone(),
        url: config.path.clone(),
        ua: draft.ua.clone(),
        nick,
        mail,
        link,
        pid: draft.pid,
        rid: draft.rid,
        at: draft.at.clone(),
        recaptcha_v3: draft.recaptcha_v3.clone(),
        turnstile: draft.turnstile.clone(),
    }
}
