//! Storage keys. These are part of the on-disk format; changing one orphans
//! whatever was stored under the old name.

/// Bearer token, in both the session and persistent tier.
pub const TOKEN_KEY: &str = "TOKEN";
/// Cached emoji manifests for versioned folders.
pub const EMOJI_KEY: &str = "raline_EMOJI";
/// Anonymous reaction votes, keyed by vote identifier.
pub const REACTION_KEY: &str = "raline_REACTION";
/// Logged-in user profile.
pub const USER_KEY: &str = "raline_USER";
/// Unsent comment box text.
pub const EDITOR_KEY: &str = "raline_COMMENT_BOX_EDITOR";
/// Nickname / mail / link convenience record.
pub const USER_META_KEY: &str = "raline_USER_META";
