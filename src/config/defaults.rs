//! Built-in values for options the caller leaves unset.

use std::sync::Arc;

use crate::config::{Highlighter, TexRenderer};
use crate::emoji::EmojiSource;
use crate::markdown::highlight::highlight_html;
use crate::search::GiphySearch;
use crate::upload::DataUrlUploader;

pub const DEFAULT_PAGE_SIZE: u64 = 10;

pub const DEFAULT_EMOJI: &[&str] = &[
    "//unpkg.com/@waline/emojis@1.2.0/weibo",
    "//unpkg.com/@waline/emojis@1.2.0/bilibili",
];

pub const DEFAULT_REACTION: &[&str] = &[
    "//unpkg.com/@waline/emojis/tieba/tieba_agree.png",
    "//unpkg.com/@waline/emojis/tieba/tieba_look_down.png",
    "//unpkg.com/@waline/emojis/tieba/tieba_sunglasses.png",
    "//unpkg.com/@waline/emojis/tieba/tieba_pick_nose.png",
    "//unpkg.com/@waline/emojis/tieba/tieba_awkward.png",
    "//unpkg.com/@waline/emojis/tieba/tieba_sleep.png",
];

const TEX_PLACEHOLDER: &str = "TeX is not available in preview";

pub fn default_emoji() -> Vec<EmojiSource> {
    DEFAULT_EMOJI
        .iter()
        .map(|folder| EmojiSource::Folder((*folder).to_owned()))
        .collect()
}

pub fn default_reaction() -> Vec<String> {
    DEFAULT_REACTION.iter().map(|url| (*url).to_owned()).collect()
}

pub fn default_highlighter() -> Highlighter {
    Arc::new(highlight_html)
}

/// Placeholder output used when no real TeX engine is configured.
pub fn default_tex_renderer() -> TexRenderer {
    Arc::new(|block_mode: bool, _tex: &str| {
        if block_mode {
            format!("<p class=\"wl-tex\">{TEX_PLACEHOLDER}</p>")
        } else {
            format!("<span class=\"wl-tex\">{TEX_PLACEHOLDER}</span>")
        }
    })
}

pub fn default_uploader() -> Arc<DataUrlUploader> {
    Arc::new(DataUrlUploader)
}

pub fn default_search(lang: &str) -> Arc<GiphySearch> {
    Arc::new(GiphySearch::new(lang))
}
