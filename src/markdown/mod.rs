//! Comment markdown rendering.
//!
//! Rendering runs in two passes: [`parse_emoji`] swaps known `:key:` tokens
//! for emoji images, then the text is parsed to mdast and written out as HTML
//! by [`html::render_html`]. Newlines inside paragraphs become `<br>`. Raw HTML
//! in the source survives only when it is on the allow-list; anything else is
//! escaped.

pub mod highlight;
pub mod html;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use markdown::{to_mdast, ParseOptions};
use regex::{Captures, Regex};

use crate::config::{Highlighter, TexRenderer};

/// Inputs to [`parse_markdown`] besides the text itself.
#[derive(Clone, Copy, Default)]
pub struct MarkdownOptions<'a> {
    pub emoji_map: Option<&'a BTreeMap<String, String>>,
    /// Receives `(code, lang)` for fenced blocks.
    pub highlighter: Option<&'a Highlighter>,
    /// Receives `(block_mode, tex)`; math syntax is only recognized when set.
    pub tex_renderer: Option<&'a TexRenderer>,
}

fn emoji_regex() -> &'static Regex {
    static CACHED: OnceLock<Regex> = OnceLock::new();
    CACHED.get_or_init(|| Regex::new(r":(.+?):").expect("emoji regex must compile"))
}

/// Replace `:key:` with an emoji `<img>` when `key` is in the map; unknown
/// tokens stay verbatim.
pub fn parse_emoji(text: &str, emoji_map: &BTreeMap<String, String>) -> String {
    emoji_regex()
        .replace_all(text, |captures: &Captures<'_>| {
            let key = &captures[1];
            match emoji_map.get(key) {
                Some(src) => emoji_img(src, key),
                None => captures[0].to_owned(),
            }
        })
        .into_owned()
}

pub(crate) fn emoji_img(src: &str, key: &str) -> String {
    format!(
        "<img class=\"wl-emoji\" src=\"{}\" alt=\"{}\">",
        escape_attr(src),
        escape_attr(key)
    )
}

/// Render comment text to HTML.
pub fn parse_markdown(content: &str, options: MarkdownOptions<'_>) -> String {
    let source = match options.emoji_map {
        Some(map) if !map.is_empty() => parse_emoji(content, map),
        _ => content.to_owned(),
    };

    let mut parse_options = ParseOptions::gfm();
    if options.tex_renderer.is_some() {
        parse_options.constructs.math_flow = true;
        parse_options.constructs.math_text = true;
    }

    match to_mdast(&source, &parse_options) {
        Ok(root) => html::render_html(&root, options),
        Err(error) => {
            tracing::debug!(%error, "markdown parse failed, rendering as text");
            format!("<p>{}</p>", escape_html(&source).replace('\n', "<br>"))
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn escape_attr(text: &str) -> String {
    escape_html(text).replace('\'', "&#39;")
}
