//! Default fenced-code highlighter.

use std::sync::OnceLock;

use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use super::escape_html;

fn syntax_set() -> &'static SyntaxSet {
    static CACHED: OnceLock<SyntaxSet> = OnceLock::new();
    CACHED.get_or_init(SyntaxSet::load_defaults_newlines)
}

/// Highlight `code` as `lang`, emitting `<span class="...">` markup.
///
/// Unknown languages are treated as plain text. Falls back to escaped source
/// if the grammar rejects a line.
pub fn highlight_html(code: &str, lang: &str) -> String {
    let syntaxes = syntax_set();
    let syntax = syntaxes
        .find_syntax_by_token(lang.trim())
        .unwrap_or_else(|| syntaxes.find_syntax_plain_text());
    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, syntaxes, ClassStyle::Spaced);

    for line in LinesWithEndings::from(code) {
        if let Err(error) = generator.parse_html_for_line_which_includes_newline(line) {
            tracing::debug!(lang, %error, "highlighting failed, emitting plain code");
            return escape_html(code);
        }
    }
    generator.finalize()
}
