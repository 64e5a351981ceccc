//! Page path helpers.

use percent_encoding::percent_decode_str;

/// Path used when the caller does not name the current page.
pub const DEFAULT_PATH: &str = "/";

/// Percent-decode a page path. Invalid UTF-8 after decoding keeps the raw input.
pub fn decode_path(path: &str) -> String {
    match percent_decode_str(path).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => path.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::decode_path;

    #[test]
    fn decodes_escaped_segments() {
        assert_eq!(decode_path("/posts/%E4%BD%A0%E5%A5%BD"), "/posts/你好");
        assert_eq!(decode_path("/a%20b/"), "/a b/");
    }

    #[test]
    fn invalid_sequences_are_left_alone() {
        assert_eq!(decode_path("/bad/%FF"), "/bad/%FF");
        assert_eq!(decode_path("/plain"), "/plain");
    }
}
