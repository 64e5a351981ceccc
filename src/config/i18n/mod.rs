//! Built-in locales.
//!
//! Locales are looked up by lower-cased language tag. Several tags share one
//! table (`zh` and `zh-cn`, `vi` and `vi-vn`, ...). Unknown tags fall back to
//! [`DEFAULT_LANG`].

use std::collections::BTreeMap;

mod de;
mod en;
mod fr;
mod jp;
mod pt_br;
mod ru;
mod vi_vn;
mod zh_cn;
mod zh_tw;

pub const DEFAULT_LANG: &str = "en-US";

type Table = &'static [(&'static str, &'static str)];

const LOCALES: &[(&str, Table)] = &[
    ("zh", zh_cn::STRINGS),
    ("zh-cn", zh_cn::STRINGS),
    ("zh-tw", zh_tw::STRINGS),
    ("en", en::STRINGS),
    ("en-us", en::STRINGS),
    ("fr", fr::STRINGS),
    ("fr-fr", fr::STRINGS),
    ("jp", jp::STRINGS),
    ("jp-jp", jp::STRINGS),
    ("pt-br", pt_br::STRINGS),
    ("ru", ru::STRINGS),
    ("ru-ru", ru::STRINGS),
    ("vi", vi_vn::STRINGS),
    ("vi-vn", vi_vn::STRINGS),
    ("de", de::STRINGS),
];

fn lookup(lang: &str) -> Option<Table> {
    let key = lang.trim().to_ascii_lowercase();
    LOCALES
        .iter()
        .find(|(tag, _)| *tag == key)
        .map(|(_, table)| *table)
}

/// Whether `lang` names a built-in locale, ignoring case.
pub fn is_supported(lang: &str) -> bool {
    lookup(lang).is_some()
}

/// The caller's tag when supported, [`DEFAULT_LANG`] otherwise.
pub fn get_lang(lang: &str) -> String {
    if is_supported(lang) {
        lang.to_owned()
    } else {
        DEFAULT_LANG.to_owned()
    }
}

/// Strings for `lang`, or the default locale's strings.
pub fn get_locale(lang: &str) -> Locale {
    let table = lookup(lang)
        .or_else(|| lookup(DEFAULT_LANG))
        .unwrap_or(en::STRINGS);
    Locale::from_table(table)
}

/// Resolved UI strings keyed by message id (`nick`, `wordHint`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locale {
    strings: BTreeMap<String, String>,
}

impl Locale {
    fn from_table(table: Table) -> Self {
        Self {
            strings: table
                .iter()
                .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Message text, or the key itself when the locale lacks it.
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    /// Shallow merge: every override replaces the whole string.
    pub fn merge(&mut self, overrides: &BTreeMap<String, String>) {
        for (key, value) in overrides {
            self.strings.insert(key.clone(), value.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{get_lang, get_locale, is_supported, DEFAULT_LANG, LOCALES};

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(get_locale("ZH-CN"), get_locale("zh-cn"));
        assert_eq!(get_locale("zh-CN").text("submit"), "提交");
        assert!(is_supported("Pt-BR"));
    }

    #[test]
    fn unsupported_tag_uses_default() {
        assert_eq!(get_lang("xx-XX"), DEFAULT_LANG);
        assert_eq!(get_locale("xx-XX"), get_locale(DEFAULT_LANG));
        assert_eq!(get_lang("zh-TW"), "zh-TW");
    }

    #[test]
    fn every_table_defines_the_same_keys() {
        let reference = get_locale(DEFAULT_LANG);
        for (tag, _) in LOCALES {
            let locale = get_locale(tag);
            assert_eq!(locale.len(), reference.len(), "{tag}");
            assert!(locale.get("wordHint").is_some(), "{tag}");
        }
    }

    #[test]
    fn merge_replaces_single_strings() {
        let mut locale = get_locale("en");
        locale.merge(&BTreeMap::from([("submit".to_owned(), "Post".to_owned())]));
        assert_eq!(locale.text("submit"), "Post");
        assert_eq!(locale.text("nick"), "NickName");
        assert_eq!(locale.text("missing"), "missing");
    }
}
