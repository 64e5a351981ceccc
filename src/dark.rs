//! Dark-mode stylesheet.

const DARK_VARIABLES: &str = "{--raline-white:#000;--raline-light-grey:#666;--raline-dark-grey:#999;--raline-color:#888;--raline-bg-color:#1e1e1e;--raline-bg-color-light:#272727;--raline-bg-color-hover: #444;--raline-border-color:#333;--raline-disable-bg-color:#444;--raline-disable-color:#272727;--raline-bq-color:#272727;--raline-info-bg-color:#272727;--raline-info-color:#666}";

/// When the dark palette applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DarkMode {
    #[default]
    Off,
    /// Follow `prefers-color-scheme`.
    Auto,
    /// Always dark.
    On,
    /// Dark while `selector` matches, e.g. `html[data-theme="dark"]`.
    Selector(String),
}

impl From<bool> for DarkMode {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::On
        } else {
            Self::Off
        }
    }
}

impl From<&str> for DarkMode {
    fn from(selector: &str) -> Self {
        match selector {
            "auto" => Self::Auto,
            "" => Self::Off,
            selector => Self::Selector(selector.to_owned()),
        }
    }
}

/// CSS injected next to the widget; empty when dark mode is off.
pub fn get_dark_style(mode: &DarkMode) -> String {
    match mode {
        DarkMode::Off => String::new(),
        DarkMode::Auto => format!("@media(prefers-color-scheme:dark){{body{DARK_VARIABLES}}}"),
        DarkMode::On => format!(":root{DARK_VARIABLES}"),
        DarkMode::Selector(selector) => format!("{selector}{DARK_VARIABLES}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{get_dark_style, DarkMode, DARK_VARIABLES};

    #[test]
    fn style_per_mode() {
        assert_eq!(get_dark_style(&DarkMode::Off), "");
        assert_eq!(get_dark_style(&true.into()), format!(":root{DARK_VARIABLES}"));
        assert_eq!(
            get_dark_style(&"auto".into()),
            format!("@media(prefers-color-scheme:dark){{body{DARK_VARIABLES}}}")
        );
        assert_eq!(
            get_dark_style(&"html.dark".into()),
            format!("html.dark{DARK_VARIABLES}")
        );
    }
}
