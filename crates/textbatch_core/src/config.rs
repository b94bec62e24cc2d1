//! Configuration loading from environment variables.

use crate::indentation::IndentationMode;
use std::env;

/// Default indentation size when nothing is configured.
pub const DEFAULT_TAB_SIZE: usize = 4;

/// Largest indentation size offered to users.
pub const MAX_TAB_SIZE: usize = 8;

/// Indentation settings used by the editor commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tab_size: usize,
    pub insert_spaces: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_size: DEFAULT_TAB_SIZE,
            insert_spaces: true,
        }
    }
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Clamp an indentation size into `1..=MAX_TAB_SIZE`.
pub fn normalize_tab_size(size: usize) -> usize {
    size.clamp(1, MAX_TAB_SIZE)
}

fn parse_tab_size(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok().map(normalize_tab_size)
}

impl Config {
    /// Load configuration from `TEXTBATCH_*` environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Missing or unparseable values keep their defaults. `tab_size` is
    /// clamped to `1..=8`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            tab_size: lookup("TEXTBATCH_TAB_SIZE")
                .and_then(|raw| parse_tab_size(&raw))
                .unwrap_or(defaults.tab_size),
            insert_spaces: lookup("TEXTBATCH_INSERT_SPACES")
                .and_then(|raw| parse_env_flag(&raw))
                .unwrap_or(defaults.insert_spaces),
        }
    }

    /// Indentation style implied by `insert_spaces`.
    pub fn indentation_mode(&self) -> IndentationMode {
        if self.insert_spaces {
            IndentationMode::Spaces
        } else {
            IndentationMode::Tabs
        }
    }
}

/// Per-editor options changed by the indentation and whitespace actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorOptions {
    pub tab_size: usize,
    pub insert_spaces: bool,
    pub render_whitespace: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for EditorOptions {
    fn from(config: &Config) -> Self {
        Self {
            tab_size: normalize_tab_size(config.tab_size),
            insert_spaces: config.insert_spaces,
            render_whitespace: false,
        }
    }
}

impl EditorOptions {
    pub fn indentation_mode(&self) -> IndentationMode {
        if self.insert_spaces {
            IndentationMode::Spaces
        } else {
            IndentationMode::Tabs
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn parse_env_flag_accepts_truthy_values() {
        for value in ["1", "true", "TRUE", " yes ", "on"] {
            assert_eq!(parse_env_flag(value), Some(true), "value: {}", value);
        }
    }

    #[test]
    fn parse_env_flag_accepts_falsy_values() {
        for value in ["", "0", "false", "FALSE", " no ", "off"] {
            assert_eq!(parse_env_flag(value), Some(false), "value: {}", value);
        }
    }

    #[test]
    fn parse_env_flag_rejects_unknown_values() {
        assert_eq!(parse_env_flag("maybe"), None);
        assert_eq!(parse_env_flag("enabled"), None);
    }

    #[test]
    fn missing_variables_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.indentation_mode(), IndentationMode::Spaces);
    }

    #[test]
    fn tab_size_is_clamped_and_garbage_ignored() {
        let config = Config::from_lookup(lookup_from(&[
            ("TEXTBATCH_TAB_SIZE", "12"),
            ("TEXTBATCH_INSERT_SPACES", "off"),
        ]));
        assert_eq!(config.tab_size, MAX_TAB_SIZE);
        assert_eq!(config.indentation_mode(), IndentationMode::Tabs);

        let config = Config::from_lookup(lookup_from(&[
            ("TEXTBATCH_TAB_SIZE", "zero"),
            ("TEXTBATCH_INSERT_SPACES", "sometimes"),
        ]));
        assert_eq!(config, Config::default());

        let config = Config::from_lookup(lookup_from(&[("TEXTBATCH_TAB_SIZE", "0")]));
        assert_eq!(config.tab_size, 1);
    }

    #[test]
    fn normalize_tab_size_caps_both_ends() {
        assert_eq!(normalize_tab_size(0), 1);
        assert_eq!(normalize_tab_size(3), 3);
        assert_eq!(normalize_tab_size(usize::MAX), MAX_TAB_SIZE);
    }

    #[test]
    fn editor_options_seed_from_config() {
        let config = Config {
            tab_size: 40,
            insert_spaces: false,
        };
        let options = EditorOptions::from(&config);
        assert_eq!(options.tab_size, MAX_TAB_SIZE);
        assert_eq!(options.indentation_mode(), IndentationMode::Tabs);
        assert!(!options.render_whitespace);
        assert_eq!(EditorOptions::default().tab_size, DEFAULT_TAB_SIZE);
    }
}
