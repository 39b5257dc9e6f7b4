//! Config file loading (`~/.config/dirmon/config.toml`).
//!
//! Missing file or malformed values fall back to defaults; CLI flags
//! override whatever the file says.

use std::fs;
use std::path::PathBuf;
use toml::Value as TomlValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub interval_ms: u64,
    pub recursive: bool,
    pub include_hidden: bool,
    pub max_events: usize,
    pub ignore: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval_ms: 2000,
            recursive: false,
            include_hidden: false,
            max_events: 1000,
            ignore: Vec::new(),
        }
    }
}

impl Config {
    /// Load from the user config file, falling back to defaults.
    pub fn load() -> Self {
        config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .map(|text| Self::parse(&text))
            .unwrap_or_default()
    }

    /// Parse config text; unknown keys are ignored, bad values keep defaults.
    pub fn parse(text: &str) -> Self {
        let mut config = Config::default();
        let Ok(value) = text.parse::<TomlValue>() else {
            return config;
        };
        let Some(table) = value.as_table() else {
            return config;
        };

        if let Some(ms) = table.get("interval_ms").and_then(|v| v.as_integer()) {
            if ms > 0 {
                config.interval_ms = ms as u64;
            }
        }
        if let Some(recursive) = table.get("recursive").and_then(|v| v.as_bool()) {
            config.recursive = recursive;
        }
        if let Some(hidden) = table.get("include_hidden").and_then(|v| v.as_bool()) {
            config.include_hidden = hidden;
        }
        if let Some(max) = table.get("max_events").and_then(|v| v.as_integer()) {
            if max > 0 {
                config.max_events = max as usize;
            }
        }
        if let Some(patterns) = table.get("ignore").and_then(|v| v.as_array()) {
            config.ignore = patterns
                .iter()
                .filter_map(|v| v.as_str())
                .map(|s| s.to_string())
                .collect();
        }

        config
    }
}

fn config_path() -> Option<PathBuf> {
    let dir = dirs::config_dir()?;
    Some(dir.join("dirmon").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_text_gives_defaults() {
        assert_eq!(Config::parse(""), Config::default());
    }

    #[test]
    fn full_file_parses() {
        let config = Config::parse(
            r#"
            interval_ms = 500
            recursive = true
            include_hidden = true
            max_events = 50
            ignore = ["target", "node_modules"]
            "#,
        );
        assert_eq!(
            config,
            Config {
                interval_ms: 500,
                recursive: true,
                include_hidden: true,
                max_events: 50,
                ignore: vec!["target".to_string(), "node_modules".to_string()],
            }
        );
    }

    #[test]
    fn bad_values_keep_defaults() {
        let config = Config::parse(
            r#"
            interval_ms = -5
            max_events = "lots"
            recursive = true
            "#,
        );
        assert_eq!(config.interval_ms, 2000);
        assert_eq!(config.max_events, 1000);
        assert!(config.recursive);
    }

    #[test]
    fn malformed_toml_gives_defaults() {
        assert_eq!(Config::parse("interval_ms = ["), Config::default());
    }
}
