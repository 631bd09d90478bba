//! Configuration file I/O operations

use std::path::{Path, PathBuf};

use tracing::debug;

use super::{ConfigError, ViewerConfig};

impl ViewerConfig {
    /// Get the global config file path (<config dir>/treeview/config.toml)
    pub fn global_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("treeview")
            .join("config.toml")
    }

    /// Parse configuration from TOML text. Missing fields take their defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load the configuration the viewer should run with.
    ///
    /// An explicit path must exist. Without one, the global config file is
    /// used when present, otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            debug!("Loading config from {}", path.display());
            return Self::from_file(path);
        }

        let global = Self::global_config_path();
        if global.is_file() {
            debug!("Loading global config from {}", global.display());
            Self::from_file(&global)
        } else {
            debug!("No config file found, using defaults");
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RowDirection;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(ViewerConfig::from_toml("").unwrap(), ViewerConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = ViewerConfig::from_toml(
            r#"
highlight_symbol = "* "
direction = "bottom-to-top"

[source]
max_depth = 2
"#,
        )
        .unwrap();

        assert_eq!(config.highlight_symbol, "* ");
        assert_eq!(config.direction, RowDirection::BottomToTop);
        assert_eq!(config.source.max_depth, 2);
        assert!(!config.source.show_hidden);
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.theme.border, "cyan");
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            ViewerConfig::from_toml("tick_rate_ms = \"fast\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tick_rate_ms = 50\n").unwrap();

        let config = ViewerConfig::load(Some(&path)).unwrap();
        assert_eq!(config.tick_rate_ms, 50);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(matches!(
            ViewerConfig::load(Some(&path)),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_default_config_serializes() {
        let text = toml::to_string_pretty(&ViewerConfig::default()).unwrap();
        assert_eq!(ViewerConfig::from_toml(&text).unwrap(), ViewerConfig::default());
    }
}
