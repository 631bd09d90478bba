//! Init command implementation

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use tracing::info;

use treeview::config::ViewerConfig;

/// Default configuration content for treeview init
pub const DEFAULT_CONFIG: &str = r##"# treeview configuration
# =====================
#
# Every key is optional; missing keys use the values shown here.

# Symbol drawn in front of the selected row
highlight_symbol = ">> "

# How often the viewer polls for input, in milliseconds
tick_rate_ms = 250

# "top-to-bottom" or "bottom-to-top"
direction = "top-to-bottom"

# Colors: ratatui color names ("lightgreen", "darkgray", ...) or "#rrggbb"
[theme]
highlight_fg = "black"
highlight_bg = "lightgreen"
border = "cyan"
directory = "lightblue"
status_bar = "darkgray"

# Directory listings
#
#   max_depth   - deepest level read, entries of the root are level 1
#   show_hidden - include names starting with a dot (also: --all)
#   exclude     - glob patterns matched against entry names (also: --exclude)
[source]
max_depth = 8
show_hidden = false
exclude = ["target", "node_modules"]
"##;

pub fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(ViewerConfig::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;
    info!("Wrote default config to {}", config_path.display());
    println!("Created: {}", config_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_defaults() {
        let parsed = ViewerConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(parsed, ViewerConfig::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        init_command(Some(path.clone()), false).unwrap();
        assert!(path.exists());

        std::fs::write(&path, "tick_rate_ms = 1\n").unwrap();
        assert!(init_command(Some(path.clone()), false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "tick_rate_ms = 1\n");

        init_command(Some(path.clone()), true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
