//! CLI command implementations

pub mod browse;
pub mod init;
pub mod logging;
pub mod print;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use treeview::config::ViewerConfig;
use treeview::source::{self, DirectoryOptions};
use treeview::TreeItem;

use crate::SourceArgs;

/// Load the config file and apply the command line overrides.
pub fn load_config(path: Option<&Path>, args: &SourceArgs) -> Result<ViewerConfig> {
    let mut config = ViewerConfig::load(path).context("Failed to load configuration")?;

    if let Some(depth) = args.depth {
        config.source.max_depth = depth;
    }
    if args.all {
        config.source.show_hidden = true;
    }
    config.source.exclude.extend(args.exclude.iter().cloned());

    Ok(config)
}

/// Build the tree to show and a title for it.
pub fn load_items(args: &SourceArgs, config: &ViewerConfig) -> Result<(String, Vec<TreeItem<String>>)> {
    if args.demo {
        return Ok(("demo".to_string(), source::demo_items()));
    }

    let path = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let theme = config.theme.resolve()?;
    let options = DirectoryOptions::from_config(&config.source, theme.directory)?;
    let items = source::load_path(&path, &options)
        .with_context(|| format!("Failed to load tree for {}", path.display()))?;

    Ok((path.display().to_string(), items))
}
