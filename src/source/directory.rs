//! Directory listings as trees

use std::fs;
use std::io;
use std::path::Path;

use glob::Pattern;
use ratatui::style::Style;
use tracing::{debug, warn};

use super::SourceError;
use crate::config::{ConfigError, SourceConfig};
use crate::TreeItem;

/// What to include when reading a directory
#[derive(Debug, Clone, Default)]
pub struct DirectoryOptions {
    /// Deepest level read, root entries are level 1
    pub max_depth: usize,
    pub show_hidden: bool,
    /// Entries whose file name matches any pattern are skipped
    pub exclude: Vec<Pattern>,
    /// Style applied to directory rows
    pub directory_style: Style,
}

impl DirectoryOptions {
    pub fn from_config(config: &SourceConfig, directory_style: Style) -> Result<Self, ConfigError> {
        Ok(Self {
            max_depth: config.max_depth,
            show_hidden: config.show_hidden,
            exclude: config.exclude_patterns()?,
            directory_style,
        })
    }

    fn includes(&self, name: &str) -> bool {
        if !self.show_hidden && name.starts_with('.') {
            return false;
        }
        !self.exclude.iter().any(|pattern| pattern.matches(name))
    }
}

struct Entry {
    name: String,
    is_dir: bool,
}

/// Read `root` into tree items.
///
/// Directories come first, then files, each sorted by name. Symlinks are
/// listed but never followed. A subdirectory that cannot be read is shown
/// without children.
pub fn read_directory(root: &Path, options: &DirectoryOptions) -> Result<Vec<TreeItem<String>>, SourceError> {
    debug!("Reading directory tree at {}", root.display());
    read_level(root, 1, options).map_err(|source| SourceError::Io {
        path: root.to_path_buf(),
        source,
    })
}

fn read_level(dir: &Path, depth: usize, options: &DirectoryOptions) -> io::Result<Vec<TreeItem<String>>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !options.includes(&name) {
            continue;
        }
        // DirEntry::file_type does not traverse symlinks
        let is_dir = entry.file_type()?.is_dir();
        entries.push(Entry { name, is_dir });
    }

    entries.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));

    let items = entries
        .into_iter()
        .map(|entry| {
            if !entry.is_dir {
                return TreeItem::new_leaf(entry.name);
            }

            let path = dir.join(&entry.name);
            let children = if depth < options.max_depth {
                read_level(&path, depth + 1, options).unwrap_or_else(|e| {
                    warn!("Skipping unreadable directory {}: {}", path.display(), e);
                    Vec::new()
                })
            } else {
                Vec::new()
            };
            TreeItem::new(format!("{}/", entry.name), children).style(options.directory_style)
        })
        .collect();

    Ok(items)
}
