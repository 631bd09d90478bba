//! Building trees from the things the viewer can show
//!
//! - `directory`: a directory on disk
//! - `document`: a JSON, YAML or TOML file
//! - `demo`: a fixed sample tree

mod demo;
mod directory;
mod document;

pub use demo::demo_items;
pub use directory::{read_directory, DirectoryOptions};
pub use document::{document_items, value_items, DocumentFormat, ParseError};

use std::path::{Path, PathBuf};

use crate::TreeItem;

/// Error type for tree sources
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported document type: {0} (expected .json, .yaml, .yml or .toml)")]
    UnsupportedFormat(PathBuf),

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// Load the tree for `path`: a directory listing or a parsed document.
pub fn load_path(path: &Path, options: &DirectoryOptions) -> Result<Vec<TreeItem<String>>, SourceError> {
    let metadata = std::fs::metadata(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if metadata.is_dir() {
        read_directory(path, options)
    } else {
        document_items(path)
    }
}
