//! Print command implementation

use anyhow::Result;
use std::io::{self, Write};

use treeview::config::ViewerConfig;
use treeview::{flatten, TreeItem, TreeState};

use crate::SourceArgs;

pub fn print_command(args: &SourceArgs, config: &ViewerConfig) -> Result<()> {
    let (_, items) = super::load_items(args, config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in render_lines(&items) {
        writeln!(out, "{}", line)?;
    }

    Ok(())
}

/// Every row of the fully opened tree, indented two spaces per level.
/// Continuation lines of multi-line labels keep the row's indentation.
fn render_lines(items: &[TreeItem<String>]) -> Vec<String> {
    let mut state = TreeState::default();
    state.open_all(items);

    let opened = state.get_all_opened().into_iter().collect();
    flatten(&opened, items)
        .iter()
        .flat_map(|row| {
            let indent = "  ".repeat(row.depth());
            row.item
                .elem()
                .lines()
                .map(move |line| format!("{indent}{line}"))
                .collect::<Vec<_>>()
        })
        .collect()
}
