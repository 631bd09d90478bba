//! Interactive browsing

use anyhow::Result;
use tracing::info;

use treeview::config::ViewerConfig;
use treeview::tui::App;

use crate::SourceArgs;

pub fn browse_command(args: &SourceArgs, config: ViewerConfig) -> Result<()> {
    let (title, items) = super::load_items(args, &config)?;
    info!("Browsing {} ({} root items)", title, items.len());

    let mut app = App::new(title, items, config)?;
    app.run()
}
