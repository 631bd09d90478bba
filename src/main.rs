use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "treeview")]
#[command(about = "Browse directories and JSON / YAML / TOML documents as a collapsible tree")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to <config dir>/treeview/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file (the terminal is taken by the viewer)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    source: SourceArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// What to show, shared by browsing and printing
#[derive(Args, Clone)]
pub struct SourceArgs {
    /// Directory or document to show (defaults to current directory)
    path: Option<PathBuf>,

    /// Show a built-in sample tree instead of a path
    #[arg(long, conflicts_with = "path")]
    demo: bool,

    /// Deepest directory level to read
    #[arg(short, long)]
    depth: Option<usize>,

    /// Include hidden entries
    #[arg(short, long)]
    all: bool,

    /// Skip entries matching this glob (repeatable, adds to the config)
    #[arg(short, long)]
    exclude: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the fully opened tree to stdout
    Print {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Write a default config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    cli::logging::init(cli.log_file.as_deref(), cli.verbose)?;

    match cli.command {
        Some(Commands::Print { source }) => {
            let config = cli::load_config(cli.config.as_deref(), &source)?;
            cli::print::print_command(&source, &config)?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(cli.config, force)?;
        }
        None => {
            let config = cli::load_config(cli.config.as_deref(), &cli.source)?;
            cli::browse::browse_command(&cli.source, config)?;
        }
    }

    Ok(())
}
