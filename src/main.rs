//! menu-tree CLI - run numbered terminal menus
//!
//! Usage: menu-tree <COMMAND>
//!
//! Commands:
//!   run     Run the menu described by a definition file
//!   check   Validate a definition file and print its outline
//!   demo    Run a small built-in sample menu

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use menu_tree::ColorMode;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let color = cli.color.map(ColorMode::from);
    match cli.command {
        Commands::Run { file, redisplay } => commands::run::cmd_run(&file, redisplay, color),
        Commands::Check { file } => commands::check::cmd_check(&file, color),
        Commands::Demo => commands::demo::cmd_demo(color),
    }
}

/// Logs go to stderr so they never interleave with the menu on stdout.
/// `RUST_LOG` wins over the verbosity flag when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
