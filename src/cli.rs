//! CLI Argument Parsing
//!
//! Global flags (--color, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use menu_tree::ColorMode;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// menu-tree - run numbered terminal menus described in TOML
#[derive(Parser, Debug)]
#[command(name = "menu-tree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level for logs on stderr (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the menu described by a definition file
    Run {
        /// Path to the menu definition (TOML)
        file: PathBuf,

        /// Show the menu again after an action finishes
        #[arg(long)]
        redisplay: bool,
    },

    /// Validate a definition file and print its outline
    Check {
        /// Path to the menu definition (TOML)
        file: PathBuf,
    },

    /// Run a small built-in sample menu
    Demo,
}
