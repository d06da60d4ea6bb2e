//! Command-line interface definition.
//!
//! Lives in the library so the xtask can generate the man page from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::colorize::BackgroundPalette;
use crate::render::Format;

#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "-",
    env!("VERGEN_GIT_SHA"),
    " (",
    env!("LOGTINT_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("LOGTINT_BUILD_DATE"),
    ")"
);

/// Colorize build logs containing ANSI escape sequences
#[derive(Debug, Parser)]
#[command(name = "logtint", version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render one or more logs
    Render(RenderArgs),

    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Log files to render; `-` reads standard input
    #[arg(default_value = "-")]
    pub files: Vec<String>,

    /// Output format (defaults to the config file setting)
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Write output to this file instead of stdout
    #[arg(short, long, conflicts_with = "out_dir")]
    pub output: Option<PathBuf>,

    /// Render each log to <out-dir>/<name>.<ext>, in parallel
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Palette offset for background colors 40-49
    #[arg(long, value_enum)]
    pub bg_palette: Option<BackgroundPalette>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
