pub mod format;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "commitrc", version, about = "Conventional-commit lint configuration")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the resolved configuration record.
    Show {
        /// Project root to search for a config file.
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Explicit config file path, bypassing discovery.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },

    /// Load the config and report whether it is well-formed.
    Check {
        /// Project root to search for a config file.
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Explicit config file path, bypassing discovery.
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Write the canonical conventional-commit config to a project root.
    Init {
        /// Project root to write into.
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Overwrite an existing config file.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Json,
}
