use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{init_command, match_command, scan_command, watch_command};

#[derive(Parser, Debug)]
#[command(name = "uc-loader")]
#[command(version, about, long_about = None)]
#[command(subcommand_required = true, arg_required_else_help = true)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    /// Config file to use instead of the nearest .uc-loader.json
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the scripts found under the configured roots
    #[command(visible_alias = "s")]
    Scan {
        /// Print the scan report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show which scripts would be injected into a document
    #[command(visible_alias = "m")]
    Match {
        /// URL of the target document
        url: String,

        /// Primary document URL (defaults to the configured one)
        #[arg(short, long)]
        primary: Option<String>,

        /// Host version checked against min_host_version
        #[arg(long)]
        host_version: Option<String>,
    },
    /// Write a default configuration file
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(long)]
        cwd: Option<PathBuf>,

        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
    /// Rescan whenever something below the scan roots changes
    #[command(visible_alias = "w")]
    Watch,
}

impl Commands {
    /// Execute the command
    pub fn execute(self, config: Option<PathBuf>) -> Result<()> {
        tracing::debug!("Executing {:?}", self);
        match self {
            Commands::Scan { json } => scan_command(config.as_deref(), json),
            Commands::Match {
                url,
                primary,
                host_version,
            } => match_command(config.as_deref(), &url, primary, host_version),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
            Commands::Watch => watch_command(config.as_deref()),
        }
    }
}
