use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "bedside", version, about = "Bedside nursing risk scores")]
pub struct Cli {
    /// Config file location
    #[arg(long, global = true, env = "BEDSIDE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score an observation form and show every scale
    Evaluate {
        /// JSON observation form, or `-` for stdin
        #[arg(short, long, default_value = "-")]
        input: String,

        /// Append the result to the record store
        #[arg(long)]
        save: bool,

        /// text, html or json (defaults to the configured format)
        #[arg(short, long)]
        format: Option<String>,

        /// Acknowledge a raised alert on behalf of this person
        #[arg(long)]
        ack: Option<String>,

        /// Record store path (overrides config)
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// Score an observation form on a single scale
    Score {
        /// Scale id, e.g. `news` (see `bedside scales`)
        scale: String,

        /// JSON observation form, or `-` for stdin
        #[arg(short, long, default_value = "-")]
        input: String,
    },

    /// List the available scales and their risk thresholds
    Scales,

    /// Print a filled-in observation form to start from
    Template,

    /// Write every stored record as CSV
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Record store path (overrides config)
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// One line per stored record
    List {
        /// Record store path (overrides config)
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective config
    Show,
    /// Print the config file location
    Path,
}
