//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not parse mirrored parameter flags (see `commands::flags`).

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mlp_config::constants::{DEFAULT_CONFIG_FILE, DEFAULT_OVERRIDE_FILE};

use crate::formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "mlp-conf")]
#[command(about = "Inspect layered project configuration and where each value came from", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  mlp-conf list\n  mlp-conf -o json list\n  mlp-conf get train.epochs --source\n  MLP_TRAIN_EPOCHS=5 mlp-conf list\n  mlp-conf flags --train_epochs 20 --train_lr 0.01\n"
)]
pub struct Cli {
    /// Base configuration file
    #[arg(
        long = "config",
        global = true,
        env = "MLPCONF_CONFIG",
        value_name = "FILE",
        default_value = DEFAULT_CONFIG_FILE
    )]
    pub config_path: PathBuf,

    /// Override configuration file (ignored if it does not exist)
    #[arg(
        long = "override",
        global = true,
        env = "MLPCONF_OVERRIDE",
        value_name = "FILE",
        default_value = DEFAULT_OVERRIDE_FILE
    )]
    pub override_path: PathBuf,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Output file path (saves results to file instead of stdout)
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every resolved parameter with its source
    List,

    /// Print one parameter, addressed as `section.key`
    Get {
        /// Parameter id (e.g. `train.epochs`)
        id: String,

        /// Append the layer that supplied the value
        #[arg(long)]
        source: bool,
    },

    /// Parse `--<section>_<key>` flags against the resolved configuration
    ///
    /// Every parameter becomes a long flag whose default is the resolved value
    /// and whose type follows that value. Pass `--help` after `flags` to list them.
    #[command(disable_help_flag = true)]
    Flags {
        /// Flags to parse (e.g. `--train_epochs 20`)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
        args: Vec<String>,
    },
}
