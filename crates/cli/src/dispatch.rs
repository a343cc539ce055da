//! Command dispatch logic.
//!
//! Responsibilities:
//! - Resolve the configuration from the global `--config`/`--override` options.
//! - Route parsed CLI arguments to the appropriate command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//!
//! Invariants:
//! - Configuration errors keep their `ConfigError` in the anyhow chain so the
//!   exit code can be derived from it.

use anyhow::{Context, Result};
use mlp_config::{ConfigLoader, Configuration};

use crate::args::{Cli, Commands};
use crate::commands;

fn load_configuration(cli: &Cli) -> Result<Configuration> {
    ConfigLoader::new()
        .with_config_path(cli.config_path.clone())
        .with_override_path(cli.override_path.clone())
        .build()
        .with_context(|| {
            format!(
                "Failed to load configuration from {}",
                cli.config_path.display()
            )
        })
}

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let config = load_configuration(&cli)?;
    let output_file = cli.output_file.as_deref();

    match &cli.command {
        Commands::List => commands::list::run(&config, cli.output, output_file),
        Commands::Get { id, source } => {
            commands::get::run(&config, id, *source, cli.output, output_file)
        }
        Commands::Flags { args } => commands::flags::run(&config, args, cli.output, output_file),
    }
}
