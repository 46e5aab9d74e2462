mod assembly;
mod cli;
mod commands;
mod error;
mod logging;
mod report;
mod settings;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::{Cli, Command};
use crate::error::AppError;
use crate::settings::Settings;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = Settings::load();
    logging::init_logging(
        settings.debug_logging || cli.verbose,
        settings.max_log_size_bytes,
    );

    match run(cli, &settings).await {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("runway: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, settings: &Settings) -> Result<String, AppError> {
    let registry = runway_provider::default_registry();
    let shims_dir = cli.shims_dir.or_else(|| settings.resolved_shims_dir());
    let registered = assembly::register_builtin(registry, settings, shims_dir)?;
    log::debug!("Registered {registered} providers");

    match cli.command {
        Command::Providers { runtime } => {
            Ok(commands::providers_table(registry, runtime.as_deref()))
        }
        Command::Detect { runtime, json } => {
            commands::detect(registry, runtime.as_deref(), json).await
        }
        Command::UninstallHint { provider, version } => {
            commands::uninstall_hint(registry, &provider, &version)
        }
    }
}
