//! Gym membership purchase binary
//!
//! Runs the interactive membership shell on stdin/stdout. Logs go to stderr.

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use gym_membership::adapters::{CatalogLoadError, ConsolePrompt, YamlCatalogLoader};
use gym_membership::application::{
    ConfirmMembershipHandler, MembershipShell, QuoteMembershipHandler, ShellOutcome,
};
use gym_membership::config::{AppConfig, CatalogConfig, LogFormat, LoggingConfig};
use gym_membership::domain::membership::Catalog;

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = config.validate() {
        eprintln!("Invalid configuration: {}", err);
        return ExitCode::FAILURE;
    }

    init_tracing(&config.logging);

    let catalog = match load_catalog(&config.catalog) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("Failed to load catalog: {}", err);
            return ExitCode::FAILURE;
        }
    };
    info!(
        plans = catalog.plans().len(),
        features = catalog.features().len(),
        "Catalog ready"
    );

    let mut shell = MembershipShell::new(
        ConsolePrompt::stdio(),
        QuoteMembershipHandler::new(Arc::new(catalog)),
        ConfirmMembershipHandler::new(),
    );

    let outcome = match shell.run() {
        Ok(outcome) => outcome,
        Err(err) => {
            error!("Prompt failed: {}", err);
            return ExitCode::FAILURE;
        }
    };
    info!(code = outcome.legacy_code(), "Shell finished");

    match outcome {
        ShellOutcome::Confirmed(purchase) => {
            if config.shell.print_receipt_json {
                match serde_json::to_string(&purchase) {
                    Ok(json) => println!("{}", json),
                    Err(err) => error!("Failed to serialize receipt: {}", err),
                }
            }
            ExitCode::SUCCESS
        }
        ShellOutcome::Cancelled => ExitCode::SUCCESS,
        ShellOutcome::Aborted(_) => ExitCode::FAILURE,
    }
}

fn load_catalog(config: &CatalogConfig) -> Result<Catalog, CatalogLoadError> {
    match &config.path {
        Some(path) => YamlCatalogLoader::load(path),
        None => Ok(Catalog::standard().clone()),
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
