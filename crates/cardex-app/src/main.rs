use std::process::ExitCode;

use cardex_app::cli::{Cli, Command, run_digits, run_export};
use cardex_app::error::AppError;
use cardex_core::config::load_config;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

/// Exit status for notices such as an empty sheet, as opposed to failures.
const NOTICE_EXIT: u8 = 2;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let outcome = match &cli.command {
        Command::Export(args) => run_export(args, &config),
        Command::Digits(args) => run_digits(args).map(|notice| vec![notice]),
    };

    match outcome {
        Ok(notices) => {
            for notice in notices {
                println!("{notice}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(AppError::ServiceError(notice)) => {
            eprintln!("{notice}");
            Ok(ExitCode::from(NOTICE_EXIT))
        }
        Err(e) => Err(e.into()),
    }
}
