use std::io;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use storefront::{Cli, CliError, Config, exit_status, run_listing};
use storefront_core::{Liveness, LoadOutcome};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn run(config: Config) -> Result<LoadOutcome, CliError> {
    let catalog = config.catalog()?;

    let liveness = Liveness::new();
    let teardown = liveness.clone();
    // A request already in flight is not cancelled; its result is discarded
    // by the lifecycle, so the process leaves without waiting for it.
    ctrlc::set_handler(move || {
        teardown.unmount();
        std::process::exit(i32::from(exit_status(LoadOutcome::Discarded)));
    })?;

    let mut stdout = io::stdout();
    run_listing(&config, &catalog, &liveness, &mut stdout).await
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with the rendered listing.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront=info,storefront_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = match Config::from_cli(Cli::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            return ExitCode::from(2);
        }
    };
    if !config.color {
        colored::control::set_override(false);
    }

    match run(config).await {
        Ok(outcome) => ExitCode::from(exit_status(outcome)),
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}
