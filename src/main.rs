use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::prelude::*;

use riffs_console::cli::{self, Cli};
use riffs_console::notifications::{self, ConsoleNotifier};
use riffs_console::state::AppState;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Cli::parse();
    let app_state = AppState::new()?;
    let toasts = notifications::start(app_state.client.subscribe(), ConsoleNotifier);

    let result = cli::run(args.command, &app_state.client).await;
    // closes the failure channel so every toast is shown before exiting
    drop(app_state);
    toasts.await?;

    match result {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) if err.is_notified() => Ok(ExitCode::FAILURE),
        Err(err) => Err(err.into()),
    }
}
