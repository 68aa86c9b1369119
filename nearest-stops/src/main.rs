use std::io;
use std::process::ExitCode;

use nearest_stops::config::AppConfig;
use nearest_stops::runner::{StopFinder, run};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries the prompt and stop names
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = AppConfig::from_env();

    let finder = match StopFinder::new(&config) {
        Ok(finder) => finder,
        Err(e) => {
            eprintln!("Failed to create API clients: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&finder, io::stdin().lock(), io::stdout(), config.stop_count).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
