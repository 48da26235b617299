use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use hidl_method::cli::Cli;
use hidl_method::driver;

/// Log filter variable, e.g. `HIDL_LOG=hidl_method=trace`
const LOG_ENV: &str = "HIDL_LOG";

fn init_tracing(verbose: bool) {
    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) if verbose => EnvFilter::new("debug"),
        Err(_) => EnvFilter::new("warn"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(name) = cli.name.as_deref() {
        tracing::debug!(method = name, "rendering method");
    }

    match driver::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
