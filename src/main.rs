use clap::Parser;
use std::process::ExitCode;
use tortoisegit_commands::{app, cli::CliArgs};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli_args = CliArgs::parse();

    // RUST_LOG wins; otherwise stay quiet unless --verbose
    let default_level = if cli_args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout();
    match app::run(cli_args, &mut stdout) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            error!("Application error: {:#}", err);
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
