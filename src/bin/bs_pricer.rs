//! bs-pricer CLI
//!
//! ```bash
//! # spot $100, strike $100, 365 days, 20% vol, 5% rate
//! bs-pricer 100 100 365 20 5
//! ```

use bs_pricer::cli::{self, Cli};
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn main() -> ExitCode {
    let parsed = Cli::try_parse();
    init_logging(parsed.as_ref().map(|c| c.verbose).unwrap_or(false));

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let code = cli::run(parsed, &mut stdout.lock(), &mut stderr.lock());
    ExitCode::from(code)
}
