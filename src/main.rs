// file: src/main.rs
// version: 2.0.0
// guid: h8i9j0k1-l2m3-4567-8901-234567hijklm

//! Remote Switch - Main entry point

use clap::Parser;
use remote_switch::{
    cli::{run, Cli},
    error::{EXIT_INTERRUPTED, EXIT_SUCCESS, EXIT_USAGE},
    logging::logger,
};
use tokio::signal;
use tracing::warn;

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(EXIT_USAGE);
        }
        // --help and --version
        Err(e) => e.exit(),
    };

    if let Err(e) = logger::init_logger(cli.verbose, cli.quiet) {
        eprintln!("error: {}", e);
        std::process::exit(EXIT_USAGE);
    }

    let shutdown_signal = async {
        match signal::ctrl_c().await {
            Ok(()) => warn!("Received Ctrl+C, abandoning the call"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    let code = tokio::select! {
        result = run(&cli) => match result {
            Ok(output) => {
                println!("{}", output);
                EXIT_SUCCESS
            }
            Err(e) => {
                eprintln!("error [{}]: {}", e.kind(), e);
                e.exit_code()
            }
        },
        _ = shutdown_signal => EXIT_INTERRUPTED,
    };

    std::process::exit(code);
}
