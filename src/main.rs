//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `check_https` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the plugin report and exiting with its code
//!
//! All check logic is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;

use check_https::config::input_error_message;
use check_https::initialization::{init_crypto_provider, init_logger_with};
use check_https::{run_pipeline, CheckConfig, Opt, ServiceState};

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            println!("UNKNOWN — check_https error: {e:#}");
            ServiceState::Unknown.exit_code()
        }
    };
    process::exit(code);
}

fn run() -> Result<i32> {
    // Usage errors are UNKNOWN, not clap's default exit code 2
    let opt = match Opt::try_parse() {
        Ok(opt) => opt,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            return Ok(ServiceState::Unknown.exit_code());
        }
    };

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    // Initialize crypto provider for TLS operations
    init_crypto_provider();

    // Validate input before any network activity
    let config = match CheckConfig::from_opt(&opt) {
        Ok(config) => config,
        Err(e) => {
            println!("{}", input_error_message(&e));
            return Ok(ServiceState::Unknown.exit_code());
        }
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let report = runtime.block_on(run_pipeline(&config));
    print!("{}", report.render());
    Ok(report.exit_code())
}
