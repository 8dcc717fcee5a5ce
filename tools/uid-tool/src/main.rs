//! uid-tool: unique ID and gateway topic inspection

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use tenancy_telemetry::{init_logging, TelemetryConfig};
use uid_tool::{run, Cli};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let _guard = init_logging(&TelemetryConfig::for_service("uid-tool"))
        .context("Failed to initialize logging")?;

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{e}");
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}
