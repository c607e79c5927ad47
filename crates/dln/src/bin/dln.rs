//! `dln` command: generate, validate, and decode driving licence numbers.
//!
//! Parsing and command logic live in `dln::cli`; this binary installs
//! logging, loads configuration, and maps the outcome to an exit code.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use dln::DlnSettings;
use dln::cli::{Cli, CliError, Report, run};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match execute(&cli) {
        Ok(report) => {
            write_line(io::stdout().lock(), &report.message);
            if report.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            write_line(io::stderr().lock(), &err.to_string());
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<Report, CliError> {
    // Flags are parsed by clap above; settings come from the environment and
    // configuration files only.
    let settings =
        DlnSettings::load_from_iter([OsString::from("dln")]).map_err(|e| CliError::Settings {
            message: e.to_string(),
        })?;
    init_tracing(settings.json_logs);
    run(&cli.command, &settings)
}

fn init_tracing(json: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

fn write_line(mut out: impl Write, message: &str) {
    if let Err(err) = writeln!(out, "{message}") {
        drop(err);
    }
}
