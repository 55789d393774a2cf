use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;

use c4_dsl_validator::config::{Args, Config, OutputFormat};
use c4_dsl_validator::{Report, Validator};

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => return usage_error(err),
    };

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

/// Usage problems go to stdout with status 1; help and version exit cleanly
fn usage_error(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        _ => {
            // The rendered error carries the usage line
            print!("{}", err.render());
            ExitCode::from(1)
        }
    }
}

/// Validate the configured file, print its report and return the exit status
fn run(args: Args) -> Result<ExitCode> {
    let config = Config::from_args(args)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    log::info!("Validating {}", config.file.display());

    let validator = Validator::new(config.options);
    let result = validator.validate_file(&config.file);
    let report = Report::new(&config.file, &result);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.format {
        OutputFormat::Text => report
            .write_text(&mut out)
            .context("Failed to write report")?,
        OutputFormat::Json => {
            let json = report.to_json().context("Failed to serialize report")?;
            writeln!(out, "{}", json).context("Failed to write report")?;
        }
    }
    out.flush().context("Failed to flush report")?;

    Ok(report.exit_code())
}
