//! Configuration management for the validator.
//!
//! Handles:
//! - Command-line argument parsing
//! - Resolving arguments into validation options

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};

use crate::validation::{SectionMode, ValidationOptions};

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Command-line arguments for the validator
#[derive(Debug, Parser)]
#[command(name = "c4-validate")]
#[command(about = "Validate C4 architecture model DSL files")]
#[command(version)]
pub struct Args {
    /// DSL file to validate
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Track brace depth so nested blocks do not end the model/views section
    #[arg(long)]
    pub nested_sections: bool,

    /// Report undefined relationship endpoints and unconnected elements at end of file
    #[arg(long)]
    pub cross_references: bool,

    /// Log level, overridden by RUST_LOG when set
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (off, error, warn, info, debug, trace)"
    )]
    pub log_level: String,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub file: PathBuf,
    pub format: OutputFormat,
    pub options: ValidationOptions,
    pub log_level: String,
}

impl Config {
    /// Create configuration from parsed arguments
    pub fn from_args(args: Args) -> Result<Self> {
        let log_level = args.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&log_level.as_str()) {
            bail!(
                "Unknown log level '{}', expected one of: {}",
                args.log_level,
                LOG_LEVELS.join(", ")
            );
        }

        let section_mode = if args.nested_sections {
            SectionMode::Nested
        } else {
            SectionMode::Flat
        };

        Ok(Config {
            file: args.file,
            format: args.format,
            options: ValidationOptions {
                section_mode,
                cross_references: args.cross_references,
            },
            log_level,
        })
    }
}
