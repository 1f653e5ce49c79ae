//! TOML config file loading and option resolution.
//!
//! Precedence: command-line flags, then the config file, then defaults.

use anyhow::{Context, Result, bail};
use dqp_core::PipelineOptions;
use serde::Deserialize;
use std::path::Path;

/// Pipeline settings read from a TOML file.
///
/// ```toml
/// table = "daily_activity"
/// date-format = "%Y-%m-%d"
/// enforce-abort = false
/// delimiter = ","
/// ```
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    /// Destination table name
    pub table: Option<String>,
    /// Date grammar for the Date column
    pub date_format: Option<String>,
    /// Whether abort-severity violations terminate the run
    pub enforce_abort: Option<bool>,
    /// Field delimiter
    pub delimiter: Option<char>,
}

impl FileConfig {
    /// Parses a config from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid config file")
    }

    /// Loads a config file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }
}

/// Settings shared by the run and check subcommands after resolution.
#[derive(Debug)]
pub struct Resolved {
    /// Resolved pipeline options
    pub options: PipelineOptions,
    /// Resolved field delimiter
    pub delimiter: u8,
}

/// Resolves flags against an optional config file.
pub fn resolve(
    config_path: Option<&str>,
    table: Option<String>,
    date_format: Option<String>,
    enforce_abort: bool,
    delimiter: Option<char>,
) -> Result<Resolved> {
    let file = match config_path {
        Some(path) => FileConfig::load(Path::new(path))?,
        None => FileConfig::default(),
    };

    let mut options = PipelineOptions::default();
    if let Some(table) = table.or(file.table) {
        options = options.with_table(table);
    }
    if let Some(format) = date_format.or(file.date_format) {
        options = options.with_date_format(format);
    }
    options = options.with_enforce_abort(enforce_abort || file.enforce_abort.unwrap_or(false));

    let delimiter = match delimiter.or(file.delimiter) {
        Some(c) if c.is_ascii() => c as u8,
        Some(c) => bail!("delimiter must be an ASCII character, got '{c}'"),
        None => b',',
    };

    Ok(Resolved { options, delimiter })
}
