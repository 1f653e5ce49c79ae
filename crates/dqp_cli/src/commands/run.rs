use anyhow::{Context, Result};
use dqp_core::TracingReporter;
use dqp_engine::Pipeline;
use dqp_extract::CsvExtractor;
use dqp_store::SqliteLoader;
use tracing::info;

use crate::{config, output};

pub struct RunArgs {
    pub input: String,
    pub db: String,
    pub table: Option<String>,
    pub config: Option<String>,
    pub date_format: Option<String>,
    pub enforce_abort: bool,
    pub delimiter: Option<char>,
    pub format: String,
}

pub fn execute(args: RunArgs) -> Result<()> {
    info!("Running pipeline on: {}", args.input);
    info!("Loading into: {}", args.db);

    let resolved = config::resolve(
        args.config.as_deref(),
        args.table,
        args.date_format,
        args.enforce_abort,
        args.delimiter,
    )?;

    let extractor = CsvExtractor::new(&args.input).with_delimiter(resolved.delimiter);
    let loader = SqliteLoader::new(&args.db);
    let pipeline = Pipeline::standard(resolved.options);

    let report = pipeline
        .run(&extractor, &loader, &TracingReporter::new())
        .with_context(|| format!("pipeline run failed for {}", args.input))?;

    output::print_run_report(&report, &args.format);
    output::print_success(&format!(
        "Loaded {} clean row(s) into '{}'",
        report.rows_loaded, report.table
    ));

    Ok(())
}
