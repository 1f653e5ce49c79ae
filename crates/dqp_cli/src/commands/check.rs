use anyhow::{Context, Result};
use dqp_core::TracingReporter;
use dqp_engine::Pipeline;
use dqp_extract::CsvExtractor;
use tracing::info;

use crate::{config, output};

pub struct CheckArgs {
    pub input: String,
    pub config: Option<String>,
    pub date_format: Option<String>,
    pub enforce_abort: bool,
    pub delimiter: Option<char>,
    pub format: String,
}

pub fn execute(args: CheckArgs) -> Result<()> {
    info!("Checking data quality of: {}", args.input);

    let resolved = config::resolve(
        args.config.as_deref(),
        None,
        args.date_format,
        args.enforce_abort,
        args.delimiter,
    )?;

    let extractor = CsvExtractor::new(&args.input).with_delimiter(resolved.delimiter);
    let pipeline = Pipeline::standard(resolved.options);

    let report = pipeline
        .audit(&extractor, &TracingReporter::new())
        .with_context(|| format!("quality check failed for {}", args.input))?;

    output::print_run_report(&report, &args.format);
    output::print_info("Check only: nothing was loaded");

    Ok(())
}
