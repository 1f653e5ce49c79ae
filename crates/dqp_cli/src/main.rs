mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dqp")]
#[command(version, about = "Data Quality Pipeline CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: extract, evaluate, reconcile, load
    Run {
        /// Path to the input CSV file
        input: String,

        /// Path to the SQLite database to load into
        #[arg(long, default_value = "dqp.db")]
        db: String,

        /// Destination table name (defaults to the input file stem)
        #[arg(short, long)]
        table: Option<String>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<String>,

        /// Date grammar the Date column must parse under
        #[arg(long)]
        date_format: Option<String>,

        /// Abort the run when abort-severity violations are found
        #[arg(long)]
        enforce_abort: bool,

        /// Field delimiter
        #[arg(long)]
        delimiter: Option<char>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Evaluate and reconcile without loading anything
    Check {
        /// Path to the input CSV file
        input: String,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<String>,

        /// Date grammar the Date column must parse under
        #[arg(long)]
        date_format: Option<String>,

        /// Abort the run when abort-severity violations are found
        #[arg(long)]
        enforce_abort: bool,

        /// Field delimiter
        #[arg(long)]
        delimiter: Option<char>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Run {
            input,
            db,
            table,
            config,
            date_format,
            enforce_abort,
            delimiter,
            format,
        } => commands::run::execute(commands::run::RunArgs {
            input,
            db,
            table,
            config,
            date_format,
            enforce_abort,
            delimiter,
            format,
        }),

        Commands::Check {
            input,
            config,
            date_format,
            enforce_abort,
            delimiter,
            format,
        } => commands::check::execute(commands::check::CheckArgs {
            input,
            config,
            date_format,
            enforce_abort,
            delimiter,
            format,
        }),
    }
}
