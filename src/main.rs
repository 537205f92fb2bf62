//! spend-report - summarize a credit card statement export
//!
//! Usage:
//!   spend-report Activity.csv                        Spend per category
//!   spend-report Activity.csv -k monthly             Spend per posting month
//!   spend-report Activity.csv -k monthly_categorical Category tables per month
//!   spend-report - -f json < Activity.csv            JSON from stdin

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use spend_report::{filter_payments, generate_report, render, ParserBuilder, ReportKind};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Parses STATEMENT_FILE and prints the selected kind of spend report
#[derive(Parser, Debug)]
#[command(name = "spend-report", version, about)]
struct Cli {
    /// Statement export (CSV), or `-` for stdin
    #[arg(value_name = "STATEMENT_FILE")]
    statement_file: PathBuf,

    /// The kind of report to generate: categorical, monthly or monthly_categorical
    #[arg(short, long, default_value_t = ReportKind::Categorical)]
    kind: ReportKind,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false).compact())
        .init();
}

fn load(path: &Path) -> Result<Vec<spend_report::Transaction>> {
    let builder = if path.as_os_str() == "-" {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read statement from stdin")?;
        ParserBuilder::new().content(&content)
    } else {
        let name = path.to_string_lossy();
        ParserBuilder::new().filename(&name)
    };

    builder
        .parse()
        .with_context(|| format!("Failed to load statement {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let transactions = load(&cli.statement_file)?;
    let total = transactions.len();

    let spend = filter_payments(transactions);
    info!(rows = total, spend = spend.len(), kind = %cli.kind, "generating report");

    let report = generate_report(cli.kind, &spend)
        .with_context(|| format!("Failed to build {} report", cli.kind))?;
    if report.is_empty() {
        debug!("no spend rows in statement");
    }

    let output = match cli.format {
        OutputFormat::Table => render::render_report(&report),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        }
    };
    println!("{output}");

    Ok(())
}
