//! weekgrid CLI - Planner Spreadsheet Generator
//!
//! Command-line interface for generating time-gridded planner spreadsheets.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use weekgrid_core::PlannerConfig;
use weekgrid_render::ExcelRenderer;

#[derive(Parser)]
#[command(name = "weekgrid")]
#[command(author, version, about = "Time-gridded planner spreadsheet generator", long_about = None)]
struct Cli {
    /// First day of the planner (YYYY-MM-DD)
    #[arg(value_name = "START_DATE", value_parser = parse_start_date)]
    start_date: NaiveDate,

    /// Number of day columns
    #[arg(value_name = "NUM_DAYS", value_parser = clap::value_parser!(u32).range(1..))]
    num_days: u32,

    /// Destination file
    #[arg(short, long, default_value = "Planner.xlsx")]
    output: PathBuf,

    /// First hour of the time grid
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u8).range(0..=23))]
    start_hour: u8,

    /// Last hour of the time grid, inclusive
    #[arg(long, default_value_t = 23, value_parser = clap::value_parser!(u8).range(0..=23))]
    end_hour: u8,

    /// Number of free-text note rows under the headers
    #[arg(long, default_value_t = 1)]
    notes: u32,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_start_date(arg: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(arg, "%Y-%m-%d")
        .map_err(|e| format!("'{arg}' is not a valid date ({e}); expected YYYY-MM-DD"))
}

fn init_tracing(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = PlannerConfig::new(cli.start_date, cli.num_days)
        .start_hour(cli.start_hour)
        .end_hour(cli.end_hour)
        .note_rows(cli.notes);

    let grid = weekgrid_core::plan(&config)?;
    tracing::debug!(
        columns = grid.total_columns(),
        rows = grid.total_rows(),
        "planned grid"
    );

    let renderer = ExcelRenderer::new();
    renderer
        .write_to_path(&config, &grid, &cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    println!("Planner created: {}", cli.output.display());
    Ok(())
}
