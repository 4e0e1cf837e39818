mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::dataset::ValuesArgs;
use commands::panel::{PanelArgs, SummaryArgs};
use commands::tables::{ComparisonArgs, RankArgs, ShareArgs, TrendArgs};

/// Institutional revenue dashboard aggregations
#[derive(Parser)]
#[command(
    name = "rvp",
    version,
    about = "Institutional revenue dashboard aggregations",
    long_about = "Filters institutional revenue records by fiscal year, period, \
                  institution, and revenue category, then computes the dashboard's \
                  summary cards and chart tables with decimal precision."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the full panel: summary cards plus all four chart tables
    Panel(PanelArgs),
    /// Summary cards only (focal total, comparison mean, participation)
    Summary(SummaryArgs),
    /// Ranking table: institutions by total revenue, highest first
    Rank(RankArgs),
    /// Trend table: revenue per period and institution
    Trend(TrendArgs),
    /// Share table: per-institution totals for the donut chart
    Share(ShareArgs),
    /// Comparison table: revenue per category and institution
    Comparison(ComparisonArgs),
    /// List the distinct values of a record field (filter option lists)
    Values(ValuesArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Panel(args) => commands::panel::run_panel(args),
        Commands::Summary(args) => commands::panel::run_summary(args),
        Commands::Rank(args) => commands::tables::run_rank(args),
        Commands::Trend(args) => commands::tables::run_trend(args),
        Commands::Share(args) => commands::tables::run_share(args),
        Commands::Comparison(args) => commands::tables::run_comparison(args),
        Commands::Values(args) => commands::dataset::run_values(args),
        Commands::Version => {
            println!("rvp {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
