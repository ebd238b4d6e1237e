mod view;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::Parser;
use mikomi_core::{
    build_forecast_view, derive_aggregation_months, FileForecastRepository,
    ForecastRecordRepository,
};

#[derive(Parser)]
#[command(name = "mikomi")]
#[command(about = "Forecast calendar and time-bucket roll-ups", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show the forecast view for a record file (usage: show records.json --month 2025-06)
    Show {
        /// Path to a JSON array of {date, quantity, unit} records
        file: PathBuf,
        /// Target month as YYYY-MM; defaults to the first record's month
        #[arg(long)]
        month: Option<String>,
        /// Print the computed view as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Print the roll-up months derived from a target month (usage: months 2025-06)
    Months {
        /// Target month as YYYY-MM
        month: String,
    },
}

fn parse_month_arg(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", input.trim()), "%Y-%m-%d")
        .map_err(|_| anyhow!("Invalid month '{}': expected YYYY-MM", input))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show { file, month, json } => {
            let repo = FileForecastRepository::new(file)?;
            let records = repo.list()?;
            let anchor = month.as_deref().map(parse_month_arg).transpose()?;
            let forecast = build_forecast_view(&records, anchor);

            if json {
                println!("{}", serde_json::to_string_pretty(&forecast)?);
            } else {
                view::print_view(&forecast);
            }
        }
        Commands::Months { month } => {
            let start = parse_month_arg(&month)?;
            let (dekad, monthly) = derive_aggregation_months(start);
            println!("旬別: {}年{}月", dekad.year, dekad.month_number());
            println!("月別: {}年{}月", monthly.year, monthly.month_number());
        }
    }

    Ok(())
}
