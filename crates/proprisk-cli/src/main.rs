mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::analysis::AnalyzeArgs;
use commands::credit::{LeaseRiskArgs, ScoreTenantArgs};
use commands::market::MarketRiskArgs;

/// Tenant credit-risk analytics for commercial real estate
#[derive(Parser)]
#[command(
    name = "proprisk",
    version,
    about = "Tenant credit-risk analytics for commercial real estate",
    long_about = "A CLI for commercial real estate credit analytics with decimal \
                  precision. Scores tenant credit risk, derives lease default \
                  probabilities, measures tenant concentration, and runs full \
                  property-level credit analyses."
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
    /// Assess market risk from a rate environment (SOFR + spreads)
    MarketRisk(MarketRiskArgs),
    /// Score a single tenant's credit risk
    ScoreTenant(ScoreTenantArgs),
    /// Calculate default risk for a single lease
    LeaseRisk(LeaseRiskArgs),
    /// Run a full property-level credit analysis
    Analyze(AnalyzeArgs),
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
        Commands::MarketRisk(args) => commands::market::run_market_risk(args),
        Commands::ScoreTenant(args) => commands::credit::run_score_tenant(args),
        Commands::LeaseRisk(args) => commands::credit::run_lease_risk(args),
        Commands::Analyze(args) => commands::analysis::run_analyze(args),
        Commands::Version => {
            println!("proprisk {}", env!("CARGO_PKG_VERSION"));
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
