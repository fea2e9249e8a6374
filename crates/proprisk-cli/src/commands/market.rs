use clap::Args;
use serde_json::Value;

use proprisk_core::market::rates::RateEnvironment;
use proprisk_core::market::risk;

use crate::input;

/// Arguments for market risk assessment
#[derive(Args)]
pub struct MarketRiskArgs {
    /// Path to JSON input file with the rate environment
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_market_risk(args: MarketRiskArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let environment: RateEnvironment = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input file is required for market risk assessment (or pipe JSON)".into());
    };

    let result = risk::assess_market_risk(&environment)?;
    Ok(serde_json::to_value(result)?)
}
