use clap::Args;
use serde_json::Value;

use proprisk_core::credit::analysis::{self, PropertyAnalysisInput};

use crate::input;

/// Arguments for full property credit analysis
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Path to JSON input file with the property, tenants, and market rents
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_analyze(args: AnalyzeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let parsed: PropertyAnalysisInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input file is required for property analysis (or pipe JSON)".into());
    };

    let result = analysis::analyze_property(&parsed)?;
    Ok(serde_json::to_value(result)?)
}
