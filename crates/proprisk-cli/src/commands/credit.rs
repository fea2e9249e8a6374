use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use proprisk_core::credit::lease;
use proprisk_core::credit::scoring::{self, FactorOverrides};
use proprisk_core::types::{Industry, LeaseTerms, RiskLevel, TenantProfile};

use crate::input;

/// Arguments for tenant credit scoring
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ScoreTenantArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Tenant identifier
    #[arg(long)]
    pub tenant_id: Option<String>,

    /// Tenant name
    #[arg(long)]
    pub name: Option<String>,

    /// Industry: technology, finance, healthcare, retail, manufacturing,
    /// professional, government, other
    #[arg(long)]
    pub industry: Option<String>,

    /// External bureau credit score
    #[arg(long)]
    pub credit_score: Option<Decimal>,

    /// Most recent annual revenue
    #[arg(long)]
    pub annual_revenue: Option<Decimal>,

    /// Years in business
    #[arg(long)]
    pub years_in_business: Option<Decimal>,

    /// Tenant is publicly listed
    #[arg(long, default_value_t = false)]
    pub public_company: bool,

    /// Payment history factor in [0, 1] (defaults to 0.8)
    #[arg(long)]
    pub payment_history: Option<Decimal>,

    /// Market conditions factor in [0, 1] (defaults to 0.7)
    #[arg(long)]
    pub market_conditions: Option<Decimal>,
}

/// Arguments for single-lease risk calculation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct LeaseRiskArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Tenant identifier
    #[arg(long)]
    pub tenant_id: Option<String>,

    /// Months remaining on the lease
    #[arg(long)]
    pub term_remaining: Option<Decimal>,

    /// Monthly rent
    #[arg(long)]
    pub monthly_rent: Option<Decimal>,

    /// Leased square footage
    #[arg(long)]
    pub square_feet: Option<Decimal>,

    /// Annual escalation rate as a fraction (0.03 = 3%)
    #[arg(long)]
    pub escalation_rate: Option<Decimal>,

    /// Security deposit held
    #[arg(long)]
    pub security_deposit: Option<Decimal>,

    /// Monthly market rent per square foot
    #[arg(long)]
    pub market_rent: Option<Decimal>,

    /// Tenant credit risk level: low, moderate, high, severe
    #[arg(long)]
    pub risk_level: Option<String>,
}

/// JSON input shape for score-tenant.
#[derive(serde::Deserialize)]
struct ScoreTenantInput {
    tenant: TenantProfile,
    #[serde(default)]
    overrides: FactorOverrides,
}

/// JSON input shape for lease-risk.
#[derive(serde::Deserialize)]
struct LeaseRiskInput {
    tenant_id: String,
    lease: LeaseTerms,
    market_rent: Decimal,
    risk_level: RiskLevel,
}

pub fn run_score_tenant(args: ScoreTenantArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let (tenant, overrides) = if let Some(ref path) = args.input {
        let parsed: ScoreTenantInput = input::file::read_json(path)?;
        (parsed.tenant, parsed.overrides)
    } else if let Some(data) = input::stdin::read_stdin()? {
        let parsed: ScoreTenantInput = serde_json::from_value(data)?;
        (parsed.tenant, parsed.overrides)
    } else {
        let tenant = TenantProfile {
            id: args
                .tenant_id
                .ok_or("--tenant-id is required (or provide --input)")?,
            name: args.name.ok_or("--name is required (or provide --input)")?,
            industry: parse_industry(
                &args
                    .industry
                    .ok_or("--industry is required (or provide --input)")?,
            )?,
            credit_score: args.credit_score,
            annual_revenue: args.annual_revenue,
            years_in_business: args
                .years_in_business
                .ok_or("--years-in-business is required (or provide --input)")?,
            public_company: args.public_company,
            parent_company: None,
            employee_count: None,
        };
        let overrides = FactorOverrides {
            payment_history: args.payment_history,
            market_conditions: args.market_conditions,
        };
        (tenant, overrides)
    };

    let result = scoring::score_tenant(&tenant, &overrides)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_lease_risk(args: LeaseRiskArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let parsed: LeaseRiskInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LeaseRiskInput {
            tenant_id: args
                .tenant_id
                .ok_or("--tenant-id is required (or provide --input)")?,
            lease: LeaseTerms {
                term_remaining: args
                    .term_remaining
                    .ok_or("--term-remaining is required (or provide --input)")?,
                monthly_rent: args
                    .monthly_rent
                    .ok_or("--monthly-rent is required (or provide --input)")?,
                square_feet: args
                    .square_feet
                    .ok_or("--square-feet is required (or provide --input)")?,
                escalation_rate: args.escalation_rate.unwrap_or(Decimal::ZERO),
                security_deposit: args.security_deposit.unwrap_or(Decimal::ZERO),
            },
            market_rent: args
                .market_rent
                .ok_or("--market-rent is required (or provide --input)")?,
            risk_level: parse_risk_level(
                &args
                    .risk_level
                    .ok_or("--risk-level is required (or provide --input)")?,
            )?,
        }
    };

    let result = lease::calculate_lease_risk(
        &parsed.tenant_id,
        &parsed.lease,
        parsed.market_rent,
        parsed.risk_level,
    )?;
    Ok(serde_json::to_value(result)?)
}

fn parse_industry(value: &str) -> Result<Industry, String> {
    match value.to_lowercase().as_str() {
        "technology" => Ok(Industry::Technology),
        "finance" => Ok(Industry::Finance),
        "healthcare" => Ok(Industry::Healthcare),
        "retail" => Ok(Industry::Retail),
        "manufacturing" => Ok(Industry::Manufacturing),
        "professional" => Ok(Industry::Professional),
        "government" => Ok(Industry::Government),
        "other" => Ok(Industry::Other),
        other => Err(format!("Unknown industry '{}'", other)),
    }
}

fn parse_risk_level(value: &str) -> Result<RiskLevel, String> {
    match value.to_lowercase().as_str() {
        "low" => Ok(RiskLevel::Low),
        "moderate" => Ok(RiskLevel::Moderate),
        "high" => Ok(RiskLevel::High),
        "severe" => Ok(RiskLevel::Severe),
        other => Err(format!("Unknown risk level '{}'", other)),
    }
}
