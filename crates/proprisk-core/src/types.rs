use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as fractions (0.05 = 5%) unless a field documents
/// otherwise. Market-data series quote rates in percent and spreads in
/// basis points; those fields say so explicitly.
pub type Rate = Decimal;

/// Percentage values (42.5 = 42.5%). Used for concentration shares and
/// market rent deltas.
pub type Percent = Decimal;

/// Lease durations are always months, never years.
pub type Months = Decimal;

/// Tenant industry classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Technology,
    Finance,
    Healthcare,
    Retail,
    Manufacturing,
    Professional,
    Government,
    Other,
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Industry::Technology => "technology",
            Industry::Finance => "finance",
            Industry::Healthcare => "healthcare",
            Industry::Retail => "retail",
            Industry::Manufacturing => "manufacturing",
            Industry::Professional => "professional",
            Industry::Government => "government",
            Industry::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// Tenant credit risk classification, ordered by ascending severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Severe,
}

const THRESHOLD_LOW: Decimal = dec!(80);
const THRESHOLD_MODERATE: Decimal = dec!(65);
const THRESHOLD_HIGH: Decimal = dec!(50);

impl RiskLevel {
    /// Classify a 0-100 credit score. Boundaries are inclusive on the
    /// stronger side: exactly 80 is Low, exactly 65 is Moderate,
    /// exactly 50 is High.
    pub fn from_score(score: Decimal) -> RiskLevel {
        if score >= THRESHOLD_LOW {
            RiskLevel::Low
        } else if score >= THRESHOLD_MODERATE {
            RiskLevel::Moderate
        } else if score >= THRESHOLD_HIGH {
            RiskLevel::High
        } else {
            RiskLevel::Severe
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Moderate => write!(f, "moderate"),
            RiskLevel::High => write!(f, "high"),
            RiskLevel::Severe => write!(f, "severe"),
        }
    }
}

/// A tenant as known to the underwriting desk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantProfile {
    pub id: String,
    pub name: String,
    pub industry: Industry,
    /// External bureau score, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_score: Option<Decimal>,
    /// Most recent annual revenue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_revenue: Option<Money>,
    /// Must be non-negative.
    pub years_in_business: Decimal,
    pub public_company: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_count: Option<u64>,
}

/// The economics of a single lease.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaseTerms {
    /// Months left on the lease. Must be non-negative.
    pub term_remaining: Months,
    /// Must be positive.
    pub monthly_rent: Money,
    /// Must be positive.
    pub square_feet: Decimal,
    /// Annual escalation as a fraction (0.03 = 3%).
    pub escalation_rate: Rate,
    pub security_deposit: Money,
}

/// Market conditions relevant to one tenant's lease.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketContext {
    /// Monthly market rent per square foot.
    pub market_rent: Money,
    /// Annual growth of the tenant's industry, as a fraction.
    pub industry_growth: Rate,
    /// Tenant's share of its market, as a fraction.
    pub market_share: Rate,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
