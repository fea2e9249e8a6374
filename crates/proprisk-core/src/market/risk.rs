//! Market risk assessor.
//!
//! Combines SOFR volatility, spread trend, and the absolute rate level into a
//! bounded [0, 1] score with a qualitative factor list.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::CreditRiskError;
use crate::market::rates::RateEnvironment;
use crate::stats::{self, TrendDirection};
use crate::CreditRiskResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Coarse market risk classification. Distinct from the tenant-level
/// `RiskLevel`: this one is a three-way bucket over a [0, 1] score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketRiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for MarketRiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarketRiskLevel::Low => write!(f, "low"),
            MarketRiskLevel::Medium => write!(f, "medium"),
            MarketRiskLevel::High => write!(f, "high"),
        }
    }
}

/// Result of a market risk assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketRisk {
    pub risk_level: MarketRiskLevel,
    pub factors: Vec<String>,
    /// Bounded [0, 1].
    pub score: Decimal,
    /// Derived from the SOFR series depth and volatility.
    pub confidence: Decimal,
}

// Factor trigger thresholds.
const SOFR_VOLATILITY_TRIGGER: Decimal = dec!(0.25);
const SPREAD_VOLATILITY_TRIGGER: Decimal = dec!(0.2);
const HIGH_BASE_RATE_TRIGGER: Decimal = dec!(5);

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Assess market risk from a rate environment.
///
/// Requires at least one SOFR observation and one spread observation;
/// empty series are rejected rather than silently scored.
pub fn assess_market_risk(environment: &RateEnvironment) -> CreditRiskResult<MarketRisk> {
    if environment.sofr_rates.is_empty() {
        return Err(CreditRiskError::InsufficientData(
            "At least one SOFR observation is required.".into(),
        ));
    }
    if environment.market_spreads.is_empty() {
        return Err(CreditRiskError::InsufficientData(
            "At least one market spread observation is required.".into(),
        ));
    }

    let sofr_values: Vec<Decimal> = environment.sofr_rates.iter().map(|r| r.rate).collect();
    let spread_values: Vec<Decimal> = environment
        .market_spreads
        .iter()
        .map(|s| s.spread_bps)
        .collect();

    let sofr_volatility = stats::volatility(&sofr_values)?;
    let spread_volatility = stats::volatility(&spread_values)?;
    let spread_trend = stats::trend_direction(&spread_values);

    let mut factors = Vec::new();
    let mut score = Decimal::ZERO;

    if sofr_volatility > SOFR_VOLATILITY_TRIGGER {
        factors.push("High SOFR rate volatility".to_string());
        score += dec!(0.33);
    }

    if spread_trend == TrendDirection::Increasing && spread_volatility > SPREAD_VOLATILITY_TRIGGER {
        factors.push("Increasing spread environment".to_string());
        score += dec!(0.33);
    }

    // Non-empty series, so last() always yields an observation.
    if let Some(latest) = environment.sofr_rates.last() {
        if latest.rate > HIGH_BASE_RATE_TRIGGER {
            factors.push("High base rate environment".to_string());
            score += dec!(0.34);
        }
    }

    let risk_level = classify_market_score(score);
    let confidence = stats::series_confidence(sofr_volatility, sofr_values.len());

    Ok(MarketRisk {
        risk_level,
        factors,
        score,
        confidence,
    })
}

fn classify_market_score(score: Decimal) -> MarketRiskLevel {
    if score < dec!(0.33) {
        MarketRiskLevel::Low
    } else if score < dec!(0.66) {
        MarketRiskLevel::Medium
    } else {
        MarketRiskLevel::High
    }
}
