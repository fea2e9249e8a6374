//! Tenant credit scoring.
//!
//! Covers:
//! 1. **Factor derivation** -- map a tenant profile to six [0, 1] sub-scores.
//! 2. **Weighted base score** -- weighted sum of factors, scaled to [0, 100].
//! 3. **Market adjustment** -- swing the base score ±10% around neutral
//!    market conditions.
//! 4. **Risk level** -- fixed-threshold classification of the adjusted score.
//!
//! All arithmetic uses `rust_decimal::Decimal`. No `f64`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::CreditRiskError;
use crate::types::{Industry, RiskLevel, TenantProfile};
use crate::validate;
use crate::CreditRiskResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The six credit risk sub-scores, each bounded to [0, 1]. Higher is
/// stronger credit, lower is weaker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreditRiskFactors {
    pub industry_risk: Decimal,
    pub market_position: Decimal,
    pub financial_strength: Decimal,
    pub operating_history: Decimal,
    pub payment_history: Decimal,
    pub market_conditions: Decimal,
}

/// Weights applied to the six factors. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreditRiskWeights {
    pub industry_risk: Decimal,
    pub market_position: Decimal,
    pub financial_strength: Decimal,
    pub operating_history: Decimal,
    pub payment_history: Decimal,
    pub market_conditions: Decimal,
}

impl Default for CreditRiskWeights {
    fn default() -> Self {
        CreditRiskWeights {
            industry_risk: dec!(0.20),
            market_position: dec!(0.15),
            financial_strength: dec!(0.25),
            operating_history: dec!(0.15),
            payment_history: dec!(0.15),
            market_conditions: dec!(0.10),
        }
    }
}

/// Externally supplied factor values. Payment history comes from collections
/// data and market conditions from a market analysis; when absent, the
/// documented placeholder values are used.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FactorOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_history: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_conditions: Option<Decimal>,
}

/// A scored tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditRiskCalculation {
    pub tenant_id: String,
    pub factors: CreditRiskFactors,
    pub weights: CreditRiskWeights,
    /// Weighted factor score, [0, 100].
    pub base_score: Decimal,
    /// Base score after the market-conditions adjustment.
    pub adjusted_score: Decimal,
    pub risk_level: RiskLevel,
    pub confidence_level: Decimal,
}

// Placeholder factor values used when no external data is supplied.
const PAYMENT_HISTORY_DEFAULT: Decimal = dec!(0.8);
const MARKET_CONDITIONS_DEFAULT: Decimal = dec!(0.7);

// Confidence is a fixed business rule, not derived from input depth.
const SCORING_CONFIDENCE: Decimal = dec!(0.85);

const REVENUE_SCALE: Decimal = dec!(1_000_000_000);
const OPERATING_HISTORY_FULL_YEARS: Decimal = dec!(20);
const FACTOR_CAP: Decimal = dec!(0.9);

// ---------------------------------------------------------------------------
// Factor derivation
// ---------------------------------------------------------------------------

/// Derive the six factors from a tenant profile and optional overrides.
pub fn derive_factors(tenant: &TenantProfile, overrides: &FactorOverrides) -> CreditRiskFactors {
    let industry_risk = if tenant.industry == Industry::Government {
        dec!(0.9)
    } else {
        dec!(0.7)
    };

    let market_position = if tenant.public_company {
        dec!(0.8)
    } else {
        dec!(0.6)
    };

    let financial_strength = match tenant.annual_revenue {
        Some(revenue) => (revenue / REVENUE_SCALE).min(FACTOR_CAP),
        None => dec!(0.5),
    };

    let operating_history = (tenant.years_in_business / OPERATING_HISTORY_FULL_YEARS).min(FACTOR_CAP);

    CreditRiskFactors {
        industry_risk,
        market_position,
        financial_strength,
        operating_history,
        payment_history: overrides.payment_history.unwrap_or(PAYMENT_HISTORY_DEFAULT),
        market_conditions: overrides
            .market_conditions
            .unwrap_or(MARKET_CONDITIONS_DEFAULT),
    }
}

// ---------------------------------------------------------------------------
// Score calculation
// ---------------------------------------------------------------------------

/// Weighted sum of the six factors, scaled to [0, 100].
pub fn weighted_score(
    factors: &CreditRiskFactors,
    weights: &CreditRiskWeights,
) -> CreditRiskResult<Decimal> {
    validate_weights(weights)?;
    validate_factors(factors)?;

    let score = factors.industry_risk * weights.industry_risk
        + factors.market_position * weights.market_position
        + factors.financial_strength * weights.financial_strength
        + factors.operating_history * weights.operating_history
        + factors.payment_history * weights.payment_history
        + factors.market_conditions * weights.market_conditions;

    Ok(score * dec!(100))
}

/// Adjust a base score for market conditions: neutral at 0.5, swinging ±10%.
pub fn market_adjustment(base_score: Decimal, market_conditions: Decimal) -> Decimal {
    let adjustment = (market_conditions - dec!(0.5)) * dec!(0.2);
    base_score * (Decimal::ONE + adjustment)
}

/// Score a tenant with the default weights.
pub fn score_tenant(
    tenant: &TenantProfile,
    overrides: &FactorOverrides,
) -> CreditRiskResult<CreditRiskCalculation> {
    score_tenant_with_weights(tenant, overrides, &CreditRiskWeights::default())
}

/// Score a tenant with caller-supplied weights.
pub fn score_tenant_with_weights(
    tenant: &TenantProfile,
    overrides: &FactorOverrides,
    weights: &CreditRiskWeights,
) -> CreditRiskResult<CreditRiskCalculation> {
    validate::validate_tenant_profile(tenant)?;

    let factors = derive_factors(tenant, overrides);
    let base_score = weighted_score(&factors, weights)?;
    let adjusted_score = market_adjustment(base_score, factors.market_conditions);
    let risk_level = RiskLevel::from_score(adjusted_score);

    Ok(CreditRiskCalculation {
        tenant_id: tenant.id.clone(),
        factors,
        weights: *weights,
        base_score,
        adjusted_score,
        risk_level,
        confidence_level: SCORING_CONFIDENCE,
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_weights(weights: &CreditRiskWeights) -> CreditRiskResult<()> {
    let components = [
        weights.industry_risk,
        weights.market_position,
        weights.financial_strength,
        weights.operating_history,
        weights.payment_history,
        weights.market_conditions,
    ];
    if components.iter().any(|w| *w < Decimal::ZERO) {
        return Err(CreditRiskError::InvalidInput {
            field: "weights".into(),
            reason: "Weights must be non-negative.".into(),
        });
    }
    let sum: Decimal = components.iter().copied().sum();
    if (sum - Decimal::ONE).abs() > dec!(0.000001) {
        return Err(CreditRiskError::InvalidInput {
            field: "weights".into(),
            reason: format!("Weights must sum to 1.0, got {}.", sum),
        });
    }
    Ok(())
}

fn validate_factors(factors: &CreditRiskFactors) -> CreditRiskResult<()> {
    let components = [
        ("industry_risk", factors.industry_risk),
        ("market_position", factors.market_position),
        ("financial_strength", factors.financial_strength),
        ("operating_history", factors.operating_history),
        ("payment_history", factors.payment_history),
        ("market_conditions", factors.market_conditions),
    ];
    for (name, value) in components {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(CreditRiskError::InvalidInput {
                field: name.into(),
                reason: format!("Factor must be in [0, 1], got {}.", value),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
