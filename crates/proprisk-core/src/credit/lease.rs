//! Lease-level default risk.
//!
//! Derives rent-per-square-foot, the delta against market rent, and a
//! default probability from the lease terms and the tenant's credit level.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{LeaseTerms, Money, Months, Percent, Rate, RiskLevel};
use crate::validate;
use crate::CreditRiskResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Risk metrics for one lease.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaseRisk {
    pub tenant_id: String,
    pub lease_term_remaining: Months,
    pub monthly_rent: Money,
    /// Annualised rent per square foot.
    pub rent_per_sqft: Decimal,
    /// Annual escalation as a fraction.
    pub escalations: Rate,
    pub security_deposit: Money,
    /// Fraction in [0, 1]. Clamped at 1.0 when the adjustments stack past it.
    pub default_probability: Decimal,
    /// Percent above (+) or below (−) annualised market rent.
    pub market_rent_delta: Percent,
    pub risk_level: RiskLevel,
}

// Base annual default probabilities per credit level.
fn base_default_probability(level: RiskLevel) -> Decimal {
    match level {
        RiskLevel::Low => dec!(0.02),
        RiskLevel::Moderate => dec!(0.05),
        RiskLevel::High => dec!(0.10),
        RiskLevel::Severe => dec!(0.20),
    }
}

const FULL_TERM_MONTHS: Decimal = dec!(60);
const TERM_ADJUSTMENT_WEIGHT: Decimal = dec!(0.05);
const RENT_ADJUSTMENT_WEIGHT: Decimal = dec!(0.05);

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Calculate lease risk from lease terms, the monthly market rent per
/// square foot, and the tenant's credit level.
pub fn calculate_lease_risk(
    tenant_id: &str,
    lease: &LeaseTerms,
    market_rent: Money,
    risk_level: RiskLevel,
) -> CreditRiskResult<LeaseRisk> {
    validate::validate_lease_terms(lease)?;
    if market_rent <= Decimal::ZERO {
        return Err(crate::error::CreditRiskError::InvalidInput {
            field: "market_rent".into(),
            reason: "Market rent must be positive.".into(),
        });
    }

    let rent_per_sqft = lease.monthly_rent * dec!(12) / lease.square_feet;
    let market_rent_per_sqft = market_rent * dec!(12);
    let market_rent_delta =
        (rent_per_sqft - market_rent_per_sqft) / market_rent_per_sqft * dec!(100);

    let base_prob = base_default_probability(risk_level);

    // Shorter remaining term raises risk; contribution tops out at 0.05.
    let term_shortfall = ((FULL_TERM_MONTHS - lease.term_remaining) / FULL_TERM_MONTHS)
        .max(Decimal::ZERO);
    let term_adjustment = term_shortfall * TERM_ADJUSTMENT_WEIGHT;

    // Above-market rent raises risk; below-market contributes nothing.
    let rent_adjustment = (market_rent_delta / dec!(100)).max(Decimal::ZERO) * RENT_ADJUSTMENT_WEIGHT;

    let default_probability = (base_prob + term_adjustment + rent_adjustment).min(Decimal::ONE);

    Ok(LeaseRisk {
        tenant_id: tenant_id.to_string(),
        lease_term_remaining: lease.term_remaining,
        monthly_rent: lease.monthly_rent,
        rent_per_sqft,
        escalations: lease.escalation_rate,
        security_deposit: lease.security_deposit,
        default_probability,
        market_rent_delta,
        risk_level,
    })
}

/// Whether the raw (unclamped) probability would have exceeded 1.0.
/// Used by the property analysis to surface a warning.
pub fn probability_was_clamped(risk: &LeaseRisk) -> bool {
    risk.default_probability == Decimal::ONE
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
