//! Rule-based recommendation text.
//!
//! Deterministic, order-preserving, append-only: the same inputs always
//! produce the same lists, and no rule removes or deduplicates another
//! rule's output.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::credit::analysis::TenantRiskProfile;
use crate::credit::concentration::PortfolioImpact;
use crate::types::{Industry, RiskLevel};

/// Recommendation strings, bucketed by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub risk_mitigation: Vec<String>,
    pub tenant_retention: Vec<String>,
    pub lease_structure: Vec<String>,
    pub portfolio_balance: Vec<String>,
}

const NEAR_TERM_EXPIRY_MONTHS: Decimal = dec!(24);
const ABOVE_MARKET_DELTA_PCT: Decimal = dec!(10);
const LOW_ESCALATION_RATE: Decimal = dec!(0.02);
const DEPOSIT_COVERAGE_MONTHS: Decimal = dec!(2);
const PENALTY_DIVERSIFY_TRIGGER: Decimal = dec!(0.1);
const DOMINANT_INDUSTRY_PCT: Decimal = dec!(40);

/// Generate all four recommendation buckets for a scored roster.
pub fn generate_recommendations(
    profiles: &[TenantRiskProfile],
    overall_risk_level: RiskLevel,
    portfolio_impact: &PortfolioImpact,
) -> RecommendationSet {
    RecommendationSet {
        risk_mitigation: risk_mitigation(profiles, overall_risk_level),
        tenant_retention: tenant_retention(profiles),
        lease_structure: lease_structure(profiles),
        portfolio_balance: portfolio_balance(profiles, portfolio_impact),
    }
}

fn risk_mitigation(profiles: &[TenantRiskProfile], overall: RiskLevel) -> Vec<String> {
    let mut recommendations = Vec::new();

    let high_risk_count = profiles
        .iter()
        .filter(|p| p.credit_risk.risk_level >= RiskLevel::High)
        .count();
    if high_risk_count > 0 {
        recommendations.push(format!(
            "Consider increasing security deposits for {} high-risk tenants",
            high_risk_count
        ));
    }

    if overall >= RiskLevel::High {
        recommendations.push("Implement more frequent financial monitoring of tenants".to_string());
        recommendations.push("Consider credit default insurance for high-risk leases".to_string());
    }

    recommendations
}

fn tenant_retention(profiles: &[TenantRiskProfile]) -> Vec<String> {
    let mut recommendations = Vec::new();

    let near_term_expirations = profiles
        .iter()
        .filter(|p| {
            p.lease_risk.lease_term_remaining < NEAR_TERM_EXPIRY_MONTHS
                && p.credit_risk.risk_level != RiskLevel::Severe
        })
        .count();
    if near_term_expirations > 0 {
        recommendations.push(format!(
            "Initiate renewal discussions with {} tenants expiring within 24 months",
            near_term_expirations
        ));
    }

    if profiles
        .iter()
        .any(|p| p.market_comparison.rent_delta > ABOVE_MARKET_DELTA_PCT)
    {
        recommendations
            .push("Develop retention strategies for tenants paying above-market rents".to_string());
    }

    recommendations
}

fn lease_structure(profiles: &[TenantRiskProfile]) -> Vec<String> {
    let mut recommendations = Vec::new();

    if profiles
        .iter()
        .any(|p| p.lease_risk.escalations < LOW_ESCALATION_RATE)
    {
        recommendations
            .push("Consider higher escalations in future lease negotiations".to_string());
    }

    if profiles
        .iter()
        .any(|p| p.lease_risk.security_deposit < p.lease_risk.monthly_rent * DEPOSIT_COVERAGE_MONTHS)
    {
        recommendations.push("Evaluate security deposit requirements for future leases".to_string());
    }

    recommendations
}

fn portfolio_balance(
    profiles: &[TenantRiskProfile],
    portfolio_impact: &PortfolioImpact,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if portfolio_impact.concentration_penalty > PENALTY_DIVERSIFY_TRIGGER {
        recommendations
            .push("Consider diversifying tenant mix to reduce concentration risk".to_string());
    }

    if let Some((industry, share)) = dominant_industry(profiles) {
        if share > DOMINANT_INDUSTRY_PCT {
            recommendations.push(format!(
                "Consider reducing exposure to {} industry (currently {}%)",
                industry,
                one_decimal(share)
            ));
        }
    }

    recommendations
}

/// Round to one decimal and keep the trailing digit, so a whole-number share
/// prints as "75.0", never "75".
fn one_decimal(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp(1);
    rounded.rescale(1);
    rounded
}

/// Revenue share per industry, first-seen order; returns the largest.
fn dominant_industry(profiles: &[TenantRiskProfile]) -> Option<(Industry, Decimal)> {
    let mut shares: Vec<(Industry, Decimal)> = Vec::new();
    for profile in profiles {
        let industry = profile.tenant.industry;
        match shares.iter_mut().find(|(i, _)| *i == industry) {
            Some((_, share)) => *share += profile.concentration.percent_of_revenue,
            None => shares.push((industry, profile.concentration.percent_of_revenue)),
        }
    }
    shares
        .into_iter()
        .reduce(|best, next| if next.1 > best.1 { next } else { best })
}

// The full rule set is exercised through the analysis module and the
// crate-level integration suite; the tests here cover the pieces with
// behavior of their own.
