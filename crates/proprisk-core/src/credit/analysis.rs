//! Property-level credit analysis.
//!
//! Orchestrates the scorer, the lease risk model, and the concentration
//! aggregator across a property's full tenant roster, then attaches
//! generated recommendations. Every record is built fresh per call; nothing
//! is shared or mutated across invocations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::credit::concentration::{self, PortfolioImpact, TenantConcentration};
use crate::credit::lease::{self, LeaseRisk};
use crate::credit::recommendations::{self, RecommendationSet};
use crate::credit::scoring::{self, CreditRiskCalculation, FactorOverrides};
use crate::error::CreditRiskError;
use crate::types::{
    with_metadata, ComputationOutput, Industry, LeaseTerms, MarketContext, Money, Percent, Rate,
    RiskLevel, TenantProfile,
};
use crate::validate::{self, ValidationIssue};
use crate::CreditRiskResult;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One tenant's slice of the property: who they are, what they signed, and
/// the market around them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantLeaseRecord {
    pub profile: TenantProfile,
    pub lease: LeaseTerms,
    pub market: MarketContext,
}

/// Market rent distribution for the property's submarket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketRentStats {
    pub average: Money,
    pub median: Money,
    pub standard_dev: Decimal,
}

/// Input for a property credit analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyAnalysisInput {
    pub property_id: String,
    pub tenants: Vec<TenantLeaseRecord>,
    pub market_rents: MarketRentStats,
    /// Externally supplied payment-history / market-conditions factors,
    /// applied to every tenant. Placeholders are used when absent.
    #[serde(default)]
    pub factor_overrides: FactorOverrides,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// How one tenant's lease compares to its market.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketComparison {
    /// Percent above (+) or below (−) market rent.
    pub rent_delta: Percent,
    /// Annual growth of the tenant's industry, fraction.
    pub industry_performance: Rate,
    /// Tenant's market share, fraction.
    pub market_share: Rate,
    /// Assumed tenant revenue growth, fraction.
    pub growth_rate: Rate,
}

/// A fully scored tenant within one property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantRiskProfile {
    pub tenant: TenantProfile,
    pub credit_risk: CreditRiskCalculation,
    pub lease_risk: LeaseRisk,
    pub concentration: TenantConcentration,
    pub market_comparison: MarketComparison,
}

/// Property-level credit analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyCreditAnalysis {
    pub id: String,
    pub property_id: String,
    pub overall_risk_level: RiskLevel,
    pub tenant_risks: Vec<LeaseRisk>,
    pub concentration_risk: Vec<TenantConcentration>,
    /// Revenue-weighted months of remaining lease term.
    pub weighted_average_lease_length: Decimal,
    /// Revenue-weighted default probability, fraction.
    pub total_default_risk: Decimal,
    /// Coefficient of variation of submarket rents.
    pub market_volatility: Decimal,
    pub tenant_profiles: Vec<TenantRiskProfile>,
    pub portfolio_impact: PortfolioImpact,
    pub recommendations: RecommendationSet,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Assumed revenue growth pending integration of tenant financials.
const ASSUMED_GROWTH_RATE: Decimal = dec!(0.05);

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run a full credit analysis for one property's tenant roster.
///
/// Returns a `ComputationOutput<PropertyCreditAnalysis>` with warnings for
/// clamped default probabilities and computation metadata.
pub fn analyze_property(
    input: &PropertyAnalysisInput,
) -> CreditRiskResult<ComputationOutput<PropertyCreditAnalysis>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let total_monthly_rent: Money = input.tenants.iter().map(|t| t.lease.monthly_rent).sum();
    let total_square_feet: Decimal = input.tenants.iter().map(|t| t.lease.square_feet).sum();

    let industry_exposure = industry_exposure(&input.tenants, total_monthly_rent);

    // Score each tenant and derive its lease and concentration records.
    let mut tenant_profiles = Vec::with_capacity(input.tenants.len());
    for record in &input.tenants {
        let credit_risk = scoring::score_tenant(&record.profile, &input.factor_overrides)?;

        let lease_risk = lease::calculate_lease_risk(
            &record.profile.id,
            &record.lease,
            record.market.market_rent,
            credit_risk.risk_level,
        )?;
        if lease::probability_was_clamped(&lease_risk) {
            warnings.push(format!(
                "Default probability for tenant '{}' clamped to 1.0",
                record.profile.id
            ));
        }

        let exposure = industry_exposure
            .iter()
            .find(|(industry, _)| *industry == record.profile.industry)
            .map(|(_, pct)| *pct)
            .unwrap_or(Decimal::ZERO);

        let concentration = concentration::tenant_concentration(
            &record.profile.id,
            record.lease.monthly_rent,
            record.lease.square_feet,
            total_monthly_rent,
            total_square_feet,
            exposure,
        )?;

        let market_comparison = MarketComparison {
            rent_delta: lease_risk.market_rent_delta,
            industry_performance: record.market.industry_growth,
            market_share: record.market.market_share,
            growth_rate: ASSUMED_GROWTH_RATE,
        };

        tenant_profiles.push(TenantRiskProfile {
            tenant: record.profile.clone(),
            credit_risk,
            lease_risk,
            concentration,
            market_comparison,
        });
    }

    let concentrations: Vec<TenantConcentration> = tenant_profiles
        .iter()
        .map(|p| p.concentration.clone())
        .collect();
    let portfolio_impact = concentration::portfolio_impact(&concentrations);

    // Revenue-weighted aggregates.
    let weighted_average_lease_length: Decimal = tenant_profiles
        .iter()
        .map(|p| p.lease_risk.lease_term_remaining * p.concentration.percent_of_revenue / dec!(100))
        .sum();
    let total_default_risk: Decimal = tenant_profiles
        .iter()
        .map(|p| p.lease_risk.default_probability * p.concentration.percent_of_revenue / dec!(100))
        .sum();

    let overall_risk_level = RiskLevel::from_score(
        dec!(100) - total_default_risk * dec!(100) + portfolio_impact.net_risk_adjustment,
    );

    let market_volatility = input.market_rents.standard_dev / input.market_rents.average;

    let recommendations = recommendations::generate_recommendations(
        &tenant_profiles,
        overall_risk_level,
        &portfolio_impact,
    );

    let now = Utc::now();
    let analysis = PropertyCreditAnalysis {
        id: format!("{}-credit-analysis", input.property_id),
        property_id: input.property_id.clone(),
        overall_risk_level,
        tenant_risks: tenant_profiles.iter().map(|p| p.lease_risk.clone()).collect(),
        concentration_risk: concentrations,
        weighted_average_lease_length,
        total_default_risk,
        market_volatility,
        tenant_profiles,
        portfolio_impact,
        recommendations,
        created_at: now,
        updated_at: now,
    };

    Ok(with_metadata(
        "tenant_credit_analysis_v1",
        &serde_json::json!({
            "weights": scoring::CreditRiskWeights::default(),
            "assumed_growth_rate": ASSUMED_GROWTH_RATE,
            "factor_overrides": input.factor_overrides,
        }),
        warnings,
        start.elapsed().as_micros() as u64,
        analysis,
    ))
}

/// Revenue share per industry across the roster, percent, first-seen order.
fn industry_exposure(
    tenants: &[TenantLeaseRecord],
    total_monthly_rent: Money,
) -> Vec<(Industry, Percent)> {
    let mut exposure: Vec<(Industry, Percent)> = Vec::new();
    if total_monthly_rent <= Decimal::ZERO {
        return exposure;
    }
    for record in tenants {
        let share = record.lease.monthly_rent / total_monthly_rent * dec!(100);
        match exposure
            .iter_mut()
            .find(|(industry, _)| *industry == record.profile.industry)
        {
            Some((_, pct)) => *pct += share,
            None => exposure.push((record.profile.industry, share)),
        }
    }
    exposure
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_input(input: &PropertyAnalysisInput) -> CreditRiskResult<()> {
    if input.property_id.trim().is_empty() {
        return Err(CreditRiskError::InvalidInput {
            field: "property_id".into(),
            reason: "Property id must not be empty.".into(),
        });
    }
    if input.tenants.is_empty() {
        return Err(CreditRiskError::InsufficientData(
            "At least one tenant is required for a property analysis.".into(),
        ));
    }
    if input.market_rents.average <= Decimal::ZERO {
        return Err(CreditRiskError::InvalidInput {
            field: "market_rents.average".into(),
            reason: "Average market rent must be positive.".into(),
        });
    }

    let mut issues: Vec<ValidationIssue> = Vec::new();
    for (index, record) in input.tenants.iter().enumerate() {
        collect_prefixed(
            &mut issues,
            &format!("tenants[{}].profile", index),
            validate::validate_tenant_profile(&record.profile),
        );
        collect_prefixed(
            &mut issues,
            &format!("tenants[{}].lease", index),
            validate::validate_lease_terms(&record.lease),
        );
        collect_prefixed(
            &mut issues,
            &format!("tenants[{}].market", index),
            validate::validate_market_context(&record.market),
        );
    }
    if !issues.is_empty() {
        return Err(CreditRiskError::Validation(issues));
    }
    Ok(())
}

fn collect_prefixed(
    issues: &mut Vec<ValidationIssue>,
    prefix: &str,
    result: Result<(), Vec<ValidationIssue>>,
) {
    if let Err(found) = result {
        for issue in found {
            issues.push(ValidationIssue {
                field: format!("{}.{}", prefix, issue.field),
                message: issue.message,
            });
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
