//! Tenant concentration and portfolio impact.
//!
//! Concentration shares are percentages (42.5 = 42.5%); the
//! Herfindahl-Hirschman index and the impact adjustments are fractions.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::CreditRiskError;
use crate::types::{Money, Percent};
use crate::CreditRiskResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One tenant's share of a property's area and revenue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantConcentration {
    pub tenant_id: String,
    pub square_footage: Decimal,
    /// Share of total leased area, percent.
    pub percent_of_total: Percent,
    pub annual_rent: Money,
    /// Share of total annual rent, percent.
    pub percent_of_revenue: Percent,
    /// Revenue share of the tenant's whole industry at this property, percent.
    pub industry_exposure: Percent,
}

/// Property-level adjustment derived from tenant concentration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PortfolioImpact {
    /// Fraction in [0, 0.15]; higher when revenue is spread across tenants.
    pub diversification_benefit: Decimal,
    /// Fraction in [0, 0.15]; higher when revenue concentrates.
    pub concentration_penalty: Decimal,
    /// benefit − penalty.
    pub net_risk_adjustment: Decimal,
}

const MAX_DIVERSIFICATION_BENEFIT: Decimal = dec!(0.15);
const MAX_CONCENTRATION_PENALTY: Decimal = dec!(0.15);
const PENALTY_SCALE: Decimal = dec!(0.3);

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// Build one tenant's concentration record from its lease economics and the
/// property totals. Rents are monthly; the record carries them annualised.
pub fn tenant_concentration(
    tenant_id: &str,
    monthly_rent: Money,
    square_feet: Decimal,
    total_monthly_rent: Money,
    total_square_feet: Decimal,
    industry_exposure: Percent,
) -> CreditRiskResult<TenantConcentration> {
    if total_square_feet <= Decimal::ZERO {
        return Err(CreditRiskError::DivisionByZero {
            context: "tenant_concentration: total square footage".into(),
        });
    }
    if total_monthly_rent <= Decimal::ZERO {
        return Err(CreditRiskError::DivisionByZero {
            context: "tenant_concentration: total rent".into(),
        });
    }

    Ok(TenantConcentration {
        tenant_id: tenant_id.to_string(),
        square_footage: square_feet,
        percent_of_total: square_feet / total_square_feet * dec!(100),
        annual_rent: monthly_rent * dec!(12),
        percent_of_revenue: monthly_rent * dec!(12) / (total_monthly_rent * dec!(12)) * dec!(100),
        industry_exposure,
    })
}

/// Herfindahl-Hirschman index over revenue shares: Σ (pct/100)².
pub fn herfindahl_index(concentrations: &[TenantConcentration]) -> Decimal {
    concentrations
        .iter()
        .map(|tc| {
            let share = tc.percent_of_revenue / dec!(100);
            share * share
        })
        .sum()
}

/// Diversification benefit and concentration penalty for a tenant roster.
pub fn portfolio_impact(concentrations: &[TenantConcentration]) -> PortfolioImpact {
    let hhi = herfindahl_index(concentrations);

    let diversification_benefit =
        ((Decimal::ONE - hhi) * MAX_DIVERSIFICATION_BENEFIT).max(Decimal::ZERO);
    let concentration_penalty = (hhi * PENALTY_SCALE).min(MAX_CONCENTRATION_PENALTY);

    PortfolioImpact {
        diversification_benefit,
        concentration_penalty,
        net_risk_adjustment: diversification_benefit - concentration_penalty,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn concentration(id: &str, percent_of_revenue: Decimal) -> TenantConcentration {
        TenantConcentration {
            tenant_id: id.into(),
            square_footage: dec!(10_000),
            percent_of_total: percent_of_revenue,
            annual_rent: dec!(600_000),
            percent_of_revenue,
            industry_exposure: percent_of_revenue,
        }
    }

    #[test]
    fn test_tenant_concentration_shares() {
        let tc = tenant_concentration(
            "tenant-1",
            dec!(50_000),
            dec!(14_286),
            dec!(125_000),
            dec!(40_000),
            dec!(42.5),
        )
        .unwrap();
        assert_eq!(tc.annual_rent, dec!(600_000));
        assert_eq!(tc.percent_of_revenue, dec!(40));
        assert_eq!(tc.percent_of_total, dec!(35.715));
    }

    #[test]
    fn test_zero_totals_rejected() {
        assert!(tenant_concentration(
            "t",
            dec!(100),
            dec!(100),
            Decimal::ZERO,
            dec!(1_000),
            Decimal::ZERO
        )
        .is_err());
        assert!(tenant_concentration(
            "t",
            dec!(100),
            dec!(100),
            dec!(1_000),
            Decimal::ZERO,
            Decimal::ZERO
        )
        .is_err());
    }

    #[test]
    fn test_single_tenant_extremes() {
        let roster = vec![concentration("only", dec!(100))];
        assert_eq!(herfindahl_index(&roster), Decimal::ONE);
        let impact = portfolio_impact(&roster);
        assert_eq!(impact.diversification_benefit, Decimal::ZERO);
        assert_eq!(impact.concentration_penalty, dec!(0.15));
        assert_eq!(impact.net_risk_adjustment, dec!(-0.15));
    }

    #[test]
    fn test_two_tenant_dashboard_scenario() {
        // 42.5% and 25% revenue shares.
        let roster = vec![
            concentration("tenant-1", dec!(42.5)),
            concentration("tenant-2", dec!(25)),
        ];
        assert_eq!(herfindahl_index(&roster), dec!(0.243125));
        let impact = portfolio_impact(&roster);
        assert_eq!(impact.diversification_benefit, dec!(0.11353125));
        assert_eq!(impact.concentration_penalty, dec!(0.0729375));
        assert_eq!(impact.net_risk_adjustment, dec!(0.04059375));
    }

    #[test]
    fn test_impact_bounds() {
        // Evenly split ten-tenant roster: HHI = 10 * 0.1² = 0.1.
        let roster: Vec<TenantConcentration> = (0..10)
            .map(|i| concentration(&format!("t{}", i), dec!(10)))
            .collect();
        let impact = portfolio_impact(&roster);
        assert!(impact.diversification_benefit >= Decimal::ZERO);
        assert!(impact.diversification_benefit <= dec!(0.15));
        assert!(impact.concentration_penalty >= Decimal::ZERO);
        assert!(impact.concentration_penalty <= dec!(0.15));
    }

    #[test]
    fn test_empty_roster_neutral_penalty_max_benefit() {
        // HHI of an empty roster is 0: full benefit, no penalty.
        let impact = portfolio_impact(&[]);
        assert_eq!(impact.diversification_benefit, dec!(0.15));
        assert_eq!(impact.concentration_penalty, Decimal::ZERO);
    }
}
