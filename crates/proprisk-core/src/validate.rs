//! Record-level validation for externally supplied inputs.
//!
//! The calculators assume non-degenerate inputs (no zero square footage, no
//! empty rosters). These functions collect every problem in a record into a
//! structured issue list so the caller can reject it with one descriptive
//! error before any arithmetic runs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{LeaseTerms, MarketContext, TenantProfile};

/// One field-level problem in an input record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(field: &str, message: impl Into<String>) -> Self {
        ValidationIssue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a tenant profile. Returns every issue found, not just the first.
pub fn validate_tenant_profile(tenant: &TenantProfile) -> Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    if tenant.id.trim().is_empty() {
        issues.push(ValidationIssue::new("id", "Tenant id must not be empty."));
    }
    if tenant.name.trim().is_empty() {
        issues.push(ValidationIssue::new(
            "name",
            "Tenant name must not be empty.",
        ));
    }
    if tenant.years_in_business < Decimal::ZERO {
        issues.push(ValidationIssue::new(
            "years_in_business",
            "Years in business must be non-negative.",
        ));
    }
    if let Some(revenue) = tenant.annual_revenue {
        if revenue < Decimal::ZERO {
            issues.push(ValidationIssue::new(
                "annual_revenue",
                "Annual revenue must be non-negative.",
            ));
        }
    }
    if let Some(score) = tenant.credit_score {
        if score < Decimal::ZERO {
            issues.push(ValidationIssue::new(
                "credit_score",
                "Credit score must be non-negative.",
            ));
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Validate lease terms against the documented preconditions.
pub fn validate_lease_terms(lease: &LeaseTerms) -> Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    if lease.term_remaining < Decimal::ZERO {
        issues.push(ValidationIssue::new(
            "term_remaining",
            "Remaining term must be non-negative.",
        ));
    }
    if lease.monthly_rent <= Decimal::ZERO {
        issues.push(ValidationIssue::new(
            "monthly_rent",
            "Monthly rent must be positive.",
        ));
    }
    if lease.square_feet <= Decimal::ZERO {
        issues.push(ValidationIssue::new(
            "square_feet",
            "Square footage must be positive.",
        ));
    }
    if lease.escalation_rate < Decimal::ZERO {
        issues.push(ValidationIssue::new(
            "escalation_rate",
            "Escalation rate must be non-negative.",
        ));
    }
    if lease.security_deposit < Decimal::ZERO {
        issues.push(ValidationIssue::new(
            "security_deposit",
            "Security deposit must be non-negative.",
        ));
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Validate a tenant-level market context.
pub fn validate_market_context(market: &MarketContext) -> Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    if market.market_rent <= Decimal::ZERO {
        issues.push(ValidationIssue::new(
            "market_rent",
            "Market rent must be positive.",
        ));
    }
    if market.market_share < Decimal::ZERO || market.market_share > Decimal::ONE {
        issues.push(ValidationIssue::new(
            "market_share",
            "Market share must be a fraction in [0, 1].",
        ));
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Industry;
    use rust_decimal_macros::dec;

    fn good_tenant() -> TenantProfile {
        TenantProfile {
            id: "tenant-1".into(),
            name: "Acme Corp".into(),
            industry: Industry::Technology,
            credit_score: Some(dec!(710)),
            annual_revenue: Some(dec!(50_000_000)),
            years_in_business: dec!(12),
            public_company: true,
            parent_company: None,
            employee_count: Some(240),
        }
    }

    fn good_lease() -> LeaseTerms {
        LeaseTerms {
            term_remaining: dec!(48),
            monthly_rent: dec!(50_000),
            square_feet: dec!(14_286),
            escalation_rate: dec!(0.03),
            security_deposit: dec!(150_000),
        }
    }

    #[test]
    fn test_valid_tenant_passes() {
        assert!(validate_tenant_profile(&good_tenant()).is_ok());
    }

    #[test]
    fn test_negative_years_rejected() {
        let mut tenant = good_tenant();
        tenant.years_in_business = dec!(-1);
        let issues = validate_tenant_profile(&tenant).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "years_in_business");
    }

    #[test]
    fn test_multiple_issues_collected() {
        let mut tenant = good_tenant();
        tenant.id = "".into();
        tenant.name = "  ".into();
        tenant.years_in_business = dec!(-3);
        let issues = validate_tenant_profile(&tenant).unwrap_err();
        assert_eq!(issues.len(), 3);
    }

    #[test]
    fn test_valid_lease_passes() {
        assert!(validate_lease_terms(&good_lease()).is_ok());
    }

    #[test]
    fn test_zero_square_feet_rejected() {
        let mut lease = good_lease();
        lease.square_feet = Decimal::ZERO;
        let issues = validate_lease_terms(&lease).unwrap_err();
        assert!(issues.iter().any(|i| i.field == "square_feet"));
    }

    #[test]
    fn test_zero_rent_rejected() {
        let mut lease = good_lease();
        lease.monthly_rent = Decimal::ZERO;
        assert!(validate_lease_terms(&lease).is_err());
    }

    #[test]
    fn test_market_context_bounds() {
        let market = MarketContext {
            market_rent: dec!(35),
            industry_growth: dec!(0.08),
            market_share: dec!(1.2),
        };
        let issues = validate_market_context(&market).unwrap_err();
        assert_eq!(issues[0].field, "market_share");
    }
}
