use pretty_assertions::assert_eq;
use proprisk_core::credit::analysis::{
    analyze_property, MarketRentStats, PropertyAnalysisInput, TenantLeaseRecord,
};
use proprisk_core::credit::concentration::{herfindahl_index, portfolio_impact, TenantConcentration};
use proprisk_core::credit::lease::calculate_lease_risk;
use proprisk_core::credit::scoring::{
    score_tenant, score_tenant_with_weights, weighted_score, CreditRiskFactors, CreditRiskWeights,
    FactorOverrides,
};
use proprisk_core::types::{Industry, LeaseTerms, MarketContext, RiskLevel, TenantProfile};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Sample builders
// ===========================================================================

/// The reference underwriting scenario: public technology tenant with
/// 50M revenue and 12 years of history.
fn meridian_software() -> TenantProfile {
    TenantProfile {
        id: "tenant-1".into(),
        name: "Meridian Software".into(),
        industry: Industry::Technology,
        credit_score: Some(dec!(720)),
        annual_revenue: Some(dec!(50_000_000)),
        years_in_business: dec!(12),
        public_company: true,
        parent_company: None,
        employee_count: Some(310),
    }
}

fn meridian_lease() -> LeaseTerms {
    LeaseTerms {
        term_remaining: dec!(48),
        monthly_rent: dec!(50_000),
        square_feet: dec!(14_286),
        escalation_rate: dec!(0.03),
        security_deposit: dec!(150_000),
    }
}

fn record(
    id: &str,
    industry: Industry,
    monthly_rent: Decimal,
    square_feet: Decimal,
    term: Decimal,
    escalation: Decimal,
    deposit: Decimal,
) -> TenantLeaseRecord {
    TenantLeaseRecord {
        profile: TenantProfile {
            id: id.into(),
            name: format!("{} Holdings", id),
            industry,
            credit_score: None,
            annual_revenue: Some(dec!(30_000_000)),
            years_in_business: dec!(8),
            public_company: false,
            parent_company: None,
            employee_count: None,
        },
        lease: LeaseTerms {
            term_remaining: term,
            monthly_rent,
            square_feet,
            escalation_rate: escalation,
            security_deposit: deposit,
        },
        market: MarketContext {
            market_rent: dec!(3),
            industry_growth: dec!(0.04),
            market_share: dec!(0.02),
        },
    }
}

fn three_tenant_property() -> PropertyAnalysisInput {
    PropertyAnalysisInput {
        property_id: "prop-42".into(),
        tenants: vec![
            record(
                "tenant-1",
                Industry::Technology,
                dec!(42_500),
                dec!(13_000),
                dec!(48),
                dec!(0.03),
                dec!(100_000),
            ),
            record(
                "tenant-2",
                Industry::Finance,
                dec!(25_000),
                dec!(9_000),
                dec!(18),
                dec!(0.015),
                dec!(30_000),
            ),
            record(
                "tenant-3",
                Industry::Technology,
                dec!(32_500),
                dec!(11_000),
                dec!(60),
                dec!(0.025),
                dec!(70_000),
            ),
        ],
        market_rents: MarketRentStats {
            average: dec!(3.2),
            median: dec!(3.1),
            standard_dev: dec!(0.4),
        },
        factor_overrides: FactorOverrides::default(),
    }
}

// ===========================================================================
// Scoring — reference scenario end to end
// ===========================================================================

#[test]
fn test_reference_tenant_scores_high_risk() {
    let calc = score_tenant(&meridian_software(), &FactorOverrides::default()).unwrap();

    assert_eq!(calc.factors.industry_risk, dec!(0.7));
    assert_eq!(calc.factors.market_position, dec!(0.8));
    assert_eq!(calc.factors.financial_strength, dec!(0.05));
    assert_eq!(calc.factors.operating_history, dec!(0.6));
    assert_eq!(calc.factors.payment_history, dec!(0.8));
    assert_eq!(calc.factors.market_conditions, dec!(0.7));

    assert_eq!(calc.base_score, dec!(55.25));
    assert_eq!(calc.adjusted_score, dec!(57.46));
    assert_eq!(calc.risk_level, RiskLevel::High);
}

#[test]
fn test_base_score_bounded_for_valid_weight_sets() {
    let factors = CreditRiskFactors {
        industry_risk: dec!(0.9),
        market_position: dec!(0.8),
        financial_strength: dec!(0.9),
        operating_history: dec!(0.9),
        payment_history: Decimal::ONE,
        market_conditions: dec!(0.7),
    };
    let weight_sets = [
        CreditRiskWeights::default(),
        CreditRiskWeights {
            industry_risk: dec!(0.5),
            market_position: dec!(0.1),
            financial_strength: dec!(0.1),
            operating_history: dec!(0.1),
            payment_history: dec!(0.1),
            market_conditions: dec!(0.1),
        },
        CreditRiskWeights {
            industry_risk: Decimal::ZERO,
            market_position: Decimal::ZERO,
            financial_strength: Decimal::ONE,
            operating_history: Decimal::ZERO,
            payment_history: Decimal::ZERO,
            market_conditions: Decimal::ZERO,
        },
    ];
    for weights in weight_sets {
        let score = weighted_score(&factors, &weights).unwrap();
        assert!(score >= Decimal::ZERO && score <= dec!(100), "score {}", score);
    }
}

#[test]
fn test_custom_weights_shift_the_level() {
    // Put all weight on financial strength: the reference tenant's weakest
    // factor drags the score to Severe.
    let weights = CreditRiskWeights {
        industry_risk: Decimal::ZERO,
        market_position: Decimal::ZERO,
        financial_strength: Decimal::ONE,
        operating_history: Decimal::ZERO,
        payment_history: Decimal::ZERO,
        market_conditions: Decimal::ZERO,
    };
    let calc =
        score_tenant_with_weights(&meridian_software(), &FactorOverrides::default(), &weights)
            .unwrap();
    assert_eq!(calc.base_score, dec!(5));
    assert_eq!(calc.risk_level, RiskLevel::Severe);
}

// ===========================================================================
// Lease risk — reference scenario and monotonicity
// ===========================================================================

#[test]
fn test_reference_lease_risk() {
    let calc = score_tenant(&meridian_software(), &FactorOverrides::default()).unwrap();
    let risk = calculate_lease_risk(
        "tenant-1",
        &meridian_lease(),
        dec!(35),
        calc.risk_level,
    )
    .unwrap();

    // 600_000 / 14_286 ≈ 42 per sqft annualised, against 420 market.
    assert!((risk.rent_per_sqft - dec!(42)).abs() < dec!(0.01));
    assert!(risk.market_rent_delta < Decimal::ZERO);
    // High base 0.10 + term (60-48)/60*0.05 = 0.11, no rent adjustment.
    assert_eq!(risk.default_probability, dec!(0.11));
}

#[test]
fn test_default_probability_monotone_in_term() {
    let mut last = Decimal::ZERO;
    for term in [dec!(60), dec!(48), dec!(36), dec!(24), dec!(12), dec!(0)] {
        let lease = LeaseTerms {
            term_remaining: term,
            monthly_rent: dec!(10_000),
            square_feet: dec!(5_000),
            escalation_rate: dec!(0.02),
            security_deposit: dec!(20_000),
        };
        let risk = calculate_lease_risk("t", &lease, dec!(3), RiskLevel::Moderate).unwrap();
        assert!(
            risk.default_probability >= last,
            "term {} broke monotonicity",
            term
        );
        last = risk.default_probability;
    }
}

// ===========================================================================
// Concentration — dashboard sample
// ===========================================================================

#[test]
fn test_dashboard_two_tenant_hhi() {
    let roster = vec![
        TenantConcentration {
            tenant_id: "tenant-1".into(),
            square_footage: dec!(13_000),
            percent_of_total: dec!(42.5),
            annual_rent: dec!(510_000),
            percent_of_revenue: dec!(42.5),
            industry_exposure: dec!(42.5),
        },
        TenantConcentration {
            tenant_id: "tenant-2".into(),
            square_footage: dec!(9_000),
            percent_of_total: dec!(25),
            annual_rent: dec!(300_000),
            percent_of_revenue: dec!(25),
            industry_exposure: dec!(25),
        },
    ];
    assert_eq!(herfindahl_index(&roster), dec!(0.243125));
    let impact = portfolio_impact(&roster);
    assert_eq!(impact.diversification_benefit, dec!(0.11353125));
    assert_eq!(impact.concentration_penalty, dec!(0.0729375));
    assert_eq!(impact.net_risk_adjustment, dec!(0.04059375));
}

// ===========================================================================
// Property analysis — full pipeline
// ===========================================================================

#[test]
fn test_property_analysis_shape_and_aggregates() {
    let out = analyze_property(&three_tenant_property()).unwrap();
    let analysis = &out.result;

    assert_eq!(analysis.property_id, "prop-42");
    assert_eq!(analysis.tenant_risks.len(), 3);
    assert_eq!(analysis.concentration_risk.len(), 3);
    assert_eq!(analysis.tenant_profiles.len(), 3);

    let revenue_total: Decimal = analysis
        .concentration_risk
        .iter()
        .map(|c| c.percent_of_revenue)
        .sum();
    assert_eq!(revenue_total, dec!(100));

    // 42.5/25/32.5 revenue split.
    assert_eq!(analysis.concentration_risk[0].percent_of_revenue, dec!(42.5));
    assert_eq!(analysis.concentration_risk[1].percent_of_revenue, dec!(25));
    assert_eq!(analysis.concentration_risk[2].percent_of_revenue, dec!(32.5));

    // Technology spans tenants 1 and 3: 75% exposure.
    assert_eq!(analysis.concentration_risk[0].industry_exposure, dec!(75));

    assert_eq!(analysis.market_volatility, dec!(0.125));
    assert!(analysis.total_default_risk > Decimal::ZERO);
    assert!(analysis.weighted_average_lease_length > Decimal::ZERO);
}

#[test]
fn test_property_analysis_recommendation_rules() {
    let out = analyze_property(&three_tenant_property()).unwrap();
    let recs = &out.result.recommendations;

    // Every tenant in the roster scores High with the placeholder factors.
    assert!(recs.risk_mitigation[0].contains("3 high-risk tenants"));

    // tenant-2 expires in 18 months and is not Severe.
    assert!(recs
        .tenant_retention
        .iter()
        .any(|r| r.contains("1 tenants expiring within 24 months")));

    // tenant-2's escalation is 0.015 and its deposit just over one month.
    assert!(recs
        .lease_structure
        .contains(&"Consider higher escalations in future lease negotiations".to_string()));
    assert!(recs
        .lease_structure
        .contains(&"Evaluate security deposit requirements for future leases".to_string()));

    // Technology holds 75% of revenue.
    assert!(recs
        .portfolio_balance
        .iter()
        .any(|r| r.contains("technology industry (currently 75.0%)")));
}

#[test]
fn test_recommendations_idempotent() {
    let input = three_tenant_property();
    let first = analyze_property(&input).unwrap().result.recommendations;
    let second = analyze_property(&input).unwrap().result.recommendations;
    assert_eq!(first, second);
}

#[test]
fn test_property_analysis_serde_roundtrip() {
    let out = analyze_property(&three_tenant_property()).unwrap();
    let json = serde_json::to_string(&out.result).unwrap();
    let back: proprisk_core::credit::analysis::PropertyCreditAnalysis =
        serde_json::from_str(&json).unwrap();
    assert_eq!(back.total_default_risk, out.result.total_default_risk);
    assert_eq!(back.overall_risk_level, out.result.overall_risk_level);
}

#[test]
fn test_overall_level_reflects_default_risk() {
    let out = analyze_property(&three_tenant_property()).unwrap();
    let analysis = &out.result;
    let score = dec!(100) - analysis.total_default_risk * dec!(100)
        + analysis.portfolio_impact.net_risk_adjustment;
    assert_eq!(analysis.overall_risk_level, RiskLevel::from_score(score));
}
