use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Deserialize;

use proprisk_core::credit::scoring::FactorOverrides;
use proprisk_core::types::{LeaseTerms, RiskLevel, TenantProfile};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Market
// ---------------------------------------------------------------------------

#[napi]
pub fn assess_market_risk(input_json: String) -> NapiResult<String> {
    let environment: proprisk_core::market::rates::RateEnvironment =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        proprisk_core::market::risk::assess_market_risk(&environment).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Credit
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct ScoreTenantInput {
    tenant: TenantProfile,
    #[serde(default)]
    overrides: FactorOverrides,
}

#[napi]
pub fn score_tenant(input_json: String) -> NapiResult<String> {
    let input: ScoreTenantInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = proprisk_core::credit::scoring::score_tenant(&input.tenant, &input.overrides)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[derive(Deserialize)]
struct LeaseRiskInput {
    tenant_id: String,
    lease: LeaseTerms,
    market_rent: Decimal,
    risk_level: RiskLevel,
}

#[napi]
pub fn calculate_lease_risk(input_json: String) -> NapiResult<String> {
    let input: LeaseRiskInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = proprisk_core::credit::lease::calculate_lease_risk(
        &input.tenant_id,
        &input.lease,
        input.market_rent,
        input.risk_level,
    )
    .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn analyze_property(input_json: String) -> NapiResult<String> {
    let input: proprisk_core::credit::analysis::PropertyAnalysisInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        proprisk_core::credit::analysis::analyze_property(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
