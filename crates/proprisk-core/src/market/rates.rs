//! Market context model: rate observations and series analysis.
//!
//! Unit conventions: rates are quoted in percent (5.25 = 5.25%), spreads in
//! basis points. Observation series are ordered oldest first.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CreditRiskError;
use crate::stats::{self, TrendDirection};
use crate::CreditRiskResult;

// ---------------------------------------------------------------------------
// Observation records
// ---------------------------------------------------------------------------

/// A SOFR observation. Term is the tenor label, e.g. "30D", "90D", "180D".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SofrRate {
    pub date: NaiveDate,
    /// Percent.
    pub rate: Decimal,
    pub term: String,
}

/// A treasury yield observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreasuryRate {
    pub date: NaiveDate,
    /// Percent.
    pub rate: Decimal,
    pub term_years: u32,
}

/// Reference curve for a quoted spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaseRate {
    Sofr,
    Treasury,
}

/// A lending spread observation for a property/loan type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSpread {
    pub date: NaiveDate,
    pub property_type: String,
    pub loan_type: String,
    /// Basis points over the base rate.
    pub spread_bps: Decimal,
    pub base_rate: BaseRate,
    pub term: String,
}

/// A capitalisation rate observation for a property type in a market.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapRate {
    pub date: NaiveDate,
    pub property_type: String,
    pub market: String,
    /// Percent.
    pub rate: Decimal,
}

/// The rate environment a market risk assessment runs against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateEnvironment {
    pub sofr_rates: Vec<SofrRate>,
    #[serde(default)]
    pub treasury_rates: Vec<TreasuryRate>,
    pub market_spreads: Vec<MarketSpread>,
}

// ---------------------------------------------------------------------------
// Series analysis
// ---------------------------------------------------------------------------

/// Direction and quality of a numeric series over a timeframe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketTrend {
    pub direction: TrendDirection,
    pub volatility: Decimal,
    pub confidence: Decimal,
    pub timeframe: String,
}

/// Summary of a spread series against its history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpreadAnalysis {
    pub current: MarketSpread,
    /// Mean spread across the series, basis points.
    pub historical_average: Decimal,
    pub trend: MarketTrend,
}

/// Analyze a raw numeric series into a trend record.
pub fn analyze_trend(series: &[Decimal], timeframe: &str) -> CreditRiskResult<MarketTrend> {
    let vol = stats::volatility(series)?;
    Ok(MarketTrend {
        direction: stats::trend_direction(series),
        volatility: vol,
        confidence: stats::series_confidence(vol, series.len()),
        timeframe: timeframe.to_string(),
    })
}

/// Analyze a spread series: latest quote, historical mean, and trend.
pub fn analyze_spreads(
    spreads: &[MarketSpread],
    timeframe: &str,
) -> CreditRiskResult<SpreadAnalysis> {
    let current = spreads
        .last()
        .cloned()
        .ok_or_else(|| CreditRiskError::InsufficientData("No spread observations.".into()))?;

    let values: Vec<Decimal> = spreads.iter().map(|s| s.spread_bps).collect();
    let historical_average = stats::mean(&values)?;
    let trend = analyze_trend(&values, timeframe)?;

    Ok(SpreadAnalysis {
        current,
        historical_average,
        trend,
    })
}
