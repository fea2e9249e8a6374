//! Decimal statistics helpers shared by the market and credit modules.
//!
//! All arithmetic uses `rust_decimal::Decimal`. No `f64`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::CreditRiskError;
use crate::CreditRiskResult;

/// Direction of a time series, judged by comparing index halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrendDirection::Increasing => write!(f, "increasing"),
            TrendDirection::Decreasing => write!(f, "decreasing"),
            TrendDirection::Stable => write!(f, "stable"),
        }
    }
}

/// Newton's method sqrt: 20 iterations.
pub fn sqrt_decimal(x: Decimal) -> Decimal {
    if x <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    if x == Decimal::ONE {
        return Decimal::ONE;
    }
    let two = dec!(2);
    let mut guess = x / two;
    if x > dec!(100) {
        guess = dec!(10);
    } else if x < dec!(0.01) {
        guess = dec!(0.1);
    }
    for _ in 0..20 {
        guess = (guess + x / guess) / two;
    }
    guess
}

/// Arithmetic mean. Empty series is a caller error.
pub fn mean(series: &[Decimal]) -> CreditRiskResult<Decimal> {
    if series.is_empty() {
        return Err(CreditRiskError::InsufficientData(
            "Cannot average an empty series.".into(),
        ));
    }
    let sum: Decimal = series.iter().copied().sum();
    Ok(sum / Decimal::from(series.len() as u64))
}

/// Population standard deviation, used as the volatility measure.
pub fn volatility(series: &[Decimal]) -> CreditRiskResult<Decimal> {
    let avg = mean(series)?;
    let sum_sq: Decimal = series.iter().map(|x| (*x - avg) * (*x - avg)).sum();
    let variance = sum_sq / Decimal::from(series.len() as u64);
    Ok(sqrt_decimal(variance))
}

/// Classify a series as increasing, decreasing, or stable.
///
/// The series is split by index into first/second halves; the direction is
/// judged by whether the second-half mean moves beyond a 10% relative
/// threshold of the first-half mean. Fewer than 2 points is always Stable.
pub fn trend_direction(series: &[Decimal]) -> TrendDirection {
    if series.len() < 2 {
        return TrendDirection::Stable;
    }
    let mid = series.len() / 2;
    let (first, second) = series.split_at(mid);

    // Both halves are non-empty whenever len >= 2.
    let first_avg = match mean(first) {
        Ok(v) => v,
        Err(_) => return TrendDirection::Stable,
    };
    let second_avg = match mean(second) {
        Ok(v) => v,
        Err(_) => return TrendDirection::Stable,
    };

    let threshold = first_avg.abs() * dec!(0.1);
    let diff = second_avg - first_avg;
    if diff > threshold {
        TrendDirection::Increasing
    } else if diff < -threshold {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    }
}

/// Confidence in a series-derived measure:
/// `max(0, 1 - volatility) * min(1, n / 100)`.
pub fn series_confidence(vol: Decimal, sample_size: usize) -> Decimal {
    let stability = (Decimal::ONE - vol).max(Decimal::ZERO);
    let depth = (Decimal::from(sample_size as u64) / dec!(100)).min(Decimal::ONE);
    stability * depth
}
