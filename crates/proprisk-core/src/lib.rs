pub mod credit;
pub mod error;
pub mod market;
pub mod stats;
pub mod types;
pub mod validate;

pub use error::CreditRiskError;
pub use types::*;

/// Standard result type for all proprisk operations
pub type CreditRiskResult<T> = Result<T, CreditRiskError>;
