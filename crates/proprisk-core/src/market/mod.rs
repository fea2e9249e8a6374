pub mod rates;
pub mod risk;
