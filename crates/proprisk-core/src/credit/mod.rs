pub mod analysis;
pub mod concentration;
pub mod lease;
pub mod recommendations;
pub mod scoring;
