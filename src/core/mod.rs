// Core modules
pub mod metrics;
pub mod sample;
pub mod types;
