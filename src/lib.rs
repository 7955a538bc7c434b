pub mod config;
pub mod games;
pub mod telemetry;
