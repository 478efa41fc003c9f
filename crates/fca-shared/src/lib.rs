//! # FCA Shared
//!
//! Configuration, telemetry, and constants shared by the FCA admin console crates.

pub mod constants;
pub mod telemetry;
pub mod config;
pub mod error;

pub use error::AppError;
