//! # Menu Shared
//!
//! Shared configuration, telemetry, constants and id types for the menu catalog
//! client.

pub mod constants;
pub mod types;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
