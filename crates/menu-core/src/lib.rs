//! # Menu Core
//!
//! Domain entities, gateway ports, and the catalog and chat state managers.

pub mod domain;
pub mod gateway;
pub mod services;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::{DomainError, GatewayError};
