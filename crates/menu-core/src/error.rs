//! Domain errors

use menu_shared::EntityId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Name is required")]
    MissingName,

    #[error("Cuisine is required")]
    MissingCuisine,

    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Menu not found: {0}")]
    MenuNotFound(EntityId),

    #[error("Category not found: {0}")]
    CategoryNotFound(EntityId),

    #[error("Item {item_id} not found in category {category_id}")]
    ItemNotFound { category_id: EntityId, item_id: EntityId },

    #[error("Remote call failed: {0}")]
    RemoteFailure(&'static str),
}

impl DomainError {
    /// Rejected before any remote call was made.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::MissingName
                | DomainError::MissingCuisine
                | DomainError::InvalidPrice(_)
                | DomainError::Validation(_)
        )
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::Validation(errors.to_string())
    }
}

/// Failure of a single HTTP round trip.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}
