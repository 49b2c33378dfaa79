//! Recommendation endpoint trait (port)

use async_trait::async_trait;

use crate::domain::{SuggestionReply, SuggestionRequest};
use crate::error::GatewayError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SuggestionGateway: Send + Sync {
    async fn suggest(&self, request: &SuggestionRequest) -> Result<SuggestionReply, GatewayError>;
}
