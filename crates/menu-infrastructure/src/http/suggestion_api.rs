//! Client for the AI-backed `POST /menu-suggestion` endpoint

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use menu_core::domain::{SuggestionReply, SuggestionRequest};
use menu_core::error::GatewayError;
use menu_core::gateway::SuggestionGateway;

use super::client::{endpoint, send_json};

pub struct HttpSuggestionGateway {
    client: Client,
    base_url: String,
}

impl HttpSuggestionGateway {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl SuggestionGateway for HttpSuggestionGateway {
    async fn suggest(&self, request: &SuggestionRequest) -> Result<SuggestionReply, GatewayError> {
        let url = endpoint(&self.base_url, "/menu-suggestion");
        debug!("POST {} for menu {}", url, request.menu_id);
        send_json(self.client.post(&url).json(request)).await
    }
}
