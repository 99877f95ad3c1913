//! Copilot HTTP client implementation
//!
//! Implements [`CopilotTransport`] with a blocking reqwest client. Each turn
//! is a single best-effort POST: no timeout, no retries.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use tracing::{debug, warn};

use super::{ChatRequest, ChatResponse, CopilotError, CopilotTransport, RESPONSE_FORMAT_VERSION};
use crate::config::Config;

/// Copilot API client
pub struct CopilotClient {
    endpoint: String,
    access_token: String,
    http: Client,
}

impl CopilotClient {
    /// Create a client from startup configuration
    pub fn from_config(config: &Config) -> Result<Self, CopilotError> {
        debug!(?config, "from_config: called");
        Self::new(&config.endpoint, &config.access_token)
    }

    pub fn new(endpoint: &str, access_token: &str) -> Result<Self, CopilotError> {
        let http = Client::builder().timeout(None::<Duration>).build()?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            access_token: access_token.to_string(),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Serialize the request body for one turn
    fn build_request_body(
        &self,
        query: &str,
        org_id: &str,
        conversation_id: Option<&str>,
    ) -> Result<Vec<u8>, CopilotError> {
        let request = ChatRequest::new(query, org_id, conversation_id);
        debug!(has_conversation = request.conversation_id.is_some(), "build_request_body: called");
        serde_json::to_vec(&request).map_err(CopilotError::Encode)
    }
}

impl CopilotTransport for CopilotClient {
    fn exchange(
        &self,
        query: &str,
        org_id: &str,
        conversation_id: Option<&str>,
    ) -> Result<ChatResponse, CopilotError> {
        debug!(endpoint = %self.endpoint, %org_id, ?conversation_id, "exchange: called");
        let body = self.build_request_body(query, org_id, conversation_id)?;

        let response = self
            .http
            .post(&self.endpoint)
            .header("Authorization", format!("token {}", self.access_token))
            .header("Content-Type", "application/json")
            .header("responseFormatVersion", RESPONSE_FORMAT_VERSION)
            .body(body)
            .send()?;

        let status = response.status();
        let text = response.text()?;

        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "exchange: request failed");
            return Err(CopilotError::Request {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&text).map_err(CopilotError::Decode)?;
        debug!(
            conversation_id = %parsed.conversation_id,
            message_count = parsed.messages.len(),
            "exchange: success"
        );
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_request_body_first_turn() {
        let client = CopilotClient::new("http://localhost", "pul-abc").unwrap();
        let body = client.build_request_body("hello", "acme", None).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            value,
            json!({
                "query": "hello",
                "state": {"client": {"cloudContext": {"orgId": "acme", "url": "https://app.pulumi.com"}}}
            })
        );
    }

    #[test]
    fn test_from_config_keeps_endpoint() {
        let config = Config {
            endpoint: "http://copilot.local/chat".to_string(),
            access_token: "pul-abc".to_string(),
        };
        let client = CopilotClient::from_config(&config).unwrap();
        assert_eq!(client.endpoint(), "http://copilot.local/chat");
    }
}
