//! Copilot request and response envelopes

use serde::{Deserialize, Serialize};

use super::PULUMI_CLOUD_URL;

/// Request body for one conversation turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    pub query: String,
    pub state: RequestState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestState {
    pub client: ClientState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientState {
    pub cloud_context: CloudContext,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudContext {
    pub org_id: String,
    pub url: String,
}

impl ChatRequest {
    /// Build a request for `query` within `org_id`
    ///
    /// An empty conversation id is dropped so the first turn never sends the field.
    pub fn new(query: &str, org_id: &str, conversation_id: Option<&str>) -> Self {
        Self {
            conversation_id: conversation_id.filter(|id| !id.is_empty()).map(str::to_string),
            query: query.to_string(),
            state: RequestState {
                client: ClientState {
                    cloud_context: CloudContext {
                        org_id: org_id.to_string(),
                        url: PULUMI_CLOUD_URL.to_string(),
                    },
                },
            },
        }
    }
}

/// Response body for one conversation turn
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub conversation_id: String,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// A single message in a response
///
/// `content` is kept raw; its shape depends on `kind` and is decoded by
/// [`super::decode_content`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub content: serde_json::Value,
}

impl ChatMessage {
    pub fn is_assistant(&self) -> bool {
        self.role == "assistant"
    }
}

/// Generated program carried by a `kind == "program"` message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub language: String,
    pub code: String,
    pub plan: Plan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub instructions: String,
    #[serde(default)]
    pub search_terms: Vec<String>,
}
