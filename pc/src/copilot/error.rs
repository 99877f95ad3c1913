//! Copilot error types

use thiserror::Error;

/// Errors that can abandon a single conversation turn
#[derive(Debug, Error)]
pub enum CopilotError {
    #[error("error marshaling JSON: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("error making request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("received status code {status}. Response body: {body}")]
    Request { status: u16, body: String },

    #[error("error parsing response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("error processing message: content is not a {expected}: {source}")]
    ContentDecode {
        expected: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl CopilotError {
    /// HTTP status code, if the service answered with a failure status
    pub fn status(&self) -> Option<u16> {
        match self {
            CopilotError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}
