//! CopilotTransport trait definition

use super::{ChatResponse, CopilotError};

/// One request/response exchange with the Copilot service
///
/// Implementations are stateless: the caller owns the session and passes the
/// current conversation id on every call.
pub trait CopilotTransport: Send + Sync {
    /// Send `query` for `org_id`, continuing `conversation_id` when present
    fn exchange(
        &self,
        query: &str,
        org_id: &str,
        conversation_id: Option<&str>,
    ) -> Result<ChatResponse, CopilotError>;
}
