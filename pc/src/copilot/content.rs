//! Kind-driven decoding of message content

use serde::Deserialize;
use tracing::debug;

use super::{ChatResponse, CopilotError, Program};

/// Message kind discriminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageKind {
    /// Plain assistant reply (`kind` absent, empty or `"response"`)
    Response,
    /// Generated program (`kind == "program"`)
    Program,
    /// Any other tag; carried as text, never rendered
    Other(String),
}

impl MessageKind {
    pub fn parse(kind: Option<&str>) -> Self {
        match kind {
            None | Some("") | Some("response") => MessageKind::Response,
            Some("program") => MessageKind::Program,
            Some(other) => MessageKind::Other(other.to_string()),
        }
    }
}

/// Decoded message payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Program(Program),
}

/// An assistant message with its content decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub kind: MessageKind,
    pub content: Content,
}

/// Decode `payload` according to `kind`
///
/// Programs must be program objects; every other kind must be a single string.
pub fn decode_content(kind: &MessageKind, payload: &serde_json::Value) -> Result<Content, CopilotError> {
    match kind {
        MessageKind::Program => Program::deserialize(payload)
            .map(Content::Program)
            .map_err(|source| CopilotError::ContentDecode {
                expected: "program object",
                source,
            }),
        MessageKind::Response | MessageKind::Other(_) => String::deserialize(payload)
            .map(Content::Text)
            .map_err(|source| CopilotError::ContentDecode {
                expected: "string",
                source,
            }),
    }
}

impl ChatResponse {
    /// Decode every assistant message, in order
    ///
    /// Messages from other roles are skipped without decoding. The first
    /// content that does not match its kind fails the whole response.
    pub fn replies(&self) -> Result<Vec<Reply>, CopilotError> {
        debug!(message_count = %self.messages.len(), "replies: called");
        self.messages
            .iter()
            .filter(|msg| msg.is_assistant())
            .map(|msg| {
                let kind = MessageKind::parse(msg.kind.as_deref());
                let content = decode_content(&kind, &msg.content)?;
                Ok(Reply { kind, content })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copilot::Plan;
    use serde_json::json;

    #[test]
    fn test_parse_kind() {
        assert_eq!(MessageKind::parse(None), MessageKind::Response);
        assert_eq!(MessageKind::parse(Some("")), MessageKind::Response);
        assert_eq!(MessageKind::parse(Some("response")), MessageKind::Response);
        assert_eq!(MessageKind::parse(Some("program")), MessageKind::Program);
        assert_eq!(MessageKind::parse(Some("status")), MessageKind::Other("status".to_string()));
    }

    #[test]
    fn test_decode_text() {
        let content = decode_content(&MessageKind::Response, &json!("hello")).unwrap();
        assert_eq!(content, Content::Text("hello".to_string()));
    }

    #[test]
    fn test_decode_program() {
        let payload = json!({
            "language": "typescript",
            "code": "new aws.s3.Bucket(\"b\");",
            "plan": {"instructions": "Create a bucket", "searchTerms": ["s3", "bucket"]}
        });
        let content = decode_content(&MessageKind::Program, &payload).unwrap();
        assert_eq!(
            content,
            Content::Program(Program {
                language: "typescript".to_string(),
                code: "new aws.s3.Bucket(\"b\");".to_string(),
                plan: Plan {
                    instructions: "Create a bucket".to_string(),
                    search_terms: vec!["s3".to_string(), "bucket".to_string()],
                },
            })
        );
    }

    #[test]
    fn test_program_kind_rejects_string_payload() {
        let err = decode_content(&MessageKind::Program, &json!("print(1)")).unwrap_err();
        assert!(matches!(
            err,
            CopilotError::ContentDecode {
                expected: "program object",
                ..
            }
        ));
    }

    #[test]
    fn test_response_kind_rejects_number() {
        let err = decode_content(&MessageKind::Response, &json!(42)).unwrap_err();
        assert!(matches!(err, CopilotError::ContentDecode { expected: "string", .. }));
    }

    #[test]
    fn test_response_kind_rejects_string_array() {
        let err = decode_content(&MessageKind::Response, &json!(["a", "b"])).unwrap_err();
        assert!(matches!(err, CopilotError::ContentDecode { .. }));
    }

    #[test]
    fn test_other_kind_decodes_as_text() {
        let content = decode_content(&MessageKind::Other("status".to_string()), &json!("thinking")).unwrap();
        assert_eq!(content, Content::Text("thinking".to_string()));
    }

    #[test]
    fn test_other_kind_rejects_number() {
        let err = decode_content(&MessageKind::Other("status".to_string()), &json!(42)).unwrap_err();
        assert!(matches!(err, CopilotError::ContentDecode { expected: "string", .. }));
    }

    #[test]
    fn test_replies_skip_non_assistant_roles() {
        let resp: ChatResponse = serde_json::from_value(json!({
            "conversationId": "c",
            "messages": [
                {"role": "user", "content": 7},
                {"role": "assistant", "content": "hi"}
            ]
        }))
        .unwrap();

        let replies = resp.replies().unwrap();
        assert_eq!(
            replies,
            vec![Reply {
                kind: MessageKind::Response,
                content: Content::Text("hi".to_string()),
            }]
        );
    }

    #[test]
    fn test_replies_fail_on_mismatched_content() {
        let resp: ChatResponse = serde_json::from_value(json!({
            "conversationId": "c",
            "messages": [
                {"role": "assistant", "content": "fine"},
                {"role": "assistant", "kind": "program", "content": "not a program"}
            ]
        }))
        .unwrap();

        assert!(resp.replies().is_err());
    }
}
