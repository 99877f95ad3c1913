//! Copilot service module
//!
//! Wire types for the conversation endpoint, the kind-driven content decoder
//! and the HTTP transport.
//!
//! # Wire protocol
//!
//! Requests are sent with `responseFormatVersion: 2`, which selects the
//! kind-discriminated response shape: every message carries one `content`
//! payload whose type depends on `kind` (a string for responses, a program
//! object for `kind == "program"`). The older shape with a top-level
//! `programs` list and string-or-array content is not supported.

pub mod client;
mod content;
mod error;
mod http;
mod types;

pub use client::CopilotTransport;
pub use content::{Content, MessageKind, Reply, decode_content};
pub use error::CopilotError;
pub use http::CopilotClient;
pub use types::{ChatMessage, ChatRequest, ChatResponse, ClientState, CloudContext, Plan, Program, RequestState};

/// Cloud console URL sent in every request's client context
pub const PULUMI_CLOUD_URL: &str = "https://app.pulumi.com";

/// Value of the `responseFormatVersion` request header
pub const RESPONSE_FORMAT_VERSION: &str = "2";
