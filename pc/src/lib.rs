//! Copilot Chat - interactive terminal client for the Pulumi Copilot API
//!
//! A user enters an organization once, then exchanges free-text queries with
//! the Copilot service. Each query is one synchronous HTTP POST; the
//! conversation id returned by the service is threaded into the next request
//! so the assistant keeps context across turns.
//!
//! # Modules
//!
//! - [`copilot`] - wire types, content decoding and the HTTP transport
//! - [`repl`] - line input, the conversation loop and reply rendering
//! - [`config`] - environment-derived configuration
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod copilot;
pub mod repl;

pub use config::{Config, ConfigError};
pub use copilot::{
    ChatMessage, ChatRequest, ChatResponse, Content, CopilotClient, CopilotError, CopilotTransport, MessageKind,
    Plan, Program, Reply, decode_content,
};
pub use repl::{ConsoleReader, InputError, LineReader, ReplSession, render_replies};
