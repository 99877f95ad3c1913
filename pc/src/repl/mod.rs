//! Interactive REPL for Copilot Chat
//!
//! Reads the organization once, then loops over queries: each non-empty
//! query is one exchange with the Copilot service, rendered before the next
//! prompt. An empty query ends the session.

mod input;
mod render;
mod session;

pub use input::{ConsoleReader, InputError, LineReader};
pub use render::render_replies;
pub use session::{ORG_PROMPT, QUERY_PROMPT, ReplSession, ReplState, Session};

use std::io;

use eyre::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::copilot::CopilotClient;

/// Run the interactive REPL against the configured endpoint
///
/// This is the main entry point for `pc`.
pub fn run_interactive(config: &Config) -> Result<()> {
    let client = CopilotClient::from_config(config).context("Failed to create Copilot client")?;
    info!(endpoint = %client.endpoint(), "run_interactive: client ready");
    let mut reader = ConsoleReader::new().context("Failed to initialize readline")?;

    let mut session = ReplSession::new(Box::new(client));
    session.run(&mut reader, &mut io::stdout())
}
