//! REPL session management

use std::io::Write;

use colored::Colorize;
use eyre::Result;
use tracing::{debug, info, warn};

use super::input::LineReader;
use super::render::render_replies;
use crate::copilot::{CopilotError, CopilotTransport, Reply};

/// Prompt for the organization, shown once
pub const ORG_PROMPT: &str = "Enter your organization: ";

/// Prompt for each query
pub const QUERY_PROMPT: &str = "You: ";

/// Conversation state owned by the loop
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub org_id: String,
    pub conversation_id: Option<String>,
}

/// Where the loop currently is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplState {
    AwaitingOrg,
    Chatting,
}

/// Interactive Copilot session
pub struct ReplSession {
    transport: Box<dyn CopilotTransport>,
    session: Session,
    state: ReplState,
}

impl ReplSession {
    /// Create a new session awaiting the organization
    pub fn new(transport: Box<dyn CopilotTransport>) -> Self {
        Self {
            transport,
            session: Session::default(),
            state: ReplState::AwaitingOrg,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> &ReplState {
        &self.state
    }

    /// Run the REPL main loop until the user exits or input ends
    pub fn run(&mut self, reader: &mut dyn LineReader, out: &mut dyn Write) -> Result<()> {
        loop {
            match self.state {
                ReplState::AwaitingOrg => match reader.read_line(ORG_PROMPT) {
                    Ok(Some(org_id)) => {
                        info!(%org_id, "run: organization set");
                        self.session.org_id = org_id;
                        self.state = ReplState::Chatting;
                        writeln!(out, "\nEnter your questions (press Enter twice to exit):")?;
                    }
                    Ok(None) => {
                        debug!("run: input closed before organization");
                        return Ok(());
                    }
                    Err(err) => {
                        warn!(error = %err, "run: failed to read organization");
                        writeln!(out, "{} {}", "Error reading organization:".red(), err)?;
                    }
                },
                ReplState::Chatting => {
                    writeln!(out)?;
                    out.flush()?;
                    match reader.read_line(QUERY_PROMPT) {
                        Ok(Some(query)) if !query.is_empty() => {
                            reader.remember(&query);
                            match self.process_query(&query) {
                                Ok(replies) => render_replies(&replies, out)?,
                                Err(err) => {
                                    warn!(error = %err, status = ?err.status(), "run: turn abandoned");
                                    writeln!(out, "{} {}", "Error:".red(), err)?;
                                }
                            }
                        }
                        Ok(_) => {
                            info!("run: exiting on empty query");
                            writeln!(out, "Goodbye!")?;
                            return Ok(());
                        }
                        Err(err) => {
                            warn!(error = %err, "run: failed to read query");
                            writeln!(out, "{} {}", "Error reading query:".red(), err)?;
                        }
                    }
                }
            }
        }
    }

    /// Exchange one query with the service and decode the replies
    ///
    /// The conversation id is only replaced once the whole response decoded;
    /// a failed turn leaves the session untouched.
    pub fn process_query(&mut self, query: &str) -> Result<Vec<Reply>, CopilotError> {
        debug!(%query, conversation_id = ?self.session.conversation_id, "process_query: called");
        let response = self
            .transport
            .exchange(query, &self.session.org_id, self.session.conversation_id.as_deref())?;

        let replies = response.replies()?;
        self.session.conversation_id = Some(response.conversation_id);
        debug!(reply_count = replies.len(), "process_query: success");
        Ok(replies)
    }
}
