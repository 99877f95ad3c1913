//! Reply rendering

use std::io::{self, Write};

use tracing::debug;

use crate::copilot::{Content, MessageKind, Reply};

/// Write decoded replies to `out` in order
///
/// Responses print as an assistant line; programs print their instructions,
/// language and code as labeled blocks. Other kinds produce no output.
pub fn render_replies(replies: &[Reply], out: &mut dyn Write) -> io::Result<()> {
    for reply in replies {
        match (&reply.kind, &reply.content) {
            (MessageKind::Response, Content::Text(text)) => {
                write!(out, "\nAssistant: {}\n", text)?;
            }
            (MessageKind::Program, Content::Program(program)) => {
                debug!(language = %program.language, search_terms = ?program.plan.search_terms, "render_replies: program");
                write!(out, "\nInstructions:\n{}\n", program.plan.instructions)?;
                write!(out, "\nLanguage: {}\n", program.language)?;
                write!(out, "\nCode:\n{}\n", program.code)?;
            }
            (kind, _) => {
                debug!(?kind, "render_replies: skipping unrendered kind");
            }
        }
    }
    out.flush()
}
