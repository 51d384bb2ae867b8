//! Line input for the interactive loops
//!
//! The wizard and the chat REPL read through [`LineSource`], so the same
//! loop runs against a terminal line editor or a scripted input in tests.

use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use std::io;

/// One read from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Ctrl-C
    Interrupted,
    /// Ctrl-D or end of input
    Eof,
}

/// Source of user input lines
pub trait LineSource {
    fn read_line(&mut self) -> io::Result<Input>;
}

/// [`LineSource`] backed by a reedline editor.
///
/// History lives only in memory for the session.
pub struct ReedlineInput {
    editor: Reedline,
    prompt: DefaultPrompt,
}

impl ReedlineInput {
    pub fn new(prompt: &str) -> Self {
        Self {
            editor: Reedline::create(),
            prompt: DefaultPrompt::new(
                DefaultPromptSegment::Basic(prompt.to_string()),
                DefaultPromptSegment::Empty,
            ),
        }
    }
}

impl LineSource for ReedlineInput {
    fn read_line(&mut self) -> io::Result<Input> {
        match self.editor.read_line(&self.prompt)? {
            Signal::Success(line) => Ok(Input::Line(line)),
            Signal::CtrlD => Ok(Input::Eof),
            _ => Ok(Input::Interrupted),
        }
    }
}
