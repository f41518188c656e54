//! Ordered, append-only collector for parsing diagnostics.
//!
//! One `Logger` lives for the duration of a single parse call and is passed
//! by `&mut` to every nested parser. Nothing here is global.

use crate::errors::SpdxParsingError;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Logger {
    messages: Vec<String>,
}

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn append_all<I>(&mut self, messages: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.messages.extend(messages);
    }

    pub fn has_messages(&self) -> bool {
        !self.messages.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Turns the collected messages into an error unconditionally.
    ///
    /// Only called after some required field came back empty, which always
    /// leaves a message behind.
    pub fn into_error(mut self) -> SpdxParsingError {
        if self.messages.is_empty() {
            self.messages.push("Parsing failed without a diagnostic".to_string());
        }
        SpdxParsingError::new(self.messages)
    }
}
