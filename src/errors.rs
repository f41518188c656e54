//! Error types for reading, parsing and writing SPDX documents.
//!
//! `ConverterError` stops a run; `SpdxParsingError` carries every
//! diagnostic collected while parsing.

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("I/O Error: {1} - {0}")]
    Io(#[source] std::io::Error, String),

    #[error("JSON Deserialization Error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("SPDX Parsing Error: {0}")]
    Parsing(#[from] SpdxParsingError),

    #[error("Conversion of {0} requires the enclosing document")]
    MissingDocument(&'static str),

    #[error("Unsupported SPDX version: {0}")]
    UnsupportedVersion(String),

    #[error("Unsupported Format: {0}")]
    UnsupportedFormat(String),
}

impl From<std::io::Error> for ConverterError {
    fn from(err: std::io::Error) -> Self {
        ConverterError::Io(err, "IO operation failed".to_string())
    }
}

/// Every problem found while turning a JSON value into domain objects.
///
/// Never empty: a parse either yields a fully constructed value or one of
/// these carrying at least one diagnostic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct SpdxParsingError {
    messages: Vec<String>,
}

impl SpdxParsingError {
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

impl fmt::Display for SpdxParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} problem(s) found", self.messages.len())?;
        for message in &self.messages {
            write!(f, "\n  - {}", message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsing_error_lists_every_message() {
        let err = SpdxParsingError::new(vec![
            "Required property name not specified!".to_string(),
            "Required property SPDXID not specified!".to_string(),
        ]);

        let rendered = err.to_string();
        assert!(rendered.starts_with("2 problem(s) found"));
        assert!(rendered.contains("Required property name not specified!"));
        assert!(rendered.contains("Required property SPDXID not specified!"));
    }

    #[test]
    fn test_parsing_error_wraps_into_converter_error() {
        let err: ConverterError = SpdxParsingError::new(vec!["boom".to_string()]).into();
        assert!(matches!(err, ConverterError::Parsing(_)));
        assert!(err.to_string().contains("boom"));
    }
}
