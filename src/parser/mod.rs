//! JSON to model parsing.
//!
//! Parsers never stop at the first problem. Each entity parser collects
//! diagnostics in its own [`Logger`](crate::logger::Logger) and hands them to
//! its caller, which keeps going with the remaining entities. A parse
//! succeeds only if no diagnostics were produced anywhere.

pub mod annotation;
pub mod checksum;
pub mod creation_info;
pub mod dict_parsing;
pub mod extracted_licensing_info;
pub mod file;
pub mod json_parser;
pub mod package;
pub mod relationship;
pub mod snippet;

pub use json_parser::parse_document;
