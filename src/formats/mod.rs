//! Format detection and definition module.
//!
//! SPDX documents come in several serializations. Only JSON is read and
//! written here; the others are recognised so they can be rejected with a
//! clear message instead of a JSON syntax error.

pub mod spdx;

use crate::errors::ConverterError;
use std::path::Path;

/// SPDX serializations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    /// `Tag: value` lines, usually `.spdx`
    TagValue,
    Xml,
    Yaml,
    /// RDF/XML
    Rdf,
}

impl Format {
    /// Detect format from file extension. `None` for unknown extensions.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "json" => Some(Format::Json),
            "spdx" | "tv" => Some(Format::TagValue),
            "xml" => Some(Format::Xml),
            "yaml" | "yml" => Some(Format::Yaml),
            "rdf" => Some(Format::Rdf),
            _ => None,
        }
    }

    /// Detect format from the first non-blank bytes of the content
    pub fn from_content(content: &[u8]) -> Result<Self, ConverterError> {
        let start = content
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .ok_or_else(|| ConverterError::UnsupportedFormat("Empty file content".to_string()))?;
        let trimmed = &content[start..];

        match trimmed[0] {
            b'{' | b'[' => Ok(Format::Json),
            b'<' if contains(trimmed, b"rdf:RDF") => Ok(Format::Rdf),
            b'<' => Ok(Format::Xml),
            _ if trimmed.starts_with(b"SPDXVersion:") => Ok(Format::TagValue),
            _ if trimmed.starts_with(b"---") || trimmed.starts_with(b"spdxVersion:") => {
                Ok(Format::Yaml)
            }
            _ => Err(ConverterError::UnsupportedFormat(
                "Could not detect format from content. Expected JSON (starts with '{')"
                    .to_string(),
            )),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::TagValue => "tag-value",
            Format::Xml => "XML",
            Format::Yaml => "YAML",
            Format::Rdf => "RDF/XML",
        }
    }

    /// Fails for every serialization this crate cannot read.
    pub fn ensure_supported(self) -> Result<(), ConverterError> {
        match self {
            Format::Json => Ok(()),
            other => Err(ConverterError::UnsupportedFormat(format!(
                "SPDX {} input is not supported, convert it to JSON first",
                other.name()
            ))),
        }
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_extension() {
        assert_eq!(Format::from_extension(&PathBuf::from("test.json")), Some(Format::Json));
        assert_eq!(Format::from_extension(&PathBuf::from("TEST.JSON")), Some(Format::Json));
        assert_eq!(Format::from_extension(&PathBuf::from("sbom.spdx")), Some(Format::TagValue));
        assert_eq!(Format::from_extension(&PathBuf::from("sbom.yml")), Some(Format::Yaml));
        assert_eq!(Format::from_extension(&PathBuf::from("sbom.rdf")), Some(Format::Rdf));
        assert_eq!(Format::from_extension(&PathBuf::from("test.txt")), None);
        assert_eq!(Format::from_extension(&PathBuf::from("test")), None);
    }

    #[test]
    fn test_from_content() {
        assert_eq!(Format::from_content(b"  \n  {\"spdxVersion\": \"SPDX-2.3\"}").unwrap(), Format::Json);
        assert_eq!(Format::from_content(b"SPDXVersion: SPDX-2.3\n").unwrap(), Format::TagValue);
        assert_eq!(Format::from_content(b"<?xml version=\"1.0\"?><Document/>").unwrap(), Format::Xml);
        assert_eq!(
            Format::from_content(b"<rdf:RDF xmlns:rdf=\"x\"></rdf:RDF>").unwrap(),
            Format::Rdf
        );
        assert_eq!(Format::from_content(b"spdxVersion: SPDX-2.3\n").unwrap(), Format::Yaml);
        assert!(Format::from_content(b"").is_err());
        assert!(Format::from_content(b"   ").is_err());
        assert!(Format::from_content(b"invalid").is_err());
    }

    #[test]
    fn test_only_json_is_supported() {
        assert!(Format::Json.ensure_supported().is_ok());
        let err = Format::TagValue.ensure_supported().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported Format: SPDX tag-value input is not supported, convert it to JSON first"
        );
    }
}
