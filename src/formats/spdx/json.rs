//! SPDX JSON format handler

use crate::converter::{DocumentConverter, TypedConverter};
use crate::errors::ConverterError;
use crate::models_spdx::Document;
use crate::parser::parse_document;
use crate::version_detection;
use serde_json::Value;
use std::io::{Read, Write};

/// Read a JSON value. Malformed JSON fails here, before any SPDX parsing.
pub fn read_value<R: Read>(reader: R) -> Result<Value, ConverterError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse an SPDX document from JSON.
///
/// CycloneDX and SPDX 3 inputs are rejected before the SPDX 2.x parser runs.
pub fn parse<R: Read>(reader: R) -> Result<Document, ConverterError> {
    let value = read_value(reader)?;
    version_detection::check_supported(&version_detection::detect_format(&value))?;
    Ok(parse_document(&value)?)
}

/// Convert a document into its JSON value
pub fn to_value(doc: &Document) -> Result<Value, ConverterError> {
    Ok(Value::Object(DocumentConverter.convert(doc, None)?))
}

/// Write an SPDX document as JSON
pub fn write<W: Write>(mut writer: W, doc: &Document, pretty: bool) -> Result<(), ConverterError> {
    let value = to_value(doc)?;
    if pretty {
        serde_json::to_writer_pretty(&mut writer, &value)?;
    } else {
        serde_json::to_writer(&mut writer, &value)?;
    }
    writer
        .flush()
        .map_err(|e| ConverterError::Io(e, "Failed to flush SPDX JSON output".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const MINIMAL: &str = r#"{
        "SPDXID": "SPDXRef-DOCUMENT",
        "spdxVersion": "SPDX-2.3",
        "name": "doc",
        "documentNamespace": "ns",
        "creationInfo": {"creators": ["Tool: t"], "created": "2024-01-01T00:00:00Z"}
    }"#;

    #[test]
    fn test_parse_minimal_spdx() {
        let doc = parse(Cursor::new(MINIMAL.as_bytes())).unwrap();

        assert_eq!(doc.creation_info.spdx_version, "SPDX-2.3");
        assert!(doc.packages.is_empty());
    }

    #[test]
    fn test_invalid_json_is_a_serde_error() {
        let result = parse(Cursor::new(b"{ not json".as_slice()));

        assert!(matches!(result, Err(ConverterError::Serde(_))));
    }

    #[test]
    fn test_invalid_document_is_a_parsing_error() {
        let result = parse(Cursor::new(b"{}".as_slice()));

        match result {
            Err(ConverterError::Parsing(err)) => assert_eq!(err.messages().len(), 5),
            other => panic!("expected a parsing error, got {other:?}"),
        }
    }

    #[test]
    fn test_spdx_3_is_rejected_before_parsing() {
        let result = parse(Cursor::new(
            br#"{"@context": "https://spdx.org/rdf/3.0.1/spdx-context.jsonld", "@graph": []}"#
                .as_slice(),
        ));

        assert!(matches!(result, Err(ConverterError::UnsupportedVersion(v)) if v == "3.0"));
    }

    #[test]
    fn test_write_spdx() {
        let doc = parse(Cursor::new(MINIMAL.as_bytes())).unwrap();

        let mut compact = Vec::new();
        write(&mut compact, &doc, false).unwrap();
        let compact = String::from_utf8(compact).unwrap();
        assert!(compact.starts_with(r#"{"spdxVersion":"SPDX-2.3","SPDXID":"SPDXRef-DOCUMENT""#));
        assert!(!compact.contains('\n'));

        let mut pretty = Vec::new();
        write(&mut pretty, &doc, true).unwrap();
        assert!(String::from_utf8(pretty).unwrap().contains("\n  \"name\": \"doc\""));
    }
}
