use super::annotation::parse_all_annotations;
use super::creation_info::parse_creation_info;
use super::dict_parsing::{optional_entity_list, parse_field_or_log_error};
use super::extracted_licensing_info::parse_extracted_licensing_info;
use super::file::parse_file;
use super::package::parse_package;
use super::relationship::parse_all_relationships;
use super::snippet::parse_snippet;
use crate::errors::SpdxParsingError;
use crate::logger::Logger;
use crate::models_spdx::Document;
use log::debug;
use serde_json::Value;

/// Builds a [`Document`] from a parsed JSON value.
///
/// Every section is attempted even after an earlier one failed, so the
/// returned error lists every problem in the input, in section order:
/// creation info, packages, files, annotations, snippets, relationships,
/// extracted licensing info.
pub fn parse_document(value: &Value) -> Result<Document, SpdxParsingError> {
    let Some(document) = value.as_object() else {
        return Err(SpdxParsingError::new(vec![
            "The top level of an SPDX document must be a JSON object".to_string(),
        ]));
    };
    let mut logger = Logger::new();

    let creation_info = parse_field_or_log_error(&mut logger, parse_creation_info(document));
    let packages = optional_entity_list(document, "packages", &mut logger, parse_package);
    let files = optional_entity_list(document, "files", &mut logger, parse_file);
    let annotations = parse_all_annotations(document, &mut logger);
    let snippets = optional_entity_list(document, "snippets", &mut logger, parse_snippet);
    let relationships = parse_all_relationships(document, &mut logger);
    let extracted_licensing_info = optional_entity_list(
        document,
        "hasExtractedLicensingInfos",
        &mut logger,
        parse_extracted_licensing_info,
    );

    let creation_info = match creation_info {
        Some(creation_info) if !logger.has_messages() => creation_info,
        _ => return Err(logger.into_error()),
    };
    debug!(
        "Parsed {}: {} packages, {} files, {} snippets, {} relationships, {} annotations",
        creation_info.spdx_id,
        packages.len(),
        files.len(),
        snippets.len(),
        relationships.len(),
        annotations.len()
    );

    Ok(Document {
        creation_info,
        packages,
        files,
        snippets,
        annotations,
        relationships,
        extracted_licensing_info,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::{DocumentConverter, TypedConverter};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn minimal_document() -> Value {
        json!({
            "SPDXID": "SPDXRef-DOCUMENT",
            "spdxVersion": "SPDX-2.3",
            "name": "doc",
            "documentNamespace": "ns",
            "creationInfo": {"creators": ["Tool: t"], "created": "2024-01-01T00:00:00Z"}
        })
    }

    #[test]
    fn test_minimal_document_parses_and_converts_back() {
        let document = parse_document(&minimal_document()).unwrap();

        assert_eq!(document.creation_info.spdx_id, "SPDXRef-DOCUMENT");
        assert_eq!(document.creation_info.name, "doc");
        assert!(document.packages.is_empty());
        assert!(document.files.is_empty());
        assert!(document.snippets.is_empty());
        assert!(document.relationships.is_empty());
        assert!(document.annotations.is_empty());
        assert!(document.extracted_licensing_info.is_empty());

        let converted = DocumentConverter.convert(&document, None).unwrap();
        assert_eq!(Value::Object(converted), minimal_document());
    }

    #[test]
    fn test_errors_from_all_sections_are_collected() {
        let err = parse_document(&json!({
            "spdxVersion": "SPDX-2.3",
            "name": "doc",
            "documentNamespace": "ns",
            "creationInfo": {"creators": ["Tool: t"], "created": "2024-01-01T00:00:00Z"},
            "packages": [{"SPDXID": "SPDXRef-Package", "name": "pkg"}],
            "files": [{"SPDXID": "SPDXRef-File", "fileName": "f", "checksums": []}],
            "relationships": [{"spdxElementId": "SPDXRef-DOCUMENT", "relatedSpdxElement": "x"}],
            "hasExtractedLicensingInfos": [{"licenseId": "LicenseRef-1"}]
        }))
        .unwrap_err();

        assert_eq!(
            err.messages(),
            [
                "Required property SPDXID not specified!",
                "Required property downloadLocation not specified!",
                "Error while constructing File: checksums must not be empty",
                "Required property relationshipType not specified!",
                "Required property extractedText not specified!"
            ]
        );
    }

    #[test]
    fn test_sections_are_parsed_without_creation_info() {
        let err = parse_document(&json!({
            "packages": [{"SPDXID": "SPDXRef-Package", "downloadLocation": "NONE"}]
        }))
        .unwrap_err();

        assert_eq!(
            err.messages(),
            [
                "Required property spdxVersion not specified!",
                "Required property SPDXID not specified!",
                "Required property name not specified!",
                "Required property documentNamespace not specified!",
                "Required property creationInfo not specified!",
                "Required property name not specified!"
            ]
        );
    }

    #[test]
    fn test_malformed_section_is_reported() {
        let mut document = minimal_document();
        document["packages"] = json!({"SPDXID": "SPDXRef-Package"});

        let err = parse_document(&document).unwrap_err();

        assert_eq!(err.messages(), ["Property packages must be a list, found an object"]);
    }

    #[test]
    fn test_top_level_must_be_an_object() {
        let err = parse_document(&json!([1, 2, 3])).unwrap_err();

        assert_eq!(err.messages().len(), 1);
    }
}
