use super::checksum::parse_checksum;
use super::dict_parsing::{
    JsonObject, construct_or_raise_parsing_error, datetime_value, entity_object, from_str_value,
    list_of, object_value, optional, optional_entity_list, parse_field_or_log_error,
    parse_required_property, required, string_value,
};
use crate::errors::SpdxParsingError;
use crate::logger::Logger;
use crate::models_spdx::{Actor, Checksum, CreationInfo, ExternalDocumentRef};
use serde_json::Value;

/// Reads creation info from the document's top level and its nested
/// `creationInfo` object.
///
/// Without `creationInfo` the nested required fields cannot be looked up, so
/// parsing stops there with whatever has been reported so far.
pub fn parse_creation_info(document: &JsonObject) -> Result<CreationInfo, SpdxParsingError> {
    let mut logger = Logger::new();

    let spdx_version = required(document, "spdxVersion", &mut logger, string_value);
    let spdx_id = required(document, "SPDXID", &mut logger, string_value);
    let name = required(document, "name", &mut logger, string_value);
    let document_namespace = required(document, "documentNamespace", &mut logger, string_value);
    let Some(creation_info) = required(document, "creationInfo", &mut logger, object_value) else {
        return Err(logger.into_error());
    };

    let creators = required(creation_info, "creators", &mut logger, |value, name, logger| {
        list_of(value, name, logger, from_str_value::<Actor>)
    });
    let created = required(creation_info, "created", &mut logger, datetime_value);

    let creator_comment = optional(creation_info, "comment", &mut logger, string_value);
    let license_list_version =
        optional(creation_info, "licenseListVersion", &mut logger, string_value);
    let data_license = optional(document, "dataLicense", &mut logger, string_value);
    let document_comment = optional(document, "comment", &mut logger, string_value);
    let external_document_refs = optional_entity_list(
        document,
        "externalDocumentRefs",
        &mut logger,
        parse_external_document_ref,
    );

    let (
        Some(spdx_version),
        Some(spdx_id),
        Some(name),
        Some(document_namespace),
        Some(creators),
        Some(created),
    ) = (spdx_version, spdx_id, name, document_namespace, creators, created)
    else {
        return Err(logger.into_error());
    };
    let constructed = construct_or_raise_parsing_error(
        "CreationInfo",
        CreationInfo::new(spdx_version, spdx_id, name, document_namespace, creators, created),
    );
    let mut creation_info = match parse_field_or_log_error(&mut logger, constructed) {
        Some(creation_info) if !logger.has_messages() => creation_info,
        _ => return Err(logger.into_error()),
    };
    creation_info.creator_comment = creator_comment;
    creation_info.license_list_version = license_list_version;
    creation_info.data_license = data_license;
    creation_info.document_comment = document_comment;
    creation_info.external_document_refs = external_document_refs;
    Ok(creation_info)
}

pub fn parse_external_document_ref(value: &Value) -> Result<ExternalDocumentRef, SpdxParsingError> {
    let source = entity_object(value, "ExternalDocumentRef")?;
    let mut logger = Logger::new();

    let document_ref_id = required(source, "externalDocumentId", &mut logger, string_value);
    let document_uri = required(source, "spdxDocument", &mut logger, string_value);
    let checksum = parse_required_checksum(source, &mut logger);

    match (document_ref_id, document_uri, checksum) {
        (Some(id), Some(uri), Some(checksum)) if !logger.has_messages() => {
            Ok(ExternalDocumentRef::new(id, uri, checksum))
        }
        _ => Err(logger.into_error()),
    }
}

fn parse_required_checksum(source: &JsonObject, logger: &mut Logger) -> Option<Checksum> {
    let value = parse_required_property(source, "checksum", logger)?;
    parse_field_or_log_error(logger, parse_checksum(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models_spdx::{ActorType, ChecksumAlgorithm};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse(value: Value) -> Result<CreationInfo, SpdxParsingError> {
        parse_creation_info(value.as_object().unwrap())
    }

    #[test]
    fn test_parse_creation_info() {
        let creation_info = parse(json!({
            "spdxVersion": "SPDX-2.3",
            "SPDXID": "SPDXRef-DOCUMENT",
            "name": "Example Document",
            "documentNamespace": "https://example.com/doc",
            "dataLicense": "CC0-1.0",
            "comment": "document comment",
            "externalDocumentRefs": [{
                "externalDocumentId": "DocumentRef-spdx-tool",
                "spdxDocument": "https://example.com/tool",
                "checksum": {"algorithm": "SHA1", "checksumValue": "d6a770ba"}
            }],
            "creationInfo": {
                "creators": ["Tool: LicenseFind-1.0", "Organization: ExampleCodeInspect ()"],
                "created": "2010-01-29T18:30:22Z",
                "comment": "creator comment",
                "licenseListVersion": "3.7"
            }
        }))
        .unwrap();

        assert_eq!(creation_info.spdx_version, "SPDX-2.3");
        assert_eq!(creation_info.name, "Example Document");
        assert_eq!(
            creation_info.creators,
            [
                Actor::new(ActorType::Tool, "LicenseFind-1.0", None),
                Actor::new(ActorType::Organization, "ExampleCodeInspect", None)
            ]
        );
        assert_eq!(creation_info.created, Utc.with_ymd_and_hms(2010, 1, 29, 18, 30, 22).unwrap());
        assert_eq!(creation_info.creator_comment.as_deref(), Some("creator comment"));
        assert_eq!(creation_info.license_list_version.as_deref(), Some("3.7"));
        assert_eq!(creation_info.data_license.as_deref(), Some("CC0-1.0"));
        assert_eq!(creation_info.document_comment.as_deref(), Some("document comment"));
        assert_eq!(
            creation_info.external_document_refs,
            [ExternalDocumentRef::new(
                "DocumentRef-spdx-tool",
                "https://example.com/tool",
                Checksum::new(ChecksumAlgorithm::Sha1, "d6a770ba").unwrap()
            )]
        );
    }

    #[test]
    fn test_missing_creation_info_stops_early() {
        let err = parse(json!({"spdxVersion": "SPDX-2.3", "name": "doc"})).unwrap_err();

        assert_eq!(
            err.messages(),
            [
                "Required property SPDXID not specified!",
                "Required property documentNamespace not specified!",
                "Required property creationInfo not specified!"
            ]
        );
    }

    #[test]
    fn test_missing_nested_fields() {
        let err = parse(json!({
            "spdxVersion": "SPDX-2.3",
            "SPDXID": "SPDXRef-DOCUMENT",
            "name": "doc",
            "documentNamespace": "ns",
            "creationInfo": {"created": "2024-01-01T00:00:00Z"}
        }))
        .unwrap_err();

        assert_eq!(err.messages(), ["Required property creators not specified!"]);
    }

    #[test]
    fn test_empty_creators_is_a_construction_error() {
        let err = parse(json!({
            "spdxVersion": "SPDX-2.3",
            "SPDXID": "SPDXRef-DOCUMENT",
            "name": "doc",
            "documentNamespace": "ns",
            "creationInfo": {"creators": [], "created": "2024-01-01T00:00:00Z"}
        }))
        .unwrap_err();

        assert_eq!(
            err.messages(),
            ["Error while constructing CreationInfo: creators must not be empty"]
        );
    }
}
