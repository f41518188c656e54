//! Relationships come from the `relationships` array and from two shorthand
//! forms: the document's `documentDescribes` list and each package's
//! `hasFiles` list. The shorthands only add relationships the explicit list
//! does not already state, in either direction.

use super::dict_parsing::{
    JsonObject, entity_object, enum_value, from_str_value, optional, optional_entity_list,
    parse_optional_property, required, string_list_value, string_value,
};
use crate::errors::SpdxParsingError;
use crate::logger::Logger;
use crate::models_spdx::{Relationship, RelationshipType, SpdxValue};
use log::debug;
use serde_json::Value;

pub fn parse_relationship(value: &Value) -> Result<Relationship, SpdxParsingError> {
    let source = entity_object(value, "Relationship")?;
    let mut logger = Logger::new();

    let spdx_element_id = required(source, "spdxElementId", &mut logger, string_value);
    let relationship_type = required(
        source,
        "relationshipType",
        &mut logger,
        enum_value::<RelationshipType>,
    );
    let related_spdx_element = required(
        source,
        "relatedSpdxElement",
        &mut logger,
        from_str_value::<SpdxValue<String>>,
    );
    let comment = optional(source, "comment", &mut logger, string_value);

    match (spdx_element_id, relationship_type, related_spdx_element) {
        (Some(spdx_element_id), Some(relationship_type), Some(related)) if !logger.has_messages() => {
            Ok(Relationship::new(spdx_element_id, relationship_type, related, comment))
        }
        _ => Err(logger.into_error()),
    }
}

/// Explicit relationships first, then `DESCRIBES` from `documentDescribes`,
/// then `CONTAINS` from each package's `hasFiles`.
pub fn parse_all_relationships(document: &JsonObject, logger: &mut Logger) -> Vec<Relationship> {
    let mut relationships =
        optional_entity_list(document, "relationships", logger, parse_relationship);

    if let Some(document_id) = document.get("SPDXID").and_then(Value::as_str) {
        let described = optional(document, "documentDescribes", logger, string_list_value);
        for described_id in described.unwrap_or_default() {
            add_unless_stated(
                &mut relationships,
                document_id,
                RelationshipType::Describes,
                RelationshipType::DescribedBy,
                &described_id,
            );
        }
    }

    if let Some(Value::Array(packages)) = document.get("packages") {
        for package in packages.iter().filter_map(Value::as_object) {
            let Some(package_id) = package.get("SPDXID").and_then(Value::as_str) else {
                continue;
            };
            let Some(has_files) = parse_optional_property(package, "hasFiles") else {
                continue;
            };
            let file_ids = string_list_value(has_files, "hasFiles", logger).unwrap_or_default();
            for file_id in file_ids {
                add_unless_stated(
                    &mut relationships,
                    package_id,
                    RelationshipType::Contains,
                    RelationshipType::ContainedBy,
                    &file_id,
                );
            }
        }
    }

    relationships
}

/// Appends `subject forward object` unless it or `object backward subject`
/// is already present.
fn add_unless_stated(
    relationships: &mut Vec<Relationship>,
    subject: &str,
    forward: RelationshipType,
    backward: RelationshipType,
    object: &str,
) {
    let stated = relationships.iter().any(|relationship| {
        (relationship.spdx_element_id == subject
            && relationship.relationship_type == forward
            && relationship.related_id() == Some(object))
            || (relationship.spdx_element_id == object
                && relationship.relationship_type == backward
                && relationship.related_id() == Some(subject))
    });
    if stated {
        debug!("Skipping {forward:?} {subject} -> {object}, already stated");
        return;
    }
    relationships.push(Relationship::new(subject, forward, object, None));
}
