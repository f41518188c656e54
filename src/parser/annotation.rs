//! Annotations live in four places in the JSON: the top-level `annotations`
//! array, the legacy top-level `revieweds` array and the `annotations` of
//! each package, file and snippet. The subject of an annotation is implied
//! by where it sits.

use super::dict_parsing::{
    JsonObject, datetime_value, entity_object, enum_value, from_str_value, optional,
    parse_list_or_log_errors, parse_optional_property, required, string_value,
};
use crate::errors::SpdxParsingError;
use crate::logger::Logger;
use crate::models_spdx::{Actor, Annotation, AnnotationType};
use serde_json::Value;

/// Parses one annotation about `spdx_id`.
pub fn parse_annotation(value: &Value, spdx_id: &str) -> Result<Annotation, SpdxParsingError> {
    let source = entity_object(value, "Annotation")?;
    let mut logger = Logger::new();

    let annotator = required(source, "annotator", &mut logger, from_str_value::<Actor>);
    let annotation_type = required(source, "annotationType", &mut logger, enum_value::<AnnotationType>);
    let annotation_date = required(source, "annotationDate", &mut logger, datetime_value);
    let comment = required(source, "comment", &mut logger, string_value);

    match (annotator, annotation_type, annotation_date, comment) {
        (Some(annotator), Some(annotation_type), Some(date), Some(comment))
            if !logger.has_messages() =>
        {
            Ok(Annotation::new(spdx_id, annotation_type, annotator, date, comment))
        }
        _ => Err(logger.into_error()),
    }
}

/// Parses a legacy `revieweds` entry into a REVIEW annotation.
pub fn parse_review(value: &Value, spdx_id: &str) -> Result<Annotation, SpdxParsingError> {
    let source = entity_object(value, "Review")?;
    let mut logger = Logger::new();

    let reviewer = required(source, "reviewer", &mut logger, from_str_value::<Actor>);
    let review_date = required(source, "reviewDate", &mut logger, datetime_value);
    let comment = optional(source, "comment", &mut logger, string_value);

    match (reviewer, review_date) {
        (Some(reviewer), Some(date)) if !logger.has_messages() => Ok(Annotation::new(
            spdx_id,
            AnnotationType::Review,
            reviewer,
            date,
            comment.unwrap_or_default(),
        )),
        _ => Err(logger.into_error()),
    }
}

/// Collects every annotation in the document, in this order: top-level,
/// reviews, then those nested in packages, files and snippets.
pub fn parse_all_annotations(document: &JsonObject, logger: &mut Logger) -> Vec<Annotation> {
    // A missing SPDXID is reported by the creation info parser.
    let document_id = document
        .get("SPDXID")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let mut annotations = Vec::new();

    if let Some(value) = parse_optional_property(document, "annotations") {
        annotations.extend(parse_list_or_log_errors(value, "annotations", logger, |item| {
            parse_annotation(item, document_id)
        }));
    }
    if let Some(value) = parse_optional_property(document, "revieweds") {
        annotations.extend(parse_list_or_log_errors(value, "revieweds", logger, |item| {
            parse_review(item, document_id)
        }));
    }

    for section in ["packages", "files", "snippets"] {
        // Malformed sections are reported by their own parsers.
        let Some(Value::Array(elements)) = document.get(section) else {
            continue;
        };
        for element in elements.iter().filter_map(Value::as_object) {
            let (Some(element_id), Some(value)) = (
                element.get("SPDXID").and_then(Value::as_str),
                parse_optional_property(element, "annotations"),
            ) else {
                continue;
            };
            annotations.extend(parse_list_or_log_errors(value, "annotations", logger, |item| {
                parse_annotation(item, element_id)
            }));
        }
    }

    annotations
}
