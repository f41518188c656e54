use super::dict_parsing::{
    JsonObject, construct_or_raise_parsing_error, entity_object, from_str_value, list_value,
    object_value, optional, parse_field_or_log_error, required, string_list_value, string_value,
    u64_value,
};
use super::package::{license_list_value, license_value};
use crate::errors::SpdxParsingError;
use crate::logger::Logger;
use crate::models_spdx::{Snippet, SpdxValue};
use serde_json::Value;
use std::fmt;

type Range = (u64, u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PointerKind {
    Byte,
    Line,
}

impl fmt::Display for PointerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointerKind::Byte => f.write_str("byte"),
            PointerKind::Line => f.write_str("line"),
        }
    }
}

pub fn parse_snippet(value: &Value) -> Result<Snippet, SpdxParsingError> {
    let source = entity_object(value, "Snippet")?;
    let mut logger = Logger::new();

    let spdx_id = required(source, "SPDXID", &mut logger, string_value);
    let file_spdx_id = required(source, "snippetFromFile", &mut logger, string_value);
    let ranges = required(source, "ranges", &mut logger, ranges_value);

    let license_concluded = optional(source, "licenseConcluded", &mut logger, license_value);
    let license_info_in_snippet =
        optional(source, "licenseInfoInSnippets", &mut logger, license_list_value);
    let license_comment = optional(source, "licenseComments", &mut logger, string_value);
    let copyright_text = optional(
        source,
        "copyrightText",
        &mut logger,
        from_str_value::<SpdxValue<String>>,
    );
    let comment = optional(source, "comment", &mut logger, string_value);
    let name = optional(source, "name", &mut logger, string_value);
    let attribution_texts = optional(source, "attributionTexts", &mut logger, string_list_value);

    let (Some(spdx_id), Some(file_spdx_id), Some((byte_range, line_range))) =
        (spdx_id, file_spdx_id, ranges)
    else {
        return Err(logger.into_error());
    };
    let constructed = Snippet::new(spdx_id, file_spdx_id, byte_range).and_then(|snippet| {
        match line_range {
            Some(line_range) => snippet.with_line_range(line_range),
            None => Ok(snippet),
        }
    });
    let constructed = construct_or_raise_parsing_error("Snippet", constructed);
    let mut snippet = match parse_field_or_log_error(&mut logger, constructed) {
        Some(snippet) if !logger.has_messages() => snippet,
        _ => return Err(logger.into_error()),
    };
    snippet.license_concluded = license_concluded;
    snippet.license_info_in_snippet = license_info_in_snippet.unwrap_or_default();
    snippet.license_comment = license_comment;
    snippet.copyright_text = copyright_text;
    snippet.comment = comment;
    snippet.name = name;
    snippet.attribution_texts = attribution_texts.unwrap_or_default();
    Ok(snippet)
}

/// The byte range is mandatory, the line range optional.
fn ranges_value(
    value: &Value,
    property_name: &str,
    logger: &mut Logger,
) -> Option<(Range, Option<Range>)> {
    let mut byte_range = None;
    let mut line_range = None;
    let mut complete = true;

    for range in list_value(value, property_name, logger)? {
        let Some((kind, range)) = parse_range(range, logger) else {
            complete = false;
            continue;
        };
        let slot = match kind {
            PointerKind::Byte => &mut byte_range,
            PointerKind::Line => &mut line_range,
        };
        if slot.is_some() {
            logger.append(format!("Snippet ranges must contain at most one {kind} range"));
            complete = false;
            continue;
        }
        *slot = Some(range);
    }

    if !complete {
        return None;
    }
    if byte_range.is_none() {
        logger.append("Snippet ranges must contain a byte range");
    }
    byte_range.map(|byte_range| (byte_range, line_range))
}

fn parse_range(value: &Value, logger: &mut Logger) -> Option<(PointerKind, Range)> {
    let range = object_value(value, "ranges", logger)?;
    let start = required(range, "startPointer", logger, object_value);
    let end = required(range, "endPointer", logger, object_value);
    let (start, end) = (start?, end?);

    let (start_kind, start) = parse_pointer(start, "startPointer", logger)?;
    let (end_kind, end) = parse_pointer(end, "endPointer", logger)?;
    if start_kind != end_kind {
        logger.append("Start and end pointer of a snippet range must be of the same kind");
        return None;
    }
    Some((start_kind, (start, end)))
}

fn parse_pointer(
    pointer: &JsonObject,
    pointer_name: &str,
    logger: &mut Logger,
) -> Option<(PointerKind, u64)> {
    if let Some(offset) = pointer.get("offset") {
        return u64_value(offset, "offset", logger).map(|offset| (PointerKind::Byte, offset));
    }
    if let Some(line_number) = pointer.get("lineNumber") {
        return u64_value(line_number, "lineNumber", logger)
            .map(|line_number| (PointerKind::Line, line_number));
    }
    logger.append(format!("{pointer_name} must contain offset or lineNumber"));
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn range(kind: &str, start: u64, end: u64) -> Value {
        json!({
            "startPointer": {"reference": "SPDXRef-File", kind: start},
            "endPointer": {"reference": "SPDXRef-File", kind: end}
        })
    }

    #[test]
    fn test_parse_snippet() {
        let snippet = parse_snippet(&json!({
            "SPDXID": "SPDXRef-Snippet",
            "snippetFromFile": "SPDXRef-File",
            "ranges": [range("lineNumber", 5, 23), range("offset", 310, 420)],
            "licenseConcluded": "GPL-2.0-only",
            "licenseInfoInSnippets": ["GPL-2.0-only"],
            "copyrightText": "Copyright 2008-2010 John Smith",
            "name": "from linux kernel"
        }))
        .unwrap();

        assert_eq!(snippet.spdx_id, "SPDXRef-Snippet");
        assert_eq!(snippet.file_spdx_id, "SPDXRef-File");
        assert_eq!(snippet.byte_range, (310, 420));
        assert_eq!(snippet.line_range, Some((5, 23)));
        assert_eq!(snippet.name.as_deref(), Some("from linux kernel"));
        assert_eq!(snippet.license_info_in_snippet.len(), 1);
    }

    #[test]
    fn test_missing_byte_range() {
        let err = parse_snippet(&json!({
            "SPDXID": "SPDXRef-Snippet",
            "snippetFromFile": "SPDXRef-File",
            "ranges": [range("lineNumber", 5, 23)]
        }))
        .unwrap_err();

        assert_eq!(err.messages(), ["Snippet ranges must contain a byte range"]);
    }

    #[test]
    fn test_repeated_ranges_are_reported() {
        let err = parse_snippet(&json!({
            "SPDXID": "SPDXRef-Snippet",
            "snippetFromFile": "SPDXRef-File",
            "ranges": [
                range("offset", 1, 5),
                range("offset", 10, 20),
                range("lineNumber", 1, 2),
                range("lineNumber", 4, 9)
            ]
        }))
        .unwrap_err();

        assert_eq!(
            err.messages(),
            [
                "Snippet ranges must contain at most one byte range",
                "Snippet ranges must contain at most one line range"
            ]
        );
    }

    #[test]
    fn test_reversed_range_is_a_construction_error() {
        let err = parse_snippet(&json!({
            "SPDXID": "SPDXRef-Snippet",
            "snippetFromFile": "SPDXRef-File",
            "ranges": [range("offset", 420, 310)]
        }))
        .unwrap_err();

        assert_eq!(
            err.messages(),
            ["Error while constructing Snippet: byte range start 420 is after end 310"]
        );
    }

    #[test]
    fn test_malformed_pointers() {
        let err = parse_snippet(&json!({
            "SPDXID": "SPDXRef-Snippet",
            "snippetFromFile": "SPDXRef-File",
            "ranges": [{
                "startPointer": {"offset": 1},
                "endPointer": {"lineNumber": 2}
            }, {
                "startPointer": {"reference": "SPDXRef-File"}
            }]
        }))
        .unwrap_err();

        assert_eq!(
            err.messages(),
            [
                "Start and end pointer of a snippet range must be of the same kind",
                "Required property endPointer not specified!"
            ]
        );
    }
}
