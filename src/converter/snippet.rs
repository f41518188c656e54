use super::properties::SnippetProperty;
use super::{
    PropertyRule, PropertyValue, TypedConverter, element_annotations, optional_text, rendered,
    rendered_list, text,
};
use crate::models_spdx::{Document, Snippet};
use serde_json::{Value, json};

pub struct SnippetConverter;

static RULES: &[PropertyRule<SnippetProperty, Snippet>] = &[
    PropertyRule {
        property: SnippetProperty::SpdxId,
        value: |snippet, _| text(&snippet.spdx_id),
    },
    PropertyRule {
        property: SnippetProperty::Annotations,
        value: |snippet, document| element_annotations(&snippet.spdx_id, document),
    },
    PropertyRule {
        property: SnippetProperty::AttributionTexts,
        value: |snippet, _| rendered_list(&snippet.attribution_texts),
    },
    PropertyRule {
        property: SnippetProperty::Comment,
        value: |snippet, _| optional_text(snippet.comment.as_ref()),
    },
    PropertyRule {
        property: SnippetProperty::CopyrightText,
        value: |snippet, _| rendered(snippet.copyright_text.as_ref()),
    },
    PropertyRule {
        property: SnippetProperty::LicenseComments,
        value: |snippet, _| optional_text(snippet.license_comment.as_ref()),
    },
    PropertyRule {
        property: SnippetProperty::LicenseConcluded,
        value: |snippet, _| rendered(snippet.license_concluded.as_ref()),
    },
    PropertyRule {
        property: SnippetProperty::LicenseInfoInSnippets,
        value: |snippet, _| rendered_list(&snippet.license_info_in_snippet),
    },
    PropertyRule {
        property: SnippetProperty::Name,
        value: |snippet, _| optional_text(snippet.name.as_ref()),
    },
    PropertyRule {
        property: SnippetProperty::Ranges,
        value: ranges,
    },
    PropertyRule {
        property: SnippetProperty::SnippetFromFile,
        value: |snippet, _| text(&snippet.file_spdx_id),
    },
];

/// Byte range first, then the line range if there is one.
fn ranges(snippet: &Snippet, _: Option<&Document>) -> PropertyValue {
    let mut ranges = vec![range(
        "offset",
        snippet.byte_range,
        &snippet.file_spdx_id,
    )];
    if let Some(line_range) = snippet.line_range {
        ranges.push(range("lineNumber", line_range, &snippet.file_spdx_id));
    }
    Ok(Some(Value::Array(ranges)))
}

fn range(pointer_kind: &str, (start, end): (u64, u64), reference: &str) -> Value {
    json!({
        "startPointer": {pointer_kind: start, "reference": reference},
        "endPointer": {pointer_kind: end, "reference": reference},
    })
}

impl TypedConverter for SnippetConverter {
    type Entity = Snippet;
    type Property = SnippetProperty;
    const ENTITY_NAME: &'static str = "Snippet";

    fn rules(&self) -> &'static [PropertyRule<SnippetProperty, Snippet>] {
        RULES
    }

    fn requires_full_document(&self) -> bool {
        true
    }
}
