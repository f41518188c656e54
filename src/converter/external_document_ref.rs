use super::properties::ExternalDocumentRefProperty;
use super::{ChecksumConverter, PropertyRule, TypedConverter, nested, text};
use crate::models_spdx::ExternalDocumentRef;

pub struct ExternalDocumentRefConverter;

static RULES: &[PropertyRule<ExternalDocumentRefProperty, ExternalDocumentRef>] = &[
    PropertyRule {
        property: ExternalDocumentRefProperty::ExternalDocumentId,
        value: |external_ref, _| text(&external_ref.document_ref_id),
    },
    PropertyRule {
        property: ExternalDocumentRefProperty::SpdxDocument,
        value: |external_ref, _| text(&external_ref.document_uri),
    },
    PropertyRule {
        property: ExternalDocumentRefProperty::Checksum,
        value: |external_ref, document| nested(&ChecksumConverter, &external_ref.checksum, document),
    },
];

impl TypedConverter for ExternalDocumentRefConverter {
    type Entity = ExternalDocumentRef;
    type Property = ExternalDocumentRefProperty;
    const ENTITY_NAME: &'static str = "ExternalDocumentRef";

    fn rules(&self) -> &'static [PropertyRule<ExternalDocumentRefProperty, ExternalDocumentRef>] {
        RULES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models_spdx::{Checksum, ChecksumAlgorithm};
    use serde_json::{Value, json};

    #[test]
    fn test_successful_conversion() {
        let checksum = Checksum::new(ChecksumAlgorithm::Sha1, "d6a770ba38583ed4bb4525bd96e50461655d2758")
            .unwrap();
        let external_ref =
            ExternalDocumentRef::new("DocumentRef-other", "https://example.com/other", checksum);

        let converted = ExternalDocumentRefConverter.convert(&external_ref, None).unwrap();

        assert_eq!(
            Value::Object(converted),
            json!({
                "externalDocumentId": "DocumentRef-other",
                "spdxDocument": "https://example.com/other",
                "checksum": {
                    "algorithm": "SHA-1",
                    "checksumValue": "d6a770ba38583ed4bb4525bd96e50461655d2758"
                }
            })
        );
    }
}
