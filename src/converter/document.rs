use super::properties::DocumentProperty;
use super::{
    AnnotationConverter, CreationInfoConverter, ExternalDocumentRefConverter,
    ExtractedLicensingInfoConverter, FileConverter, PackageConverter, PropertyRule,
    RelationshipConverter, SnippetConverter, TypedConverter, nested, nested_list, optional_text,
    text,
};
use crate::models_spdx::Document;

/// Converts a whole document.
///
/// Creation info is split in two tiers: identity fields at top level and
/// `creators`/`created`/`comment`/`licenseListVersion` under `creationInfo`.
/// Annotations on packages, files and snippets are nested in those elements;
/// the top-level `annotations` array keeps the rest.
pub struct DocumentConverter;

static RULES: &[PropertyRule<DocumentProperty, Document>] = &[
    PropertyRule {
        property: DocumentProperty::SpdxVersion,
        value: |document, _| text(&document.creation_info.spdx_version),
    },
    PropertyRule {
        property: DocumentProperty::SpdxId,
        value: |document, _| text(&document.creation_info.spdx_id),
    },
    PropertyRule {
        property: DocumentProperty::Name,
        value: |document, _| text(&document.creation_info.name),
    },
    PropertyRule {
        property: DocumentProperty::DocumentNamespace,
        value: |document, _| text(&document.creation_info.document_namespace),
    },
    PropertyRule {
        property: DocumentProperty::CreationInfo,
        value: |document, _| nested(&CreationInfoConverter, &document.creation_info, Some(document)),
    },
    PropertyRule {
        property: DocumentProperty::Comment,
        value: |document, _| optional_text(document.creation_info.document_comment.as_ref()),
    },
    PropertyRule {
        property: DocumentProperty::DataLicense,
        value: |document, _| optional_text(document.creation_info.data_license.as_ref()),
    },
    PropertyRule {
        property: DocumentProperty::ExternalDocumentRefs,
        value: |document, _| {
            nested_list(
                &ExternalDocumentRefConverter,
                &document.creation_info.external_document_refs,
                Some(document),
            )
        },
    },
    PropertyRule {
        property: DocumentProperty::Packages,
        value: |document, _| nested_list(&PackageConverter, &document.packages, Some(document)),
    },
    PropertyRule {
        property: DocumentProperty::Files,
        value: |document, _| nested_list(&FileConverter, &document.files, Some(document)),
    },
    PropertyRule {
        property: DocumentProperty::Snippets,
        value: |document, _| nested_list(&SnippetConverter, &document.snippets, Some(document)),
    },
    PropertyRule {
        property: DocumentProperty::Relationships,
        value: |document, _| {
            nested_list(&RelationshipConverter, &document.relationships, Some(document))
        },
    },
    PropertyRule {
        property: DocumentProperty::Annotations,
        value: |document, _| {
            let document_level = document
                .annotations
                .iter()
                .filter(|annotation| !document.is_element(&annotation.spdx_id));
            nested_list(&AnnotationConverter, document_level, Some(document))
        },
    },
    PropertyRule {
        property: DocumentProperty::HasExtractedLicensingInfos,
        value: |document, _| {
            nested_list(
                &ExtractedLicensingInfoConverter,
                &document.extracted_licensing_info,
                Some(document),
            )
        },
    },
];

impl TypedConverter for DocumentConverter {
    type Entity = Document;
    type Property = DocumentProperty;
    const ENTITY_NAME: &'static str = "Document";

    fn rules(&self) -> &'static [PropertyRule<DocumentProperty, Document>] {
        RULES
    }
}
