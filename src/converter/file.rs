use super::properties::FileProperty;
use super::{
    ChecksumConverter, PropertyRule, TypedConverter, element_annotations, enum_names, nested_list,
    optional_text, rendered, rendered_list, text,
};
use crate::models_spdx::File;

pub struct FileConverter;

static RULES: &[PropertyRule<FileProperty, File>] = &[
    PropertyRule {
        property: FileProperty::SpdxId,
        value: |file, _| text(&file.spdx_id),
    },
    PropertyRule {
        property: FileProperty::Annotations,
        value: |file, document| element_annotations(&file.spdx_id, document),
    },
    PropertyRule {
        property: FileProperty::AttributionTexts,
        value: |file, _| rendered_list(&file.attribution_texts),
    },
    PropertyRule {
        property: FileProperty::Checksums,
        value: |file, document| nested_list(&ChecksumConverter, &file.checksums, document),
    },
    PropertyRule {
        property: FileProperty::Comment,
        value: |file, _| optional_text(file.comment.as_ref()),
    },
    PropertyRule {
        property: FileProperty::CopyrightText,
        value: |file, _| rendered(file.copyright_text.as_ref()),
    },
    PropertyRule {
        property: FileProperty::FileContributors,
        value: |file, _| rendered_list(&file.contributors),
    },
    PropertyRule {
        property: FileProperty::FileName,
        value: |file, _| text(&file.name),
    },
    PropertyRule {
        property: FileProperty::FileTypes,
        value: |file, _| enum_names(&file.file_types),
    },
    PropertyRule {
        property: FileProperty::LicenseComments,
        value: |file, _| optional_text(file.license_comment.as_ref()),
    },
    PropertyRule {
        property: FileProperty::LicenseConcluded,
        value: |file, _| rendered(file.license_concluded.as_ref()),
    },
    PropertyRule {
        property: FileProperty::LicenseInfoInFiles,
        value: |file, _| rendered_list(&file.license_info_in_file),
    },
    PropertyRule {
        property: FileProperty::NoticeText,
        value: |file, _| optional_text(file.notice.as_ref()),
    },
];

impl TypedConverter for FileConverter {
    type Entity = File;
    type Property = FileProperty;
    const ENTITY_NAME: &'static str = "File";

    fn rules(&self) -> &'static [PropertyRule<FileProperty, File>] {
        RULES
    }

    fn requires_full_document(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models_spdx::{
        Actor, ActorType, Checksum, ChecksumAlgorithm, CreationInfo, Document, FileType, SpdxValue,
    };
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    #[test]
    fn test_successful_conversion() {
        let created = Utc.with_ymd_and_hms(2022, 12, 1, 0, 0, 0).unwrap();
        let creators = vec![Actor::new(ActorType::Tool, "t", None)];
        let document = Document::new(
            CreationInfo::new("SPDX-2.3", "SPDXRef-DOCUMENT", "doc", "ns", creators, created)
                .unwrap(),
        );
        let checksums = vec![
            Checksum::new(ChecksumAlgorithm::Sha1, "sha1").unwrap(),
            Checksum::new(ChecksumAlgorithm::Blake2b512, "blake").unwrap(),
        ];
        let mut file = File::new("./src/main.rs", "SPDXRef-File", checksums).unwrap();
        file.file_types = vec![FileType::Source, FileType::Text];
        file.license_concluded = Some("MIT".parse().unwrap());
        file.license_info_in_file = vec![SpdxValue::NoAssertion];
        file.copyright_text = Some(SpdxValue::None);
        file.contributors = vec!["contributor".to_string()];
        file.notice = Some("notice".to_string());

        let converted = FileConverter.convert(&file, Some(&document)).unwrap();

        assert_eq!(
            Value::Object(converted),
            json!({
                "SPDXID": "SPDXRef-File",
                "checksums": [
                    {"algorithm": "SHA-1", "checksumValue": "sha1"},
                    {"algorithm": "BLAKE2b-512", "checksumValue": "blake"}
                ],
                "copyrightText": "NONE",
                "fileContributors": ["contributor"],
                "fileName": "./src/main.rs",
                "fileTypes": ["SOURCE", "TEXT"],
                "licenseConcluded": "MIT",
                "licenseInfoInFiles": ["NOASSERTION"],
                "noticeText": "notice"
            })
        );
    }
}
