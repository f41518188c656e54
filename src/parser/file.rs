use super::checksum::parse_checksum;
use super::dict_parsing::{
    construct_or_raise_parsing_error, entity_object, enum_value, from_str_value, list_of,
    optional, parse_field_or_log_error, parse_list_or_log_errors, required, string_list_value,
    string_value,
};
use super::package::{license_list_value, license_value};
use crate::errors::SpdxParsingError;
use crate::logger::Logger;
use crate::models_spdx::{File, FileType, SpdxValue};
use serde_json::Value;

pub fn parse_file(value: &Value) -> Result<File, SpdxParsingError> {
    let source = entity_object(value, "File")?;
    let mut logger = Logger::new();

    let name = required(source, "fileName", &mut logger, string_value);
    let spdx_id = required(source, "SPDXID", &mut logger, string_value);
    let checksums = required(source, "checksums", &mut logger, |value, name, logger| {
        Some(parse_list_or_log_errors(value, name, logger, parse_checksum))
    });

    let file_types = optional(source, "fileTypes", &mut logger, |value, name, logger| {
        list_of(value, name, logger, enum_value::<FileType>)
    });
    let license_concluded = optional(source, "licenseConcluded", &mut logger, license_value);
    let license_info_in_file =
        optional(source, "licenseInfoInFiles", &mut logger, license_list_value);
    let license_comment = optional(source, "licenseComments", &mut logger, string_value);
    let copyright_text = optional(
        source,
        "copyrightText",
        &mut logger,
        from_str_value::<SpdxValue<String>>,
    );
    let comment = optional(source, "comment", &mut logger, string_value);
    let notice = optional(source, "noticeText", &mut logger, string_value);
    let contributors = optional(source, "fileContributors", &mut logger, string_list_value);
    let attribution_texts = optional(source, "attributionTexts", &mut logger, string_list_value);

    let (Some(name), Some(spdx_id), Some(checksums)) = (name, spdx_id, checksums) else {
        return Err(logger.into_error());
    };
    let constructed = construct_or_raise_parsing_error("File", File::new(name, spdx_id, checksums));
    let mut file = match parse_field_or_log_error(&mut logger, constructed) {
        Some(file) if !logger.has_messages() => file,
        _ => return Err(logger.into_error()),
    };
    file.file_types = file_types.unwrap_or_default();
    file.license_concluded = license_concluded;
    file.license_info_in_file = license_info_in_file.unwrap_or_default();
    file.license_comment = license_comment;
    file.copyright_text = copyright_text;
    file.comment = comment;
    file.notice = notice;
    file.contributors = contributors.unwrap_or_default();
    file.attribution_texts = attribution_texts.unwrap_or_default();
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models_spdx::{Checksum, ChecksumAlgorithm, LicenseExpression};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_file() {
        let file = parse_file(&json!({
            "SPDXID": "SPDXRef-File",
            "fileName": "./package/foo.c",
            "fileTypes": ["SOURCE"],
            "checksums": [
                {"algorithm": "SHA1", "checksumValue": "d6a770ba38583ed4bb4525bd96e50461655d2758"},
                {"algorithm": "MD5", "checksumValue": "624c1abb3664f4b35547e7c73864ad24"}
            ],
            "licenseConcluded": "(LGPL-2.0-only OR LicenseRef-2)",
            "licenseInfoInFiles": ["GPL-2.0-only", "LicenseRef-2"],
            "copyrightText": "Copyright 2008-2010 John Smith",
            "noticeText": "Copyright (c) 2001 Aaron Lehmann",
            "fileContributors": ["The Regents of the University of California"]
        }))
        .unwrap();

        assert_eq!(file.name, "./package/foo.c");
        assert_eq!(file.file_types, [FileType::Source]);
        assert_eq!(
            file.checksums,
            [
                Checksum::new(ChecksumAlgorithm::Sha1, "d6a770ba38583ed4bb4525bd96e50461655d2758")
                    .unwrap(),
                Checksum::new(ChecksumAlgorithm::Md5, "624c1abb3664f4b35547e7c73864ad24").unwrap()
            ]
        );
        assert_eq!(
            file.license_concluded,
            Some(SpdxValue::Value(
                "(LGPL-2.0-only OR LicenseRef-2)".parse::<LicenseExpression>().unwrap()
            ))
        );
        assert_eq!(file.license_info_in_file.len(), 2);
        assert_eq!(file.notice.as_deref(), Some("Copyright (c) 2001 Aaron Lehmann"));
        assert_eq!(file.contributors, ["The Regents of the University of California"]);
    }

    #[test]
    fn test_file_without_checksums_is_rejected() {
        let err = parse_file(&json!({
            "SPDXID": "SPDXRef-File",
            "fileName": "foo.c",
            "checksums": []
        }))
        .unwrap_err();

        assert_eq!(
            err.messages(),
            ["Error while constructing File: checksums must not be empty"]
        );
    }

    #[test]
    fn test_invalid_file_types_are_reported() {
        let err = parse_file(&json!({
            "SPDXID": "SPDXRef-File",
            "fileName": "foo.c",
            "checksums": [{"algorithm": "MD5", "checksumValue": "abc"}],
            "fileTypes": ["SOURCE", "MOVIE"]
        }))
        .unwrap_err();

        assert_eq!(err.messages().len(), 1);
        assert!(err.messages()[0].starts_with("Invalid value for fileTypes"));
    }
}
