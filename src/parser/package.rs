use super::checksum::parse_checksum;
use super::dict_parsing::{
    bool_value, datetime_value, entity_object, enum_value, from_str_value, list_of, optional,
    optional_entity, optional_entity_list, required, string_list_value, string_value,
};
use crate::errors::SpdxParsingError;
use crate::logger::Logger;
use crate::models_spdx::{
    Actor, ExternalPackageRef, ExternalPackageRefCategory, LicenseExpression, Package,
    PackagePurpose, PackageVerificationCode, SpdxValue,
};
use serde_json::Value;

/// Parses one package. `hasFiles` is left to the relationship parser.
pub fn parse_package(value: &Value) -> Result<Package, SpdxParsingError> {
    let source = entity_object(value, "Package")?;
    let mut logger = Logger::new();

    let spdx_id = required(source, "SPDXID", &mut logger, string_value);
    let name = required(source, "name", &mut logger, string_value);
    let download_location = required(
        source,
        "downloadLocation",
        &mut logger,
        from_str_value::<SpdxValue<String>>,
    );

    let version = optional(source, "versionInfo", &mut logger, string_value);
    let file_name = optional(source, "packageFileName", &mut logger, string_value);
    let supplier = optional(source, "supplier", &mut logger, from_str_value::<SpdxValue<Actor>>);
    let originator =
        optional(source, "originator", &mut logger, from_str_value::<SpdxValue<Actor>>);
    let files_analyzed = optional(source, "filesAnalyzed", &mut logger, bool_value);
    let verification_code = optional_entity(
        source,
        "packageVerificationCode",
        &mut logger,
        parse_package_verification_code,
    );
    let checksums = optional_entity_list(source, "checksums", &mut logger, parse_checksum);
    let homepage = optional(source, "homepage", &mut logger, from_str_value::<SpdxValue<String>>);
    let source_info = optional(source, "sourceInfo", &mut logger, string_value);
    let license_concluded = optional(source, "licenseConcluded", &mut logger, license_value);
    let license_info_from_files =
        optional(source, "licenseInfoFromFiles", &mut logger, license_list_value);
    let license_declared = optional(source, "licenseDeclared", &mut logger, license_value);
    let license_comment = optional(source, "licenseComments", &mut logger, string_value);
    let copyright_text = optional(
        source,
        "copyrightText",
        &mut logger,
        from_str_value::<SpdxValue<String>>,
    );
    let summary = optional(source, "summary", &mut logger, string_value);
    let description = optional(source, "description", &mut logger, string_value);
    let comment = optional(source, "comment", &mut logger, string_value);
    let external_references =
        optional_entity_list(source, "externalRefs", &mut logger, parse_external_package_ref);
    let attribution_texts = optional(source, "attributionTexts", &mut logger, string_list_value);
    let primary_package_purpose = optional(
        source,
        "primaryPackagePurpose",
        &mut logger,
        enum_value::<PackagePurpose>,
    );
    let release_date = optional(source, "releaseDate", &mut logger, datetime_value);
    let built_date = optional(source, "builtDate", &mut logger, datetime_value);
    let valid_until_date = optional(source, "validUntilDate", &mut logger, datetime_value);

    let (Some(spdx_id), Some(name), Some(download_location)) = (spdx_id, name, download_location)
    else {
        return Err(logger.into_error());
    };
    if logger.has_messages() {
        return Err(logger.into_error());
    }

    let mut package = Package::new(spdx_id, name, download_location);
    package.version = version;
    package.file_name = file_name;
    package.supplier = supplier;
    package.originator = originator;
    package.files_analyzed = files_analyzed.unwrap_or(true);
    package.verification_code = verification_code;
    package.checksums = checksums;
    package.homepage = homepage;
    package.source_info = source_info;
    package.license_concluded = license_concluded;
    package.license_info_from_files = license_info_from_files.unwrap_or_default();
    package.license_declared = license_declared;
    package.license_comment = license_comment;
    package.copyright_text = copyright_text;
    package.summary = summary;
    package.description = description;
    package.comment = comment;
    package.external_references = external_references;
    package.attribution_texts = attribution_texts.unwrap_or_default();
    package.primary_package_purpose = primary_package_purpose;
    package.release_date = release_date;
    package.built_date = built_date;
    package.valid_until_date = valid_until_date;
    Ok(package)
}

pub fn parse_external_package_ref(value: &Value) -> Result<ExternalPackageRef, SpdxParsingError> {
    let source = entity_object(value, "ExternalPackageRef")?;
    let mut logger = Logger::new();

    let category = required(
        source,
        "referenceCategory",
        &mut logger,
        enum_value::<ExternalPackageRefCategory>,
    );
    let reference_type = required(source, "referenceType", &mut logger, string_value);
    let locator = required(source, "referenceLocator", &mut logger, string_value);
    let comment = optional(source, "comment", &mut logger, string_value);

    match (category, reference_type, locator) {
        (Some(category), Some(reference_type), Some(locator)) if !logger.has_messages() => Ok(
            ExternalPackageRef::new(category, reference_type, locator, comment),
        ),
        _ => Err(logger.into_error()),
    }
}

pub fn parse_package_verification_code(
    value: &Value,
) -> Result<PackageVerificationCode, SpdxParsingError> {
    let source = entity_object(value, "PackageVerificationCode")?;
    let mut logger = Logger::new();

    let code = required(source, "packageVerificationCodeValue", &mut logger, string_value);
    let excluded_files = optional(
        source,
        "packageVerificationCodeExcludedFiles",
        &mut logger,
        string_list_value,
    );

    match code {
        Some(code) if !logger.has_messages() => Ok(PackageVerificationCode::new(
            code,
            excluded_files.unwrap_or_default(),
        )),
        _ => Err(logger.into_error()),
    }
}

/// A license expression or one of the NOASSERTION/NONE sentinels.
pub(crate) fn license_value(
    value: &Value,
    property_name: &str,
    logger: &mut Logger,
) -> Option<SpdxValue<LicenseExpression>> {
    from_str_value(value, property_name, logger)
}

pub(crate) fn license_list_value(
    value: &Value,
    property_name: &str,
    logger: &mut Logger,
) -> Option<Vec<SpdxValue<LicenseExpression>>> {
    list_of(value, property_name, logger, license_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models_spdx::{ActorType, Checksum, ChecksumAlgorithm};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_package() {
        let package = parse_package(&json!({
            "SPDXID": "SPDXRef-Package",
            "name": "glibc",
            "downloadLocation": "http://ftp.gnu.org/gnu/glibc/glibc-ports-2.15.tar.gz",
            "versionInfo": "2.11.1",
            "packageFileName": "glibc-2.11.1.tar.gz",
            "supplier": "Person: Jane Doe (jane.doe@example.com)",
            "originator": "NOASSERTION",
            "filesAnalyzed": false,
            "packageVerificationCode": {
                "packageVerificationCodeExcludedFiles": ["./package.spdx"],
                "packageVerificationCodeValue": "d6a770ba38583ed4bb4525bd96e50461655d2758"
            },
            "checksums": [{"algorithm": "SHA1", "checksumValue": "85ed0817af83a24ad8da68c2b5094de69833983c"}],
            "homepage": "NONE",
            "licenseConcluded": "(LGPL-2.0-only OR LicenseRef-3)",
            "licenseInfoFromFiles": ["GPL-2.0-only", "NOASSERTION"],
            "licenseDeclared": "(LGPL-2.0-only AND LicenseRef-3)",
            "copyrightText": "Copyright 2008-2010 John Smith",
            "externalRefs": [{
                "referenceCategory": "PACKAGE-MANAGER",
                "referenceType": "purl",
                "referenceLocator": "pkg:maven/org.apache.jena/apache-jena@3.12.0"
            }],
            "attributionTexts": ["attribution"],
            "primaryPackagePurpose": "SOURCE",
            "releaseDate": "2012-01-29T18:30:22Z"
        }))
        .unwrap();

        assert_eq!(package.spdx_id, "SPDXRef-Package");
        assert_eq!(package.version.as_deref(), Some("2.11.1"));
        assert_eq!(
            package.supplier,
            Some(SpdxValue::Value(Actor::new(
                ActorType::Person,
                "Jane Doe",
                Some("jane.doe@example.com".to_string())
            )))
        );
        assert_eq!(package.originator, Some(SpdxValue::NoAssertion));
        assert!(!package.files_analyzed);
        assert_eq!(
            package.verification_code,
            Some(PackageVerificationCode::new(
                "d6a770ba38583ed4bb4525bd96e50461655d2758",
                vec!["./package.spdx".to_string()]
            ))
        );
        assert_eq!(
            package.checksums,
            [Checksum::new(ChecksumAlgorithm::Sha1, "85ed0817af83a24ad8da68c2b5094de69833983c")
                .unwrap()]
        );
        assert_eq!(package.homepage, Some(SpdxValue::None));
        assert_eq!(package.license_info_from_files[1], SpdxValue::NoAssertion);
        assert_eq!(
            package.external_references[0].category,
            ExternalPackageRefCategory::PackageManager
        );
        assert_eq!(package.primary_package_purpose, Some(PackagePurpose::Source));
        assert_eq!(
            package.release_date,
            Some(Utc.with_ymd_and_hms(2012, 1, 29, 18, 30, 22).unwrap())
        );
    }

    #[test]
    fn test_files_analyzed_defaults_to_true() {
        let package = parse_package(&json!({
            "SPDXID": "SPDXRef-Package",
            "name": "pkg",
            "downloadLocation": "NOASSERTION"
        }))
        .unwrap();

        assert!(package.files_analyzed);
        assert_eq!(package.download_location, SpdxValue::NoAssertion);
    }

    #[test]
    fn test_invalid_package_reports_nested_errors() {
        let err = parse_package(&json!({
            "SPDXID": "SPDXRef-Package",
            "checksums": [{"algorithm": "SHA1"}],
            "externalRefs": [{"referenceCategory": "SECURITY"}],
            "primaryPackagePurpose": "TOY"
        }))
        .unwrap_err();

        assert_eq!(err.messages()[0], "Required property name not specified!");
        assert_eq!(err.messages()[1], "Required property downloadLocation not specified!");
        assert_eq!(err.messages()[2], "Required property checksumValue not specified!");
        assert_eq!(err.messages()[3], "Required property referenceType not specified!");
        assert_eq!(err.messages()[4], "Required property referenceLocator not specified!");
        assert!(err.messages()[5].starts_with("Invalid value for primaryPackagePurpose"));
        assert_eq!(err.messages().len(), 6);
    }
}
