use super::properties::PackageProperty;
use super::relationship_filters::package_file_ids;
use super::{
    ChecksumConverter, ExternalPackageRefConverter, PackageVerificationCodeConverter,
    PropertyRule, PropertyValue, TypedConverter, datetime, element_annotations, enum_name,
    nested, nested_list, optional_text, rendered, rendered_list, text,
};
use crate::models_spdx::{Document, Package};
use serde_json::Value;

/// Converts a package. Needs the document: annotations and `hasFiles` are
/// looked up there.
pub struct PackageConverter;

static RULES: &[PropertyRule<PackageProperty, Package>] = &[
    PropertyRule {
        property: PackageProperty::SpdxId,
        value: |package, _| text(&package.spdx_id),
    },
    PropertyRule {
        property: PackageProperty::Annotations,
        value: |package, document| element_annotations(&package.spdx_id, document),
    },
    PropertyRule {
        property: PackageProperty::AttributionTexts,
        value: |package, _| rendered_list(&package.attribution_texts),
    },
    PropertyRule {
        property: PackageProperty::BuiltDate,
        value: |package, _| datetime(package.built_date.as_ref()),
    },
    PropertyRule {
        property: PackageProperty::Checksums,
        value: |package, document| nested_list(&ChecksumConverter, &package.checksums, document),
    },
    PropertyRule {
        property: PackageProperty::Comment,
        value: |package, _| optional_text(package.comment.as_ref()),
    },
    PropertyRule {
        property: PackageProperty::CopyrightText,
        value: |package, _| rendered(package.copyright_text.as_ref()),
    },
    PropertyRule {
        property: PackageProperty::Description,
        value: |package, _| optional_text(package.description.as_ref()),
    },
    PropertyRule {
        property: PackageProperty::DownloadLocation,
        value: |package, _| rendered(Some(&package.download_location)),
    },
    PropertyRule {
        property: PackageProperty::ExternalRefs,
        value: |package, document| {
            nested_list(&ExternalPackageRefConverter, &package.external_references, document)
        },
    },
    PropertyRule {
        property: PackageProperty::FilesAnalyzed,
        value: |package, _| Ok(Some(Value::Bool(package.files_analyzed))),
    },
    PropertyRule {
        property: PackageProperty::HasFiles,
        value: has_files,
    },
    PropertyRule {
        property: PackageProperty::Homepage,
        value: |package, _| rendered(package.homepage.as_ref()),
    },
    PropertyRule {
        property: PackageProperty::LicenseComments,
        value: |package, _| optional_text(package.license_comment.as_ref()),
    },
    PropertyRule {
        property: PackageProperty::LicenseConcluded,
        value: |package, _| rendered(package.license_concluded.as_ref()),
    },
    PropertyRule {
        property: PackageProperty::LicenseDeclared,
        value: |package, _| rendered(package.license_declared.as_ref()),
    },
    PropertyRule {
        property: PackageProperty::LicenseInfoFromFiles,
        value: |package, _| rendered_list(&package.license_info_from_files),
    },
    PropertyRule {
        property: PackageProperty::Name,
        value: |package, _| text(&package.name),
    },
    PropertyRule {
        property: PackageProperty::Originator,
        value: |package, _| rendered(package.originator.as_ref()),
    },
    PropertyRule {
        property: PackageProperty::PackageFileName,
        value: |package, _| optional_text(package.file_name.as_ref()),
    },
    PropertyRule {
        property: PackageProperty::PackageVerificationCode,
        value: |package, document| match &package.verification_code {
            Some(code) => nested(&PackageVerificationCodeConverter, code, document),
            None => Ok(None),
        },
    },
    PropertyRule {
        property: PackageProperty::PrimaryPackagePurpose,
        value: |package, _| enum_name(package.primary_package_purpose.as_ref()),
    },
    PropertyRule {
        property: PackageProperty::ReleaseDate,
        value: |package, _| datetime(package.release_date.as_ref()),
    },
    PropertyRule {
        property: PackageProperty::SourceInfo,
        value: |package, _| optional_text(package.source_info.as_ref()),
    },
    PropertyRule {
        property: PackageProperty::Summary,
        value: |package, _| optional_text(package.summary.as_ref()),
    },
    PropertyRule {
        property: PackageProperty::Supplier,
        value: |package, _| rendered(package.supplier.as_ref()),
    },
    PropertyRule {
        property: PackageProperty::ValidUntilDate,
        value: |package, _| datetime(package.valid_until_date.as_ref()),
    },
    PropertyRule {
        property: PackageProperty::VersionInfo,
        value: |package, _| optional_text(package.version.as_ref()),
    },
];

fn has_files(package: &Package, document: Option<&Document>) -> PropertyValue {
    match document {
        Some(document) if package.files_analyzed => {
            rendered_list(&package_file_ids(document, package))
        }
        _ => Ok(None),
    }
}

impl TypedConverter for PackageConverter {
    type Entity = Package;
    type Property = PackageProperty;
    const ENTITY_NAME: &'static str = "Package";

    fn rules(&self) -> &'static [PropertyRule<PackageProperty, Package>] {
        RULES
    }

    fn requires_full_document(&self) -> bool {
        true
    }
}
