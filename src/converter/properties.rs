//! The JSON properties of every entity kind, in emission order.
//!
//! Each property knows its canonical snake_case name; the JSON key is
//! derived from it (see [`super::json_property_name`]).

use super::JsonProperty;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentProperty {
    SpdxVersion,
    SpdxId,
    Name,
    DocumentNamespace,
    CreationInfo,
    Comment,
    DataLicense,
    ExternalDocumentRefs,
    Packages,
    Files,
    Snippets,
    Relationships,
    Annotations,
    HasExtractedLicensingInfos,
}

impl JsonProperty for DocumentProperty {
    const ALL: &'static [Self] = &[
        DocumentProperty::SpdxVersion,
        DocumentProperty::SpdxId,
        DocumentProperty::Name,
        DocumentProperty::DocumentNamespace,
        DocumentProperty::CreationInfo,
        DocumentProperty::Comment,
        DocumentProperty::DataLicense,
        DocumentProperty::ExternalDocumentRefs,
        DocumentProperty::Packages,
        DocumentProperty::Files,
        DocumentProperty::Snippets,
        DocumentProperty::Relationships,
        DocumentProperty::Annotations,
        DocumentProperty::HasExtractedLicensingInfos,
    ];

    fn snake_name(&self) -> &'static str {
        match self {
            DocumentProperty::SpdxVersion => "spdx_version",
            DocumentProperty::SpdxId => "spdx_id",
            DocumentProperty::Name => "name",
            DocumentProperty::DocumentNamespace => "document_namespace",
            DocumentProperty::CreationInfo => "creation_info",
            DocumentProperty::Comment => "comment",
            DocumentProperty::DataLicense => "data_license",
            DocumentProperty::ExternalDocumentRefs => "external_document_refs",
            DocumentProperty::Packages => "packages",
            DocumentProperty::Files => "files",
            DocumentProperty::Snippets => "snippets",
            DocumentProperty::Relationships => "relationships",
            DocumentProperty::Annotations => "annotations",
            DocumentProperty::HasExtractedLicensingInfos => "has_extracted_licensing_infos",
        }
    }

    fn is_spdx_id(&self) -> bool {
        *self == DocumentProperty::SpdxId
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationInfoProperty {
    Creators,
    Created,
    Comment,
    LicenseListVersion,
}

impl JsonProperty for CreationInfoProperty {
    const ALL: &'static [Self] = &[
        CreationInfoProperty::Creators,
        CreationInfoProperty::Created,
        CreationInfoProperty::Comment,
        CreationInfoProperty::LicenseListVersion,
    ];

    fn snake_name(&self) -> &'static str {
        match self {
            CreationInfoProperty::Creators => "creators",
            CreationInfoProperty::Created => "created",
            CreationInfoProperty::Comment => "comment",
            CreationInfoProperty::LicenseListVersion => "license_list_version",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalDocumentRefProperty {
    ExternalDocumentId,
    SpdxDocument,
    Checksum,
}

impl JsonProperty for ExternalDocumentRefProperty {
    const ALL: &'static [Self] = &[
        ExternalDocumentRefProperty::ExternalDocumentId,
        ExternalDocumentRefProperty::SpdxDocument,
        ExternalDocumentRefProperty::Checksum,
    ];

    fn snake_name(&self) -> &'static str {
        match self {
            ExternalDocumentRefProperty::ExternalDocumentId => "external_document_id",
            ExternalDocumentRefProperty::SpdxDocument => "spdx_document",
            ExternalDocumentRefProperty::Checksum => "checksum",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumProperty {
    Algorithm,
    ChecksumValue,
}

impl JsonProperty for ChecksumProperty {
    const ALL: &'static [Self] = &[ChecksumProperty::Algorithm, ChecksumProperty::ChecksumValue];

    fn snake_name(&self) -> &'static str {
        match self {
            ChecksumProperty::Algorithm => "algorithm",
            ChecksumProperty::ChecksumValue => "checksum_value",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationProperty {
    AnnotationDate,
    AnnotationType,
    Annotator,
    Comment,
}

impl JsonProperty for AnnotationProperty {
    const ALL: &'static [Self] = &[
        AnnotationProperty::AnnotationDate,
        AnnotationProperty::AnnotationType,
        AnnotationProperty::Annotator,
        AnnotationProperty::Comment,
    ];

    fn snake_name(&self) -> &'static str {
        match self {
            AnnotationProperty::AnnotationDate => "annotation_date",
            AnnotationProperty::AnnotationType => "annotation_type",
            AnnotationProperty::Annotator => "annotator",
            AnnotationProperty::Comment => "comment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalPackageRefProperty {
    Comment,
    ReferenceCategory,
    ReferenceLocator,
    ReferenceType,
}

impl JsonProperty for ExternalPackageRefProperty {
    const ALL: &'static [Self] = &[
        ExternalPackageRefProperty::Comment,
        ExternalPackageRefProperty::ReferenceCategory,
        ExternalPackageRefProperty::ReferenceLocator,
        ExternalPackageRefProperty::ReferenceType,
    ];

    fn snake_name(&self) -> &'static str {
        match self {
            ExternalPackageRefProperty::Comment => "comment",
            ExternalPackageRefProperty::ReferenceCategory => "reference_category",
            ExternalPackageRefProperty::ReferenceLocator => "reference_locator",
            ExternalPackageRefProperty::ReferenceType => "reference_type",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageVerificationCodeProperty {
    PackageVerificationCodeExcludedFiles,
    PackageVerificationCodeValue,
}

impl JsonProperty for PackageVerificationCodeProperty {
    const ALL: &'static [Self] = &[
        PackageVerificationCodeProperty::PackageVerificationCodeExcludedFiles,
        PackageVerificationCodeProperty::PackageVerificationCodeValue,
    ];

    fn snake_name(&self) -> &'static str {
        match self {
            PackageVerificationCodeProperty::PackageVerificationCodeExcludedFiles => {
                "package_verification_code_excluded_files"
            }
            PackageVerificationCodeProperty::PackageVerificationCodeValue => {
                "package_verification_code_value"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageProperty {
    SpdxId,
    Annotations,
    AttributionTexts,
    BuiltDate,
    Checksums,
    Comment,
    CopyrightText,
    Description,
    DownloadLocation,
    ExternalRefs,
    FilesAnalyzed,
    HasFiles,
    Homepage,
    LicenseComments,
    LicenseConcluded,
    LicenseDeclared,
    LicenseInfoFromFiles,
    Name,
    Originator,
    PackageFileName,
    PackageVerificationCode,
    PrimaryPackagePurpose,
    ReleaseDate,
    SourceInfo,
    Summary,
    Supplier,
    ValidUntilDate,
    VersionInfo,
}

impl JsonProperty for PackageProperty {
    const ALL: &'static [Self] = &[
        PackageProperty::SpdxId,
        PackageProperty::Annotations,
        PackageProperty::AttributionTexts,
        PackageProperty::BuiltDate,
        PackageProperty::Checksums,
        PackageProperty::Comment,
        PackageProperty::CopyrightText,
        PackageProperty::Description,
        PackageProperty::DownloadLocation,
        PackageProperty::ExternalRefs,
        PackageProperty::FilesAnalyzed,
        PackageProperty::HasFiles,
        PackageProperty::Homepage,
        PackageProperty::LicenseComments,
        PackageProperty::LicenseConcluded,
        PackageProperty::LicenseDeclared,
        PackageProperty::LicenseInfoFromFiles,
        PackageProperty::Name,
        PackageProperty::Originator,
        PackageProperty::PackageFileName,
        PackageProperty::PackageVerificationCode,
        PackageProperty::PrimaryPackagePurpose,
        PackageProperty::ReleaseDate,
        PackageProperty::SourceInfo,
        PackageProperty::Summary,
        PackageProperty::Supplier,
        PackageProperty::ValidUntilDate,
        PackageProperty::VersionInfo,
    ];

    fn snake_name(&self) -> &'static str {
        match self {
            PackageProperty::SpdxId => "spdx_id",
            PackageProperty::Annotations => "annotations",
            PackageProperty::AttributionTexts => "attribution_texts",
            PackageProperty::BuiltDate => "built_date",
            PackageProperty::Checksums => "checksums",
            PackageProperty::Comment => "comment",
            PackageProperty::CopyrightText => "copyright_text",
            PackageProperty::Description => "description",
            PackageProperty::DownloadLocation => "download_location",
            PackageProperty::ExternalRefs => "external_refs",
            PackageProperty::FilesAnalyzed => "files_analyzed",
            PackageProperty::HasFiles => "has_files",
            PackageProperty::Homepage => "homepage",
            PackageProperty::LicenseComments => "license_comments",
            PackageProperty::LicenseConcluded => "license_concluded",
            PackageProperty::LicenseDeclared => "license_declared",
            PackageProperty::LicenseInfoFromFiles => "license_info_from_files",
            PackageProperty::Name => "name",
            PackageProperty::Originator => "originator",
            PackageProperty::PackageFileName => "package_file_name",
            PackageProperty::PackageVerificationCode => "package_verification_code",
            PackageProperty::PrimaryPackagePurpose => "primary_package_purpose",
            PackageProperty::ReleaseDate => "release_date",
            PackageProperty::SourceInfo => "source_info",
            PackageProperty::Summary => "summary",
            PackageProperty::Supplier => "supplier",
            PackageProperty::ValidUntilDate => "valid_until_date",
            PackageProperty::VersionInfo => "version_info",
        }
    }

    fn is_spdx_id(&self) -> bool {
        *self == PackageProperty::SpdxId
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileProperty {
    SpdxId,
    Annotations,
    AttributionTexts,
    Checksums,
    Comment,
    CopyrightText,
    FileContributors,
    FileName,
    FileTypes,
    LicenseComments,
    LicenseConcluded,
    LicenseInfoInFiles,
    NoticeText,
}

impl JsonProperty for FileProperty {
    const ALL: &'static [Self] = &[
        FileProperty::SpdxId,
        FileProperty::Annotations,
        FileProperty::AttributionTexts,
        FileProperty::Checksums,
        FileProperty::Comment,
        FileProperty::CopyrightText,
        FileProperty::FileContributors,
        FileProperty::FileName,
        FileProperty::FileTypes,
        FileProperty::LicenseComments,
        FileProperty::LicenseConcluded,
        FileProperty::LicenseInfoInFiles,
        FileProperty::NoticeText,
    ];

    fn snake_name(&self) -> &'static str {
        match self {
            FileProperty::SpdxId => "spdx_id",
            FileProperty::Annotations => "annotations",
            FileProperty::AttributionTexts => "attribution_texts",
            FileProperty::Checksums => "checksums",
            FileProperty::Comment => "comment",
            FileProperty::CopyrightText => "copyright_text",
            FileProperty::FileContributors => "file_contributors",
            FileProperty::FileName => "file_name",
            FileProperty::FileTypes => "file_types",
            FileProperty::LicenseComments => "license_comments",
            FileProperty::LicenseConcluded => "license_concluded",
            FileProperty::LicenseInfoInFiles => "license_info_in_files",
            FileProperty::NoticeText => "notice_text",
        }
    }

    fn is_spdx_id(&self) -> bool {
        *self == FileProperty::SpdxId
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetProperty {
    SpdxId,
    Annotations,
    AttributionTexts,
    Comment,
    CopyrightText,
    LicenseComments,
    LicenseConcluded,
    LicenseInfoInSnippets,
    Name,
    Ranges,
    SnippetFromFile,
}

impl JsonProperty for SnippetProperty {
    const ALL: &'static [Self] = &[
        SnippetProperty::SpdxId,
        SnippetProperty::Annotations,
        SnippetProperty::AttributionTexts,
        SnippetProperty::Comment,
        SnippetProperty::CopyrightText,
        SnippetProperty::LicenseComments,
        SnippetProperty::LicenseConcluded,
        SnippetProperty::LicenseInfoInSnippets,
        SnippetProperty::Name,
        SnippetProperty::Ranges,
        SnippetProperty::SnippetFromFile,
    ];

    fn snake_name(&self) -> &'static str {
        match self {
            SnippetProperty::SpdxId => "spdx_id",
            SnippetProperty::Annotations => "annotations",
            SnippetProperty::AttributionTexts => "attribution_texts",
            SnippetProperty::Comment => "comment",
            SnippetProperty::CopyrightText => "copyright_text",
            SnippetProperty::LicenseComments => "license_comments",
            SnippetProperty::LicenseConcluded => "license_concluded",
            SnippetProperty::LicenseInfoInSnippets => "license_info_in_snippets",
            SnippetProperty::Name => "name",
            SnippetProperty::Ranges => "ranges",
            SnippetProperty::SnippetFromFile => "snippet_from_file",
        }
    }

    fn is_spdx_id(&self) -> bool {
        *self == SnippetProperty::SpdxId
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipProperty {
    SpdxElementId,
    Comment,
    RelatedSpdxElement,
    RelationshipType,
}

impl JsonProperty for RelationshipProperty {
    const ALL: &'static [Self] = &[
        RelationshipProperty::SpdxElementId,
        RelationshipProperty::Comment,
        RelationshipProperty::RelatedSpdxElement,
        RelationshipProperty::RelationshipType,
    ];

    fn snake_name(&self) -> &'static str {
        match self {
            RelationshipProperty::SpdxElementId => "spdx_element_id",
            RelationshipProperty::Comment => "comment",
            RelationshipProperty::RelatedSpdxElement => "related_spdx_element",
            RelationshipProperty::RelationshipType => "relationship_type",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractedLicensingInfoProperty {
    LicenseId,
    ExtractedText,
    Name,
    Comment,
    SeeAlsos,
}

impl JsonProperty for ExtractedLicensingInfoProperty {
    const ALL: &'static [Self] = &[
        ExtractedLicensingInfoProperty::LicenseId,
        ExtractedLicensingInfoProperty::ExtractedText,
        ExtractedLicensingInfoProperty::Name,
        ExtractedLicensingInfoProperty::Comment,
        ExtractedLicensingInfoProperty::SeeAlsos,
    ];

    fn snake_name(&self) -> &'static str {
        match self {
            ExtractedLicensingInfoProperty::LicenseId => "license_id",
            ExtractedLicensingInfoProperty::ExtractedText => "extracted_text",
            ExtractedLicensingInfoProperty::Name => "name",
            ExtractedLicensingInfoProperty::Comment => "comment",
            ExtractedLicensingInfoProperty::SeeAlsos => "see_alsos",
        }
    }
}
