use super::{Actor, Checksum, LicenseExpression, SpdxValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackagePurpose {
    Application,
    Framework,
    Library,
    Container,
    OperatingSystem,
    Device,
    Firmware,
    Source,
    Archive,
    File,
    Install,
    Other,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExternalPackageRefCategory {
    Security,
    #[serde(alias = "PACKAGE-MANAGER")]
    PackageManager,
    #[serde(alias = "PERSISTENT-ID")]
    PersistentId,
    Other,
}

/// Reference to an outside resource describing the package (a purl, a CPE...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalPackageRef {
    pub category: ExternalPackageRefCategory,
    /// Free-form; SPDX lists well-known types but does not close the set.
    pub reference_type: String,
    pub locator: String,
    pub comment: Option<String>,
}

impl ExternalPackageRef {
    pub fn new(
        category: ExternalPackageRefCategory,
        reference_type: impl Into<String>,
        locator: impl Into<String>,
        comment: Option<String>,
    ) -> Self {
        Self {
            category,
            reference_type: reference_type.into(),
            locator: locator.into(),
            comment,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageVerificationCode {
    pub value: String,
    pub excluded_files: Vec<String>,
}

impl PackageVerificationCode {
    pub fn new(value: impl Into<String>, excluded_files: Vec<String>) -> Self {
        Self {
            value: value.into(),
            excluded_files,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub spdx_id: String,
    pub name: String,
    pub download_location: SpdxValue<String>,
    pub version: Option<String>,
    pub file_name: Option<String>,
    pub supplier: Option<SpdxValue<Actor>>,
    pub originator: Option<SpdxValue<Actor>>,
    /// When false, file membership is not expanded into `hasFiles`.
    pub files_analyzed: bool,
    pub verification_code: Option<PackageVerificationCode>,
    pub checksums: Vec<Checksum>,
    pub homepage: Option<SpdxValue<String>>,
    pub source_info: Option<String>,
    pub license_concluded: Option<SpdxValue<LicenseExpression>>,
    pub license_info_from_files: Vec<SpdxValue<LicenseExpression>>,
    pub license_declared: Option<SpdxValue<LicenseExpression>>,
    pub license_comment: Option<String>,
    pub copyright_text: Option<SpdxValue<String>>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub comment: Option<String>,
    pub external_references: Vec<ExternalPackageRef>,
    pub attribution_texts: Vec<String>,
    pub primary_package_purpose: Option<PackagePurpose>,
    pub release_date: Option<DateTime<Utc>>,
    pub built_date: Option<DateTime<Utc>>,
    pub valid_until_date: Option<DateTime<Utc>>,
}

impl Package {
    pub fn new(
        spdx_id: impl Into<String>,
        name: impl Into<String>,
        download_location: SpdxValue<String>,
    ) -> Self {
        Self {
            spdx_id: spdx_id.into(),
            name: name.into(),
            download_location,
            version: None,
            file_name: None,
            supplier: None,
            originator: None,
            files_analyzed: true,
            verification_code: None,
            checksums: Vec::new(),
            homepage: None,
            source_info: None,
            license_concluded: None,
            license_info_from_files: Vec::new(),
            license_declared: None,
            license_comment: None,
            copyright_text: None,
            summary: None,
            description: None,
            comment: None,
            external_references: Vec::new(),
            attribution_texts: Vec::new(),
            primary_package_purpose: None,
            release_date: None,
            built_date: None,
            valid_until_date: None,
        }
    }
}
