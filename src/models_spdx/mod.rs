//! The SPDX 2.x document model.
//!
//! Plain value types. Required attributes are constructor arguments;
//! optional attributes are public fields with empty defaults. Constructors
//! that can reject their input return [`ConstructionError`].

mod actor;
mod annotation;
mod checksum;
mod document;
mod extracted_licensing_info;
mod file;
mod package;
mod relationship;
mod snippet;
mod spdx_value;

pub use actor::{Actor, ActorType};
pub use annotation::{Annotation, AnnotationType};
pub use checksum::{Checksum, ChecksumAlgorithm};
pub use document::{CreationInfo, Document, ExternalDocumentRef};
pub use extracted_licensing_info::ExtractedLicensingInfo;
pub use file::{File, FileType};
pub use package::{
    ExternalPackageRef, ExternalPackageRefCategory, Package, PackagePurpose,
    PackageVerificationCode,
};
pub use relationship::{Relationship, RelationshipType};
pub use snippet::Snippet;
pub use spdx_value::{LicenseExpression, SpdxValue};

use thiserror::Error;

/// An attribute combination a model constructor refuses to build.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error(
        "invalid actor \"{0}\", expected \"Person: name (email)\", \"Organization: name (email)\" or \"Tool: name\""
    )]
    InvalidActor(String),

    #[error("invalid license expression \"{0}\"")]
    InvalidLicenseExpression(String),

    #[error("{field} start {start} is after end {end}")]
    InvalidRange {
        field: &'static str,
        start: u64,
        end: u64,
    },
}
