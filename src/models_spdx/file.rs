use super::{Checksum, ConstructionError, LicenseExpression, SpdxValue};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileType {
    Source,
    Binary,
    Archive,
    Application,
    Audio,
    Image,
    Text,
    Video,
    Documentation,
    Spdx,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub name: String,
    pub spdx_id: String,
    pub checksums: Vec<Checksum>,
    pub file_types: Vec<FileType>,
    pub license_concluded: Option<SpdxValue<LicenseExpression>>,
    pub license_info_in_file: Vec<SpdxValue<LicenseExpression>>,
    pub license_comment: Option<String>,
    pub copyright_text: Option<SpdxValue<String>>,
    pub comment: Option<String>,
    pub notice: Option<String>,
    pub contributors: Vec<String>,
    pub attribution_texts: Vec<String>,
}

impl File {
    /// A file must carry at least one checksum.
    pub fn new(
        name: impl Into<String>,
        spdx_id: impl Into<String>,
        checksums: Vec<Checksum>,
    ) -> Result<Self, ConstructionError> {
        if checksums.is_empty() {
            return Err(ConstructionError::Empty("checksums"));
        }
        Ok(Self {
            name: name.into(),
            spdx_id: spdx_id.into(),
            checksums,
            file_types: Vec::new(),
            license_concluded: None,
            license_info_in_file: Vec::new(),
            license_comment: None,
            copyright_text: None,
            comment: None,
            notice: None,
            contributors: Vec::new(),
            attribution_texts: Vec::new(),
        })
    }
}
