use super::{
    Actor, Annotation, Checksum, ConstructionError, ExtractedLicensingInfo, File, Package,
    Relationship, Snippet,
};
use chrono::{DateTime, Utc};

/// Link to another SPDX document this one refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalDocumentRef {
    pub document_ref_id: String,
    pub document_uri: String,
    pub checksum: Checksum,
}

impl ExternalDocumentRef {
    pub fn new(
        document_ref_id: impl Into<String>,
        document_uri: impl Into<String>,
        checksum: Checksum,
    ) -> Self {
        Self {
            document_ref_id: document_ref_id.into(),
            document_uri: document_uri.into(),
            checksum,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationInfo {
    pub spdx_version: String,
    pub spdx_id: String,
    pub name: String,
    pub document_namespace: String,
    pub creators: Vec<Actor>,
    pub created: DateTime<Utc>,
    pub creator_comment: Option<String>,
    pub data_license: Option<String>,
    pub external_document_refs: Vec<ExternalDocumentRef>,
    pub license_list_version: Option<String>,
    pub document_comment: Option<String>,
}

impl CreationInfo {
    pub fn new(
        spdx_version: impl Into<String>,
        spdx_id: impl Into<String>,
        name: impl Into<String>,
        document_namespace: impl Into<String>,
        creators: Vec<Actor>,
        created: DateTime<Utc>,
    ) -> Result<Self, ConstructionError> {
        if creators.is_empty() {
            return Err(ConstructionError::Empty("creators"));
        }
        Ok(Self {
            spdx_version: spdx_version.into(),
            spdx_id: spdx_id.into(),
            name: name.into(),
            document_namespace: document_namespace.into(),
            creators,
            created,
            creator_comment: None,
            data_license: None,
            external_document_refs: Vec::new(),
            license_list_version: None,
            document_comment: None,
        })
    }
}

/// Root aggregate. Owns every element of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub creation_info: CreationInfo,
    pub packages: Vec<Package>,
    pub files: Vec<File>,
    pub snippets: Vec<Snippet>,
    pub annotations: Vec<Annotation>,
    pub relationships: Vec<Relationship>,
    pub extracted_licensing_info: Vec<ExtractedLicensingInfo>,
}

impl Document {
    pub fn new(creation_info: CreationInfo) -> Self {
        Self {
            creation_info,
            packages: Vec::new(),
            files: Vec::new(),
            snippets: Vec::new(),
            annotations: Vec::new(),
            relationships: Vec::new(),
            extracted_licensing_info: Vec::new(),
        }
    }

    pub fn is_file(&self, spdx_id: &str) -> bool {
        self.files.iter().any(|file| file.spdx_id == spdx_id)
    }

    /// Whether `spdx_id` names a package, file or snippet of this document.
    pub fn is_element(&self, spdx_id: &str) -> bool {
        self.packages.iter().any(|p| p.spdx_id == spdx_id)
            || self.is_file(spdx_id)
            || self.snippets.iter().any(|s| s.spdx_id == spdx_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models_spdx::ActorType;
    use chrono::TimeZone;

    #[test]
    fn test_creation_info_requires_creators() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let result = CreationInfo::new("SPDX-2.3", "SPDXRef-DOCUMENT", "doc", "ns", vec![], created);
        assert_eq!(result.unwrap_err(), ConstructionError::Empty("creators"));

        let tool = Actor::new(ActorType::Tool, "t", None);
        assert!(
            CreationInfo::new("SPDX-2.3", "SPDXRef-DOCUMENT", "doc", "ns", vec![tool], created)
                .is_ok()
        );
    }
}
