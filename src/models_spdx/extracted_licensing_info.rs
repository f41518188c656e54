use super::ConstructionError;

/// License text found in the wild that has no SPDX license list identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedLicensingInfo {
    pub license_id: String,
    pub extracted_text: String,
    pub license_name: Option<String>,
    pub cross_references: Vec<String>,
    pub comment: Option<String>,
}

impl ExtractedLicensingInfo {
    pub fn new(
        license_id: impl Into<String>,
        extracted_text: impl Into<String>,
    ) -> Result<Self, ConstructionError> {
        let license_id = license_id.into();
        if license_id.trim().is_empty() {
            return Err(ConstructionError::Empty("license id"));
        }
        Ok(Self {
            license_id,
            extracted_text: extracted_text.into(),
            license_name: None,
            cross_references: Vec::new(),
            comment: None,
        })
    }
}
