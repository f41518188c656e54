use super::{ConstructionError, LicenseExpression, SpdxValue};

/// A part of a file, addressed by byte range and optionally by line range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub spdx_id: String,
    pub file_spdx_id: String,
    pub byte_range: (u64, u64),
    pub line_range: Option<(u64, u64)>,
    pub license_concluded: Option<SpdxValue<LicenseExpression>>,
    pub license_info_in_snippet: Vec<SpdxValue<LicenseExpression>>,
    pub license_comment: Option<String>,
    pub copyright_text: Option<SpdxValue<String>>,
    pub comment: Option<String>,
    pub name: Option<String>,
    pub attribution_texts: Vec<String>,
}

impl Snippet {
    pub fn new(
        spdx_id: impl Into<String>,
        file_spdx_id: impl Into<String>,
        byte_range: (u64, u64),
    ) -> Result<Self, ConstructionError> {
        check_range("byte range", byte_range)?;
        Ok(Self {
            spdx_id: spdx_id.into(),
            file_spdx_id: file_spdx_id.into(),
            byte_range,
            line_range: None,
            license_concluded: None,
            license_info_in_snippet: Vec::new(),
            license_comment: None,
            copyright_text: None,
            comment: None,
            name: None,
            attribution_texts: Vec::new(),
        })
    }

    pub fn with_line_range(mut self, line_range: (u64, u64)) -> Result<Self, ConstructionError> {
        check_range("line range", line_range)?;
        self.line_range = Some(line_range);
        Ok(self)
    }
}

fn check_range(field: &'static str, (start, end): (u64, u64)) -> Result<(), ConstructionError> {
    if start > end {
        return Err(ConstructionError::InvalidRange { field, start, end });
    }
    Ok(())
}
