use super::Actor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnnotationType {
    Review,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// The element being annotated.
    pub spdx_id: String,
    pub annotation_type: AnnotationType,
    pub annotator: Actor,
    pub annotation_date: DateTime<Utc>,
    pub annotation_comment: String,
}

impl Annotation {
    pub fn new(
        spdx_id: impl Into<String>,
        annotation_type: AnnotationType,
        annotator: Actor,
        annotation_date: DateTime<Utc>,
        annotation_comment: impl Into<String>,
    ) -> Self {
        Self {
            spdx_id: spdx_id.into(),
            annotation_type,
            annotator,
            annotation_date,
            annotation_comment: annotation_comment.into(),
        }
    }
}
