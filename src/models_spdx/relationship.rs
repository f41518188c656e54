use super::SpdxValue;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipType {
    Describes,
    DescribedBy,
    Contains,
    ContainedBy,
    DependsOn,
    DependencyOf,
    DependencyManifestOf,
    BuildDependencyOf,
    DevDependencyOf,
    OptionalDependencyOf,
    ProvidedDependencyOf,
    TestDependencyOf,
    RuntimeDependencyOf,
    ExampleOf,
    Generates,
    GeneratedFrom,
    AncestorOf,
    DescendantOf,
    VariantOf,
    DistributionArtifact,
    PatchFor,
    PatchApplied,
    CopyOf,
    FileAdded,
    FileDeleted,
    FileModified,
    ExpandedFromArchive,
    DynamicLink,
    StaticLink,
    DataFileOf,
    TestCaseOf,
    BuildToolOf,
    DevToolOf,
    TestOf,
    TestToolOf,
    DocumentationOf,
    OptionalComponentOf,
    MetafileOf,
    PackageOf,
    Amends,
    PrerequisiteFor,
    HasPrerequisite,
    RequirementDescriptionFor,
    SpecificationFor,
    Other,
}

/// A typed edge between two SPDX ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub spdx_element_id: String,
    pub relationship_type: RelationshipType,
    pub related_spdx_element_id: SpdxValue<String>,
    pub comment: Option<String>,
}

impl Relationship {
    pub fn new(
        spdx_element_id: impl Into<String>,
        relationship_type: RelationshipType,
        related_spdx_element_id: impl Into<SpdxValue<String>>,
        comment: Option<String>,
    ) -> Self {
        Self {
            spdx_element_id: spdx_element_id.into(),
            relationship_type,
            related_spdx_element_id: related_spdx_element_id.into(),
            comment,
        }
    }

    /// The related id, unless it is a NONE/NOASSERTION sentinel.
    pub fn related_id(&self) -> Option<&str> {
        self.related_spdx_element_id.value().map(String::as_str)
    }
}
