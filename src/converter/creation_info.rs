use super::properties::CreationInfoProperty;
use super::{PropertyRule, TypedConverter, datetime, optional_text, rendered_list};
use crate::models_spdx::CreationInfo;

/// Converts the nested `creationInfo` object of a document. The remaining
/// creation info fields live at document level, see [`super::DocumentConverter`].
pub struct CreationInfoConverter;

static RULES: &[PropertyRule<CreationInfoProperty, CreationInfo>] = &[
    PropertyRule {
        property: CreationInfoProperty::Creators,
        value: |info, _| rendered_list(&info.creators),
    },
    PropertyRule {
        property: CreationInfoProperty::Created,
        value: |info, _| datetime(Some(&info.created)),
    },
    PropertyRule {
        property: CreationInfoProperty::Comment,
        value: |info, _| optional_text(info.creator_comment.as_ref()),
    },
    PropertyRule {
        property: CreationInfoProperty::LicenseListVersion,
        value: |info, _| optional_text(info.license_list_version.as_ref()),
    },
];

impl TypedConverter for CreationInfoConverter {
    type Entity = CreationInfo;
    type Property = CreationInfoProperty;
    const ENTITY_NAME: &'static str = "CreationInfo";

    fn rules(&self) -> &'static [PropertyRule<CreationInfoProperty, CreationInfo>] {
        RULES
    }
}
