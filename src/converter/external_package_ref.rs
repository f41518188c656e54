use super::properties::ExternalPackageRefProperty;
use super::{PropertyRule, TypedConverter, enum_name, optional_text, text};
use crate::models_spdx::ExternalPackageRef;

pub struct ExternalPackageRefConverter;

static RULES: &[PropertyRule<ExternalPackageRefProperty, ExternalPackageRef>] = &[
    PropertyRule {
        property: ExternalPackageRefProperty::Comment,
        value: |external_ref, _| optional_text(external_ref.comment.as_ref()),
    },
    PropertyRule {
        property: ExternalPackageRefProperty::ReferenceCategory,
        value: |external_ref, _| enum_name(Some(&external_ref.category)),
    },
    PropertyRule {
        property: ExternalPackageRefProperty::ReferenceLocator,
        value: |external_ref, _| text(&external_ref.locator),
    },
    PropertyRule {
        property: ExternalPackageRefProperty::ReferenceType,
        value: |external_ref, _| text(&external_ref.reference_type),
    },
];

impl TypedConverter for ExternalPackageRefConverter {
    type Entity = ExternalPackageRef;
    type Property = ExternalPackageRefProperty;
    const ENTITY_NAME: &'static str = "ExternalPackageRef";

    fn rules(&self) -> &'static [PropertyRule<ExternalPackageRefProperty, ExternalPackageRef>] {
        RULES
    }
}
