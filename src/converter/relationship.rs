use super::properties::RelationshipProperty;
use super::{PropertyRule, TypedConverter, enum_name, optional_text, rendered, text};
use crate::models_spdx::Relationship;

pub struct RelationshipConverter;

static RULES: &[PropertyRule<RelationshipProperty, Relationship>] = &[
    PropertyRule {
        property: RelationshipProperty::SpdxElementId,
        value: |relationship, _| text(&relationship.spdx_element_id),
    },
    PropertyRule {
        property: RelationshipProperty::Comment,
        value: |relationship, _| optional_text(relationship.comment.as_ref()),
    },
    PropertyRule {
        property: RelationshipProperty::RelatedSpdxElement,
        value: |relationship, _| rendered(Some(&relationship.related_spdx_element_id)),
    },
    PropertyRule {
        property: RelationshipProperty::RelationshipType,
        value: |relationship, _| enum_name(Some(&relationship.relationship_type)),
    },
];

impl TypedConverter for RelationshipConverter {
    type Entity = Relationship;
    type Property = RelationshipProperty;
    const ENTITY_NAME: &'static str = "Relationship";

    fn rules(&self) -> &'static [PropertyRule<RelationshipProperty, Relationship>] {
        RULES
    }
}
