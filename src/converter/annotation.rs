use super::properties::AnnotationProperty;
use super::{PropertyRule, TypedConverter, datetime, enum_name, rendered, text};
use crate::models_spdx::Annotation;

/// Converts one annotation. The subject id is not emitted: the annotation is
/// placed inside its subject (or at document level).
pub struct AnnotationConverter;

static RULES: &[PropertyRule<AnnotationProperty, Annotation>] = &[
    PropertyRule {
        property: AnnotationProperty::AnnotationDate,
        value: |annotation, _| datetime(Some(&annotation.annotation_date)),
    },
    PropertyRule {
        property: AnnotationProperty::AnnotationType,
        value: |annotation, _| enum_name(Some(&annotation.annotation_type)),
    },
    PropertyRule {
        property: AnnotationProperty::Annotator,
        value: |annotation, _| rendered(Some(&annotation.annotator)),
    },
    PropertyRule {
        property: AnnotationProperty::Comment,
        value: |annotation, _| text(&annotation.annotation_comment),
    },
];

impl TypedConverter for AnnotationConverter {
    type Entity = Annotation;
    type Property = AnnotationProperty;
    const ENTITY_NAME: &'static str = "Annotation";

    fn rules(&self) -> &'static [PropertyRule<AnnotationProperty, Annotation>] {
        RULES
    }
}
