use super::properties::ExtractedLicensingInfoProperty;
use super::{PropertyRule, TypedConverter, optional_text, rendered_list, text};
use crate::models_spdx::ExtractedLicensingInfo;

pub struct ExtractedLicensingInfoConverter;

static RULES: &[PropertyRule<ExtractedLicensingInfoProperty, ExtractedLicensingInfo>] = &[
    PropertyRule {
        property: ExtractedLicensingInfoProperty::LicenseId,
        value: |info, _| text(&info.license_id),
    },
    PropertyRule {
        property: ExtractedLicensingInfoProperty::ExtractedText,
        value: |info, _| text(&info.extracted_text),
    },
    PropertyRule {
        property: ExtractedLicensingInfoProperty::Name,
        value: |info, _| optional_text(info.license_name.as_ref()),
    },
    PropertyRule {
        property: ExtractedLicensingInfoProperty::Comment,
        value: |info, _| optional_text(info.comment.as_ref()),
    },
    PropertyRule {
        property: ExtractedLicensingInfoProperty::SeeAlsos,
        value: |info, _| rendered_list(&info.cross_references),
    },
];

impl TypedConverter for ExtractedLicensingInfoConverter {
    type Entity = ExtractedLicensingInfo;
    type Property = ExtractedLicensingInfoProperty;
    const ENTITY_NAME: &'static str = "ExtractedLicensingInfo";

    fn rules(
        &self,
    ) -> &'static [PropertyRule<ExtractedLicensingInfoProperty, ExtractedLicensingInfo>] {
        RULES
    }
}
