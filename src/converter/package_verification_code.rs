use super::properties::PackageVerificationCodeProperty;
use super::{PropertyRule, TypedConverter, rendered_list, text};
use crate::models_spdx::PackageVerificationCode;

pub struct PackageVerificationCodeConverter;

static RULES: &[PropertyRule<PackageVerificationCodeProperty, PackageVerificationCode>] = &[
    PropertyRule {
        property: PackageVerificationCodeProperty::PackageVerificationCodeExcludedFiles,
        value: |code, _| rendered_list(&code.excluded_files),
    },
    PropertyRule {
        property: PackageVerificationCodeProperty::PackageVerificationCodeValue,
        value: |code, _| text(&code.value),
    },
];

impl TypedConverter for PackageVerificationCodeConverter {
    type Entity = PackageVerificationCode;
    type Property = PackageVerificationCodeProperty;
    const ENTITY_NAME: &'static str = "PackageVerificationCode";

    fn rules(
        &self,
    ) -> &'static [PropertyRule<PackageVerificationCodeProperty, PackageVerificationCode>] {
        RULES
    }
}
