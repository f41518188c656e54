use super::properties::ChecksumProperty;
use super::{PropertyRule, TypedConverter, text};
use crate::models_spdx::{Checksum, ChecksumAlgorithm};
use serde_json::Value;

pub struct ChecksumConverter;

static RULES: &[PropertyRule<ChecksumProperty, Checksum>] = &[
    PropertyRule {
        property: ChecksumProperty::Algorithm,
        value: |checksum, _| {
            Ok(Some(Value::String(algorithm_to_json_string(
                checksum.algorithm,
            ))))
        },
    },
    PropertyRule {
        property: ChecksumProperty::ChecksumValue,
        value: |checksum, _| text(&checksum.value),
    },
];

impl TypedConverter for ChecksumConverter {
    type Entity = Checksum;
    type Property = ChecksumProperty;
    const ENTITY_NAME: &'static str = "Checksum";

    fn rules(&self) -> &'static [PropertyRule<ChecksumProperty, Checksum>] {
        RULES
    }
}

/// `SHA_256` -> `SHA-256`, with the BLAKE2 family spelled `BLAKE2b-...`.
pub fn algorithm_to_json_string(algorithm: ChecksumAlgorithm) -> String {
    let name_with_dash = algorithm.name().replace('_', "-");
    if name_with_dash.contains("BLAKE2B") {
        return name_with_dash.replace("BLAKE2B", "BLAKE2b");
    }
    name_with_dash
}

/// Accepts the dashed rendering as well as the compact schema spelling
/// (`SHA-256`, `SHA256`, `blake2b-256`).
pub fn algorithm_from_json_string(value: &str) -> Option<ChecksumAlgorithm> {
    let normalize = |s: &str| {
        s.chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_uppercase()
    };
    let wanted = normalize(value);
    ChecksumAlgorithm::ALL
        .into_iter()
        .find(|algorithm| normalize(algorithm.name()) == wanted)
}
