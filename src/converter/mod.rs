//! Model -> JSON conversion.
//!
//! Every entity kind has a property enumeration (see [`properties`]) and a
//! converter holding one [`PropertyRule`] per property. A rule is a small
//! pure function computing the JSON value of its property; [`TypedConverter::convert`]
//! walks the rules in order and drops properties whose value is null, an
//! empty string or an empty array.

pub mod annotation;
pub mod checksum;
pub mod creation_info;
pub mod document;
pub mod external_document_ref;
pub mod external_package_ref;
pub mod extracted_licensing_info;
pub mod file;
pub mod package;
pub mod package_verification_code;
pub mod properties;
pub mod relationship;
pub mod relationship_filters;
pub mod snippet;

pub use annotation::AnnotationConverter;
pub use checksum::ChecksumConverter;
pub use creation_info::CreationInfoConverter;
pub use document::DocumentConverter;
pub use external_document_ref::ExternalDocumentRefConverter;
pub use external_package_ref::ExternalPackageRefConverter;
pub use extracted_licensing_info::ExtractedLicensingInfoConverter;
pub use file::FileConverter;
pub use package::PackageConverter;
pub use package_verification_code::PackageVerificationCodeConverter;
pub use relationship::RelationshipConverter;
pub use snippet::SnippetConverter;

use crate::casing::snake_case_to_camel_case;
use crate::datetime_conversions::datetime_to_iso_string;
use crate::errors::ConverterError;
use crate::models_spdx::Document;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// JSON key of every SPDX identifier property, at any level.
pub const SPDX_ID_KEY: &str = "SPDXID";

/// One named property of an entity kind.
pub trait JsonProperty: Copy + fmt::Debug + PartialEq + 'static {
    /// Every property of the kind, in emission order.
    const ALL: &'static [Self];

    /// Canonical lower_snake_case name.
    fn snake_name(&self) -> &'static str;

    fn is_spdx_id(&self) -> bool {
        false
    }
}

/// JSON key for a property: lowerCamelCase, except the SPDX id.
pub fn json_property_name<P: JsonProperty>(property: P) -> String {
    if property.is_spdx_id() {
        SPDX_ID_KEY.to_string()
    } else {
        snake_case_to_camel_case(property.snake_name())
    }
}

/// Result of a property's value function. `Ok(None)` omits the key.
pub type PropertyValue = Result<Option<Value>, ConverterError>;

/// Binds a property to the function computing its value.
pub struct PropertyRule<P, T: 'static> {
    pub property: P,
    pub value: fn(&T, Option<&Document>) -> PropertyValue,
}

pub trait TypedConverter {
    type Entity: 'static;
    type Property: JsonProperty;

    /// Entity kind, used in error messages.
    const ENTITY_NAME: &'static str;

    fn rules(&self) -> &'static [PropertyRule<Self::Property, Self::Entity>];

    /// Whether `convert` needs the enclosing document for cross-references.
    fn requires_full_document(&self) -> bool {
        false
    }

    fn json_property_name(&self, property: Self::Property) -> String {
        json_property_name(property)
    }

    fn convert(
        &self,
        entity: &Self::Entity,
        document: Option<&Document>,
    ) -> Result<Map<String, Value>, ConverterError> {
        if self.requires_full_document() && document.is_none() {
            return Err(ConverterError::MissingDocument(Self::ENTITY_NAME));
        }

        let mut result = Map::new();
        for rule in self.rules() {
            match (rule.value)(entity, document)? {
                Some(value) if !is_empty_value(&value) => {
                    result.insert(self.json_property_name(rule.property), value);
                }
                _ => {}
            }
        }
        Ok(result)
    }
}

/// Null, `""` and `[]` never make it into the output.
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

// --- Value helpers shared by the per-entity rule tables ---

pub(crate) fn text(value: &str) -> PropertyValue {
    Ok(Some(Value::String(value.to_string())))
}

pub(crate) fn optional_text(value: Option<&String>) -> PropertyValue {
    Ok(value.map(|v| Value::String(v.clone())))
}

/// Renders through `Display`: actors, license expressions, sentinels.
pub(crate) fn rendered<T: fmt::Display>(value: Option<&T>) -> PropertyValue {
    Ok(value.map(|v| Value::String(v.to_string())))
}

pub(crate) fn rendered_list<T: fmt::Display>(values: &[T]) -> PropertyValue {
    Ok(Some(Value::Array(
        values.iter().map(|v| Value::String(v.to_string())).collect(),
    )))
}

pub(crate) fn datetime(value: Option<&DateTime<Utc>>) -> PropertyValue {
    Ok(value.map(|d| Value::String(datetime_to_iso_string(d))))
}

/// Symbolic name of a serde-annotated enum, e.g. `COPY_OF`.
pub(crate) fn enum_name<T: Serialize>(value: Option<&T>) -> PropertyValue {
    value
        .map(|v| serde_json::to_value(v).map_err(ConverterError::from))
        .transpose()
}

pub(crate) fn enum_names<T: Serialize>(values: &[T]) -> PropertyValue {
    Ok(Some(serde_json::to_value(values)?))
}

pub(crate) fn nested<C: TypedConverter>(
    converter: &C,
    entity: &C::Entity,
    document: Option<&Document>,
) -> PropertyValue {
    Ok(Some(Value::Object(converter.convert(entity, document)?)))
}

pub(crate) fn nested_list<'a, C, I>(
    converter: &C,
    entities: I,
    document: Option<&Document>,
) -> PropertyValue
where
    C: TypedConverter,
    C::Entity: 'a,
    I: IntoIterator<Item = &'a C::Entity>,
{
    let converted = entities
        .into_iter()
        .map(|entity| converter.convert(entity, document).map(Value::Object))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Some(Value::Array(converted)))
}

/// Annotations whose subject is `spdx_id`, converted for nesting in that element.
pub(crate) fn element_annotations(spdx_id: &str, document: Option<&Document>) -> PropertyValue {
    let Some(document) = document else {
        return Ok(None);
    };
    nested_list(
        &AnnotationConverter,
        document.annotations.iter().filter(|a| a.spdx_id == spdx_id),
        Some(document),
    )
}

#[cfg(test)]
mod tests {
    use super::properties::*;
    use super::*;

    fn all_names<P: JsonProperty>() -> Vec<String> {
        P::ALL.iter().map(|p| json_property_name(*p)).collect()
    }

    #[test]
    fn test_spdx_id_is_the_only_non_camel_case_key() {
        let mut names = Vec::new();
        names.extend(all_names::<DocumentProperty>());
        names.extend(all_names::<CreationInfoProperty>());
        names.extend(all_names::<ExternalDocumentRefProperty>());
        names.extend(all_names::<ChecksumProperty>());
        names.extend(all_names::<AnnotationProperty>());
        names.extend(all_names::<ExternalPackageRefProperty>());
        names.extend(all_names::<PackageVerificationCodeProperty>());
        names.extend(all_names::<PackageProperty>());
        names.extend(all_names::<FileProperty>());
        names.extend(all_names::<SnippetProperty>());
        names.extend(all_names::<RelationshipProperty>());
        names.extend(all_names::<ExtractedLicensingInfoProperty>());

        for name in names {
            if name == SPDX_ID_KEY {
                continue;
            }
            let first = name.chars().next().unwrap();
            assert!(first.is_ascii_lowercase(), "{name} is not lowerCamelCase");
            assert!(!name.contains('_'), "{name} is not lowerCamelCase");
        }
    }

    #[test]
    fn test_json_property_name_is_deterministic() {
        assert_eq!(json_property_name(PackageProperty::SpdxId), "SPDXID");
        assert_eq!(json_property_name(FileProperty::SpdxId), "SPDXID");
        assert_eq!(json_property_name(DocumentProperty::SpdxId), "SPDXID");
        assert_eq!(
            json_property_name(RelationshipProperty::SpdxElementId),
            "spdxElementId"
        );
        assert_eq!(
            json_property_name(PackageProperty::PackageVerificationCode),
            json_property_name(PackageProperty::PackageVerificationCode)
        );
    }

    #[test]
    fn test_is_empty_value() {
        assert!(is_empty_value(&Value::Null));
        assert!(is_empty_value(&Value::String(String::new())));
        assert!(is_empty_value(&Value::Array(vec![])));
        assert!(!is_empty_value(&Value::Bool(false)));
        assert!(!is_empty_value(&Value::from(0)));
    }
}
