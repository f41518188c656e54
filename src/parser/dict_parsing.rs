//! Field extraction from JSON objects.
//!
//! Nothing here returns early on bad input: every problem is appended to the
//! caller's [`Logger`] and the field comes back as `None`.

use crate::datetime_conversions::datetime_from_str;
use crate::errors::SpdxParsingError;
use crate::logger::Logger;
use crate::models_spdx::ConstructionError;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

pub type JsonObject = Map<String, Value>;

/// Looks up a required property. Absent (or `null`) is logged as
/// `Required property <name> not specified!`.
pub fn parse_required_property<'a>(
    source: &'a JsonObject,
    property_name: &str,
    logger: &mut Logger,
) -> Option<&'a Value> {
    match source.get(property_name) {
        None | Some(Value::Null) => {
            logger.append(format!("Required property {property_name} not specified!"));
            None
        }
        Some(value) => Some(value),
    }
}

/// Looks up an optional property.
///
/// Present-but-falsy values (`""`, `0`, `[]`, `{}`, `null`) count as absent,
/// so the caller's default applies.
///
/// `false` is the one exception: it is returned as a value. Treating it as
/// absent would turn `filesAnalyzed: false` into the default `true`.
pub fn parse_optional_property<'a>(source: &'a JsonObject, property_name: &str) -> Option<&'a Value> {
    source.get(property_name).filter(|value| !is_falsy(value))
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(_) => false,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Required property converted with `convert`.
pub fn required<'a, T>(
    source: &'a JsonObject,
    property_name: &str,
    logger: &mut Logger,
    convert: impl FnOnce(&'a Value, &str, &mut Logger) -> Option<T>,
) -> Option<T> {
    parse_required_property(source, property_name, logger)
        .and_then(|value| convert(value, property_name, logger))
}

/// Optional property converted with `convert`.
pub fn optional<'a, T>(
    source: &'a JsonObject,
    property_name: &str,
    logger: &mut Logger,
    convert: impl FnOnce(&'a Value, &str, &mut Logger) -> Option<T>,
) -> Option<T> {
    parse_optional_property(source, property_name)
        .and_then(|value| convert(value, property_name, logger))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

fn wrong_type(logger: &mut Logger, property_name: &str, expected: &str, value: &Value) {
    logger.append(format!(
        "Property {property_name} must be {expected}, found {}",
        kind(value)
    ));
}

// --- Value converters, usable with `required` / `optional` ---

pub fn string_value(value: &Value, property_name: &str, logger: &mut Logger) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        other => {
            wrong_type(logger, property_name, "a string", other);
            None
        }
    }
}

pub fn bool_value(value: &Value, property_name: &str, logger: &mut Logger) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        other => {
            wrong_type(logger, property_name, "a boolean", other);
            None
        }
    }
}

pub fn u64_value(value: &Value, property_name: &str, logger: &mut Logger) -> Option<u64> {
    match value.as_u64() {
        Some(n) => Some(n),
        None => {
            wrong_type(logger, property_name, "a non-negative integer", value);
            None
        }
    }
}

pub fn object_value<'a>(
    value: &'a Value,
    property_name: &str,
    logger: &mut Logger,
) -> Option<&'a JsonObject> {
    match value {
        Value::Object(map) => Some(map),
        other => {
            wrong_type(logger, property_name, "an object", other);
            None
        }
    }
}

pub fn list_value<'a>(
    value: &'a Value,
    property_name: &str,
    logger: &mut Logger,
) -> Option<&'a [Value]> {
    match value {
        Value::Array(items) => Some(items),
        other => {
            wrong_type(logger, property_name, "a list", other);
            None
        }
    }
}

pub fn string_list_value(
    value: &Value,
    property_name: &str,
    logger: &mut Logger,
) -> Option<Vec<String>> {
    list_of(value, property_name, logger, string_value)
}

/// Every element converted with `item`; `None` if any element failed.
pub fn list_of<T>(
    value: &Value,
    property_name: &str,
    logger: &mut Logger,
    item: impl Fn(&Value, &str, &mut Logger) -> Option<T>,
) -> Option<Vec<T>> {
    let items = list_value(value, property_name, logger)?;
    let mut parsed = Vec::with_capacity(items.len());
    let mut complete = true;
    for element in items {
        match item(element, property_name, logger) {
            Some(converted) => parsed.push(converted),
            None => complete = false,
        }
    }
    complete.then_some(parsed)
}

pub fn datetime_value(
    value: &Value,
    property_name: &str,
    logger: &mut Logger,
) -> Option<DateTime<Utc>> {
    let text = string_value(value, property_name, logger)?;
    match datetime_from_str(&text) {
        Ok(date) => Some(date),
        Err(err) => {
            logger.append(format!(
                "Property {property_name} is not a valid ISO-8601 timestamp \"{text}\": {err}"
            ));
            None
        }
    }
}

/// String parsed through `FromStr`: actors, license expressions, sentinels.
pub fn from_str_value<T>(value: &Value, property_name: &str, logger: &mut Logger) -> Option<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let text = string_value(value, property_name, logger)?;
    match text.parse() {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            logger.append(format!("Invalid value for {property_name}: {err}"));
            None
        }
    }
}

/// Symbolic enum name (`COPY_OF`) through the enum's serde representation.
pub fn enum_value<T: DeserializeOwned>(
    value: &Value,
    property_name: &str,
    logger: &mut Logger,
) -> Option<T> {
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            logger.append(format!("Invalid value for {property_name}: {err}"));
            None
        }
    }
}

// --- Entity-level helpers ---

/// Entry point of every entity parser: the value must be an object.
pub fn entity_object<'a>(value: &'a Value, entity: &str) -> Result<&'a JsonObject, SpdxParsingError> {
    value.as_object().ok_or_else(|| {
        SpdxParsingError::new(vec![format!(
            "{entity} must be an object, found {}",
            kind(value)
        )])
    })
}

/// Merges a sub-parser's failure into `logger`.
pub fn parse_field_or_log_error<T>(
    logger: &mut Logger,
    result: Result<T, SpdxParsingError>,
) -> Option<T> {
    match result {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            logger.append_all(err.into_messages());
            None
        }
    }
}

/// Parses every element of a list with `parse`, keeping the successes and
/// logging every failure.
pub fn parse_list_or_log_errors<T>(
    value: &Value,
    property_name: &str,
    logger: &mut Logger,
    parse: impl Fn(&Value) -> Result<T, SpdxParsingError>,
) -> Vec<T> {
    let Some(items) = list_value(value, property_name, logger) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| parse_field_or_log_error(logger, parse(item)))
        .collect()
}

/// Optional list of nested entities; absent means empty.
pub fn optional_entity_list<T>(
    source: &JsonObject,
    property_name: &str,
    logger: &mut Logger,
    parse: impl Fn(&Value) -> Result<T, SpdxParsingError>,
) -> Vec<T> {
    parse_optional_property(source, property_name)
        .map(|value| parse_list_or_log_errors(value, property_name, logger, parse))
        .unwrap_or_default()
}

/// Optional nested entity.
pub fn optional_entity<T>(
    source: &JsonObject,
    property_name: &str,
    logger: &mut Logger,
    parse: impl FnOnce(&Value) -> Result<T, SpdxParsingError>,
) -> Option<T> {
    let value = parse_optional_property(source, property_name)?;
    parse_field_or_log_error(logger, parse(value))
}

/// Maps a constructor's refusal into a parsing error.
pub fn construct_or_raise_parsing_error<T>(
    entity: &str,
    result: Result<T, ConstructionError>,
) -> Result<T, SpdxParsingError> {
    result.map_err(|err| {
        SpdxParsingError::new(vec![format!("Error while constructing {entity}: {err}")])
    })
}
