use super::ConstructionError;
use std::fmt;
use std::str::FromStr;

const NOASSERTION: &str = "NOASSERTION";
const NONE: &str = "NONE";

/// A field that holds either a real value or one of SPDX's sentinels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpdxValue<T> {
    Value(T),
    NoAssertion,
    None,
}

impl<T> SpdxValue<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            SpdxValue::Value(value) => Some(value),
            SpdxValue::NoAssertion | SpdxValue::None => None,
        }
    }
}

impl<T> From<T> for SpdxValue<T> {
    fn from(value: T) -> Self {
        SpdxValue::Value(value)
    }
}

impl From<&str> for SpdxValue<String> {
    fn from(value: &str) -> Self {
        SpdxValue::Value(value.to_string())
    }
}

impl<T: fmt::Display> fmt::Display for SpdxValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpdxValue::Value(value) => value.fmt(f),
            SpdxValue::NoAssertion => f.write_str(NOASSERTION),
            SpdxValue::None => f.write_str(NONE),
        }
    }
}

impl<T: FromStr> FromStr for SpdxValue<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            NOASSERTION => Ok(SpdxValue::NoAssertion),
            NONE => Ok(SpdxValue::None),
            other => other.parse().map(SpdxValue::Value),
        }
    }
}

/// A license expression, kept as its canonical text.
///
/// Only trimmed and checked for emptiness; the expression grammar is not
/// interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LicenseExpression(String);

impl LicenseExpression {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LicenseExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LicenseExpression {
    type Err = ConstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ConstructionError::InvalidLicenseExpression(s.to_string()));
        }
        Ok(LicenseExpression(trimmed.to_string()))
    }
}
