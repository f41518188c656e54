//! Version detection for SBOM files
//!
//! Looks at a parsed JSON value and tells SPDX 2.x documents apart from
//! SPDX 3 JSON-LD and from CycloneDX before the SPDX parser runs.

use crate::errors::ConverterError;
use log::{info, warn};
use serde_json::Value;

/// SBOM format type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SbomFormat {
    CycloneDx(String), // version string
    Spdx(String),      // version string, without the "SPDX-" prefix
    Unknown,
}

impl SbomFormat {
    pub fn is_spdx2(&self) -> bool {
        matches!(self, SbomFormat::Spdx(v) if v.starts_with("2."))
    }
}

/// Detect the SBOM format and version from JSON content
pub fn detect_format(value: &Value) -> SbomFormat {
    if value.get("bomFormat").and_then(Value::as_str) == Some("CycloneDX") {
        let version = value
            .get("specVersion")
            .and_then(Value::as_str)
            .unwrap_or("unknown");
        return SbomFormat::CycloneDx(version.to_string());
    }

    if let Some(spdx_version) = value.get("spdxVersion").and_then(Value::as_str) {
        let version = spdx_version.strip_prefix("SPDX-").unwrap_or(spdx_version);
        return SbomFormat::Spdx(version.to_string());
    }

    // SPDX 3 JSON-LD: an @context pointing at the SPDX model and a @graph
    let context_is_spdx = match value.get("@context") {
        Some(Value::String(context)) => context.contains("spdx"),
        Some(Value::Array(contexts)) => contexts
            .iter()
            .filter_map(Value::as_str)
            .any(|context| context.contains("spdx")),
        _ => false,
    };
    if context_is_spdx || value.get("spdxId").is_some() {
        return SbomFormat::Spdx("3.0".to_string());
    }

    // SPDX 2.x without spdxVersion; the parser will report the missing field
    if value.get("SPDXID").is_some() {
        return SbomFormat::Spdx("2.x".to_string());
    }

    SbomFormat::Unknown
}

/// Get a description of the detected format
pub fn format_description(format: &SbomFormat) -> String {
    match format {
        SbomFormat::CycloneDx(v) => format!("CycloneDX {}", v),
        SbomFormat::Spdx(v) => format!("SPDX {}", v),
        SbomFormat::Unknown => "Unknown format".to_string(),
    }
}

/// Rejects inputs the SPDX 2.x parser cannot handle.
///
/// Unrecognised input is let through with a warning so the parser can list
/// what is missing.
pub fn check_supported(format: &SbomFormat) -> Result<(), ConverterError> {
    match format {
        SbomFormat::CycloneDx(_) => Err(ConverterError::UnsupportedFormat(format!(
            "{} input is not an SPDX document",
            format_description(format)
        ))),
        SbomFormat::Spdx(_) if format.is_spdx2() => {
            info!("Detected {}", format_description(format));
            Ok(())
        }
        SbomFormat::Spdx(version) => Err(ConverterError::UnsupportedVersion(version.clone())),
        SbomFormat::Unknown => {
            warn!("Input does not look like an SPDX document, parsing anyway");
            Ok(())
        }
    }
}
