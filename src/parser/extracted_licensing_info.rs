use super::dict_parsing::{
    construct_or_raise_parsing_error, entity_object, optional, parse_field_or_log_error, required,
    string_list_value, string_value,
};
use crate::errors::SpdxParsingError;
use crate::logger::Logger;
use crate::models_spdx::ExtractedLicensingInfo;
use serde_json::Value;

pub fn parse_extracted_licensing_info(
    value: &Value,
) -> Result<ExtractedLicensingInfo, SpdxParsingError> {
    let source = entity_object(value, "ExtractedLicensingInfo")?;
    let mut logger = Logger::new();

    let license_id = required(source, "licenseId", &mut logger, string_value);
    let extracted_text = required(source, "extractedText", &mut logger, string_value);
    let license_name = optional(source, "name", &mut logger, string_value);
    let cross_references = optional(source, "seeAlsos", &mut logger, string_list_value);
    let comment = optional(source, "comment", &mut logger, string_value);

    let (Some(license_id), Some(extracted_text)) = (license_id, extracted_text) else {
        return Err(logger.into_error());
    };
    let constructed = construct_or_raise_parsing_error(
        "ExtractedLicensingInfo",
        ExtractedLicensingInfo::new(license_id, extracted_text),
    );
    let mut info = match parse_field_or_log_error(&mut logger, constructed) {
        Some(info) if !logger.has_messages() => info,
        _ => return Err(logger.into_error()),
    };
    info.license_name = license_name;
    info.cross_references = cross_references.unwrap_or_default();
    info.comment = comment;
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_extracted_licensing_info() {
        let info = parse_extracted_licensing_info(&json!({
            "licenseId": "LicenseRef-Beerware-4.2",
            "extractedText": "\"THE BEER-WARE LICENSE\" (Revision 42)",
            "name": "Beer-Ware License (Version 42)",
            "seeAlsos": ["http://people.freebsd.org/~phk/"],
            "comment": "The beerware license has a couple of other standard variants."
        }))
        .unwrap();

        assert_eq!(info.license_id, "LicenseRef-Beerware-4.2");
        assert_eq!(info.license_name.as_deref(), Some("Beer-Ware License (Version 42)"));
        assert_eq!(info.cross_references, ["http://people.freebsd.org/~phk/"]);
        assert!(info.comment.is_some());
    }

    #[test]
    fn test_blank_license_id() {
        let err = parse_extracted_licensing_info(&json!({
            "licenseId": " ",
            "extractedText": "text",
            "seeAlsos": "http://example.com"
        }))
        .unwrap_err();

        assert_eq!(
            err.messages(),
            [
                "Property seeAlsos must be a list, found a string",
                "Error while constructing ExtractedLicensingInfo: license id must not be empty"
            ]
        );
    }
}
