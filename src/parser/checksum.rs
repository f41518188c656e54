use super::dict_parsing::{construct_or_raise_parsing_error, entity_object, required, string_value};
use crate::converter::checksum::algorithm_from_json_string;
use crate::errors::SpdxParsingError;
use crate::logger::Logger;
use crate::models_spdx::{Checksum, ChecksumAlgorithm};
use serde_json::Value;

pub fn parse_checksum(value: &Value) -> Result<Checksum, SpdxParsingError> {
    let source = entity_object(value, "Checksum")?;
    let mut logger = Logger::new();

    let algorithm = required(source, "algorithm", &mut logger, algorithm_value);
    let checksum_value = required(source, "checksumValue", &mut logger, string_value);

    match (algorithm, checksum_value) {
        (Some(algorithm), Some(checksum_value)) if !logger.has_messages() => {
            construct_or_raise_parsing_error("Checksum", Checksum::new(algorithm, checksum_value))
        }
        _ => Err(logger.into_error()),
    }
}

fn algorithm_value(
    value: &Value,
    property_name: &str,
    logger: &mut Logger,
) -> Option<ChecksumAlgorithm> {
    let name = string_value(value, property_name, logger)?;
    let algorithm = algorithm_from_json_string(&name);
    if algorithm.is_none() {
        logger.append(format!("Invalid ChecksumAlgorithm: {name}"));
    }
    algorithm
}
