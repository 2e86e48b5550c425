//! Flat API description parser.
//!
//! The description is read fully into memory before anything else happens.
//! Keys the generator does not use (enums, consts, callback structs, fields)
//! are ignored.

use crate::error::ParseError;
use crate::types::Schema;
use std::path::Path;

/// Parses a flat API description from a JSON string.
///
/// # Arguments
/// * `json` - JSON document content
///
/// # Returns
/// Parsed schema or parse error.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or a required key is missing.
pub fn parse_schema(json: &str) -> Result<Schema, ParseError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses a flat API description file.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or does not parse.
pub fn parse_schema_file(path: &Path) -> Result<Schema, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_schema(&json)
}
