use json::JsonValue;

use super::{parse_string_list, ParsingError};

/// Parses the version index, newest version first.
pub fn parse_versions(json: &JsonValue) -> Result<Vec<String>, ParsingError> {
    if !json.is_array() {
        return Err(ParsingError::InvalidType("root".into()));
    }
    parse_string_list(json, "versions")
}
