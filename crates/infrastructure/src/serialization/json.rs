//! Stable JSON output for run reports.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Error type for report serialization.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// The value could not be serialized.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The serializer produced invalid UTF-8.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serializes a value to deterministic JSON.
///
/// Output is indented with two spaces and ends with a newline. Map keys keep
/// the order of the source type, so use `BTreeMap` for sorted output.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable<T: Serialize>(value: &T) -> Result<String, SerializationError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    let mut json = String::from_utf8(buffer)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    #[test]
    fn test_stable_output_format() {
        let mut map = BTreeMap::new();
        map.insert("environment", "prod");
        map.insert("base_uri", "https://reqres.in/");

        let json = to_json_stable(&map).unwrap();
        assert_eq!(
            json,
            "{\n  \"base_uri\": \"https://reqres.in/\",\n  \"environment\": \"prod\"\n}\n"
        );
    }

    #[test]
    fn test_non_string_keys_fail() {
        let mut map = BTreeMap::new();
        map.insert(vec![1u8], "value");

        assert!(matches!(
            to_json_stable(&map),
            Err(SerializationError::Serialize(_))
        ));
    }
}
