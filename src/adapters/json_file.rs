// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON file configuration source adapter.

use crate::adapters::file::FileAdapter;
use crate::domain::{ConfigError, ConfigMap, ConfigValue, Result};
use crate::ports::ConfigParser;
use std::path::Path;

/// JSON parser implementation.
///
/// Objects become nested maps, arrays become maps keyed by element index, and
/// scalars keep their JSON type. `null` is stored as an empty string.
///
/// # Examples
///
/// ```rust
/// use layercfg::adapters::JsonParser;
/// use layercfg::domain::ConfigValue;
/// use layercfg::ports::ConfigParser;
///
/// let result = JsonParser::new().parse(r#"{"server": {"port": 8080}}"#).unwrap();
/// let server = result["server"].as_map().unwrap();
/// assert_eq!(server["port"], ConfigValue::from(8080));
/// ```
#[derive(Debug, Clone)]
pub struct JsonParser;

impl JsonParser {
    /// Creates a new JSON parser.
    pub fn new() -> Self {
        JsonParser
    }

    fn convert(value: serde_json::Value) -> ConfigValue {
        match value {
            serde_json::Value::Object(map) => ConfigValue::Map(Self::convert_object(map)),
            serde_json::Value::Array(items) => ConfigValue::Map(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, val)| (i.to_string(), Self::convert(val)))
                    .collect(),
            ),
            serde_json::Value::String(s) => ConfigValue::String(s),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ConfigValue::Integer(i)
                } else if let Some(x) = n.as_f64() {
                    ConfigValue::Float(x)
                } else {
                    ConfigValue::String(n.to_string())
                }
            }
            serde_json::Value::Bool(b) => ConfigValue::Boolean(b),
            serde_json::Value::Null => ConfigValue::String(String::new()),
        }
    }

    fn convert_object(map: serde_json::Map<String, serde_json::Value>) -> ConfigMap {
        map.into_iter()
            .map(|(key, val)| (key, Self::convert(val)))
            .collect()
    }
}

impl Default for JsonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser for JsonParser {
    fn parse(&self, content: &str) -> Result<ConfigMap> {
        if content.trim().is_empty() {
            return Ok(ConfigMap::new());
        }

        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse JSON: {}", e),
                source: Some(Box::new(e)),
            })?;

        match value {
            serde_json::Value::Object(map) => Ok(Self::convert_object(map)),
            serde_json::Value::Null => Ok(ConfigMap::new()),
            other => Err(ConfigError::ParseError {
                message: format!(
                    "JSON document root must be an object, found {}",
                    if other.is_array() { "array" } else { "scalar" }
                ),
                source: None,
            }),
        }
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }
}

/// Configuration source adapter for JSON files.
///
/// # Examples
///
/// ```rust,no_run
/// use layercfg::adapters::JsonFileAdapter;
///
/// let adapter = JsonFileAdapter::from_file("/path/to/config.json").optional(true);
/// ```
pub type JsonFileAdapter = FileAdapter<JsonParser>;

impl FileAdapter<JsonParser> {
    /// Creates an adapter for a mandatory JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        FileAdapter::new("json-file", path, JsonParser::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Section;
    use crate::ports::ConfigSource;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_json_parser_nested() {
        let result = JsonParser::new()
            .parse(r#"{"g": {"e": {"f": true}}, "name": "demo"}"#)
            .unwrap();
        let root = Section::new(&result, ":");

        assert!(root.get_bool("g:e:f").unwrap());
        assert_eq!(root.get_string("name").unwrap(), "demo");
    }

    #[test]
    fn test_json_parser_number_types() {
        let result = JsonParser::new()
            .parse(r#"{"int": 42, "neg": -7, "float": 1.5, "big": 18446744073709551615}"#)
            .unwrap();

        assert_eq!(result["int"], ConfigValue::from(42));
        assert_eq!(result["neg"], ConfigValue::from(-7));
        assert_eq!(result["float"], ConfigValue::from(1.5));
        assert!(matches!(result["big"], ConfigValue::Float(_)));
    }

    #[test]
    fn test_json_parser_array() {
        let result = JsonParser::new()
            .parse(r#"{"hosts": ["a", {"name": "b"}]}"#)
            .unwrap();
        let root = Section::new(&result, ":");

        assert_eq!(root.get_string("hosts:0").unwrap(), "a");
        assert_eq!(root.get_string("hosts:1:name").unwrap(), "b");
    }

    #[test]
    fn test_json_parser_null() {
        let result = JsonParser::new().parse(r#"{"nothing": null}"#).unwrap();
        assert_eq!(result["nothing"], ConfigValue::from(""));
    }

    #[test]
    fn test_json_parser_empty_content() {
        assert!(JsonParser::new().parse("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_json_parser_non_object_root() {
        assert!(matches!(
            JsonParser::new().parse("[1, 2]"),
            Err(ConfigError::ParseError { .. })
        ));
        assert!(matches!(
            JsonParser::new().parse("42"),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_json_parser_invalid() {
        assert!(JsonParser::new().parse("{not json").is_err());
    }

    #[test]
    fn test_json_adapter_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, r#"{{"database": {{"port": 5432}}}}"#).unwrap();

        let adapter = JsonFileAdapter::from_file(temp_file.path());
        assert_eq!(adapter.name(), "json-file");

        let map = adapter.load().unwrap();
        assert_eq!(Section::new(&map, ":").get_int("database:port").unwrap(), 5432);
    }

    #[test]
    fn test_json_parser_supported_extensions() {
        assert_eq!(JsonParser::default().supported_extensions(), &["json"]);
    }
}
