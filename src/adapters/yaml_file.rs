// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML file configuration source adapter.
//!
//! This module provides the YAML parser and the adapter that reads configuration
//! from YAML files.

use crate::adapters::file::FileAdapter;
use crate::domain::{ConfigError, ConfigMap, ConfigValue, Result};
use crate::ports::ConfigParser;
use std::path::Path;

/// YAML parser implementation.
///
/// Mappings become nested maps, sequences become maps keyed by element index, and
/// scalars keep their YAML type. A null value is stored as an empty string.
///
/// # Examples
///
/// ```rust
/// use layercfg::adapters::YamlParser;
/// use layercfg::domain::ConfigValue;
/// use layercfg::ports::ConfigParser;
///
/// let parser = YamlParser::new();
/// let yaml_content = "database:\n  host: localhost\n  port: 5432";
/// let result = parser.parse(yaml_content).unwrap();
/// let database = result["database"].as_map().unwrap();
/// assert_eq!(database["port"], ConfigValue::from(5432));
/// ```
#[derive(Debug, Clone)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    /// Converts a YAML value into a configuration value.
    fn convert(value: serde_yaml::Value) -> ConfigValue {
        match value {
            serde_yaml::Value::Mapping(map) => ConfigValue::Map(Self::convert_mapping(map)),
            serde_yaml::Value::Sequence(seq) => ConfigValue::Map(
                seq.into_iter()
                    .enumerate()
                    .map(|(i, val)| (i.to_string(), Self::convert(val)))
                    .collect(),
            ),
            serde_yaml::Value::String(s) => ConfigValue::String(s),
            serde_yaml::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ConfigValue::Integer(i)
                } else if let Some(x) = n.as_f64() {
                    ConfigValue::Float(x)
                } else {
                    ConfigValue::String(n.to_string())
                }
            }
            serde_yaml::Value::Bool(b) => ConfigValue::Boolean(b),
            serde_yaml::Value::Null => ConfigValue::String(String::new()),
            serde_yaml::Value::Tagged(tagged) => Self::convert(tagged.value),
        }
    }

    fn convert_mapping(map: serde_yaml::Mapping) -> ConfigMap {
        map.into_iter()
            .filter_map(|(key, val)| Self::key_string(&key).map(|k| (k, Self::convert(val))))
            .collect()
    }

    /// Renders a mapping key; complex keys are skipped.
    fn key_string(key: &serde_yaml::Value) -> Option<String> {
        match key {
            serde_yaml::Value::String(s) => Some(s.clone()),
            serde_yaml::Value::Number(n) => Some(n.to_string()),
            serde_yaml::Value::Bool(b) => Some(b.to_string()),
            other => {
                tracing::debug!("Skipping YAML mapping entry with non-scalar key: {:?}", other);
                None
            }
        }
    }
}

impl Default for YamlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser for YamlParser {
    fn parse(&self, content: &str) -> Result<ConfigMap> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        match value {
            serde_yaml::Value::Null => Ok(ConfigMap::new()),
            serde_yaml::Value::Mapping(map) => Ok(Self::convert_mapping(map)),
            other => {
                let found = match other {
                    serde_yaml::Value::Sequence(_) => "sequence",
                    serde_yaml::Value::Tagged(_) => "tagged value",
                    _ => "scalar",
                };
                Err(ConfigError::ParseError {
                    message: format!("YAML document root must be a mapping, found {}", found),
                    source: None,
                })
            }
        }
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

/// Configuration source adapter for YAML files.
///
/// # Examples
///
/// ```rust,no_run
/// use layercfg::adapters::YamlFileAdapter;
/// use layercfg::ports::ConfigSource;
///
/// // Load from a specific file
/// let adapter = YamlFileAdapter::from_file("/path/to/config.yaml");
///
/// // Load from default OS location, tolerating a missing file
/// let adapter = YamlFileAdapter::from_default_location("myapp", "com.example")
///     .unwrap()
///     .optional(true);
/// ```
pub type YamlFileAdapter = FileAdapter<YamlParser>;

impl FileAdapter<YamlParser> {
    /// Creates an adapter for a mandatory YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        FileAdapter::new("yaml-file", path, YamlParser::new())
    }

    /// Creates an adapter for `config.yaml` in the default OS-appropriate location.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, "config.yaml")
    }

    /// Creates an adapter with a custom file name in the default location.
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        FileAdapter::in_config_dir(
            "yaml-file",
            app_name,
            qualifier,
            filename,
            YamlParser::new(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Section;
    use crate::ports::ConfigSource;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(yaml: &str) -> ConfigMap {
        YamlParser::new().parse(yaml).unwrap()
    }

    #[test]
    fn test_yaml_parser_simple() {
        let result = parse("key: value");
        assert_eq!(result.get("key"), Some(&ConfigValue::from("value")));
    }

    #[test]
    fn test_yaml_parser_nested() {
        let result = parse(
            r#"
database:
  host: localhost
  port: 5432
"#,
        );
        let root = Section::new(&result, ":");

        assert_eq!(root.get_string("database:host").unwrap(), "localhost");
        assert_eq!(
            root.get_value("database:port").unwrap(),
            &ConfigValue::from(5432)
        );
    }

    #[test]
    fn test_yaml_parser_deeply_nested() {
        let result = parse(
            r#"
app:
  database:
    connection:
      host: localhost
      port: 5432
"#,
        );
        let connection = Section::new(&result, ":").section("app:database:connection");

        assert_eq!(connection.get_string("host").unwrap(), "localhost");
        assert_eq!(connection.get_int("port").unwrap(), 5432);
    }

    #[test]
    fn test_yaml_parser_array() {
        let result = parse(
            r#"
servers:
  - server1
  - server2
  - host: server3
"#,
        );
        let root = Section::new(&result, ":");

        assert_eq!(root.get_string("servers:0").unwrap(), "server1");
        assert_eq!(root.get_string("servers:1").unwrap(), "server2");
        assert_eq!(root.get_string("servers:2:host").unwrap(), "server3");
    }

    #[test]
    fn test_yaml_parser_mixed_types() {
        let result = parse(
            r#"
string_value: hello
number_value: 42
float_value: 2.5
bool_value: true
null_value: null
quoted_number: "42"
"#,
        );

        assert_eq!(result["string_value"], ConfigValue::from("hello"));
        assert_eq!(result["number_value"], ConfigValue::from(42));
        assert_eq!(result["float_value"], ConfigValue::from(2.5));
        assert_eq!(result["bool_value"], ConfigValue::from(true));
        assert_eq!(result["null_value"], ConfigValue::from(""));
        assert_eq!(result["quoted_number"], ConfigValue::from("42"));
    }

    #[test]
    fn test_yaml_parser_non_string_keys() {
        let result = parse("1: one\ntrue: yes\n");
        assert_eq!(result["1"], ConfigValue::from("one"));
        assert!(result.contains_key("true"));
    }

    #[test]
    fn test_yaml_parser_empty_document() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_yaml_parser_scalar_root() {
        let result = YamlParser::new().parse("just a string");
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_yaml_parser_sequence_root() {
        let result = YamlParser::new().parse("- a\n- b\n");
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_yaml_parser_invalid() {
        let result = YamlParser::new().parse("invalid: yaml: content:");
        assert!(result.is_err());
    }

    #[test]
    fn test_yaml_parser_supported_extensions() {
        let parser = YamlParser::new();
        let extensions = parser.supported_extensions();

        assert_eq!(extensions.len(), 2);
        assert!(extensions.contains(&"yaml"));
        assert!(extensions.contains(&"yml"));
    }

    #[test]
    fn test_yaml_adapter_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "database:\n  host: localhost\n  port: 5432").unwrap();

        let adapter = YamlFileAdapter::from_file(temp_file.path());
        assert_eq!(adapter.name(), "yaml-file");

        let map = adapter.load().unwrap();
        let root = Section::new(&map, ":");
        assert_eq!(root.get_string("database:host").unwrap(), "localhost");
    }

    #[test]
    fn test_yaml_adapter_nonexistent_file() {
        let adapter = YamlFileAdapter::from_file("/nonexistent/path/to/config.yaml");
        assert!(adapter.load().is_err());
    }

    #[test]
    fn test_yaml_parser_default() {
        let parser = YamlParser::default();
        assert_eq!(parser.supported_extensions().len(), 2);
    }
}
