// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which provides an interface for
//! decoding configuration documents in different formats (YAML, JSON, etc.).

use crate::domain::{ConfigMap, Result};

/// A trait for parsing configuration documents.
///
/// Parsers keep the nesting of the document: objects become nested maps and
/// scalars keep their native type. For example,
///
/// ```yaml
/// database:
///   host: localhost
///   port: 5432
/// ```
///
/// decodes into a `database` map holding the string `localhost` and the integer
/// `5432`, addressed later as `database:host` and `database:port`.
///
/// # Examples
///
/// ```rust
/// use layercfg::ports::ConfigParser;
/// use layercfg::domain::{ConfigMap, ConfigValue, Result};
///
/// struct KeyValueParser;
///
/// impl ConfigParser for KeyValueParser {
///     fn parse(&self, content: &str) -> Result<ConfigMap> {
///         Ok(content
///             .lines()
///             .filter_map(|line| line.split_once('='))
///             .map(|(k, v)| (k.trim().to_string(), ConfigValue::from(v.trim())))
///             .collect())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["kv"]
///     }
/// }
///
/// let map = KeyValueParser.parse("name = demo").unwrap();
/// assert_eq!(map["name"], ConfigValue::from("demo"));
/// ```
pub trait ConfigParser: Send + Sync {
    /// Parses document content into a nested map.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`](crate::domain::ConfigError::ParseError)
    /// if the content is not a valid document or its root is not a mapping.
    fn parse(&self, content: &str) -> Result<ConfigMap>;

    /// Returns the file extensions supported by this parser.
    ///
    /// Extensions are given without the leading dot.
    fn supported_extensions(&self) -> &[&str];

    /// Returns `true` if this parser handles files with the given extension.
    fn supports_extension(&self, extension: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
