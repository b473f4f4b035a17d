// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the errors that can occur while loading sources and while
//! querying a built configuration tree. All errors use `thiserror` for proper error
//! handling and conversion.

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// The main error type for configuration operations.
///
/// Querying a tree can only ever produce [`ConfigError::Absent`] or
/// [`ConfigError::InvalidType`]; the remaining variants are raised while loading
/// sources. The enum is marked as `#[non_exhaustive]` to allow for future additions
/// without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use layercfg::domain::errors::ConfigError;
///
/// fn lookup() -> Result<String, ConfigError> {
///     Err(ConfigError::Absent {
///         path: "database:host".to_string(),
///     })
/// }
///
/// assert!(lookup().unwrap_err().is_absent());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The requested section or value does not exist in the tree.
    #[error("Configuration path not found: {path}")]
    Absent {
        /// The path that could not be resolved
        path: String,
    },

    /// The path resolved to a value that could not be coerced to the requested type.
    #[error("Failed to convert configuration value at '{path}' to type {target_type}: {source}")]
    InvalidType {
        /// The path of the value being converted
        path: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An error occurred in a configuration source.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to parse a configuration document.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConfigError {
    /// Creates an `InvalidType` error from a `ParseIntError`.
    pub fn from_parse_int_error(path: String, err: ParseIntError) -> Self {
        ConfigError::InvalidType {
            path,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates an `InvalidType` error from a `ParseFloatError`.
    pub fn from_parse_float_error(path: String, err: ParseFloatError) -> Self {
        ConfigError::InvalidType {
            path,
            target_type: "float".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates an `InvalidType` error for a literal outside the boolean vocabulary.
    pub fn from_bool_literal(path: String, raw: &str) -> Self {
        ConfigError::InvalidType {
            path,
            target_type: "boolean".to_string(),
            source: format!("unrecognized boolean literal {:?}", raw).into(),
        }
    }

    /// Returns `true` if the error reports a missing section or value.
    pub fn is_absent(&self) -> bool {
        matches!(self, ConfigError::Absent { .. })
    }

    /// Returns `true` if the error reports a failed type coercion.
    pub fn is_invalid_type(&self) -> bool {
        matches!(self, ConfigError::InvalidType { .. })
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_error() {
        let error = ConfigError::Absent {
            path: "a:b".to_string(),
        };
        assert_eq!(error.to_string(), "Configuration path not found: a:b");
        assert!(error.is_absent());
        assert!(!error.is_invalid_type());
    }

    #[test]
    fn test_invalid_type_error() {
        let source_error = "invalid value".parse::<i64>().unwrap_err();
        let error = ConfigError::InvalidType {
            path: "server:port".to_string(),
            target_type: "i64".to_string(),
            source: Box::new(source_error),
        };
        assert!(error.to_string().contains("server:port"));
        assert!(error.to_string().contains("i64"));
        assert!(error.is_invalid_type());
    }

    #[test]
    fn test_source_error() {
        let error = ConfigError::SourceError {
            source_name: "env".to_string(),
            message: "Failed to read environment".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Configuration source 'env' error: Failed to read environment"
        );
    }

    #[test]
    fn test_parse_error() {
        let error = ConfigError::ParseError {
            message: "Invalid YAML".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration: Invalid YAML"
        );
    }

    #[test]
    fn test_from_parse_int_error() {
        let parse_err = "not_a_number".parse::<i64>().unwrap_err();
        let error = ConfigError::from_parse_int_error("a:b".to_string(), parse_err);
        assert!(error.is_invalid_type());
        assert!(error.to_string().contains("integer"));
    }

    #[test]
    fn test_from_parse_float_error() {
        let parse_err = "not_a_float".parse::<f64>().unwrap_err();
        let error = ConfigError::from_parse_float_error("a:b".to_string(), parse_err);
        assert!(error.is_invalid_type());
        assert!(error.to_string().contains("float"));
    }

    #[test]
    fn test_from_bool_literal() {
        let error = ConfigError::from_bool_literal("a:b".to_string(), "maybe");
        assert!(error.is_invalid_type());
        assert!(error.to_string().contains("boolean"));

        let source = std::error::Error::source(&error).unwrap();
        assert_eq!(source.to_string(), "unrecognized boolean literal \"maybe\"");
    }
}
