// SPDX-License-Identifier: MIT OR Apache-2.0

//! Type coercion for configuration values.
//!
//! Every typed accessor goes through [`coerce`]: if the stored variant already is
//! the requested type it is returned as is, otherwise the value is rendered to its
//! canonical string form (see `ConfigValue`'s `Display`) and that string is parsed
//! as the requested type.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::ConfigValue;
use std::str::FromStr;

/// A type that can be read out of a configuration value.
///
/// # Examples
///
/// ```
/// use layercfg::domain::coerce::coerce;
/// use layercfg::domain::ConfigValue;
///
/// let port: i64 = coerce(&ConfigValue::from("8080"), "server:port").unwrap();
/// assert_eq!(port, 8080);
/// ```
pub trait FromConfigValue: Sized {
    /// Returns the value without conversion when the stored variant matches.
    fn from_native(value: &ConfigValue) -> Option<Self>;

    /// Parses the canonical string form of a value.
    fn parse_canonical(raw: &str, path: &str) -> Result<Self>;
}

/// Reads a `T` out of `value`, reparsing its canonical string form when the stored
/// variant is not a `T`.
///
/// `path` is only used for error reporting.
pub fn coerce<T: FromConfigValue>(value: &ConfigValue, path: &str) -> Result<T> {
    match T::from_native(value) {
        Some(native) => Ok(native),
        None => T::parse_canonical(&value.to_string(), path),
    }
}

/// Parses the canonical string form of `value` into any `FromStr` type.
///
/// # Examples
///
/// ```
/// use layercfg::domain::coerce::parse;
/// use layercfg::domain::ConfigValue;
/// use std::net::IpAddr;
///
/// let ip: IpAddr = parse(&ConfigValue::from("127.0.0.1"), "bind").unwrap();
/// assert_eq!(ip.to_string(), "127.0.0.1");
/// ```
pub fn parse<T>(value: &ConfigValue, path: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .to_string()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidType {
            path: path.to_string(),
            target_type: std::any::type_name::<T>().to_string(),
            source: Box::new(e),
        })
}

/// Parses a boolean literal.
///
/// Recognizes the following values (case-insensitive):
/// - `true`: "true", "t", "yes", "on", "1"
/// - `false`: "false", "f", "no", "off", "0"
pub fn parse_bool(raw: &str, path: &str) -> Result<bool> {
    match raw.to_lowercase().as_str() {
        "true" | "t" | "yes" | "on" | "1" => Ok(true),
        "false" | "f" | "no" | "off" | "0" => Ok(false),
        _ => Err(ConfigError::from_bool_literal(path.to_string(), raw)),
    }
}

impl FromConfigValue for String {
    fn from_native(value: &ConfigValue) -> Option<Self> {
        value.as_str().map(str::to_string)
    }

    fn parse_canonical(raw: &str, _path: &str) -> Result<Self> {
        Ok(raw.to_string())
    }
}

impl FromConfigValue for i64 {
    fn from_native(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    fn parse_canonical(raw: &str, path: &str) -> Result<Self> {
        raw.parse::<i64>()
            .map_err(|e| ConfigError::from_parse_int_error(path.to_string(), e))
    }
}

impl FromConfigValue for f64 {
    fn from_native(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Float(x) => Some(*x),
            _ => None,
        }
    }

    fn parse_canonical(raw: &str, path: &str) -> Result<Self> {
        raw.parse::<f64>()
            .map_err(|e| ConfigError::from_parse_float_error(path.to_string(), e))
    }
}

impl FromConfigValue for bool {
    fn from_native(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    fn parse_canonical(raw: &str, path: &str) -> Result<Self> {
        parse_bool(raw, path)
    }
}
