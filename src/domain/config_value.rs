// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value and nested map types.
//!
//! This module provides `ConfigValue`, the tagged value stored at every node of the
//! configuration tree, and `ConfigMap`, the nested mapping that sources produce and
//! the merge engine combines.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A nested mapping from string keys to configuration values.
///
/// Key order carries no meaning; the ordered map only keeps debug and serialized
/// output stable.
pub type ConfigMap = BTreeMap<String, ConfigValue>;

/// A value stored in the configuration tree.
///
/// A `Map` value is a nested section; every other variant is a leaf. Values keep
/// the native typing of the source they came from (a YAML `8080` is an `Integer`,
/// an environment variable is always a `String`), and typed accessors coerce
/// between them on read.
///
/// # Examples
///
/// ```
/// use layercfg::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::from(42);
/// assert_eq!(value.to_string(), "42");
/// assert!(!value.is_map());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// A string leaf.
    String(String),
    /// A signed integer leaf.
    Integer(i64),
    /// A floating point leaf.
    Float(f64),
    /// A boolean leaf.
    Boolean(bool),
    /// A nested section.
    Map(ConfigMap),
}

impl ConfigValue {
    /// Returns the nested map if this value is a section.
    pub fn as_map(&self) -> Option<&ConfigMap> {
        match self {
            ConfigValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the string slice if this value is a string leaf.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `true` if this value is a nested section.
    pub fn is_map(&self) -> bool {
        matches!(self, ConfigValue::Map(_))
    }

    /// Returns the name of the variant, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::String(_) => "string",
            ConfigValue::Integer(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::Boolean(_) => "boolean",
            ConfigValue::Map(_) => "map",
        }
    }
}

/// Renders the canonical string form of a value.
///
/// This is the form typed accessors reparse when the stored variant does not match
/// the requested type: strings verbatim, integers in base 10, floats in Rust's
/// shortest round-trip form (`3.0` renders as `3`), booleans as `true`/`false`,
/// and maps as `{key: value, ...}` in key order.
impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::String(s) => write!(f, "{}", s),
            ConfigValue::Integer(i) => write!(f, "{}", i),
            ConfigValue::Float(x) => write!(f, "{}", x),
            ConfigValue::Boolean(b) => write!(f, "{}", b),
            ConfigValue::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Integer(i)
    }
}

impl From<i32> for ConfigValue {
    fn from(i: i32) -> Self {
        ConfigValue::Integer(i64::from(i))
    }
}

impl From<f64> for ConfigValue {
    fn from(x: f64) -> Self {
        ConfigValue::Float(x)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Boolean(b)
    }
}

impl From<ConfigMap> for ConfigValue {
    fn from(map: ConfigMap) -> Self {
        ConfigValue::Map(map)
    }
}
