// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration service trait definition.
//!
//! This module defines the `ConfigurationService` trait, the main interface for
//! reading a built configuration. Implementors only provide the root section; every
//! accessor is forwarded to it.

use crate::domain::coerce::FromConfigValue;
use crate::domain::{ConfigValue, Result, Section};

/// The main configuration service trait.
///
/// Paths are anything that can be viewed as a string, so both `&str` and
/// [`ConfigPath`](crate::domain::ConfigPath) work.
///
/// # Examples
///
/// ```rust
/// use layercfg::domain::{ConfigMap, ConfigValue, ConfigurationService, Section};
///
/// struct Fixed(ConfigMap);
///
/// impl ConfigurationService for Fixed {
///     fn root(&self) -> Section<'_> {
///         Section::new(&self.0, ":")
///     }
/// }
///
/// let mut map = ConfigMap::new();
/// map.insert("name".to_string(), ConfigValue::from("demo"));
///
/// let service = Fixed(map);
/// assert_eq!(service.get_string("name").unwrap(), "demo");
/// assert_eq!(service.get_int_or_default("missing", 3), 3);
/// ```
pub trait ConfigurationService {
    /// Returns the root section of the configuration tree.
    fn root(&self) -> Section<'_>;

    /// Returns the section at `path`, or the absent section.
    fn section(&self, path: impl AsRef<str>) -> Section<'_> {
        self.root().section(path)
    }

    /// Returns the raw value stored at `path`.
    fn get_value(&self, path: impl AsRef<str>) -> Result<&ConfigValue> {
        self.root().get_value(path)
    }

    /// Returns the value at `path` converted to `T`.
    fn get<T: FromConfigValue>(&self, path: impl AsRef<str>) -> Result<T> {
        self.root().get(path)
    }

    /// Returns the value at `path` as a string.
    fn get_string(&self, path: impl AsRef<str>) -> Result<String> {
        self.root().get_string(path)
    }

    /// Returns the value at `path` as an integer.
    fn get_int(&self, path: impl AsRef<str>) -> Result<i64> {
        self.root().get_int(path)
    }

    /// Returns the value at `path` as a boolean.
    fn get_bool(&self, path: impl AsRef<str>) -> Result<bool> {
        self.root().get_bool(path)
    }

    /// Returns the value at `path` as a float.
    fn get_float(&self, path: impl AsRef<str>) -> Result<f64> {
        self.root().get_float(path)
    }

    /// Returns a copy of the raw value at `path`, or `default`.
    fn get_value_or_default(&self, path: impl AsRef<str>, default: ConfigValue) -> ConfigValue {
        self.root().get_value_or_default(path, default)
    }

    /// Returns the string at `path`, or `default`.
    fn get_string_or_default(&self, path: impl AsRef<str>, default: &str) -> String {
        self.root().get_string_or_default(path, default)
    }

    /// Returns the integer at `path`, or `default`.
    fn get_int_or_default(&self, path: impl AsRef<str>, default: i64) -> i64 {
        self.root().get_int_or_default(path, default)
    }

    /// Returns the boolean at `path`, or `default`.
    fn get_bool_or_default(&self, path: impl AsRef<str>, default: bool) -> bool {
        self.root().get_bool_or_default(path, default)
    }

    /// Returns the float at `path`, or `default`.
    fn get_float_or_default(&self, path: impl AsRef<str>, default: f64) -> f64 {
        self.root().get_float_or_default(path, default)
    }

    /// Returns `true` if a value exists at `path`.
    fn has(&self, path: impl AsRef<str>) -> bool {
        self.root().contains(path)
    }
}
