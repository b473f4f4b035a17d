// SPDX-License-Identifier: MIT OR Apache-2.0

//! Path-addressed, read-only views over the configuration tree.
//!
//! A `Section` is either a view over one nested map of the tree or the absent
//! section, which stands for "path not found". Every operation is defined on the
//! absent section as well, so navigation can be chained without checks:
//!
//! ```
//! use layercfg::domain::{ConfigMap, Section};
//!
//! let map = ConfigMap::new();
//! let root = Section::new(&map, ":");
//!
//! let missing = root.section("a:b").section("c");
//! assert!(missing.is_absent());
//! assert!(missing.get_string("z").unwrap_err().is_absent());
//! ```

use crate::domain::coerce::{self, FromConfigValue};
use crate::domain::config_path::split_path;
use crate::domain::{ConfigError, ConfigMap, ConfigValue, Result};
use std::str::FromStr;

/// A read-only view over one section of the configuration tree.
///
/// Sections borrow from the tree they were created from and are cheap to copy.
/// Two sections over the same node are interchangeable.
#[derive(Clone, Copy, Debug, Default)]
pub enum Section<'a> {
    /// A section backed by a nested map.
    Present {
        /// The map this section views
        map: &'a ConfigMap,
        /// The delimiter used to split paths
        delimiter: &'a str,
    },
    /// The section does not exist.
    #[default]
    Absent,
}

impl<'a> Section<'a> {
    /// Creates a section over `map` that splits paths on `delimiter`.
    pub fn new(map: &'a ConfigMap, delimiter: &'a str) -> Self {
        Section::Present { map, delimiter }
    }

    /// Returns `true` if this is the absent section.
    pub fn is_absent(&self) -> bool {
        matches!(self, Section::Absent)
    }

    /// Returns the map backing this section, if any.
    pub fn as_map(&self) -> Option<&'a ConfigMap> {
        match *self {
            Section::Present { map, .. } => Some(map),
            Section::Absent => None,
        }
    }

    /// Returns the keys directly below this section.
    ///
    /// The absent section has no keys.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> {
        self.as_map()
            .into_iter()
            .flat_map(|map| map.keys().map(String::as_str))
    }

    /// Returns the section at `path`, or the absent section if any segment of the
    /// path is missing or is not itself a section.
    ///
    /// # Examples
    ///
    /// ```
    /// use layercfg::domain::{ConfigMap, ConfigValue, Section};
    ///
    /// let mut inner = ConfigMap::new();
    /// inner.insert("port".to_string(), ConfigValue::from(8080));
    /// let mut map = ConfigMap::new();
    /// map.insert("server".to_string(), ConfigValue::Map(inner));
    ///
    /// let root = Section::new(&map, ":");
    /// assert!(!root.section("server").is_absent());
    /// assert!(root.section("server:port").is_absent());
    /// ```
    pub fn section(&self, path: impl AsRef<str>) -> Section<'a> {
        let delimiter = match *self {
            Section::Present { delimiter, .. } => delimiter,
            Section::Absent => return Section::Absent,
        };

        let mut current = *self;
        for segment in split_path(path.as_ref(), delimiter) {
            current = current.child(segment);
            if current.is_absent() {
                break;
            }
        }
        current
    }

    /// Returns the raw value stored at `path`.
    ///
    /// Every segment but the last must resolve to a section; the last one is looked
    /// up as a key of that section. The value returned may itself be a map.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Absent`] if the path cannot be resolved.
    pub fn get_value(&self, path: impl AsRef<str>) -> Result<&'a ConfigValue> {
        let path = path.as_ref();
        let absent = || ConfigError::Absent {
            path: path.to_string(),
        };

        let (mut map, delimiter) = match *self {
            Section::Present { map, delimiter } => (map, delimiter),
            Section::Absent => return Err(absent()),
        };

        let mut segments = split_path(path, delimiter).peekable();
        while let Some(segment) = segments.next() {
            let value = map.get(segment).ok_or_else(absent)?;
            if segments.peek().is_none() {
                return Ok(value);
            }
            map = value.as_map().ok_or_else(absent)?;
        }
        Err(absent())
    }

    /// Returns the value at `path` converted to `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Absent`] if the path cannot be resolved and
    /// [`ConfigError::InvalidType`] if the value cannot be converted.
    pub fn get<T: FromConfigValue>(&self, path: impl AsRef<str>) -> Result<T> {
        let path = path.as_ref();
        coerce::coerce(self.get_value(path)?, path)
    }

    /// Returns the value at `path` parsed into any `FromStr` type.
    ///
    /// # Examples
    ///
    /// ```
    /// use layercfg::domain::{ConfigMap, ConfigValue, Section};
    /// use std::net::IpAddr;
    ///
    /// let mut map = ConfigMap::new();
    /// map.insert("bind".to_string(), ConfigValue::from("127.0.0.1"));
    ///
    /// let ip: IpAddr = Section::new(&map, ":").get_parsed("bind").unwrap();
    /// assert!(ip.is_loopback());
    /// ```
    pub fn get_parsed<T>(&self, path: impl AsRef<str>) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let path = path.as_ref();
        coerce::parse(self.get_value(path)?, path)
    }

    /// Returns the value at `path` as a string.
    ///
    /// Non-string values are rendered in their canonical form, so this only fails
    /// when the path cannot be resolved.
    pub fn get_string(&self, path: impl AsRef<str>) -> Result<String> {
        self.get(path)
    }

    /// Returns the value at `path` as an integer.
    pub fn get_int(&self, path: impl AsRef<str>) -> Result<i64> {
        self.get(path)
    }

    /// Returns the value at `path` as a boolean.
    pub fn get_bool(&self, path: impl AsRef<str>) -> Result<bool> {
        self.get(path)
    }

    /// Returns the value at `path` as a float.
    pub fn get_float(&self, path: impl AsRef<str>) -> Result<f64> {
        self.get(path)
    }

    /// Returns the value at `path` converted to `T`, or `default` on any error.
    pub fn get_or_default<T: FromConfigValue>(&self, path: impl AsRef<str>, default: T) -> T {
        self.get(path).unwrap_or(default)
    }

    /// Returns a copy of the raw value at `path`, or `default` if it is absent.
    pub fn get_value_or_default(&self, path: impl AsRef<str>, default: ConfigValue) -> ConfigValue {
        self.get_value(path).cloned().unwrap_or(default)
    }

    /// Returns the string at `path`, or `default` if it is absent.
    pub fn get_string_or_default(&self, path: impl AsRef<str>, default: &str) -> String {
        self.get_string(path).unwrap_or_else(|_| default.to_string())
    }

    /// Returns the integer at `path`, or `default` if it is absent or not an integer.
    pub fn get_int_or_default(&self, path: impl AsRef<str>, default: i64) -> i64 {
        self.get_or_default(path, default)
    }

    /// Returns the boolean at `path`, or `default` if it is absent or not a boolean.
    pub fn get_bool_or_default(&self, path: impl AsRef<str>, default: bool) -> bool {
        self.get_or_default(path, default)
    }

    /// Returns the float at `path`, or `default` if it is absent or not a float.
    pub fn get_float_or_default(&self, path: impl AsRef<str>, default: f64) -> f64 {
        self.get_or_default(path, default)
    }

    /// Returns `true` if a value (leaf or section) exists at `path`.
    pub fn contains(&self, path: impl AsRef<str>) -> bool {
        self.get_value(path).is_ok()
    }

    /// Steps into the section named `segment`.
    fn child(self, segment: &str) -> Section<'a> {
        match self {
            Section::Present { map, delimiter } => match map.get(segment) {
                Some(ConfigValue::Map(nested)) => Section::Present {
                    map: nested,
                    delimiter,
                },
                _ => Section::Absent,
            },
            Section::Absent => Section::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: Vec<(&str, ConfigValue)>) -> ConfigMap {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    fn sample() -> ConfigMap {
        map(vec![
            (
                "server",
                ConfigValue::Map(map(vec![
                    ("host", ConfigValue::from("localhost")),
                    ("port", ConfigValue::from(8080)),
                    ("ratio", ConfigValue::from(0.75)),
                    ("debug", ConfigValue::from(true)),
                    ("workers", ConfigValue::from("16")),
                    ("name", ConfigValue::from("abc")),
                    ("empty", ConfigValue::from("")),
                    ("zero", ConfigValue::from(0)),
                ])),
            ),
            (
                "g",
                ConfigValue::Map(map(vec![(
                    "e",
                    ConfigValue::Map(map(vec![("f", ConfigValue::from("true"))])),
                )])),
            ),
            ("flat", ConfigValue::from("value")),
        ])
    }

    #[test]
    fn test_section_navigation() {
        let tree = sample();
        let root = Section::new(&tree, ":");

        let server = root.section("server");
        assert!(!server.is_absent());
        assert_eq!(server.get_string("host").unwrap(), "localhost");

        let e = root.section("g:e");
        assert!(!e.is_absent());
        assert!(e.get_bool("f").unwrap());
    }

    #[test]
    fn test_section_missing_is_absent() {
        let tree = sample();
        let root = Section::new(&tree, ":");

        assert!(root.section("nope").is_absent());
        assert!(root.section("server:nope").is_absent());
        assert!(root.section("g:e:f:deeper").is_absent());
    }

    #[test]
    fn test_section_on_scalar_is_absent() {
        let tree = sample();
        let root = Section::new(&tree, ":");

        assert!(root.section("flat").is_absent());
        assert!(root.section("server:port").is_absent());
    }

    #[test]
    fn test_absent_section_propagates() {
        let absent = Section::Absent;

        assert!(absent.is_absent());
        assert!(absent.section("a").is_absent());
        assert!(absent.get_value("a").unwrap_err().is_absent());
        assert!(absent.get_int("a").unwrap_err().is_absent());
        assert_eq!(absent.keys().count(), 0);
        assert!(absent.as_map().is_none());
        assert!(!absent.contains("a"));
    }

    #[test]
    fn test_chained_navigation_on_missing_tree() {
        let tree = sample();
        let root = Section::new(&tree, ":");

        let err = root
            .section("x")
            .section("y")
            .get_string("z")
            .unwrap_err();
        assert!(err.is_absent());
    }

    #[test]
    fn test_get_value_through_path() {
        let tree = sample();
        let root = Section::new(&tree, ":");

        assert_eq!(root.get_value("server:port").unwrap(), &ConfigValue::from(8080));
        assert_eq!(root.get_value("g:e:f").unwrap(), &ConfigValue::from("true"));
    }

    #[test]
    fn test_get_value_returns_maps() {
        let tree = sample();
        let root = Section::new(&tree, ":");

        let value = root.get_value("g:e").unwrap();
        assert!(value.is_map());
    }

    #[test]
    fn test_get_value_missing_leaf() {
        let tree = sample();
        let root = Section::new(&tree, ":");

        let err = root.get_value("server:missing").unwrap_err();
        assert!(err.is_absent());
        assert!(err.to_string().contains("server:missing"));
    }

    #[test]
    fn test_get_value_through_scalar_fails() {
        let tree = sample();
        let root = Section::new(&tree, ":");

        assert!(root.get_value("flat:child").unwrap_err().is_absent());
    }

    #[test]
    fn test_typed_getters() {
        let tree = sample();
        let server = Section::new(&tree, ":").section("server");

        assert_eq!(server.get_int("port").unwrap(), 8080);
        assert_eq!(server.get_int("workers").unwrap(), 16);
        assert_eq!(server.get_float("ratio").unwrap(), 0.75);
        assert_eq!(server.get_float("port").unwrap(), 8080.0);
        assert!(server.get_bool("debug").unwrap());
        assert_eq!(server.get_string("port").unwrap(), "8080");
    }

    #[test]
    fn test_typed_getter_invalid_type() {
        let tree = sample();
        let root = Section::new(&tree, ":");

        assert!(root.get_int("server:name").unwrap_err().is_invalid_type());
        assert!(root.get_bool("server:name").unwrap_err().is_invalid_type());
        assert!(root.get_float("server:name").unwrap_err().is_invalid_type());
        assert!(root.get_int("g").unwrap_err().is_invalid_type());
    }

    #[test]
    fn test_present_but_empty_values_are_found() {
        let tree = sample();
        let server = Section::new(&tree, ":").section("server");

        assert_eq!(server.get_string("empty").unwrap(), "");
        assert_eq!(server.get_int("zero").unwrap(), 0);
        assert!(server.get_int("empty").unwrap_err().is_invalid_type());
    }

    #[test]
    fn test_default_getters() {
        let tree = sample();
        let root = Section::new(&tree, ":");

        assert_eq!(root.get_int_or_default("missing:path", 7), 7);
        assert_eq!(root.get_int_or_default("server:name", 7), 7);
        assert_eq!(root.get_int_or_default("server:port", 7), 8080);

        assert_eq!(root.get_string_or_default("server:host", "x"), "localhost");
        assert_eq!(root.get_string_or_default("server:nope", "x"), "x");

        assert!(root.get_bool_or_default("server:name", true));
        assert!(!root.get_bool_or_default("server:nope", false));

        assert_eq!(root.get_float_or_default("server:name", 1.5), 1.5);

        assert_eq!(
            root.get_value_or_default("nope", ConfigValue::from(3)),
            ConfigValue::from(3)
        );
    }

    #[test]
    fn test_default_getters_on_absent_section() {
        let absent = Section::Absent;
        assert_eq!(absent.get_int_or_default("a", 1), 1);
        assert_eq!(absent.get_string_or_default("a", "d"), "d");
    }

    #[test]
    fn test_get_parsed() {
        let tree = sample();
        let root = Section::new(&tree, ":");

        let port: u16 = root.get_parsed("server:port").unwrap();
        assert_eq!(port, 8080);
        assert!(root.get_parsed::<u16>("server:name").unwrap_err().is_invalid_type());
        assert!(root.get_parsed::<u16>("nope").unwrap_err().is_absent());
    }

    #[test]
    fn test_keys() {
        let tree = sample();
        let root = Section::new(&tree, ":");

        let keys: Vec<&str> = root.keys().collect();
        assert_eq!(keys, vec!["flat", "g", "server"]);
    }

    #[test]
    fn test_custom_delimiter() {
        let tree = sample();
        let root = Section::new(&tree, ".");

        assert_eq!(root.get_int("server.port").unwrap(), 8080);
        assert!(root.section("server:port").is_absent());
    }

    #[test]
    fn test_empty_delimiter_treats_path_as_one_key() {
        let tree = map(vec![("a:b", ConfigValue::from(1))]);
        let root = Section::new(&tree, "");

        assert_eq!(root.get_int("a:b").unwrap(), 1);
    }

    #[test]
    fn test_navigation_is_deterministic() {
        let tree = sample();
        let root = Section::new(&tree, ":");

        let first = root.get_value("server:port").unwrap();
        let second = root.get_value("server:port").unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_default_section_is_absent() {
        assert!(Section::default().is_absent());
    }
}
