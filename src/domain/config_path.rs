// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration path newtype and path segmentation.
//!
//! A path addresses a section or value in the configuration tree. It is made of
//! one or more segments joined by a delimiter (`:` unless configured otherwise),
//! so `"database:primary:host"` selects the `host` entry of the `primary` section
//! of the `database` section.

use std::fmt;
use std::str::SplitN;

/// The delimiter used to split paths when none is configured.
pub const DEFAULT_DELIMITER: &str = ":";

/// Splits `path` into its segments.
///
/// An empty delimiter disables splitting, so the whole path is a single segment.
///
/// # Examples
///
/// ```
/// use layercfg::domain::config_path::split_path;
///
/// let segments: Vec<&str> = split_path("a:b:c", ":").collect();
/// assert_eq!(segments, vec!["a", "b", "c"]);
/// ```
pub fn split_path<'p>(path: &'p str, delimiter: &'p str) -> SplitN<'p, &'p str> {
    let limit = if delimiter.is_empty() { 1 } else { usize::MAX };
    path.splitn(limit, delimiter)
}

/// A type-safe wrapper for configuration paths.
///
/// `ConfigPath` wraps a `String` so that paths are not confused with values. Every
/// path-taking accessor accepts `impl AsRef<str>`, so a `ConfigPath` can be passed
/// wherever a `&str` is accepted.
///
/// # Examples
///
/// ```
/// use layercfg::domain::config_path::ConfigPath;
///
/// let path = ConfigPath::from_segments(["database", "host"], ":");
/// assert_eq!(path.as_str(), "database:host");
/// assert_eq!(path.segments(":").collect::<Vec<_>>(), vec!["database", "host"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigPath(String);

impl ConfigPath {
    /// Creates a new `ConfigPath` from a `String`.
    pub fn new(path: String) -> Self {
        ConfigPath(path)
    }

    /// Joins segments with the delimiter into a path.
    pub fn from_segments<I, S>(segments: I, delimiter: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = segments
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(delimiter);
        ConfigPath(joined)
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the segments of this path for the given delimiter.
    pub fn segments<'p>(&'p self, delimiter: &'p str) -> impl Iterator<Item = &'p str> + 'p {
        split_path(&self.0, delimiter)
    }

    /// Returns a new path with `segment` appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use layercfg::domain::config_path::ConfigPath;
    ///
    /// let path = ConfigPath::from("server").child("port", ":");
    /// assert_eq!(path.as_str(), "server:port");
    /// ```
    pub fn child(&self, segment: &str, delimiter: &str) -> Self {
        if self.0.is_empty() {
            ConfigPath(segment.to_string())
        } else {
            ConfigPath(format!("{}{}{}", self.0, delimiter, segment))
        }
    }

    /// Converts the `ConfigPath` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ConfigPath {
    fn from(s: String) -> Self {
        ConfigPath(s)
    }
}

impl From<&str> for ConfigPath {
    fn from(s: &str) -> Self {
        ConfigPath(s.to_string())
    }
}

impl From<ConfigPath> for String {
    fn from(path: ConfigPath) -> Self {
        path.0
    }
}

impl AsRef<str> for ConfigPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
