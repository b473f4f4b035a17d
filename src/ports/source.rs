// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration source trait definition.
//!
//! This module defines the `ConfigSource` trait, the primary port (interface) for
//! implementing configuration sources. Any source (files, environment variables,
//! in-memory defaults, etc.) must implement this trait.

use crate::domain::{ConfigMap, Result};

/// A trait for configuration sources.
///
/// A source decodes its backing storage into a nested [`ConfigMap`]. Sources are
/// merged in the order they are registered with the builder, so a source registered
/// later overrides an earlier one at every path both define.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so that a built configuration, which keeps
/// its sources for rebuilding, can be shared across threads.
///
/// # Examples
///
/// ```rust
/// use layercfg::ports::ConfigSource;
/// use layercfg::domain::{ConfigMap, ConfigValue, Result};
///
/// struct MySource;
///
/// impl ConfigSource for MySource {
///     fn name(&self) -> &str {
///         "my-source"
///     }
///
///     fn load(&self) -> Result<ConfigMap> {
///         let mut map = ConfigMap::new();
///         map.insert("name".to_string(), ConfigValue::from("demo"));
///         Ok(map)
///     }
/// }
///
/// let source = MySource;
/// assert_eq!(source.load().unwrap().len(), 1);
/// ```
pub trait ConfigSource: Send + Sync {
    /// Returns the name of this configuration source.
    ///
    /// This name is used for logging, error messages, and debugging. It should be
    /// a short, descriptive identifier like "env", "yaml-file", etc.
    fn name(&self) -> &str;

    /// Loads the source into a nested map.
    ///
    /// Called once per build, so every rebuild sees the current contents of the
    /// underlying storage. An optional source whose storage does not exist returns
    /// an empty map.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is mandatory and cannot be read or decoded.
    fn load(&self) -> Result<ConfigMap>;
}
