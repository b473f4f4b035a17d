// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable configuration source adapter.
//!
//! This module provides an adapter that reads configuration values from
//! environment variables.

use crate::domain::config_path::split_path;
use crate::domain::merge::merge_into;
use crate::domain::{ConfigMap, ConfigValue, Result};
use crate::ports::ConfigSource;
use std::collections::HashMap;
use std::env;

/// Maximum length for environment variable keys (prevents DoS)
const MAX_ENV_KEY_LEN: usize = 512;

/// Maximum length for environment variable values (prevents DoS)
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// Separator splitting variable names into nested segments by default.
const DEFAULT_SEPARATOR: &str = "_";

/// Configuration source adapter for environment variables.
///
/// Variable names are turned into nested paths: an optional prefix is stripped
/// (variables without it are ignored) and the remainder is split on the separator,
/// so with prefix `APP_` the variable `APP_DATABASE_HOST` lands at
/// `DATABASE` → `HOST`. Values are always stored as strings and coerced on typed
/// access.
///
/// Variables are applied in name order. When one name is both a leaf and the
/// prefix of another (`APP_DB` and `APP_DB_HOST`), the longer name is applied last
/// and its section replaces the leaf.
///
/// # Examples
///
/// ```rust
/// use layercfg::adapters::EnvVarAdapter;
/// use layercfg::domain::Section;
/// use layercfg::ports::ConfigSource;
/// use std::collections::HashMap;
///
/// let mut vars = HashMap::new();
/// vars.insert("MYAPP_DATABASE_PORT".to_string(), "5432".to_string());
///
/// let adapter = EnvVarAdapter::with_values(vars)
///     .prefix("MYAPP_")
///     .lowercase_keys(true);
/// let map = adapter.load().unwrap();
/// assert_eq!(Section::new(&map, ":").get_int("database:port").unwrap(), 5432);
/// ```
#[derive(Debug, Clone)]
pub struct EnvVarAdapter {
    /// Optional prefix to filter environment variables
    prefix: Option<String>,
    /// Separator splitting names into nested segments
    separator: String,
    /// Whether to convert segments to lowercase
    lowercase_keys: bool,
    /// Fixed variables used instead of the process environment
    values: Option<HashMap<String, String>>,
}

impl EnvVarAdapter {
    /// Creates a new environment variable adapter without prefix filtering.
    ///
    /// This will read all environment variables available to the process.
    pub fn new() -> Self {
        Self {
            prefix: None,
            separator: DEFAULT_SEPARATOR.to_string(),
            lowercase_keys: false,
            values: None,
        }
    }

    /// Creates a new environment variable adapter with prefix filtering.
    ///
    /// Only environment variables starting with the given prefix will be read.
    /// The prefix is stripped from the name before it is split into segments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use layercfg::adapters::EnvVarAdapter;
    ///
    /// let adapter = EnvVarAdapter::with_prefix("MYAPP_");
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::new().prefix(prefix)
    }

    /// Creates an adapter over a fixed set of variables instead of the process
    /// environment.
    ///
    /// Prefix filtering and name splitting apply to these variables exactly as they
    /// would to real ones.
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            values: Some(values),
            ..Self::new()
        }
    }

    /// Sets the prefix variables must carry to be read.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the separator that splits names into nested segments.
    ///
    /// An empty separator keeps every name as a single top-level key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use layercfg::adapters::EnvVarAdapter;
    ///
    /// // APP_MAX_CONN__LIMIT lands at MAX_CONN -> LIMIT
    /// let adapter = EnvVarAdapter::with_prefix("APP_").separator("__");
    /// ```
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets whether to convert keys to lowercase.
    ///
    /// When enabled, variable names are lowercased after the prefix is stripped.
    pub fn lowercase_keys(mut self, enabled: bool) -> Self {
        self.lowercase_keys = enabled;
        self
    }

    fn variables(&self) -> Vec<(String, String)> {
        match &self.values {
            Some(values) => values
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            None => env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
        }
    }

    /// Builds the nested map holding `value` at the segments of `name`.
    fn nest(&self, name: &str, value: String) -> ConfigMap {
        let segments: Vec<&str> = split_path(name, &self.separator).collect();
        let mut map = ConfigMap::new();
        if let Some((leaf, parents)) = segments.split_last() {
            map.insert(leaf.to_string(), ConfigValue::String(value));
            for segment in parents.iter().rev() {
                let mut outer = ConfigMap::new();
                outer.insert(segment.to_string(), ConfigValue::Map(map));
                map = outer;
            }
        }
        map
    }
}

impl Default for EnvVarAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for EnvVarAdapter {
    fn name(&self) -> &str {
        "env"
    }

    fn load(&self) -> Result<ConfigMap> {
        let mut variables = self.variables();
        variables.sort_by(|a, b| a.0.cmp(&b.0));

        let mut map = ConfigMap::new();
        let mut count = 0usize;

        for (key, value) in variables {
            // Validate input sizes to prevent DoS
            if key.len() > MAX_ENV_KEY_LEN || value.len() > MAX_ENV_VALUE_LEN {
                tracing::debug!(
                    "Skipping oversized environment variable: key_len={}, value_len={} (max key={}, max value={})",
                    key.len(),
                    value.len(),
                    MAX_ENV_KEY_LEN,
                    MAX_ENV_VALUE_LEN
                );
                continue;
            }

            let name = match &self.prefix {
                Some(prefix) => match key.strip_prefix(prefix.as_str()) {
                    Some(stripped) => stripped,
                    None => continue,
                },
                None => key.as_str(),
            };
            if name.is_empty() {
                continue;
            }

            let name = if self.lowercase_keys {
                name.to_lowercase()
            } else {
                name.to_string()
            };

            merge_into(&mut map, self.nest(&name, value));
            count += 1;
        }

        tracing::debug!(
            "Loaded {} environment variables (prefix={:?}, separator={:?}, lowercase={})",
            count,
            self.prefix,
            self.separator,
            self.lowercase_keys
        );

        Ok(map)
    }
}
