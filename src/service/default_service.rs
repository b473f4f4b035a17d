// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default configuration service implementation.
//!
//! This module provides [`Configuration`], the frozen merged tree built from a list
//! of configuration sources, and [`ConfigurationBuilder`], which registers the
//! sources and performs the build.

use crate::domain::merge::merge_all;
use crate::domain::{
    ConfigError, ConfigMap, ConfigurationService, Result, Section, DEFAULT_DELIMITER,
};
use crate::ports::ConfigSource;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A configuration tree merged from an ordered list of sources.
///
/// The tree is frozen once built: every accessor is a read-only lookup, so a
/// `Configuration` can be cloned cheaply and shared across threads without locking.
/// Sources registered later override earlier ones wherever both define a value.
///
/// # Examples
///
/// ```rust
/// use layercfg::prelude::*;
///
/// # fn main() -> Result<()> {
/// let mut defaults = ConfigMap::new();
/// defaults.insert("port".to_string(), ConfigValue::from(8080));
///
/// let config = Configuration::builder()
///     .with_map(defaults)
///     .with_env_prefix("MYAPP_")
///     .build()?;
///
/// assert!(config.get_int("port")? > 0);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Configuration {
    /// The merged tree
    map: Arc<ConfigMap>,
    /// Path delimiter used by every accessor
    delimiter: Arc<str>,
    /// Sources in registration order, kept for reloading
    sources: Arc<Vec<Box<dyn ConfigSource>>>,
}

impl Configuration {
    /// Creates a configuration over an already merged map using the default `:`
    /// delimiter.
    pub fn new(map: ConfigMap) -> Self {
        Self::with_delimiter(map, DEFAULT_DELIMITER)
    }

    /// Creates a configuration over an already merged map with a custom path
    /// delimiter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use layercfg::prelude::*;
    ///
    /// let mut db = ConfigMap::new();
    /// db.insert("port".to_string(), ConfigValue::from(5432));
    /// let mut map = ConfigMap::new();
    /// map.insert("db".to_string(), ConfigValue::Map(db));
    ///
    /// let config = Configuration::with_delimiter(map, ".");
    /// assert_eq!(config.get_int("db.port").unwrap(), 5432);
    /// ```
    pub fn with_delimiter(map: ConfigMap, delimiter: impl Into<String>) -> Self {
        let map = Arc::new(map);
        let sources: Vec<Box<dyn ConfigSource>> = vec![Box::new(MapSource {
            map: Arc::clone(&map),
        })];
        Self {
            map,
            delimiter: Arc::from(delimiter.into()),
            sources: Arc::new(sources),
        }
    }

    /// Creates a new configuration builder.
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::new()
    }

    /// Creates a configuration with default sources.
    ///
    /// This reads an optional `config.yaml` from the OS-appropriate configuration
    /// directory, overridden by all environment variables (lowercased).
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use layercfg::service::Configuration;
    ///
    /// # fn main() -> layercfg::domain::Result<()> {
    /// let config = Configuration::with_defaults("myapp", "com.example")?;
    /// # Ok(())
    /// # }
    /// ```
    #[allow(unused_variables)]
    pub fn with_defaults(app_name: &str, qualifier: &str) -> Result<Self> {
        #[allow(unused_mut)]
        let mut builder = Self::builder();

        #[cfg(feature = "yaml")]
        {
            use crate::adapters::YamlFileAdapter;
            match YamlFileAdapter::from_default_location(app_name, qualifier) {
                Ok(adapter) => builder = builder.with_source(Box::new(adapter.optional(true))),
                Err(e) => tracing::debug!("No default configuration directory: {}", e),
            }
        }

        #[cfg(feature = "env")]
        {
            builder = builder.with_env_vars();
        }

        builder.build()
    }

    /// Returns the path delimiter.
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Returns the merged map.
    pub fn as_map(&self) -> &ConfigMap {
        &self.map
    }

    /// Returns the names of the registered sources in registration order.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Loads every registered source again and returns a freshly merged
    /// configuration.
    ///
    /// The current tree is left untouched, so readers holding it keep a consistent
    /// view. If any source fails the error is returned and nothing is rebuilt.
    pub fn reload(&self) -> Result<Self> {
        let map = load_sources(&self.sources)?;
        Ok(Self {
            map: Arc::new(map),
            delimiter: Arc::clone(&self.delimiter),
            sources: Arc::clone(&self.sources),
        })
    }
}

impl ConfigurationService for Configuration {
    fn root(&self) -> Section<'_> {
        Section::new(&self.map, &self.delimiter)
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("map", &self.map)
            .field("delimiter", &self.delimiter)
            .field("sources", &self.source_names())
            .finish()
    }
}

/// Loads the sources in order and merges them, later sources winning.
fn load_sources(sources: &[Box<dyn ConfigSource>]) -> Result<ConfigMap> {
    let mut maps = Vec::with_capacity(sources.len());
    for source in sources {
        let map = source.load().map_err(|e| {
            tracing::warn!("Failed to load source '{}': {}", source.name(), e);
            e
        })?;
        tracing::debug!(
            "Loaded source '{}' with {} top-level keys",
            source.name(),
            map.len()
        );
        maps.push(map);
    }
    Ok(merge_all(maps))
}

/// A source serving a fixed map, shared with the configuration built over it.
#[derive(Debug, Clone)]
struct MapSource {
    map: Arc<ConfigMap>,
}

impl MapSource {
    fn new(map: ConfigMap) -> Self {
        Self { map: Arc::new(map) }
    }
}

impl ConfigSource for MapSource {
    fn name(&self) -> &str {
        "map"
    }

    fn load(&self) -> Result<ConfigMap> {
        Ok(ConfigMap::clone(&self.map))
    }
}

/// Builder for constructing a [`Configuration`].
///
/// Sources are merged in the order they are registered; each one overrides the
/// values of those registered before it.
///
/// # Examples
///
/// ```rust,no_run
/// use layercfg::service::ConfigurationBuilder;
///
/// # fn main() -> layercfg::domain::Result<()> {
/// let config = ConfigurationBuilder::new()
///     .with_base_path("/etc/myapp")
///     .with_yaml_file("defaults.yaml", false)
///     .with_yaml_file("local.yaml", true)
///     .with_env_prefix("MYAPP_")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ConfigurationBuilder {
    base_path: Option<PathBuf>,
    delimiter: String,
    sources: Vec<Box<dyn ConfigSource>>,
    /// First registration error, reported by `build`
    error: Option<ConfigError>,
}

impl ConfigurationBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            base_path: None,
            delimiter: DEFAULT_DELIMITER.to_string(),
            sources: Vec::new(),
            error: None,
        }
    }

    /// Sets the directory relative file paths registered afterwards are resolved
    /// against.
    pub fn with_base_path(mut self, path: impl AsRef<Path>) -> Self {
        self.base_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the path delimiter of the built configuration.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Adds a configuration source to the builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use layercfg::service::ConfigurationBuilder;
    /// use layercfg::adapters::EnvVarAdapter;
    ///
    /// # fn main() -> layercfg::domain::Result<()> {
    /// let config = ConfigurationBuilder::new()
    ///     .with_source(Box::new(EnvVarAdapter::new()))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_source(mut self, source: Box<dyn ConfigSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Adds a fixed map as a configuration source.
    pub fn with_map(self, map: ConfigMap) -> Self {
        self.with_source(Box::new(MapSource::new(map)))
    }

    /// Adds a YAML file as a configuration source.
    ///
    /// A missing file is an error at build time unless `optional` is set.
    #[cfg(feature = "yaml")]
    pub fn with_yaml_file(self, path: impl AsRef<Path>, optional: bool) -> Self {
        use crate::adapters::YamlFileAdapter;
        let path = self.resolve(path.as_ref());
        self.with_source(Box::new(
            YamlFileAdapter::from_file(path).optional(optional),
        ))
    }

    /// Adds a JSON file as a configuration source.
    ///
    /// A missing file is an error at build time unless `optional` is set.
    #[cfg(feature = "json")]
    pub fn with_json_file(self, path: impl AsRef<Path>, optional: bool) -> Self {
        use crate::adapters::JsonFileAdapter;
        let path = self.resolve(path.as_ref());
        self.with_source(Box::new(
            JsonFileAdapter::from_file(path).optional(optional),
        ))
    }

    /// Adds a configuration file, choosing the parser from its extension.
    ///
    /// An extension no enabled parser supports makes `build` fail with a
    /// [`ConfigError::ParseError`].
    pub fn with_file(self, path: impl AsRef<Path>, optional: bool) -> Self {
        let path = self.resolve(path.as_ref());
        #[allow(unused_variables)]
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_string)
            .unwrap_or_default();

        #[cfg(feature = "yaml")]
        {
            use crate::adapters::YamlParser;
            use crate::ports::ConfigParser;
            if YamlParser::new().supports_extension(&extension) {
                return self.with_yaml_file(path, optional);
            }
        }

        #[cfg(feature = "json")]
        {
            use crate::adapters::JsonParser;
            use crate::ports::ConfigParser;
            if JsonParser::new().supports_extension(&extension) {
                return self.with_json_file(path, optional);
            }
        }

        let message = format!(
            "Unsupported configuration file type: {}",
            path.display()
        );
        self.fail(ConfigError::ParseError {
            message,
            source: None,
        })
    }

    /// Adds environment variables as a configuration source.
    ///
    /// Names are lowercased and split on `_`.
    #[cfg(feature = "env")]
    pub fn with_env_vars(self) -> Self {
        use crate::adapters::EnvVarAdapter;
        self.with_source(Box::new(EnvVarAdapter::new().lowercase_keys(true)))
    }

    /// Adds environment variables with a prefix as a configuration source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use layercfg::service::ConfigurationBuilder;
    ///
    /// # fn main() -> layercfg::domain::Result<()> {
    /// let config = ConfigurationBuilder::new()
    ///     .with_env_prefix("MYAPP_")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    #[cfg(feature = "env")]
    pub fn with_env_prefix(self, prefix: impl Into<String>) -> Self {
        use crate::adapters::EnvVarAdapter;
        self.with_source(Box::new(
            EnvVarAdapter::with_prefix(prefix).lowercase_keys(true),
        ))
    }

    /// Loads every source in registration order and merges them.
    ///
    /// The first source that fails to load aborts the build with its error.
    pub fn build(self) -> Result<Configuration> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let map = load_sources(&self.sources)?;
        tracing::debug!(
            "Built configuration from {} sources ({} top-level keys)",
            self.sources.len(),
            map.len()
        );

        Ok(Configuration {
            map: Arc::new(map),
            delimiter: Arc::from(self.delimiter),
            sources: Arc::new(self.sources),
        })
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_path {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    fn fail(mut self, err: ConfigError) -> Self {
        if self.error.is_none() {
            self.error = Some(err);
        }
        self
    }
}

impl Default for ConfigurationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
