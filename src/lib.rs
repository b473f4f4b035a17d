// SPDX-License-Identifier: MIT OR Apache-2.0

//! A layered configuration crate built on a hexagonal architecture.
//!
//! This crate merges nested configuration maps from several sources (YAML files,
//! JSON files, environment variables, in-memory maps) into one frozen tree, and
//! exposes that tree through sections addressed by delimited paths with typed
//! accessors.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: The tree model and its logic (`ConfigValue`, `ConfigMap`,
//!   the merge engine, `Section`, coercion, errors)
//! - **Ports**: Trait definitions that define interfaces (`ConfigSource`, `ConfigParser`)
//! - **Adapters**: Implementations for specific configuration sources (files, env vars)
//! - **Service**: `Configuration` and the builder that loads and merges sources
//!
//! # Semantics
//!
//! - **Merging**: sources are merged in registration order; for every key present
//!   in both, two maps merge recursively and anything else is replaced by the later
//!   value.
//! - **Paths**: a path such as `database:port` is split on the delimiter (`:` by
//!   default) and walked from the root.
//! - **Absence**: navigating to a missing section yields an absent section instead of
//!   an error, so chains like `config.section("a").section("b")` never fail; reading a
//!   value from it returns [`ConfigError::Absent`](domain::ConfigError::Absent).
//! - **Coercion**: typed reads accept values of the requested type directly and
//!   otherwise render the value to its canonical string and parse that, so `"42"`
//!   reads as the integer `42` and `"yes"` reads as `true`.
//!
//! # Feature Flags
//!
//! - `yaml`: Enable YAML file support (default)
//! - `json`: Enable JSON file support (default)
//! - `env`: Enable environment variable support (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use layercfg::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let mut flags = ConfigMap::new();
//! flags.insert("verbose".to_string(), ConfigValue::from("on"));
//! let mut defaults = ConfigMap::new();
//! defaults.insert("flags".to_string(), ConfigValue::Map(flags));
//!
//! let config = Configuration::builder()
//!     .with_map(defaults)
//!     .build()?;
//!
//! assert!(config.get_bool("flags:verbose")?);
//! assert!(config.section("missing").section("deeper").is_absent());
//! assert_eq!(config.get_int_or_default("server:port", 8080), 8080);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        ConfigError, ConfigMap, ConfigPath, ConfigValue, ConfigurationService, FromConfigValue,
        Result, Section,
    };
    pub use crate::ports::{ConfigParser, ConfigSource};
    pub use crate::service::{Configuration, ConfigurationBuilder};

    // Re-export adapters based on feature flags
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarAdapter;
    pub use crate::adapters::FileAdapter;
    #[cfg(feature = "json")]
    pub use crate::adapters::{JsonFileAdapter, JsonParser};
    #[cfg(feature = "yaml")]
    pub use crate::adapters::{YamlFileAdapter, YamlParser};
}
