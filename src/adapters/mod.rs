// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing configuration source implementations.
//!
//! This module contains concrete implementations of the traits defined in the ports
//! layer. Each adapter implements `ConfigSource` to produce a configuration map from
//! a specific source; the file parsers implement `ConfigParser`.

#[cfg(feature = "env")]
pub mod env_var;
pub mod file;
#[cfg(feature = "json")]
pub mod json_file;
#[cfg(feature = "yaml")]
pub mod yaml_file;

// Re-export adapters based on feature flags
#[cfg(feature = "env")]
pub use env_var::EnvVarAdapter;
pub use file::FileAdapter;
#[cfg(feature = "json")]
pub use json_file::{JsonFileAdapter, JsonParser};
#[cfg(feature = "yaml")]
pub use yaml_file::{YamlFileAdapter, YamlParser};
