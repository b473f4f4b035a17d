// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module contains the configuration tree model: values and maps, paths, the
//! merge engine, type coercion and the section view. It is independent of any
//! source or file format.

pub mod coerce;
pub mod config_path;
pub mod config_value;
pub mod errors;
pub mod merge;
pub mod section;
pub mod service;

// Re-export commonly used types
pub use coerce::FromConfigValue;
pub use config_path::{ConfigPath, DEFAULT_DELIMITER};
pub use config_value::{ConfigMap, ConfigValue};
pub use errors::{ConfigError, Result};
pub use section::Section;
pub use service::ConfigurationService;
