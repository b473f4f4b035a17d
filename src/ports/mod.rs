// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that define the interfaces
//! between the configuration tree and the sources feeding it. These traits are
//! implemented by adapters in the adapters layer.

pub mod parser;
pub mod source;

// Re-export commonly used types
pub use parser::ConfigParser;
pub use source::ConfigSource;
