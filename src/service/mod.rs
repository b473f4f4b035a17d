// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration service implementation.
//!
//! This module contains [`Configuration`], the concrete implementation of the
//! `ConfigurationService` trait, together with the builder that assembles it from
//! configuration sources.

pub mod default_service;

// Re-export commonly used types
pub use default_service::{Configuration, ConfigurationBuilder};
