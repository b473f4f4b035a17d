// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered sources example for the layercfg crate.
//!
//! This example demonstrates:
//! - Merging built-in defaults, a YAML file, a JSON file and environment variables
//! - Navigating sections, including sections that do not exist
//! - Typed access with coercion (string, int, bool, float)
//! - Using default values for missing or malformed paths
//! - Rebuilding the configuration after a file changes
//!
//! To run this example:
//! ```bash
//! # Override a value from the environment
//! export DEMO_SERVER_PORT="9090"
//! export DEMO_FEATURES_BETA="on"
//!
//! # Run the example
//! cargo run --example layered_sources
//! ```

use layercfg::prelude::*;
use std::fs;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== layercfg: Layered Sources ===\n");

    let dir = tempfile::tempdir()?;
    fs::write(
        dir.path().join("app.yaml"),
        "server:\n  host: 0.0.0.0\n  port: 8080\nfeatures:\n  beta: false\n",
    )?;
    fs::write(
        dir.path().join("local.json"),
        r#"{"server": {"timeout": 2.5}, "workers": "4"}"#,
    )?;

    let mut defaults = ConfigMap::new();
    defaults.insert("name".to_string(), ConfigValue::from("layered-demo"));

    // Later sources override earlier ones
    let config = Configuration::builder()
        .with_base_path(dir.path())
        .with_map(defaults)
        .with_file("app.yaml", false)
        .with_file("local.json", false)
        .with_file("missing.yaml", true)
        .with_env_prefix("DEMO_")
        .build()?;

    println!("Sources: {:?}\n", config.source_names());

    println!("--- Sections ---");
    let server = config.section("server");
    println!("server keys: {:?}", server.keys().collect::<Vec<_>>());
    println!("server:host    = {}", server.get_string("host")?);
    println!("server:port    = {}", server.get_int("port")?);
    println!("server:timeout = {}", server.get_float("timeout")?);

    println!("\n--- Coercion ---");
    println!("workers (stored as a string) = {}", config.get_int("workers")?);
    println!("features:beta                = {}", config.get_bool("features:beta")?);

    println!("\n--- Absent sections ---");
    let missing = config.section("database").section("primary");
    println!("database:primary absent = {}", missing.is_absent());
    match missing.get_string("url") {
        Ok(url) => println!("url = {}", url),
        Err(e) => println!("url lookup failed: {}", e),
    }
    println!(
        "database:pool (default) = {}",
        config.get_int_or_default("database:pool", 16)
    );
    println!(
        "name as int (default)   = {}",
        config.get_int_or_default("name", -1)
    );

    println!("\n--- Reload ---");
    fs::write(
        dir.path().join("local.json"),
        r#"{"server": {"timeout": 10}, "workers": "8"}"#,
    )?;
    let reloaded = config.reload()?;
    println!("workers before reload = {}", config.get_int("workers")?);
    println!("workers after reload  = {}", reloaded.get_int("workers")?);

    Ok(())
}
