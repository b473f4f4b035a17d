// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-backed configuration source adapter.
//!
//! This module provides `FileAdapter`, which reads a configuration file and decodes
//! it with any [`ConfigParser`]. The format-specific modules expose it as
//! `YamlFileAdapter` and `JsonFileAdapter`.

use crate::domain::{ConfigError, ConfigMap, Result};
use crate::ports::{ConfigParser, ConfigSource};
use directories::ProjectDirs;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Maximum allowed file size for configuration files (10MB)
/// This prevents denial of service attacks via extremely large files
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Configuration source adapter for configuration files.
///
/// The file is read and decoded on every [`load`](ConfigSource::load), so a rebuilt
/// configuration always reflects the current file contents. An optional file that
/// does not exist loads as an empty map; a mandatory one is an error.
///
/// # Examples
///
/// ```rust,no_run
/// use layercfg::adapters::FileAdapter;
/// use layercfg::adapters::YamlParser;
/// use layercfg::ports::ConfigSource;
///
/// let adapter = FileAdapter::new("yaml-file", "/etc/myapp/config.yaml", YamlParser::new())
///     .optional(true);
/// let map = adapter.load().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileAdapter<P> {
    /// Name reported in logs and errors
    name: String,
    /// Path to the configuration file
    file_path: PathBuf,
    /// Parser used to decode the file
    parser: P,
    /// Whether a missing file is tolerated
    optional: bool,
}

impl<P: ConfigParser> FileAdapter<P> {
    /// Creates a new adapter for a mandatory file.
    ///
    /// # Arguments
    ///
    /// * `name` - The source name used in logs and errors
    /// * `path` - Path to the configuration file
    /// * `parser` - Parser used to decode the file
    pub fn new(name: impl Into<String>, path: impl AsRef<Path>, parser: P) -> Self {
        Self {
            name: name.into(),
            file_path: path.as_ref().to_path_buf(),
            parser,
            optional: false,
        }
    }

    /// Creates a new adapter for `filename` in the default OS-appropriate
    /// configuration directory.
    ///
    /// This method uses the `directories` crate to determine the appropriate
    /// configuration directory for the current operating system.
    ///
    /// # Arguments
    ///
    /// * `name` - The source name used in logs and errors
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    /// * `filename` - The configuration file name (e.g., "config.yaml")
    /// * `parser` - Parser used to decode the file
    pub fn in_config_dir(
        name: impl Into<String>,
        app_name: &str,
        qualifier: &str,
        filename: &str,
        parser: P,
    ) -> Result<Self> {
        let name = name.into();
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceError {
                source_name: name.clone(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        let config_file = proj_dirs.config_dir().join(filename);
        Ok(Self::new(name, config_file, parser))
    }

    /// Sets whether a missing file is tolerated.
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Returns `true` if a missing file loads as an empty map.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Returns the path to the configuration file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Returns the parser used to decode the file.
    pub fn parser(&self) -> &P {
        &self.parser
    }

    fn display_name(&self) -> &str {
        self.file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("<unknown>")
    }

    fn source_error(&self, message: String, err: Option<std::io::Error>) -> ConfigError {
        ConfigError::SourceError {
            source_name: self.name.clone(),
            message,
            source: err.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Reads the file, returning `None` when an optional file is missing.
    fn read(&self) -> Result<Option<String>> {
        // Check file size before reading to prevent DoS via large files
        let metadata = match fs::metadata(&self.file_path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound && self.optional => return Ok(None),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(self.source_error(
                    format!("Configuration file not found: {}", self.display_name()),
                    Some(e),
                ))
            }
            Err(e) => {
                return Err(self.source_error(
                    format!("Failed to read file metadata: {}", self.display_name()),
                    Some(e),
                ))
            }
        };

        if metadata.len() > MAX_FILE_SIZE {
            return Err(self.source_error(
                format!(
                    "Configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_FILE_SIZE
                ),
                None,
            ));
        }

        let content = fs::read_to_string(&self.file_path).map_err(|e| {
            self.source_error(
                format!("Failed to read configuration file: {}", self.display_name()),
                Some(e),
            )
        })?;

        Ok(Some(content))
    }
}

impl<P: ConfigParser> ConfigSource for FileAdapter<P> {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<ConfigMap> {
        match self.read()? {
            Some(content) => self.parser.parse(&content),
            None => {
                tracing::debug!(
                    "Skipping missing optional configuration file '{}'",
                    self.file_path.display()
                );
                Ok(ConfigMap::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfigValue;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Parses `key=value` lines.
    #[derive(Debug, Clone)]
    struct LineParser;

    impl ConfigParser for LineParser {
        fn parse(&self, content: &str) -> Result<ConfigMap> {
            content
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| {
                    line.split_once('=')
                        .map(|(k, v)| (k.to_string(), ConfigValue::from(v)))
                        .ok_or_else(|| ConfigError::ParseError {
                            message: format!("Invalid line: {}", line),
                            source: None,
                        })
                })
                .collect()
        }

        fn supported_extensions(&self) -> &[&str] {
            &["kv"]
        }
    }

    #[test]
    fn test_file_adapter_load() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "key=value").unwrap();

        let adapter = FileAdapter::new("kv-file", temp_file.path(), LineParser);
        assert_eq!(adapter.name(), "kv-file");
        assert!(!adapter.is_optional());

        let map = adapter.load().unwrap();
        assert_eq!(map["key"], ConfigValue::from("value"));
    }

    #[test]
    fn test_file_adapter_rereads_on_load() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_path_buf();
        fs::write(&path, "key=initial\n").unwrap();

        let adapter = FileAdapter::new("kv-file", &path, LineParser);
        assert_eq!(adapter.load().unwrap()["key"], ConfigValue::from("initial"));

        fs::write(&path, "key=updated\n").unwrap();
        assert_eq!(adapter.load().unwrap()["key"], ConfigValue::from("updated"));
    }

    #[test]
    fn test_file_adapter_missing_mandatory() {
        let adapter = FileAdapter::new("kv-file", "/nonexistent/path/config.kv", LineParser);
        let err = adapter.load().unwrap_err();

        assert!(matches!(err, ConfigError::SourceError { .. }));
        assert!(err.to_string().contains("kv-file"));
    }

    #[test]
    fn test_file_adapter_missing_optional() {
        let adapter =
            FileAdapter::new("kv-file", "/nonexistent/path/config.kv", LineParser).optional(true);
        assert!(adapter.is_optional());
        assert!(adapter.load().unwrap().is_empty());
    }

    #[test]
    fn test_file_adapter_optional_but_malformed() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "no separator here").unwrap();

        let adapter = FileAdapter::new("kv-file", temp_file.path(), LineParser).optional(true);
        assert!(matches!(
            adapter.load().unwrap_err(),
            ConfigError::ParseError { .. }
        ));
    }

    #[test]
    fn test_file_adapter_file_path() {
        let temp_file = NamedTempFile::new().unwrap();
        let adapter = FileAdapter::new("kv-file", temp_file.path(), LineParser);
        assert_eq!(adapter.file_path(), temp_file.path());
        assert_eq!(adapter.parser().supported_extensions(), &["kv"]);
    }

    #[test]
    fn test_file_adapter_in_config_dir() {
        let adapter = FileAdapter::in_config_dir(
            "kv-file",
            "layercfg-test-app",
            "org.example",
            "config.kv",
            LineParser,
        );
        if let Ok(adapter) = adapter {
            assert!(adapter.file_path().ends_with("config.kv"));
        }
    }
}
