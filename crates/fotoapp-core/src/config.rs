// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FotoError, Result};

/// Settings read from `fotoapp.json`. Every field is optional in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory receiving the JPEG outputs and comparison sheets.
    pub output_dir: PathBuf,
    /// JPEG quality for saved outputs (1-100).
    pub jpeg_quality: u8,
    /// Binarization threshold used when the user enters none.
    pub default_threshold: i32,
    /// Write side-by-side comparison sheets next to the outputs.
    pub write_comparisons: bool,
    /// HTTP timeout in seconds. `None` blocks until the server answers.
    pub http_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            jpeg_quality: 90,
            default_threshold: 127,
            write_comparisons: true,
            http_timeout_secs: None,
        }
    }
}

impl AppConfig {
    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()
    }

    /// Read a JSON config file, or fall back to defaults if it does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// The configured HTTP timeout, if any.
    pub fn http_timeout(&self) -> Option<Duration> {
        self.http_timeout_secs.map(Duration::from_secs)
    }

    fn validate(mut self) -> Result<Self> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(FotoError::Config("output_dir must not be empty".into()));
        }
        if self.http_timeout_secs == Some(0) {
            return Err(FotoError::Config(
                "http_timeout_secs must be positive; omit it to disable the timeout".into(),
            ));
        }
        self.jpeg_quality = self.jpeg_quality.clamp(1, 100);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(dir.path().join("fotoapp.json")).unwrap();
        assert_eq!(config.jpeg_quality, 90);
        assert_eq!(config.default_threshold, 127);
        assert!(config.http_timeout().is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults_and_clamps_quality() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "jpeg_quality": 0, "http_timeout_secs": 30 }}"#).unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.jpeg_quality, 1);
        assert_eq!(config.http_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(config.write_comparisons);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "http_timeout_secs": 0 }}"#).unwrap();
        assert!(matches!(
            AppConfig::load(file.path()),
            Err(FotoError::Config(_))
        ));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            AppConfig::load(file.path()),
            Err(FotoError::Serialization(_))
        ));
    }
}
