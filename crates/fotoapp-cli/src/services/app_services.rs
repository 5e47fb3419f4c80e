// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — loads the configuration once and builds the HTTP
// source and workbench from it.

use std::path::Path;

use fotoapp_core::AppConfig;
use fotoapp_core::error::Result;
use fotoapp_imaging::{ComparisonWriter, HttpSource, NullTarget, RenderTarget, Workbench};
use tracing::info;

/// Everything the menu needs, built from `fotoapp.json`.
pub struct AppServices {
    pub config: AppConfig,
    pub source: HttpSource,
    pub workbench: Workbench<Box<dyn RenderTarget>>,
}

impl AppServices {
    /// Load the config at `config_path` (defaults if missing), create the
    /// output directory, and prepare the HTTP client.
    pub fn init(config_path: &Path) -> Result<Self> {
        let config = AppConfig::load_or_default(config_path)?;
        info!(
            config = %config_path.display(),
            output_dir = %config.output_dir.display(),
            "initialising app services"
        );

        std::fs::create_dir_all(&config.output_dir)?;

        let source = HttpSource::new(config.http_timeout())?;
        let target: Box<dyn RenderTarget> = if config.write_comparisons {
            Box::new(ComparisonWriter::new(&config.output_dir))
        } else {
            Box::new(NullTarget)
        };
        let workbench = Workbench::boxed(&config.output_dir, config.jpeg_quality, target);

        Ok(Self {
            config,
            source,
            workbench,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_configured_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("results");
        let config_path = dir.path().join("fotoapp.json");
        std::fs::write(
            &config_path,
            format!(r#"{{ "output_dir": {:?}, "write_comparisons": false }}"#, out),
        )
        .unwrap();

        let services = AppServices::init(&config_path).unwrap();
        assert!(out.is_dir());
        assert_eq!(services.workbench.output_dir(), out.as_path());
        assert!(!services.config.write_comparisons);
    }
}
