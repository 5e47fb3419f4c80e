// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image acquisition — fetch raw bytes from a URL and decode them.

use std::time::Duration;

use fotoapp_core::error::{FotoError, Result};
use image::DynamicImage;
use tracing::{debug, info, instrument};

use crate::image::ImageProcessor;

/// Anything that can turn a URL into raw bytes.
pub trait ByteSource {
    /// Fetch the resource at `url`. Transport failures and non-success
    /// responses are reported as `FotoError::Fetch`.
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Blocking HTTP GET over `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    /// Build a client. `timeout` of `None` waits indefinitely.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("fotoapp/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| FotoError::Fetch(format!("HTTP client init failed: {err}")))?;
        Ok(Self { client })
    }
}

impl ByteSource for HttpSource {
    #[instrument(skip(self))]
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| FotoError::Fetch(format!("GET {url}: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FotoError::Fetch(format!("GET {url} returned {status}")));
        }

        let body = response
            .bytes()
            .map_err(|err| FotoError::Fetch(format!("reading body of {url}: {err}")))?;
        debug!(status = status.as_u16(), bytes = body.len(), "Response received");
        Ok(body.to_vec())
    }
}

/// Fetch `url` from `source` and decode the body into an image.
#[instrument(skip(source))]
pub fn acquire(source: &impl ByteSource, url: &str) -> Result<DynamicImage> {
    let bytes = source.fetch(url)?;
    let image = ImageProcessor::from_bytes(&bytes)?.into_dynamic();
    info!(
        width = image.width(),
        height = image.height(),
        "Image acquired"
    );
    Ok(image)
}
