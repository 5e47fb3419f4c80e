// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the interactive CLI.
//
// Every technical error is mapped to a plain sentence with a clear suggestion.

use crate::error::FotoError;
use crate::types::{FilterKind, Platform};

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Network blip or busy server; trying again may work.
    Transient,
    /// The user typed something we can't use and should try a different value.
    ActionRequired,
    /// Retrying won't help: the data itself is unusable.
    Permanent,
}

/// A human-readable error with a plain message and an actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// One-line summary.
    pub message: String,
    /// What the user should try next.
    pub suggestion: String,
    /// Severity level.
    pub severity: Severity,
}

impl std::fmt::Display for HumanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.message, self.suggestion)
    }
}

/// Convert a `FotoError` into a `HumanError`.
pub fn humanize_error(err: &FotoError) -> HumanError {
    match err {
        FotoError::Fetch(detail) => humanize_fetch_error(detail),

        FotoError::Decode(_) => HumanError {
            message: "The downloaded file is not an image we can read.".into(),
            suggestion: "Make sure the URL points at the raw image (on GitHub, use the \"Raw\" link), in JPEG or PNG format.".into(),
            severity: Severity::Permanent,
        },

        FotoError::UnknownFilter(name) => HumanError {
            message: format!("There is no filter called \"{name}\"."),
            suggestion: format!(
                "Choose one of: {}.",
                FilterKind::CATALOG
                    .iter()
                    .map(FilterKind::name)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            severity: Severity::ActionRequired,
        },

        FotoError::UnsupportedPlatform(_) => HumanError {
            message: "Platform not supported.".into(),
            suggestion: format!("The options are: {}.", Platform::options()),
            severity: Severity::ActionRequired,
        },

        FotoError::Encode(_) => HumanError {
            message: "The result couldn't be encoded.".into(),
            suggestion: "Try a different operation, or lower the jpeg_quality setting.".into(),
            severity: Severity::Permanent,
        },

        FotoError::Render(detail) => HumanError {
            message: "The comparison sheet couldn't be written.".into(),
            suggestion: format!("Set write_comparisons to false in fotoapp.json to skip it. ({detail})"),
            severity: Severity::Permanent,
        },

        FotoError::Config(detail) => HumanError {
            message: "The settings file has a problem.".into(),
            suggestion: format!("Fix fotoapp.json or delete it to use the defaults. ({detail})"),
            severity: Severity::ActionRequired,
        },

        FotoError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: "The output folder couldn't be found.".into(),
                    suggestion: "Check the output_dir setting in fotoapp.json.".into(),
                    severity: Severity::ActionRequired,
                }
            } else if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "We don't have permission to write there.".into(),
                    suggestion: "Choose an output_dir you can write to.".into(),
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing a file.".into(),
                    suggestion: "Try again. If this keeps happening, your disk may be full.".into(),
                    severity: Severity::Transient,
                }
            }
        }

        FotoError::Serialization(_) => HumanError {
            message: "The settings file is not valid JSON.".into(),
            suggestion: "Fix fotoapp.json or delete it to use the defaults.".into(),
            severity: Severity::ActionRequired,
        },
    }
}

/// Turn HTTP / transport failure details into readable messages.
fn humanize_fetch_error(detail: &str) -> HumanError {
    let lower = detail.to_ascii_lowercase();

    if lower.contains("timed out") {
        HumanError {
            message: "The server didn't respond in time.".into(),
            suggestion: "Check your connection and try again, or raise http_timeout_secs.".into(),
            severity: Severity::Transient,
        }
    } else if lower.contains("404") {
        HumanError {
            message: "There is no image at that address.".into(),
            suggestion: "Check the URL for typos.".into(),
            severity: Severity::ActionRequired,
        }
    } else if lower.contains("401") || lower.contains("403") {
        HumanError {
            message: "The server refused to share that image.".into(),
            suggestion: "The file may be private. Use a public URL.".into(),
            severity: Severity::Permanent,
        }
    } else if lower.contains("builder error") || lower.contains("relative url") || lower.contains("invalid url") {
        HumanError {
            message: "That doesn't look like a web address.".into(),
            suggestion: "It should start with https://".into(),
            severity: Severity::ActionRequired,
        }
    } else {
        HumanError {
            message: "We couldn't download the image.".into(),
            suggestion: format!("Check your internet connection and try again. (Detail: {detail})"),
            severity: Severity::Transient,
        }
    }
}
