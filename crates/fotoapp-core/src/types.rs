// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types: social-media platform presets and the filter catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FotoError;

/// Social-media platforms with a fixed target resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Youtube,
    Instagram,
    Twitter,
    Facebook,
}

impl Platform {
    /// Every supported platform, in menu order.
    pub const ALL: [Platform; 4] = [
        Self::Youtube,
        Self::Instagram,
        Self::Twitter,
        Self::Facebook,
    ];

    /// Target (width, height) in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::Youtube => (1280, 720),
            Self::Instagram => (1080, 1080),
            Self::Twitter => (1024, 512),
            Self::Facebook => (1200, 630),
        }
    }

    /// Identifier as typed by the user and used in output file names.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Youtube => "Youtube",
            Self::Instagram => "Instagram",
            Self::Twitter => "Twitter",
            Self::Facebook => "Facebook",
        }
    }

    /// Comma-separated list of valid identifiers, for user-facing messages.
    pub fn options() -> String {
        Self::ALL
            .iter()
            .map(Platform::name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = FotoError;

    /// Exact, case-sensitive match against the preset names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|platform| platform.name() == s)
            .ok_or_else(|| FotoError::UnsupportedPlatform(s.to_string()))
    }
}

/// The fixed catalog of convolution filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterKind {
    Blur,
    Contour,
    Detail,
    EdgeEnhance,
    EdgeEnhanceMore,
    Emboss,
    FindEdges,
    Sharpen,
    Smooth,
}

impl FilterKind {
    /// Catalog order used when applying every filter in turn.
    pub const CATALOG: [FilterKind; 9] = [
        Self::Blur,
        Self::Contour,
        Self::Detail,
        Self::EdgeEnhance,
        Self::EdgeEnhanceMore,
        Self::Emboss,
        Self::FindEdges,
        Self::Sharpen,
        Self::Smooth,
    ];

    /// Catalog name, e.g. `EDGE_ENHANCE`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Blur => "BLUR",
            Self::Contour => "CONTOUR",
            Self::Detail => "DETAIL",
            Self::EdgeEnhance => "EDGE_ENHANCE",
            Self::EdgeEnhanceMore => "EDGE_ENHANCE_MORE",
            Self::Emboss => "EMBOSS",
            Self::FindEdges => "FIND_EDGES",
            Self::Sharpen => "SHARPEN",
            Self::Smooth => "SMOOTH",
        }
    }

    /// Short human description, shown in the CLI menu.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Blur => "softens the image",
            Self::Contour => "traces the contours",
            Self::Detail => "brings out fine detail",
            Self::EdgeEnhance => "enhances the edges",
            Self::EdgeEnhanceMore => "enhances the edges strongly",
            Self::Emboss => "makes the image look engraved",
            Self::FindEdges => "keeps only the edges",
            Self::Sharpen => "increases sharpness",
            Self::Smooth => "smooths the image slightly",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = FotoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::CATALOG
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| FotoError::UnknownFilter(s.to_string()))
    }
}
