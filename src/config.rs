// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pathgrid Editor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Editor configuration.
//!
//! Configuration is optional JSON; every field has a default so an empty object (or no file at
//! all) yields [`EditorConfig::default`].

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::CELL_EXTENT;
use crate::render::{Rgba, WireframeStyle};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    /// Side length of an exterior cell; exterior points are clamped to `[0, cell_extent]`.
    pub cell_extent: i32,
    pub style: WireframeStyle,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            cell_extent: CELL_EXTENT,
            style: WireframeStyle::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct EditorConfigJson {
    cell_extent: i32,
    marker_size: f32,
    node_colour: Rgba,
    edge_colour: Rgba,
    selected_colour: Rgba,
    connection_colour: Rgba,
}

impl Default for EditorConfigJson {
    fn default() -> Self {
        EditorConfig::default().into()
    }
}

impl From<EditorConfig> for EditorConfigJson {
    fn from(config: EditorConfig) -> Self {
        Self {
            cell_extent: config.cell_extent,
            marker_size: config.style.marker_size,
            node_colour: config.style.node_colour,
            edge_colour: config.style.edge_colour,
            selected_colour: config.style.selected_colour,
            connection_colour: config.style.connection_colour,
        }
    }
}

impl EditorConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw).map_err(|err| match err {
            ConfigError::Json { source, .. } => ConfigError::Json {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let json: EditorConfigJson =
            serde_json::from_str(raw).map_err(|source| ConfigError::Json {
                path: PathBuf::new(),
                source,
            })?;

        if json.cell_extent <= 0 {
            return Err(ConfigError::InvalidCellExtent {
                value: json.cell_extent,
            });
        }
        if !(json.marker_size.is_finite() && json.marker_size > 0.0) {
            return Err(ConfigError::InvalidMarkerSize {
                value: json.marker_size,
            });
        }

        Ok(Self {
            cell_extent: json.cell_extent,
            style: WireframeStyle {
                marker_size: json.marker_size,
                node_colour: json.node_colour,
                edge_colour: json.edge_colour,
                selected_colour: json.selected_colour,
                connection_colour: json.connection_colour,
            },
        })
    }

    pub fn to_json_string(&self) -> String {
        let json = EditorConfigJson::from(*self);
        serde_json::to_string_pretty(&json).unwrap_or_default()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
    InvalidCellExtent { value: i32 },
    InvalidMarkerSize { value: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::InvalidCellExtent { value } => {
                write!(f, "cell_extent must be positive (got {value})")
            }
            Self::InvalidMarkerSize { value } => {
                write!(f, "marker_size must be a positive number (got {value})")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidCellExtent { .. } | Self::InvalidMarkerSize { .. } => None,
        }
    }
}
