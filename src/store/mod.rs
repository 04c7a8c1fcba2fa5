// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pathgrid Editor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON persistence for documents and intent scripts.
//!
//! The on-disk shapes are separate `*Json` structs; they are converted to and from the model so
//! the model itself stays free of serialization concerns.

pub mod document_file;
pub mod script;

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::model::IdError;

pub use document_file::{document_schema, parse_document, render_document, DocumentFile};
pub use script::{parse_script, script_schema, Script, ScriptStep};

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidId {
        field: &'static str,
        value: String,
        source: IdError,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::InvalidId {
                field,
                value,
                source,
            } => write!(f, "invalid id for {field}: {value:?}: {source}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidId { source, .. } => Some(source),
        }
    }
}
