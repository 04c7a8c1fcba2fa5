// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pathgrid Editor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{
    Cell, CellCoordinates, CellId, Document, Edge, Pathgrid, PathgridId, Point, RecordState,
};

use super::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
enum RecordStateJson {
    #[default]
    BaseOnly,
    Modified,
    Added,
    Deleted,
}

impl From<RecordState> for RecordStateJson {
    fn from(state: RecordState) -> Self {
        match state {
            RecordState::BaseOnly => Self::BaseOnly,
            RecordState::Modified => Self::Modified,
            RecordState::Added => Self::Added,
            RecordState::Deleted => Self::Deleted,
        }
    }
}

impl From<RecordStateJson> for RecordState {
    fn from(state: RecordStateJson) -> Self {
        match state {
            RecordStateJson::BaseOnly => Self::BaseOnly,
            RecordStateJson::Modified => Self::Modified,
            RecordStateJson::Added => Self::Added,
            RecordStateJson::Deleted => Self::Deleted,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
struct CellJson {
    id: String,
    #[serde(default)]
    x: i32,
    #[serde(default)]
    y: i32,
    #[serde(default)]
    interior: bool,
    #[serde(default)]
    state: RecordStateJson,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
struct PointJson {
    x: i32,
    y: i32,
    z: i32,
    #[serde(default, skip_serializing_if = "is_false")]
    auto_generated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
struct EdgeJson {
    from: i32,
    to: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
struct PathgridJson {
    id: String,
    #[serde(default)]
    state: RecordStateJson,
    #[serde(default)]
    points: Vec<PointJson>,
    #[serde(default)]
    edges: Vec<EdgeJson>,
}

/// On-disk document: cells and pathgrids in collection order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
struct DocumentJson {
    #[serde(default)]
    rev: u64,
    #[serde(default)]
    cells: Vec<CellJson>,
    #[serde(default)]
    pathgrids: Vec<PathgridJson>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl From<&Document> for DocumentJson {
    fn from(document: &Document) -> Self {
        let cells = document
            .cells()
            .records()
            .iter()
            .map(|record| {
                let cell = record.get();
                CellJson {
                    id: cell.cell_id().to_string(),
                    x: cell.coordinates().x(),
                    y: cell.coordinates().y(),
                    interior: cell.is_interior(),
                    state: record.state().into(),
                }
            })
            .collect();

        let pathgrids = document
            .pathgrids()
            .records()
            .iter()
            .map(|record| {
                let pathgrid = record.get();
                PathgridJson {
                    id: pathgrid.pathgrid_id().to_string(),
                    state: record.state().into(),
                    points: pathgrid
                        .points()
                        .iter()
                        .map(|point| PointJson {
                            x: point.x,
                            y: point.y,
                            z: point.z,
                            auto_generated: point.auto_generated,
                        })
                        .collect(),
                    edges: pathgrid
                        .edges()
                        .iter()
                        .map(|edge| EdgeJson {
                            from: edge.from,
                            to: edge.to,
                        })
                        .collect(),
                }
            })
            .collect();

        Self {
            rev: document.rev(),
            cells,
            pathgrids,
        }
    }
}

impl TryFrom<DocumentJson> for Document {
    type Error = StoreError;

    fn try_from(json: DocumentJson) -> Result<Self, Self::Error> {
        let mut document = Document::new();
        document.set_rev(json.rev);

        for cell in json.cells {
            let cell_id = CellId::new(&cell.id).map_err(|source| StoreError::InvalidId {
                field: "cells[].id",
                value: cell.id.clone(),
                source,
            })?;
            let value = if cell.interior {
                Cell::interior(cell_id)
            } else {
                Cell::exterior(cell_id, CellCoordinates::new(cell.x, cell.y))
            };
            document.cells_mut().insert(value, cell.state.into());
        }

        for entry in json.pathgrids {
            let pathgrid_id =
                PathgridId::new(&entry.id).map_err(|source| StoreError::InvalidId {
                    field: "pathgrids[].id",
                    value: entry.id.clone(),
                    source,
                })?;
            let mut pathgrid = Pathgrid::new(pathgrid_id);
            pathgrid.points_mut().extend(entry.points.iter().map(|point| {
                let mut value = Point::new(point.x, point.y, point.z);
                value.auto_generated = point.auto_generated;
                value
            }));
            pathgrid
                .edges_mut()
                .extend(entry.edges.iter().map(|edge| Edge::new(edge.from, edge.to)));
            pathgrid.recount_connections();
            document
                .pathgrids_mut()
                .insert(pathgrid, entry.state.into());
        }

        Ok(document)
    }
}

/// Parses a document from JSON text. `path` is only used for error reporting.
pub fn parse_document(raw: &str, path: &Path) -> Result<Document, StoreError> {
    let json: DocumentJson = serde_json::from_str(raw).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    Document::try_from(json)
}

pub fn render_document(document: &Document) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&DocumentJson::from(document))
}

/// JSON schema of the document file format.
pub fn document_schema() -> serde_json::Value {
    serde_json::to_value(schemars::schema_for!(DocumentJson)).unwrap_or_default()
}

/// A document stored as a single JSON file.
#[derive(Debug, Clone)]
pub struct DocumentFile {
    path: PathBuf,
}

impl DocumentFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Document, StoreError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_document(&raw, &self.path)
    }

    /// Writes the document next to its final location first and renames it into place.
    pub fn save(&self, document: &Document) -> Result<(), StoreError> {
        let json = render_document(document).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        let tmp_path = self.tmp_path();
        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source: std::io::Error| StoreError::Io { path, source }
        };

        let mut file = fs::File::create(&tmp_path).map_err(io_err(&tmp_path))?;
        file.write_all(json.as_bytes())
            .and_then(|()| file.write_all(b"\n"))
            .map_err(io_err(&tmp_path))?;
        drop(file);

        fs::rename(&tmp_path, &self.path).map_err(|source| {
            let _ = fs::remove_file(&tmp_path);
            StoreError::Io {
                path: self.path.clone(),
                source,
            }
        })?;
        tracing::debug!(path = ?self.path, rev = document.rev(), "document saved");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rstest::{fixture, rstest};

    use super::{document_schema, parse_document, render_document, DocumentFile};
    use crate::model::fixtures::demo_document;
    use crate::model::{PathgridId, RecordState};
    use crate::store::StoreError;

    static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

    struct TempDir {
        path: PathBuf,
    }

    impl TempDir {
        fn new(prefix: &str) -> Self {
            let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
            let mut path = env::temp_dir();
            path.push(format!(
                "pathgrid-editor-{prefix}-{}-{counter}",
                std::process::id()
            ));
            std::fs::create_dir_all(&path).unwrap();
            Self { path }
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }

    #[fixture]
    fn tmp() -> TempDir {
        TempDir::new("document-file")
    }

    #[rstest]
    fn save_then_load_preserves_records(tmp: TempDir) {
        let file = DocumentFile::new(tmp.path.join("world.json"));
        let document = demo_document();

        file.save(&document).unwrap();
        let loaded = file.load().unwrap();

        assert_eq!(loaded, document);
        assert!(!tmp.path.join("world.json.tmp").exists());
    }

    #[rstest]
    fn load_reports_missing_file(tmp: TempDir) {
        let file = DocumentFile::new(tmp.path.join("missing.json"));
        assert!(matches!(file.load(), Err(StoreError::Io { .. })));
    }

    #[test]
    fn parse_keeps_soft_deleted_records() {
        let raw = r##"{
  "cells": [{ "id": "#1 0", "x": 1, "y": 0 }],
  "pathgrids": [
    { "id": "#1 0", "state": "deleted", "points": [{ "x": 1, "y": 2, "z": 3 }] }
  ]
}"##;
        let document = parse_document(raw, Path::new("inline.json")).unwrap();
        let id = PathgridId::new("#1 0").unwrap();

        assert!(document.resolve_pathgrid(&id).is_none());
        assert_eq!(
            document.pathgrids().record(0).map(|record| record.state()),
            Some(RecordState::Deleted)
        );
    }

    #[test]
    fn parse_rejects_empty_ids() {
        let raw = r#"{ "pathgrids": [{ "id": "" }] }"#;
        match parse_document(raw, Path::new("inline.json")) {
            Err(StoreError::InvalidId { field, .. }) => assert_eq!(field, "pathgrids[].id"),
            other => panic!("expected InvalidId, got: {other:?}"),
        }
    }

    #[test]
    fn rendered_edges_use_named_endpoints() {
        let json = render_document(&demo_document()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let edge = &value["pathgrids"][1]["edges"][0];
        assert_eq!(edge["from"], 0);
        assert_eq!(edge["to"], 1);
    }

    #[test]
    fn schema_describes_top_level_fields() {
        let schema = document_schema();
        let properties = schema["properties"].as_object().expect("properties");
        assert!(properties.contains_key("cells"));
        assert!(properties.contains_key("pathgrids"));
    }
}
