// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pathgrid Editor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Glue between pathgrid views, the document and its history.
//!
//! A [`Workspace`] plays the role of the owning editor window: it routes [`Intent`]s to the view
//! of the addressed pathgrid, commits the resulting batch through [`History`], flags the views
//! whose pathgrid changed, and drives [`PathgridInstance::tick`] once per frame.

use std::fmt;

use crate::config::EditorConfig;
use crate::editor::{PathgridInstance, TickOutcome};
use crate::model::{CellCoordinates, Document, NodeIndex, PathgridId, Vec3};
use crate::ops::{ApplyError, CommandBatch, History};
use crate::render::{Scene, TransformHandle};

/// A single user action against one pathgrid view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    SelectAll,
    ToggleSelected { node: NodeIndex },
    InvertSelected,
    ClearSelected,
    MoveSelected { offset: Vec3 },
    SetupConnectionIndicator { node: NodeIndex },
    ResetMove,
    AddPoint { position: Vec3 },
    ApplyPosition,
    AddEdge { node1: NodeIndex, node2: NodeIndex },
    AddEdgesFrom { node: NodeIndex },
    RemoveNodes,
    RemoveEdges,
    Undo,
    Redo,
}

impl Intent {
    /// Label recorded on the history entry for intents that edit the document.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::AddPoint { .. } => Some("add pathgrid point"),
            Self::ApplyPosition => Some("move pathgrid points"),
            Self::AddEdge { .. } | Self::AddEdgesFrom { .. } => Some("connect pathgrid points"),
            Self::RemoveNodes => Some("remove pathgrid points"),
            Self::RemoveEdges => Some("remove pathgrid edges"),
            _ => None,
        }
    }
}

/// What [`Workspace::perform`] did with an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Performed {
    /// Commands committed to the document (zero for visual-only intents).
    pub commands: usize,
    /// Whether the document changed (a commit, undo or redo happened).
    pub document_changed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceError {
    NotOpen { pathgrid_id: PathgridId },
    Apply(ApplyError),
}

impl fmt::Display for WorkspaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotOpen { pathgrid_id } => write!(f, "pathgrid {pathgrid_id} is not open"),
            Self::Apply(err) => write!(f, "cannot commit edit: {err}"),
        }
    }
}

impl std::error::Error for WorkspaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotOpen { .. } => None,
            Self::Apply(err) => Some(err),
        }
    }
}

impl From<ApplyError> for WorkspaceError {
    fn from(err: ApplyError) -> Self {
        Self::Apply(err)
    }
}

pub struct Workspace<S: Scene> {
    document: Document,
    history: History,
    scene: S,
    root: TransformHandle,
    config: EditorConfig,
    views: Vec<PathgridInstance>,
}

impl<S: Scene> Workspace<S> {
    pub fn new(document: Document, scene: S, root: TransformHandle, config: EditorConfig) -> Self {
        Self {
            document,
            history: History::new(),
            scene,
            root,
            config,
            views: Vec::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn views(&self) -> &[PathgridInstance] {
        &self.views
    }

    pub fn view(&self, pathgrid_id: &PathgridId) -> Option<&PathgridInstance> {
        self.views.iter().find(|view| view.id() == pathgrid_id)
    }

    /// Opens a view for `pathgrid_id`, placed at the coordinates of the cell with the same id.
    /// Opening an already open pathgrid is a no-op.
    pub fn open(&mut self, pathgrid_id: PathgridId) {
        if self.view(&pathgrid_id).is_some() {
            return;
        }
        let coordinates = self
            .document
            .resolve_cell(&pathgrid_id.cast())
            .filter(|cell| !cell.is_interior())
            .map(|cell| cell.coordinates())
            .unwrap_or_else(CellCoordinates::default);
        let view = PathgridInstance::new(
            &self.document,
            &mut self.scene,
            self.root,
            pathgrid_id,
            coordinates,
            &self.config,
        );
        self.views.push(view);
    }

    /// Closes the view for `pathgrid_id`. Returns false if it was not open.
    pub fn close(&mut self, pathgrid_id: &PathgridId) -> bool {
        let Some(index) = self.views.iter().position(|view| view.id() == pathgrid_id) else {
            return false;
        };
        let view = self.views.remove(index);
        view.destroy(&mut self.scene);
        true
    }

    /// Edits the document outside the command path (e.g. record removal by another tool) and
    /// flags every view for a rebuild.
    pub fn edit_document(&mut self, edit: impl FnOnce(&mut Document)) {
        edit(&mut self.document);
        self.document.bump_rev();
        self.recreate_all();
    }

    pub fn perform(
        &mut self,
        pathgrid_id: &PathgridId,
        intent: Intent,
    ) -> Result<Performed, WorkspaceError> {
        match intent {
            Intent::Undo => {
                let changed = self.history.undo(&mut self.document);
                if changed {
                    self.recreate_all();
                }
                return Ok(Performed {
                    commands: 0,
                    document_changed: changed,
                });
            }
            Intent::Redo => {
                let changed = self.history.redo(&mut self.document);
                if changed {
                    self.recreate_all();
                }
                return Ok(Performed {
                    commands: 0,
                    document_changed: changed,
                });
            }
            _ => {}
        }

        let Some(index) = self.views.iter().position(|view| view.id() == pathgrid_id) else {
            return Err(WorkspaceError::NotOpen {
                pathgrid_id: pathgrid_id.clone(),
            });
        };

        let mut batch = match intent.label() {
            Some(label) => CommandBatch::labelled(label),
            None => CommandBatch::new(),
        };
        let document = &self.document;
        let scene = &mut self.scene;
        let view = &mut self.views[index];

        match intent {
            Intent::SelectAll => view.select_all(document, scene),
            Intent::ToggleSelected { node } => view.toggle_selected(node),
            Intent::InvertSelected => view.invert_selected(document, scene),
            Intent::ClearSelected => view.clear_selected(scene),
            Intent::MoveSelected { offset } => view.move_selected(scene, offset),
            Intent::SetupConnectionIndicator { node } => view.setup_connection_indicator(node),
            Intent::ResetMove => view.reset_move(scene),
            Intent::AddPoint { position } => {
                view.apply_point(document, &mut batch, position);
            }
            Intent::ApplyPosition => {
                view.apply_position(document, scene, &mut batch);
            }
            Intent::AddEdge { node1, node2 } => {
                view.apply_edge(document, &mut batch, node1, node2);
            }
            Intent::AddEdgesFrom { node } => {
                view.apply_edges(document, &mut batch, node);
            }
            Intent::RemoveNodes => {
                view.apply_remove_nodes(document, scene, &mut batch);
            }
            Intent::RemoveEdges => {
                view.apply_remove_edges(document, &mut batch);
            }
            Intent::Undo | Intent::Redo => {}
        }

        if batch.is_empty() {
            return Ok(Performed::default());
        }

        let result = self.history.commit(&mut self.document, &batch)?;
        for view in &mut self.views {
            if result.delta.touches(view.id()) {
                view.recreate_geometry();
            }
        }
        Ok(Performed {
            commands: result.applied,
            document_changed: true,
        })
    }

    /// Runs one frame of geometry synchronisation for every open view.
    pub fn tick(&mut self) -> Vec<(PathgridId, TickOutcome)> {
        let mut outcomes = Vec::with_capacity(self.views.len());
        for view in &mut self.views {
            let outcome = view.tick(&self.document, &mut self.scene);
            outcomes.push((view.id().clone(), outcome));
        }
        outcomes
    }

    fn recreate_all(&mut self) {
        for view in &mut self.views {
            view.recreate_geometry();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Intent, Workspace, WorkspaceError};
    use crate::config::EditorConfig;
    use crate::editor::TickOutcome;
    use crate::model::fixtures::demo_document;
    use crate::model::{PathgridId, Vec3};
    use crate::render::RecordingScene;

    fn workspace() -> Workspace<RecordingScene> {
        let scene = RecordingScene::new();
        let root = scene.root();
        Workspace::new(demo_document(), scene, root, EditorConfig::default())
    }

    fn id(value: &str) -> PathgridId {
        PathgridId::new(value).expect("pathgrid id")
    }

    #[test]
    fn intents_commit_and_flag_only_touched_views() {
        let mut workspace = workspace();
        let exterior = id("#0 0");
        let interior = id("Balmora, Guild of Mages");
        workspace.open(exterior.clone());
        workspace.open(interior.clone());
        workspace.tick();

        let performed = workspace
            .perform(&exterior, Intent::AddEdge { node1: 0, node2: 1 })
            .expect("perform");
        assert_eq!(performed.commands, 6);
        assert!(performed.document_changed);
        assert_eq!(workspace.history().undo_label(), Some("connect pathgrid points"));

        let outcomes = workspace.tick();
        assert_eq!(
            outcomes,
            vec![
                (exterior.clone(), TickOutcome::Rebuilt),
                (interior.clone(), TickOutcome::Idle)
            ]
        );
    }

    #[test]
    fn visual_intents_do_not_touch_history() {
        let mut workspace = workspace();
        let exterior = id("#0 0");
        workspace.open(exterior.clone());

        for intent in [
            Intent::SelectAll,
            Intent::MoveSelected {
                offset: Vec3::new(1.0, 0.0, 0.0),
            },
            Intent::ResetMove,
            Intent::ClearSelected,
        ] {
            let performed = workspace.perform(&exterior, intent).expect("perform");
            assert_eq!(performed.commands, 0);
        }
        assert_eq!(workspace.history().undo_len(), 0);
        assert_eq!(workspace.document().rev(), 0);
    }

    #[test]
    fn undo_flags_every_view() {
        let mut workspace = workspace();
        let exterior = id("#0 0");
        let interior = id("Balmora, Guild of Mages");
        workspace.open(exterior.clone());
        workspace.open(interior.clone());
        workspace
            .perform(
                &exterior,
                Intent::AddPoint {
                    position: Vec3::new(5.0, 5.0, 5.0),
                },
            )
            .expect("perform");
        workspace.tick();

        let performed = workspace.perform(&exterior, Intent::Undo).expect("undo");
        assert!(performed.document_changed);
        assert!(workspace
            .tick()
            .iter()
            .all(|(_, outcome)| *outcome == TickOutcome::Rebuilt));
    }

    #[test]
    fn deleted_pathgrid_view_tears_down() {
        let mut workspace = workspace();
        let removed = id("#1 0");
        workspace.open(removed.clone());

        assert_eq!(workspace.tick(), vec![(removed.clone(), TickOutcome::TornDown)]);
        let performed = workspace
            .perform(&removed, Intent::AddEdge { node1: 0, node2: 0 })
            .expect("perform");
        assert_eq!(performed.commands, 0);
    }

    #[test]
    fn unknown_view_is_an_error() {
        let mut workspace = workspace();
        let err = workspace
            .perform(&id("Vivec"), Intent::SelectAll)
            .expect_err("not open");
        assert_eq!(err, WorkspaceError::NotOpen { pathgrid_id: id("Vivec") });
    }

    #[test]
    fn close_destroys_view() {
        let mut workspace = workspace();
        let exterior = id("#0 0");
        workspace.open(exterior.clone());
        workspace.open(exterior.clone());
        assert_eq!(workspace.views().len(), 1);

        let base = workspace.view(&exterior).expect("view").base_transform();
        assert!(workspace.close(&exterior));
        assert!(!workspace.scene().is_attached(base));
        assert!(!workspace.close(&exterior));
    }
}
