// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pathgrid Editor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Lazy geometry synchronisation.
//!
//! Edits and selection changes only set flags; [`PathgridInstance::tick`] does the actual work at
//! most once per frame.

use crate::model::Document;
use crate::render::{build_graph_wireframe, build_highlight_wireframe, Scene};

use super::pathgrid::PathgridInstance;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct GeometryFlags {
    rebuild: bool,
    teardown: bool,
}

impl GeometryFlags {
    pub(crate) fn rebuild() -> Self {
        Self {
            rebuild: true,
            teardown: false,
        }
    }

    pub(crate) fn request_rebuild(&mut self) {
        self.rebuild = true;
    }

    pub(crate) fn request_teardown(&mut self) {
        self.teardown = true;
    }

    fn is_clean(self) -> bool {
        !self.rebuild && !self.teardown
    }
}

/// What a call to [`PathgridInstance::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing was dirty.
    Idle,
    /// Graph and highlight drawables were rebuilt from the document.
    Rebuilt,
    /// Both drawables were removed.
    TornDown,
}

impl PathgridInstance {
    /// Marks the geometry for rebuild on the next tick (e.g. after the document changed).
    pub fn recreate_geometry(&mut self) {
        self.geometry.request_rebuild();
    }

    /// Marks the geometry for removal on the next tick. Removal wins over a pending rebuild.
    pub fn remove_geometry(&mut self) {
        self.geometry.request_teardown();
    }

    pub fn needs_geometry_rebuild(&self) -> bool {
        self.geometry.rebuild
    }

    pub fn needs_geometry_teardown(&self) -> bool {
        self.geometry.teardown
    }

    /// Brings the drawables in line with the document and selection. Call once per frame.
    pub fn tick(&mut self, document: &Document, scene: &mut dyn Scene) -> TickOutcome {
        if self.geometry.is_clean() {
            return TickOutcome::Idle;
        }

        let outcome = if self.geometry.teardown {
            self.tear_down(scene);
            TickOutcome::TornDown
        } else if self.rebuild(document, scene) {
            TickOutcome::Rebuilt
        } else {
            tracing::warn!(
                pathgrid = %self.pathgrid_id,
                "pathgrid missing or deleted; removing geometry"
            );
            self.selection.clear();
            self.tear_down(scene);
            TickOutcome::TornDown
        };

        self.geometry = GeometryFlags::default();
        outcome
    }

    fn rebuild(&mut self, document: &Document, scene: &mut dyn Scene) -> bool {
        let Some(pathgrid) = document.resolve_pathgrid(&self.pathgrid_id) else {
            return false;
        };

        scene.clear_drawable(self.graph_slot);
        let graph = build_graph_wireframe(pathgrid, &self.style);
        tracing::debug!(
            pathgrid = %self.pathgrid_id,
            points = pathgrid.points().len(),
            edges = pathgrid.edges().len(),
            "pathgrid geometry rebuilt"
        );
        scene.set_drawable(self.graph_slot, graph);

        let nodes = self.selection.highlight_nodes();
        scene.clear_drawable(self.highlight_slot);
        if !nodes.is_empty() {
            let connection = self.selection.connection().is_some();
            let highlight = build_highlight_wireframe(pathgrid, &nodes, connection, &self.style);
            scene.set_drawable(self.highlight_slot, highlight);
        }
        true
    }

    fn tear_down(&mut self, scene: &mut dyn Scene) {
        scene.clear_drawable(self.graph_slot);
        scene.clear_drawable(self.highlight_slot);
    }
}
