// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pathgrid Editor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::config::EditorConfig;
use crate::model::{CellCoordinates, Document, NodeIndex, PathgridId, Vec3};
use crate::render::{DrawableSlot, Scene, TransformHandle, WireframeStyle};

use super::clamp::ClampPolicy;
use super::geometry::GeometryFlags;
use super::selection::Selection;

/// Editor view of one pathgrid bound to a cell.
///
/// The instance owns its scene subtree: a base transform at the cell origin holding the graph
/// drawable, and beneath it a selection transform (carrying the pending move offset) holding the
/// highlight drawable. It never keeps a reference into the [`Document`]; every operation that
/// reads the pathgrid resolves it again from the document passed in.
#[derive(Debug)]
pub struct PathgridInstance {
    pub(super) pathgrid_id: PathgridId,
    pub(super) coordinates: CellCoordinates,
    pub(super) interior: bool,
    pub(super) clamp: ClampPolicy,
    pub(super) style: WireframeStyle,
    pub(super) selection: Selection,
    pub(super) pending_offset: Vec3,
    pub(super) geometry: GeometryFlags,
    pub(super) parent: TransformHandle,
    pub(super) base: TransformHandle,
    pub(super) base_position: Vec3,
    pub(super) selection_transform: TransformHandle,
    pub(super) graph_slot: DrawableSlot,
    pub(super) highlight_slot: DrawableSlot,
}

impl PathgridInstance {
    pub fn new(
        document: &Document,
        scene: &mut dyn Scene,
        parent: TransformHandle,
        pathgrid_id: PathgridId,
        coordinates: CellCoordinates,
        config: &EditorConfig,
    ) -> Self {
        let interior = document
            .resolve_cell(&pathgrid_id.cast())
            .is_some_and(|cell| cell.is_interior());

        let base_position = coordinates.origin(config.cell_extent);
        let base = scene.create_transform(base_position);
        scene.attach_child(parent, base);

        let selection_transform = scene.create_transform(Vec3::ZERO);
        scene.attach_child(base, selection_transform);

        let graph_slot = scene.create_slot(base);
        let highlight_slot = scene.create_slot(selection_transform);

        tracing::debug!(pathgrid = %pathgrid_id, %coordinates, interior, "pathgrid view created");

        Self {
            pathgrid_id,
            coordinates,
            interior,
            clamp: ClampPolicy::for_cell(interior, config.cell_extent),
            style: config.style,
            selection: Selection::new(),
            pending_offset: Vec3::ZERO,
            geometry: GeometryFlags::rebuild(),
            parent,
            base,
            base_position,
            selection_transform,
            graph_slot,
            highlight_slot,
        }
    }

    /// Detaches the instance's subtree from its parent.
    pub fn destroy(self, scene: &mut dyn Scene) {
        scene.clear_drawable(self.graph_slot);
        scene.clear_drawable(self.highlight_slot);
        scene.remove_child(self.parent, self.base);
    }

    pub fn id(&self) -> &PathgridId {
        &self.pathgrid_id
    }

    pub fn coordinates(&self) -> CellCoordinates {
        self.coordinates
    }

    pub fn is_interior(&self) -> bool {
        self.interior
    }

    pub fn clamp_policy(&self) -> ClampPolicy {
        self.clamp
    }

    pub fn base_transform(&self) -> TransformHandle {
        self.base
    }

    pub fn selection_transform(&self) -> TransformHandle {
        self.selection_transform
    }

    pub fn graph_slot(&self) -> DrawableSlot {
        self.graph_slot
    }

    pub fn highlight_slot(&self) -> DrawableSlot {
        self.highlight_slot
    }

    /// Label shown when hovering the pathgrid.
    pub fn tool_tip(&self) -> String {
        format!("Pathgrid: {}", self.pathgrid_id)
    }

    pub fn is_selected(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn selected(&self) -> &[NodeIndex] {
        self.selection.nodes()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn pending_offset(&self) -> Vec3 {
        self.pending_offset
    }

    pub fn select_all(&mut self, document: &Document, scene: &mut dyn Scene) {
        match document.resolve_pathgrid(&self.pathgrid_id) {
            Some(pathgrid) => self.selection.select_all(pathgrid.node_count()),
            None => self.drop_selection(scene),
        }
        tracing::trace!(
            pathgrid = %self.pathgrid_id,
            selected = self.selection.len(),
            "select all"
        );
        self.geometry.request_rebuild();
    }

    pub fn toggle_selected(&mut self, node: NodeIndex) {
        let selected = self.selection.toggle(node);
        tracing::trace!(pathgrid = %self.pathgrid_id, node, selected, "toggle selected");
        self.geometry.request_rebuild();
    }

    pub fn invert_selected(&mut self, document: &Document, scene: &mut dyn Scene) {
        match document.resolve_pathgrid(&self.pathgrid_id) {
            Some(pathgrid) => self.selection.invert(pathgrid.node_count()),
            None => self.drop_selection(scene),
        }
        tracing::trace!(
            pathgrid = %self.pathgrid_id,
            selected = self.selection.len(),
            "invert selection"
        );
        self.geometry.request_rebuild();
    }

    /// Empties the selection and removes the highlight drawable right away.
    pub fn clear_selected(&mut self, scene: &mut dyn Scene) {
        self.drop_selection(scene);
        tracing::trace!(pathgrid = %self.pathgrid_id, "clear selection");
        self.geometry.request_rebuild();
    }

    /// Shifts the selection highlight by `offset`. The document is untouched until
    /// [`PathgridInstance::apply_position`] commits the accumulated offset.
    pub fn move_selected(&mut self, scene: &mut dyn Scene, offset: Vec3) {
        self.pending_offset += offset;
        scene.set_position(self.selection_transform, self.pending_offset);
    }

    pub fn setup_connection_indicator(&mut self, node: NodeIndex) {
        self.selection.set_connection_indicator(node);
        self.geometry.request_rebuild();
    }

    /// Cancels an in-progress move or connection preview without touching the document.
    pub fn reset_move(&mut self, scene: &mut dyn Scene) {
        self.pending_offset = Vec3::ZERO;
        scene.set_position(self.selection_transform, Vec3::ZERO);
        if self.selection.clear_connection_indicator() {
            tracing::trace!(pathgrid = %self.pathgrid_id, "connection indicator cleared");
        }
        self.geometry.request_rebuild();
    }

    fn drop_selection(&mut self, scene: &mut dyn Scene) {
        self.selection.clear();
        scene.clear_drawable(self.highlight_slot);
    }
}
