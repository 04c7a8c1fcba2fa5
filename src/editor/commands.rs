// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pathgrid Editor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Translation of editing intents into document commands.
//!
//! Builders append to a caller-owned [`CommandBatch`] and never touch the document. Each one
//! resolves the pathgrid first and emits nothing when it is missing or deleted.

use std::collections::BTreeSet;

use smallvec::SmallVec;

use crate::model::{Document, NodeIndex, Pathgrid, Vec3};
use crate::ops::{ColumnId, Command, CommandBatch, TableId};
use crate::render::Scene;

use super::clamp::to_document_unit;
use super::pathgrid::PathgridInstance;

/// Edge rows appended so far while building one intent.
///
/// Later appends in the same batch land after earlier ones, and a pair queued earlier counts as
/// existing for the rest of the intent.
struct EdgeCursor {
    next_row: usize,
    queued: SmallVec<[(NodeIndex, NodeIndex); 8]>,
}

impl EdgeCursor {
    fn new(pathgrid: &Pathgrid) -> Self {
        Self {
            next_row: pathgrid.edges().len(),
            queued: SmallVec::new(),
        }
    }

    fn exists(&self, pathgrid: &Pathgrid, from: NodeIndex, to: NodeIndex) -> bool {
        pathgrid.edge_row(from, to).is_some() || self.queued.contains(&(from, to))
    }
}

impl PathgridInstance {
    /// Adds a point at `world_position`, converted to cell-local integer coordinates and clamped.
    ///
    /// Emits an append on the points table followed by the X, Y and Z cells of the new row.
    pub fn apply_point(
        &self,
        document: &Document,
        batch: &mut CommandBatch,
        world_position: Vec3,
    ) -> usize {
        let Some(pathgrid) = document.resolve_pathgrid(&self.pathgrid_id) else {
            return 0;
        };

        let local = world_position - self.base_position;
        let row = pathgrid.points().len();
        let before = batch.len();

        batch.push(self.append_row(row, ColumnId::PathgridPoints));
        for (column, value) in [
            (ColumnId::PathgridPosX, local.x),
            (ColumnId::PathgridPosY, local.y),
            (ColumnId::PathgridPosZ, local.z),
        ] {
            let value = self.clamp.clamp_f64(value);
            batch.push(self.set_cell(ColumnId::PathgridPoints, row, column, value));
        }

        self.emitted(batch, before, "apply_point")
    }

    /// Commits the pending move: every selected point gets its offset coordinates written back,
    /// in selection order. The visual offset is reset afterwards.
    pub fn apply_position(
        &mut self,
        document: &Document,
        scene: &mut dyn Scene,
        batch: &mut CommandBatch,
    ) -> usize {
        let Some(pathgrid) = document.resolve_pathgrid(&self.pathgrid_id) else {
            return 0;
        };

        let offset = [
            to_document_unit(self.pending_offset.x),
            to_document_unit(self.pending_offset.y),
            to_document_unit(self.pending_offset.z),
        ];
        let before = batch.len();

        for &node in self.selection.nodes() {
            let Some(point) = pathgrid.point(node) else {
                continue;
            };
            let row = usize::from(node);
            for (column, value, delta) in [
                (ColumnId::PathgridPosX, point.x, offset[0]),
                (ColumnId::PathgridPosY, point.y, offset[1]),
                (ColumnId::PathgridPosZ, point.z, offset[2]),
            ] {
                let value = self.clamp.clamp(value.saturating_add(delta));
                batch.push(self.set_cell(ColumnId::PathgridPoints, row, column, value));
            }
        }

        let emitted = self.emitted(batch, before, "apply_position");
        self.reset_move(scene);
        emitted
    }

    /// Connects `node1` and `node2` in both directions, skipping directions that already exist.
    pub fn apply_edge(
        &self,
        document: &Document,
        batch: &mut CommandBatch,
        node1: NodeIndex,
        node2: NodeIndex,
    ) -> usize {
        let Some(pathgrid) = document.resolve_pathgrid(&self.pathgrid_id) else {
            return 0;
        };

        let before = batch.len();
        let mut cursor = EdgeCursor::new(pathgrid);
        self.add_edge(pathgrid, &mut cursor, batch, node1, node2);
        self.emitted(batch, before, "apply_edge")
    }

    /// Connects `node` with every selected node.
    pub fn apply_edges(
        &self,
        document: &Document,
        batch: &mut CommandBatch,
        node: NodeIndex,
    ) -> usize {
        let Some(pathgrid) = document.resolve_pathgrid(&self.pathgrid_id) else {
            return 0;
        };

        let before = batch.len();
        let mut cursor = EdgeCursor::new(pathgrid);
        for &selected in self.selection.nodes() {
            self.add_edge(pathgrid, &mut cursor, batch, node, selected);
        }
        self.emitted(batch, before, "apply_edges")
    }

    /// Deletes every selected point, highest row first, then clears the selection.
    pub fn apply_remove_nodes(
        &mut self,
        document: &Document,
        scene: &mut dyn Scene,
        batch: &mut CommandBatch,
    ) -> usize {
        let before = batch.len();
        if let Some(pathgrid) = document.resolve_pathgrid(&self.pathgrid_id) {
            let count = pathgrid.points().len();
            for node in self.selection.descending() {
                let row = usize::from(node);
                if row >= count {
                    continue;
                }
                batch.push(self.delete_row(row, ColumnId::PathgridPoints));
            }
        }

        let emitted = self.emitted(batch, before, "apply_remove_nodes");
        self.clear_selected(scene);
        emitted
    }

    /// Deletes every edge (either direction) between two selected points, highest row first.
    /// The selection is kept.
    pub fn apply_remove_edges(&self, document: &Document, batch: &mut CommandBatch) -> usize {
        let Some(pathgrid) = document.resolve_pathgrid(&self.pathgrid_id) else {
            return 0;
        };

        let selected = self.selection.nodes();
        let mut rows = BTreeSet::new();
        for (i, &first) in selected.iter().enumerate() {
            for &second in &selected[i + 1..] {
                rows.extend(pathgrid.edge_row(first, second));
                rows.extend(pathgrid.edge_row(second, first));
            }
        }

        let before = batch.len();
        for &row in rows.iter().rev() {
            batch.push(self.delete_row(row, ColumnId::PathgridEdges));
        }
        self.emitted(batch, before, "apply_remove_edges")
    }

    /// Queues both directions of `node1`-`node2`. Self edges and nodes past the point count are
    /// skipped.
    fn add_edge(
        &self,
        pathgrid: &Pathgrid,
        cursor: &mut EdgeCursor,
        batch: &mut CommandBatch,
        node1: NodeIndex,
        node2: NodeIndex,
    ) {
        if node1 == node2 {
            tracing::trace!(pathgrid = %self.pathgrid_id, node = node1, "self edge skipped");
            return;
        }
        let count = pathgrid.node_count();
        if node1 >= count || node2 >= count {
            tracing::trace!(
                pathgrid = %self.pathgrid_id,
                node1,
                node2,
                "edge to missing node skipped"
            );
            return;
        }

        for (from, to) in [(node1, node2), (node2, node1)] {
            if cursor.exists(pathgrid, from, to) {
                continue;
            }
            let row = cursor.next_row;
            batch.push(self.append_row(row, ColumnId::PathgridEdges));
            batch.push(self.set_cell(
                ColumnId::PathgridEdges,
                row,
                ColumnId::PathgridEdge0,
                i32::from(from),
            ));
            batch.push(self.set_cell(
                ColumnId::PathgridEdges,
                row,
                ColumnId::PathgridEdge1,
                i32::from(to),
            ));
            cursor.next_row += 1;
            cursor.queued.push((from, to));
        }
    }

    fn append_row(&self, row: usize, column: ColumnId) -> Command {
        Command::AppendRow {
            table: TableId::Pathgrids,
            record_id: self.pathgrid_id.clone(),
            row,
            column,
        }
    }

    fn delete_row(&self, row: usize, column: ColumnId) -> Command {
        Command::DeleteRow {
            table: TableId::Pathgrids,
            record_id: self.pathgrid_id.clone(),
            row,
            column,
        }
    }

    fn set_cell(
        &self,
        parent_column: ColumnId,
        row: usize,
        column: ColumnId,
        value: i32,
    ) -> Command {
        Command::SetCell {
            table: TableId::Pathgrids,
            record_id: self.pathgrid_id.clone(),
            parent_column,
            row,
            column,
            value,
        }
    }

    fn emitted(&self, batch: &CommandBatch, before: usize, intent: &'static str) -> usize {
        let emitted = batch.len() - before;
        tracing::debug!(pathgrid = %self.pathgrid_id, intent, emitted, "commands built");
        emitted
    }
}
