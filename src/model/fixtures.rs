// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pathgrid Editor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Small hand-built documents used by the demo CLI, tests and benches.

use super::cell::{Cell, CellCoordinates};
use super::document::{Document, RecordState};
use super::ids::{CellId, PathgridId};
use super::pathgrid::{Edge, Pathgrid, Point};

fn cell_id(value: &str) -> CellId {
    CellId::new(value).expect("fixture cell id")
}

fn pathgrid_id(value: &str) -> PathgridId {
    PathgridId::new(value).expect("fixture pathgrid id")
}

/// Exterior cell `#0 0` with two unconnected points.
pub fn two_point_exterior() -> Document {
    let mut document = Document::new();
    document.cells_mut().insert(
        Cell::exterior(cell_id("#0 0"), CellCoordinates::new(0, 0)),
        RecordState::BaseOnly,
    );

    let mut pathgrid = Pathgrid::new(pathgrid_id("#0 0"));
    pathgrid
        .points_mut()
        .extend([Point::new(0, 0, 0), Point::new(10, 10, 10)]);
    document
        .pathgrids_mut()
        .insert(pathgrid, RecordState::BaseOnly);
    document
}

/// Interior cell `Balmora, Guild of Mages` with a square of points linked around the rim.
pub fn interior_square() -> Document {
    let mut document = Document::new();
    let id = "Balmora, Guild of Mages";
    document
        .cells_mut()
        .insert(Cell::interior(cell_id(id)), RecordState::BaseOnly);

    let mut pathgrid = Pathgrid::new(pathgrid_id(id));
    pathgrid.points_mut().extend([
        Point::new(-256, -256, 0),
        Point::new(256, -256, 0),
        Point::new(256, 256, 0),
        Point::new(-256, 256, 0),
    ]);
    for (from, to) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
        pathgrid.edges_mut().push(Edge::new(from, to));
        pathgrid.edges_mut().push(Edge::new(to, from));
    }
    pathgrid.recount_connections();
    document
        .pathgrids_mut()
        .insert(pathgrid, RecordState::BaseOnly);
    document
}

/// A document with both fixtures plus a soft-deleted exterior pathgrid at `#1 0`.
pub fn demo_document() -> Document {
    let mut document = two_point_exterior();
    let interior = interior_square();
    for record in interior.cells().records() {
        document
            .cells_mut()
            .insert(record.get().clone(), record.state());
    }
    for record in interior.pathgrids().records() {
        document
            .pathgrids_mut()
            .insert(record.get().clone(), record.state());
    }

    document.cells_mut().insert(
        Cell::exterior(cell_id("#1 0"), CellCoordinates::new(1, 0)),
        RecordState::BaseOnly,
    );
    let mut removed = Pathgrid::new(pathgrid_id("#1 0"));
    removed.points_mut().push(Point::new(4096, 4096, 0));
    document
        .pathgrids_mut()
        .insert(removed, RecordState::Deleted);
    document
}

/// Exterior pathgrid with `count` points laid out on a line and no edges.
pub fn exterior_line(count: usize) -> Document {
    let mut document = Document::new();
    document.cells_mut().insert(
        Cell::exterior(cell_id("#0 0"), CellCoordinates::new(0, 0)),
        RecordState::BaseOnly,
    );
    let mut pathgrid = Pathgrid::new(pathgrid_id("#0 0"));
    for index in 0..count {
        let x = (index as i32).saturating_mul(8) % 8192;
        pathgrid.points_mut().push(Point::new(x, 0, 0));
    }
    document
        .pathgrids_mut()
        .insert(pathgrid, RecordState::BaseOnly);
    document
}
