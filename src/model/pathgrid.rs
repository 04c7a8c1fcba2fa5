// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pathgrid Editor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::PathgridId;

/// Row position of a point inside its pathgrid.
///
/// Indices are positional, not stable: deleting a point row shifts every following index down
/// by one.
pub type NodeIndex = u16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub auto_generated: bool,
    connection_count: u16,
}

impl Point {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self {
            x,
            y,
            z,
            auto_generated: false,
            connection_count: 0,
        }
    }

    /// Number of edge rows that start at this point, kept current by the document layer.
    pub fn connection_count(&self) -> u16 {
        self.connection_count
    }
}

/// A directed connection between two point rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edge {
    pub from: i32,
    pub to: i32,
}

impl Edge {
    pub const fn new(from: i32, to: i32) -> Self {
        Self { from, to }
    }

    pub fn connects(&self, from: NodeIndex, to: NodeIndex) -> bool {
        self.from == i32::from(from) && self.to == i32::from(to)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pathgrid {
    pathgrid_id: PathgridId,
    points: Vec<Point>,
    edges: Vec<Edge>,
}

impl Pathgrid {
    pub fn new(pathgrid_id: PathgridId) -> Self {
        Self {
            pathgrid_id,
            points: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn pathgrid_id(&self) -> &PathgridId {
        &self.pathgrid_id
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut Vec<Point> {
        &mut self.points
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut Vec<Edge> {
        &mut self.edges
    }

    pub fn point(&self, node: NodeIndex) -> Option<&Point> {
        self.points.get(usize::from(node))
    }

    /// Number of addressable nodes. Rows past `NodeIndex::MAX` cannot be selected.
    pub fn node_count(&self) -> NodeIndex {
        NodeIndex::try_from(self.points.len()).unwrap_or(NodeIndex::MAX)
    }

    /// Row of the first edge running `from -> to`, found by linear scan.
    pub fn edge_row(&self, from: NodeIndex, to: NodeIndex) -> Option<usize> {
        self.edges.iter().position(|edge| edge.connects(from, to))
    }

    /// Removes a point row, drops every edge touching it and shifts later endpoints down.
    pub fn remove_point(&mut self, row: usize) -> Option<Point> {
        if row >= self.points.len() {
            return None;
        }
        let removed = self.points.remove(row);
        let row = row as i32;
        self.edges.retain(|edge| edge.from != row && edge.to != row);
        for edge in &mut self.edges {
            if edge.from > row {
                edge.from -= 1;
            }
            if edge.to > row {
                edge.to -= 1;
            }
        }
        Some(removed)
    }

    pub fn recount_connections(&mut self) {
        for point in &mut self.points {
            point.connection_count = 0;
        }
        for edge in &self.edges {
            let Ok(from) = usize::try_from(edge.from) else {
                continue;
            };
            if let Some(point) = self.points.get_mut(from) {
                point.connection_count = point.connection_count.saturating_add(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Edge, Pathgrid, Point};
    use crate::model::PathgridId;

    fn triangle() -> Pathgrid {
        let mut pathgrid = Pathgrid::new(PathgridId::new("Balmora").expect("pathgrid id"));
        pathgrid.points_mut().extend([
            Point::new(0, 0, 0),
            Point::new(100, 0, 0),
            Point::new(0, 100, 0),
        ]);
        pathgrid
            .edges_mut()
            .extend([Edge::new(0, 1), Edge::new(1, 0), Edge::new(1, 2), Edge::new(2, 1)]);
        pathgrid
    }

    #[test]
    fn edge_row_returns_first_match() {
        let mut pathgrid = triangle();
        pathgrid.edges_mut().push(Edge::new(0, 1));
        assert_eq!(pathgrid.edge_row(0, 1), Some(0));
        assert_eq!(pathgrid.edge_row(2, 1), Some(3));
        assert_eq!(pathgrid.edge_row(0, 2), None);
    }

    #[test]
    fn remove_point_drops_touching_edges_and_shifts_indices() {
        let mut pathgrid = triangle();
        pathgrid.remove_point(0).expect("removed");

        assert_eq!(pathgrid.points().len(), 2);
        assert_eq!(pathgrid.edges(), &[Edge::new(0, 1), Edge::new(1, 0)]);
    }

    #[test]
    fn remove_point_out_of_range_is_none() {
        let mut pathgrid = triangle();
        assert_eq!(pathgrid.remove_point(3), None);
        assert_eq!(pathgrid.points().len(), 3);
    }

    #[test]
    fn recount_connections_counts_outgoing_edges() {
        let mut pathgrid = triangle();
        pathgrid.recount_connections();
        let counts = pathgrid
            .points()
            .iter()
            .map(Point::connection_count)
            .collect::<Vec<_>>();
        assert_eq!(counts, vec![1, 2, 1]);
    }
}
