// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pathgrid Editor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{NodeIndex, Pathgrid, Point};

use super::{Rgba, Wireframe, WireframeStyle};

/// Vertices emitted per point marker: the centre followed by one arm end per axis direction.
pub const MARKER_VERTICES: usize = 7;

/// Scale applied to `marker_size` for selection markers so they enclose the node marker.
const SELECTED_MARKER_SCALE: f32 = 1.5;

/// Builds the wireframe of a whole pathgrid: one marker per point plus one line per edge.
///
/// Edges whose endpoints do not name an existing point are skipped.
pub fn build_graph_wireframe(pathgrid: &Pathgrid, style: &WireframeStyle) -> Wireframe {
    let mut wireframe = Wireframe::default();
    let mut centres = Vec::with_capacity(pathgrid.points().len());
    for point in pathgrid.points() {
        centres.push(push_marker(
            &mut wireframe,
            point,
            style.marker_size,
            style.node_colour,
        ));
    }

    for edge in pathgrid.edges() {
        let from = usize::try_from(edge.from).ok().and_then(|i| centres.get(i));
        let to = usize::try_from(edge.to).ok().and_then(|i| centres.get(i));
        let (Some(&from), Some(&to)) = (from, to) else {
            continue;
        };
        let from_pos = wireframe.vertices[from as usize];
        let to_pos = wireframe.vertices[to as usize];
        let a = wireframe.push_vertex(from_pos, style.edge_colour);
        let b = wireframe.push_vertex(to_pos, style.edge_colour);
        wireframe.lines.push([a, b]);
    }

    wireframe
}

/// Builds selection markers for `nodes`, in list order.
///
/// With `connection` set, the last listed node is drawn in the connection colour; it marks the
/// source of the edge being previewed. Nodes outside the pathgrid are skipped.
pub fn build_highlight_wireframe(
    pathgrid: &Pathgrid,
    nodes: &[NodeIndex],
    connection: bool,
    style: &WireframeStyle,
) -> Wireframe {
    let mut wireframe = Wireframe::default();
    let size = style.marker_size * SELECTED_MARKER_SCALE;
    let last = nodes.len().checked_sub(1);

    for (position, &node) in nodes.iter().enumerate() {
        let Some(point) = pathgrid.point(node) else {
            continue;
        };
        let colour = if connection && Some(position) == last {
            style.connection_colour
        } else {
            style.selected_colour
        };
        push_marker(&mut wireframe, point, size, colour);
    }

    wireframe
}

fn push_marker(wireframe: &mut Wireframe, point: &Point, size: f32, colour: Rgba) -> u32 {
    let [x, y, z] = [point.x as f32, point.y as f32, point.z as f32];
    let centre = wireframe.push_vertex([x, y, z], colour);
    let arms = [
        [x + size, y, z],
        [x - size, y, z],
        [x, y + size, z],
        [x, y - size, z],
        [x, y, z + size],
        [x, y, z - size],
    ];
    let first = centre + 1;
    for arm in arms {
        wireframe.push_vertex(arm, colour);
    }
    for axis in 0..3 {
        wireframe.lines.push([first + axis * 2, first + axis * 2 + 1]);
    }
    centre
}

#[cfg(test)]
mod tests {
    use super::{build_graph_wireframe, build_highlight_wireframe, MARKER_VERTICES};
    use crate::model::{Edge, Pathgrid, PathgridId, Point};
    use crate::render::WireframeStyle;

    fn pathgrid() -> Pathgrid {
        let mut pathgrid = Pathgrid::new(PathgridId::new("#0 0").expect("pathgrid id"));
        pathgrid
            .points_mut()
            .extend([Point::new(0, 0, 0), Point::new(10, 10, 10)]);
        pathgrid
            .edges_mut()
            .extend([Edge::new(0, 1), Edge::new(1, 0), Edge::new(1, 5)]);
        pathgrid
    }

    #[test]
    fn graph_wireframe_has_markers_and_valid_edges() {
        let style = WireframeStyle::default();
        let wireframe = build_graph_wireframe(&pathgrid(), &style);

        // Two markers plus two resolvable edges (the dangling 1 -> 5 edge is skipped).
        assert_eq!(wireframe.vertex_count(), 2 * MARKER_VERTICES + 4);
        assert_eq!(wireframe.line_count(), 2 * 3 + 2);
        assert_eq!(wireframe.colours.len(), wireframe.vertex_count());
        let last = wireframe.lines.last().expect("edge line");
        assert_eq!(wireframe.vertices[last[0] as usize], [10.0, 10.0, 10.0]);
        assert_eq!(wireframe.vertices[last[1] as usize], [0.0, 0.0, 0.0]);
    }

    #[test]
    fn highlight_marks_last_node_when_connecting() {
        let style = WireframeStyle::default();
        let wireframe = build_highlight_wireframe(&pathgrid(), &[1, 0], true, &style);

        assert_eq!(wireframe.vertex_count(), 2 * MARKER_VERTICES);
        assert_eq!(wireframe.colours[0], style.selected_colour);
        assert_eq!(wireframe.colours[MARKER_VERTICES], style.connection_colour);
        assert_eq!(wireframe.vertices[MARKER_VERTICES], [0.0, 0.0, 0.0]);
    }

    #[test]
    fn highlight_skips_out_of_range_nodes() {
        let style = WireframeStyle::default();
        let wireframe = build_highlight_wireframe(&pathgrid(), &[4, 1], false, &style);

        assert_eq!(wireframe.vertex_count(), MARKER_VERTICES);
        assert!(wireframe
            .colours
            .iter()
            .all(|colour| *colour == style.selected_colour));
    }
}
