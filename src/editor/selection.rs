// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pathgrid Editor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

use crate::model::NodeIndex;

/// Inline capacity for node lists; larger selections spill to the heap.
pub type NodeList = SmallVec<[NodeIndex; 8]>;

/// Ordered set of selected nodes plus the optional connection indicator.
///
/// Order is insertion order. Toggling keeps the list duplicate free: a present node is removed
/// (stable erase), an absent one appended. Indices are not checked against a live pathgrid here;
/// only [`Selection::select_all`] and [`Selection::invert`] derive them from a node count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    nodes: NodeList,
    connection: Option<NodeIndex>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[NodeIndex] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node: NodeIndex) -> bool {
        self.nodes.contains(&node)
    }

    /// Replaces the selection with `[0, count)` in ascending order.
    pub fn select_all(&mut self, count: NodeIndex) {
        self.nodes.clear();
        self.nodes.extend(0..count);
    }

    /// Adds `node` if absent, removes it if present. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, node: NodeIndex) -> bool {
        match self.nodes.iter().position(|&existing| existing == node) {
            Some(index) => {
                self.nodes.remove(index);
                false
            }
            None => {
                self.nodes.push(node);
                true
            }
        }
    }

    /// Selects every node in `[0, count)` that was not selected, in ascending order.
    pub fn invert(&mut self, count: NodeIndex) {
        let mut was_selected = vec![false; usize::from(count)];
        for &node in &self.nodes {
            if let Some(flag) = was_selected.get_mut(usize::from(node)) {
                *flag = true;
            }
        }
        self.nodes.clear();
        self.nodes.extend((0..count).filter(|&node| !was_selected[usize::from(node)]));
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn connection(&self) -> Option<NodeIndex> {
        self.connection
    }

    /// Marks `node` as the source of a previewed edge. Membership is unchanged.
    pub fn set_connection_indicator(&mut self, node: NodeIndex) {
        self.connection = Some(node);
    }

    /// Drops the connection indicator. Returns whether one was set.
    pub fn clear_connection_indicator(&mut self) -> bool {
        self.connection.take().is_some()
    }

    /// Nodes to highlight, in draw order.
    ///
    /// With a connection indicator the indicator node is moved to (or appended at) the end so it
    /// is drawn last.
    pub fn highlight_nodes(&self) -> NodeList {
        let mut nodes = self.nodes.clone();
        if let Some(connection) = self.connection {
            if let Some(index) = nodes.iter().position(|&node| node == connection) {
                nodes.remove(index);
            }
            nodes.push(connection);
        }
        nodes
    }

    /// Selected nodes sorted from the highest row to the lowest.
    pub fn descending(&self) -> NodeList {
        let mut nodes = self.nodes.clone();
        nodes.sort_unstable_by(|a, b| b.cmp(a));
        nodes
    }
}
