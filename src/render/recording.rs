// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pathgrid Editor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use crate::model::Vec3;

use super::{DrawableSlot, Scene, TransformHandle, Wireframe};

#[derive(Debug, Clone, Default)]
struct TransformNode {
    position: Vec3,
    parent: Option<TransformHandle>,
    children: Vec<TransformHandle>,
}

#[derive(Debug, Clone)]
struct SlotNode {
    parent: TransformHandle,
    drawable: Option<Wireframe>,
}

/// A [`Scene`] that keeps everything in memory and counts drawable churn.
#[derive(Debug, Clone)]
pub struct RecordingScene {
    root: TransformHandle,
    next_id: u32,
    transforms: BTreeMap<TransformHandle, TransformNode>,
    slots: BTreeMap<DrawableSlot, SlotNode>,
    drawable_sets: usize,
    drawable_clears: usize,
}

impl Default for RecordingScene {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingScene {
    pub fn new() -> Self {
        let root = TransformHandle(0);
        let mut transforms = BTreeMap::new();
        transforms.insert(root, TransformNode::default());
        Self {
            root,
            next_id: 1,
            transforms,
            slots: BTreeMap::new(),
            drawable_sets: 0,
            drawable_clears: 0,
        }
    }

    pub fn root(&self) -> TransformHandle {
        self.root
    }

    pub fn position(&self, transform: TransformHandle) -> Option<Vec3> {
        self.transforms.get(&transform).map(|node| node.position)
    }

    pub fn parent(&self, transform: TransformHandle) -> Option<TransformHandle> {
        self.transforms.get(&transform).and_then(|node| node.parent)
    }

    pub fn children(&self, transform: TransformHandle) -> &[TransformHandle] {
        self.transforms
            .get(&transform)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `transform` hangs (transitively) under the root.
    pub fn is_attached(&self, transform: TransformHandle) -> bool {
        let mut current = transform;
        loop {
            if current == self.root {
                return true;
            }
            match self.parent(current) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// World position of a transform, summing positions up to the root.
    pub fn world_position(&self, transform: TransformHandle) -> Option<Vec3> {
        let mut position = self.position(transform)?;
        let mut current = self.parent(transform);
        while let Some(parent) = current {
            position += self.position(parent)?;
            current = self.parent(parent);
        }
        Some(position)
    }

    pub fn drawable(&self, slot: DrawableSlot) -> Option<&Wireframe> {
        self.slots.get(&slot).and_then(|node| node.drawable.as_ref())
    }

    pub fn slot_parent(&self, slot: DrawableSlot) -> Option<TransformHandle> {
        self.slots.get(&slot).map(|node| node.parent)
    }

    /// Number of `set_drawable` calls so far.
    pub fn drawable_sets(&self) -> usize {
        self.drawable_sets
    }

    /// Number of `clear_drawable` calls that actually removed a payload.
    pub fn drawable_clears(&self) -> usize {
        self.drawable_clears
    }

    fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }
}

impl Scene for RecordingScene {
    fn create_transform(&mut self, position: Vec3) -> TransformHandle {
        let handle = TransformHandle(self.next_id());
        self.transforms.insert(
            handle,
            TransformNode {
                position,
                ..TransformNode::default()
            },
        );
        handle
    }

    fn attach_child(&mut self, parent: TransformHandle, child: TransformHandle) {
        if !self.transforms.contains_key(&parent) || !self.transforms.contains_key(&child) {
            tracing::warn!(%parent, %child, "attach_child with unknown transform");
            return;
        }
        if let Some(old_parent) = self.parent(child) {
            self.remove_child(old_parent, child);
        }
        if let Some(node) = self.transforms.get_mut(&parent) {
            node.children.push(child);
        }
        if let Some(node) = self.transforms.get_mut(&child) {
            node.parent = Some(parent);
        }
    }

    fn remove_child(&mut self, parent: TransformHandle, child: TransformHandle) {
        if let Some(node) = self.transforms.get_mut(&parent) {
            node.children.retain(|existing| *existing != child);
        }
        if let Some(node) = self.transforms.get_mut(&child) {
            if node.parent == Some(parent) {
                node.parent = None;
            }
        }
    }

    fn set_position(&mut self, transform: TransformHandle, position: Vec3) {
        if let Some(node) = self.transforms.get_mut(&transform) {
            node.position = position;
        }
    }

    fn create_slot(&mut self, parent: TransformHandle) -> DrawableSlot {
        let slot = DrawableSlot(self.next_id());
        self.slots.insert(
            slot,
            SlotNode {
                parent,
                drawable: None,
            },
        );
        slot
    }

    fn set_drawable(&mut self, slot: DrawableSlot, payload: Wireframe) {
        let Some(node) = self.slots.get_mut(&slot) else {
            tracing::warn!(%slot, "set_drawable on unknown slot");
            return;
        };
        node.drawable = Some(payload);
        self.drawable_sets += 1;
    }

    fn clear_drawable(&mut self, slot: DrawableSlot) {
        if let Some(node) = self.slots.get_mut(&slot) {
            if node.drawable.take().is_some() {
                self.drawable_clears += 1;
            }
        }
    }
}
