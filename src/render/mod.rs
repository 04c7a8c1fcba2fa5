// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pathgrid Editor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Scene seam and wireframe geometry for pathgrid views.
//!
//! The editor never talks to a real renderer. It builds [`Wireframe`] payloads and hands them
//! to a [`Scene`], which owns transforms and drawable slots. [`RecordingScene`] is the in-memory
//! implementation used by the CLI and tests.

use std::fmt;

use crate::model::Vec3;

pub mod recording;
pub mod wireframe;

pub use recording::RecordingScene;
pub use wireframe::{build_graph_wireframe, build_highlight_wireframe, MARKER_VERTICES};

/// Opaque handle to a positioned transform node owned by a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransformHandle(pub u32);

/// Opaque handle to a drawable slot attached under a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DrawableSlot(pub u32);

impl fmt::Display for TransformHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transform#{}", self.0)
    }
}

impl fmt::Display for DrawableSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot#{}", self.0)
    }
}

/// The rendering operations a pathgrid view consumes.
pub trait Scene {
    fn create_transform(&mut self, position: Vec3) -> TransformHandle;

    fn attach_child(&mut self, parent: TransformHandle, child: TransformHandle);

    fn remove_child(&mut self, parent: TransformHandle, child: TransformHandle);

    fn set_position(&mut self, transform: TransformHandle, position: Vec3);

    fn create_slot(&mut self, parent: TransformHandle) -> DrawableSlot;

    /// Replaces whatever the slot currently draws.
    fn set_drawable(&mut self, slot: DrawableSlot, payload: Wireframe);

    fn clear_drawable(&mut self, slot: DrawableSlot);
}

pub type Rgba = [f32; 4];

/// Sizes and colours used when building wireframes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireframeStyle {
    /// Half-length of each marker arm in world units.
    pub marker_size: f32,
    pub node_colour: Rgba,
    pub edge_colour: Rgba,
    pub selected_colour: Rgba,
    pub connection_colour: Rgba,
}

impl Default for WireframeStyle {
    fn default() -> Self {
        Self {
            marker_size: 10.0,
            node_colour: [1.0, 0.0, 0.0, 1.0],
            edge_colour: [1.0, 0.7, 0.0, 1.0],
            selected_colour: [1.0, 1.0, 1.0, 1.0],
            connection_colour: [0.2, 0.6, 1.0, 1.0],
        }
    }
}

/// Line-list geometry: every entry of `lines` indexes two entries of `vertices`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Wireframe {
    pub vertices: Vec<[f32; 3]>,
    pub colours: Vec<Rgba>,
    pub lines: Vec<[u32; 2]>,
}

impl Wireframe {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub(crate) fn push_vertex(&mut self, position: [f32; 3], colour: Rgba) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.colours.push(colour);
        index
    }
}
