// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pathgrid Editor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Document model for pathgrid editing.
//!
//! A [`Document`] holds cell and pathgrid records. Pathgrid points and edges are nested rows:
//! their position in the owning vector is the index every other layer uses to address them.

pub mod cell;
pub mod document;
pub mod fixtures;
pub mod ids;
pub mod pathgrid;

pub use cell::{Cell, CellCoordinates, Vec3, CELL_EXTENT};
pub use document::{Collection, Document, Keyed, Record, RecordState};
pub use ids::{CellId, Id, IdError, PathgridId};
pub use pathgrid::{Edge, NodeIndex, Pathgrid, Point};
