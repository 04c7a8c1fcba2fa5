// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pathgrid Editor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use super::ids::CellId;

/// Side length of one exterior cell in world units.
pub const CELL_EXTENT: i32 = 8192;

/// A world-space position or offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Grid coordinates of an exterior cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CellCoordinates {
    x: i32,
    y: i32,
}

impl CellCoordinates {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// World position of the cell's south-west corner for the given cell extent.
    pub fn origin(&self, extent: i32) -> Vec3 {
        let extent = f64::from(extent);
        Vec3::new(f64::from(self.x) * extent, f64::from(self.y) * extent, 0.0)
    }
}

impl fmt::Display for CellCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    cell_id: CellId,
    coordinates: CellCoordinates,
    interior: bool,
}

impl Cell {
    pub fn exterior(cell_id: CellId, coordinates: CellCoordinates) -> Self {
        Self {
            cell_id,
            coordinates,
            interior: false,
        }
    }

    pub fn interior(cell_id: CellId) -> Self {
        Self {
            cell_id,
            coordinates: CellCoordinates::default(),
            interior: true,
        }
    }

    pub fn cell_id(&self) -> &CellId {
        &self.cell_id
    }

    pub fn coordinates(&self) -> CellCoordinates {
        self.coordinates
    }

    pub fn is_interior(&self) -> bool {
        self.interior
    }

    pub fn set_interior(&mut self, interior: bool) {
        self.interior = interior;
    }
}
