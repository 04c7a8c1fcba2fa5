// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pathgrid Editor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Bounds applied to point coordinates written by the editor.
///
/// Exterior cells have a fixed extent and every axis is clamped to `[0, extent]` in cell-local
/// units. Interior cells are unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClampPolicy {
    Unbounded,
    Cell { extent: i32 },
}

impl ClampPolicy {
    pub fn for_cell(interior: bool, extent: i32) -> Self {
        if interior {
            Self::Unbounded
        } else {
            Self::Cell { extent }
        }
    }

    pub fn clamp(self, value: i32) -> i32 {
        match self {
            Self::Unbounded => value,
            Self::Cell { extent } => value.clamp(0, extent.max(0)),
        }
    }

    /// Truncates a world-unit coordinate toward zero and clamps it.
    pub fn clamp_f64(self, value: f64) -> i32 {
        self.clamp(to_document_unit(value))
    }
}

/// Converts a floating coordinate to the document's integer unit (truncation toward zero,
/// saturating at the `i32` range).
pub fn to_document_unit(value: f64) -> i32 {
    value as i32
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{to_document_unit, ClampPolicy};
    use crate::model::CELL_EXTENT;

    #[rstest]
    #[case::interior_negative(true, -50, -50)]
    #[case::interior_beyond_extent(true, 9000, 9000)]
    #[case::exterior_negative(false, -50, 0)]
    #[case::exterior_beyond_extent(false, 9000, 8192)]
    #[case::exterior_inside(false, 4096, 4096)]
    #[case::exterior_on_edge(false, 8192, 8192)]
    fn clamps_per_cell_kind(#[case] interior: bool, #[case] value: i32, #[case] expected: i32) {
        let policy = ClampPolicy::for_cell(interior, CELL_EXTENT);
        assert_eq!(policy.clamp(value), expected);
    }

    #[test]
    fn float_coordinates_truncate_before_clamping() {
        let policy = ClampPolicy::for_cell(false, CELL_EXTENT);
        assert_eq!(to_document_unit(12.9), 12);
        assert_eq!(to_document_unit(-0.9), 0);
        assert_eq!(policy.clamp_f64(-3.2), 0);
        assert_eq!(policy.clamp_f64(8192.7), 8192);
        assert_eq!(ClampPolicy::Unbounded.clamp_f64(-3.2), -3);
    }
}
