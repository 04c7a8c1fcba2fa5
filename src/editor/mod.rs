// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pathgrid Editor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pathgrid editing core.
//!
//! A [`PathgridInstance`] combines three things for one pathgrid shown in a view:
//! - a purely visual [`Selection`] plus a pending move offset,
//! - builders that turn intents into [`crate::ops::Command`]s,
//! - dirty flags that let [`PathgridInstance::tick`] rebuild geometry lazily.

mod clamp;
mod commands;
mod geometry;
mod pathgrid;
mod selection;

pub use clamp::{to_document_unit, ClampPolicy};
pub use geometry::TickOutcome;
pub use pathgrid::PathgridInstance;
pub use selection::{NodeList, Selection};
