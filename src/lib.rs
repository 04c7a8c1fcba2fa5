// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pathgrid Editor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pathgrid Editor: editing core for navigation graphs stored in cell records.
//!
//! The crate is split the same way an editor frontend consumes it: [`model`] holds the document,
//! [`ops`] applies undoable command batches, [`editor`] turns user intents into batches and keeps
//! per-pathgrid wireframes in sync through the [`render::Scene`] seam, and [`workspace`] ties them
//! together.

pub mod config;
pub mod editor;
pub mod model;
pub mod ops;
pub mod render;
pub mod store;
pub mod workspace;
