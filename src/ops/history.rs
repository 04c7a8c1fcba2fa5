// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pathgrid Editor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Snapshot-based undo/redo over committed command batches.

use crate::model::Document;

use super::{apply_batch, ApplyError, ApplyResult, CommandBatch};

/// Undo steps kept before the oldest snapshot is dropped.
pub const MAX_UNDO_STEPS: usize = 128;

#[derive(Debug, Clone)]
struct Snapshot {
    label: Option<String>,
    document: Document,
}

/// Commits batches against a document and records enough state to undo and redo them.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `batch` at the document's current revision.
    ///
    /// Empty batches apply trivially and leave both stacks alone. A successful non-empty commit
    /// clears the redo stack.
    pub fn commit(
        &mut self,
        document: &mut Document,
        batch: &CommandBatch,
    ) -> Result<ApplyResult, ApplyError> {
        let before = (!batch.is_empty()).then(|| document.clone());
        let base_rev = document.rev();
        let result = apply_batch(document, base_rev, batch)?;

        if let Some(before) = before {
            self.undo_stack.push(Snapshot {
                label: batch.label().map(ToOwned::to_owned),
                document: before,
            });
            self.redo_stack.clear();
            if self.undo_stack.len() > MAX_UNDO_STEPS {
                let excess = self.undo_stack.len() - MAX_UNDO_STEPS;
                self.undo_stack.drain(0..excess);
            }
        }
        Ok(result)
    }

    /// Restores the state before the last commit. Returns false when there is nothing to undo.
    pub fn undo(&mut self, document: &mut Document) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };
        let label = previous.label.clone();
        let current = restore(document, previous.document);
        self.redo_stack.push(Snapshot {
            label,
            document: current,
        });
        tracing::debug!(rev = document.rev(), "undo");
        true
    }

    /// Re-applies the last undone commit. Returns false when there is nothing to redo.
    pub fn redo(&mut self, document: &mut Document) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        let label = next.label.clone();
        let current = restore(document, next.document);
        self.undo_stack.push(Snapshot {
            label,
            document: current,
        });
        tracing::debug!(rev = document.rev(), "redo");
        true
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn undo_label(&self) -> Option<&str> {
        self.undo_stack.last().and_then(|s| s.label.as_deref())
    }

    pub fn redo_label(&self) -> Option<&str> {
        self.redo_stack.last().and_then(|s| s.label.as_deref())
    }
}

/// Swaps `snapshot` into `document` and returns the replaced state.
///
/// The revision keeps moving forward so views re-resolve after an undo or redo.
fn restore(document: &mut Document, snapshot: Document) -> Document {
    let rev = document.rev();
    let replaced = std::mem::replace(document, snapshot);
    document.set_rev(rev.saturating_add(1));
    replaced
}
