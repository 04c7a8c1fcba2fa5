// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pathgrid Editor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Primitive document edits and their transactional application.
//!
//! Editors never mutate a [`Document`] directly. They append [`Command`]s to a caller-owned
//! [`CommandBatch`]; the batch is later applied as one unit with optimistic concurrency
//! (revision checks), producing a coarse delta of which pathgrids changed.

use std::collections::BTreeSet;
use std::fmt;

use crate::model::{Document, Edge, Pathgrid, PathgridId, Point};

pub mod history;

pub use history::{History, MAX_UNDO_STEPS};

/// Top-level tables addressable by commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableId {
    Pathgrids,
}

/// Columns of the pathgrid table. Points and edges are nested tables; their fields are nested
/// columns under the owning parent column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColumnId {
    PathgridPoints,
    PathgridPosX,
    PathgridPosY,
    PathgridPosZ,
    PathgridEdges,
    PathgridEdge0,
    PathgridEdge1,
}

impl ColumnId {
    /// The nested-table column this field lives under, or `None` for nested-table columns.
    pub fn parent(self) -> Option<ColumnId> {
        match self {
            Self::PathgridPosX | Self::PathgridPosY | Self::PathgridPosZ => {
                Some(Self::PathgridPoints)
            }
            Self::PathgridEdge0 | Self::PathgridEdge1 => Some(Self::PathgridEdges),
            Self::PathgridPoints | Self::PathgridEdges => None,
        }
    }

    pub fn is_nested_table(self) -> bool {
        self.parent().is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Inserts a default-initialised sub-row at `row` in the nested table `column`.
    AppendRow {
        table: TableId,
        record_id: PathgridId,
        row: usize,
        column: ColumnId,
    },
    /// Removes the sub-row at `row`, shifting later rows down by one.
    DeleteRow {
        table: TableId,
        record_id: PathgridId,
        row: usize,
        column: ColumnId,
    },
    /// Sets one scalar field of an existing sub-row.
    SetCell {
        table: TableId,
        record_id: PathgridId,
        parent_column: ColumnId,
        row: usize,
        column: ColumnId,
        value: i32,
    },
}

impl Command {
    pub fn record_id(&self) -> &PathgridId {
        match self {
            Self::AppendRow { record_id, .. }
            | Self::DeleteRow { record_id, .. }
            | Self::SetCell { record_id, .. } => record_id,
        }
    }
}

/// Ordered sequence of commands for one user intent.
///
/// Commands run in insertion order; builders rely on that (row appends precede the cells they
/// set, deletions are emitted in descending row order).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandBatch {
    label: Option<String>,
    commands: Vec<Command>,
}

impl CommandBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            commands: Vec::new(),
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<Command> {
        self.commands
    }
}

impl Extend<Command> for CommandBatch {
    fn extend<I: IntoIterator<Item = Command>>(&mut self, iter: I) {
        self.commands.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CommandBatch {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    pub new_rev: u64,
    pub applied: usize,
    pub delta: Delta,
}

/// Pathgrids touched by an applied batch, sorted by id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Delta {
    pub changed: Vec<PathgridId>,
}

impl Delta {
    pub fn touches(&self, pathgrid_id: &PathgridId) -> bool {
        self.changed.contains(pathgrid_id)
    }
}

/// Applies every command of `batch` to `document` as one unit.
///
/// Either all commands succeed and the document revision is bumped once, or the document is left
/// untouched and the first failure is returned.
pub fn apply_batch(
    document: &mut Document,
    base_rev: u64,
    batch: &CommandBatch,
) -> Result<ApplyResult, ApplyError> {
    let current_rev = document.rev();
    if base_rev != current_rev {
        return Err(ApplyError::Conflict {
            base_rev,
            current_rev,
        });
    }

    if batch.is_empty() {
        return Ok(ApplyResult {
            new_rev: current_rev,
            applied: 0,
            delta: Delta::default(),
        });
    }

    let mut staged = document.clone();
    let mut changed = BTreeSet::new();
    for (index, command) in batch.iter().enumerate() {
        apply_command(&mut staged, command).map_err(|err| {
            tracing::debug!(index, error = %err, "command batch rejected");
            err
        })?;
        changed.insert(command.record_id().clone());
    }

    // Endpoints are checked once the whole batch is staged: an edge row may be appended
    // before the point it refers to.
    for pathgrid_id in &changed {
        if let Some(index) = staged.pathgrids().search_id(pathgrid_id.as_str()) {
            if let Some(record) = staged.pathgrids_mut().record_mut(index) {
                let pathgrid = record.modify();
                check_edge_endpoints(pathgrid).map_err(|err| {
                    tracing::debug!(
                        pathgrid = %pathgrid_id,
                        error = %err,
                        "command batch rejected"
                    );
                    err
                })?;
                pathgrid.recount_connections();
            }
        }
    }

    staged.bump_rev();
    *document = staged;
    let new_rev = document.rev();
    tracing::debug!(
        applied = batch.len(),
        new_rev,
        label = batch.label().unwrap_or(""),
        "command batch applied"
    );

    Ok(ApplyResult {
        new_rev,
        applied: batch.len(),
        delta: Delta {
            changed: changed.into_iter().collect(),
        },
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    Conflict {
        base_rev: u64,
        current_rev: u64,
    },
    RecordNotFound {
        record_id: PathgridId,
    },
    RecordDeleted {
        record_id: PathgridId,
    },
    RowOutOfRange {
        record_id: PathgridId,
        column: ColumnId,
        row: usize,
        len: usize,
    },
    ColumnMismatch {
        parent_column: Option<ColumnId>,
        column: ColumnId,
    },
    ValueOutOfRange {
        column: ColumnId,
        value: i32,
    },
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conflict {
                base_rev,
                current_rev,
            } => write!(
                f,
                "stale base_rev (base_rev={base_rev}, current_rev={current_rev})"
            ),
            Self::RecordNotFound { record_id } => write!(f, "pathgrid not found (id={record_id})"),
            Self::RecordDeleted { record_id } => {
                write!(f, "pathgrid is deleted (id={record_id})")
            }
            Self::RowOutOfRange {
                record_id,
                column,
                row,
                len,
            } => write!(
                f,
                "row {row} out of range for {column:?} of {record_id} (len={len})"
            ),
            Self::ColumnMismatch {
                parent_column,
                column,
            } => write!(
                f,
                "column {column:?} is not addressable under {parent_column:?}"
            ),
            Self::ValueOutOfRange { column, value } => {
                write!(f, "value {value} out of range for {column:?}")
            }
        }
    }
}

impl std::error::Error for ApplyError {}

// Per-command application helpers used by `apply_batch`.
include!("ops_impl.rs");
