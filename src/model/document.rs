// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pathgrid Editor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::cell::Cell;
use super::ids::{CellId, PathgridId};
use super::pathgrid::Pathgrid;

/// Lifecycle state of a record inside a collection.
///
/// `Deleted` is a soft delete: the record stays in the collection (so undo can restore it) but
/// readers must treat it as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordState {
    #[default]
    BaseOnly,
    Modified,
    Added,
    Deleted,
}

impl RecordState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BaseOnly => "base_only",
            Self::Modified => "modified",
            Self::Added => "added",
            Self::Deleted => "deleted",
        }
    }
}

/// Values stored in a [`Collection`] expose the id they are looked up by.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Cell {
    fn key(&self) -> &str {
        self.cell_id().as_str()
    }
}

impl Keyed for Pathgrid {
    fn key(&self) -> &str {
        self.pathgrid_id().as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<T> {
    value: T,
    state: RecordState,
}

impl<T> Record<T> {
    pub fn new(value: T, state: RecordState) -> Self {
        Self { value, state }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn state(&self) -> RecordState {
        self.state
    }

    pub fn is_deleted(&self) -> bool {
        self.state == RecordState::Deleted
    }

    pub fn set_state(&mut self, state: RecordState) {
        self.state = state;
    }

    /// Mutable access for edits. Base records become `Modified`.
    pub fn modify(&mut self) -> &mut T {
        if self.state == RecordState::BaseOnly {
            self.state = RecordState::Modified;
        }
        &mut self.value
    }
}

/// Ordered record table keyed by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection<T> {
    records: Vec<Record<T>>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Keyed> Collection<T> {
    /// Index of the record with `id`, including soft-deleted records.
    pub fn search_id(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|record| record.get().key() == id)
    }

    pub fn record(&self, index: usize) -> Option<&Record<T>> {
        self.records.get(index)
    }

    pub fn record_mut(&mut self, index: usize) -> Option<&mut Record<T>> {
        self.records.get_mut(index)
    }

    pub fn records(&self) -> &[Record<T>] {
        &self.records
    }

    /// The live (not soft-deleted) value for `id`.
    pub fn live(&self, id: &str) -> Option<&T> {
        let record = self.record(self.search_id(id)?)?;
        (!record.is_deleted()).then(|| record.get())
    }

    /// Inserts or replaces the record with the same id.
    pub fn insert(&mut self, value: T, state: RecordState) {
        match self.search_id(value.key()) {
            Some(index) => self.records[index] = Record::new(value, state),
            None => self.records.push(Record::new(value, state)),
        }
    }

    /// Marks the record with `id` as deleted. Returns false if no such record exists.
    pub fn soft_delete(&mut self, id: &str) -> bool {
        let Some(index) = self.search_id(id) else {
            return false;
        };
        self.records[index].set_state(RecordState::Deleted);
        true
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The editable world document shared by every pathgrid view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    cells: Collection<Cell>,
    pathgrids: Collection<Pathgrid>,
    rev: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &Collection<Cell> {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut Collection<Cell> {
        &mut self.cells
    }

    pub fn pathgrids(&self) -> &Collection<Pathgrid> {
        &self.pathgrids
    }

    pub fn pathgrids_mut(&mut self) -> &mut Collection<Pathgrid> {
        &mut self.pathgrids
    }

    /// Current persisted state of a pathgrid, or `None` if it is missing or soft-deleted.
    ///
    /// Callers must resolve again after every document mutation instead of holding on to the
    /// returned reference.
    pub fn resolve_pathgrid(&self, pathgrid_id: &PathgridId) -> Option<&Pathgrid> {
        self.pathgrids.live(pathgrid_id.as_str())
    }

    pub fn resolve_cell(&self, cell_id: &CellId) -> Option<&Cell> {
        self.cells.live(cell_id.as_str())
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn set_rev(&mut self, rev: u64) {
        self.rev = rev;
    }

    pub fn bump_rev(&mut self) {
        self.rev = self.rev.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{Document, RecordState};
    use crate::model::{Pathgrid, PathgridId, Point};

    fn pathgrid_id(value: &str) -> PathgridId {
        PathgridId::new(value).expect("pathgrid id")
    }

    #[test]
    fn resolve_skips_missing_and_deleted_records() {
        let mut document = Document::new();
        let id = pathgrid_id("Balmora");
        document
            .pathgrids_mut()
            .insert(Pathgrid::new(id.clone()), RecordState::BaseOnly);

        assert!(document.resolve_pathgrid(&id).is_some());
        assert!(document.resolve_pathgrid(&pathgrid_id("Vivec")).is_none());

        assert!(document.pathgrids_mut().soft_delete("Balmora"));
        assert!(document.resolve_pathgrid(&id).is_none());
        assert_eq!(document.pathgrids().search_id("Balmora"), Some(0));
    }

    #[test]
    fn modify_marks_base_records_modified() {
        let mut document = Document::new();
        document.pathgrids_mut().insert(
            Pathgrid::new(pathgrid_id("Balmora")),
            RecordState::BaseOnly,
        );

        let record = document.pathgrids_mut().record_mut(0).expect("record");
        record.modify().points_mut().push(Point::new(1, 2, 3));
        assert_eq!(record.state(), RecordState::Modified);
    }

    #[test]
    fn insert_replaces_record_with_same_id() {
        let mut document = Document::new();
        document
            .pathgrids_mut()
            .insert(Pathgrid::new(pathgrid_id("Balmora")), RecordState::BaseOnly);
        document
            .pathgrids_mut()
            .insert(Pathgrid::new(pathgrid_id("Balmora")), RecordState::Added);

        assert_eq!(document.pathgrids().len(), 1);
        assert_eq!(
            document.pathgrids().record(0).map(|r| r.state()),
            Some(RecordState::Added)
        );
    }
}
