// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pathgrid Editor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use smol_str::SmolStr;

/// A record identifier used by the document collections and command addressing.
///
/// Ids are compared verbatim (no case folding). Cell and pathgrid ids share the same text:
/// a pathgrid is keyed by the id of the cell it belongs to, e.g. `"Balmora"` or `"#3 -2"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: SmolStr,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub fn new(value: impl AsRef<str>) -> Result<Self, IdError> {
        let value = value.as_ref();
        validate_id(value)?;
        Ok(Self {
            value: SmolStr::new(value),
            _marker: PhantomData,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value.into()
    }

    /// Reinterprets the same text as an id of another record kind.
    pub fn cast<U>(&self) -> Id<U> {
        Id {
            value: self.value.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T> Borrow<str> for Id<T> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl<T> FromStr for Id<T> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<T> TryFrom<String> for Id<T> {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    Empty,
    ControlCharacter,
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("id must not be empty"),
            Self::ControlCharacter => f.write_str("id must not contain control characters"),
        }
    }
}

impl std::error::Error for IdError {}

fn validate_id(value: &str) -> Result<(), IdError> {
    if value.is_empty() {
        return Err(IdError::Empty);
    }
    if value.chars().any(char::is_control) {
        return Err(IdError::ControlCharacter);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellIdTag {}
pub type CellId = Id<CellIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathgridIdTag {}
pub type PathgridId = Id<PathgridIdTag>;

#[cfg(test)]
mod tests {
    use super::{CellId, Id, IdError, PathgridId};

    #[test]
    fn id_rejects_empty() {
        let result: Result<Id<()>, _> = Id::new("");
        assert_eq!(result, Err(IdError::Empty));
    }

    #[test]
    fn id_rejects_control_characters() {
        let result: Result<Id<()>, _> = Id::new("Bal\nmora");
        assert_eq!(result, Err(IdError::ControlCharacter));
    }

    #[test]
    fn exterior_style_ids_are_accepted() {
        let id = PathgridId::new("#3 -2").expect("pathgrid id");
        assert_eq!(id.as_str(), "#3 -2");
    }

    #[test]
    fn cast_keeps_text() {
        let pathgrid_id = PathgridId::new("Balmora").expect("pathgrid id");
        let cell_id: CellId = pathgrid_id.cast();
        assert_eq!(cell_id.as_str(), pathgrid_id.as_str());
    }
}
