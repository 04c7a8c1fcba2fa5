// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pathgrid Editor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{NodeIndex, PathgridId, Vec3};
use crate::workspace::Intent;

use super::StoreError;

/// One intent as written in a script file, tagged by `type`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IntentJson {
    SelectAll,
    ToggleSelected { node: NodeIndex },
    InvertSelected,
    ClearSelected,
    MoveSelected { offset: [f64; 3] },
    SetupConnectionIndicator { node: NodeIndex },
    ResetMove,
    AddPoint { position: [f64; 3] },
    ApplyPosition,
    AddEdge { node1: NodeIndex, node2: NodeIndex },
    AddEdgesFrom { node: NodeIndex },
    RemoveNodes,
    RemoveEdges,
    Undo,
    Redo,
}

fn vec3([x, y, z]: [f64; 3]) -> Vec3 {
    Vec3::new(x, y, z)
}

impl From<IntentJson> for Intent {
    fn from(intent: IntentJson) -> Self {
        match intent {
            IntentJson::SelectAll => Self::SelectAll,
            IntentJson::ToggleSelected { node } => Self::ToggleSelected { node },
            IntentJson::InvertSelected => Self::InvertSelected,
            IntentJson::ClearSelected => Self::ClearSelected,
            IntentJson::MoveSelected { offset } => Self::MoveSelected {
                offset: vec3(offset),
            },
            IntentJson::SetupConnectionIndicator { node } => {
                Self::SetupConnectionIndicator { node }
            }
            IntentJson::ResetMove => Self::ResetMove,
            IntentJson::AddPoint { position } => Self::AddPoint {
                position: vec3(position),
            },
            IntentJson::ApplyPosition => Self::ApplyPosition,
            IntentJson::AddEdge { node1, node2 } => Self::AddEdge { node1, node2 },
            IntentJson::AddEdgesFrom { node } => Self::AddEdgesFrom { node },
            IntentJson::RemoveNodes => Self::RemoveNodes,
            IntentJson::RemoveEdges => Self::RemoveEdges,
            IntentJson::Undo => Self::Undo,
            IntentJson::Redo => Self::Redo,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
struct StepJson {
    /// Pathgrid the intent is addressed to. Its view is opened on first use.
    pathgrid: String,
    intent: IntentJson,
}

/// A replayable list of user intents.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
struct ScriptJson {
    steps: Vec<StepJson>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScriptStep {
    pub pathgrid_id: PathgridId,
    pub intent: Intent,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Script {
    steps: Vec<ScriptStep>,
}

impl Script {
    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse_script(&raw, path)
    }
}

/// Parses a script from JSON text. `path` is only used for error reporting.
pub fn parse_script(raw: &str, path: &Path) -> Result<Script, StoreError> {
    let json: ScriptJson = serde_json::from_str(raw).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let mut steps = Vec::with_capacity(json.steps.len());
    for step in json.steps {
        let pathgrid_id =
            PathgridId::new(&step.pathgrid).map_err(|source| StoreError::InvalidId {
                field: "steps[].pathgrid",
                value: step.pathgrid.clone(),
                source,
            })?;
        steps.push(ScriptStep {
            pathgrid_id,
            intent: step.intent.into(),
        });
    }
    Ok(Script { steps })
}

/// JSON schema of the script file format.
pub fn script_schema() -> serde_json::Value {
    serde_json::to_value(schemars::schema_for!(ScriptJson)).unwrap_or_default()
}
