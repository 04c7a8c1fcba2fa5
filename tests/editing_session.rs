// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pathgrid Editor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::Path;

use pathgrid_editor::config::EditorConfig;
use pathgrid_editor::editor::TickOutcome;
use pathgrid_editor::model::fixtures::demo_document;
use pathgrid_editor::model::{Document, Edge, PathgridId};
use pathgrid_editor::render::RecordingScene;
use pathgrid_editor::store::{parse_document, parse_script, render_document};
use pathgrid_editor::workspace::{Intent, Workspace};

const SCRIPT: &str = r##"{
  "steps": [
    { "pathgrid": "#0 0", "intent": { "type": "add_point", "position": [20.0, 30.0, -5.0] } },
    { "pathgrid": "#0 0", "intent": { "type": "toggle_selected", "node": 0 } },
    { "pathgrid": "#0 0", "intent": { "type": "toggle_selected", "node": 2 } },
    { "pathgrid": "#0 0", "intent": { "type": "add_edges_from", "node": 1 } },
    { "pathgrid": "#0 0", "intent": { "type": "move_selected", "offset": [100.0, 0.0, 0.0] } },
    { "pathgrid": "#0 0", "intent": { "type": "apply_position" } },
    { "pathgrid": "#0 0", "intent": { "type": "remove_edges" } },
    { "pathgrid": "#0 0", "intent": { "type": "remove_nodes" } }
  ]
}"##;

fn id(value: &str) -> PathgridId {
    PathgridId::new(value).expect("pathgrid id")
}

fn positions(document: &Document, pathgrid_id: &PathgridId) -> Vec<(i32, i32, i32)> {
    document
        .resolve_pathgrid(pathgrid_id)
        .expect("pathgrid")
        .points()
        .iter()
        .map(|point| (point.x, point.y, point.z))
        .collect()
}

fn replay(raw_document: &str, raw_script: &str) -> Workspace<RecordingScene> {
    let document = parse_document(raw_document, Path::new("document.json")).expect("document");
    let script = parse_script(raw_script, Path::new("script.json")).expect("script");

    let scene = RecordingScene::new();
    let root = scene.root();
    let mut workspace = Workspace::new(document, scene, root, EditorConfig::default());
    for step in script.steps() {
        workspace.open(step.pathgrid_id.clone());
        workspace
            .perform(&step.pathgrid_id, step.intent)
            .expect("perform step");
        workspace.tick();
    }
    workspace
}

#[test]
fn scripted_session_edits_and_undoes_through_history() {
    let raw = render_document(&demo_document()).expect("render");
    let mut workspace = replay(&raw, SCRIPT);
    let exterior = id("#0 0");

    // Rows 2 and 0 were removed; only the untouched point remains and its edges went with them.
    assert_eq!(positions(workspace.document(), &exterior), vec![(10, 10, 10)]);
    let pathgrid = workspace.document().resolve_pathgrid(&exterior).expect("pathgrid");
    assert!(pathgrid.edges().is_empty());
    assert_eq!(pathgrid.points()[0].connection_count(), 0);
    assert_eq!(workspace.history().undo_len(), 4);
    assert_eq!(workspace.document().rev(), 4);
    assert!(!workspace.view(&exterior).expect("view").is_selected());

    workspace
        .perform(&exterior, Intent::Undo)
        .expect("undo");
    assert_eq!(
        positions(workspace.document(), &exterior),
        vec![(100, 0, 0), (10, 10, 10), (120, 30, 0)]
    );
    let pathgrid = workspace.document().resolve_pathgrid(&exterior).expect("pathgrid");
    assert_eq!(
        pathgrid.edges(),
        &[
            Edge::new(1, 0),
            Edge::new(0, 1),
            Edge::new(1, 2),
            Edge::new(2, 1),
        ]
    );
    let counts: Vec<u16> = pathgrid
        .points()
        .iter()
        .map(|point| point.connection_count())
        .collect();
    assert_eq!(counts, vec![1, 2, 1]);
    assert_eq!(workspace.history().redo_label(), Some("remove pathgrid points"));
    assert_eq!(workspace.tick(), vec![(exterior.clone(), TickOutcome::Rebuilt)]);

    workspace
        .perform(&exterior, Intent::Redo)
        .expect("redo");
    assert_eq!(positions(workspace.document(), &exterior), vec![(10, 10, 10)]);
    assert_eq!(workspace.document().rev(), 6);
}

#[test]
fn interior_points_are_not_clamped() {
    let raw = render_document(&demo_document()).expect("render");
    let script = r#"{
  "steps": [
    { "pathgrid": "Balmora, Guild of Mages",
      "intent": { "type": "add_point", "position": [-9000.5, 12000.9, -3.0] } }
  ]
}"#;
    let workspace = replay(&raw, script);
    let interior = id("Balmora, Guild of Mages");

    assert_eq!(
        positions(workspace.document(), &interior).last().copied(),
        Some((-9000, 12000, -3))
    );
}

#[test]
fn removed_record_tears_down_its_view() {
    let raw = render_document(&demo_document()).expect("render");
    let script = r##"{ "steps": [{ "pathgrid": "#0 0", "intent": { "type": "select_all" } }] }"##;
    let mut workspace = replay(&raw, script);
    let exterior = id("#0 0");
    let view = workspace.view(&exterior).expect("view");
    let graph_slot = view.graph_slot();
    assert!(workspace.scene().drawable(graph_slot).is_some());

    workspace.edit_document(|document| {
        document.pathgrids_mut().soft_delete(exterior.as_str());
    });

    assert_eq!(workspace.tick(), vec![(exterior.clone(), TickOutcome::TornDown)]);
    assert!(workspace.scene().drawable(graph_slot).is_none());
    assert!(!workspace.view(&exterior).expect("view").is_selected());
}

#[test]
fn rendered_document_survives_a_session_roundtrip() {
    let raw = render_document(&demo_document()).expect("render");
    let workspace = replay(&raw, SCRIPT);
    let edited = workspace.into_document();

    let reparsed =
        parse_document(&render_document(&edited).expect("render"), Path::new("out.json"))
            .expect("reparse");
    assert_eq!(reparsed, edited);
}
