// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pathgrid Editor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use pathgrid_editor::config::EditorConfig;
use pathgrid_editor::editor::PathgridInstance;
use pathgrid_editor::model::fixtures::exterior_line;
use pathgrid_editor::model::{CellCoordinates, Document, PathgridId};
use pathgrid_editor::ops::{apply_batch, CommandBatch};
use pathgrid_editor::render::RecordingScene;

// Benchmark identity (keep stable):
// - Group name in this file: `editor.commands`
// - Case IDs must remain stable across refactors so results stay comparable over time.
struct Fixture {
    document: Document,
    scene: RecordingScene,
    view: PathgridInstance,
}

/// A line of `points` points, all selected, with node 0 connected to every other node.
fn fixture(points: usize) -> Fixture {
    let mut document = exterior_line(points);
    let mut scene = RecordingScene::new();
    let root = scene.root();
    let mut view = PathgridInstance::new(
        &document,
        &mut scene,
        root,
        PathgridId::new("#0 0").expect("pathgrid id"),
        CellCoordinates::new(0, 0),
        &EditorConfig::default(),
    );
    view.select_all(&document, &mut scene);

    let mut batch = CommandBatch::new();
    view.apply_edges(&document, &mut batch, 0);
    let base_rev = document.rev();
    apply_batch(&mut document, base_rev, &batch).expect("connect fixture");
    view.tick(&document, &mut scene);
    Fixture {
        document,
        scene,
        view,
    }
}

fn benches_commands(c: &mut Criterion) {
    let mut group = c.benchmark_group("editor.commands");

    for points in [16usize, 256] {
        let Fixture { document, view, .. } = fixture(points);

        group.throughput(Throughput::Elements(points as u64));
        group.bench_function(format!("apply_edges_{points}"), |b| {
            b.iter(|| {
                let mut batch = CommandBatch::new();
                let emitted = view.apply_edges(&document, &mut batch, black_box(1));
                black_box((emitted, batch.len()))
            })
        });

        group.bench_function(format!("remove_edges_{points}"), |b| {
            b.iter(|| {
                let mut batch = CommandBatch::new();
                black_box(view.apply_remove_edges(&document, &mut batch))
            })
        });

        group.bench_function(format!("rebuild_geometry_{points}"), |b| {
            b.iter_batched(
                || {
                    let mut fixture = fixture(points);
                    fixture.view.recreate_geometry();
                    fixture
                },
                |mut fixture| {
                    black_box(fixture.view.tick(&fixture.document, &mut fixture.scene))
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, benches_commands);
criterion_main!(benches);
