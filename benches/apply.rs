// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pathgrid Editor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::measurement::WallTime;
use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkGroup, Criterion, Throughput,
};

use pathgrid_editor::model::fixtures::exterior_line;
use pathgrid_editor::model::{Document, PathgridId};
use pathgrid_editor::ops::{apply_batch, ApplyResult, ColumnId, Command, CommandBatch, TableId};

// Benchmark identity (keep stable):
// - Group name in this file: `ops.apply_batch`
// - Case IDs must remain stable across refactors so results stay comparable over time.
fn checksum_apply_result(result: &ApplyResult) -> u64 {
    let mut acc = 0u64;
    acc = acc.wrapping_mul(131).wrapping_add(result.new_rev);
    acc = acc.wrapping_mul(131).wrapping_add(result.applied as u64);
    acc = acc
        .wrapping_mul(131)
        .wrapping_add(result.delta.changed.len() as u64);
    acc
}

fn pathgrid_id() -> PathgridId {
    PathgridId::new("#0 0").expect("pathgrid id")
}

fn append_points(start_row: usize, count: usize) -> CommandBatch {
    let record_id = pathgrid_id();
    let mut batch = CommandBatch::labelled("bench append");
    for idx in 0..count {
        let row = start_row + idx;
        batch.push(Command::AppendRow {
            table: TableId::Pathgrids,
            record_id: record_id.clone(),
            row,
            column: ColumnId::PathgridPoints,
        });
        for column in [
            ColumnId::PathgridPosX,
            ColumnId::PathgridPosY,
            ColumnId::PathgridPosZ,
        ] {
            batch.push(Command::SetCell {
                table: TableId::Pathgrids,
                record_id: record_id.clone(),
                parent_column: ColumnId::PathgridPoints,
                row,
                column,
                value: (idx as i32).saturating_mul(16) % 8192,
            });
        }
    }
    batch
}

fn delete_points_descending(len: usize, count: usize) -> CommandBatch {
    let record_id = pathgrid_id();
    let mut batch = CommandBatch::labelled("bench delete");
    for row in (len.saturating_sub(count)..len).rev() {
        batch.push(Command::DeleteRow {
            table: TableId::Pathgrids,
            record_id: record_id.clone(),
            row,
            column: ColumnId::PathgridPoints,
        });
    }
    batch
}

fn bench_case(
    group: &mut BenchmarkGroup<'_, WallTime>,
    name: &str,
    template: &Document,
    batch: CommandBatch,
) {
    group.throughput(Throughput::Elements(batch.len() as u64));
    group.bench_function(name, |b| {
        b.iter_batched(
            || template.clone(),
            |mut document| {
                let base_rev = document.rev();
                let result =
                    apply_batch(&mut document, base_rev, black_box(&batch)).expect("apply_batch");
                black_box(checksum_apply_result(&result))
            },
            BatchSize::SmallInput,
        )
    });
}

fn benches_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("ops.apply_batch");

    let small = exterior_line(16);
    let large = exterior_line(1024);

    bench_case(&mut group, "append_single", &small, append_points(16, 1));
    bench_case(&mut group, "append_batch_200", &large, append_points(1024, 200));
    bench_case(
        &mut group,
        "delete_batch_200",
        &large,
        delete_points_descending(1024, 200),
    );

    group.finish();
}

criterion_group!(benches, benches_apply);
criterion_main!(benches);
