// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pathgrid Editor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

fn apply_command(document: &mut Document, command: &Command) -> Result<(), ApplyError> {
    let record_id = command.record_id();
    let Some(index) = document.pathgrids().search_id(record_id.as_str()) else {
        return Err(ApplyError::RecordNotFound {
            record_id: record_id.clone(),
        });
    };
    let Some(record) = document.pathgrids_mut().record_mut(index) else {
        return Err(ApplyError::RecordNotFound {
            record_id: record_id.clone(),
        });
    };
    if record.is_deleted() {
        return Err(ApplyError::RecordDeleted {
            record_id: record_id.clone(),
        });
    }
    let pathgrid = record.modify();

    match command {
        Command::AppendRow { row, column, .. } => {
            let len = nested_len(pathgrid, *column)?;
            if *row > len {
                return Err(row_out_of_range(record_id, *column, *row, len));
            }
            match column {
                ColumnId::PathgridPoints => pathgrid.points_mut().insert(*row, Point::default()),
                _ => pathgrid.edges_mut().insert(*row, Edge::default()),
            }
            Ok(())
        }
        Command::DeleteRow { row, column, .. } => {
            let len = nested_len(pathgrid, *column)?;
            if *row >= len {
                return Err(row_out_of_range(record_id, *column, *row, len));
            }
            match column {
                ColumnId::PathgridPoints => {
                    pathgrid.remove_point(*row);
                }
                _ => {
                    pathgrid.edges_mut().remove(*row);
                }
            }
            Ok(())
        }
        Command::SetCell {
            parent_column,
            row,
            column,
            value,
            ..
        } => {
            if column.parent() != Some(*parent_column) {
                return Err(ApplyError::ColumnMismatch {
                    parent_column: Some(*parent_column),
                    column: *column,
                });
            }
            let len = nested_len(pathgrid, *parent_column)?;
            if *row >= len {
                return Err(row_out_of_range(record_id, *parent_column, *row, len));
            }
            set_cell(pathgrid, *row, *column, *value)
        }
    }
}

fn nested_len(pathgrid: &Pathgrid, column: ColumnId) -> Result<usize, ApplyError> {
    match column {
        ColumnId::PathgridPoints => Ok(pathgrid.points().len()),
        ColumnId::PathgridEdges => Ok(pathgrid.edges().len()),
        _ => Err(ApplyError::ColumnMismatch {
            parent_column: None,
            column,
        }),
    }
}

fn set_cell(
    pathgrid: &mut Pathgrid,
    row: usize,
    column: ColumnId,
    value: i32,
) -> Result<(), ApplyError> {
    match column {
        ColumnId::PathgridPosX => pathgrid.points_mut()[row].x = value,
        ColumnId::PathgridPosY => pathgrid.points_mut()[row].y = value,
        ColumnId::PathgridPosZ => pathgrid.points_mut()[row].z = value,
        ColumnId::PathgridEdge0 | ColumnId::PathgridEdge1 => {
            if value < 0 {
                return Err(ApplyError::ValueOutOfRange { column, value });
            }
            let edge = &mut pathgrid.edges_mut()[row];
            if column == ColumnId::PathgridEdge0 {
                edge.from = value;
            } else {
                edge.to = value;
            }
        }
        ColumnId::PathgridPoints | ColumnId::PathgridEdges => {
            return Err(ApplyError::ColumnMismatch {
                parent_column: None,
                column,
            });
        }
    }
    Ok(())
}

/// Every edge endpoint must name an existing point row.
fn check_edge_endpoints(pathgrid: &Pathgrid) -> Result<(), ApplyError> {
    let count = pathgrid.points().len();
    for edge in pathgrid.edges() {
        for (column, value) in [
            (ColumnId::PathgridEdge0, edge.from),
            (ColumnId::PathgridEdge1, edge.to),
        ] {
            let in_range = usize::try_from(value).is_ok_and(|node| node < count);
            if !in_range {
                return Err(ApplyError::ValueOutOfRange { column, value });
            }
        }
    }
    Ok(())
}

fn row_out_of_range(
    record_id: &PathgridId,
    column: ColumnId,
    row: usize,
    len: usize,
) -> ApplyError {
    ApplyError::RowOutOfRange {
        record_id: record_id.clone(),
        column,
        row,
        len,
    }
}
