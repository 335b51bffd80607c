// src/process/dedup.rs

use std::collections::HashSet;

use super::table::{Table, Value};
use crate::error::PipelineError;

/// Keep the first row of every `key_columns` group, in current row order.
/// Null key parts group together. Returns how many rows were dropped.
pub fn dedup_first(table: &mut Table, key_columns: &[String]) -> Result<usize, PipelineError> {
    let idxs = key_columns
        .iter()
        .map(|k| {
            table
                .column_index(k)
                .ok_or_else(|| PipelineError::MissingColumn(k.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let before = table.len();
    let mut seen: HashSet<Vec<Value>> = HashSet::with_capacity(before);
    table
        .rows
        .retain(|row| seen.insert(idxs.iter().map(|&i| row[i].clone()).collect()));

    Ok(before - table.len())
}
