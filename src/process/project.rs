// src/process/project.rs

use super::table::Table;
use crate::error::SchemaMismatch;

/// Keep only the target columns present in `table`, in target order.
pub fn project(table: Table, targets: &[String]) -> Result<Table, SchemaMismatch> {
    let picks: Vec<(String, usize)> = targets
        .iter()
        .filter_map(|t| table.column_index(t).map(|i| (t.clone(), i)))
        .collect();
    if picks.is_empty() {
        return Err(SchemaMismatch);
    }

    let rows = table
        .rows
        .into_iter()
        .map(|mut row| picks.iter().map(|&(_, i)| row[i].take()).collect())
        .collect();

    Ok(Table {
        headers: picks.into_iter().map(|(name, _)| name).collect(),
        rows,
    })
}
