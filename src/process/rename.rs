// src/process/rename.rs

use std::collections::BTreeMap;

use super::table::Table;

/// Swap internal column names for display names; unmapped names are kept.
pub fn rename_columns(table: &mut Table, names: &BTreeMap<String, String>) {
    for h in table.headers.iter_mut() {
        if let Some(display) = names.get(h.as_str()) {
            *h = display.clone();
        }
    }
}
