// src/process/combine.rs

use std::path::{Path, PathBuf};

use super::table::Table;

/// Projected tables collected over one run, in the order files were read.
#[derive(Debug, Default)]
pub struct Accumulator {
    sources: Vec<PathBuf>,
    tables: Vec<Table>,
}

impl Accumulator {
    pub fn push(&mut self, source: impl Into<PathBuf>, table: Table) {
        self.sources.push(source.into());
        self.tables.push(table);
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(Table::len).sum()
    }

    pub fn sources(&self) -> impl Iterator<Item = &Path> {
        self.sources.iter().map(PathBuf::as_path)
    }

    pub fn into_tables(self) -> Vec<Table> {
        self.tables
    }
}

/// Stack `tables` on the union of their columns.
///
/// Columns are ordered by `canonical` first, then any others in order of
/// first appearance. Cells a source table lacks come out as nulls. Returns
/// `None` when there is nothing to combine.
pub fn combine(tables: Vec<Table>, canonical: &[String]) -> Option<Table> {
    if tables.is_empty() {
        return None;
    }

    let mut headers: Vec<String> = canonical
        .iter()
        .filter(|c| tables.iter().any(|t| t.headers.contains(c)))
        .cloned()
        .collect();
    for t in &tables {
        for h in &t.headers {
            if !headers.contains(h) {
                headers.push(h.clone());
            }
        }
    }

    let mut out = Table::new(headers);
    out.rows.reserve(tables.iter().map(Table::len).sum());

    for t in tables {
        let layout: Vec<Option<usize>> = out.headers.iter().map(|h| t.column_index(h)).collect();
        for mut row in t.rows {
            out.rows
                .push(layout.iter().map(|i| i.and_then(|i| row[i].take())).collect());
        }
    }

    Some(out)
}

/// Give `table` an all-null `name` column at its `canonical` slot when no
/// source carried it. Returns `true` if the column had to be added.
pub fn ensure_column(table: &mut Table, name: &str, canonical: &[String]) -> bool {
    if table.column_index(name).is_some() {
        return false;
    }
    let rank = |h: &str| canonical.iter().position(|c| c == h).unwrap_or(usize::MAX);
    let target = rank(name);
    let at = table.headers.iter().take_while(|h| rank(h.as_str()) < target).count();
    table.insert_null_column(at, name);
    true
}
