// src/process/filter.rs

use std::cmp::Ordering;
use tracing::debug;

use super::table::Table;
use crate::error::PipelineError;

/// "None / apparently normal".
pub const NORMAL_CODE: f64 = 0.0;
/// 98 = not reported, 99 = reported as unknown.
pub const UNREPORTED_FLOOR: f64 = 98.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub dropped_normal: usize,
    pub dropped_unreported: usize,
}

/// Numeric impairment code of a cell, `None` when empty or not a number.
pub fn impairment_code(value: Option<&str>) -> Option<f64> {
    value
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|c| !c.is_nan())
}

/// Ascending by code with code-less rows last.
fn by_code(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Order rows by impairment code, then drop normal (0) and unreported (>= 98)
/// rows. The sort is stable, so rows with equal codes keep their relative
/// order; dedup relies on that to pick survivors.
pub fn filter_impairment(table: &mut Table, column: &str) -> Result<FilterStats, PipelineError> {
    let idx = table
        .column_index(column)
        .ok_or_else(|| PipelineError::MissingColumn(column.to_string()))?;

    let mut keyed: Vec<_> = table
        .rows
        .drain(..)
        .map(|row| (impairment_code(row[idx].as_deref()), row))
        .collect();
    keyed.sort_by(|a, b| by_code(a.0, b.0));

    let mut stats = FilterStats::default();
    for (code, row) in keyed {
        match code {
            Some(c) if c == NORMAL_CODE => stats.dropped_normal += 1,
            Some(c) if c >= UNREPORTED_FLOOR => stats.dropped_unreported += 1,
            _ => table.rows.push(row),
        }
    }

    debug!(
        kept = table.len(),
        dropped_normal = stats.dropped_normal,
        dropped_unreported = stats.dropped_unreported,
        "impairment filter"
    );
    Ok(stats)
}
