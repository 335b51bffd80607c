// src/process/write.rs

use std::path::Path;
use tempfile::NamedTempFile;

use super::table::Table;
use crate::error::{PipelineError, SinkError};

/// Write `table` as CSV to `path`, header first, nulls as empty fields.
///
/// The rows go to a temp file next to `path` which is then renamed over it,
/// so `path` ends up either fully written or untouched.
pub fn write_csv(table: &Table, path: &Path) -> Result<(), PipelineError> {
    write_atomic(table, path).map_err(|source| PipelineError::SinkWrite {
        path: path.to_path_buf(),
        source,
    })
}

fn write_atomic(table: &Table, path: &Path) -> Result<(), SinkError> {
    // 1) Temp file next to the destination
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir)?;

    // 2) Header, then rows; nulls become empty fields
    let mut wtr = csv::Writer::from_writer(tmp);
    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(row.iter().map(|v| v.as_deref().unwrap_or("")))?;
    }
    let tmp = wtr.into_inner().map_err(|e| e.into_error())?;

    // 3) Flush to disk and rename over the original
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::table::table;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn writes_header_and_empty_nulls() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out.csv");
        let t = table(
            &["State", "Case Number", "Impairment #"],
            &[&[Some("Alaska"), Some("1"), Some("5")], &[Some("Ohio, OH"), Some("2"), None]],
        );

        write_csv(&t, &out).unwrap();
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "State,Case Number,Impairment #\nAlaska,1,5\n\"Ohio, OH\",2,\n"
        );
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out.csv");
        fs::write(&out, "stale contents\n").unwrap();

        write_csv(&table(&["State"], &[&[Some("Utah")]]), &out).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "State\nUtah\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn unwritable_destination_is_a_sink_error() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("missing").join("out.csv");

        let err = write_csv(&table(&["State"], &[]), &out).unwrap_err();
        assert!(matches!(err, PipelineError::SinkWrite { ref path, .. } if *path == out));
        assert!(!out.exists());
    }
}
