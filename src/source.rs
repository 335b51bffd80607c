// src/source.rs

use glob::{glob_with, MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::PipelineError;

/// Lazily list the `*.csv` files directly inside `dir`, in path order.
///
/// The extension match is case-sensitive, so `DATA.CSV` is skipped along with
/// sub-directories and any other non-CSV entry.
pub fn discover_csv_files<P: AsRef<Path>>(
    dir: P,
) -> Result<impl Iterator<Item = PathBuf>, PipelineError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(PipelineError::DirectoryNotFound(dir.to_path_buf()));
    }

    let pattern = format!(
        "{}/*.csv",
        Pattern::escape(&dir.to_string_lossy()).trim_end_matches('/')
    );
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let paths = glob_with(&pattern, options)?.filter_map(|entry| match entry {
        Ok(path) if path.is_file() => Some(path),
        Ok(_) => None,
        Err(e) => {
            warn!(path = %e.path().display(), error = %e.error(), "skipping unreadable entry");
            None
        }
    });
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn lists_only_csv_files_in_order() {
        let dir = tempdir().unwrap();
        for name in ["b.csv", "a.csv", "upper.CSV", "notes.txt", "c.csv.bak"] {
            fs::write(dir.path().join(name), "x\n").unwrap();
        }
        fs::create_dir(dir.path().join("nested.csv")).unwrap();

        let names: Vec<String> = discover_csv_files(dir.path())
            .unwrap()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.csv", "b.csv"]);
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let dir = tempdir().unwrap();
        assert_eq!(discover_csv_files(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn missing_directory_is_fatal() {
        let dir = tempdir().unwrap();
        let gone = dir.path().join("nope");
        assert!(matches!(
            discover_csv_files(&gone),
            Err(PipelineError::DirectoryNotFound(p)) if p == gone
        ));
    }

    #[test]
    fn file_path_is_not_a_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.csv");
        fs::write(&file, "x\n").unwrap();
        assert!(matches!(
            discover_csv_files(&file),
            Err(PipelineError::DirectoryNotFound(_))
        ));
    }
}
