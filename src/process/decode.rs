// src/process/decode.rs

use csv::ReaderBuilder;
use encoding_rs::Encoding;
use std::{fs, path::Path};
use tracing::{trace, warn};

use super::table::{Table, Value};
use crate::error::DecodeError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read `path` as a headed CSV, trying each encoding label in order.
///
/// The first encoding that both decodes the bytes without replacement and
/// parses as CSV wins. Failures are logged and the next label is tried; once
/// the list is exhausted the last cause is returned.
#[tracing::instrument(level = "debug", skip(path, encodings), fields(file = %path.display()))]
pub fn decode_file(path: &Path, encodings: &[String]) -> Result<Table, DecodeError> {
    let bytes = fs::read(path).map_err(|e| DecodeError {
        path: path.to_path_buf(),
        tried: Vec::new(),
        cause: e.to_string(),
    })?;
    decode_bytes(path, &bytes, encodings)
}

pub fn decode_bytes(path: &Path, bytes: &[u8], encodings: &[String]) -> Result<Table, DecodeError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut tried = Vec::with_capacity(encodings.len());
    let mut cause = String::from("no encodings configured");

    for label in encodings {
        tried.push(label.clone());
        match decode_with(bytes, label) {
            Ok(table) => {
                trace!(encoding = %label, rows = table.len(), "decoded");
                return Ok(table);
            }
            Err(e) => {
                warn!(
                    file = %path.display(),
                    encoding = %label,
                    error = %e,
                    "decode failed, trying next encoding"
                );
                cause = e;
            }
        }
    }

    Err(DecodeError {
        path: path.to_path_buf(),
        tried,
        cause,
    })
}

fn decode_with(bytes: &[u8], label: &str) -> Result<Table, String> {
    let encoding = Encoding::for_label(label.as_bytes())
        .ok_or_else(|| format!("unknown encoding `{}`", label))?;
    let text = encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or_else(|| format!("malformed {} byte sequence", encoding.name()))?;
    parse_csv(&text)
}

/// Parse headed CSV text. Empty fields become nulls and short records are
/// padded; a record wider than the header is an error.
pub fn parse_csv(text: &str) -> Result<Table, String> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|e| format!("reading header: {}", e))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let width = headers.len();
    let mut table = Table::new(headers);

    for (idx, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| format!("record {}: {}", idx + 1, e))?;
        if record.len() > width {
            return Err(format!(
                "record {} has {} fields, header has {}",
                idx + 1,
                record.len(),
                width
            ));
        }
        let mut row: Vec<Value> = record
            .iter()
            .map(|f| (!f.is_empty()).then(|| f.to_string()))
            .collect();
        row.resize(width, None);
        table.rows.push(row);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::columns::DEFAULT_ENCODINGS;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn labels(ls: &[&str]) -> Vec<String> {
        ls.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_header_nulls_and_short_rows() {
        let t = parse_csv("STATENAME, ST_CASE ,DRIMPAIR\nAlaska,20001,\nOhio,39002\n").unwrap();
        assert_eq!(t.headers, vec!["STATENAME", "ST_CASE", "DRIMPAIR"]);
        assert_eq!(t.len(), 2);
        assert_eq!(t.value(0, "DRIMPAIR"), None);
        assert_eq!(t.value(1, "ST_CASE"), Some("39002"));
        assert_eq!(t.rows[1].len(), 3);
        assert_eq!(t.value(1, "DRIMPAIR"), None);
    }

    #[test]
    fn wide_record_is_rejected() {
        let err = parse_csv("A,B\n1,2,3\n").unwrap_err();
        assert!(err.contains("3 fields"));
    }

    #[test]
    fn latin1_bytes_decode_with_defaults() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"STATENAME,WEATHERNAME\nPuerto Rico,Lluvia ligera \xe1\n")
            .unwrap();

        let t = decode_file(f.path(), &labels(DEFAULT_ENCODINGS)).unwrap();
        assert_eq!(t.value(0, "WEATHERNAME"), Some("Lluvia ligera \u{e1}"));
    }

    #[test]
    fn utf8_input_is_not_read_as_single_byte() {
        let bytes = "STATENAME\nM\u{e9}xico\n".as_bytes();
        let t = decode_bytes(Path::new("x.csv"), bytes, &labels(DEFAULT_ENCODINGS)).unwrap();
        assert_eq!(t.value(0, "STATENAME"), Some("M\u{e9}xico"));
    }

    #[test]
    fn c1_bytes_follow_windows_1252() {
        let t = decode_bytes(Path::new("x.csv"), b"A\nA\x80B\n", &labels(DEFAULT_ENCODINGS)).unwrap();
        assert_eq!(t.value(0, "A"), Some("A\u{20ac}B"));
    }

    #[test]
    fn falls_back_to_second_encoding() {
        let bytes = b"STATENAME\nM\xe9xico\n";
        let t = decode_bytes(Path::new("x.csv"), bytes, &labels(&["utf-8", "latin1"])).unwrap();
        assert_eq!(t.value(0, "STATENAME"), Some("M\u{e9}xico"));
    }

    #[test]
    fn all_encodings_failing_reports_every_label() {
        let bytes = b"STATENAME\nM\xe9xico\n";
        let err = decode_bytes(Path::new("x.csv"), bytes, &labels(&["utf-8"])).unwrap_err();
        assert_eq!(err.tried, vec!["utf-8"]);
        assert!(err.cause.contains("malformed"));
    }

    #[test]
    fn parse_failure_exhausts_list() {
        let bytes = b"A,B\n1,2,3\n";
        let err =
            decode_bytes(Path::new("x.csv"), bytes, &labels(&["iso-8859-1", "latin1"])).unwrap_err();
        assert_eq!(err.tried.len(), 2);
    }

    #[test]
    fn utf8_bom_is_dropped() {
        let bytes = b"\xEF\xBB\xBFSTATENAME\nAlaska\n";
        let t = decode_bytes(Path::new("x.csv"), bytes, &labels(&["iso-8859-1"])).unwrap();
        assert_eq!(t.headers, vec!["STATENAME"]);
    }

    #[test]
    fn missing_file_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = decode_file(&dir.path().join("gone.csv"), &labels(&["latin1"])).unwrap_err();
        assert!(err.tried.is_empty());
    }
}
