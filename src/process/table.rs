// src/process/table.rs

/// One cell; `None` is a missing value (empty field or a column the source
/// file never had).
pub type Value = Option<String>;

/// Header plus rows, every row aligned with `headers`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of `name` in the header; first match wins on duplicates.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Insert an all-null column `name` at header position `at`.
    pub fn insert_null_column(&mut self, at: usize, name: &str) {
        let at = at.min(self.headers.len());
        self.headers.insert(at, name.to_string());
        for row in self.rows.iter_mut() {
            row.insert(at, None);
        }
    }

    /// Cell at `row` under column `name`, `None` when absent or null.
    #[cfg(test)]
    pub(crate) fn value(&self, row: usize, name: &str) -> Option<&str> {
        let col = self.column_index(name)?;
        self.rows.get(row)?.get(col)?.as_deref()
    }

    /// Every cell of column `name`, in row order.
    #[cfg(test)]
    pub(crate) fn column(&self, name: &str) -> Option<Vec<Option<&str>>> {
        let col = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|r| r.get(col).and_then(|v| v.as_deref()))
                .collect(),
        )
    }
}

#[cfg(test)]
pub(crate) fn table(headers: &[&str], rows: &[&[Option<&str>]]) -> Table {
    Table {
        headers: headers.iter().map(|s| s.to_string()).collect(),
        rows: rows
            .iter()
            .map(|r| r.iter().map(|v| v.map(str::to_string)).collect())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_by_name() {
        let t = table(
            &["STATENAME", "ST_CASE"],
            &[&[Some("Alaska"), Some("20001")], &[Some("Ohio"), None]],
        );
        assert_eq!(t.len(), 2);
        assert_eq!(t.column_index("ST_CASE"), Some(1));
        assert_eq!(t.value(0, "STATENAME"), Some("Alaska"));
        assert_eq!(t.value(1, "ST_CASE"), None);
        assert_eq!(t.value(5, "ST_CASE"), None);
        assert_eq!(t.column("ST_CASE"), Some(vec![Some("20001"), None]));
        assert_eq!(t.column("FATALS"), None);
    }

    #[test]
    fn null_column_lands_at_position() {
        let mut t = table(
            &["STATENAME", "FATALS"],
            &[&[Some("Ohio"), Some("2")], &[Some("Utah"), Some("1")]],
        );
        t.insert_null_column(1, "DRIMPAIR");
        assert_eq!(t.headers, vec!["STATENAME", "DRIMPAIR", "FATALS"]);
        assert_eq!(t.column("DRIMPAIR"), Some(vec![None, None]));
        assert_eq!(t.value(1, "FATALS"), Some("1"));

        t.insert_null_column(99, "HARM_EVNAME");
        assert_eq!(t.headers.last().map(String::as_str), Some("HARM_EVNAME"));
        assert!(t.rows.iter().all(|r| r.len() == 4));
    }
}
