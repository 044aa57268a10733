use std::path::Path;

use super::model::{CellValue, Table};
use crate::error::LoadError;

/// Markers read as a missing value, as dataframe readers do by default.
const NA_MARKERS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None", "<NA>", "#N/A",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load `name` from `dir` as a comma-separated table with a header row.
///
/// The path is re-checked here even though it was just listed, since the
/// file may have been removed in between.
pub fn load_table(dir: &Path, name: &str) -> Result<Table, LoadError> {
    let path = dir.join(name);
    if !path.exists() {
        return Err(LoadError::NotFound {
            name: name.to_string(),
        });
    }

    let csv_err = |source| LoadError::Csv {
        name: name.to_string(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(&path)
        .map_err(csv_err)?;

    let header: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    // Blank lines are skipped by the reader, so an empty header record means
    // the file held no header at all.
    if header.is_empty() {
        return Err(LoadError::EmptyData);
    }

    let width = header.len();
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result.map_err(csv_err)?;
        if record.len() > width {
            return Err(LoadError::RaggedRow {
                expected: width,
                found: record.len(),
                line: record.position().map(|p| p.line()).unwrap_or(0),
            });
        }
        rows.push(record.iter().map(guess_cell_type).collect());
    }

    let table = Table::new(header, rows);
    log::info!(
        "Loaded '{name}': {} rows, columns {:?}",
        table.len(),
        table.column_names()
    );
    Ok(table)
}

fn guess_cell_type(s: &str) -> CellValue {
    if NA_MARKERS.contains(&s) {
        return CellValue::Null;
    }
    let t = s.trim();
    if let Ok(i) = t.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = t.parse::<f64>() {
        return CellValue::Float(f);
    }
    if t.eq_ignore_ascii_case("true") {
        return CellValue::Bool(true);
    }
    if t.eq_ignore_ascii_case("false") {
        return CellValue::Bool(false);
    }
    CellValue::String(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, body: &str) {
        std::fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn header_and_rows_are_loaded() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "abc.csv", "a,b,c\n1,2,3\n4,5,6\n7,8,9\n");

        let table = load_table(dir.path(), "abc.csv").unwrap();
        assert_eq!(table.column_names(), ["a", "b", "c"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.head(5).len(), 3);
        assert_eq!(table.rows()[2][1], CellValue::Integer(8));
    }

    #[test]
    fn cells_are_typed() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "t.csv",
            "n,f,b,s\n1,1.5,True,x\nNA,2,false,\n",
        );

        let table = load_table(dir.path(), "t.csv").unwrap();
        let rows = table.rows();
        assert_eq!(rows[0][0], CellValue::Integer(1));
        assert_eq!(rows[1][0], CellValue::Null);
        // 2 shares a column with 1.5, so it is promoted.
        assert_eq!(rows[1][1], CellValue::Float(2.0));
        assert_eq!(rows[0][2], CellValue::Bool(true));
        assert_eq!(rows[1][2], CellValue::Bool(false));
        assert_eq!(rows[0][3], CellValue::String("x".into()));
        assert_eq!(rows[1][3], CellValue::Null);
    }

    #[test]
    fn zero_byte_file_is_empty_data() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "empty.csv", "");

        let err = load_table(dir.path(), "empty.csv").unwrap_err();
        assert!(matches!(err, LoadError::EmptyData));
    }

    #[test]
    fn blank_lines_only_is_empty_data() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "blank.csv", "\n\n\n");

        let err = load_table(dir.path(), "blank.csv").unwrap_err();
        assert!(matches!(err, LoadError::EmptyData));
    }

    #[test]
    fn quoted_empty_header_becomes_unnamed() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "q.csv", "\"\"\n1\n2\n");

        let table = load_table(dir.path(), "q.csv").unwrap();
        assert_eq!(table.column_names(), ["Unnamed: 0"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn header_only_file_loads_without_rows() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "h.csv", "month,revenue\n");

        let table = load_table(dir.path(), "h.csv").unwrap();
        assert_eq!(table.column_names(), ["month", "revenue"]);
        assert!(table.is_empty());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_table(dir.path(), "gone.csv").unwrap_err();
        assert!(matches!(err, LoadError::NotFound { ref name } if name == "gone.csv"));
    }

    #[test]
    fn long_row_is_rejected_short_row_is_padded() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "short.csv", "a,b\n1\n");
        let table = load_table(dir.path(), "short.csv").unwrap();
        assert_eq!(table.rows()[0], vec![CellValue::Integer(1), CellValue::Null]);

        write(dir.path(), "long.csv", "a,b\n1,2,3\n");
        let err = load_table(dir.path(), "long.csv").unwrap_err();
        assert!(matches!(
            err,
            LoadError::RaggedRow {
                expected: 2,
                found: 3,
                ..
            }
        ));
    }

    #[test]
    fn duplicate_headers_are_mangled() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "dup.csv", "x,x,\n1,2,3\n");

        let table = load_table(dir.path(), "dup.csv").unwrap();
        assert_eq!(table.column_names(), ["x", "x.1", "Unnamed: 2"]);
    }
}
