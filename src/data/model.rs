use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};

// ---------------------------------------------------------------------------
// CellValue – a single cell of a loaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common dataframe dtypes.
/// Used as a grouping key downstream, so `CellValue` must be `Ord` and `Hash`.
#[derive(Debug, Clone)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl CellValue {
    /// Sort position of the variant: nulls first, text last.
    fn rank(&self) -> u8 {
        match self {
            CellValue::Null => 0,
            CellValue::Bool(_) => 1,
            CellValue::Integer(_) => 2,
            CellValue::Float(_) => 3,
            CellValue::String(_) => 4,
        }
    }
}

// Floats compare by `total_cmp`, which agrees with hashing their bits.
impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::Integer(a), CellValue::Integer(b)) => a.cmp(b),
            (CellValue::Float(a), CellValue::Float(b)) => a.total_cmp(b),
            (CellValue::String(a), CellValue::String(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for CellValue {}

impl Hash for CellValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            CellValue::Bool(b) => b.hash(state),
            CellValue::Integer(i) => i.hash(state),
            CellValue::Float(f) => f.to_bits().hash(state),
            CellValue::String(s) => s.hash(state),
            CellValue::Null => {}
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) if v.fract() == 0.0 && v.abs() < 1e15 => write!(f, "{v:.1}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(true) => write!(f, "True"),
            CellValue::Bool(false) => write!(f, "False"),
            CellValue::Null => write!(f, "NaN"),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64` for numeric axes.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Float(v) => v.is_nan(),
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Table – the complete loaded file
// ---------------------------------------------------------------------------

/// A loaded CSV file: unique column names, typed rows and a name → index lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
    index: HashMap<String, usize>,
}

/// Borrowed view of one column of a [`Table`].
#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    table: &'a Table,
    position: usize,
}

impl Table {
    /// Build a table from raw header names and rows.
    ///
    /// Header names are made unique, rows are padded to the header width and
    /// columns mixing integers and floats are promoted to floats.
    pub fn new(header: Vec<String>, mut rows: Vec<Vec<CellValue>>) -> Self {
        let columns = unique_column_names(header);
        let width = columns.len();

        for row in &mut rows {
            row.resize(width, CellValue::Null);
        }

        for col in 0..width {
            let has_float = rows.iter().any(|r| matches!(r[col], CellValue::Float(_)));
            let has_int = rows.iter().any(|r| matches!(r[col], CellValue::Integer(_)));
            if has_float && has_int {
                for row in &mut rows {
                    if let CellValue::Integer(i) = row[col] {
                        row[col] = CellValue::Float(i as f64);
                    }
                }
            }
        }

        let index = columns
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();

        Table {
            columns,
            rows,
            index,
        }
    }

    /// Ordered column names.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// The first `n` rows.
    pub fn head(&self, n: usize) -> &[Vec<CellValue>] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Look up a column by name; `None` if the table has no such column.
    pub fn column(&self, name: &str) -> Option<Column<'_>> {
        self.index.get(name).map(|&position| Column {
            table: self,
            position,
        })
    }
}

impl<'a> Column<'a> {
    pub fn name(&self) -> &'a str {
        let table = self.table;
        &table.columns[self.position]
    }

    /// Cell values top to bottom, nulls included.
    pub fn values(&self) -> impl Iterator<Item = &'a CellValue> + 'a {
        let table = self.table;
        let position = self.position;
        table.rows.iter().map(move |row| &row[position])
    }

    /// A column is numeric when every non-null cell is an integer or a float.
    pub fn is_numeric(&self) -> bool {
        self.values()
            .filter(|v| !v.is_null())
            .all(|v| v.as_f64().is_some())
    }
}

/// Replace blank names with `Unnamed: <index>` and suffix duplicates with
/// `.1`, `.2`, … until every name is unique.
pub fn unique_column_names(header: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut out = Vec::with_capacity(header.len());

    for (i, raw) in header.into_iter().enumerate() {
        let base = if raw.trim().is_empty() {
            format!("Unnamed: {i}")
        } else {
            raw
        };

        let mut name = base.clone();
        if seen.contains(&name) {
            let counter = counts.entry(base.clone()).or_insert(0);
            loop {
                *counter += 1;
                name = format!("{base}.{counter}");
                if !seen.contains(&name) {
                    break;
                }
            }
        }
        seen.insert(name.clone());
        out.push(name);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> Vec<String> {
        unique_column_names(raw.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn duplicate_names_get_suffixes() {
        assert_eq!(names(&["a", "a", "b", "a"]), vec!["a", "a.1", "b", "a.2"]);
    }

    #[test]
    fn suffix_skips_existing_names() {
        assert_eq!(names(&["a", "a.1", "a"]), vec!["a", "a.1", "a.2"]);
    }

    #[test]
    fn blank_names_become_unnamed() {
        assert_eq!(names(&["", "x", " "]), vec!["Unnamed: 0", "x", "Unnamed: 2"]);
    }

    #[test]
    fn short_rows_are_padded_and_mixed_numbers_promoted() {
        let table = Table::new(
            vec!["a".into(), "b".into()],
            vec![
                vec![CellValue::Integer(1), CellValue::Float(0.5)],
                vec![CellValue::Float(2.5)],
            ],
        );
        assert_eq!(table.rows()[1], vec![CellValue::Float(2.5), CellValue::Null]);
        assert_eq!(table.rows()[0][0], CellValue::Float(1.0));
        assert!(table.column("a").unwrap().is_numeric());
        assert!(table.column("missing").is_none());
    }

    #[test]
    fn values_order_by_kind_then_value() {
        let mut values = vec![
            CellValue::String("b".into()),
            CellValue::Float(0.5),
            CellValue::Null,
            CellValue::Integer(3),
            CellValue::String("a".into()),
            CellValue::Bool(true),
        ];
        values.sort();
        assert_eq!(
            values,
            vec![
                CellValue::Null,
                CellValue::Bool(true),
                CellValue::Integer(3),
                CellValue::Float(0.5),
                CellValue::String("a".into()),
                CellValue::String("b".into()),
            ]
        );
        assert_ne!(CellValue::Integer(1), CellValue::Float(1.0));
    }

    #[test]
    fn head_caps_at_row_count() {
        let rows = (0..3).map(|i| vec![CellValue::Integer(i)]).collect();
        let table = Table::new(vec!["n".into()], rows);
        assert_eq!(table.head(5).len(), 3);
        assert_eq!(table.head(2).len(), 2);
    }

    #[test]
    fn string_column_is_not_numeric() {
        let table = Table::new(
            vec!["s".into()],
            vec![
                vec![CellValue::String("x".into())],
                vec![CellValue::Null],
            ],
        );
        assert!(!table.column("s").unwrap().is_numeric());
    }
}
