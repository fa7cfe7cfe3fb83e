use rusqlite::types::ValueRef;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One cell of a query result, typed the way SQLite stored it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl CellValue {
    pub fn from_sql(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => Self::Null,
            ValueRef::Integer(value) => Self::Integer(value),
            ValueRef::Real(value) => Self::Real(value),
            ValueRef::Text(bytes) => Self::Text(String::from_utf8_lossy(bytes).into_owned()),
            ValueRef::Blob(bytes) => Self::Text(format!("<{} bytes>", bytes.len())),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Real(value) => Some(*value),
            Self::Null | Self::Text(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Real(value) => Some(*value as i64),
            Self::Null | Self::Text(_) => None,
        }
    }

    /// Equality against a selector value, which always arrives as text.
    pub fn matches_text(&self, expected: &str) -> bool {
        match self {
            Self::Text(value) => value == expected,
            Self::Integer(_) | Self::Real(_) => self.to_string() == expected,
            Self::Null => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Real(value) => {
                if value.fract() == 0.0 && value.abs() < 1e15 {
                    write!(f, "{value:.1}")
                } else {
                    write!(f, "{value}")
                }
            }
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// Ordered query result: column names as declared by the query and rows in
/// the order the store returned them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl DataTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// First cell of the first row, the shape of a `COUNT(*)` result.
    pub fn scalar(&self) -> Option<&CellValue> {
        self.rows.first().and_then(|row| row.first())
    }

    /// Sorted distinct non-null text renderings of one column.
    pub fn distinct_values(&self, name: &str) -> Vec<String> {
        let Some(index) = self.column_index(name) else {
            return Vec::new();
        };
        self.rows
            .iter()
            .filter_map(|row| row.get(index))
            .filter(|cell| !matches!(cell, CellValue::Null))
            .map(ToString::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Keeps the rows whose `name` column equals `value`. An unknown column
    /// keeps nothing.
    pub fn retain_equal(&mut self, name: &str, value: &str) {
        match self.column_index(name) {
            Some(index) => self
                .rows
                .retain(|row| row.get(index).is_some_and(|cell| cell.matches_text(value))),
            None => self.rows.clear(),
        }
    }
}
