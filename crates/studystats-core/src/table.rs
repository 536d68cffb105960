//! Tabular helpers for JSON records returned by web APIs.
//!
//! A [`Table`] keeps an ordered list of columns and one row of
//! `serde_json::Value` cells per record. Missing cells are `null`.

use serde_json::{Map, Value};

use crate::error::TableError;

/// Rows returned by [`Table::head_as_records`] when no count is given.
pub const DEFAULT_HEAD_ROWS: usize = 5;

/// Column used for records that are not JSON objects.
pub const VALUE_COLUMN: &str = "value";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

/// Borrowed view of one row, used by [`Table::filter_rows`].
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    columns: &'a [String],
    cells: &'a [Value],
}

impl<'a> Row<'a> {
    pub fn get(&self, column: &str) -> Option<&'a Value> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.cells.get(idx)
    }
}

impl Table {
    /// Convert API records into a table.
    ///
    /// A single object becomes a one-row table. Arrays contribute one row
    /// per element. Anything else is wrapped into a single `value` column.
    pub fn from_records(records: &Value) -> Self {
        let wrapped;
        let items: &[Value] = match records {
            Value::Array(items) => items,
            other => {
                wrapped = [other.clone()];
                &wrapped
            }
        };

        let mut columns: Vec<String> = Vec::new();
        let mut objects: Vec<Map<String, Value>> = Vec::with_capacity(items.len());
        for item in items {
            let object = match item {
                Value::Object(map) => map.clone(),
                scalar => {
                    let mut map = Map::new();
                    map.insert(VALUE_COLUMN.to_string(), scalar.clone());
                    map
                }
            };
            for key in object.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
            objects.push(object);
        }

        let rows = objects
            .iter()
            .map(|object| {
                columns
                    .iter()
                    .map(|c| object.get(c).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(move |cells| Row {
            columns: &self.columns,
            cells: cells.as_slice(),
        })
    }

    /// New table with only `columns`, in the given order.
    ///
    /// # Errors
    ///
    /// [`TableError::MissingColumn`] for the first column not present.
    pub fn select_columns(&self, columns: &[&str]) -> Result<Table, TableError> {
        let indices = columns
            .iter()
            .map(|name| {
                self.columns
                    .iter()
                    .position(|c| c == name)
                    .ok_or_else(|| TableError::MissingColumn(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Table {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
                .collect(),
        })
    }

    /// New table keeping the rows for which `predicate` returns true.
    pub fn filter_rows<F>(&self, predicate: F) -> Table
    where
        F: Fn(&Row<'_>) -> bool,
    {
        Table {
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .filter(|cells| {
                    predicate(&Row {
                        columns: &self.columns,
                        cells: cells.as_slice(),
                    })
                })
                .cloned()
                .collect(),
        }
    }

    /// New table with the first `n` rows.
    pub fn head(&self, n: usize) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// First `n` rows as JSON objects keyed by column.
    pub fn head_as_records(&self, n: usize) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .take(n)
            .map(|cells| {
                self.columns
                    .iter()
                    .cloned()
                    .zip(cells.iter().cloned())
                    .collect()
            })
            .collect()
    }

    /// Plain-text table with left-aligned, space-padded columns.
    pub fn render(&self) -> String {
        if self.columns.is_empty() {
            return "No data available.\n".to_string();
        }

        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(display_cell).collect())
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, name)| {
                cells
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let format_line = |values: &[String]| -> String {
            values
                .iter()
                .zip(&widths)
                .map(|(v, w)| format!("{:<width$}", v, width = *w))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut output = String::new();
        output.push_str(&format_line(self.columns.as_slice()));
        output.push('\n');
        let rule_len = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        output.push_str(&"-".repeat(rule_len));
        output.push('\n');
        for row in &cells {
            output.push_str(&format_line(row.as_slice()));
            output.push('\n');
        }
        output
    }
}

fn display_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn posts() -> Value {
        json!([
            {"userId": 1, "id": 1, "title": "alpha"},
            {"userId": 1, "id": 2, "title": "beta"},
            {"userId": 2, "id": 3, "title": "gamma", "draft": true},
        ])
    }

    #[test]
    fn from_records_collects_columns_in_first_seen_order() {
        let table = Table::from_records(&posts());
        assert_eq!(table.columns(), ["userId", "id", "title", "draft"]);
        assert_eq!(table.len(), 3);
        let first = table.rows().next().unwrap();
        assert_eq!(first.get("draft"), Some(&Value::Null));
    }

    #[test]
    fn from_records_wraps_single_object() {
        let table = Table::from_records(&json!({"id": 7, "name": "x"}));
        assert_eq!(table.len(), 1);
        assert_eq!(table.columns(), ["id", "name"]);
    }

    #[test]
    fn from_records_wraps_scalars() {
        let table = Table::from_records(&json!("plain text"));
        assert_eq!(table.columns(), [VALUE_COLUMN]);
        assert_eq!(table.rows().next().unwrap().get(VALUE_COLUMN), Some(&json!("plain text")));

        let table = Table::from_records(&json!([1, 2, 3]));
        assert_eq!(table.len(), 3);
        assert_eq!(table.columns(), [VALUE_COLUMN]);
    }

    #[test]
    fn from_records_empty_array() {
        let table = Table::from_records(&json!([]));
        assert!(table.is_empty());
        assert!(table.columns().is_empty());
        assert_eq!(table.render(), "No data available.\n");
    }

    #[test]
    fn select_columns_reorders() {
        let table = Table::from_records(&posts()).select_columns(&["title", "id"]).unwrap();
        assert_eq!(table.columns(), ["title", "id"]);
        assert_eq!(
            table.head_as_records(1)[0],
            json!({"title": "alpha", "id": 1}).as_object().unwrap().clone()
        );
    }

    #[test]
    fn select_columns_missing() {
        let err = Table::from_records(&posts()).select_columns(&["id", "body"]).unwrap_err();
        assert_eq!(err, TableError::MissingColumn("body".to_string()));
    }

    #[test]
    fn filter_rows_by_predicate() {
        let table = Table::from_records(&posts())
            .filter_rows(|row| row.get("userId") == Some(&json!(1)));
        assert_eq!(table.len(), 2);
        assert_eq!(table.columns().len(), 4);
    }

    #[test]
    fn head_as_records_limits_rows() {
        let table = Table::from_records(&posts());
        assert_eq!(table.head_as_records(2).len(), 2);
        assert_eq!(table.head_as_records(DEFAULT_HEAD_ROWS).len(), 3);
        assert!(table.head_as_records(0).is_empty());
        assert_eq!(table.head(1).len(), 1);
        assert_eq!(table.head(0).columns().len(), 4);
    }

    #[test]
    fn render_aligns_columns() {
        let table = Table::from_records(&json!([
            {"id": 1, "title": "alpha"},
            {"id": 22, "title": "b"},
        ]));
        let expected = "id  title\n---------\n1   alpha\n22  b\n";
        assert_eq!(table.render(), expected);
    }
}
