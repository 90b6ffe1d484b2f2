//! Data
//!
//! In-memory table of categorical records. A row maps attribute names to
//! values; subsets of a table are tracked as ordered vectors of row indices.
use crate::errors::TreeError;
use crate::utils::validate_float_parameter;
use hashbrown::HashMap;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// A single record, attribute name to categorical value.
pub type Row = HashMap<String, String>;

/// Ordered collection of rows sharing a set of named columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Column names, in the order they were declared.
    pub columns: Vec<String>,
    /// The records of the table.
    pub rows: Vec<Row>,
}

impl Table {
    /// Create an empty table with the given columns.
    pub fn new(columns: Vec<String>) -> Self {
        Table {
            columns,
            rows: Vec::new(),
        }
    }

    /// Create a table from already built rows.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Table { columns, rows }
    }

    /// Create a table from positional records, each record holding one value
    /// per column.
    ///
    /// * `columns` - Column names.
    /// * `records` - Values, in column order.
    pub fn from_records(columns: &[&str], records: &[Vec<&str>]) -> Result<Self, TreeError> {
        let mut table = Table::new(columns.iter().map(|c| c.to_string()).collect());
        for record in records {
            table.push(record.iter().map(|v| v.to_string()).collect())?;
        }
        Ok(table)
    }

    /// Append a positional record to the table.
    pub fn push(&mut self, values: Vec<String>) -> Result<(), TreeError> {
        if values.len() != self.columns.len() {
            return Err(TreeError::InvalidParameter(
                "values".to_string(),
                format!("{} values", self.columns.len()),
                values.len().to_string(),
            ));
        }
        let row: Row = self.columns.iter().cloned().zip(values).collect();
        self.rows.push(row);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index covering every row of the table.
    pub fn index(&self) -> Vec<usize> {
        (0..self.rows.len()).collect()
    }

    pub fn has_column(&self, attribute: &str) -> bool {
        self.columns.iter().any(|c| c == attribute)
    }

    /// Fail with `UnknownAttribute` unless `attribute` is a column.
    pub fn check_column(&self, attribute: &str) -> Result<(), TreeError> {
        if self.has_column(attribute) {
            Ok(())
        } else {
            Err(TreeError::UnknownAttribute(attribute.to_string()))
        }
    }

    /// Get the value of an attribute for a given row.
    pub fn value(&self, row: usize, attribute: &str) -> Result<&str, TreeError> {
        self.rows
            .get(row)
            .and_then(|r| r.get(attribute))
            .map(String::as_str)
            .ok_or_else(|| TreeError::MissingValue {
                row,
                attribute: attribute.to_string(),
            })
    }

    /// All values of a column, in row order.
    pub fn column(&self, attribute: &str) -> Result<Vec<&str>, TreeError> {
        self.check_column(attribute)?;
        (0..self.rows.len()).map(|i| self.value(i, attribute)).collect()
    }

    /// Split the rows of `index` by the value they hold for `attribute`.
    ///
    /// Partitions are returned in the order their value first appears, and
    /// every row keeps its relative order within its partition.
    pub fn partition(&self, index: &[usize], attribute: &str) -> Result<Vec<(String, Vec<usize>)>, TreeError> {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut parts: Vec<(String, Vec<usize>)> = Vec::new();
        for &i in index {
            let v = self.value(i, attribute)?;
            match positions.get(v) {
                Some(&p) => parts[p].1.push(i),
                None => {
                    positions.insert(v, parts.len());
                    parts.push((v.to_string(), vec![i]));
                }
            }
        }
        Ok(parts)
    }

    /// Shuffle the rows with a seeded generator and hold out a fraction of them.
    ///
    /// Returns `(train, test)`, where `test` holds `round(len * test_fraction)` rows.
    pub fn train_test_split(&self, test_fraction: f64, seed: u64) -> Result<(Table, Table), TreeError> {
        validate_float_parameter(test_fraction, 0.0, 1.0, "test_fraction")?;
        let mut rng = StdRng::seed_from_u64(seed);
        let mut index = self.index();
        index.shuffle(&mut rng);
        let n_test = (self.len() as f64 * test_fraction).round() as usize;
        let (test_idx, train_idx) = index.split_at(n_test);
        let select = |idx: &[usize]| Table {
            columns: self.columns.clone(),
            rows: idx.iter().map(|&i| self.rows[i].clone()).collect(),
        };
        Ok((select(train_idx), select(test_idx)))
    }
}
