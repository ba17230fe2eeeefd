//! CSV ingestion into a column-addressable table.
//!
//! Training input is a delimited file with a mandatory header row. The table
//! is read eagerly; training is a one-shot offline batch job and the datasets
//! involved are small enough that streaming buys nothing.

use crate::error::{DataError, DataResult};
use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// An in-memory table of string cells with a header row.
///
/// Cells stay untyped until a consumer asks for a column as a concrete type;
/// parse failures then carry the column name and row number.
#[derive(Debug, Clone)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Read a table from a CSV file with a header row.
    pub fn from_path(path: impl AsRef<Path>) -> DataResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let table = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            rows = table.len(),
            columns = table.headers.len(),
            "Loaded training table"
        );
        Ok(table)
    }

    /// Read a table from any reader producing CSV with a header row.
    pub fn from_reader(reader: impl Read) -> DataResult<Self> {
        let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

        let headers = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(|c| c.trim().to_string()).collect());
        }

        Ok(Self { headers, rows })
    }

    /// Number of data rows (excluding the header).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The header row.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Restrict the table to exactly the given columns, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::MissingColumn`] naming the first absent column.
    pub fn select(&self, columns: &[&str]) -> DataResult<Self> {
        let mut indices = Vec::with_capacity(columns.len());
        for &name in columns {
            let idx = self
                .headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| DataError::MissingColumn(name.to_string()))?;
            indices.push(idx);
        }

        let headers = columns.iter().map(|c| c.to_string()).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect();

        Ok(Self { headers, rows })
    }

    /// A column of raw string cells.
    pub fn column(&self, name: &str) -> DataResult<Vec<&str>> {
        let idx = self
            .headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DataError::MissingColumn(name.to_string()))?;
        Ok(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    /// A column parsed as `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Parse`] for the first unparseable cell, with a
    /// 1-based data row number.
    pub fn numeric_column(&self, name: &str) -> DataResult<Vec<f64>> {
        let raw = self.column(name)?;
        raw.iter()
            .enumerate()
            .map(|(i, cell)| {
                cell.parse::<f64>()
                    .map_err(|e| DataError::parse(name, i + 1, e.to_string()))
            })
            .collect()
    }
}
