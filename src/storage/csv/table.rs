//! # CSV Table
//!
//! [`Table`] backed by a single CSV file. Row 1 of the file is the header,
//! matching the workbook convention, so `update_cell(2, ..)` touches the
//! first data row. Reads and writes go through the `csv` crate in flexible
//! mode: sheets maintained by hand can carry ragged rows, and those must
//! load rather than fail.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use csv::{ReaderBuilder, WriterBuilder};
use log::info;

use crate::storage::traits::Table;

/// One workbook table stored as a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvTable {
    name: String,
    path: PathBuf,
}

impl CsvTable {
    pub(crate) fn new(name: &str, path: PathBuf) -> Self {
        CsvTable {
            name: name.to_string(),
            path,
        }
    }

    /// Every row in the file, header included.
    fn read_raw(&self) -> Result<Vec<Vec<String>>> {
        let file = File::open(&self.path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }
        Ok(rows)
    }

    /// Rewrite the whole file from the given rows.
    fn write_raw(&self, rows: &[Vec<String>]) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = WriterBuilder::new()
            .flexible(true)
            .from_writer(BufWriter::new(file));

        for row in rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Create the file with `headers` if it is missing, or replace a first
    /// row that does not start with `headers`. Extra trailing header columns
    /// are tolerated. Returns `true` when the file was created or repaired.
    pub(crate) fn ensure_header(&self, headers: &[&str]) -> Result<bool> {
        let header_row: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

        if !self.path.exists() {
            self.write_raw(&[header_row])?;
            info!("created table '{}' at {:?}", self.name, self.path);
            return Ok(true);
        }

        let mut rows = self.read_raw()?;
        let header_ok = rows.first().map_or(false, |first| {
            first
                .iter()
                .map(String::as_str)
                .take(headers.len())
                .eq(headers.iter().copied())
        });
        if header_ok {
            return Ok(false);
        }

        if rows.is_empty() {
            rows.push(header_row);
        } else {
            rows[0] = header_row;
        }
        self.write_raw(&rows)?;
        info!("repaired header of table '{}'", self.name);
        Ok(true)
    }
}

impl Table for CsvTable {
    fn read_all(&self) -> Result<Vec<Vec<String>>> {
        let mut rows = self.read_raw()?;
        if !rows.is_empty() {
            rows.remove(0);
        }
        Ok(rows)
    }

    fn append_row(&self, row: &[String]) -> Result<()> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = WriterBuilder::new()
            .flexible(true)
            .from_writer(BufWriter::new(file));

        writer.write_record(row)?;
        writer.flush()?;
        Ok(())
    }

    fn update_cell(&self, row: u32, col: u32, value: &str) -> Result<()> {
        if row == 0 || col == 0 {
            return Err(anyhow!(
                "cell reference ({}, {}) is invalid: rows and columns are 1-based",
                row,
                col
            ));
        }

        let mut rows = self.read_raw()?;
        let row_index = (row - 1) as usize;
        let cells = rows.get_mut(row_index).ok_or_else(|| {
            anyhow!("row {} is out of range for table '{}'", row, self.name)
        })?;

        // Pad short rows so any column inside the sheet width can be set.
        let col_index = (col - 1) as usize;
        while cells.len() <= col_index {
            cells.push(String::new());
        }
        cells[col_index] = value.to_string();

        self.write_raw(&rows)
    }
}
