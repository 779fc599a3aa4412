//! # CSV Ledger Store
//!
//! [`LedgerStore`] implementation that keeps the workbook as a directory of
//! CSV files, one file per table. This is the deployment backend: the files
//! are plain text, so the shop can open them in any spreadsheet program and
//! the whole data directory can be backed up by copying it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use log::info;

use crate::storage::csv::table::CsvTable;
use crate::storage::traits::LedgerStore;

/// Connection to a directory-of-CSV-files workbook.
#[derive(Debug, Clone)]
pub struct CsvLedgerStore {
    base_path: PathBuf,
}

impl CsvLedgerStore {
    /// Open a store rooted at the given directory, creating it if needed.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Result<Self> {
        let base_path = base_path.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("created ledger data directory at {:?}", base_path);
        }

        Ok(CsvLedgerStore { base_path })
    }

    /// Open the default store under the user's Documents directory.
    pub fn new_default() -> Result<Self> {
        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow!("could not determine home directory"))?;

        let base_path = PathBuf::from(home_dir).join("Documents").join("AndicBlue");
        Self::new(base_path)
    }

    /// Directory holding the CSV files.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn table_path(&self, name: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", name))
    }
}

impl LedgerStore for CsvLedgerStore {
    type Table = CsvTable;

    fn ensure_table(&self, name: &str, headers: &[&str]) -> Result<CsvTable> {
        let table = CsvTable::new(name, self.table_path(name));
        table.ensure_header(headers)?;
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::traits::Table;
    use tempfile::TempDir;

    #[test]
    fn test_new_creates_base_directory() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("ledger");
        assert!(!base.exists());

        let store = CsvLedgerStore::new(&base).unwrap();
        assert!(base.exists());
        assert_eq!(store.base_path(), base.as_path());
    }

    #[test]
    fn test_ensure_table_creates_file_with_header() {
        let temp_dir = TempDir::new().unwrap();
        let store = CsvLedgerStore::new(temp_dir.path()).unwrap();

        store.ensure_table("Clientes", &["ID Cliente", "Nombre"]).unwrap();

        let contents = fs::read_to_string(temp_dir.path().join("Clientes.csv")).unwrap();
        assert_eq!(contents.lines().next().unwrap(), "ID Cliente,Nombre");
    }

    #[test]
    fn test_ensure_table_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = CsvLedgerStore::new(temp_dir.path()).unwrap();

        let table = store.ensure_table("Gastos", &["Fecha", "Concepto", "Monto"]).unwrap();
        table
            .append_row(&[
                "2026-01-05 09:00:00".to_string(),
                "Cajas".to_string(),
                "12000".to_string(),
            ])
            .unwrap();

        // A second ensure must not disturb existing rows.
        let table = store.ensure_table("Gastos", &["Fecha", "Concepto", "Monto"]).unwrap();
        let rows = table.read_all().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][1], "Cajas");
    }

    #[test]
    fn test_ensure_table_repairs_wrong_header() {
        let temp_dir = TempDir::new().unwrap();
        let store = CsvLedgerStore::new(temp_dir.path()).unwrap();

        fs::write(
            temp_dir.path().join("Inventario.csv"),
            "wrong,header\nArandanos_250g,4\n",
        )
        .unwrap();

        let table = store.ensure_table("Inventario", &["Producto", "Stock"]).unwrap();

        // Header replaced, data rows intact.
        let contents = fs::read_to_string(temp_dir.path().join("Inventario.csv")).unwrap();
        assert_eq!(contents.lines().next().unwrap(), "Producto,Stock");
        let rows = table.read_all().unwrap();
        assert_eq!(rows, vec![vec!["Arandanos_250g".to_string(), "4".to_string()]]);
    }

    #[test]
    fn test_ensure_table_accepts_extra_trailing_columns() {
        let temp_dir = TempDir::new().unwrap();
        let store = CsvLedgerStore::new(temp_dir.path()).unwrap();

        fs::write(
            temp_dir.path().join("Inventario.csv"),
            "Producto,Stock,Notas\nArandanos_250g,4,fragil\n",
        )
        .unwrap();

        let table = store.ensure_table("Inventario", &["Producto", "Stock"]).unwrap();

        // A wider header than expected is left alone.
        let contents = fs::read_to_string(temp_dir.path().join("Inventario.csv")).unwrap();
        assert_eq!(contents.lines().next().unwrap(), "Producto,Stock,Notas");
        assert_eq!(table.read_all().unwrap().len(), 1);
    }
}
