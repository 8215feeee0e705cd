use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::storage::traits::Connection;

/// Storage key for the trip collection
pub const TRIPS_KEY: &str = "travel-trips";

/// Storage key for the expense collection
pub const EXPENSES_KEY: &str = "travel-expenses";

/// JsonConnection manages the data directory and exposes a small key-value
/// contract over it: one JSON document per key, replaced whole on every
/// write.
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a new JSON connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a new JSON connection in the default data directory
    /// (the user's Documents folder under "Wanderlust")
    pub fn new_default() -> Result<Self> {
        let documents_dir = dirs::document_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join("Documents")))
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

        let data_dir = documents_dir.join("Wanderlust");
        info!("Using data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    /// Get the file path backing a storage key
    pub fn store_file_path(&self, key: &str) -> PathBuf {
        self.base_directory.join(format!("{}.json", key))
    }

    /// Read the raw value stored under a key. Returns `None` when no value
    /// has ever been written.
    pub fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let file_path = self.store_file_path(key);
        if !file_path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read(&file_path)?))
    }

    /// Replace the value stored under a key. The write goes through a
    /// temporary file and a rename so readers never observe a partial value.
    pub fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let file_path = self.store_file_path(key);
        let temp_path = file_path.with_extension("tmp");

        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &file_path)?;

        Ok(())
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }
}

impl Connection for JsonConnection {
    type TripRepository = super::trip_repository::TripRepository;
    type ExpenseRepository = super::expense_repository::ExpenseRepository;

    fn create_trip_repository(&self) -> Self::TripRepository {
        super::trip_repository::TripRepository::new(self.clone())
    }

    fn create_expense_repository(&self) -> Self::ExpenseRepository {
        super::expense_repository::ExpenseRepository::new(self.clone())
    }
}
