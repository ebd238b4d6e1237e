use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::model::record::ForecastRecord;
use crate::repository::traits::ForecastRecordRepository;

/// Reads a forecast record group from a JSON array file. Read-only: the
/// engine is a display calculation, so there is no write path.
#[derive(Clone)]
pub struct FileForecastRepository {
    file_path: PathBuf,
}

impl FileForecastRepository {
    pub fn new(file_path: PathBuf) -> Result<Self> {
        if !file_path.exists() {
            return Err(anyhow!(
                "Forecast record file not found: {}",
                file_path.display()
            ));
        }
        Ok(FileForecastRepository { file_path })
    }

    fn read_records(&self) -> Result<Vec<ForecastRecord>> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let records = serde_json::from_reader(reader)?;
        Ok(records)
    }
}

impl ForecastRecordRepository for FileForecastRepository {
    fn list(&self) -> Result<Vec<ForecastRecord>> {
        self.read_records()
    }
}
