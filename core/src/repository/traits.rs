use crate::model::record::ForecastRecord;
use anyhow::Result;

/// Seam to the record supply. The engine itself never fetches; the CLI
/// plugs in the file-backed impl and tests plug in mocks.
pub trait ForecastRecordRepository {
    fn list(&self) -> Result<Vec<ForecastRecord>>;
}
