pub mod file;
pub mod traits;

// Re-export
pub use file::FileForecastRepository;
pub use traits::ForecastRecordRepository;
