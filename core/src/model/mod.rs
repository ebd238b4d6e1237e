pub mod bucket;
pub mod record;

pub use bucket::{AggregationMonth, DekadBucket, MonthlyBucket};
pub use record::ForecastRecord;
