pub mod model;
pub mod repository;
pub mod series;
pub mod service;
pub mod time;
pub mod usecase;

pub use model::bucket::{AggregationMonth, DekadBucket, MonthlyBucket};
pub use model::record::ForecastRecord;
pub use repository::{FileForecastRepository, ForecastRecordRepository};
pub use series::SparseSeries;
pub use service::aggregation::{aggregate_dekads, aggregate_month, daily_total};
pub use service::dto::{DayEntry, ForecastView};
pub use usecase::forecast_view::{build_forecast_view, derive_aggregation_months};
