use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::bucket::{AggregationMonth, DekadBucket, MonthlyBucket};
use crate::series::SparseSeries;
use crate::time;

/// One calendar-grid cell, flattened for display. `quantity` is `None`
/// for days with no record, which the presentation layer renders
/// differently from an explicit zero.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DayEntry {
    pub date: String,        // YYYY-MM-DD
    pub day_of_week: String, // Mon, Tue...
    pub quantity: Option<f64>,
}

impl DayEntry {
    pub fn from_parts(day: NaiveDate, series: &SparseSeries) -> Self {
        let key = time::date_key(day);
        let quantity = series.get(&key);
        Self {
            date: key,
            day_of_week: day.format("%a").to_string(),
            quantity,
        }
    }
}

/// The complete forecast detail view: the displayed month day by day,
/// plus the two look-ahead roll-ups. Recomputed from scratch on every
/// input change; nothing here is cached.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ForecastView {
    pub unit: String,
    pub target_month: AggregationMonth,
    pub days: Vec<DayEntry>,
    pub daily_total: i64,
    pub dekad_buckets: Vec<DekadBucket>,
    pub monthly_bucket: Option<MonthlyBucket>,
}
