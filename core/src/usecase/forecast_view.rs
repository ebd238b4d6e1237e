use chrono::{Local, NaiveDate};

use crate::model::bucket::AggregationMonth;
use crate::model::record::ForecastRecord;
use crate::series::SparseSeries;
use crate::service::aggregation::{aggregate_dekads, aggregate_month, daily_total};
use crate::service::dto::{DayEntry, ForecastView};
use crate::time;

/// The detail view always shows three horizons at once: the target
/// month day by day, the next month in dekads, the month after that as
/// one total. Given the first day of the target month, this returns
/// (dekad month, monthly month), rolling over year boundaries.
pub fn derive_aggregation_months(
    target_month_start: NaiveDate,
) -> (AggregationMonth, AggregationMonth) {
    let dekad_month = AggregationMonth::from_date(target_month_start).succ();
    let monthly_month = dekad_month.succ();
    (dekad_month, monthly_month)
}

/// Target-month anchor: the caller's choice if given, else the earliest
/// record's date, else today.
fn target_anchor(records: &[ForecastRecord], anchor: Option<NaiveDate>) -> NaiveDate {
    if let Some(anchor) = anchor {
        return anchor;
    }
    let mut earliest: Option<NaiveDate> = None;
    for record in records {
        match earliest {
            Some(current) if !time::is_before(record.date, current) => {}
            _ => earliest = Some(record.date),
        }
    }
    earliest.unwrap_or_else(|| Local::now().date_naive())
}

/// Assembles the whole forecast detail view from a raw record group.
/// Pure except for the today-fallback, which only fires when both the
/// anchor and the record list are empty.
pub fn build_forecast_view(records: &[ForecastRecord], anchor: Option<NaiveDate>) -> ForecastView {
    let anchor = target_anchor(records, anchor);
    let series = SparseSeries::from_records(records);
    let days = time::month_days(anchor);
    let (dekad_month, monthly_month) = derive_aggregation_months(time::first_of_month(anchor));

    // The unit is display metadata passed through untouched; the first
    // non-empty one in the group wins.
    let unit = records
        .iter()
        .map(|record| record.unit.clone())
        .find(|unit| !unit.is_empty())
        .unwrap_or_default();

    ForecastView {
        unit,
        target_month: AggregationMonth::from_date(anchor),
        daily_total: daily_total(&days, &series),
        days: days
            .iter()
            .map(|day| DayEntry::from_parts(*day, &series))
            .collect(),
        dekad_buckets: aggregate_dekads(&series, Some(dekad_month)),
        monthly_bucket: aggregate_month(&series, Some(monthly_month)),
    }
}
