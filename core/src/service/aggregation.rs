use chrono::{Datelike, NaiveDate};

use crate::model::bucket::{AggregationMonth, DekadBucket, MonthlyBucket};
use crate::series::SparseSeries;
use crate::time;

const DEKAD_NAMES: [&str; 3] = ["上旬", "中旬", "下旬"];

/// The dekad boundaries are fixed at day 10 and day 20 regardless of
/// month length; the third dekad simply absorbs days 21 to the end.
fn dekad_index(day: u32) -> usize {
    if day <= 10 {
        0
    } else if day <= 20 {
        1
    } else {
        2
    }
}

fn finite_or_zero(quantity: f64) -> f64 {
    if quantity.is_finite() {
        quantity
    } else {
        0.0
    }
}

/// Ten-day roll-up of `series` for one target month.
///
/// `None` means "no target period defined" and yields an empty vec; a
/// defined month always yields exactly three buckets, all zero for an
/// empty series. Sums accumulate unrounded and each bucket is rounded
/// once at emission, so fractional quantities never lose precision
/// entry by entry.
pub fn aggregate_dekads(
    series: &SparseSeries,
    month: Option<AggregationMonth>,
) -> Vec<DekadBucket> {
    let Some(month) = month else {
        return Vec::new();
    };

    let mut sums = [0.0f64; 3];
    for (key, quantity) in series.iter() {
        let Some(date) = time::parse_date_key(key) else {
            continue;
        };
        if !month.contains(date) {
            continue;
        }
        sums[dekad_index(date.day())] += finite_or_zero(quantity);
    }

    sums.iter()
        .zip(DEKAD_NAMES)
        .map(|(sum, name)| DekadBucket {
            label: format!("{}月 {}", month.month_number(), name),
            total: sum.round() as i64,
        })
        .collect()
}

/// Whole-month roll-up. Same month-membership and round-once rules as
/// the dekad roll-up, collapsed into a single bucket.
pub fn aggregate_month(
    series: &SparseSeries,
    month: Option<AggregationMonth>,
) -> Option<MonthlyBucket> {
    let month = month?;

    let mut sum = 0.0f64;
    for (key, quantity) in series.iter() {
        let Some(date) = time::parse_date_key(key) else {
            continue;
        };
        if !month.contains(date) {
            continue;
        }
        sum += finite_or_zero(quantity);
    }

    Some(MonthlyBucket {
        label: format!("{}年{}月", month.year, month.month_number()),
        total: sum.round() as i64,
    })
}

/// Grand total over an explicit day list, usually every day of the
/// displayed month. Absent and non-finite values count as 0; the sum is
/// rounded once at the end.
pub fn daily_total(days: &[NaiveDate], series: &SparseSeries) -> i64 {
    let mut sum = 0.0f64;
    for day in days {
        if let Some(quantity) = series.get(&time::date_key(*day)) {
            sum += finite_or_zero(quantity);
        }
    }
    sum.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::ForecastRecord;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn series_of(entries: &[(i32, u32, u32, f64)]) -> SparseSeries {
        let records: Vec<ForecastRecord> = entries
            .iter()
            .map(|&(y, m, d, q)| ForecastRecord::new(date(y, m, d), q, "kg"))
            .collect();
        SparseSeries::from_records(&records)
    }

    #[test]
    fn test_dekads_none_month_is_empty() {
        let series = series_of(&[(2025, 6, 1, 10.0)]);
        assert!(aggregate_dekads(&series, None).is_empty());
    }

    #[test]
    fn test_dekads_empty_series_gives_three_zero_buckets() {
        let buckets = aggregate_dekads(&SparseSeries::default(), Some(AggregationMonth::new(2025, 5)));
        assert_eq!(buckets.len(), 3);
        assert!(buckets.iter().all(|b| b.total == 0));
        assert_eq!(buckets[0].label, "6月 上旬");
        assert_eq!(buckets[1].label, "6月 中旬");
        assert_eq!(buckets[2].label, "6月 下旬");
    }

    #[test]
    fn test_dekads_golden_june_2025() {
        let series = series_of(&[
            (2025, 6, 1, 10.0),
            (2025, 6, 5, 20.0),
            (2025, 6, 10, 30.0),
            (2025, 6, 15, 40.0),
            (2025, 6, 20, 50.0),
            (2025, 6, 25, 60.0),
            (2025, 6, 30, 70.0),
        ]);
        let buckets = aggregate_dekads(&series, Some(AggregationMonth::new(2025, 5)));
        assert_eq!(
            buckets,
            vec![
                DekadBucket { label: "6月 上旬".to_string(), total: 60 },
                DekadBucket { label: "6月 中旬".to_string(), total: 90 },
                DekadBucket { label: "6月 下旬".to_string(), total: 130 },
            ]
        );
    }

    #[test]
    fn test_dekads_exclude_other_months_and_years() {
        let series = series_of(&[
            (2025, 6, 1, 10.0),
            (2025, 7, 1, 100.0),
            (2024, 6, 1, 100.0),
        ]);
        let buckets = aggregate_dekads(&series, Some(AggregationMonth::new(2025, 5)));
        assert_eq!(buckets[0].total, 10);
        assert_eq!(buckets[1].total, 0);
        assert_eq!(buckets[2].total, 0);
    }

    #[test]
    fn test_dekads_round_once_at_emission() {
        // Three entries of 10.4 in the first dekad: round(31.2) = 31,
        // not round(10.4) * 3 = 30.
        let series = series_of(&[
            (2025, 6, 1, 10.4),
            (2025, 6, 2, 10.4),
            (2025, 6, 3, 10.4),
        ]);
        let buckets = aggregate_dekads(&series, Some(AggregationMonth::new(2025, 5)));
        assert_eq!(buckets[0].total, 31);
    }

    #[test]
    fn test_dekad_boundaries() {
        let series = series_of(&[
            (2025, 6, 10, 1.0),
            (2025, 6, 11, 2.0),
            (2025, 6, 20, 4.0),
            (2025, 6, 21, 8.0),
        ]);
        let buckets = aggregate_dekads(&series, Some(AggregationMonth::new(2025, 5)));
        assert_eq!(buckets[0].total, 1);
        assert_eq!(buckets[1].total, 6);
        assert_eq!(buckets[2].total, 8);
    }

    #[test]
    fn test_monthly_none_month_is_none() {
        let series = series_of(&[(2025, 6, 1, 10.0)]);
        assert_eq!(aggregate_month(&series, None), None);
    }

    #[test]
    fn test_monthly_golden_june_2025() {
        let series = series_of(&[
            (2025, 6, 1, 100.0),
            (2025, 6, 15, 200.0),
            (2025, 6, 30, 300.0),
            (2025, 7, 1, 200.0),
        ]);
        let bucket = aggregate_month(&series, Some(AggregationMonth::new(2025, 5))).unwrap();
        assert_eq!(bucket.label, "2025年6月");
        assert_eq!(bucket.total, 600);
    }

    #[test]
    fn test_monthly_empty_series_is_zero_bucket() {
        let bucket =
            aggregate_month(&SparseSeries::default(), Some(AggregationMonth::new(2026, 0))).unwrap();
        assert_eq!(bucket.label, "2026年1月");
        assert_eq!(bucket.total, 0);
    }

    #[test]
    fn test_daily_total_golden() {
        let series = series_of(&[(2025, 6, 1, 10.5), (2025, 6, 2, 10.5)]);
        let days = [date(2025, 6, 1), date(2025, 6, 2)];
        assert_eq!(daily_total(&days, &series), 21);
    }

    #[test]
    fn test_daily_total_absent_days_count_as_zero() {
        let series = series_of(&[(2025, 6, 1, 10.0)]);
        let days = time::month_days(date(2025, 6, 1));
        assert_eq!(daily_total(&days, &series), 10);
    }

    #[test]
    fn test_daily_total_non_finite_stored_values_count_as_zero() {
        let mut series = series_of(&[(2025, 6, 1, 10.0)]);
        series.insert("2025-06-02".to_string(), f64::NAN);
        series.insert("2025-06-03".to_string(), f64::INFINITY);
        let days = [date(2025, 6, 1), date(2025, 6, 2), date(2025, 6, 3)];
        assert_eq!(daily_total(&days, &series), 10);
    }

    #[test]
    fn test_daily_total_rounds_once() {
        let series = series_of(&[
            (2025, 6, 1, 10.4),
            (2025, 6, 2, 10.4),
            (2025, 6, 3, 10.4),
        ]);
        let days = [date(2025, 6, 1), date(2025, 6, 2), date(2025, 6, 3)];
        assert_eq!(daily_total(&days, &series), 31);
    }

    #[test]
    fn test_non_date_keys_are_skipped() {
        let mut series = SparseSeries::default();
        series.insert("garbage".to_string(), 100.0);
        series.insert("2025-06-01".to_string(), 10.0);
        let buckets = aggregate_dekads(&series, Some(AggregationMonth::new(2025, 5)));
        assert_eq!(buckets[0].total, 10);
        let bucket = aggregate_month(&series, Some(AggregationMonth::new(2025, 5))).unwrap();
        assert_eq!(bucket.total, 10);
    }
}
