use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A roll-up target month. `month0` is 0-based to line up with
/// `Datelike::month0`; labels use the 1-based human number.
/// "No target period" is expressed as `Option<AggregationMonth>::None`
/// by the aggregators, not by a sentinel value here.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationMonth {
    pub year: i32,
    pub month0: u32,
}

impl AggregationMonth {
    pub fn new(year: i32, month0: u32) -> Self {
        Self { year, month0 }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    /// The next calendar month, rolling December into January.
    pub fn succ(self) -> Self {
        if self.month0 == 11 {
            Self {
                year: self.year + 1,
                month0: 0,
            }
        } else {
            Self {
                year: self.year,
                month0: self.month0 + 1,
            }
        }
    }

    /// 1-based month number for labels.
    pub fn month_number(self) -> u32 {
        self.month0 + 1
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month0
    }
}

/// One ten-day bucket of a roll-up month. Always produced in threes,
/// 上旬 / 中旬 / 下旬, never individually.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DekadBucket {
    pub label: String,
    pub total: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MonthlyBucket {
    pub label: String,
    pub total: i64,
}
