use std::collections::HashMap;

use crate::model::record::ForecastRecord;
use crate::time;

/// Date-keyed quantity lookup, "sparse" because not every calendar day
/// has a record. Built fresh from the raw record list on every
/// recomputation and discarded afterwards; it is a derived view, not a
/// store of record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseSeries {
    entries: HashMap<String, f64>,
}

impl SparseSeries {
    /// Single pass over the records. Duplicate dates are a data-quality
    /// issue upstream; the later record wins here, unvalidated.
    pub fn from_records(records: &[ForecastRecord]) -> Self {
        let mut series = Self::default();
        for record in records {
            series.insert(time::date_key(record.date), record.quantity);
        }
        series
    }

    /// Raw insert under an arbitrary key. Stored values are not
    /// validated; the aggregators treat anything non-finite as 0.
    pub fn insert(&mut self, key: String, quantity: f64) {
        self.entries.insert(key, quantity);
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, f64)> {
        self.entries.iter().map(|(key, quantity)| (key, *quantity))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
