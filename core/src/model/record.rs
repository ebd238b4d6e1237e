use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One raw forecast quantity for one calendar day, as supplied by the
/// surrounding data layer. Quantities arrive as JSON numbers or numeric
/// strings; anything that cannot be read as a number becomes 0 rather
/// than failing the whole load.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ForecastRecord {
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "quantity_lenient")]
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
}

impl ForecastRecord {
    pub fn new(date: NaiveDate, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            date,
            quantity,
            unit: unit.into(),
        }
    }
}

fn quantity_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(n) if n.is_finite() => n,
        Raw::Number(_) => 0.0,
        Raw::Text(s) => s.trim().parse().unwrap_or(0.0),
        Raw::Other(_) => 0.0,
    })
}
