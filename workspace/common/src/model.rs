//! Normalized weather records shared by the cache, the search slot and the UI.

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

const KELVIN_OFFSET: f64 = 273.15;

/// Convert a Kelvin reading to whole degrees Celsius.
///
/// Halves round up (towards positive infinity), so 0.5 °C shows as 1 and
/// -2.5 °C shows as -2.
pub fn kelvin_to_celsius(kelvin: f64) -> i32 {
    (kelvin - KELVIN_OFFSET + 0.5).floor() as i32
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Current conditions for one city, merged with its air-quality index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    /// Display name as returned by the weather service.
    pub name: String,
    pub temperature_kelvin: f64,
    /// Relative humidity in percent.
    pub humidity: u8,
    pub description: String,
    /// Air-quality index (1 = good .. 5 = very poor). `None` when the
    /// air-quality lookup failed after the weather lookup succeeded.
    #[serde(default)]
    pub air_quality: Option<u8>,
    pub coordinates: Coordinates,
    /// Observation time reported by the service.
    pub observed_at: DateTime<Utc>,
}

impl WeatherReport {
    pub fn temperature_celsius(&self) -> i32 {
        kelvin_to_celsius(self.temperature_kelvin)
    }

    pub fn air_quality_label(&self) -> String {
        match self.air_quality {
            Some(aqi) => aqi.to_string(),
            None => "n/a".to_string(),
        }
    }
}

/// Persisted form of a failed lookup: `{"notAvailable": true}`.
///
/// Any other value of the flag is rejected, so such a cache entry is treated
/// as malformed rather than as a failed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotAvailableMarker {
    not_available: bool,
}

impl Default for NotAvailableMarker {
    fn default() -> Self {
        Self { not_available: true }
    }
}

impl<'de> Deserialize<'de> for NotAvailableMarker {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Raw {
            not_available: bool,
        }

        let raw = Raw::deserialize(deserializer)?;
        if raw.not_available {
            Ok(Self::default())
        } else {
            Err(D::Error::custom("notAvailable must be true"))
        }
    }
}

/// Result of one weather lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Snapshot {
    Available(WeatherReport),
    NotAvailable(NotAvailableMarker),
}

impl Snapshot {
    pub fn not_available() -> Self {
        Self::NotAvailable(NotAvailableMarker::default())
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    pub fn report(&self) -> Option<&WeatherReport> {
        match self {
            Self::Available(report) => Some(report),
            Self::NotAvailable(_) => None,
        }
    }
}

/// One day of the down-sampled forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    pub timestamp: i64,
    pub date: NaiveDate,
    pub temperature_kelvin: f64,
    pub description: String,
}

impl DailyForecast {
    pub fn temperature_celsius(&self) -> i32 {
        kelvin_to_celsius(self.temperature_kelvin)
    }
}

/// What a weather panel should render.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState {
    Loading,
    Available(WeatherReport),
    NotAvailable,
}

impl From<Option<&Snapshot>> for PanelState {
    fn from(snapshot: Option<&Snapshot>) -> Self {
        match snapshot {
            None => Self::Loading,
            Some(Snapshot::Available(report)) => Self::Available(report.clone()),
            Some(Snapshot::NotAvailable(_)) => Self::NotAvailable,
        }
    }
}
