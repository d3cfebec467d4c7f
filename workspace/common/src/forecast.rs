//! Five-day forecast: fetch, down-sample to one entry per day, and guard
//! against results arriving for a city that is no longer shown.

use chrono::DateTime;

use crate::api::{ForecastEntry, WeatherApi};
use crate::model::DailyForecast;

/// The forecast endpoint reports in 3-hour steps.
pub const ENTRIES_PER_DAY: usize = 8;
pub const FORECAST_DAYS: usize = 5;

/// Keep entries 0, 8, 16, ... and at most [`FORECAST_DAYS`] of them.
pub fn downsample<T>(entries: Vec<T>) -> Vec<T> {
    entries
        .into_iter()
        .step_by(ENTRIES_PER_DAY)
        .take(FORECAST_DAYS)
        .collect()
}

/// Fetch and down-sample the forecast. Failures are logged and yield an
/// empty list.
pub async fn fetch_forecast<A>(api: &A, city: &str) -> Vec<DailyForecast>
where
    A: WeatherApi + ?Sized,
{
    tracing::debug!("Fetching forecast for {}", city);
    match api.forecast(city).await {
        Ok(response) => {
            let days: Vec<DailyForecast> = downsample(response.list)
                .into_iter()
                .filter_map(to_daily)
                .collect();
            tracing::info!("Forecast for {}: {} days", city, days.len());
            days
        }
        Err(e) => {
            tracing::error!("Forecast for {} failed: {}", city, e);
            Vec::new()
        }
    }
}

fn to_daily(entry: ForecastEntry) -> Option<DailyForecast> {
    let Some(date) = DateTime::from_timestamp(entry.dt, 0).map(|dt| dt.date_naive()) else {
        tracing::warn!("Skipping forecast entry with invalid timestamp {}", entry.dt);
        return None;
    };
    let description = entry
        .weather
        .into_iter()
        .next()
        .map(|condition| condition.description)
        .unwrap_or_default();

    Some(DailyForecast {
        timestamp: entry.dt,
        date,
        temperature_kelvin: entry.main.temp,
        description,
    })
}

/// Tracks the latest forecast request of one panel.
///
/// Every new request (or the panel going away) bumps the generation; a
/// response is applied only if it carries the current generation.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    current: u64,
}

impl RequestGeneration {
    /// Start a request, invalidating all earlier ones.
    pub fn begin(&mut self) -> u64 {
        self.current = self.current.wrapping_add(1);
        self.current
    }

    /// Invalidate the outstanding request without starting a new one.
    pub fn cancel(&mut self) {
        self.current = self.current.wrapping_add(1);
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.current == generation
    }
}
