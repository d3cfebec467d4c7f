//! Platform-independent core of the Skycast weather dashboard.
//!
//! Everything here builds natively and in the browser: the data model, the
//! application state and its actions, persistence over a key-value store,
//! the weather and forecast lookups over the [`WeatherApi`] seam, and the
//! city-name suggestion engine. The frontend crate supplies the browser
//! implementations of [`WeatherApi`] and [`KeyValueStore`].

mod api;
mod cities;
mod error;
mod fetch;
mod forecast;
mod model;
mod state;
mod storage;
mod suggest;

pub use api::{
    AirPollutionEntry, AirPollutionResponse, AirQualityIndex, Condition, CurrentWeatherResponse,
    ForecastEntry, ForecastResponse, MainReadings, WeatherApi,
};
pub use cities::CITIES;
pub use error::{StorageError, WeatherError};
pub use fetch::{fetch_report, fetch_snapshot, with_timeout};
pub use forecast::{ENTRIES_PER_DAY, FORECAST_DAYS, RequestGeneration, downsample, fetch_forecast};
pub use model::{
    Coordinates, DailyForecast, NotAvailableMarker, PanelState, Snapshot, WeatherReport,
    kelvin_to_celsius,
};
pub use state::{Action, AppState, SearchSlot};
pub use storage::{
    KeyValueStore, LOCATIONS_KEY, MemoryStore, WEATHER_CACHE_KEY, read_json,
    read_json_or_default, write_json,
};
pub use suggest::{DEFAULT_THRESHOLD, MAX_FALLBACK, MAX_SUGGESTIONS, SuggestionEngine};

/// Route `tracing` output through the test harness; safe to call from every test.
#[cfg(test)]
pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
