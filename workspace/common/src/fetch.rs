//! Current-weather lookup: weather call, then air quality at the returned
//! coordinates, merged into one [`Snapshot`].

use std::future::Future;
use std::pin::pin;

use chrono::{DateTime, Utc};
use futures::future::{Either, select};

use crate::api::{CurrentWeatherResponse, WeatherApi};
use crate::error::WeatherError;
use crate::model::{Coordinates, Snapshot, WeatherReport};

/// Look up a city and fold any failure into the "not available" marker.
///
/// The caller decides where the result goes (saved-city cache or search slot).
pub async fn fetch_snapshot<A>(api: &A, city: &str) -> Snapshot
where
    A: WeatherApi + ?Sized,
{
    tracing::debug!("Fetching weather for {}", city);
    match fetch_report(api, city).await {
        Ok(report) => {
            tracing::info!("Weather for {} fetched: {}", city, report.description);
            Snapshot::Available(report)
        }
        Err(e) => {
            tracing::warn!("Weather for {} not available: {}", city, e);
            Snapshot::not_available()
        }
    }
}

/// Look up a city, keeping the error.
///
/// Only the weather call can fail the lookup. An air-quality failure leaves
/// `air_quality` empty on an otherwise complete report.
pub async fn fetch_report<A>(api: &A, city: &str) -> Result<WeatherReport, WeatherError>
where
    A: WeatherApi + ?Sized,
{
    let current = api.current_weather(city).await?;
    let mut report = normalize(current)?;
    report.air_quality = fetch_air_quality(api, report.coordinates).await;
    Ok(report)
}

async fn fetch_air_quality<A>(api: &A, at: Coordinates) -> Option<u8>
where
    A: WeatherApi + ?Sized,
{
    match api.air_pollution(at).await {
        Ok(response) => {
            let aqi = response.list.first().map(|entry| entry.main.aqi);
            if aqi.is_none() {
                tracing::warn!("Air-quality response at {},{} had no entries", at.lat, at.lon);
            }
            aqi
        }
        Err(e) => {
            tracing::warn!("Air-quality lookup at {},{} failed: {}", at.lat, at.lon, e);
            None
        }
    }
}

/// Race a request against a deadline timer.
///
/// The timer is passed in so the browser can use `gloo-timers` and tests can
/// use tokio's clock. Losing the race is reported as
/// [`WeatherError::Timeout`], which callers treat like any other failure.
pub async fn with_timeout<F, D, T>(request: F, deadline: D, timeout_ms: u32) -> Result<T, WeatherError>
where
    F: Future<Output = Result<T, WeatherError>>,
    D: Future<Output = ()>,
{
    match select(pin!(request), pin!(deadline)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            tracing::warn!("Request abandoned after {} ms", timeout_ms);
            Err(WeatherError::Timeout(timeout_ms))
        }
    }
}

fn normalize(current: CurrentWeatherResponse) -> Result<WeatherReport, WeatherError> {
    let description = current
        .weather
        .into_iter()
        .next()
        .map(|condition| condition.description)
        .ok_or_else(|| WeatherError::Malformed("empty weather array".to_string()))?;

    let observed_at = DateTime::<Utc>::from_timestamp(current.dt, 0)
        .ok_or_else(|| WeatherError::Malformed(format!("invalid timestamp {}", current.dt)))?;

    Ok(WeatherReport {
        name: current.name,
        temperature_kelvin: current.main.temp,
        humidity: current.main.humidity,
        description,
        air_quality: None,
        coordinates: current.coord,
        observed_at,
    })
}

#[cfg(test)]
mod tests {
    use std::future::pending;
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::api::fake::FakeWeatherApi;
    use crate::api::{AirPollutionResponse, ForecastResponse};

    /// Service whose weather endpoint never answers.
    struct StalledApi {
        timeout_ms: u32,
    }

    impl StalledApi {
        async fn stall<T>(&self) -> Result<T, WeatherError> {
            let deadline = tokio::time::sleep(Duration::from_millis(self.timeout_ms.into()));
            with_timeout(pending(), deadline, self.timeout_ms).await
        }
    }

    #[async_trait(?Send)]
    impl WeatherApi for StalledApi {
        async fn current_weather(&self, _city: &str) -> Result<CurrentWeatherResponse, WeatherError> {
            self.stall().await
        }

        async fn air_pollution(&self, _at: Coordinates) -> Result<AirPollutionResponse, WeatherError> {
            self.stall().await
        }

        async fn forecast(&self, _city: &str) -> Result<ForecastResponse, WeatherError> {
            self.stall().await
        }
    }

    #[tokio::test]
    async fn test_unanswered_request_times_out() {
        let deadline = tokio::time::sleep(Duration::from_millis(5));
        let result: Result<u8, WeatherError> = with_timeout(pending(), deadline, 5).await;
        assert_eq!(result, Err(WeatherError::Timeout(5)));
    }

    #[tokio::test]
    async fn test_answer_before_deadline_wins() {
        let result = with_timeout(async { Ok::<_, WeatherError>(7u8) }, pending(), 5).await;
        assert_eq!(result, Ok(7));

        let failed: Result<u8, WeatherError> =
            with_timeout(async { Err(WeatherError::Http(500)) }, pending(), 5).await;
        assert_eq!(failed, Err(WeatherError::Http(500)));
    }

    #[tokio::test]
    async fn test_timed_out_lookup_is_not_available() {
        crate::init_test_tracing();
        let api = StalledApi { timeout_ms: 5 };

        let err = fetch_report(&api, "Paris").await.unwrap_err();
        assert_eq!(err, WeatherError::Timeout(5));
        assert_eq!(fetch_snapshot(&api, "Paris").await, Snapshot::not_available());
    }

    #[tokio::test]
    async fn test_fetch_merges_air_quality() {
        crate::init_test_tracing();
        let api = FakeWeatherApi::default()
            .with_city("Paris", 291.0, 64)
            .with_air_quality(2);

        let snapshot = fetch_snapshot(&api, "Paris").await;
        let report = snapshot.report().unwrap();
        assert_eq!(report.name, "Paris");
        assert_eq!(report.humidity, 64);
        assert_eq!(report.air_quality, Some(2));
        assert_eq!(report.temperature_celsius(), 18);
        assert_eq!(api.calls(), vec!["weather:Paris", "air:48.85,2.35"]);
    }

    #[tokio::test]
    async fn test_unknown_city_is_not_available() {
        crate::init_test_tracing();
        let api = FakeWeatherApi::default().with_air_quality(1);

        let snapshot = fetch_snapshot(&api, "Zzxqville").await;
        assert_eq!(snapshot, Snapshot::not_available());
        // No second call once the first one failed.
        assert_eq!(api.calls(), vec!["weather:Zzxqville"]);
    }

    #[tokio::test]
    async fn test_air_quality_failure_keeps_weather() {
        crate::init_test_tracing();
        let api = FakeWeatherApi::default().with_city("Tokyo", 300.0, 70);

        let report = fetch_report(&api, "Tokyo").await.unwrap();
        assert_eq!(report.air_quality, None);
        assert_eq!(report.air_quality_label(), "n/a");
        assert_eq!(report.temperature_celsius(), 27);
    }

    #[tokio::test]
    async fn test_empty_weather_array_is_malformed() {
        let mut api = FakeWeatherApi::default().with_city("Oslo", 270.0, 80);
        api.current.get_mut("Oslo").unwrap().weather.clear();

        let err = fetch_report(&api, "Oslo").await.unwrap_err();
        assert!(matches!(err, WeatherError::Malformed(_)));
        assert_eq!(fetch_snapshot(&api, "Oslo").await, Snapshot::not_available());
    }
}
