use async_trait::async_trait;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use skycast_common::{
    AirPollutionResponse, Coordinates, CurrentWeatherResponse, ForecastResponse,
    WeatherApi, WeatherError, with_timeout,
};

use crate::settings::{self, AppSettings};

/// OpenWeatherMap client over `fetch`.
///
/// Every request carries the configured API key and is abandoned after the
/// configured timeout.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    settings: AppSettings,
}

impl OpenWeatherClient {
    pub fn new(settings: AppSettings) -> Self {
        Self { settings }
    }

    pub fn from_settings() -> Self {
        Self::new(settings::get_settings())
    }

    /// Common GET request handler
    async fn get<T>(&self, endpoint: &str, params: &[(&str, String)]) -> Result<T, WeatherError>
    where
        T: DeserializeOwned,
    {
        if !self.settings.has_api_key() {
            log::error!("GET {} - no API key configured", endpoint);
            return Err(WeatherError::MissingApiKey);
        }

        let url = format!(
            "{}?{}",
            self.settings.api_url(endpoint),
            encode_query(params, &self.settings.api_key)
        );
        log::debug!("GET request to: {} {:?}", endpoint, params);

        let timeout_ms = self.settings.request_timeout_ms;
        with_timeout(
            send::<T>(url, endpoint.to_string()),
            TimeoutFuture::new(timeout_ms),
            timeout_ms,
        )
        .await
    }
}

async fn send<T>(url: String, endpoint: String) -> Result<T, WeatherError>
where
    T: DeserializeOwned,
{
    let response = Request::get(&url).send().await.map_err(|e| {
        log::error!("GET {} - Request failed: {}", endpoint, e);
        WeatherError::Network(e.to_string())
    })?;

    if !response.ok() {
        log::warn!("GET {} - Non-OK response: {}", endpoint, response.status());
        return Err(WeatherError::Http(response.status()));
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let body = response.json::<T>().await.map_err(|e| {
        log::error!("GET {} - Failed to parse response: {}", endpoint, e);
        WeatherError::Malformed(e.to_string())
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(body)
}

fn encode_query(params: &[(&str, String)], api_key: &str) -> String {
    params
        .iter()
        .map(|(name, value)| (*name, value.as_str()))
        .chain(std::iter::once(("appid", api_key)))
        .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[async_trait(?Send)]
impl WeatherApi for OpenWeatherClient {
    async fn current_weather(&self, city: &str) -> Result<CurrentWeatherResponse, WeatherError> {
        self.get("/weather", &[("q", city.to_string())]).await
    }

    async fn air_pollution(&self, at: Coordinates) -> Result<AirPollutionResponse, WeatherError> {
        self.get(
            "/air_pollution",
            &[("lat", at.lat.to_string()), ("lon", at.lon.to_string())],
        )
        .await
    }

    async fn forecast(&self, city: &str) -> Result<ForecastResponse, WeatherError> {
        self.get("/forecast", &[("q", city.to_string())]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_appends_api_key_and_encodes() {
        let query = encode_query(&[("q", "São Paulo".to_string())], "k3y");
        assert_eq!(query, "q=S%C3%A3o%20Paulo&appid=k3y");
    }

    #[test]
    fn test_query_with_coordinates() {
        let query = encode_query(
            &[("lat", 51.5.to_string()), ("lon", (-0.12).to_string())],
            "abc",
        );
        assert_eq!(query, "lat=51.5&lon=-0.12&appid=abc");
    }
}
