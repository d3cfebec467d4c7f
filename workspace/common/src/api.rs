//! Wire shapes of the OpenWeatherMap endpoints and the client seam.
//!
//! Only the fields the dashboard reads are modelled; everything else in the
//! payloads is ignored by serde.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::WeatherError;
use crate::model::Coordinates;

/// `GET /weather?q={city}&appid={key}`
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherResponse {
    pub name: String,
    pub dt: i64,
    pub coord: Coordinates,
    pub main: MainReadings,
    pub weather: Vec<Condition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    /// Kelvin.
    pub temp: f64,
    #[serde(default)]
    pub humidity: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub description: String,
}

/// `GET /air_pollution?lat={lat}&lon={lon}&appid={key}`
#[derive(Debug, Clone, Deserialize)]
pub struct AirPollutionResponse {
    pub list: Vec<AirPollutionEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AirPollutionEntry {
    pub main: AirQualityIndex,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AirQualityIndex {
    pub aqi: u8,
}

/// `GET /forecast?q={city}&appid={key}`: 3-hour steps over 5 days.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    pub dt: i64,
    pub main: MainReadings,
    pub weather: Vec<Condition>,
}

/// Remote weather service.
///
/// The browser build talks to OpenWeatherMap through `gloo-net`; tests use an
/// in-memory fake. Futures are not `Send` because the browser executor is
/// single-threaded.
#[async_trait(?Send)]
pub trait WeatherApi {
    async fn current_weather(&self, city: &str) -> Result<CurrentWeatherResponse, WeatherError>;

    async fn air_pollution(&self, at: Coordinates) -> Result<AirPollutionResponse, WeatherError>;

    async fn forecast(&self, city: &str) -> Result<ForecastResponse, WeatherError>;
}

#[cfg(test)]
pub(crate) mod fake {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    /// Scripted `WeatherApi` keyed by city name. Unknown cities answer 404.
    #[derive(Default)]
    pub struct FakeWeatherApi {
        pub current: HashMap<String, CurrentWeatherResponse>,
        pub forecasts: HashMap<String, ForecastResponse>,
        pub air_quality: Option<u8>,
        pub calls: RefCell<Vec<String>>,
    }

    impl FakeWeatherApi {
        pub fn with_city(mut self, city: &str, kelvin: f64, humidity: u8) -> Self {
            self.current.insert(
                city.to_string(),
                CurrentWeatherResponse {
                    name: city.to_string(),
                    dt: 1_700_000_000,
                    coord: Coordinates { lat: 48.85, lon: 2.35 },
                    main: MainReadings { temp: kelvin, humidity },
                    weather: vec![Condition { description: "clear sky".to_string() }],
                },
            );
            self
        }

        pub fn with_air_quality(mut self, aqi: u8) -> Self {
            self.air_quality = Some(aqi);
            self
        }

        pub fn with_forecast(mut self, city: &str, entries: usize) -> Self {
            let list = (0..entries)
                .map(|i| ForecastEntry {
                    dt: 1_700_000_000 + (i as i64) * 3 * 3600,
                    main: MainReadings { temp: 280.0 + i as f64, humidity: 50 },
                    weather: vec![Condition { description: format!("step {i}") }],
                })
                .collect();
            self.forecasts.insert(city.to_string(), ForecastResponse { list });
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl WeatherApi for FakeWeatherApi {
        async fn current_weather(&self, city: &str) -> Result<CurrentWeatherResponse, WeatherError> {
            self.calls.borrow_mut().push(format!("weather:{city}"));
            self.current.get(city).cloned().ok_or(WeatherError::Http(404))
        }

        async fn air_pollution(&self, at: Coordinates) -> Result<AirPollutionResponse, WeatherError> {
            self.calls.borrow_mut().push(format!("air:{},{}", at.lat, at.lon));
            match self.air_quality {
                Some(aqi) => Ok(AirPollutionResponse {
                    list: vec![AirPollutionEntry { main: AirQualityIndex { aqi } }],
                }),
                None => Err(WeatherError::Network("connection reset".to_string())),
            }
        }

        async fn forecast(&self, city: &str) -> Result<ForecastResponse, WeatherError> {
            self.calls.borrow_mut().push(format!("forecast:{city}"));
            self.forecasts.get(city).cloned().ok_or(WeatherError::Http(404))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_current_weather_payload() {
        let body = r#"{
            "coord": {"lon": -0.1257, "lat": 51.5085},
            "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
            "main": {"temp": 282.55, "feels_like": 281.86, "pressure": 1023, "humidity": 100},
            "dt": 1560350645,
            "name": "London",
            "cod": 200
        }"#;
        let parsed: CurrentWeatherResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.name, "London");
        assert_eq!(parsed.main.humidity, 100);
        assert_eq!(parsed.weather[0].description, "clear sky");
        assert!((parsed.coord.lat - 51.5085).abs() < 1e-9);
    }

    #[test]
    fn test_parse_air_pollution_payload() {
        let body = r#"{
            "coord": {"lon": 50, "lat": 50},
            "list": [{"main": {"aqi": 3}, "components": {"co": 201.94}, "dt": 1605182400}]
        }"#;
        let parsed: AirPollutionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.list[0].main.aqi, 3);
    }

    #[test]
    fn test_parse_forecast_payload() {
        let body = r#"{
            "cod": "200",
            "cnt": 1,
            "list": [{
                "dt": 1661871600,
                "main": {"temp": 296.76, "humidity": 69},
                "weather": [{"description": "light rain"}],
                "dt_txt": "2022-08-30 15:00:00"
            }]
        }"#;
        let parsed: ForecastResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.list.len(), 1);
        assert_eq!(parsed.list[0].dt, 1661871600);
    }

    #[test]
    fn test_missing_coordinates_is_rejected() {
        let body = r#"{"name": "Nowhere", "dt": 0, "main": {"temp": 280.0}, "weather": []}"#;
        assert!(serde_json::from_str::<CurrentWeatherResponse>(body).is_err());
    }
}
