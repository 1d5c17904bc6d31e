use crate::error::{AnticipaError, Result};
use crate::models::{CurrentWeather, DailyForecast, WeatherBundle};
use chrono::{DateTime, Utc};
use serde::Deserialize;

const API_BASE_URL: &str = "https://api.open-meteo.com/v1";

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,precipitation,wind_speed_10m";
const DAILY_FIELDS: &str = "temperature_2m_min,temperature_2m_max,relative_humidity_2m_mean,\
                            wind_speed_10m_max,precipitation_sum";

/// Open-Meteo forecast client. Keyless API; temperatures in °C, wind in
/// kph, precipitation in mm, which is exactly what the advisory rules
/// expect.
pub struct OpenMeteoClient {
    client: reqwest::Client,
    forecast_days: u8,
}

// Open-Meteo API response structures (timeformat=unixtime)
#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current: OmCurrent,
    daily: OmDaily,
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    time: i64,
    temperature_2m: f64,
    relative_humidity_2m: f64,
    precipitation: f64,
    wind_speed_10m: f64,
}

#[derive(Debug, Deserialize)]
struct OmDaily {
    time: Vec<i64>,
    temperature_2m_min: Vec<Option<f64>>,
    temperature_2m_max: Vec<Option<f64>>,
    relative_humidity_2m_mean: Vec<Option<f64>>,
    wind_speed_10m_max: Vec<Option<f64>>,
    precipitation_sum: Vec<Option<f64>>,
}

impl OpenMeteoClient {
    pub fn new(forecast_days: u8) -> Self {
        Self {
            client: reqwest::Client::new(),
            forecast_days,
        }
    }

    /// Fetch current conditions plus the daily forecast and normalize
    /// them into a `WeatherBundle` labelled `location`.
    pub async fn fetch(&self, latitude: f64, longitude: f64, location: &str) -> Result<WeatherBundle> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&current={}&daily={}&forecast_days={}&timezone=auto&timeformat=unixtime",
            API_BASE_URL, latitude, longitude, CURRENT_FIELDS, DAILY_FIELDS, self.forecast_days
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AnticipaError::WeatherUnavailable(format!("Open-Meteo: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AnticipaError::WeatherUnavailable(format!(
                "Open-Meteo returned {}: {}",
                status, body
            )));
        }

        let om_response: OmForecastResponse = response.json().await.map_err(|e| {
            AnticipaError::WeatherUnavailable(format!("Failed to parse Open-Meteo response: {}", e))
        })?;

        Ok(convert_response(om_response, location))
    }

    /// Probe the forecast endpoint, used by `anticipa check`.
    pub async fn test_connection(&self, latitude: f64, longitude: f64) -> Result<bool> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&current=temperature_2m",
            API_BASE_URL, latitude, longitude
        );

        let response = self.client.get(&url).send().await?;

        Ok(response.status().is_success())
    }
}

fn convert_response(response: OmForecastResponse, location: &str) -> WeatherBundle {
    let observed_at = DateTime::from_timestamp(response.current.time, 0).unwrap_or_else(Utc::now);

    let current = CurrentWeather {
        observed_at,
        temp_c: response.current.temperature_2m,
        humidity_pct: response.current.relative_humidity_2m.round().clamp(0.0, 100.0) as u8,
        wind_kph: response.current.wind_speed_10m.max(0.0),
        rain_mm: response.current.precipitation.max(0.0),
    };

    let daily = &response.daily;
    let days = daily
        .time
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            let date = DateTime::from_timestamp(t, 0)
                .unwrap_or_else(Utc::now)
                .date_naive();
            // Open-Meteo reports missing daily values as nulls
            let at = |values: &[Option<f64>]| values.get(i).copied().flatten().unwrap_or(0.0);
            DailyForecast::new(
                date,
                at(&daily.temperature_2m_min),
                at(&daily.temperature_2m_max),
                at(&daily.relative_humidity_2m_mean),
                at(&daily.wind_speed_10m_max),
                at(&daily.precipitation_sum),
            )
        })
        .collect();

    WeatherBundle {
        location: location.to_string(),
        current,
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"{
        "latitude": -21.25,
        "longitude": -45.0,
        "timezone": "America/Sao_Paulo",
        "current": {
            "time": 1748781000,
            "temperature_2m": 24.3,
            "relative_humidity_2m": 71.0,
            "precipitation": 0.0,
            "wind_speed_10m": 9.4
        },
        "daily": {
            "time": [1748746800, 1748833200, 1748919600, 1749006000],
            "temperature_2m_min": [14.1, 13.8, 15.0, 14.6],
            "temperature_2m_max": [26.2, 27.0, 25.4, 24.9],
            "relative_humidity_2m_mean": [68.0, 72.0, 75.0, 70.0],
            "wind_speed_10m_max": [18.7, 22.1, 16.3, 19.9],
            "precipitation_sum": [0.0, 2.4, null, 6.1]
        }
    }"#;

    #[test]
    fn converts_full_response() {
        let parsed: OmForecastResponse = serde_json::from_str(SAMPLE_RESPONSE).unwrap();
        let bundle = convert_response(parsed, "Fazenda Boa Vista");

        assert_eq!(bundle.location, "Fazenda Boa Vista");
        assert_eq!(bundle.current.humidity_pct, 71);
        assert!((bundle.current.temp_c - 24.3).abs() < 1e-9);
        assert_eq!(bundle.days.len(), 4);
        assert!((bundle.days[1].rain_sum_mm - 2.4).abs() < 1e-9);
        assert!((bundle.days[3].rain_sum_mm - 6.1).abs() < 1e-9);
        assert!(bundle.days.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn missing_daily_values_default_to_zero() {
        let parsed: OmForecastResponse = serde_json::from_str(SAMPLE_RESPONSE).unwrap();
        let bundle = convert_response(parsed, "test");
        assert_eq!(bundle.days[2].rain_sum_mm, 0.0);
    }

    #[test]
    fn humidity_is_clamped_to_percent_range() {
        let mut parsed: OmForecastResponse = serde_json::from_str(SAMPLE_RESPONSE).unwrap();
        parsed.current.relative_humidity_2m = 104.0;
        let bundle = convert_response(parsed, "test");
        assert_eq!(bundle.current.humidity_pct, 100);
    }
}
