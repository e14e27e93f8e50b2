use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::WeatherProvider;
use crate::{
    catalog,
    config::OpenMeteoConfig,
    error::WeatherError,
    location::LocationQuery,
    model::{FORECAST_DAYS, ForecastDay, WeatherBundle, WeatherSnapshot},
};

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Display name used when the lookup came from raw coordinates.
pub const COORDINATES_NAME: &str = "Current Location";

/// Live provider backed by the Open-Meteo geocoding and forecast APIs.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    http: Client,
    geocoding_url: String,
    forecast_url: String,
}

struct ResolvedPlace {
    latitude: f64,
    longitude: f64,
    name: String,
}

impl OpenMeteoProvider {
    pub fn new(config: &OpenMeteoConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            geocoding_url: config.geocoding_url.trim_end_matches('/').to_string(),
            forecast_url: config.forecast_url.trim_end_matches('/').to_string(),
        })
    }

    async fn resolve(&self, query: &LocationQuery) -> Result<ResolvedPlace, WeatherError> {
        let name = match query {
            LocationQuery::Coordinates {
                latitude,
                longitude,
            } => {
                return Ok(ResolvedPlace {
                    latitude: *latitude,
                    longitude: *longitude,
                    name: COORDINATES_NAME.to_string(),
                });
            }
            LocationQuery::Place(name) => name,
        };

        let url = format!("{}/v1/search", self.geocoding_url);
        let res = self
            .http
            .get(&url)
            .query(&[("name", name.as_str()), ("count", "1")])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(WeatherError::ProviderUnavailable(format!(
                "geocoding request failed with status {status}"
            )));
        }

        let parsed: OmGeocodeResponse = res.json().await?;

        let place = parsed
            .results
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::LocationNotFound(name.clone()))?;

        tracing::debug!(query = %name, resolved = %place.name, "geocoded location");

        Ok(ResolvedPlace {
            latitude: place.latitude,
            longitude: place.longitude,
            name: place.name,
        })
    }

    async fn fetch_forecast(&self, place: &ResolvedPlace) -> Result<OmForecastResponse, WeatherError> {
        let url = format!("{}/v1/forecast", self.forecast_url);
        let latitude = place.latitude.to_string();
        let longitude = place.longitude.to_string();
        let forecast_days = (FORECAST_DAYS + 1).to_string();

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                (
                    "current",
                    "temperature_2m,relative_humidity_2m,weather_code,wind_speed_10m",
                ),
                ("daily", "weather_code,temperature_2m_max"),
                ("timezone", "auto"),
                ("forecast_days", forecast_days.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(WeatherError::ProviderUnavailable(format!(
                "forecast request failed with status {status}"
            )));
        }

        Ok(res.json().await?)
    }
}

#[derive(Debug, Deserialize)]
struct OmGeocodeResponse {
    #[serde(default)]
    results: Vec<OmPlace>,
}

#[derive(Debug, Deserialize)]
struct OmPlace {
    name: String,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    weather_code: u16,
    wind_speed_10m: f64,
}

#[derive(Debug, Deserialize)]
struct OmDaily {
    time: Vec<String>,
    weather_code: Vec<Option<u16>>,
    temperature_2m_max: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current: OmCurrent,
    daily: OmDaily,
}

fn to_bundle(name: String, parsed: OmForecastResponse) -> Result<WeatherBundle, WeatherError> {
    let current = WeatherSnapshot {
        location: name,
        temperature_c: parsed.current.temperature_2m.round() as i32,
        humidity_pct: parsed.current.relative_humidity_2m.round().clamp(0.0, 100.0) as u8,
        wind_speed_kmh: parsed.current.wind_speed_10m.round(),
        description: catalog::description_for_code(parsed.current.weather_code).to_string(),
    };

    let daily = &parsed.daily;
    // entry 0 is today
    let forecast = (1..=FORECAST_DAYS)
        .map(|i| {
            let date = daily
                .time
                .get(i)
                .ok_or_else(|| WeatherError::Decode(format!("daily forecast has no entry {i}")))?;
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|e| WeatherError::Decode(format!("bad forecast date '{date}': {e}")))?;
            let max = daily
                .temperature_2m_max
                .get(i)
                .copied()
                .flatten()
                .ok_or_else(|| WeatherError::Decode(format!("no max temperature for {date}")))?;
            let code = daily.weather_code.get(i).copied().flatten();

            Ok(ForecastDay {
                day: date.weekday(),
                temperature_c: max.round() as i32,
                description: code
                    .map(catalog::description_for_code)
                    .unwrap_or(catalog::FALLBACK_DESCRIPTION)
                    .to_string(),
            })
        })
        .collect::<Result<Vec<_>, WeatherError>>()?;

    Ok(WeatherBundle { current, forecast })
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn get_weather(&self, location: &str) -> Result<WeatherBundle, WeatherError> {
        let query = LocationQuery::parse(location);
        let place = self.resolve(&query).await?;
        let parsed = self.fetch_forecast(&place).await?;

        to_bundle(place.name, parsed)
    }
}
