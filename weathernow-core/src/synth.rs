//! Hash-driven mock weather.
//!
//! Every value is a pure function of the lowercased location string, so the
//! same query always produces the same bundle. Only the forecast day labels
//! depend on the caller-supplied weekday.

use chrono::Weekday;
use std::time::Duration;

use crate::{
    catalog,
    hash::string_hash,
    location::display_name,
    model::{FORECAST_DAYS, ForecastDay, WeatherBundle, WeatherSnapshot},
};

/// Forecast temperatures start this many degrees below the current reading.
/// Kept as found; it is a tuning constant, not a derived quantity.
pub const FORECAST_COOLING_OFFSET: i32 = 8;

/// Width of the forecast temperature band.
pub const FORECAST_BAND_WIDTH: u32 = 15;

const BASE_LATENCY_MS: u64 = 500;
const LATENCY_SPREAD_MS: u32 = 500;

fn location_hash(location_raw: &str) -> u32 {
    string_hash(&location_raw.to_lowercase())
}

/// Current conditions for `location_raw`. Total over all strings; the empty
/// string lands on the bottom of every range.
pub fn derive_current(location_raw: &str) -> WeatherSnapshot {
    let h = location_hash(location_raw);

    let wind = f64::from(h % 30 + 5);

    WeatherSnapshot {
        location: display_name(location_raw),
        // -5..=29
        temperature_c: (h % 35) as i32 - 5,
        // 40..=99
        humidity_pct: (h % 60 + 40) as u8,
        // 5..=34
        wind_speed_kmh: (wind * 10.0).round() / 10.0,
        description: catalog::select(h).to_string(),
    }
}

/// Five days following `today`. Each day hashes the location salted with its
/// index, so days vary independently of one another.
pub fn derive_forecast(location_raw: &str, current_temp: i32, today: Weekday) -> Vec<ForecastDay> {
    let base = location_raw.to_lowercase();

    (0..FORECAST_DAYS as u32)
        .map(|i| {
            let dh = string_hash(&format!("{base}{i}"));
            ForecastDay {
                day: catalog::weekday_after(today, i + 1),
                temperature_c: (dh % FORECAST_BAND_WIDTH) as i32 + current_temp
                    - FORECAST_COOLING_OFFSET,
                description: catalog::select(dh).to_string(),
            }
        })
        .collect()
}

/// Current conditions plus forecast, without any delay.
pub fn derive_bundle(location_raw: &str, today: Weekday) -> WeatherBundle {
    let current = derive_current(location_raw);
    let forecast = derive_forecast(location_raw, current.temperature_c, today);

    WeatherBundle { current, forecast }
}

/// Deterministic 500..=999 ms delay standing in for network latency.
pub fn simulated_latency(location_raw: &str) -> Duration {
    let h = location_hash(location_raw);
    Duration::from_millis(BASE_LATENCY_MS + u64::from(h % LATENCY_SPREAD_MS))
}

/// [`derive_bundle`] followed by the simulated latency. The sleep only
/// suspends this call; concurrent lookups run independently.
pub async fn synthesize(location_raw: &str, today: Weekday) -> WeatherBundle {
    let bundle = derive_bundle(location_raw, today);
    let delay = simulated_latency(location_raw);

    tracing::debug!(location = location_raw, ?delay, "synthesized weather");
    tokio::time::sleep(delay).await;

    bundle
}
