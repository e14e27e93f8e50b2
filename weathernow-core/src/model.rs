use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// One point-in-time reading. Celsius is canonical; other units are derived
/// at display time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: String,
    pub temperature_c: i32,
    pub humidity_pct: u8,
    pub wind_speed_kmh: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Serialized as `Sun`..`Sat`.
    pub day: Weekday,
    pub temperature_c: i32,
    pub description: String,
}

/// Current conditions plus the five following days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherBundle {
    pub current: WeatherSnapshot,
    pub forecast: Vec<ForecastDay>,
}

/// Number of entries in every forecast.
pub const FORECAST_DAYS: usize = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_day_serializes_short_weekday_name() {
        let day = ForecastDay {
            day: Weekday::Sat,
            temperature_c: 4,
            description: "Fog".to_string(),
        };

        let json = serde_json::to_value(&day).expect("serialize");
        assert_eq!(json["day"], "Sat");
        assert_eq!(json["temperature_c"], 4);
    }
}
