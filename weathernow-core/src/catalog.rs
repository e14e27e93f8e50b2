//! Fixed weather-condition labels and weekday names.

use chrono::Weekday;

/// WMO weather codes and their labels, in ascending code order.
///
/// See: https://open-meteo.com/en/docs#weathervariables
pub const WMO_CODES: &[(u16, &str)] = &[
    (0, "Clear"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Fog"),
    (48, "Depositing rime fog"),
    (51, "Light drizzle"),
    (53, "Moderate drizzle"),
    (55, "Dense drizzle"),
    (56, "Light freezing drizzle"),
    (57, "Dense freezing drizzle"),
    (61, "Slight rain"),
    (63, "Moderate rain"),
    (65, "Heavy rain"),
    (66, "Light freezing rain"),
    (67, "Heavy freezing rain"),
    (71, "Slight snow fall"),
    (73, "Moderate snow fall"),
    (75, "Heavy snow fall"),
    (77, "Snow grains"),
    (80, "Slight rain showers"),
    (81, "Moderate rain showers"),
    (82, "Violent rain showers"),
    (85, "Slight snow showers"),
    (86, "Heavy snow showers"),
    (95, "Thunderstorm"),
    (96, "Thunderstorm with slight hail"),
    (99, "Thunderstorm with heavy hail"),
];

/// Label used when a code is missing from [`WMO_CODES`].
pub const FALLBACK_DESCRIPTION: &str = "Clear";

/// Number of labels in the catalog.
pub const fn len() -> usize {
    WMO_CODES.len()
}

/// Label at position `index`, wrapping around the catalog.
pub fn description_at(index: u32) -> &'static str {
    WMO_CODES[index as usize % WMO_CODES.len()].1
}

/// Select a label from a hash value.
pub fn select(hash: u32) -> &'static str {
    description_at(hash)
}

pub fn contains(description: &str) -> bool {
    WMO_CODES.iter().any(|(_, label)| *label == description)
}

/// Label for a WMO code; unknown codes fall back to `Clear`.
pub fn description_for_code(code: u16) -> &'static str {
    WMO_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
        .unwrap_or(FALLBACK_DESCRIPTION)
}

/// Sunday-first weekday order used for forecast labels.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Weekday `offset` days after `today`, wrapping Saturday to Sunday.
pub fn weekday_after(today: Weekday, offset: u32) -> Weekday {
    let index = (today.num_days_from_sunday() + offset) % 7;
    WEEKDAYS[index as usize]
}
