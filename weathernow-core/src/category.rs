//! Maps free-form condition text to icon and backdrop categories.
//!
//! Descriptions often match several keywords ("Thunderstorm with slight
//! hail", "Slight snow showers"), so the rules are ordered lists evaluated
//! first-match-wins.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCategory {
    Thunder,
    Snow,
    Rain,
    Fog,
    PartlyCloudy,
    Cloudy,
    Windy,
    Clear,
    Default,
}

const CATEGORY_RULES: &[(&[&str], WeatherCategory)] = &[
    (&["thunder"], WeatherCategory::Thunder),
    (&["snow"], WeatherCategory::Snow),
    (&["rain", "shower", "drizzle"], WeatherCategory::Rain),
    (&["fog", "mist"], WeatherCategory::Fog),
    (&["partly cloudy"], WeatherCategory::PartlyCloudy),
    (&["cloud", "overcast"], WeatherCategory::Cloudy),
    (&["windy"], WeatherCategory::Windy),
    (&["clear", "sunny"], WeatherCategory::Clear),
];

/// Case-insensitive keyword match; total over any input.
pub fn categorize(description: &str) -> WeatherCategory {
    first_match(description, CATEGORY_RULES).unwrap_or(WeatherCategory::Default)
}

impl WeatherCategory {
    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Thunder => "cloud_lightning",
            Self::Snow => "cloud_snow",
            Self::Rain => "cloud_rain",
            Self::Fog => "cloud_fog",
            Self::PartlyCloudy | Self::Default => "cloud_sun",
            Self::Cloudy => "cloud",
            Self::Windy => "wind",
            Self::Clear => "sun",
        }
    }
}

/// Background illustration behind the current-conditions card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backdrop {
    Snowy,
    Rainy,
    Cloudy,
    Sunny,
    Default,
}

const BACKDROP_RULES: &[(&[&str], Backdrop)] = &[
    (&["snow"], Backdrop::Snowy),
    (&["rain", "shower", "drizzle"], Backdrop::Rainy),
    (&["cloud", "overcast"], Backdrop::Cloudy),
    (&["clear", "sunny"], Backdrop::Sunny),
];

impl Backdrop {
    pub fn for_description(description: &str) -> Self {
        first_match(description, BACKDROP_RULES).unwrap_or(Self::Default)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Snowy => "snowy",
            Self::Rainy => "rainy",
            Self::Cloudy => "cloudy",
            Self::Sunny => "sunny",
            Self::Default => "default",
        }
    }
}

fn first_match<T: Copy>(description: &str, rules: &[(&[&str], T)]) -> Option<T> {
    let lower = description.to_lowercase();
    rules
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(*k)))
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn thunder_wins_over_later_rules() {
        assert_eq!(categorize("Thunderstorm with slight hail"), WeatherCategory::Thunder);
    }

    #[test]
    fn snow_showers_are_snow_not_rain() {
        assert_eq!(categorize("Slight snow showers"), WeatherCategory::Snow);
    }

    #[test]
    fn drizzle_is_rain() {
        assert_eq!(categorize("light drizzle"), WeatherCategory::Rain);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(categorize("DEPOSITING RIME FOG"), WeatherCategory::Fog);
        assert_eq!(categorize("Partly Cloudy"), WeatherCategory::PartlyCloudy);
        assert_eq!(categorize("Overcast"), WeatherCategory::Cloudy);
        assert_eq!(categorize("Windy"), WeatherCategory::Windy);
        assert_eq!(categorize("Sunny"), WeatherCategory::Clear);
        assert_eq!(categorize("Mainly clear"), WeatherCategory::Clear);
    }

    #[test]
    fn unknown_text_falls_back_to_default() {
        assert_eq!(categorize("unknown condition xyz"), WeatherCategory::Default);
        assert_eq!(categorize(""), WeatherCategory::Default);
    }

    #[test]
    fn every_catalog_label_gets_a_specific_category() {
        for (_, label) in catalog::WMO_CODES {
            assert_ne!(categorize(label), WeatherCategory::Default, "{label}");
        }
    }

    #[test]
    fn icon_names() {
        assert_eq!(WeatherCategory::Thunder.icon_name(), "cloud_lightning");
        assert_eq!(WeatherCategory::Default.icon_name(), "cloud_sun");
    }

    #[test]
    fn backdrop_has_its_own_precedence() {
        assert_eq!(Backdrop::for_description("Heavy snow showers"), Backdrop::Snowy);
        assert_eq!(Backdrop::for_description("Moderate drizzle"), Backdrop::Rainy);
        assert_eq!(Backdrop::for_description("Partly cloudy"), Backdrop::Cloudy);
        assert_eq!(Backdrop::for_description("Clear"), Backdrop::Sunny);
        assert_eq!(Backdrop::for_description("Thunderstorm"), Backdrop::Default);
        assert_eq!(Backdrop::for_description("Fog"), Backdrop::Default);
    }
}
