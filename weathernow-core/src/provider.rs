use crate::{
    Config, WeatherBundle,
    clock::SystemClock,
    error::WeatherError,
    provider::{open_meteo::OpenMeteoProvider, synthetic::SyntheticProvider},
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod open_meteo;
pub mod synthetic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    Synthetic,
    OpenMeteo,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Synthetic => "synthetic",
            ProviderId::OpenMeteo => "open-meteo",
        }
    }

    pub const fn all() -> &'static [ProviderId] {
        &[ProviderId::Synthetic, ProviderId::OpenMeteo]
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProviderId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "synthetic" | "mock" => Ok(ProviderId::Synthetic),
            "open-meteo" | "openmeteo" => Ok(ProviderId::OpenMeteo),
            _ => Err(anyhow::anyhow!(
                "Unknown provider '{value}'. Supported providers: synthetic, open-meteo."
            )),
        }
    }
}

/// Resolves a location string to current conditions and a 5-day forecast.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get_weather(&self, location: &str) -> Result<WeatherBundle, WeatherError>;
}

/// Construct a provider from config and explicit ProviderId.
pub fn provider_from_config(
    id: ProviderId,
    config: &Config,
) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let boxed: Box<dyn WeatherProvider> = match id {
        ProviderId::Synthetic => Box::new(
            SyntheticProvider::new(Arc::new(SystemClock))
                .with_latency(config.simulate_latency),
        ),
        ProviderId::OpenMeteo => Box::new(OpenMeteoProvider::new(&config.open_meteo)?),
    };

    tracing::debug!(provider = %id, "constructed weather provider");
    Ok(boxed)
}

/// Construct the default provider from config, using `default_provider` field.
pub fn default_provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let id = config.default_provider_id()?;
    provider_from_config(id, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn provider_id_as_str_roundtrip() {
        for id in ProviderId::all() {
            let s = id.as_str();
            let parsed = ProviderId::try_from(s).expect("roundtrip should succeed");
            assert_eq!(*id, parsed);
        }
    }

    #[test]
    fn provider_id_accepts_aliases() {
        assert_eq!(ProviderId::try_from("Mock").unwrap(), ProviderId::Synthetic);
        assert_eq!(ProviderId::try_from("OpenMeteo").unwrap(), ProviderId::OpenMeteo);
    }

    #[test]
    fn unknown_provider_error() {
        let err = ProviderId::try_from("doesnotexist").unwrap_err();
        assert!(err.to_string().contains("Unknown provider"));
    }

    #[test]
    fn default_provider_from_config_works_without_settings() {
        let cfg = Config::default();
        assert!(default_provider_from_config(&cfg).is_ok());
    }

    #[test]
    fn default_provider_from_config_errors_on_unknown_name() {
        let cfg = Config {
            default_provider: Some("nope".into()),
            ..Config::default()
        };
        assert!(default_provider_from_config(&cfg).is_err());
    }

    #[tokio::test]
    async fn synthetic_provider_from_config_returns_bundle() {
        let cfg = Config {
            simulate_latency: false,
            ..Config::default()
        };
        let provider = provider_from_config(ProviderId::Synthetic, &cfg).unwrap();

        let bundle = provider.get_weather("Paris").await.unwrap();
        assert_eq!(bundle.current.location, "Paris");
        assert_eq!(bundle.forecast.len(), 5);
    }
}
