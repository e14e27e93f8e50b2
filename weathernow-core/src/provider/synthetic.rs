use async_trait::async_trait;
use std::sync::Arc;

use super::WeatherProvider;
use crate::{clock::Clock, error::WeatherError, model::WeatherBundle, synth};

/// Offline provider backed by the hash-driven synthesizer.
#[derive(Debug, Clone)]
pub struct SyntheticProvider {
    clock: Arc<dyn Clock>,
    simulate_latency: bool,
}

impl SyntheticProvider {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            simulate_latency: true,
        }
    }

    pub fn with_latency(mut self, enabled: bool) -> Self {
        self.simulate_latency = enabled;
        self
    }
}

#[async_trait]
impl WeatherProvider for SyntheticProvider {
    async fn get_weather(&self, location: &str) -> Result<WeatherBundle, WeatherError> {
        let today = self.clock.today();

        let bundle = if self.simulate_latency {
            synth::synthesize(location, today).await
        } else {
            synth::derive_bundle(location, today)
        };

        Ok(bundle)
    }
}
