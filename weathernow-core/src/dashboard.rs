//! Page controller behind the weather cards.
//!
//! Lookups may finish in any order. Every search takes a [`RequestToken`] and
//! only the most recently issued token may write results, so a slow earlier
//! lookup can never overwrite a newer one.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::{
    error::WeatherError,
    location::format_coordinates,
    model::WeatherBundle,
    provider::WeatherProvider,
    summary::{Summarizer, summarize_quietly},
    units::TemperatureUnit,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Everything the cards render from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub location: String,
    pub weather: Option<WeatherBundle>,
    pub summary: Option<String>,
    pub unit: TemperatureUnit,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Results were written to the state.
    Updated,
    /// A newer search started first; results were dropped.
    Superseded,
    /// Blank input, nothing was looked up.
    Ignored,
}

enum Applied {
    /// Stored; a summary may follow.
    Weather(WeatherBundle),
    Failed,
    Stale,
}

#[derive(Debug)]
struct Inner {
    latest: u64,
    state: DashboardState,
}

#[derive(Debug)]
pub struct Dashboard {
    provider: Arc<dyn WeatherProvider>,
    summarizer: Option<Arc<dyn Summarizer>>,
    inner: Mutex<Inner>,
}

/// Location for the first lookup: the geolocated position when available,
/// otherwise `fallback`.
pub fn initial_location(geolocation: Option<(f64, f64)>, fallback: &str) -> String {
    match geolocation {
        Some((lat, lon)) => format_coordinates(lat, lon),
        None => fallback.to_string(),
    }
}

impl Dashboard {
    pub fn new(
        provider: Arc<dyn WeatherProvider>,
        location: impl Into<String>,
        unit: TemperatureUnit,
    ) -> Self {
        Self {
            provider,
            summarizer: None,
            inner: Mutex::new(Inner {
                latest: 0,
                state: DashboardState {
                    location: location.into(),
                    unit,
                    ..DashboardState::default()
                },
            }),
        }
    }

    pub fn with_summarizer(mut self, summarizer: Arc<dyn Summarizer>) -> Self {
        self.summarizer = Some(summarizer);
        self
    }

    pub fn snapshot(&self) -> DashboardState {
        self.inner.lock().state.clone()
    }

    pub fn toggle_unit(&self) -> TemperatureUnit {
        let mut inner = self.inner.lock();
        inner.state.unit = inner.state.unit.toggle();
        inner.state.unit
    }

    /// Starts a new request: clears previous results and supersedes any
    /// request still in flight.
    pub fn begin(&self) -> RequestToken {
        let mut inner = self.inner.lock();
        inner.latest += 1;

        let state = &mut inner.state;
        state.loading = true;
        state.error = None;
        state.summary = None;
        state.weather = None;

        RequestToken(inner.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.inner.lock().latest == token.0
    }

    /// Looks up `location` and, when configured, a summary of it.
    pub async fn search(&self, location: &str) -> SearchOutcome {
        let location = location.trim();
        if location.is_empty() {
            return SearchOutcome::Ignored;
        }

        let token = self.begin();
        let result = self.provider.get_weather(location).await;

        let bundle = match self.apply_weather(token, location, result) {
            Applied::Weather(bundle) => bundle,
            Applied::Failed => return SearchOutcome::Updated,
            Applied::Stale => return SearchOutcome::Superseded,
        };

        let summary = match &self.summarizer {
            Some(summarizer) => summarize_quietly(summarizer.as_ref(), &bundle.current).await,
            None => None,
        };

        self.finish(token, summary)
    }

    fn apply_weather(
        &self,
        token: RequestToken,
        requested: &str,
        result: Result<WeatherBundle, WeatherError>,
    ) -> Applied {
        let mut inner = self.inner.lock();
        if inner.latest != token.0 {
            tracing::warn!(location = requested, "discarding stale weather result");
            return Applied::Stale;
        }

        let state = &mut inner.state;
        match result {
            Ok(bundle) => {
                tracing::info!(
                    location = %bundle.current.location,
                    description = %bundle.current.description,
                    "weather updated"
                );
                state.location = bundle.current.location.clone();
                state.weather = Some(bundle.clone());
                Applied::Weather(bundle)
            }
            Err(e) => {
                tracing::warn!(location = requested, error = %e, "weather lookup failed");
                state.error = Some(e.user_message(requested));
                state.weather = None;
                state.loading = false;
                Applied::Failed
            }
        }
    }

    fn finish(&self, token: RequestToken, summary: Option<String>) -> SearchOutcome {
        let mut inner = self.inner.lock();
        if inner.latest != token.0 {
            tracing::warn!("discarding stale weather summary");
            return SearchOutcome::Superseded;
        }

        inner.state.summary = summary;
        inner.state.loading = false;
        SearchOutcome::Updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        clock::FixedClock,
        error::SummaryError,
        provider::synthetic::SyntheticProvider,
        summary::{Summary, SummaryInput},
        synth,
    };
    use async_trait::async_trait;
    use chrono::Weekday;
    use std::time::Duration;

    #[derive(Debug)]
    struct ScriptedProvider;

    #[async_trait]
    impl WeatherProvider for ScriptedProvider {
        async fn get_weather(&self, location: &str) -> Result<WeatherBundle, WeatherError> {
            match location {
                "Atlantis" => Err(WeatherError::LocationNotFound(location.to_string())),
                "slow town" => {
                    tokio::time::sleep(Duration::from_millis(900)).await;
                    Ok(synth::derive_bundle(location, Weekday::Mon))
                }
                _ => {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    Ok(synth::derive_bundle(location, Weekday::Mon))
                }
            }
        }
    }

    #[derive(Debug)]
    struct EchoSummarizer;

    #[async_trait]
    impl Summarizer for EchoSummarizer {
        async fn summarize(&self, input: &SummaryInput) -> Result<Summary, SummaryError> {
            Ok(Summary {
                summary: format!("{} in {}", input.description, input.location),
            })
        }
    }

    #[derive(Debug)]
    struct BrokenSummarizer;

    #[async_trait]
    impl Summarizer for BrokenSummarizer {
        async fn summarize(&self, _input: &SummaryInput) -> Result<Summary, SummaryError> {
            Err(SummaryError::Request("quota exceeded".into()))
        }
    }

    fn dashboard() -> Dashboard {
        Dashboard::new(Arc::new(ScriptedProvider), "New York", TemperatureUnit::Celsius)
    }

    #[test]
    fn initial_location_prefers_geolocation() {
        assert_eq!(initial_location(Some((48.8566, 2.3522)), "New York"), "48.86, 2.35");
        assert_eq!(initial_location(None, "New York"), "New York");
    }

    #[test]
    fn begin_clears_previous_results() {
        let dash = dashboard();
        let first = dash.begin();
        let second = dash.begin();

        assert!(second > first);
        assert!(!dash.is_current(first));
        assert!(dash.is_current(second));

        let state = dash.snapshot();
        assert!(state.loading);
        assert!(state.weather.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn toggle_unit_flips_display_unit() {
        let dash = dashboard();
        assert_eq!(dash.toggle_unit(), TemperatureUnit::Fahrenheit);
        assert_eq!(dash.snapshot().unit, TemperatureUnit::Fahrenheit);
        assert_eq!(dash.toggle_unit(), TemperatureUnit::Celsius);
    }

    #[tokio::test(start_paused = true)]
    async fn successful_search_updates_state() {
        let dash = dashboard().with_summarizer(Arc::new(EchoSummarizer));

        let outcome = dash.search("  berlin ").await;
        assert_eq!(outcome, SearchOutcome::Updated);

        let state = dash.snapshot();
        let expected = synth::derive_bundle("berlin", Weekday::Mon);
        assert_eq!(state.location, "Berlin");
        assert_eq!(
            state.summary.as_deref(),
            Some(format!("{} in Berlin", expected.current.description).as_str())
        );
        assert_eq!(state.weather, Some(expected));
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn blank_search_is_ignored() {
        let dash = dashboard();

        assert_eq!(dash.search("   ").await, SearchOutcome::Ignored);
        assert!(!dash.snapshot().loading);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_lookup_sets_user_message() {
        let dash = dashboard();

        assert_eq!(dash.search("Atlantis").await, SearchOutcome::Updated);

        let state = dash.snapshot();
        assert_eq!(
            state.error.as_deref(),
            Some("Could not fetch weather for \"Atlantis\". Please try another location.")
        );
        assert!(state.weather.is_none());
        assert!(!state.loading);
        assert_eq!(state.location, "New York");
    }

    #[tokio::test(start_paused = true)]
    async fn retry_after_failure_clears_error() {
        let dash = dashboard();
        dash.search("Atlantis").await;
        dash.search("Oslo").await;

        let state = dash.snapshot();
        assert!(state.error.is_none());
        assert_eq!(state.location, "Oslo");
    }

    #[tokio::test(start_paused = true)]
    async fn summarizer_failure_leaves_weather_intact() {
        let dash = dashboard().with_summarizer(Arc::new(BrokenSummarizer));

        assert_eq!(dash.search("Rome").await, SearchOutcome::Updated);

        let state = dash.snapshot();
        assert!(state.weather.is_some());
        assert!(state.summary.is_none());
        assert!(state.error.is_none());
        assert!(!state.loading);
    }

    #[tokio::test(start_paused = true)]
    async fn latest_request_wins_over_slower_earlier_one() {
        let dash = Arc::new(dashboard());

        let earlier = tokio::spawn({
            let dash = Arc::clone(&dash);
            async move { dash.search("slow town").await }
        });
        tokio::time::sleep(Duration::from_millis(10)).await;
        let later = tokio::spawn({
            let dash = Arc::clone(&dash);
            async move { dash.search("Madrid").await }
        });

        assert_eq!(later.await.unwrap(), SearchOutcome::Updated);
        assert_eq!(earlier.await.unwrap(), SearchOutcome::Superseded);

        let state = dash.snapshot();
        assert_eq!(state.location, "Madrid");
        assert_eq!(
            state.weather.map(|w| w.current.location).as_deref(),
            Some("Madrid")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn synthetic_lookups_resolve_out_of_order() {
        let provider = SyntheticProvider::new(Arc::new(FixedClock(Weekday::Fri)));
        let dash = Arc::new(Dashboard::new(
            Arc::new(provider),
            "New York",
            TemperatureUnit::Celsius,
        ));

        // london sleeps 996 ms, paris 503 ms
        let london = tokio::spawn({
            let dash = Arc::clone(&dash);
            async move { dash.search("london").await }
        });
        tokio::time::sleep(Duration::from_millis(1)).await;
        let paris = tokio::spawn({
            let dash = Arc::clone(&dash);
            async move { dash.search("paris").await }
        });

        assert_eq!(paris.await.unwrap(), SearchOutcome::Updated);
        assert_eq!(london.await.unwrap(), SearchOutcome::Superseded);
        assert_eq!(dash.snapshot().location, "Paris");
    }
}
