use thiserror::Error;

/// Failures of a weather lookup. The synthetic provider never produces one.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Could not find location: {0}")]
    LocationNotFound(String),

    #[error("Weather provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Unexpected weather provider response: {0}")]
    Decode(String),
}

impl WeatherError {
    /// The single message shown to users for any lookup failure.
    pub fn user_message(&self, location: &str) -> String {
        format!("Could not fetch weather for \"{location}\". Please try another location.")
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::ProviderUnavailable(err.to_string())
        }
    }
}

/// Failures of the optional summary call. Never surfaced to users.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Summary request failed: {0}")]
    Request(String),

    #[error("Summary response contained no text")]
    Empty,
}

impl From<reqwest::Error> for SummaryError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err.to_string())
    }
}
