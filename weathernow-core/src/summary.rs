//! Optional natural-language summary of current conditions.
//!
//! A summary is decoration only: [`summarize_quietly`] logs and drops every
//! failure so a lookup never fails because of it.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, time::Duration};

use crate::{config::SummarizerConfig, error::SummaryError, model::WeatherSnapshot};

const REQUEST_TIMEOUT_SECS: u64 = 20;

/// Fields of a snapshot handed to the summarizer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryInput {
    pub location: String,
    pub temperature_c: i32,
    pub humidity_pct: u8,
    pub wind_speed_kmh: f64,
    pub description: String,
}

impl From<&WeatherSnapshot> for SummaryInput {
    fn from(s: &WeatherSnapshot) -> Self {
        Self {
            location: s.location.clone(),
            temperature_c: s.temperature_c,
            humidity_pct: s.humidity_pct,
            wind_speed_kmh: s.wind_speed_kmh,
            description: s.description.clone(),
        }
    }
}

impl SummaryInput {
    fn prompt(&self) -> String {
        format!(
            "Generate a concise and human-readable summary of the current weather conditions \
             for the given location.\n\n\
             Location: {}\n\
             Temperature: {}°C\n\
             Humidity: {}%\n\
             Wind Speed: {} km/h\n\
             Description: {}\n\n\
             Summary:",
            self.location, self.temperature_c, self.humidity_pct, self.wind_speed_kmh, self.description
        )
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Summary {
    pub summary: String,
}

#[async_trait]
pub trait Summarizer: Send + Sync + Debug {
    async fn summarize(&self, input: &SummaryInput) -> Result<Summary, SummaryError>;
}

/// Summarizer backed by an OpenAI-compatible chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct ChatSummarizer {
    http: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl ChatSummarizer {
    pub fn new(config: &SummarizerConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[async_trait]
impl Summarizer for ChatSummarizer {
    async fn summarize(&self, input: &SummaryInput) -> Result<Summary, SummaryError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: "You are a helpful weather assistant.".to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: input.prompt(),
                },
            ],
        };

        let res = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(SummaryError::Request(format!("status {status}")));
        }

        let parsed: ChatResponse = res.json().await?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(SummaryError::Empty)?;

        Ok(Summary { summary: text })
    }
}

/// Runs the summarizer, turning any failure into `None`.
pub async fn summarize_quietly(
    summarizer: &dyn Summarizer,
    snapshot: &WeatherSnapshot,
) -> Option<String> {
    match summarizer.summarize(&SummaryInput::from(snapshot)).await {
        Ok(s) => Some(s.summary),
        Err(e) => {
            tracing::warn!(location = %snapshot.location, error = %e, "AI summary generation failed");
            None
        }
    }
}
