//! Core library for the `weathernow` dashboard.
//!
//! This crate defines:
//! - The hash-driven weather synthesizer (no network needed)
//! - A live Open-Meteo provider behind the same trait
//! - Condition categories, unit conversion and location parsing
//! - The optional AI summary and the dashboard controller tying it together
//!
//! It is used by `weathernow-cli`, but carries no rendering of its own.

pub mod catalog;
pub mod category;
pub mod clock;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod hash;
pub mod location;
pub mod model;
pub mod provider;
pub mod summary;
pub mod synth;
pub mod units;

pub use category::{Backdrop, WeatherCategory, categorize};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Config, OpenMeteoConfig, SummarizerConfig};
pub use dashboard::{Dashboard, DashboardState, RequestToken, SearchOutcome, initial_location};
pub use error::{SummaryError, WeatherError};
pub use hash::string_hash;
pub use location::LocationQuery;
pub use model::{ForecastDay, WeatherBundle, WeatherSnapshot};
pub use provider::{ProviderId, WeatherProvider};
pub use summary::{ChatSummarizer, Summarizer};
pub use units::{TemperatureUnit, celsius_to_fahrenheit};
