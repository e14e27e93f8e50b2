use anyhow::{Context, anyhow};
use clap::{Args, Parser, Subcommand};
use inquire::{Confirm, Password, Select, Text};
use std::sync::Arc;

use weathernow_core::{
    ChatSummarizer, Config, Dashboard, DashboardState, ProviderId, TemperatureUnit,
    WeatherProvider, initial_location,
    provider::{default_provider_from_config, provider_from_config},
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weathernow", version, about = "Current weather and a 5-day forecast")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively choose provider, default location, unit and summary key.
    Configure,

    /// Show weather for a place name or a "lat, lon" pair.
    Show {
        /// Location; falls back to the configured default.
        location: Option<String>,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Show weather for a geolocated position.
    Here {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        #[command(flatten)]
        display: DisplayArgs,
    },
}

#[derive(Debug, Args)]
pub struct DisplayArgs {
    /// Temperature unit: c or f.
    #[arg(long)]
    unit: Option<TemperatureUnit>,

    /// Provider short name, e.g. "synthetic" or "open-meteo".
    #[arg(long)]
    provider: Option<String>,

    /// Skip the AI summary even if one is configured.
    #[arg(long)]
    no_summary: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;

        match self.command {
            Command::Configure => configure(&mut config)?,
            Command::Show { location, display } => {
                let location = location.unwrap_or_else(|| config.default_location().to_string());
                show(&config, &location, &display).await?;
            }
            Command::Here { lat, lon, display } => {
                let location = initial_location(Some((lat, lon)), config.default_location());
                show(&config, &location, &display).await?;
            }
        }

        Ok(())
    }
}

async fn show(config: &Config, location: &str, args: &DisplayArgs) -> anyhow::Result<()> {
    let provider = provider_for(config, args)?;
    let unit = args.unit.unwrap_or(config.unit);

    let mut dashboard = Dashboard::new(Arc::from(provider), location, unit);

    if !args.no_summary {
        if let Some(summarizer) = config.summarizer.as_ref().filter(|_| config.is_summarizer_configured()) {
            let summarizer = ChatSummarizer::new(summarizer)
                .context("Failed to create summary client")?;
            dashboard = dashboard.with_summarizer(Arc::new(summarizer));
        }
    }

    let outcome = dashboard.search(location).await;
    tracing::debug!(?outcome, "search finished");

    let state = dashboard.snapshot();
    print!("{}", crate::render::render(&state));

    check_state(&state, location)
}

/// `--provider` when given, otherwise the configured default.
fn provider_for(config: &Config, args: &DisplayArgs) -> anyhow::Result<Box<dyn WeatherProvider>> {
    match &args.provider {
        Some(name) => provider_from_config(ProviderId::try_from(name.as_str())?, config),
        None => default_provider_from_config(config),
    }
}

/// Turns a failed lookup into a non-zero exit.
fn check_state(state: &DashboardState, location: &str) -> anyhow::Result<()> {
    match &state.error {
        Some(error) => {
            tracing::warn!(location, %error, "weather lookup failed");
            Err(anyhow!("Weather lookup failed for \"{location}\""))
        }
        None => Ok(()),
    }
}

fn configure(config: &mut Config) -> anyhow::Result<()> {
    let provider = Select::new("Weather provider:", ProviderId::all().to_vec())
        .prompt()
        .context("Provider selection aborted")?;
    config.set_default_provider(provider);

    let location = Text::new("Default location:")
        .with_default(config.default_location())
        .prompt()
        .context("Location input aborted")?;
    config.default_location = Some(location.trim().to_string()).filter(|s| !s.is_empty());

    let unit = Select::new(
        "Temperature unit:",
        vec![TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit],
    )
    .prompt()
    .context("Unit selection aborted")?;
    config.unit = unit;

    if provider == ProviderId::Synthetic {
        config.simulate_latency = Confirm::new("Simulate network latency?")
            .with_default(config.simulate_latency)
            .prompt()
            .context("Latency choice aborted")?;
    }

    let key = Password::new("Summary API key (leave empty to skip):")
        .without_confirmation()
        .prompt()
        .context("API key input aborted")?;
    if !key.trim().is_empty() {
        config.upsert_summarizer_api_key(key.trim().to_string());
    }

    config.save()?;
    println!(
        "Saved configuration to {}",
        Config::config_file_path()?.display()
    );

    Ok(())
}
