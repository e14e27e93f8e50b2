//! Plain-text versions of the current-conditions and forecast cards.

use std::fmt::Write;

use weathernow_core::{Backdrop, DashboardState, categorize};

pub fn render(state: &DashboardState) -> String {
    let mut out = String::new();

    if let Some(error) = &state.error {
        let _ = writeln!(out, "Error: {error}");
        return out;
    }

    let Some(weather) = &state.weather else {
        return out;
    };

    let unit = state.unit;
    let current = &weather.current;

    let _ = writeln!(
        out,
        "{}  [{}]",
        current.location,
        categorize(&current.description).icon_name()
    );
    let _ = writeln!(
        out,
        "  {}{}  {}",
        unit.display(current.temperature_c),
        unit.symbol(),
        current.description
    );
    if let Some(summary) = &state.summary {
        let _ = writeln!(out, "  {summary}");
    }
    let _ = writeln!(
        out,
        "  Humidity {}%   Wind {} km/h   Unit {}   Backdrop {}",
        current.humidity_pct,
        current.wind_speed_kmh,
        unit.label(),
        Backdrop::for_description(&current.description).as_str()
    );

    if !weather.forecast.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "5-Day Forecast");
        for day in &weather.forecast {
            let _ = writeln!(
                out,
                "  {:<4}{:<17}{:<30}{}°",
                day.day.to_string(),
                format!("[{}]", categorize(&day.description).icon_name()),
                day.description,
                unit.display(day.temperature_c)
            );
        }
    }

    out
}
