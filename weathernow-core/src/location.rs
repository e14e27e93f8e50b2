//! Location input handling: coordinate detection and display names.

use std::fmt;

/// A lookup target as typed by the user or produced by geolocation.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    Coordinates { latitude: f64, longitude: f64 },
    Place(String),
}

impl LocationQuery {
    /// Recognizes `"<lat>,<lon>"` decimal pairs (optional whitespace after
    /// the comma); everything else is free text.
    pub fn parse(input: &str) -> Self {
        parse_coordinates(input)
            .map(|(latitude, longitude)| Self::Coordinates { latitude, longitude })
            .unwrap_or_else(|| Self::Place(input.to_string()))
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coordinates { latitude, longitude } => {
                f.write_str(&format_coordinates(*latitude, *longitude))
            }
            Self::Place(name) => f.write_str(name),
        }
    }
}

fn parse_coordinates(input: &str) -> Option<(f64, f64)> {
    let (lat, lon) = input.split_once(',')?;
    let lon = lon.trim_start();

    if !is_decimal(lat) || !is_decimal(lon) {
        return None;
    }

    Some((lat.parse().ok()?, lon.parse().ok()?))
}

/// `-?\d+(\.\d*)?` with ASCII digits only.
fn is_decimal(s: &str) -> bool {
    let s = s.strip_prefix('-').unwrap_or(s);
    let (int, frac) = match s.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (s, ""),
    };

    !int.is_empty()
        && int.bytes().all(|b| b.is_ascii_digit())
        && frac.bytes().all(|b| b.is_ascii_digit())
}

/// Formats a geolocated position the way it is fed back into a lookup.
pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    format!("{latitude:.2}, {longitude:.2}")
}

/// Text before the first comma, trimmed, with the first letter of every
/// whitespace-delimited word uppercased.
pub fn display_name(raw: &str) -> String {
    let head = raw.split(',').next().unwrap_or_default().trim();

    let mut out = String::with_capacity(head.len());
    let mut at_word_start = true;
    for c in head.chars() {
        if at_word_start && !c.is_whitespace() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }

    out
}
