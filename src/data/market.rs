//! Mandi price tables.
//!
//! DESIGN
//! ======
//! A refresh rebuilds the whole table from scratch. Percent change and trend
//! are derived from the two prices at construction time so a record can
//! never carry a trend that disagrees with its change.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

// =============================================================================
// SELECTIONS
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    #[default]
    Tomato,
    Onion,
    Potato,
    Cabbage,
    Carrot,
}

impl Crop {
    pub const ALL: [Self; 5] = [Self::Tomato, Self::Onion, Self::Potato, Self::Cabbage, Self::Carrot];

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Tomato => "tomato",
            Self::Onion => "onion",
            Self::Potato => "potato",
            Self::Cabbage => "cabbage",
            Self::Carrot => "carrot",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Tomato => "Tomato",
            Self::Onion => "Onion",
            Self::Potato => "Potato",
            Self::Cabbage => "Cabbage",
            Self::Carrot => "Carrot",
        }
    }

    #[must_use]
    pub fn localized_name(self) -> &'static str {
        match self {
            Self::Tomato => "ಟೊಮೆಟೊ",
            Self::Onion => "ಈರುಳ್ಳಿ",
            Self::Potato => "ಆಲೂಗಡ್ಡೆ",
            Self::Cabbage => "ಎಲೆಕೋಸು",
            Self::Carrot => "ಕ್ಯಾರೆಟ್",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Market {
    #[default]
    Bangalore,
    Mysore,
    Hubli,
    Belgaum,
}

impl Market {
    pub const ALL: [Self; 4] = [Self::Bangalore, Self::Mysore, Self::Hubli, Self::Belgaum];

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Bangalore => "bangalore",
            Self::Mysore => "mysore",
            Self::Hubli => "hubli",
            Self::Belgaum => "belgaum",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bangalore => "Bangalore",
            Self::Mysore => "Mysore",
            Self::Hubli => "Hubli",
            Self::Belgaum => "Belgaum",
        }
    }

    #[must_use]
    pub fn localized_name(self) -> &'static str {
        match self {
            Self::Bangalore => "ಬೆಂಗಳೂರು",
            Self::Mysore => "ಮೈಸೂರು",
            Self::Hubli => "ಹುಬ್ಳಿ",
            Self::Belgaum => "ಬೆಳಗಾವಿ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownSelection {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for Crop {
    type Err = UnknownSelection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.value() == wanted)
            .ok_or(UnknownSelection { kind: "crop", value: wanted })
    }
}

impl FromStr for Market {
    type Err = UnknownSelection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.value() == wanted)
            .ok_or(UnknownSelection { kind: "market", value: wanted })
    }
}

// =============================================================================
// RECORDS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    #[must_use]
    pub fn from_change(percent_change: f64) -> Self {
        if percent_change > 0.0 {
            Self::Up
        } else if percent_change < 0.0 {
            Self::Down
        } else {
            Self::Stable
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Stable => "stable",
        })
    }
}

/// Current price of one crop at one mandi.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketPrice {
    pub crop: String,
    pub current_price: f64,
    pub previous_price: f64,
    /// `(current - previous) / previous * 100`, rounded to one decimal.
    pub percent_change: f64,
    pub market: String,
    pub unit: String,
    pub trend: Trend,
    pub localized_name: String,
}

impl MarketPrice {
    #[must_use]
    pub fn new(crop: Crop, current_price: f64, previous_price: f64, market: Market) -> Self {
        let percent_change = percent_change(current_price, previous_price);
        Self {
            crop: crop.name().to_string(),
            current_price,
            previous_price,
            percent_change,
            market: market.name().to_string(),
            unit: "per kg".to_string(),
            trend: Trend::from_change(percent_change),
            localized_name: crop.localized_name().to_string(),
        }
    }
}

fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    let raw = (current - previous) / previous * 100.0;
    // Normalise -0.0 so a zero change never renders with a sign.
    ((raw * 10.0).round() / 10.0) + 0.0
}

/// One point of the 7-day price series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    pub label: String,
    pub price: f64,
}

static PRICES: &[(Crop, f64, f64)] = &[(Crop::Tomato, 45.0, 42.0), (Crop::Onion, 28.0, 30.0), (Crop::Potato, 22.0, 22.0)];

static HISTORY: &[(&str, f64)] =
    &[("Mon", 38.0), ("Tue", 40.0), ("Wed", 42.0), ("Thu", 41.0), ("Fri", 43.0), ("Sat", 45.0), ("Sun", 45.0)];

/// Build a fresh price table for `market`.
#[must_use]
pub fn price_table(market: Market) -> Vec<MarketPrice> {
    PRICES
        .iter()
        .map(|&(crop, current, previous)| MarketPrice::new(crop, current, previous, market))
        .collect()
}

/// Build a fresh 7-day series, Mon..Sun.
#[must_use]
pub fn price_history() -> Vec<PricePoint> {
    HISTORY
        .iter()
        .map(|&(label, price)| PricePoint { label: label.to_string(), price })
        .collect()
}
