//! Temperature conversion and weather advisories.
//!
//! Conversions pivot through Celsius, and the advisory category of a
//! converted temperature is always judged on its Celsius equivalent. The
//! category thresholds default to the classic ones but can be overridden
//! from `.sideline.toml` (see [`AdvisoryThresholds`]).

use crate::errors::SidelineError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A temperature scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Scale {
    /// Single-letter symbol used in terminal output.
    pub fn symbol(self) -> char {
        match self {
            Scale::Celsius => 'C',
            Scale::Fahrenheit => 'F',
            Scale::Kelvin => 'K',
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Scale {
    type Err = SidelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "C" | "c" | "celsius" | "Celsius" => Ok(Scale::Celsius),
            "F" | "f" | "fahrenheit" | "Fahrenheit" => Ok(Scale::Fahrenheit),
            "K" | "k" | "kelvin" | "Kelvin" => Ok(Scale::Kelvin),
            other => Err(SidelineError::invalid_scale(other)),
        }
    }
}

/// Convert a temperature from the given scale to Celsius.
pub fn to_celsius(value: f64, scale: Scale) -> f64 {
    match scale {
        Scale::Celsius => value,
        Scale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        Scale::Kelvin => value - 273.15,
    }
}

/// Convert a temperature in Celsius to the given scale.
pub fn from_celsius(celsius: f64, scale: Scale) -> f64 {
    match scale {
        Scale::Celsius => celsius,
        Scale::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        Scale::Kelvin => celsius + 273.15,
    }
}

/// Convert a temperature between two scales.
pub fn convert(value: f64, from: Scale, to: Scale) -> f64 {
    from_celsius(to_celsius(value, from), to)
}

/// Upper bounds (in Celsius, exclusive) for the advisory categories.
///
/// A temperature below `freezing_below` is Freezing, below `cold_below` is
/// Cold, and so on; anything at or above `hot_below` is Extreme Heat.
/// Bounds must be strictly ascending; an out-of-order set loaded from
/// config is rejected and the defaults used instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryThresholds {
    pub freezing_below: f64,
    pub cold_below: f64,
    pub comfortable_below: f64,
    pub hot_below: f64,
}

impl Default for AdvisoryThresholds {
    fn default() -> Self {
        Self {
            freezing_below: 0.0,
            cold_below: 10.0,
            comfortable_below: 25.0,
            hot_below: 35.0,
        }
    }
}

impl AdvisoryThresholds {
    pub fn validate(&self) -> Result<(), String> {
        let bounds = [
            self.freezing_below,
            self.cold_below,
            self.comfortable_below,
            self.hot_below,
        ];
        if bounds.windows(2).all(|w| w[0] < w[1]) {
            Ok(())
        } else {
            Err(format!(
                "advisory thresholds must be strictly ascending, got {bounds:?}"
            ))
        }
    }
}

/// Advisory category of a temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Freezing,
    Cold,
    Comfortable,
    Hot,
    ExtremeHeat,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Freezing => "Freezing",
            Category::Cold => "Cold",
            Category::Comfortable => "Comfortable",
            Category::Hot => "Hot",
            Category::ExtremeHeat => "Extreme Heat",
        }
    }

    pub fn advisory(self) -> &'static str {
        match self {
            Category::Freezing => "Wear a heavy coat and stay warm.",
            Category::Cold => "Wear a jacket or sweater.",
            Category::Comfortable => "Enjoy the pleasant weather.",
            Category::Hot => "Stay hydrated and wear light clothing.",
            Category::ExtremeHeat => "Stay indoors and drink plenty of water.",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Categorize a temperature given in Celsius.
pub fn categorize(celsius: f64, thresholds: &AdvisoryThresholds) -> Category {
    if celsius < thresholds.freezing_below {
        Category::Freezing
    } else if celsius < thresholds.cold_below {
        Category::Cold
    } else if celsius < thresholds.comfortable_below {
        Category::Comfortable
    } else if celsius < thresholds.hot_below {
        Category::Hot
    } else {
        Category::ExtremeHeat
    }
}

/// Conversion result plus advisory, ready for an output writer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertReport {
    pub input: f64,
    pub from: Scale,
    pub to: Scale,
    pub converted: f64,
    pub category: Category,
    pub advisory: String,
    pub generated_at: DateTime<Utc>,
}

impl ConvertReport {
    pub fn build(value: f64, from: Scale, to: Scale, thresholds: &AdvisoryThresholds) -> Self {
        let converted = convert(value, from, to);
        let category = categorize(to_celsius(converted, to), thresholds);
        Self {
            input: value,
            from,
            to,
            converted,
            category,
            advisory: category.advisory().to_string(),
            generated_at: Utc::now(),
        }
    }
}
