#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Air quality taxonomy types and pollutant threshold definitions.
//!
//! This crate defines the canonical pollutant set, AQI category scale,
//! and per-pollutant severity thresholds used across the AirGuard
//! system. The upstream OpenWeather air-pollution API reports an
//! ordinal AQI in the range 1-5 plus a fixed set of component
//! concentrations; everything downstream (classification, rendering,
//! recommendations) works in terms of these types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A WGS84 coordinate pair produced by location resolution.
///
/// Resolved once per session (or per explicit refresh) and treated as
/// immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// The pollutant components reported by the air-pollution API.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Pollutant {
    /// Carbon monoxide.
    Co,
    /// Nitrogen dioxide.
    No2,
    /// Ozone.
    O3,
    /// Sulfur dioxide.
    So2,
    /// Fine particulate matter (diameter below 2.5 micrometres).
    Pm2_5,
    /// Coarse particulate matter (diameter below 10 micrometres).
    Pm10,
    /// Ammonia.
    Nh3,
}

impl Pollutant {
    /// Returns the human-readable name shown on the dashboard.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Co => "Carbon Monoxide",
            Self::No2 => "Nitrogen Dioxide",
            Self::O3 => "Ozone",
            Self::So2 => "Sulfur Dioxide",
            Self::Pm2_5 => "PM2.5",
            Self::Pm10 => "PM10",
            Self::Nh3 => "Ammonia",
        }
    }

    /// Returns the concentration (in µg/m³) above which this pollutant
    /// is flagged as [`SeverityTier::High`] on the dashboard.
    #[must_use]
    pub const fn high_threshold(self) -> f64 {
        match self {
            Self::Co => 10_000.0,
            Self::No2 => 200.0,
            Self::O3 => 100.0,
            Self::So2 => 350.0,
            Self::Pm2_5 => 25.0,
            Self::Pm10 => 50.0,
            Self::Nh3 => 200.0,
        }
    }

    /// Classifies a concentration into its visual severity tier.
    ///
    /// Above the per-pollutant threshold is [`SeverityTier::High`];
    /// any other positive value is [`SeverityTier::Elevated`]; zero
    /// (or a negative value from a misbehaving upstream) is
    /// [`SeverityTier::Normal`].
    #[must_use]
    pub fn severity_tier(self, value: f64) -> SeverityTier {
        if value > self.high_threshold() {
            SeverityTier::High
        } else if value > 0.0 {
            SeverityTier::Elevated
        } else {
            SeverityTier::Normal
        }
    }

    /// Returns all variants of this enum, in API component order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Co,
            Self::No2,
            Self::O3,
            Self::So2,
            Self::Pm2_5,
            Self::Pm10,
            Self::Nh3,
        ]
    }
}

/// Visual severity indicator for a single pollutant concentration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SeverityTier {
    /// No measurable concentration.
    Normal,
    /// Measurable but below the high threshold.
    Elevated,
    /// Above the fixed per-pollutant threshold.
    High,
}

/// Component concentrations from one air-quality reading, in µg/m³.
///
/// Field names match the API's `components` object, so this
/// deserializes directly from the response body.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PollutantLevels {
    /// Carbon monoxide.
    #[serde(default)]
    pub co: f64,
    /// Nitrogen dioxide.
    #[serde(default)]
    pub no2: f64,
    /// Ozone.
    #[serde(default)]
    pub o3: f64,
    /// Sulfur dioxide.
    #[serde(default)]
    pub so2: f64,
    /// Fine particulate matter.
    #[serde(default)]
    pub pm2_5: f64,
    /// Coarse particulate matter.
    #[serde(default)]
    pub pm10: f64,
    /// Ammonia.
    #[serde(default)]
    pub nh3: f64,
}

impl PollutantLevels {
    /// Returns the concentration for the given pollutant.
    #[must_use]
    pub const fn get(&self, pollutant: Pollutant) -> f64 {
        match pollutant {
            Pollutant::Co => self.co,
            Pollutant::No2 => self.no2,
            Pollutant::O3 => self.o3,
            Pollutant::So2 => self.so2,
            Pollutant::Pm2_5 => self.pm2_5,
            Pollutant::Pm10 => self.pm10,
            Pollutant::Nh3 => self.nh3,
        }
    }

    /// Returns `(pollutant, concentration)` pairs in display order.
    #[must_use]
    pub fn levels(&self) -> Vec<(Pollutant, f64)> {
        Pollutant::all()
            .iter()
            .map(|&p| (p, self.get(p)))
            .collect()
    }
}

/// One air-quality reading for a location.
///
/// Fetched once per location change and replaced wholesale on
/// refetch; there are no partial updates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirQualityReading {
    /// Ordinal AQI as reported by the API. The live range is 1-5;
    /// anything else falls through to [`AqiCategory::Unknown`].
    pub aqi: u8,
    /// Component concentrations, when the API supplied them.
    pub components: Option<PollutantLevels>,
    /// When this reading was fetched (drives the "Last updated" line).
    pub observed_at: DateTime<Utc>,
}

/// AQI category label, from 1 (Good) to 5 (Very Poor).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AqiCategory {
    /// AQI 1.
    Good,
    /// AQI 2.
    Fair,
    /// AQI 3.
    Moderate,
    /// AQI 4.
    Poor,
    /// AQI 5.
    VeryPoor,
    /// Any index outside the 1-5 scale.
    Unknown,
}

impl AqiCategory {
    /// Maps an AQI index to its category label.
    ///
    /// This is a fixed ordinal table, not a formula: any index outside
    /// 1-5 (including 6, which the color table knows but the live API
    /// never reports) maps to [`Self::Unknown`] rather than an error.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        match index {
            1 => Self::Good,
            2 => Self::Fair,
            3 => Self::Moderate,
            4 => Self::Poor,
            5 => Self::VeryPoor,
            _ => Self::Unknown,
        }
    }

    /// Returns the label shown on the dashboard.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Moderate => "Moderate",
            Self::Poor => "Poor",
            Self::VeryPoor => "Very Poor",
            Self::Unknown => "Unknown",
        }
    }
}

/// Display color tier for an AQI index.
///
/// Parallel to [`AqiCategory`] but with a sixth entry: the upstream
/// scale documents a Hazardous band that the live 1-5 range never
/// reaches. It is kept so the table stays aligned with the upstream
/// documentation; only unit tests exercise it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ColorTier {
    /// Emerald/green band (AQI 1).
    Good,
    /// Green/lime band (AQI 2).
    Fair,
    /// Yellow/amber band (AQI 3).
    Moderate,
    /// Orange/red band (AQI 4).
    Poor,
    /// Red/rose band (AQI 5).
    VeryPoor,
    /// Purple band (AQI 6; unreachable from the live API range).
    Hazardous,
    /// Gray fallback for any other index.
    Gray,
}

impl ColorTier {
    /// Maps an AQI index to its color tier.
    ///
    /// Indexes 1-6 hit the fixed table; anything else falls back to
    /// [`Self::Gray`].
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        match index {
            1 => Self::Good,
            2 => Self::Fair,
            3 => Self::Moderate,
            4 => Self::Poor,
            5 => Self::VeryPoor,
            6 => Self::Hazardous,
            _ => Self::Gray,
        }
    }
}

/// The activity a user is planning, selected on the dashboard.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityChoice {
    /// Outdoor running.
    Jogging,
    /// Daily commute.
    Commute,
    /// Staying indoors.
    IndoorStay,
    /// School or workplace attendance.
    SchoolOrWork,
}

impl ActivityChoice {
    /// Returns the label shown on the dashboard.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Jogging => "Jogging",
            Self::Commute => "Commute",
            Self::IndoorStay => "Indoor Stay",
            Self::SchoolOrWork => "School/Work",
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Jogging,
            Self::Commute,
            Self::IndoorStay,
            Self::SchoolOrWork,
        ]
    }
}
