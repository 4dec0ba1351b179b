#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Pollution source classification and activity recommendations.
//!
//! The source classifier is an ordered rule chain over component
//! concentrations; first match wins. Thresholds are fixed constants
//! chosen by hand, not calibrated against any dataset, so treat the
//! output as a hint for the dashboard rather than a measurement.

pub mod advice;

use airguard_air_models::PollutantLevels;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// PM2.5 concentration implicating dust/particulates, in µg/m³.
const DUST_PM2_5: f64 = 50.0;
/// PM10 concentration implicating dust/particulates, in µg/m³.
const DUST_PM10: f64 = 80.0;
/// NO₂ concentration implicating industrial emissions, in µg/m³.
const INDUSTRIAL_NO2: f64 = 50.0;
/// SO₂ concentration implicating industrial emissions, in µg/m³.
const INDUSTRIAL_SO2: f64 = 40.0;
/// CO concentration implicating traffic, in µg/m³. Paired with NO₂
/// because CO alone is too common to be discriminating.
const VEHICULAR_CO: f64 = 1.0;
/// NO₂ concentration implicating traffic, in µg/m³.
const VEHICULAR_NO2: f64 = 30.0;
/// NH₃ concentration implicating household chemistry, in µg/m³.
const HOUSEHOLD_NH3: f64 = 10.0;
/// SO₂ concentration implicating household chemistry, in µg/m³.
const HOUSEHOLD_SO2: f64 = 20.0;

/// The guessed dominant source of the current pollution mix.
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
pub enum PollutionSource {
    /// Dominated by particulate matter.
    DustAirborneParticles,
    /// Dominated by NO₂/SO₂ emissions.
    Industrial,
    /// CO plus NO₂ combination typical of traffic.
    Vehicular,
    /// NH₃/SO₂ levels typical of household chemical use.
    HouseholdChemicals,
    /// Nothing stands out.
    MixedSource,
    /// No component data was available.
    Unknown,
}

impl PollutionSource {
    /// Returns the label shown on the dashboard.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DustAirborneParticles => "Dust/Airborne Particles",
            Self::Industrial => "Industrial",
            Self::Vehicular => "Vehicular",
            Self::HouseholdChemicals => "Household Chemicals",
            Self::MixedSource => "Mixed Source",
            Self::Unknown => "Unknown",
        }
    }
}

/// Guesses the dominant pollution source from component concentrations.
///
/// The rules are evaluated in order and the first match wins, so a
/// reading that satisfies several rules is attributed to the earliest
/// one. A reading with no component data short-circuits to
/// [`PollutionSource::Unknown`] before the chain runs.
#[must_use]
pub fn pollution_source_of(components: Option<&PollutantLevels>) -> PollutionSource {
    let Some(c) = components else {
        return PollutionSource::Unknown;
    };

    if c.pm2_5 > DUST_PM2_5 || c.pm10 > DUST_PM10 {
        PollutionSource::DustAirborneParticles
    } else if c.no2 > INDUSTRIAL_NO2 || c.so2 > INDUSTRIAL_SO2 {
        PollutionSource::Industrial
    } else if c.co > VEHICULAR_CO && c.no2 > VEHICULAR_NO2 {
        PollutionSource::Vehicular
    } else if c.nh3 > HOUSEHOLD_NH3 || c.so2 > HOUSEHOLD_SO2 {
        PollutionSource::HouseholdChemicals
    } else {
        PollutionSource::MixedSource
    }
}
