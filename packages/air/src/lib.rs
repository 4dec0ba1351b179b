#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Outbound clients for the AirGuard dashboard.
//!
//! Three single-shot fetchers, one per external interface:
//!
//! 1. **Air quality** ([`air_pollution`]) — the OpenWeather
//!    `air_pollution` endpoint, returning one [`AirQualityReading`].
//! 2. **Location naming** ([`city`]) — the OpenWeather `weather`
//!    endpoint, used only to resolve coordinates to a display name.
//! 3. **Location resolution** ([`location`]) — explicit coordinates
//!    when the caller supplies them, otherwise one ip-api.com lookup.
//!
//! There is deliberately no retry, backoff, or caching layer: every
//! location change issues fresh requests, and a failure is surfaced
//! to the caller to render. Response parsing is split into pure
//! functions over [`serde_json::Value`] so it can be tested without a
//! network.
//!
//! [`AirQualityReading`]: airguard_air_models::AirQualityReading

pub mod air_pollution;
pub mod city;
pub mod config;
pub mod location;

use thiserror::Error;

/// Errors from the OpenWeather fetchers.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not have the expected shape.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parsing failure.
        message: String,
    },

    /// The air-quality response carried an empty reading list, which
    /// the API contract treats as invalid data.
    #[error("air-quality response contained no readings")]
    EmptyReading,
}
