#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Terminal dashboard for real-time air quality at the current
//! location.
//!
//! One location resolution triggers two independent OpenWeather
//! fetches (the reading and the city name), joined concurrently;
//! each result lands in its own slot of [`state::DashboardState`].
//! An interactive menu then drives activity selection and refresh.
//!
//! Uses `indicatif-log-bridge` (via [`airguard_cli_utils::init_logger`])
//! to route `log` output through `indicatif::MultiProgress` so that
//! log lines and the fetch spinner never fight for the terminal.

mod render;
mod state;

use std::path::PathBuf;

use airguard_air::config::ApiConfig;
use airguard_air::{air_pollution, city, location};
use airguard_air_models::{ActivityChoice, Coordinate};
use airguard_cli_utils::MultiProgress;
use clap::Parser;
use dialoguer::Select;

use state::DashboardState;

/// Real-time air quality dashboard for your current location.
#[derive(Debug, Parser)]
#[command(name = "airguard")]
struct Args {
    /// Latitude to monitor (requires --lon; skips IP geolocation).
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Longitude to monitor (requires --lat; skips IP geolocation).
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Path to the configuration file (defaults to ./airguard.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Preselect an activity instead of prompting.
    #[arg(long)]
    activity: Option<ActivityChoice>,

    /// Render once and exit instead of entering the menu.
    #[arg(long)]
    no_interactive: bool,
}

/// Menu entries appended after the four activities.
const MENU_REFRESH: &str = "Refresh data";
const MENU_EXIT: &str = "Exit";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let multi = airguard_cli_utils::init_logger();

    let config = ApiConfig::load(args.config.as_deref())?;
    let client = reqwest::Client::new();

    let explicit = match (args.lat, args.lon) {
        (Some(latitude), Some(longitude)) => Some(Coordinate {
            latitude,
            longitude,
        }),
        _ => None,
    };

    // Geolocation failure is terminal for the session: alert the user
    // and stop before any fetching, the same way the original halts
    // when the browser denies the position request.
    let coordinate = match location::resolve(&client, &config, explicit).await {
        Ok(coordinate) => coordinate,
        Err(e) => {
            log::error!("[Location] {e}");
            eprintln!("Could not determine your location; pass --lat/--lon to set it manually.");
            std::process::exit(1);
        }
    };

    let mut state = DashboardState::new();
    state.location_resolved(coordinate);

    refresh(&multi, &client, &config, &mut state).await;
    println!("{}", render::render_dashboard(&state));

    if let Some(activity) = args.activity {
        state.activity_selected(activity);
        println!("{}", render::render_advice(activity, state.reading()));
    }

    if args.no_interactive {
        return Ok(());
    }

    menu_loop(&multi, &client, &config, &mut state).await
}

/// Issues both fetches for the current location and applies the
/// results.
///
/// The two requests are independent and unordered; each completes
/// into its own state slot. A reading failure clears the reading; a
/// naming failure just leaves the city unresolved.
async fn refresh(
    multi: &MultiProgress,
    client: &reqwest::Client,
    config: &ApiConfig,
    state: &mut DashboardState,
) {
    let Some(coordinate) = state.coordinate() else {
        return;
    };

    state.fetch_started();
    let spinner = airguard_cli_utils::fetch_spinner(multi, "Analyzing atmosphere...");

    let (reading, city_name) = tokio::join!(
        air_pollution::fetch_reading(client, config, coordinate),
        city::fetch_city_name(client, config, coordinate),
    );

    spinner.finish_and_clear();

    match reading {
        Ok(reading) => state.reading_fetched(Some(reading)),
        Err(e) => {
            log::error!("[AirQuality] {e}");
            state.reading_fetched(None);
        }
    }

    match city_name {
        Ok(name) => state.city_resolved(name),
        Err(e) => {
            log::debug!("[CityName] {e}");
            state.city_resolved(None);
        }
    }
}

/// Runs the interactive menu until the user exits.
async fn menu_loop(
    multi: &MultiProgress,
    client: &reqwest::Client,
    config: &ApiConfig,
    state: &mut DashboardState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let mut items: Vec<&str> = ActivityChoice::all()
            .iter()
            .map(|activity| activity.label())
            .collect();
        items.push(MENU_REFRESH);
        items.push(MENU_EXIT);

        println!();
        let selection = Select::new()
            .with_prompt("What activity are you planning today?")
            .items(&items)
            .default(0)
            .interact()?;

        match items[selection] {
            MENU_REFRESH => {
                refresh(multi, client, config, state).await;
                println!("{}", render::render_dashboard(state));
            }
            MENU_EXIT => return Ok(()),
            _ => {
                let activity = ActivityChoice::all()[selection];
                state.activity_selected(activity);
                println!();
                println!("{}", render::render_advice(activity, state.reading()));
            }
        }
    }
}
