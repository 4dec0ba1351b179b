//! Terminal rendering of the dashboard panels.
//!
//! Renders into a `String` rather than straight to stdout so the
//! panel logic stays testable; `main` just prints the result.

use std::fmt::Write as _;

use airguard_air_models::{ActivityChoice, AirQualityReading, ColorTier, SeverityTier};
use airguard_classify::advice;
use airguard_classify::pollution_source_of;
use console::Style;

use crate::state::DashboardState;

/// Maps a color tier to its terminal style.
fn tier_style(tier: ColorTier) -> Style {
    match tier {
        ColorTier::Good => Style::new().green(),
        ColorTier::Fair => Style::new().green().bright(),
        ColorTier::Moderate => Style::new().yellow(),
        ColorTier::Poor => Style::new().red(),
        ColorTier::VeryPoor => Style::new().red().bold(),
        ColorTier::Hazardous => Style::new().magenta().bold(),
        ColorTier::Gray => Style::new().dim(),
    }
}

/// Maps a pollutant severity tier to its indicator dot.
fn severity_dot(tier: SeverityTier) -> console::StyledObject<&'static str> {
    match tier {
        SeverityTier::Normal => Style::new().green().apply_to("●"),
        SeverityTier::Elevated => Style::new().blue().apply_to("●"),
        SeverityTier::High => Style::new().red().apply_to("●"),
    }
}

/// Renders the full dashboard for the current state.
#[must_use]
pub fn render_dashboard(state: &DashboardState) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}  {}",
        Style::new().cyan().bold().apply_to("AirGuard"),
        Style::new().dim().apply_to("Real-time Air Quality Monitoring")
    );
    let _ = writeln!(out);

    render_location(&mut out, state);
    let _ = writeln!(out);
    render_reading(&mut out, state);

    out
}

fn render_location(out: &mut String, state: &DashboardState) {
    let _ = writeln!(out, "Current Location");
    match state.city() {
        Some(city) => {
            let _ = writeln!(out, "  City:        {city}");
        }
        None => {
            let _ = writeln!(
                out,
                "  City:        {}",
                Style::new().dim().apply_to("Locating...")
            );
        }
    }
    match state.coordinate() {
        Some(coordinate) => {
            let _ = writeln!(
                out,
                "  Coordinates: {:.4}, {:.4}",
                coordinate.latitude, coordinate.longitude
            );
        }
        None => {
            let _ = writeln!(
                out,
                "  Coordinates: {}",
                Style::new().dim().apply_to("Calculating...")
            );
        }
    }
}

fn render_reading(out: &mut String, state: &DashboardState) {
    let _ = writeln!(out, "Air Quality Index");

    if state.is_loading() {
        let _ = writeln!(
            out,
            "  {}",
            Style::new().dim().apply_to("Analyzing atmosphere...")
        );
        return;
    }

    let Some(reading) = state.reading() else {
        let _ = writeln!(out, "  Unable to fetch AQI data");
        return;
    };

    let category = airguard_air_models::AqiCategory::from_index(reading.aqi);
    let style = tier_style(ColorTier::from_index(reading.aqi));
    let _ = writeln!(
        out,
        "  AQI {}  {}",
        style.apply_to(reading.aqi),
        style.apply_to(category.label())
    );
    let _ = writeln!(
        out,
        "  Last updated: {}",
        reading
            .observed_at
            .with_timezone(&chrono::Local)
            .format("%H:%M:%S")
    );

    if advice::is_alert(reading.aqi) {
        let _ = writeln!(
            out,
            "  {} {}",
            Style::new().yellow().apply_to("!"),
            Style::new().yellow().apply_to(advice::ALERT_BANNER)
        );
    }

    let _ = writeln!(out);
    render_components(out, reading);

    let _ = writeln!(out);
    let _ = writeln!(out, "Primary Pollution Source");
    let _ = writeln!(
        out,
        "  {}",
        Style::new()
            .cyan()
            .apply_to(pollution_source_of(reading.components.as_ref()).label())
    );
}

fn render_components(out: &mut String, reading: &AirQualityReading) {
    let _ = writeln!(out, "Atmospheric Composition");

    let Some(components) = reading.components else {
        let _ = writeln!(out, "  Unable to fetch pollutant data");
        return;
    };

    for (pollutant, value) in components.levels() {
        let dot = severity_dot(pollutant.severity_tier(value));
        let _ = writeln!(
            out,
            "  {dot} {:<17} {value:>8.1} µg/m³",
            pollutant.display_name()
        );
    }
}

/// Renders the advisory panel for the selected activity.
///
/// Includes the supplementary jogging caution when the current
/// reading's AQI is worse than Moderate.
#[must_use]
pub fn render_advice(activity: ActivityChoice, reading: Option<&AirQualityReading>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Activity Recommendations");
    let _ = writeln!(
        out,
        "  {}: {}",
        activity.label(),
        Style::new().cyan().apply_to(advice::recommendation_for(activity))
    );

    if let Some(caution) = reading.and_then(|r| advice::caution_for(activity, r.aqi)) {
        let _ = writeln!(
            out,
            "  {} {}",
            Style::new().yellow().apply_to("!"),
            Style::new().yellow().apply_to(caution)
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use airguard_air_models::{Coordinate, PollutantLevels};
    use chrono::Utc;

    fn reading_with(aqi: u8, components: Option<PollutantLevels>) -> AirQualityReading {
        AirQualityReading {
            aqi,
            components,
            observed_at: Utc::now(),
        }
    }

    /// AQI 4 with dust-dominated components must render Poor, the
    /// dust source, and the alert banner together.
    #[test]
    fn poor_dusty_reading_renders_category_source_and_alert() {
        let components = PollutantLevels {
            pm2_5: 60.0,
            pm10: 90.0,
            no2: 10.0,
            so2: 5.0,
            co: 0.2,
            nh3: 1.0,
            ..PollutantLevels::default()
        };
        let mut state = DashboardState::new();
        state.location_resolved(Coordinate {
            latitude: 28.6667,
            longitude: 77.2167,
        });
        state.reading_fetched(Some(reading_with(4, Some(components))));

        let out = render_dashboard(&state);
        assert!(out.contains("Poor"), "missing category: {out}");
        assert!(out.contains("Dust/Airborne Particles"), "missing source: {out}");
        assert!(out.contains(advice::ALERT_BANNER), "missing banner: {out}");
    }

    #[test]
    fn cleared_reading_renders_unable_to_fetch() {
        let mut state = DashboardState::new();
        state.reading_fetched(None);

        let out = render_dashboard(&state);
        assert!(out.contains("Unable to fetch AQI data"), "{out}");
    }

    #[test]
    fn loading_state_renders_spinner_text() {
        let mut state = DashboardState::new();
        state.fetch_started();

        let out = render_dashboard(&state);
        assert!(out.contains("Analyzing atmosphere..."), "{out}");
    }

    #[test]
    fn good_reading_has_no_alert_banner() {
        let mut state = DashboardState::new();
        state.reading_fetched(Some(reading_with(2, Some(PollutantLevels::default()))));

        let out = render_dashboard(&state);
        assert!(!out.contains(advice::ALERT_BANNER), "{out}");
    }

    #[test]
    fn unresolved_city_renders_placeholder() {
        let state = DashboardState::new();
        let out = render_dashboard(&state);
        assert!(out.contains("Locating..."), "{out}");
    }

    #[test]
    fn coordinates_render_with_four_decimals() {
        let mut state = DashboardState::new();
        state.location_resolved(Coordinate {
            latitude: 41.878_113,
            longitude: -87.629_799,
        });
        let out = render_dashboard(&state);
        assert!(out.contains("41.8781, -87.6298"), "{out}");
    }

    #[test]
    fn jogging_advice_includes_caution_only_when_poor() {
        let poor = reading_with(4, None);
        let fair = reading_with(2, None);

        let with_caution = render_advice(ActivityChoice::Jogging, Some(&poor));
        assert!(with_caution.contains(advice::JOGGING_CAUTION), "{with_caution}");

        let without = render_advice(ActivityChoice::Jogging, Some(&fair));
        assert!(!without.contains(advice::JOGGING_CAUTION), "{without}");
    }

    #[test]
    fn missing_components_render_pollutant_fallback() {
        let mut state = DashboardState::new();
        state.reading_fetched(Some(reading_with(3, None)));
        let out = render_dashboard(&state);
        assert!(out.contains("Unable to fetch pollutant data"), "{out}");
        assert!(out.contains("Unknown"), "source should be Unknown: {out}");
    }
}
