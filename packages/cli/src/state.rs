//! Dashboard state, owned by the binary.
//!
//! All mutation goes through the event methods below, one per thing
//! that can happen: location resolved, a fetch completing (with or
//! without data), the city name resolving, the user picking an
//! activity. The two fetches complete independently and each touches
//! only its own slot.

use airguard_air_models::{ActivityChoice, AirQualityReading, Coordinate};

/// The dashboard's mutable state.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    coordinate: Option<Coordinate>,
    city: Option<String>,
    reading: Option<AirQualityReading>,
    activity: Option<ActivityChoice>,
    loading: bool,
}

impl DashboardState {
    /// Creates the initial empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The location became available; fetching can start.
    pub const fn location_resolved(&mut self, coordinate: Coordinate) {
        self.coordinate = Some(coordinate);
    }

    /// Both fetches were (re)issued; the reading is pending.
    pub const fn fetch_started(&mut self) {
        self.loading = true;
    }

    /// The air-quality fetch completed.
    ///
    /// `None` means the fetch or parse failed: the previous reading is
    /// cleared wholesale, never partially kept.
    pub const fn reading_fetched(&mut self, reading: Option<AirQualityReading>) {
        self.reading = reading;
        self.loading = false;
    }

    /// The naming fetch completed. `None` leaves the city unresolved
    /// and the dashboard shows a placeholder.
    pub fn city_resolved(&mut self, city: Option<String>) {
        self.city = city;
    }

    /// The user picked an activity.
    pub const fn activity_selected(&mut self, activity: ActivityChoice) {
        self.activity = Some(activity);
    }

    /// The resolved coordinate, if any.
    #[must_use]
    pub const fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }

    /// The resolved city name, if any.
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// The current reading, if the last fetch succeeded.
    #[must_use]
    pub const fn reading(&self) -> Option<&AirQualityReading> {
        self.reading.as_ref()
    }

    /// The selected activity, if any.
    #[must_use]
    pub const fn activity(&self) -> Option<ActivityChoice> {
        self.activity
    }

    /// Whether a fetch is currently in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }
}
