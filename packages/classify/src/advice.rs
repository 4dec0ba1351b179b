//! Static activity recommendation table.
//!
//! Advisory texts are fixed strings; the only coupling with the
//! current reading is the supplementary jogging caution, shown when
//! the AQI is worse than Moderate.

use airguard_air_models::ActivityChoice;

/// AQI index above which the dashboard shows the alert banner and the
/// jogging caution.
pub const ALERT_AQI: u8 = 3;

/// Caution appended to the jogging advisory when the AQI is worse
/// than Moderate.
pub const JOGGING_CAUTION: &str =
    "Current AQI levels are not ideal for outdoor exercise. Consider indoor alternatives today.";

/// Banner shown whenever the AQI is worse than Moderate.
pub const ALERT_BANNER: &str = "Air quality alert in effect";

/// Returns the fixed advisory text for an activity.
#[must_use]
pub const fn recommendation_for(activity: ActivityChoice) -> &'static str {
    match activity {
        ActivityChoice::Jogging => {
            "Prefer jogging in the early morning when pollution levels are lower."
        }
        ActivityChoice::Commute => "Wear a mask and avoid peak traffic hours if AQI is high.",
        ActivityChoice::IndoorStay => {
            "Keep windows closed and use air purifiers if AQI is poor."
        }
        ActivityChoice::SchoolOrWork => {
            "Try to carpool or use public transport to reduce emissions."
        }
    }
}

/// Whether the given AQI index warrants the alert banner.
#[must_use]
pub const fn is_alert(aqi: u8) -> bool {
    aqi > ALERT_AQI
}

/// Returns the supplementary caution for the selected activity, if the
/// current AQI calls for one.
///
/// Only jogging carries a caution, and only when the AQI is worse
/// than Moderate; every other activity/AQI combination returns `None`.
#[must_use]
pub const fn caution_for(activity: ActivityChoice, aqi: u8) -> Option<&'static str> {
    match activity {
        ActivityChoice::Jogging if is_alert(aqi) => Some(JOGGING_CAUTION),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_activity_has_advice() {
        for &activity in ActivityChoice::all() {
            assert!(!recommendation_for(activity).is_empty());
        }
    }

    #[test]
    fn jogging_caution_only_above_moderate() {
        assert_eq!(
            caution_for(ActivityChoice::Jogging, 4),
            Some(JOGGING_CAUTION)
        );
        assert_eq!(caution_for(ActivityChoice::Jogging, 5), Some(JOGGING_CAUTION));
        assert_eq!(caution_for(ActivityChoice::Jogging, 2), None);
        assert_eq!(caution_for(ActivityChoice::Jogging, 3), None);
    }

    #[test]
    fn other_activities_never_get_cautions() {
        for &activity in ActivityChoice::all() {
            if activity == ActivityChoice::Jogging {
                continue;
            }
            for aqi in 1..=5 {
                assert_eq!(caution_for(activity, aqi), None, "{activity:?} at {aqi}");
            }
        }
    }

    #[test]
    fn alert_threshold_matches_scale() {
        assert!(!is_alert(3));
        assert!(is_alert(4));
        assert!(is_alert(5));
    }
}
