//! Location resolution.
//!
//! The terminal analog of the browser's single-shot geolocation
//! request: explicit coordinates (CLI flags) take priority, otherwise
//! one ip-api.com lookup. A failure here is terminal for the session;
//! the binary alerts the user and fetches nothing.
//!
//! See <https://ip-api.com/docs/api:json>

use airguard_air_models::Coordinate;
use thiserror::Error;

use crate::config::ApiConfig;

/// Errors from location resolution.
#[derive(Debug, Error)]
pub enum LocationError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The geolocation service could not place this client.
    #[error("geolocation lookup failed: {message}")]
    Lookup {
        /// Reason reported by the service, when it gave one.
        message: String,
    },
}

/// Resolves the coordinate to monitor.
///
/// Explicit coordinates are returned as-is; without them, one IP-based
/// lookup is issued.
///
/// # Errors
///
/// Returns [`LocationError`] if the lookup request fails or the
/// service reports a non-success status.
pub async fn resolve(
    client: &reqwest::Client,
    config: &ApiConfig,
    explicit: Option<Coordinate>,
) -> Result<Coordinate, LocationError> {
    if let Some(coordinate) = explicit {
        log::debug!(
            "[Location] Using explicit coordinates {:.4},{:.4}",
            coordinate.latitude,
            coordinate.longitude
        );
        return Ok(coordinate);
    }

    log::info!("[Location] Resolving position via {}", config.geolocate_url);
    let resp = client.get(&config.geolocate_url).send().await?;
    let body: serde_json::Value = resp.json().await?;
    parse_response(&body)
}

/// Parses an ip-api.com JSON response into a coordinate.
fn parse_response(body: &serde_json::Value) -> Result<Coordinate, LocationError> {
    let status = body["status"].as_str().unwrap_or("missing status");
    if status != "success" {
        let message = body["message"]
            .as_str()
            .unwrap_or(status)
            .to_string();
        return Err(LocationError::Lookup { message });
    }

    let latitude = body["lat"].as_f64().ok_or_else(|| LocationError::Lookup {
        message: "missing lat in geolocation response".to_string(),
    })?;
    let longitude = body["lon"].as_f64().ok_or_else(|| LocationError::Lookup {
        message: "missing lon in geolocation response".to_string(),
    })?;

    Ok(Coordinate {
        latitude,
        longitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_successful_lookup() {
        let body = serde_json::json!({
            "status": "success",
            "country": "United States",
            "city": "Chicago",
            "lat": 41.8781,
            "lon": -87.6298
        });
        let coordinate = parse_response(&body).unwrap();
        assert!((coordinate.latitude - 41.8781).abs() < 1e-4);
        assert!((coordinate.longitude - -87.6298).abs() < 1e-4);
    }

    #[test]
    fn failed_status_reports_service_message() {
        let body = serde_json::json!({
            "status": "fail",
            "message": "private range"
        });
        match parse_response(&body) {
            Err(LocationError::Lookup { message }) => assert_eq!(message, "private range"),
            other => panic!("expected lookup error, got {other:?}"),
        }
    }

    #[test]
    fn missing_coordinates_are_a_lookup_error() {
        let body = serde_json::json!({"status": "success"});
        assert!(matches!(
            parse_response(&body),
            Err(LocationError::Lookup { .. })
        ));
    }
}
