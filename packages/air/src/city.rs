//! Reverse location naming via the OpenWeather weather endpoint.
//!
//! The dashboard only needs the `name` field from the response body.
//! Failure here never blocks anything: the caller leaves the city
//! unresolved and the dashboard shows a placeholder.

use airguard_air_models::Coordinate;

use crate::FetchError;
use crate::config::ApiConfig;

/// Resolves a coordinate to a display city name.
///
/// Returns `Ok(None)` when the response parses but carries no usable
/// `name` (some rural or over-water coordinates resolve to an empty
/// string).
///
/// # Errors
///
/// Returns [`FetchError`] if the HTTP request or body decoding fails.
pub async fn fetch_city_name(
    client: &reqwest::Client,
    config: &ApiConfig,
    coordinate: Coordinate,
) -> Result<Option<String>, FetchError> {
    log::info!(
        "[CityName] Resolving name for {:.4},{:.4}",
        coordinate.latitude,
        coordinate.longitude
    );

    let resp = client
        .get(&config.weather_url)
        .query(&[
            ("lat", coordinate.latitude.to_string()),
            ("lon", coordinate.longitude.to_string()),
            ("appid", config.api_key.clone()),
        ])
        .send()
        .await?;

    let body: serde_json::Value = resp.json().await?;
    Ok(parse_city(&body))
}

/// Extracts the display name from a weather response body.
#[must_use]
fn parse_city(body: &serde_json::Value) -> Option<String> {
    body["name"]
        .as_str()
        .filter(|name| !name.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_city_name() {
        let body = serde_json::json!({
            "coord": {"lon": -87.6298, "lat": 41.8781},
            "name": "Chicago",
            "cod": 200
        });
        assert_eq!(parse_city(&body), Some("Chicago".to_string()));
    }

    #[test]
    fn missing_name_is_unresolved() {
        let body = serde_json::json!({"cod": 200});
        assert_eq!(parse_city(&body), None);
    }

    #[test]
    fn empty_name_is_unresolved() {
        let body = serde_json::json!({"name": ""});
        assert_eq!(parse_city(&body), None);
    }
}
