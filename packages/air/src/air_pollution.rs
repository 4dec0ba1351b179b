//! OpenWeather air-pollution client.
//!
//! One GET per location change; the response body carries a `list`
//! whose first element holds `{main: {aqi}, components: {...}}`. An
//! empty or missing list is invalid data, not an empty success.
//!
//! See <https://openweathermap.org/api/air-pollution>

use airguard_air_models::{AirQualityReading, Coordinate, PollutantLevels};
use chrono::{DateTime, Utc};

use crate::FetchError;
use crate::config::ApiConfig;

/// Fetches the current air-quality reading for a coordinate.
///
/// # Errors
///
/// Returns [`FetchError`] if the HTTP request fails, the body does not
/// have the expected shape, or the reading list is empty. The caller
/// clears its current reading on any error.
pub async fn fetch_reading(
    client: &reqwest::Client,
    config: &ApiConfig,
    coordinate: Coordinate,
) -> Result<AirQualityReading, FetchError> {
    log::info!(
        "[AirQuality] Fetching reading for {:.4},{:.4}",
        coordinate.latitude,
        coordinate.longitude
    );

    let resp = client
        .get(&config.air_quality_url)
        .query(&[
            ("lat", coordinate.latitude.to_string()),
            ("lon", coordinate.longitude.to_string()),
            ("appid", config.api_key.clone()),
        ])
        .send()
        .await?;

    let body: serde_json::Value = resp.json().await?;
    parse_response(&body, Utc::now())
}

/// Parses an air-pollution response body into a reading.
fn parse_response(
    body: &serde_json::Value,
    observed_at: DateTime<Utc>,
) -> Result<AirQualityReading, FetchError> {
    let list = body["list"].as_array().ok_or_else(|| FetchError::Parse {
        message: "missing list in air-pollution response".to_string(),
    })?;

    let Some(first) = list.first() else {
        return Err(FetchError::EmptyReading);
    };

    let aqi = first["main"]["aqi"]
        .as_u64()
        .ok_or_else(|| FetchError::Parse {
            message: "missing main.aqi in air-pollution response".to_string(),
        })?;
    // The live API only reports 1-5. Anything wider still renders,
    // via the Unknown/gray table fallbacks, so saturate rather than
    // reject.
    let aqi = u8::try_from(aqi).unwrap_or(u8::MAX);

    let components = match first.get("components") {
        Some(value) => Some(
            serde_json::from_value::<PollutantLevels>(value.clone()).map_err(|e| {
                FetchError::Parse {
                    message: format!("malformed components in air-pollution response: {e}"),
                }
            })?,
        ),
        None => None,
    };

    Ok(AirQualityReading {
        aqi,
        components,
        observed_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn parses_reading() {
        let body = serde_json::json!({
            "coord": {"lon": 77.2167, "lat": 28.6667},
            "list": [{
                "main": {"aqi": 4},
                "components": {
                    "co": 201.94, "no": 0.02, "no2": 0.77, "o3": 68.66,
                    "so2": 0.64, "pm2_5": 60.0, "pm10": 90.0, "nh3": 0.12
                },
                "dt": 1_606_147_200
            }]
        });
        let reading = parse_response(&body, now()).unwrap();
        assert_eq!(reading.aqi, 4);
        let components = reading.components.unwrap();
        assert!((components.pm2_5 - 60.0).abs() < f64::EPSILON);
        assert!((components.pm10 - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_list_is_invalid_data() {
        let body = serde_json::json!({"list": []});
        assert!(matches!(
            parse_response(&body, now()),
            Err(FetchError::EmptyReading)
        ));
    }

    #[test]
    fn missing_list_is_a_parse_error() {
        let body = serde_json::json!({"cod": 401, "message": "Invalid API key"});
        assert!(matches!(
            parse_response(&body, now()),
            Err(FetchError::Parse { .. })
        ));
    }

    #[test]
    fn missing_aqi_is_a_parse_error() {
        let body = serde_json::json!({"list": [{"components": {}}]});
        assert!(matches!(
            parse_response(&body, now()),
            Err(FetchError::Parse { .. })
        ));
    }

    #[test]
    fn missing_components_yield_none() {
        let body = serde_json::json!({"list": [{"main": {"aqi": 2}}]});
        let reading = parse_response(&body, now()).unwrap();
        assert_eq!(reading.aqi, 2);
        assert!(reading.components.is_none());
    }

    #[test]
    fn out_of_scale_aqi_saturates_instead_of_failing() {
        let body = serde_json::json!({"list": [{"main": {"aqi": 999}}]});
        let reading = parse_response(&body, now()).unwrap();
        assert_eq!(reading.aqi, u8::MAX);
    }
}
