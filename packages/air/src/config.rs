//! API configuration: credentials and endpoint URLs.
//!
//! Settings come from an optional `airguard.toml` next to the binary,
//! with the `OPENWEATHER_API_KEY` environment variable taking
//! precedence over the file. The credential is never embedded in
//! source. Endpoint URLs default to the public services and are only
//! overridden in tests or when pointing at a proxy.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Environment variable that overrides the configured API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Default path probed for the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "airguard.toml";

const DEFAULT_AIR_QUALITY_URL: &str = "https://api.openweathermap.org/data/2.5/air_pollution";
const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const DEFAULT_GEOLOCATE_URL: &str = "http://ip-api.com/json";

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML.
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// No API key in the file or the environment.
    #[error("no OpenWeather API key configured; set {API_KEY_ENV} or api_key in {DEFAULT_CONFIG_PATH}")]
    MissingApiKey,
}

/// Raw configuration file shape; every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// OpenWeather API key.
    pub api_key: Option<String>,
    /// Override for the air-pollution endpoint.
    pub air_quality_url: Option<String>,
    /// Override for the weather (reverse-naming) endpoint.
    pub weather_url: Option<String>,
    /// Override for the IP-geolocation endpoint.
    pub geolocate_url: Option<String>,
}

/// Resolved API configuration used by all fetchers.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// OpenWeather API key, passed as the `appid` query parameter.
    pub api_key: String,
    /// Air-pollution endpoint URL.
    pub air_quality_url: String,
    /// Weather endpoint URL (reverse naming).
    pub weather_url: String,
    /// IP-geolocation endpoint URL.
    pub geolocate_url: String,
}

impl ApiConfig {
    /// Loads configuration from the given file (or the default path if
    /// it exists) and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an explicitly given file cannot be
    /// read, the TOML is malformed, or no API key is configured.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => Some(read_config_file(path)?),
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if default.exists() {
                    Some(read_config_file(default)?)
                } else {
                    None
                }
            }
        };

        let env_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        Self::resolve(file.unwrap_or_default(), env_key)
    }

    /// Combines a parsed configuration file with the environment
    /// override into the final configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if neither source
    /// provides a key.
    pub fn resolve(file: ConfigFile, env_key: Option<String>) -> Result<Self, ConfigError> {
        let api_key = env_key
            .or(file.api_key)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            api_key,
            air_quality_url: file
                .air_quality_url
                .unwrap_or_else(|| DEFAULT_AIR_QUALITY_URL.to_string()),
            weather_url: file
                .weather_url
                .unwrap_or_else(|| DEFAULT_WEATHER_URL.to_string()),
            geolocate_url: file
                .geolocate_url
                .unwrap_or_else(|| DEFAULT_GEOLOCATE_URL.to_string()),
        })
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(toml::de::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_key_wins_over_file_key() {
        let file = ConfigFile {
            api_key: Some("from-file".to_string()),
            ..ConfigFile::default()
        };
        let config = ApiConfig::resolve(file, Some("from-env".to_string())).unwrap();
        assert_eq!(config.api_key, "from-env");
    }

    #[test]
    fn file_key_used_when_env_absent() {
        let file = ConfigFile {
            api_key: Some("from-file".to_string()),
            ..ConfigFile::default()
        };
        let config = ApiConfig::resolve(file, None).unwrap();
        assert_eq!(config.api_key, "from-file");
    }

    #[test]
    fn missing_key_is_an_error() {
        assert!(matches!(
            ApiConfig::resolve(ConfigFile::default(), None),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn urls_default_to_public_services() {
        let file = ConfigFile {
            api_key: Some("k".to_string()),
            ..ConfigFile::default()
        };
        let config = ApiConfig::resolve(file, None).unwrap();
        assert_eq!(config.air_quality_url, DEFAULT_AIR_QUALITY_URL);
        assert_eq!(config.weather_url, DEFAULT_WEATHER_URL);
        assert_eq!(config.geolocate_url, DEFAULT_GEOLOCATE_URL);
    }

    #[test]
    fn parses_full_config_file() {
        let file: ConfigFile = toml::de::from_str(
            r#"
            api_key = "abc123"
            air_quality_url = "http://localhost:9000/air"
            weather_url = "http://localhost:9000/weather"
            geolocate_url = "http://localhost:9000/ip"
            "#,
        )
        .unwrap();
        let config = ApiConfig::resolve(file, None).unwrap();
        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.air_quality_url, "http://localhost:9000/air");
    }
}
