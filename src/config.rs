//! Configuration management for the `SnowTrip` application
//!
//! Handles loading configuration from an optional TOML file layered under
//! `SNOWTRIP_` environment variables, and validates the result.

use crate::SnowTripError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "snowtrip.toml";

/// Root configuration structure for the `SnowTrip` application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SnowTripConfig {
    /// HTTP listener settings
    pub server: ServerConfig,
    /// Flight price API settings
    pub flights: FlightApiConfig,
    /// Trip planning defaults
    pub trip: TripConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Verbose request and planner logging
    pub debug: bool,
}

/// Flight price API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightApiConfig {
    /// Travelpayouts API token; without it every search uses fallback flights
    pub api_token: Option<String>,
    /// Price search endpoint
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

/// Trip planning defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TripConfig {
    /// Nights used to price hotel stays
    pub nights: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
    /// Log format (pretty or json)
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_flights_base_url() -> String {
    "https://api.travelpayouts.com/aviasales/v3/prices_for_dates".to_string()
}

fn default_flights_timeout() -> u64 {
    10
}

fn default_nights() -> u32 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
        }
    }
}

impl Default for FlightApiConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            base_url: default_flights_base_url(),
            timeout_seconds: default_flights_timeout(),
        }
    }
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            nights: default_nights(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl SnowTripConfig {
    /// Load configuration from `config_path`, or `snowtrip.toml` in the
    /// working directory, layered under `SNOWTRIP_` environment variables
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // SNOWTRIP_FLIGHTS__API_TOKEN, SNOWTRIP_SERVER__PORT, ...
        builder = builder.add_source(
            Environment::with_prefix("SNOWTRIP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: SnowTripConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Apply default values to blank configuration fields
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_host();
        }
        if self.flights.base_url.is_empty() {
            self.flights.base_url = default_flights_base_url();
        }
        if self.flights.timeout_seconds == 0 {
            self.flights.timeout_seconds = default_flights_timeout();
        }
        if self
            .flights
            .api_token
            .as_ref()
            .is_some_and(|token| token.trim().is_empty())
        {
            self.flights.api_token = None;
        }
        if self.trip.nights == 0 {
            self.trip.nights = default_nights();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_token()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the flight API credential, if one is configured
    pub fn validate_api_token(&self) -> Result<()> {
        if let Some(token) = &self.flights.api_token {
            if token.len() < 8 {
                return Err(SnowTripError::config(
                    "Flight API token appears to be invalid (too short). Please check your token.",
                )
                .into());
            }

            if token.len() > 100 {
                return Err(SnowTripError::config(
                    "Flight API token appears to be invalid (too long). Please check your token.",
                )
                .into());
            }
        }

        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(SnowTripError::config("Server port cannot be 0").into());
        }

        if self.flights.timeout_seconds > 300 {
            return Err(
                SnowTripError::config("Flight API timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.trip.nights > 30 {
            return Err(SnowTripError::config("Trip length cannot exceed 30 nights").into());
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(SnowTripError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(SnowTripError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.flights.base_url.starts_with("http://")
            && !self.flights.base_url.starts_with("https://")
        {
            return Err(SnowTripError::config(
                "Flight API base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        Ok(())
    }

    /// Address the web server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
