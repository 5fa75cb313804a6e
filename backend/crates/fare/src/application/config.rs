//! Application Configuration
//!
//! Configuration for the fare application layer, read from the environment.

use std::path::PathBuf;

use kernel::error::app_error::{AppResult, ResultExt};
use kernel::error::kind::ErrorKind;

use crate::domain::rates::RateSchedule;

pub const ENV_RATES_PATH: &str = "FARE_RATES_PATH";
pub const ENV_BASE_RATE: &str = "FARE_BASE_RATE";
pub const ENV_DISTANCE_RATE: &str = "FARE_DISTANCE_RATE";
pub const ENV_TIME_RATE: &str = "FARE_TIME_RATE";
pub const ENV_PEAK_SURCHARGE: &str = "FARE_PEAK_SURCHARGE";
pub const ENV_AVERAGE_SPEED_MPS: &str = "FARE_AVERAGE_SPEED_MPS";

/// Fare application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct FareConfig {
    /// JSON rate schedule; when set it wins over `fallback_rates`
    pub rates_path: Option<PathBuf>,
    /// Schedule used when no rate file is configured
    pub fallback_rates: RateSchedule,
    /// Average speed for straight-line routing (meters per second)
    pub average_speed_mps: f64,
}

impl Default for FareConfig {
    fn default() -> Self {
        Self {
            rates_path: None,
            fallback_rates: RateSchedule::new(2.50, 1.25, 0.20, 3.00),
            average_speed_mps: 8.0, // ~29 km/h city traffic
        }
    }
}

impl FareConfig {
    /// Build from process environment variables, falling back to defaults.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let number = |key: &'static str, default: f64| -> AppResult<f64> {
            match lookup(key) {
                None => Ok(default),
                Some(raw) => raw
                    .trim()
                    .parse::<f64>()
                    .map_app_err(
                        ErrorKind::InvalidInput,
                        format!("{} is not a number: {:?}", key, raw),
                    )
                    .map_err(|e| e.with_action(format!("Set {} to a decimal value", key))),
            }
        };

        let fallback = &defaults.fallback_rates;
        Ok(Self {
            rates_path: lookup(ENV_RATES_PATH)
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            fallback_rates: RateSchedule::new(
                number(ENV_BASE_RATE, fallback.base_rate)?,
                number(ENV_DISTANCE_RATE, fallback.distance_rate)?,
                number(ENV_TIME_RATE, fallback.time_rate)?,
                number(ENV_PEAK_SURCHARGE, fallback.peak_surcharge)?,
            ),
            average_speed_mps: number(ENV_AVERAGE_SPEED_MPS, defaults.average_speed_mps)?,
        })
    }
}
