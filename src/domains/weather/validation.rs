//! Request validation for the weather tools.
//!
//! Validation always completes before any generation starts, so a failed
//! request never produces partial output.

use super::cities::{City, find_city};
use super::error::WeatherError;
use super::units::Units;

/// Smallest number of forecast days accepted.
pub const MIN_FORECAST_DAYS: i64 = 1;

/// Largest number of forecast days accepted.
pub const MAX_FORECAST_DAYS: i64 = 10;

/// A forecast request whose city, day count and units have been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    pub city: &'static City,
    pub days: u32,
    pub units: Units,
}

/// Resolve a city name against the registry.
pub fn validate_city(city: &str) -> Result<&'static City, WeatherError> {
    find_city(city).ok_or_else(|| WeatherError::unknown_city(city))
}

/// Validate the raw forecast arguments.
///
/// Checks run in the order city, days, units; the first failure wins.
pub fn validate_forecast_request(
    city: &str,
    days: i64,
    units: &str,
) -> Result<ForecastRequest, WeatherError> {
    let city = validate_city(city)?;

    if !(MIN_FORECAST_DAYS..=MAX_FORECAST_DAYS).contains(&days) {
        return Err(WeatherError::InvalidDayCount);
    }
    let days = u32::try_from(days).map_err(|_| WeatherError::InvalidDayCount)?;

    let units = units.parse::<Units>()?;

    Ok(ForecastRequest { city, days, units })
}
