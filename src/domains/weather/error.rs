//! Weather request validation errors.

use thiserror::Error;

/// Validation failures reported back to the caller as structured results.
///
/// The display strings are part of the tool contract and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    /// The city is not in the registry.
    #[error("City '{city}' not found. Available cities: {available}")]
    UnknownCity { city: String, available: String },

    /// The requested number of forecast days is outside `1..=10`.
    #[error("Days must be between 1 and 10")]
    InvalidDayCount,

    /// The units are neither `celsius` nor `fahrenheit`.
    #[error("Units must be either 'celsius' or 'fahrenheit'")]
    InvalidUnits,
}

impl WeatherError {
    /// Create an "unknown city" error listing every registered city.
    pub fn unknown_city(city: impl Into<String>) -> Self {
        Self::UnknownCity {
            city: city.into(),
            available: super::cities::available_cities(),
        }
    }
}
