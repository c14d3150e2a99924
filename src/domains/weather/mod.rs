//! Weather domain module.
//!
//! Synthetic weather data for a fixed set of cities. Nothing here touches the
//! network or any mutable shared state: every call reads the static city
//! registry and draws from a caller-supplied [`RandomSource`], which makes the
//! generators safe to run concurrently and deterministic under test.
//!
//! ## Components
//!
//! - `cities.rs` - Static city climate registry
//! - `validation.rs` - City, day-count and units checks
//! - `units.rs` - Units and Celsius to Fahrenheit conversion
//! - `conditions.rs` - Condition selection from precipitation bands
//! - `forecast.rs` - Multi-day forecast generation
//! - `alerts.rs` - Alert derivation with random suppression
//! - `random.rs` - Injectable random source

pub mod alerts;
pub mod cities;
pub mod conditions;
mod error;
pub mod forecast;
pub mod random;
pub mod units;
pub mod validation;

pub use alerts::{Alert, AlertKind, CityAlerts, Severity, derive_alerts};
pub use cities::{CITIES, City, available_cities, find_city};
pub use conditions::{Condition, select_condition};
pub use error::WeatherError;
pub use forecast::{DailyForecast, Forecast, generate_forecast};
pub use random::RandomSource;
pub use units::{Units, celsius_to_fahrenheit};
pub use validation::{ForecastRequest, validate_city, validate_forecast_request};
