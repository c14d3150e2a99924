//! Synthetic multi-day forecast generation.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::conditions::{Condition, select_condition};
use super::random::RandomSource;
use super::units::round_one_decimal;
use super::validation::ForecastRequest;

/// Maximum daily deviation from the base temperature, in degrees Celsius.
pub const TEMPERATURE_JITTER_CELSIUS: f64 = 5.0;

/// Maximum daily deviation from the base precipitation chance, in points.
pub const PRECIPITATION_JITTER: i32 = 10;

/// One day of a forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyForecast {
    /// ISO 8601 calendar date (`YYYY-MM-DD`).
    pub date: String,
    pub condition: Condition,
    /// Temperature in the requested unit, rounded to one decimal.
    pub temperature: f64,
    pub temperature_unit: &'static str,
    pub precipitation_chance: u8,
}

/// A complete forecast for one city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    pub city: String,
    pub forecast: Vec<DailyForecast>,
}

/// Generate `request.days` consecutive daily entries starting at `today`.
pub fn generate_forecast<R: RandomSource>(
    request: &ForecastRequest,
    today: NaiveDate,
    rng: &mut R,
) -> Forecast {
    let city = request.city;
    // iter_days stops at the last representable date instead of repeating it.
    let forecast = today
        .iter_days()
        .take(request.days as usize)
        .map(|date| {
            let celsius = city.base_temperature_celsius
                + rng.uniform(-TEMPERATURE_JITTER_CELSIUS, TEMPERATURE_JITTER_CELSIUS);
            let temperature = request.units.convert_celsius(celsius);

            let precipitation_chance = jitter_precipitation(city.precipitation_chance, rng);
            let condition = select_condition(precipitation_chance, rng);

            DailyForecast {
                date: date.format("%Y-%m-%d").to_string(),
                condition,
                temperature: round_one_decimal(temperature),
                temperature_unit: request.units.label(),
                precipitation_chance,
            }
        })
        .collect::<Vec<_>>();

    debug!("Generated {} forecast days for {}", forecast.len(), city.name);

    Forecast {
        city: city.name.to_string(),
        forecast,
    }
}

/// Shift a precipitation chance by a random amount, clamped to `[0, 100]`.
fn jitter_precipitation<R: RandomSource>(base: u8, rng: &mut R) -> u8 {
    let shifted = i32::from(base) + rng.integer(-PRECIPITATION_JITTER, PRECIPITATION_JITTER);
    // Clamped into u8 range above, so the cast is lossless.
    shifted.clamp(0, 100) as u8
}
