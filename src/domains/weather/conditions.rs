//! Weather condition selection from precipitation chance.
//!
//! Each precipitation band maps to a small pool of labels. Repeated entries
//! act as weights, and the pick within a pool is uniform.

use std::fmt;

use serde::Serialize;

use super::random::RandomSource;

/// A weather condition label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Sunny,
    #[serde(rename = "partly cloudy")]
    PartlyCloudy,
    Cloudy,
    Rainy,
    Thunderstorm,
}

impl Condition {
    /// Human-readable label, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::PartlyCloudy => "partly cloudy",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
            Self::Thunderstorm => "thunderstorm",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use Condition::{Cloudy, PartlyCloudy, Rainy, Sunny, Thunderstorm};

// Band edges and pool weights are tuning constants with no climatological basis.
const DRY_BELOW: u8 = 10;
const LIGHT_BELOW: u8 = 30;
const MODERATE_BELOW: u8 = 50;
const WET_BELOW: u8 = 70;

const DRY_POOL: &[Condition] = &[Sunny, Sunny, Sunny, PartlyCloudy];
const LIGHT_POOL: &[Condition] = &[PartlyCloudy, PartlyCloudy, Cloudy];
const MODERATE_POOL: &[Condition] = &[Cloudy, Cloudy, Rainy];
const WET_POOL: &[Condition] = &[Rainy, Rainy, Thunderstorm];
const STORMY_POOL: &[Condition] = &[Rainy, Thunderstorm, Thunderstorm];

/// The weighted candidate pool for a precipitation chance.
pub fn condition_pool(precipitation_chance: u8) -> &'static [Condition] {
    match precipitation_chance {
        c if c < DRY_BELOW => DRY_POOL,
        c if c < LIGHT_BELOW => LIGHT_POOL,
        c if c < MODERATE_BELOW => MODERATE_POOL,
        c if c < WET_BELOW => WET_POOL,
        _ => STORMY_POOL,
    }
}

/// Pick a condition for the given precipitation chance.
pub fn select_condition<R: RandomSource>(precipitation_chance: u8, rng: &mut R) -> Condition {
    let pool = condition_pool(precipitation_chance);
    pool[rng.index(pool.len())]
}
