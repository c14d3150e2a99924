//! Static city climate registry.
//!
//! The registry is the only persistent state of the weather domain. It is
//! process-wide, read-only, and iterated in a fixed order so that error
//! messages listing the available cities are stable.

use serde::Serialize;

/// Climate data for a single city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct City {
    /// City name, matched case-sensitively.
    pub name: &'static str,

    /// Typical temperature in degrees Celsius.
    pub base_temperature_celsius: f64,

    /// Typical chance of precipitation, as a percentage in `[0, 100]`.
    pub precipitation_chance: u8,
}

impl City {
    /// Create a city record.
    pub const fn new(
        name: &'static str,
        base_temperature_celsius: f64,
        precipitation_chance: u8,
    ) -> Self {
        Self {
            name,
            base_temperature_celsius,
            precipitation_chance,
        }
    }
}

/// All known cities, in registry order.
pub static CITIES: [City; 8] = [
    City::new("New York", 15.0, 30),
    City::new("London", 12.0, 60),
    City::new("Tokyo", 20.0, 40),
    City::new("Sydney", 25.0, 20),
    City::new("Paris", 18.0, 35),
    City::new("Cairo", 30.0, 5),
    City::new("Moscow", 5.0, 25),
    City::new("Rio de Janeiro", 27.0, 15),
];

/// Look up a city by exact name.
pub fn find_city(name: &str) -> Option<&'static City> {
    CITIES.iter().find(|city| city.name == name)
}

/// Comma-separated list of every city name, in registry order.
pub fn available_cities() -> String {
    CITIES
        .iter()
        .map(|city| city.name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_city_exact_match() {
        let city = find_city("Rio de Janeiro").unwrap();
        assert_eq!(city.base_temperature_celsius, 27.0);
        assert_eq!(city.precipitation_chance, 15);
    }

    #[test]
    fn test_find_city_is_case_sensitive() {
        assert!(find_city("london").is_none());
        assert!(find_city("London ").is_none());
        assert!(find_city("").is_none());
    }

    #[test]
    fn test_available_cities_order() {
        assert_eq!(
            available_cities(),
            "New York, London, Tokyo, Sydney, Paris, Cairo, Moscow, Rio de Janeiro"
        );
    }

    #[test]
    fn test_registry_values() {
        let expected = [
            ("New York", 15.0, 30),
            ("London", 12.0, 60),
            ("Tokyo", 20.0, 40),
            ("Sydney", 25.0, 20),
            ("Paris", 18.0, 35),
            ("Cairo", 30.0, 5),
            ("Moscow", 5.0, 25),
            ("Rio de Janeiro", 27.0, 15),
        ];
        for (city, (name, temp, precip)) in CITIES.iter().zip(expected) {
            assert_eq!(city.name, name);
            assert_eq!(city.base_temperature_celsius, temp);
            assert_eq!(city.precipitation_chance, precip);
        }
    }
}
