//! Weather alert derivation from static city climate data.

use serde::Serialize;
use tracing::debug;

use super::cities::City;
use super::random::RandomSource;

/// Precipitation chance above which a flood warning is raised.
pub const FLOOD_PRECIPITATION_ABOVE: u8 = 60;

/// Precipitation chance above which a heavy rain alert is raised.
pub const RAIN_PRECIPITATION_ABOVE: u8 = 40;

/// Base temperature above which a heat advisory is raised.
pub const HEAT_TEMPERATURE_ABOVE: f64 = 28.0;

/// Base temperature below which a cold advisory is raised.
pub const COLD_TEMPERATURE_BELOW: f64 = 8.0;

/// A unit draw above this value discards every computed alert.
///
/// Arbitrary tuning value, kept for compatibility.
pub const SUPPRESSION_THRESHOLD: f64 = 0.7;

/// Alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
    High,
}

/// Kind of adverse condition an alert warns about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Flood,
    Rain,
    Heat,
    Cold,
}

/// A single weather alert.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub severity: Severity,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub message: String,
}

/// Alerts currently in effect for a city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityAlerts {
    pub city: String,
    pub alerts: Vec<Alert>,
}

/// Every alert the city's climate data triggers, before suppression.
///
/// Order is flood or rain first, then heat, then cold.
pub fn candidate_alerts(city: &City) -> Vec<Alert> {
    let name = city.name;
    let mut alerts = Vec::new();

    if city.precipitation_chance > FLOOD_PRECIPITATION_ABOVE {
        alerts.push(Alert {
            severity: Severity::High,
            kind: AlertKind::Flood,
            message: format!("Flood warning in effect for {name} and surrounding areas"),
        });
    } else if city.precipitation_chance > RAIN_PRECIPITATION_ABOVE {
        alerts.push(Alert {
            severity: Severity::Medium,
            kind: AlertKind::Rain,
            message: format!("Heavy rain expected in {name} today"),
        });
    }

    if city.base_temperature_celsius > HEAT_TEMPERATURE_ABOVE {
        alerts.push(Alert {
            severity: Severity::Medium,
            kind: AlertKind::Heat,
            message: format!("Heat advisory in effect for {name}"),
        });
    }

    if city.base_temperature_celsius < COLD_TEMPERATURE_BELOW {
        alerts.push(Alert {
            severity: Severity::Medium,
            kind: AlertKind::Cold,
            message: format!("Cold weather advisory in effect for {name}"),
        });
    }

    alerts
}

/// Derive the alerts reported for a city.
///
/// One unit draw is taken per call, after all conditions are evaluated; when
/// it exceeds [`SUPPRESSION_THRESHOLD`] the whole list is dropped.
pub fn derive_alerts<R: RandomSource>(city: &City, rng: &mut R) -> CityAlerts {
    let mut alerts = candidate_alerts(city);

    if rng.unit() > SUPPRESSION_THRESHOLD {
        debug!("Suppressing {} alerts for {}", alerts.len(), city.name);
        alerts.clear();
    }

    CityAlerts {
        city: city.name.to_string(),
        alerts,
    }
}
