//! City registry resource definition.

use super::ResourceDefinition;
use crate::domains::resources::ResourceError;
use crate::domains::resources::service::ResourceKind;
use crate::domains::weather::CITIES;

/// The supported cities and their climate baselines, in registry order.
pub struct CityRegistryResource;

impl ResourceDefinition for CityRegistryResource {
    const URI: &'static str = "weather://cities";
    const NAME: &'static str = "Supported Cities";
    const DESCRIPTION: &'static str =
        "Cities known to the weather tools with their base temperature and precipitation chance";
    const MIME_TYPE: &'static str = "application/json";
    const KIND: ResourceKind = ResourceKind::CityRegistry;
}

impl CityRegistryResource {
    /// Render the registry as pretty-printed JSON.
    pub fn render() -> Result<String, ResourceError> {
        Ok(serde_json::to_string_pretty(&CITIES)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_cities_in_order() {
        let rendered = CityRegistryResource::render().unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        let cities = value.as_array().unwrap();
        assert_eq!(cities.len(), 8);
        assert_eq!(cities[0]["name"], "New York");
        assert_eq!(cities[0]["base_temperature_celsius"], 15.0);
        assert_eq!(cities[0]["precipitation_chance"], 30);
        assert_eq!(cities[7]["name"], "Rio de Janeiro");
    }
}
