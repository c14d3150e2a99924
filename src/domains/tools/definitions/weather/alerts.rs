//! Weather alerts tool definition.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{
    error_payload_result, json_result, parse_arguments,
};
use crate::domains::weather::{RandomSource, derive_alerts, validate_city};

/// Parameters for the weather alerts tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WeatherAlertsParams {
    /// The name of the city to get alerts for.
    pub city: String,
}

/// Weather alerts tool - current advisories for a city.
pub struct WeatherAlertsTool;

impl WeatherAlertsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_weather_alerts";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get current weather alerts for a specified city. Returns the city name and a possibly empty list of alerts with severity, type and message.";

    /// Execute the tool logic using the thread RNG.
    pub fn execute(params: &WeatherAlertsParams) -> Result<CallToolResult, ToolError> {
        Self::execute_with(params, &mut rand::rng())
    }

    /// Execute the tool logic with an explicit random source.
    #[instrument(skip_all, fields(city = %params.city))]
    pub fn execute_with<R: RandomSource>(
        params: &WeatherAlertsParams,
        rng: &mut R,
    ) -> Result<CallToolResult, ToolError> {
        info!("Checking weather alerts for {}", params.city);

        let city = match validate_city(&params.city) {
            Ok(city) => city,
            Err(e) => {
                warn!("Rejected alerts request: {}", e);
                return error_payload_result(&e.to_string());
            }
        };

        let alerts = derive_alerts(city, rng);
        info!("{} alerts in effect for {}", alerts.alerts.len(), city.name);
        json_result(&alerts)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WeatherAlertsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some("Weather Alerts".into()),
        }
    }

    /// Create a ToolRoute for the rmcp tool router.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            async move {
                let params: WeatherAlertsParams = parse_arguments(args)?;
                Ok(Self::execute(&params)?)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::result_text;
    use crate::domains::weather::random::ScriptedRandom;

    fn params(city: &str) -> WeatherAlertsParams {
        WeatherAlertsParams {
            city: city.to_string(),
        }
    }

    fn payload(result: &CallToolResult) -> serde_json::Value {
        serde_json::from_str(result_text(result, 0)).unwrap()
    }

    #[test]
    fn test_alerts_reported() {
        let mut rng = ScriptedRandom::new().with_units(&[0.2]);
        let result = WeatherAlertsTool::execute_with(&params("Moscow"), &mut rng).unwrap();

        assert_eq!(result.is_error, Some(false));
        assert_eq!(
            payload(&result),
            serde_json::json!({
                "city": "Moscow",
                "alerts": [{
                    "severity": "medium",
                    "type": "cold",
                    "message": "Cold weather advisory in effect for Moscow"
                }]
            })
        );
    }

    #[test]
    fn test_alerts_suppressed() {
        let mut rng = ScriptedRandom::new().with_units(&[0.95]);
        let result = WeatherAlertsTool::execute_with(&params("London"), &mut rng).unwrap();
        assert_eq!(
            payload(&result),
            serde_json::json!({ "city": "London", "alerts": [] })
        );
    }

    #[test]
    fn test_alerts_unknown_city_skips_draw() {
        // An empty script panics on any draw.
        let mut rng = ScriptedRandom::new();
        let result = WeatherAlertsTool::execute_with(&params("InvalidCity"), &mut rng).unwrap();

        assert_eq!(result.is_error, Some(true));
        let json = payload(&result);
        assert!(
            json["error"]
                .as_str()
                .unwrap()
                .starts_with("City 'InvalidCity' not found. Available cities: New York, London")
        );
    }

    #[test]
    fn test_alerts_live_rng() {
        let result = WeatherAlertsTool::execute(&params("Sydney")).unwrap();
        assert_eq!(
            payload(&result),
            serde_json::json!({ "city": "Sydney", "alerts": [] })
        );
    }
}
