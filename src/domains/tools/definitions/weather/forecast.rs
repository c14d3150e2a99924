//! Weather forecast tool definition.
//!
//! Generates a synthetic multi-day forecast for one of the registered cities.

use chrono::{Local, NaiveDate};
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
use crate::domains::weather::{RandomSource, generate_forecast, validate_forecast_request};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the weather forecast tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WeatherForecastParams {
    /// The name of the city to get the forecast for.
    pub city: String,

    /// The number of days to forecast (1-10, default: 3).
    #[serde(default = "default_days")]
    pub days: i64,

    /// Temperature units, either 'celsius' or 'fahrenheit' (default: celsius).
    #[serde(default = "default_units")]
    pub units: String,
}

fn default_days() -> i64 {
    3
}

fn default_units() -> String {
    "celsius".to_string()
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Weather forecast tool - daily synthetic forecasts for a city.
pub struct WeatherForecastTool;

impl WeatherForecastTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_weather_forecast";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get a weather forecast for a specified city and number of days. Returns the city name and one entry per day with date, condition, temperature, temperature unit and precipitation chance.";

    /// Execute the tool logic using today's local date and the thread RNG.
    pub fn execute(params: &WeatherForecastParams) -> Result<CallToolResult, ToolError> {
        Self::execute_with(params, Local::now().date_naive(), &mut rand::rng())
    }

    /// Execute the tool logic with an explicit start date and random source.
    #[instrument(skip_all, fields(city = %params.city, days = params.days, units = %params.units))]
    pub fn execute_with<R: RandomSource>(
        params: &WeatherForecastParams,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<CallToolResult, ToolError> {
        info!(
            "Generating weather forecast for {} for {} days in {}",
            params.city, params.days, params.units
        );

        let request = match validate_forecast_request(&params.city, params.days, &params.units) {
            Ok(request) => request,
            Err(e) => {
                warn!("Rejected forecast request: {}", e);
                return error_payload_result(&e.to_string());
            }
        };

        let forecast = generate_forecast(&request, today, rng);
        json_result(&forecast)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WeatherForecastParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some("Weather Forecast".into()),
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
                let params: WeatherForecastParams = parse_arguments(args)?;
                Ok(Self::execute(&params)?)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
