//! Add numbers tool definition.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{
    error_payload_result, json_result, parse_arguments,
};

/// Parameters for the add numbers tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddNumbersParams {
    /// First number.
    pub a: f64,

    /// Second number.
    pub b: f64,
}

/// Structured output of the add numbers tool.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct AddNumbersResult {
    /// The sum of `a` and `b`.
    pub result: f64,
}

/// Add numbers tool - sums two numbers.
pub struct AddNumbersTool;

impl AddNumbersTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add_numbers";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Add two numbers together. Returns an object containing the result of the addition.";

    /// Execute the tool logic.
    pub fn execute(params: &AddNumbersParams) -> Result<CallToolResult, ToolError> {
        info!("Adding numbers: {} + {}", params.a, params.b);

        // JSON has no encoding for infinities or NaN.
        let result = params.a + params.b;
        if !result.is_finite() {
            warn!("Sum of {} and {} is not finite", params.a, params.b);
            return error_payload_result("Result is not a finite number");
        }

        json_result(&AddNumbersResult { result })
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AddNumbersParams>(),
            annotations: None,
            output_schema: Some(cached_schema_for_type::<AddNumbersResult>()),
            icons: None,
            meta: None,
            title: None,
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
                let params: AddNumbersParams = parse_arguments(args)?;
                Ok(Self::execute(&params)?)
            }
            .boxed()
        })
    }
}
