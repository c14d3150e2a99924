//! Sort list tool definition.
//!
//! Each sorted item is returned as its own text content entry, with the full
//! list repeated as structured content.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::tools::definitions::common::parse_arguments;

/// Parameters for the sort list tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SortListParams {
    /// The list of strings to sort.
    pub items: Vec<String>,

    /// Whether to sort in reverse order (default: false).
    #[serde(default)]
    pub reverse: bool,
}

/// Sort list tool - sorts strings lexicographically.
pub struct SortListTool;

impl SortListTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "sort_list";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Sort a list of strings, optionally in reverse order.";

    /// Execute the tool logic.
    pub fn execute(params: &SortListParams) -> CallToolResult {
        info!("Sorting list: {:?} (reverse={})", params.items, params.reverse);

        let sorted = sort_items(&params.items, params.reverse);
        CallToolResult {
            content: sorted.iter().cloned().map(Content::text).collect(),
            structured_content: Some(serde_json::json!({ "result": sorted })),
            is_error: Some(false),
            meta: None,
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SortListParams>(),
            annotations: None,
            output_schema: None,
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
                let params: SortListParams = parse_arguments(args)?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

fn sort_items(items: &[String], reverse: bool) -> Vec<String> {
    let mut sorted = items.to_vec();
    sorted.sort();
    if reverse {
        sorted.reverse();
    }
    sorted
}
