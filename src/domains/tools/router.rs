//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool knows how to create its own route.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    AddNumbersTool, EchoTool, SortListTool, WeatherAlertsTool, WeatherForecastTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>() -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(EchoTool::create_route())
        .with_route(AddNumbersTool::create_route())
        .with_route(SortListTool::create_route())
        .with_route(WeatherForecastTool::create_route())
        .with_route(WeatherAlertsTool::create_route())
}
