//! Tool Registry - names of every available tool.

use super::definitions::{
    AddNumbersTool, EchoTool, SortListTool, WeatherAlertsTool, WeatherForecastTool,
};

/// Tool registry - single listing of all available tool names.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            EchoTool::NAME,
            AddNumbersTool::NAME,
            SortListTool::NAME,
            WeatherForecastTool::NAME,
            WeatherAlertsTool::NAME,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 5);
        assert!(names.contains(&"echo"));
        assert!(names.contains(&"add_numbers"));
        assert!(names.contains(&"sort_list"));
        assert!(names.contains(&"get_weather_forecast"));
        assert!(names.contains(&"get_weather_alerts"));
    }
}
