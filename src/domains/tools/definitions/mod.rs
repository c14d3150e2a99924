//! Tool definitions module.
//!
//! Each tool is defined in its own file and exposes the same surface:
//! `NAME`, `DESCRIPTION`, `execute()`, `to_tool()` and `create_route()`.

pub mod basic;
pub mod common;
pub mod weather;

pub use basic::{
    AddNumbersParams, AddNumbersResult, AddNumbersTool, EchoParams, EchoTool, SortListParams,
    SortListTool,
};
pub use weather::{WeatherAlertsParams, WeatherAlertsTool, WeatherForecastParams, WeatherForecastTool};
