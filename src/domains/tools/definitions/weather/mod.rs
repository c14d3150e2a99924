pub mod alerts;
pub mod forecast;

pub use alerts::{WeatherAlertsParams, WeatherAlertsTool};
pub use forecast::{WeatherForecastParams, WeatherForecastTool};
