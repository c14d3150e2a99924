//! Scripted tool checks run by the demo client and the integration tests.

use anyhow::{Context, Result, ensure};
use serde_json::{Value, json};
use tracing::info;

use super::{ClientPeer, call_tool};

/// Cities whose forecast and alerts are fetched and logged.
pub const SAMPLE_CITIES: [&str; 3] = ["Tokyo", "Cairo", "Sydney"];

/// Exercise `echo`, `add_numbers` and `sort_list`.
pub async fn check_basic_tools(peer: &ClientPeer) -> Result<()> {
    info!("=== Testing echo tool ===");
    let echo_text = "Hello, MCP World!";
    let echoed = call_tool(peer, "echo", json!({ "text": echo_text })).await?;
    info!("Echo result: {}", echoed);
    ensure!(echoed == json!(echo_text), "Echo result didn't match input");

    info!("=== Testing add_numbers tool ===");
    let (a, b) = (42.5, 7.5);
    let sum = call_tool(peer, "add_numbers", json!({ "a": a, "b": b })).await?;
    info!("Add result: {}", sum);
    ensure!(
        sum["result"].as_f64() == Some(50.0),
        "Addition result didn't match expected output: {}",
        sum
    );

    info!("=== Testing sort_list tool ===");
    let items = ["banana", "apple", "cherry", "date"];
    let mut expected: Vec<&str> = items.to_vec();
    expected.sort();

    let sorted = call_tool(peer, "sort_list", json!({ "items": items })).await?;
    info!("Sort result: {}", sorted);
    ensure!(
        sorted == json!(expected),
        "Sort result didn't match. Got {}, expected {:?}",
        sorted,
        expected
    );

    expected.reverse();
    let reversed =
        call_tool(peer, "sort_list", json!({ "items": items, "reverse": true })).await?;
    info!("Reverse sort result: {}", reversed);
    ensure!(
        reversed == json!(expected),
        "Reverse sort didn't match. Got {}, expected {:?}",
        reversed,
        expected
    );

    info!("=== All basic tool checks passed ===");
    Ok(())
}

/// Exercise `get_weather_forecast` and `get_weather_alerts`.
pub async fn check_weather_tools(peer: &ClientPeer) -> Result<()> {
    info!("=== Testing get_weather_forecast tool ===");
    let days = 3;
    let forecast = call_tool(
        peer,
        "get_weather_forecast",
        json!({ "city": "New York", "days": days, "units": "celsius" }),
    )
    .await?;
    info!("Weather forecast result: {}", forecast);
    ensure!(has_key(&forecast, "city"), "Missing 'city' in forecast response");
    let entries = forecast["forecast"]
        .as_array()
        .context("Missing 'forecast' in forecast response")?;
    ensure!(entries.len() == days, "Expected {} days in forecast", days);

    let fahrenheit = call_tool(
        peer,
        "get_weather_forecast",
        json!({ "city": "New York", "days": 1, "units": "fahrenheit" }),
    )
    .await?;
    info!("Fahrenheit forecast result: {}", fahrenheit);
    ensure!(
        fahrenheit["forecast"][0]["temperature_unit"] == "°F",
        "Temperature unit should be °F"
    );

    let invalid = call_tool(
        peer,
        "get_weather_forecast",
        json!({ "city": "InvalidCity", "days": 1 }),
    )
    .await?;
    info!("Invalid city result: {}", invalid);
    ensure!(
        has_key(&invalid, "error"),
        "Error message should be returned for invalid city"
    );

    info!("=== Testing get_weather_alerts tool ===");
    let alerts = call_tool(peer, "get_weather_alerts", json!({ "city": "London" })).await?;
    info!("Weather alerts result: {}", alerts);
    ensure!(has_key(&alerts, "city"), "Missing 'city' in alerts response");
    ensure!(alerts["alerts"].is_array(), "Alerts should be a list");

    let invalid = call_tool(peer, "get_weather_alerts", json!({ "city": "InvalidCity" })).await?;
    info!("Invalid city alerts result: {}", invalid);
    ensure!(
        has_key(&invalid, "error"),
        "Error message should be returned for invalid city"
    );

    info!("=== Testing weather tools with different cities ===");
    for city in SAMPLE_CITIES {
        let forecast =
            call_tool(peer, "get_weather_forecast", json!({ "city": city, "days": 1 })).await?;
        info!("{} forecast: {}", city, forecast);
        let alerts = call_tool(peer, "get_weather_alerts", json!({ "city": city })).await?;
        info!("{} alerts: {}", city, alerts);
    }

    info!("=== All weather tool checks passed ===");
    Ok(())
}

fn has_key(value: &Value, key: &str) -> bool {
    value.get(key).is_some()
}
