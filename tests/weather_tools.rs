//! End-to-end tests: a real rmcp client talking to the server over an
//! in-memory duplex pipe.

use chrono::{Local, NaiveDate};
use rmcp::ServiceExt;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, ErrorCode, ReadResourceRequestParam, ResourceContents,
};
use rmcp::service::ServiceError;
use serde_json::{Value, json};
use tokio::task::JoinHandle;

use weather_mcp_server::client::{self, ClientPeer, ClientSession, Suite, extract_content};
use weather_mcp_server::{Config, McpServer};

async fn connect() -> (ClientSession, JoinHandle<()>) {
    let (server_io, client_io) = tokio::io::duplex(4096);
    let server = McpServer::new(Config::default());

    let server_task = tokio::spawn(async move {
        if let Ok(service) = server.serve(server_io).await {
            let _ = service.waiting().await;
        }
    });

    let session = ().serve(client_io).await.expect("client handshake");
    (session, server_task)
}

async fn shutdown(session: ClientSession, server_task: JoinHandle<()>) {
    session.cancel().await.expect("client shutdown");
    server_task.abort();
}

fn read_request(uri: &str) -> ReadResourceRequestParam {
    serde_json::from_value(json!({ "uri": uri })).unwrap()
}

async fn raw_call(
    peer: &ClientPeer,
    name: &str,
    arguments: Value,
) -> Result<CallToolResult, ServiceError> {
    let request: CallToolRequestParam =
        serde_json::from_value(json!({ "name": name, "arguments": arguments })).unwrap();
    peer.call_tool(request).await
}

#[tokio::test]
async fn lists_all_five_tools() {
    let (session, server_task) = connect().await;

    let mut names = client::list_tool_names(session.peer()).await.unwrap();
    names.sort();
    assert_eq!(
        names,
        vec![
            "add_numbers",
            "echo",
            "get_weather_alerts",
            "get_weather_forecast",
            "sort_list"
        ]
    );

    shutdown(session, server_task).await;
}

#[tokio::test]
async fn client_check_suites_pass() {
    let (session, server_task) = connect().await;

    client::run_checks(session.peer(), Suite::All).await.unwrap();

    shutdown(session, server_task).await;
}

#[tokio::test]
async fn forecast_defaults_and_consecutive_dates() {
    let (session, server_task) = connect().await;

    let before = Local::now().date_naive();
    let result = raw_call(session.peer(), "get_weather_forecast", json!({ "city": "Paris" }))
        .await
        .unwrap();
    let after = Local::now().date_naive();
    assert_eq!(result.is_error, Some(false));

    let forecast = extract_content(&result);
    assert_eq!(forecast["city"], "Paris");
    let days = forecast["forecast"].as_array().unwrap();
    assert_eq!(days.len(), 3);

    let dates: Vec<NaiveDate> = days
        .iter()
        .map(|day| NaiveDate::parse_from_str(day["date"].as_str().unwrap(), "%Y-%m-%d").unwrap())
        .collect();
    // A local midnight may pass during the call.
    assert!(
        dates[0] == before || dates[0] == after,
        "forecast starts {} but today is {}",
        dates[0],
        after
    );
    for pair in dates.windows(2) {
        assert_eq!((pair[1] - pair[0]).num_days(), 1);
    }

    for day in days {
        assert_eq!(day["temperature_unit"], "°C");
        let temperature = day["temperature"].as_f64().unwrap();
        assert!((13.0..=23.0).contains(&temperature));
        let chance = day["precipitation_chance"].as_u64().unwrap();
        assert!((25..=45).contains(&chance));
    }

    shutdown(session, server_task).await;
}

#[tokio::test]
async fn forecast_validation_errors_are_flagged_results() {
    let (session, server_task) = connect().await;
    let peer = session.peer();

    let cases = [
        (
            json!({ "city": "Atlantis", "days": 0, "units": "kelvin" }),
            "City 'Atlantis' not found. Available cities: New York, London, Tokyo, Sydney, Paris, Cairo, Moscow, Rio de Janeiro",
        ),
        (
            json!({ "city": "London", "days": 11 }),
            "Days must be between 1 and 10",
        ),
        (
            json!({ "city": "London", "days": -1 }),
            "Days must be between 1 and 10",
        ),
        (
            json!({ "city": "London", "days": 2, "units": "kelvin" }),
            "Units must be either 'celsius' or 'fahrenheit'",
        ),
        (
            json!({ "city": "London", "days": 2, "units": "Celsius" }),
            "Units must be either 'celsius' or 'fahrenheit'",
        ),
    ];

    for (arguments, message) in cases {
        let result = raw_call(peer, "get_weather_forecast", arguments.clone())
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true), "arguments: {}", arguments);
        assert_eq!(extract_content(&result), json!({ "error": message }));
    }

    shutdown(session, server_task).await;
}

#[tokio::test]
async fn undecodable_arguments_are_protocol_errors() {
    let (session, server_task) = connect().await;

    let err = raw_call(
        session.peer(),
        "get_weather_forecast",
        json!({ "city": "London", "days": "three" }),
    )
    .await
    .unwrap_err();
    match err {
        ServiceError::McpError(error) => assert_eq!(error.code, ErrorCode::INVALID_PARAMS),
        other => panic!("unexpected error: {:?}", other),
    }

    let err = raw_call(session.peer(), "get_weather_alerts", json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::McpError(_)));

    shutdown(session, server_task).await;
}

#[tokio::test]
async fn alerts_only_contain_known_kinds() {
    let (session, server_task) = connect().await;

    for city in ["London", "Cairo", "Moscow", "Rio de Janeiro"] {
        let result = raw_call(session.peer(), "get_weather_alerts", json!({ "city": city }))
            .await
            .unwrap();
        let payload = extract_content(&result);
        assert_eq!(payload["city"], city);
        for alert in payload["alerts"].as_array().unwrap() {
            let kind = alert["type"].as_str().unwrap();
            assert!(["flood", "rain", "heat", "cold"].contains(&kind));
            let severity = alert["severity"].as_str().unwrap();
            assert!(["medium", "high"].contains(&severity));
        }
    }

    let result = raw_call(session.peer(), "get_weather_alerts", json!({ "city": "tokyo" }))
        .await
        .unwrap();
    assert_eq!(result.is_error, Some(true));
    assert!(extract_content(&result)["error"]
        .as_str()
        .unwrap()
        .starts_with("City 'tokyo' not found."));

    shutdown(session, server_task).await;
}

#[tokio::test]
async fn resources_are_listed_and_readable() {
    let (session, server_task) = connect().await;
    let peer = session.peer();

    let resources = peer.list_all_resources().await.unwrap();
    let uris: Vec<_> = resources.iter().map(|r| r.raw.uri.as_str()).collect();
    assert_eq!(uris, vec!["weather://cities", "mcp://server/info"]);

    let result = peer
        .read_resource(read_request("weather://cities"))
        .await
        .unwrap();
    let ResourceContents::TextResourceContents { text, .. } = &result.contents[0] else {
        panic!("expected text contents");
    };
    let cities: Value = serde_json::from_str(text).unwrap();
    assert_eq!(cities.as_array().unwrap().len(), 8);

    let err = peer
        .read_resource(read_request("weather://nowhere"))
        .await
        .unwrap_err();
    match err {
        ServiceError::McpError(error) => assert_eq!(error.code, ErrorCode::RESOURCE_NOT_FOUND),
        other => panic!("unexpected error: {:?}", other),
    }

    shutdown(session, server_task).await;
}

#[tokio::test]
async fn add_numbers_overflow_is_flagged() {
    let (session, server_task) = connect().await;

    let result = raw_call(session.peer(), "add_numbers", json!({ "a": 1e308, "b": 1e308 }))
        .await
        .unwrap();
    assert_eq!(result.is_error, Some(true));
    assert_eq!(
        extract_content(&result),
        json!({ "error": "Result is not a finite number" })
    );

    shutdown(session, server_task).await;
}
