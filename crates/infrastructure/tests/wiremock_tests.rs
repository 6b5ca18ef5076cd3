//! Integration tests for the weather backend adapter using wiremock
//!
//! These tests drive the application services through the real adapter and
//! HTTP client against a mock backend.

use std::sync::Arc;
use std::time::Duration;

use application::ports::WeatherBackendPort;
use application::{
    ApplicationError, FetchOutcome, PointQueryService, PointQuerySession, RegionalAlertPoller,
};
use domain::{Coordinate, PointWeatherResult, SeverityCategory};
use infrastructure::WeatherBackendAdapter;
use integration_weather::WeatherApiConfig;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const MONTREAL: Coordinate = Coordinate::new(45.5017, -73.5673);

fn create_adapter(mock_server: &MockServer) -> Arc<WeatherBackendAdapter> {
    let config = WeatherApiConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
    };
    Arc::new(WeatherBackendAdapter::with_config(config).unwrap())
}

async fn mount_montreal(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/weather/current"))
        .and(query_param("lat", "45.5017"))
        .and(query_param("lon", "-73.5673"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "temperature": -5,
            "condition": "Snow"
        })))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/weather/alerts"))
        .and(query_param("lat", "45.5017"))
        .and(query_param("lon", "-73.5673"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "id": "a1",
            "title": "Winter Storm Warning",
            "description": "Heavy snow and blowing snow expected.",
            "severity": "severe",
            "alert_type": "storm"
        }])))
        .mount(mock_server)
        .await;
}

// ============================================================================
// Adapter mapping
// ============================================================================

#[tokio::test]
async fn adapter_maps_conditions_and_alerts() {
    let mock_server = MockServer::start().await;
    mount_montreal(&mock_server).await;
    let adapter = create_adapter(&mock_server);

    let conditions = adapter.get_conditions(&MONTREAL).await.unwrap();
    let alerts = adapter.get_point_alerts(&MONTREAL).await.unwrap();

    assert_eq!(conditions.temperature, Some(-5.0));
    assert_eq!(conditions.condition.as_deref(), Some("Snow"));
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].city.is_none());
}

#[tokio::test]
async fn adapter_maps_server_error_to_external_service() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/weather/alerts/regions"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;
    let adapter = create_adapter(&mock_server);

    let result = adapter.get_regional_alerts().await;

    assert!(
        matches!(result, Err(ApplicationError::ExternalService(_))),
        "Expected ExternalService, got: {result:?}"
    );
}

#[tokio::test]
async fn adapter_maps_invalid_json_to_parse_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/weather/current"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&mock_server)
        .await;
    let adapter = create_adapter(&mock_server);

    let result = adapter.get_conditions(&MONTREAL).await;

    assert!(matches!(result, Err(ApplicationError::Parse(_))));
}

#[tokio::test]
async fn adapter_reports_availability() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})))
        .mount(&mock_server)
        .await;
    let adapter = create_adapter(&mock_server);

    assert!(adapter.is_available().await);
}

// ============================================================================
// Point query flow end to end
// ============================================================================

#[tokio::test]
async fn montreal_point_query() {
    let mock_server = MockServer::start().await;
    mount_montreal(&mock_server).await;
    let service = PointQueryService::new(create_adapter(&mock_server));

    let result = service.query(MONTREAL).await;

    assert_eq!(result.conditions.temperature, Some(-5.0));
    assert_eq!(result.conditions.condition.as_deref(), Some("Snow"));
    assert_eq!(result.alerts.len(), 1);
    assert_eq!(
        result.alerts[0].severity_category(),
        SeverityCategory::Critical
    );
}

#[tokio::test]
async fn null_point_alerts_equal_empty() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/weather/current"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "temperature": 12.5,
            "condition": "Cloudy"
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/weather/alerts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&mock_server)
        .await;
    let service = PointQueryService::new(create_adapter(&mock_server));

    let result = service.query(MONTREAL).await;

    assert!(result.alerts.is_empty());
    assert_eq!(result.conditions.temperature, Some(12.5));
}

#[tokio::test]
async fn failing_alerts_endpoint_yields_empty_result() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/weather/current"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "temperature": -5,
            "condition": "Snow"
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/weather/alerts"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    let session = PointQuerySession::new(PointQueryService::new(create_adapter(&mock_server)));

    assert!(session.query_now(MONTREAL).await);

    let state = session.state();
    assert!(!state.loading);
    assert_eq!(state.result, Some(PointWeatherResult::empty(MONTREAL)));
}

// ============================================================================
// Regional polling flow end to end
// ============================================================================

#[tokio::test]
async fn regional_poller_fetches_on_start_and_keeps_stale_set() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/weather/alerts/regions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "t1", "title": "Heat Warning", "description": "Hot", "severity": "moderate", "alert_type": "heat", "city": "Toronto"}
        ])))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/weather/alerts/regions"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let handle = RegionalAlertPoller::new(create_adapter(&mock_server)).start();
    let mut updates = handle.subscribe();

    let first = tokio::time::timeout(
        Duration::from_secs(5),
        updates.wait_for(|s| s.successful_fetches == 1),
    )
    .await
    .unwrap()
    .unwrap()
    .clone();
    assert_eq!(first.alerts.as_ref().map(domain::RegionalAlertSet::len), Some(1));

    handle.refresh_now();
    let second = tokio::time::timeout(
        Duration::from_secs(5),
        updates.wait_for(|s| s.failed_fetches == 1),
    )
    .await
    .unwrap()
    .unwrap()
    .clone();

    assert_eq!(second.last_outcome, Some(FetchOutcome::Failed));
    assert_eq!(second.alerts, first.alerts);

    handle.stop().await;
}

#[tokio::test]
async fn regional_empty_array_is_all_clear() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/weather/alerts/regions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let handle = RegionalAlertPoller::new(create_adapter(&mock_server)).start();
    let mut updates = handle.subscribe();

    let state = tokio::time::timeout(
        Duration::from_secs(5),
        updates.wait_for(|s| s.alerts.is_some()),
    )
    .await
    .unwrap()
    .unwrap()
    .clone();

    assert!(state.alerts.is_some_and(|set| set.is_empty()));
    handle.stop().await;
}
