//! Integration tests for CardID Worker API.
//!
//! These tests spin up a real server instance and make HTTP requests to verify
//! the complete request/response cycle.

use std::net::SocketAddr;
use std::sync::{Arc, OnceLock};

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use cardid_worker::api::{AppState, create_router};
use cardid_worker::config::{AnalysisConfig, AppConfig, ObservabilityConfig, ServerConfig};

// ============================================================================
// Test Harness
// ============================================================================

/// Process-wide Prometheus recorder shared by every test server.
fn metrics_handle() -> PrometheusHandle {
    static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
    HANDLE
        .get_or_init(|| {
            PrometheusBuilder::new()
                .install_recorder()
                .expect("Failed to install recorder")
        })
        .clone()
}

/// Test server instance.
struct TestServer {
    addr: SocketAddr,
    client: Client,
}

impl TestServer {
    async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    async fn with_config(config: AppConfig) -> Self {
        let metrics = config
            .observability
            .metrics_enabled
            .then(metrics_handle);

        let state = AppState::new(Arc::new(config), metrics);
        let app = create_router(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server failed");
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Self {
            addr,
            client: Client::new(),
        }
    }

    fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url(), path))
            .send()
            .await
            .expect("Request failed")
    }

    async fn post<T: Serialize>(&self, path: &str, body: &T) -> Response {
        self.client
            .post(format!("{}{}", self.base_url(), path))
            .json(body)
            .send()
            .await
            .expect("Request failed")
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            workers: 1,
        },
        analysis: AnalysisConfig {
            max_input_bytes: 64,
            max_batch_size: 4,
        },
        observability: ObservabilityConfig {
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
            metrics_enabled: true,
            metrics_path: "/metrics".to_string(),
        },
    }
}

/// API response structure.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    code: i32,
    #[allow(dead_code)]
    message: String,
    data: Option<T>,
}

impl<T> ApiResponse<T> {
    fn is_success(&self) -> bool {
        self.code == 0
    }
}

// ============================================================================
// Health Endpoint Tests
// ============================================================================

#[derive(Debug, Deserialize)]
struct HealthData {
    status: String,
    version: String,
}

#[derive(Debug, Deserialize)]
struct ReadyData {
    ready: bool,
    components: Value,
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = TestServer::new().await;
    let response = server.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: ApiResponse<HealthData> = response.json().await.unwrap();
    assert!(body.is_success());
    let data = body.data.unwrap();
    assert_eq!(data.status, "healthy");
    assert_eq!(data.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_ready_endpoint() {
    let server = TestServer::new().await;
    let response = server.get("/ready").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: ApiResponse<ReadyData> = response.json().await.unwrap();
    assert!(body.is_success());
    let data = body.data.unwrap();
    assert!(data.ready);
    assert_eq!(data.components["analyzer"], true);
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let server = TestServer::new().await;

    let response = server
        .post("/v1/card/analyze", &json!({ "input": "4111 1111 1111 1111" }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = server.get("/metrics").await;
    assert_eq!(response.status(), StatusCode::OK);

    let text = response.text().await.unwrap();
    assert!(text.contains("# TYPE cardid_up gauge"));
    assert!(text.contains("cardid_up 1"));
    assert!(text.contains("cardid_analyses_total"));
    assert!(!text.contains("4111"));
}

#[tokio::test]
async fn test_metrics_disabled() {
    let mut config = test_config();
    config.observability.metrics_enabled = false;
    let server = TestServer::with_config(config).await;

    let response = server.get("/metrics").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_request_id_header() {
    let server = TestServer::new().await;
    let response = server.get("/health").await;
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Analysis Tests
// ============================================================================

#[derive(Debug, Deserialize)]
struct Extraction {
    digit_count: usize,
    found_non_digit: bool,
    overflowed: bool,
}

#[derive(Debug, Deserialize)]
struct AnalyzeData {
    length: usize,
    luhn_valid: bool,
    network: String,
    verdict: String,
    extraction: Option<Extraction>,
}

#[derive(Debug, Deserialize)]
struct BatchData {
    results: Vec<AnalyzeData>,
}

async fn analyze(server: &TestServer, body: &Value) -> AnalyzeData {
    let response = server.post("/v1/card/analyze", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: ApiResponse<AnalyzeData> = response.json().await.unwrap();
    assert!(body.is_success());
    body.data.unwrap()
}

#[tokio::test]
async fn test_analyze_known_networks() {
    let server = TestServer::new().await;

    let cases = [
        ("4111-1111-1111-1111", "visa", "VISA"),
        ("5555 5555 5555 4444", "mastercard", "MASTERCARD"),
        ("2223-0031-2200-3222", "mastercard", "MASTERCARD"),
        ("3782-822463-10005", "amex", "AMEX"),
        ("6011-1111-1111-1117", "discover", "DISCOVER"),
        ("6221260000000000", "discover", "DISCOVER"),
    ];

    for (input, network, verdict) in cases {
        let data = analyze(&server, &json!({ "input": input })).await;
        assert!(data.luhn_valid, "{input}");
        assert_eq!(data.network, network, "{input}");
        assert_eq!(data.verdict, verdict, "{input}");
        assert!(!data.extraction.unwrap().overflowed);
    }
}

#[tokio::test]
async fn test_analyze_failed_checksum() {
    let server = TestServer::new().await;
    let data = analyze(&server, &json!({ "input": "4111111111111112" })).await;

    assert_eq!(data.length, 16);
    assert!(!data.luhn_valid);
    assert_eq!(data.network, "unknown");
    assert_eq!(data.verdict, "INVALID");
}

#[tokio::test]
async fn test_analyze_absent_input() {
    let server = TestServer::new().await;

    let data = analyze(&server, &json!({ "input": null })).await;
    assert_eq!(data.length, 0);
    assert!(data.extraction.is_none());
    assert_eq!(data.verdict, "INVALID");

    let data = analyze(&server, &json!({})).await;
    assert!(data.extraction.is_none());
}

#[tokio::test]
async fn test_analyze_empty_and_overflow() {
    let server = TestServer::new().await;

    let data = analyze(&server, &json!({ "input": "" })).await;
    let extraction = data.extraction.unwrap();
    assert_eq!(extraction.digit_count, 0);
    assert!(!extraction.overflowed);

    let data = analyze(&server, &json!({ "input": "1".repeat(40) })).await;
    assert_eq!(data.length, 19);
    assert!(!data.luhn_valid);
    assert!(data.extraction.unwrap().overflowed);
}

#[tokio::test]
async fn test_analyze_reports_stray_characters() {
    let server = TestServer::new().await;
    let data = analyze(&server, &json!({ "input": "card 4111 1111 1111 1111" })).await;

    assert_eq!(data.verdict, "VISA");
    assert!(data.extraction.unwrap().found_non_digit);
}

#[tokio::test]
async fn test_analyze_input_too_long() {
    let server = TestServer::new().await;
    let response = server
        .post("/v1/card/analyze", &json!({ "input": "1".repeat(65) }))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ApiResponse<()> = response.json().await.unwrap();
    assert_eq!(body.code, 3003);
}

#[tokio::test]
async fn test_batch_analyze() {
    let server = TestServer::new().await;
    let response = server
        .post(
            "/v1/card/batch",
            &json!({ "inputs": ["378282246310005", null, "1234", "6011111111111117"] }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: ApiResponse<BatchData> = response.json().await.unwrap();
    let results = body.data.unwrap().results;
    let verdicts: Vec<&str> = results.iter().map(|r| r.verdict.as_str()).collect();
    assert_eq!(verdicts, ["AMEX", "INVALID", "INVALID", "DISCOVER"]);
    assert_eq!(results[2].length, 4);
}

#[tokio::test]
async fn test_batch_limits() {
    let server = TestServer::new().await;

    let response = server.post("/v1/card/batch", &json!({ "inputs": [] })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ApiResponse<()> = response.json().await.unwrap();
    assert_eq!(body.code, 3001);

    let response = server
        .post("/v1/card/batch", &json!({ "inputs": ["1", "2", "3", "4", "5"] }))
        .await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body: ApiResponse<()> = response.json().await.unwrap();
    assert_eq!(body.code, 3004);
}

#[tokio::test]
async fn test_list_networks() {
    let server = TestServer::new().await;
    let response = server.get("/v1/card/networks").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: ApiResponse<Value> = response.json().await.unwrap();
    let rules = body.data.unwrap()["rules"].as_array().unwrap().clone();
    let networks: Vec<&str> = rules
        .iter()
        .map(|r| r["network"].as_str().unwrap())
        .collect();
    assert_eq!(networks, ["amex", "visa", "mastercard", "discover"]);
    assert_eq!(rules[1]["lengths"], json!([13, 16, 19]));
    assert_eq!(
        rules[2]["prefixes"][1],
        json!({ "digits": 4, "low": 2221, "high": 2720 })
    );
}
