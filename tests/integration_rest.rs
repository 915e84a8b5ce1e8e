//! Integration tests for the REST transport.
//!
//! These tests run against a local `wiremock` server and check the exact
//! wire URLs, both authentication modes, error mapping and throttling.
//!
//! # Running
//!
//! ```bash
//! RUST_LOG=marvel_api=debug cargo test --test integration_rest
//! ```

use std::time::{Duration, Instant};

use futures_util::future::join_all;
use marvel_api::client::query::QueryParams;
use marvel_api::config::RateLimit;
use marvel_api::types::{Character, CharacterParams, Comic, DataWrapper};
use marvel_api::{Config, Error, MarvelClient, Resource};
use tokio_test::assert_ok;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PREFIX: &str = "/v1/public";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn envelope(results: serde_json::Value) -> serde_json::Value {
    let count = results.as_array().map_or(0, Vec::len);
    serde_json::json!({
        "code": 200,
        "status": "Ok",
        "copyright": "© 2024 MARVEL",
        "attributionText": "Data provided by Marvel. © 2024 MARVEL",
        "etag": "abc123",
        "data": {
            "offset": 0,
            "limit": 20,
            "total": count,
            "count": count,
            "results": results
        }
    })
}

fn spider_man() -> serde_json::Value {
    serde_json::json!([{ "id": 1009610, "name": "Spider-Man (Peter Parker)" }])
}

async fn mock_ok(server: &MockServer, endpoint: &str, results: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("{}/{}", PREFIX, endpoint)))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(results)))
        .mount(server)
        .await;
}

fn config_for(server: &MockServer, public_key: &str) -> Config {
    Config::new(public_key).with_base_url(format!("{}{}", server.uri(), PREFIX))
}

/// Raw query strings of every request the server saw, in arrival order
async fn received_queries(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|r| r.url.query().unwrap_or_default().to_string())
        .collect()
}

fn split_signed_query(query: &str) -> (String, String, String) {
    let mut ts = String::new();
    let mut hash = String::new();
    let mut rest = Vec::new();
    for pair in query.split('&') {
        match pair.split_once('=') {
            Some(("ts", v)) => ts = v.to_string(),
            Some(("hash", v)) => hash = v.to_string(),
            _ => rest.push(pair),
        }
    }
    (rest.join("&"), ts, hash)
}

#[tokio::test]
async fn test_public_only_get_by_id() {
    init_tracing();
    let server = MockServer::start().await;
    mock_ok(&server, "characters/1009610", spider_man()).await;

    let client = assert_ok!(MarvelClient::new(config_for(&server, "abc")));
    let wrapper = assert_ok!(client.get::<Character>(1009610).await);

    assert_eq!(wrapper.code, 200);
    assert_eq!(wrapper.results()[0].name, "Spider-Man (Peter Parker)");
    assert_eq!(received_queries(&server).await, vec!["apikey=abc"]);
}

#[tokio::test]
async fn test_signed_list_with_params() {
    init_tracing();
    let server = MockServer::start().await;
    mock_ok(&server, "characters", spider_man()).await;

    let client = assert_ok!(MarvelClient::new(
        config_for(&server, "pub").with_private_key("priv")
    ));
    let params = CharacterParams {
        name_starts_with: Some("spider".into()),
        comics: Some(vec![1, 2, 3]),
        order_by: Some("name".into()),
        ..Default::default()
    };
    assert_ok!(client.list::<Character>(&params).await);

    let queries = received_queries(&server).await;
    assert_eq!(queries.len(), 1);
    assert!(queries[0].starts_with("nameStartsWith=spider&comics=1,2,3&orderBy=name&apikey=pub&ts="));

    let (rest, ts, hash) = split_signed_query(&queries[0]);
    assert_eq!(rest, "nameStartsWith=spider&comics=1,2,3&orderBy=name&apikey=pub");
    assert!(ts.parse::<u64>().is_ok());
    assert_eq!(hash, client.rest().signer().hash(&ts));
}

#[tokio::test]
async fn test_signed_requests_get_fresh_timestamps() {
    let server = MockServer::start().await;
    mock_ok(&server, "comics/1", serde_json::json!([])).await;

    let client = assert_ok!(MarvelClient::new(
        config_for(&server, "pub").with_private_key("priv")
    ));
    assert_ok!(client.rest().request::<DataWrapper<serde_json::Value>>("comics/1").await);
    tokio::time::sleep(Duration::from_millis(5)).await;
    assert_ok!(client.rest().request::<DataWrapper<serde_json::Value>>("comics/1").await);

    let queries = received_queries(&server).await;
    let (_, ts1, hash1) = split_signed_query(&queries[0]);
    let (_, ts2, hash2) = split_signed_query(&queries[1]);
    assert!(ts2.parse::<u64>().unwrap() > ts1.parse::<u64>().unwrap());
    assert_ne!(hash1, hash2);
}

#[tokio::test]
async fn test_user_apikey_is_overridden() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/events", PREFIX)))
        .and(query_param("apikey", "real"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = assert_ok!(MarvelClient::new(config_for(&server, "real")));
    let params = QueryParams::new().with("apikey", "spoofed").with("limit", 5u32);
    assert_ok!(
        client
            .rest()
            .request_with_params::<DataWrapper<serde_json::Value>>("events", params)
            .await
    );
    assert_eq!(received_queries(&server).await, vec!["apikey=real&limit=5"]);
}

#[tokio::test]
async fn test_story_characters_are_characters() {
    let server = MockServer::start().await;
    mock_ok(&server, "stories/7/characters", spider_man()).await;

    let client = assert_ok!(MarvelClient::new(config_for(&server, "abc")));
    let wrapper = assert_ok!(
        client
            .related::<Character>(Resource::Story, 7, &CharacterParams::default())
            .await
    );
    assert_eq!(wrapper.results()[0].id, 1009610);
    assert_eq!(received_queries(&server).await, vec!["apikey=abc"]);
}

#[tokio::test]
async fn test_dispatch_untyped() {
    let server = MockServer::start().await;
    mock_ok(&server, "creators/30/series", serde_json::json!([{ "id": 1, "title": "X" }])).await;

    let client = assert_ok!(MarvelClient::new(config_for(&server, "abc")));
    let params = QueryParams::new().with("limit", 1u32);
    let wrapper = assert_ok!(
        client
            .dispatch(Resource::Creator, Some(30), Some(Resource::Series), Some(params))
            .await
    );
    assert_eq!(wrapper.results()[0]["title"], "X");
    assert_eq!(received_queries(&server).await, vec!["limit=1&apikey=abc"]);

    let err = client
        .dispatch(Resource::Creator, Some(30), Some(Resource::Creator), None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidEndpoint(_)));
}

#[tokio::test]
async fn test_non_success_status_is_api_error() {
    let server = MockServer::start().await;
    let body = serde_json::json!({ "code": 409, "status": "Limit greater than 100." });
    Mock::given(method("GET"))
        .and(path(format!("{}/comics", PREFIX)))
        .respond_with(ResponseTemplate::new(409).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let client = assert_ok!(MarvelClient::new(config_for(&server, "abc")));
    let err = client
        .rest()
        .request::<DataWrapper<serde_json::Value>>("comics")
        .await
        .unwrap_err();

    match err {
        Error::Api(api) => {
            assert_eq!(api.status, 409);
            assert_eq!(api.code.as_deref(), Some("409"));
            assert_eq!(api.message, "Limit greater than 100.");
            assert_eq!(serde_json::from_str::<serde_json::Value>(&api.body).unwrap(), body);
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/series", PREFIX)))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = assert_ok!(MarvelClient::new(config_for(&server, "abc")));
    let err = client
        .rest()
        .request::<DataWrapper<serde_json::Value>>("series")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[tokio::test]
async fn test_wrong_envelope_shape_is_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/series", PREFIX)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })))
        .mount(&server)
        .await;

    let client = assert_ok!(MarvelClient::new(config_for(&server, "abc")));
    let err = client
        .rest()
        .request::<DataWrapper<serde_json::Value>>("series")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/comics", PREFIX)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(serde_json::json!([])))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = config_for(&server, "abc").with_timeout(Duration::from_millis(50));
    let client = assert_ok!(MarvelClient::new(config));
    let err = client
        .rest()
        .request::<DataWrapper<serde_json::Value>>("comics")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Http(_)));
    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let config = Config::new("abc").with_base_url("http://127.0.0.1:1/v1/public");
    let client = assert_ok!(MarvelClient::new(config));
    let err = client
        .rest()
        .request::<DataWrapper<serde_json::Value>>("comics")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Http(_)));
}

#[tokio::test]
async fn test_rate_limit_delays_but_never_drops() {
    init_tracing();
    let server = MockServer::start().await;
    mock_ok(&server, "characters", spider_man()).await;

    let config = config_for(&server, "abc").with_rate_limit(RateLimit::per_millis(2, 300));
    let client = assert_ok!(MarvelClient::new(config));

    let params = CharacterParams::default();
    let start = Instant::now();
    let results = join_all((0..5).map(|_| client.list::<Character>(&params))).await;
    let elapsed = start.elapsed();

    assert!(results.iter().all(Result::is_ok));
    assert_eq!(received_queries(&server).await.len(), 5);
    // Five requests at two per window span at least two full windows
    assert!(elapsed >= Duration::from_millis(550), "elapsed {:?}", elapsed);
}

#[tokio::test]
async fn test_separate_clients_have_separate_limits() {
    let server = MockServer::start().await;
    mock_ok(&server, "comics/1", serde_json::json!([])).await;

    let limit = RateLimit::per_millis(1, 1000);
    let a = assert_ok!(MarvelClient::new(config_for(&server, "a").with_rate_limit(limit)));
    let b = assert_ok!(MarvelClient::new(config_for(&server, "b").with_rate_limit(limit)));

    let start = Instant::now();
    assert_ok!(a.get::<Comic>(1).await);
    assert_ok!(b.get::<Comic>(1).await);
    assert!(start.elapsed() < Duration::from_millis(900));
}
