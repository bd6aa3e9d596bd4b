use fxconv_cli::api::{RateClient, RateSource};
use fxconv_cli::config::Config;
use fxconv_cli::currency::Currency;
use fxconv_cli::error::FetchError;
use mockito::Matcher;

fn client_for(server: &mockito::Server) -> RateClient {
    let config = Config::new("test-key", format!("{}/api/latest.json", server.url()));
    RateClient::new(config.rates_url()).unwrap()
}

#[test]
fn fetches_rate_table_with_app_id() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/latest.json")
        .match_query(Matcher::UrlEncoded("app_id".into(), "test-key".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"base":"USD","rates":{"USD":1.0,"EUR":0.85,"GBP":0.79}}"#)
        .create();

    let table = client_for(&server).latest().unwrap();

    mock.assert();
    assert_eq!(table.base, "USD");
    assert_eq!(table.rate(Currency::Eur), Some(0.85));
    assert_eq!(table.rate(Currency::Ngn), None);
}

#[test]
fn every_call_issues_a_fresh_request() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/latest.json")
        .match_query(Matcher::Any)
        .with_body(r#"{"base":"USD","rates":{"USD":1.0}}"#)
        .expect(2)
        .create();

    let client = client_for(&server);
    client.latest().unwrap();
    client.latest().unwrap();
    mock.assert();
}

#[test]
fn api_error_envelope_is_reported() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/latest.json")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(
            r#"{"error":true,"status":401,"message":"invalid_app_id","description":"Invalid App ID provided."}"#,
        )
        .create();

    let err = client_for(&server).latest().unwrap_err();
    match err {
        FetchError::Api { status, description } => {
            assert_eq!(status, 401);
            assert_eq!(description, "Invalid App ID provided.");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn malformed_body_is_a_decode_error() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/latest.json")
        .match_query(Matcher::Any)
        .with_body("<html>not json</html>")
        .create();

    let err = client_for(&server).latest().unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[test]
fn body_without_rates_is_a_decode_error() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/latest.json")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body(r#"{"base":"USD"}"#)
        .create();

    let err = client_for(&server).latest().unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[test]
fn connection_refused_is_a_network_error() {
    let client = RateClient::new("http://127.0.0.1:1/api/latest.json?app_id=test-key").unwrap();
    let err = client.latest().unwrap_err();
    assert!(matches!(err, FetchError::Network(_)));
    assert!(!err.to_string().contains("test-key"));
}
