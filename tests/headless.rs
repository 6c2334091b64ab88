//! Headless generation against a mock service

use std::time::Duration;

use rustgen::headless::{generate, read_source, write_outcome};
use rustgen_app::config::Settings;
use rustgen_client::HttpGenerationClient;
use rustgen_core::GenerationOutcome;
use wiremock::matchers::{body_string, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> Settings {
    let mut settings = Settings::default();
    settings.service.endpoint = server.uri();
    settings
}

fn client_for(settings: &Settings) -> HttpGenerationClient {
    HttpGenerationClient::new(&settings.service.endpoint, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_file_document_generates_to_stdout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/schema"))
        .and(query_param("tests", "true"))
        .and(query_param("root", "Meta"))
        .and(body_string("{\"hello\": \"world\"}\n"))
        .respond_with(ResponseTemplate::new(200).set_body_string("pub struct Meta {}\n"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.json");
    std::fs::write(&input, "{\"hello\": \"world\"}\n").unwrap();

    let mut settings = settings_for(&server);
    settings.generation.root_name = Some("Meta".to_string());
    let source = read_source(Some(&input)).unwrap();
    let outcome = generate(&client_for(&settings), &settings, source).await;

    let (mut out, mut err) = (Vec::new(), Vec::new());
    assert!(write_outcome(&outcome, &mut out, &mut err).unwrap());
    assert_eq!(String::from_utf8(out).unwrap(), "pub struct Meta {}\n");
    assert!(err.is_empty());
}

#[tokio::test]
async fn test_invalid_document_never_reaches_service() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let settings = settings_for(&server);
    let outcome = generate(&client_for(&settings), &settings, "{\"a\": ".to_string()).await;

    assert!(matches!(outcome, GenerationOutcome::ValidationFailed { .. }));
    let (mut out, mut err) = (Vec::new(), Vec::new());
    assert!(!write_outcome(&outcome, &mut out, &mut err).unwrap());
    assert!(out.is_empty());
    assert!(String::from_utf8(err)
        .unwrap()
        .starts_with("// failed to parse JSON"));
}

#[tokio::test]
async fn test_service_error_reported_on_stderr() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/schema"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let settings = settings_for(&server);
    let outcome = generate(&client_for(&settings), &settings, "[1, 2]".to_string()).await;

    let (mut out, mut err) = (Vec::new(), Vec::new());
    assert!(!write_outcome(&outcome, &mut out, &mut err).unwrap());
    assert!(out.is_empty());
    assert!(String::from_utf8(err)
        .unwrap()
        .starts_with("// generation request failed: HTTP 500"));
}

#[tokio::test]
async fn test_tests_flag_off_sent_as_false() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/schema"))
        .and(query_param("tests", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let mut settings = settings_for(&server);
    settings.generation.include_tests = false;
    let outcome = generate(&client_for(&settings), &settings, "{}".to_string()).await;

    assert!(outcome.is_success());
}
