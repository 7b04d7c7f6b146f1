use std::sync::{Arc, Once};
use std::time::Duration;

use board_engine::{
    EngineEvent, EngineHandle, FailureKind, FeedClient, FeedError, FetchSettings,
    PositionExtractor,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<workzag-jobs>
  <position>
    <id>101</id>
    <office>Munich</office>
    <department>Engineering</department>
    <name>Platform Engineer</name>
    <schedule>full-time</schedule>
  </position>
  <position>
    <id>102</id>
    <department>Sales</department>
    <name>Account Executive</name>
    <schedule>full-time</schedule>
  </position>
</workzag-jobs>"#;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(board_logging::initialize_for_tests);
}

async fn serve(route: &str, response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn client_parses_xml_feed() {
    init_logging();
    let server = serve(
        "/xml",
        ResponseTemplate::new(200).set_body_raw(FEED, "application/xml; charset=utf-8"),
    )
    .await;

    let client = FeedClient::with_settings(FetchSettings::default());
    let doc = client.load(&format!("{}/xml", server.uri())).await.expect("feed ok");

    assert_eq!(doc.root().name, "workzag-jobs");
    assert_eq!(doc.elements_by_tag("position").count(), 2);
}

#[tokio::test]
async fn client_reports_http_status() {
    init_logging();
    let server = serve("/xml", ResponseTemplate::new(404)).await;

    let client = FeedClient::with_settings(FetchSettings::default());
    let err = client.load(&format!("{}/xml", server.uri())).await.unwrap_err();

    match err {
        FeedError::Network(fetch) => assert_eq!(fetch.kind, FailureKind::HttpStatus(404)),
        other => panic!("expected network error, got {other:?}"),
    }
}

#[tokio::test]
async fn client_reports_malformed_xml_as_parse_error() {
    init_logging();
    let server = serve(
        "/xml",
        ResponseTemplate::new(200)
            .set_body_raw("<workzag-jobs><position></workzag-jobs>", "text/xml"),
    )
    .await;

    let client = FeedClient::with_settings(FetchSettings::default());
    let err = client.load(&format!("{}/xml", server.uri())).await.unwrap_err();

    assert!(matches!(err, FeedError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn client_accepts_feed_served_as_plain_text() {
    init_logging();
    let server = serve(
        "/xml",
        ResponseTemplate::new(200).set_body_raw(FEED, "text/plain; charset=utf-8"),
    )
    .await;

    let client = FeedClient::with_settings(FetchSettings::default());
    let doc = client.load(&format!("{}/xml", server.uri())).await.expect("feed ok");

    assert_eq!(doc.elements_by_tag("position").count(), 2);
}

#[tokio::test]
async fn configured_allowlist_rejects_other_content_types() {
    init_logging();
    let server = serve(
        "/xml",
        ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"),
    )
    .await;

    let settings = FetchSettings {
        allowed_content_types: vec!["application/xml".to_string(), "text/xml".to_string()],
        ..FetchSettings::default()
    };
    let client = FeedClient::with_settings(settings);
    let err = client.load(&format!("{}/xml", server.uri())).await.unwrap_err();

    match err {
        FeedError::Network(fetch) => assert!(matches!(
            fetch.kind,
            FailureKind::UnsupportedContentType { .. }
        )),
        other => panic!("expected network error, got {other:?}"),
    }
}

#[tokio::test]
async fn client_times_out_once_without_retry() {
    init_logging();
    let server = serve(
        "/slow",
        ResponseTemplate::new(200)
            .set_delay(Duration::from_millis(250))
            .set_body_raw(FEED, "application/xml"),
    )
    .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let client = FeedClient::with_settings(settings);
    let err = client.load(&format!("{}/slow", server.uri())).await.unwrap_err();

    match err {
        FeedError::Network(fetch) => assert_eq!(fetch.kind, FailureKind::Timeout),
        other => panic!("expected timeout, got {other:?}"),
    }
    assert_eq!(server.received_requests().await.unwrap_or_default().len(), 1);
}

#[tokio::test]
async fn client_rejects_oversized_body() {
    init_logging();
    let server = serve(
        "/xml",
        ResponseTemplate::new(200).set_body_raw(FEED, "application/xml"),
    )
    .await;

    let settings = FetchSettings {
        max_bytes: 64,
        ..FetchSettings::default()
    };
    let client = FeedClient::with_settings(settings);
    let err = client.load(&format!("{}/xml", server.uri())).await.unwrap_err();

    match err {
        FeedError::Network(fetch) => {
            assert!(matches!(fetch.kind, FailureKind::TooLarge { max_bytes: 64, .. }))
        }
        other => panic!("expected too large, got {other:?}"),
    }
}

#[tokio::test]
async fn client_stops_at_redirect_limit() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/loop"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("Location", format!("{}/loop", server.uri())),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        redirect_limit: 3,
        ..FetchSettings::default()
    };
    let client = FeedClient::with_settings(settings);
    let err = client.load(&format!("{}/loop", server.uri())).await.unwrap_err();

    match err {
        FeedError::Network(fetch) => assert_eq!(fetch.kind, FailureKind::RedirectLimitExceeded),
        other => panic!("expected redirect limit, got {other:?}"),
    }
    assert!(server.received_requests().await.unwrap_or_default().len() <= 4);
}

#[tokio::test]
async fn client_rejects_invalid_url() {
    init_logging();
    let client = FeedClient::with_settings(FetchSettings::default());
    let err = client.load("not a url").await.unwrap_err();

    match err {
        FeedError::Network(fetch) => assert_eq!(fetch.kind, FailureKind::InvalidUrl),
        other => panic!("expected invalid url, got {other:?}"),
    }
}

#[tokio::test]
async fn engine_delivers_extraction() {
    init_logging();
    let server = serve(
        "/xml",
        ResponseTemplate::new(200).set_body_raw(FEED, "application/xml"),
    )
    .await;
    let url = format!("{}/xml", server.uri());

    let engine = EngineHandle::new(
        FeedClient::with_settings(FetchSettings::default()),
        Arc::new(PositionExtractor::default()),
    );
    engine.load_feed(url.clone());

    let event = tokio::task::spawn_blocking(move || engine.recv())
        .await
        .expect("join")
        .expect("engine event");

    match event {
        EngineEvent::FeedLoaded {
            url: loaded_url,
            extraction,
        } => {
            assert_eq!(loaded_url, url);
            assert_eq!(extraction.dropped, 1);
            assert_eq!(extraction.categories.job_count(), 1);
            assert_eq!(
                extraction.categories.names().collect::<Vec<_>>(),
                vec!["Engineering"]
            );
        }
        other => panic!("expected loaded feed, got {other:?}"),
    }
}
