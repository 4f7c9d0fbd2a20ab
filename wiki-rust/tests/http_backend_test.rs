use axum::http::StatusCode;
use hoyowiki::{
    HttpWikiBackend, HttpWikiBackendOptions, WikiBackend, WikiError, WikiQuery, WikiService,
    DEFAULT_BASE_URL,
};
use std::collections::HashMap;

mod common;

use common::{bronya_response, start_stub_plugin, BoxedError, StubResponses};

fn service_for(url: &str) -> WikiService {
    WikiService::http(HttpWikiBackendOptions {
        base_url: Some(format!("{url}/")),
        headers: Some(HashMap::from([(
            "X-CSRF-Token".to_string(),
            "token-123".to_string(),
        )])),
        ..Default::default()
    })
}

#[tokio::test]
async fn probe_reports_available_when_plugin_answers() -> Result<(), BoxedError> {
    let stub = start_stub_plugin(StubResponses::default()).await?;
    let service = service_for(stub.url());

    assert!(service.check_available().await);
    service.require_available().await?;

    let received = stub.received();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0].path, "/api/plugins/hoyoverse/probe");
    assert!(received[0].body.is_empty());
    Ok(())
}

#[tokio::test]
async fn probe_reports_unavailable_on_error_status() -> Result<(), BoxedError> {
    let stub = start_stub_plugin(StubResponses {
        probe_status: StatusCode::NOT_FOUND,
        ..Default::default()
    })
    .await?;
    let service = service_for(stub.url());

    assert!(!service.check_available().await);
    assert!(matches!(
        service.require_available().await,
        Err(WikiError::BackendUnavailable)
    ));
    Ok(())
}

#[tokio::test]
async fn probe_reports_unavailable_when_server_is_unreachable() {
    let service = WikiService::http(HttpWikiBackendOptions {
        base_url: Some("http://127.0.0.1:1".to_string()),
        ..Default::default()
    });

    assert!(!service.check_available().await);
}

#[tokio::test]
async fn fetch_posts_query_to_silver_wolf_and_formats_entry() -> Result<(), BoxedError> {
    let stub = start_stub_plugin(StubResponses {
        entry_body: bronya_response(),
        ..Default::default()
    })
    .await?;
    let service = service_for(stub.url());

    let text = service.fetch_and_format("hsr", "1001").await?;
    assert_eq!(text, "Name: Bronya\nStats\n- HP: 1000\n\n");

    let received = stub.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].path, "/api/plugins/hoyoverse/silver-wolf");
    assert_eq!(
        received[0].headers.get("x-csrf-token").map(|v| v.as_bytes()),
        Some(&b"token-123"[..])
    );

    let body: serde_json::Value = serde_json::from_str(&received[0].body)?;
    assert_eq!(
        body,
        serde_json::json!({ "miHoYoWiki": "hsr", "miHoYoWikiID": "1001" })
    );
    Ok(())
}

#[tokio::test]
async fn package_matches_formatted_text() -> Result<(), BoxedError> {
    let stub = start_stub_plugin(StubResponses {
        entry_body: bronya_response(),
        ..Default::default()
    })
    .await?;
    let service = service_for(stub.url());

    let text = service.fetch_and_format("hsr", "1001").await?;
    let file = service.fetch_and_package("hsr", "1001").await?;

    assert_eq!(file.name, "Bronya.txt");
    assert_eq!(file.mime_type, "text/plain");
    assert_eq!(file.content, text);
    Ok(())
}

#[tokio::test]
async fn error_status_surfaces_body_verbatim() -> Result<(), BoxedError> {
    let stub = start_stub_plugin(StubResponses {
        entry_status: StatusCode::INTERNAL_SERVER_ERROR,
        entry_body: "server down".to_string(),
        ..Default::default()
    })
    .await?;
    let service = service_for(stub.url());

    let err = service
        .fetch_and_format("hsr", "1001")
        .await
        .expect_err("fetch should fail");
    assert_eq!(err.to_string(), "server down");
    match err {
        WikiError::RequestFailed { status, message } => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(message, "server down");
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn empty_entry_list_is_malformed() -> Result<(), BoxedError> {
    let stub = start_stub_plugin(StubResponses::default()).await?;
    let service = service_for(stub.url());

    let err = service
        .fetch_and_format("hsr", "1001")
        .await
        .expect_err("fetch should fail");
    assert!(matches!(err, WikiError::MalformedResponse(_)));
    Ok(())
}

#[tokio::test]
async fn entry_without_content_is_malformed() -> Result<(), BoxedError> {
    let stub = start_stub_plugin(StubResponses {
        entry_body: r#"[{ "name": "Bronya" }]"#.to_string(),
        ..Default::default()
    })
    .await?;
    let service = service_for(stub.url());

    let err = service
        .fetch_and_package("hsr", "1001")
        .await
        .expect_err("fetch should fail");
    assert!(matches!(err, WikiError::MalformedResponse(_)));
    Ok(())
}

#[tokio::test]
async fn validation_errors_send_no_request() -> Result<(), BoxedError> {
    let stub = start_stub_plugin(StubResponses {
        entry_body: bronya_response(),
        ..Default::default()
    })
    .await?;
    let service = service_for(stub.url());

    assert!(matches!(
        service.fetch_and_format("genshin", "1001").await,
        Err(WikiError::NotYetImplemented(_))
    ));
    assert!(matches!(
        service.fetch_and_format("hsr", "").await,
        Err(WikiError::InvalidQuery(_))
    ));
    assert!(matches!(
        service.fetch_and_format("zzz", "1001").await,
        Err(WikiError::UnsupportedWiki(_))
    ));

    assert!(stub.received().is_empty());
    Ok(())
}

#[tokio::test]
async fn invalid_header_is_a_configuration_error() -> Result<(), BoxedError> {
    let stub = start_stub_plugin(StubResponses::default()).await?;
    let backend = HttpWikiBackend::new(HttpWikiBackendOptions {
        base_url: Some(stub.url().to_string()),
        headers: Some(HashMap::from([(
            "bad header".to_string(),
            "value".to_string(),
        )])),
        ..Default::default()
    });

    assert!(!backend.probe().await);

    let query = WikiQuery::parse("hsr", "1001")?;
    let err = backend
        .fetch_entry("/api/plugins/hoyoverse/silver-wolf", &query)
        .await
        .expect_err("fetch should fail");
    assert!(matches!(err, WikiError::InvalidConfig(_)));
    assert!(stub.received().is_empty());
    Ok(())
}

#[test]
fn base_url_defaults_and_trailing_slash_is_trimmed() {
    let backend = HttpWikiBackend::new(HttpWikiBackendOptions::default());
    assert_eq!(backend.base_url(), DEFAULT_BASE_URL);

    let backend = HttpWikiBackend::new(HttpWikiBackendOptions {
        base_url: Some("http://localhost:8000///".to_string()),
        ..Default::default()
    });
    assert_eq!(backend.base_url(), "http://localhost:8000");
}
