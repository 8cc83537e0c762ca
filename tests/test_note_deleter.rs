mod helpers;

use helpers::{unreachable_client, TestServer};
use notes_client::application::NoteDeleter;
use notes_client::domain::ApiError;
use anyhow::Result;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn given_existing_note_when_deleting_then_returns_server_acknowledgment() -> Result<()> {
    // Arrange
    let ts = TestServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/notes"))
        .and(body_json(json!({"id": "1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&ts.server)
        .await;
    let deleter = NoteDeleter::new(ts.client.clone());

    // Act
    let ack = deleter.delete_note("1").await?;

    // Assert
    assert_eq!(ack, json!({"status": "ok"}));
    Ok(())
}

#[tokio::test]
async fn given_nonexistent_note_when_deleting_then_returns_not_found_error() -> Result<()> {
    // Arrange
    let ts = TestServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&ts.server)
        .await;
    let deleter = NoteDeleter::new(ts.client.clone());

    // Act
    let result = deleter.delete_note("1").await;

    // Assert
    match result.unwrap_err() {
        ApiError::Request { status } => assert_eq!(status, 404),
        other => panic!("Expected Request error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn given_server_down_when_deleting_then_returns_network_error() -> Result<()> {
    // Arrange
    let deleter = NoteDeleter::new(unreachable_client());

    // Act
    let result = deleter.delete_note("1").await;

    // Assert
    assert!(matches!(result, Err(ApiError::Network(_))));
    Ok(())
}
