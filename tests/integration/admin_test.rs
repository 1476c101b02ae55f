//! Integration tests for admin upload and revoke.

use std::time::Duration;

use filegate_core::types::{MediaKind, UserId};
use filegate_service::messages;
use filegate_telegram::TransportCall;

use crate::helpers::{ADMIN, TestApp};

const STRANGER: UserId = UserId(77);

#[tokio::test]
async fn test_upload_command_by_role() {
    let app = TestApp::new(&[]).await;

    app.send_text(ADMIN, "/upload").await;
    app.send_text(STRANGER, "/upload").await;

    assert_eq!(app.texts_to(ADMIN), vec![messages::UPLOAD_INSTRUCTIONS]);
    assert_eq!(app.texts_to(STRANGER), vec![messages::UPLOAD_COMMAND_DENIED]);
}

#[tokio::test]
async fn test_admin_document_upload_creates_one_link() {
    let app = TestApp::new(&[]).await;
    app.send_document(ADMIN, "BQAC-report").await;

    let links = app.links().await;
    assert_eq!(links.len(), 1);
    assert!(!links[0].revoked);
    assert_eq!(links[0].artifact_ref, "BQAC-report");
    assert_eq!(links[0].media_kind, MediaKind::Document);

    let (confirmation, text, data) = app.last_confirmation().unwrap();
    assert_eq!(
        text,
        format!(
            "File uploaded! Share this link: https://t.me/FileGateBot?start=file_{}",
            links[0].token
        )
    );
    assert_eq!(data, format!("revoke_{}", links[0].token));
    assert_eq!(
        app.scheduler.armed(),
        vec![(confirmation, Duration::from_secs(30 * 60))]
    );
}

#[tokio::test]
async fn test_photo_upload_keeps_highest_resolution() {
    let app = TestApp::new(&[]).await;
    app.send_photo(
        ADMIN,
        &[("thumb", 90, 51), ("full", 1280, 720), ("tie", 720, 1280), ("mid", 320, 180)],
    )
    .await;

    let links = app.links().await;
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].media_kind, MediaKind::Photo);
    // Equal pixel counts resolve to the later variant.
    assert_eq!(links[0].artifact_ref, "tie");
}

#[tokio::test]
async fn test_stranger_upload_is_refused_without_state_change() {
    let app = TestApp::new(&[]).await;
    app.send_document(STRANGER, "BQAC-report").await;

    assert!(app.links().await.is_empty());
    assert!(app.scheduler.armed().is_empty());
    assert_eq!(app.texts_to(STRANGER), vec![messages::UPLOAD_DENIED]);
}

#[tokio::test]
async fn test_stranger_cannot_revoke() {
    let app = TestApp::new(&[]).await;
    app.send_document(ADMIN, "BQAC-report").await;
    let (confirmation, _, data) = app.last_confirmation().unwrap();

    app.press(STRANGER, confirmation, &data).await;

    assert!(!app.links().await[0].revoked);
    let calls = app.transport.calls();
    assert!(calls
        .iter()
        .any(|c| matches!(c, TransportCall::AnswerCallback { .. })));
    assert!(calls.contains(&TransportCall::EditText {
        message: confirmation,
        text: messages::REVOKE_DENIED.to_string(),
    }));
}

#[tokio::test]
async fn test_admin_revoke_unknown_token() {
    let app = TestApp::new(&[]).await;
    app.send_document(ADMIN, "BQAC-report").await;
    let (confirmation, _, _) = app.last_confirmation().unwrap();

    app.press(ADMIN, confirmation, "revoke_0123456789abcdef").await;

    assert!(app.transport.calls().contains(&TransportCall::EditText {
        message: confirmation,
        text: messages::LINK_NOT_FOUND.to_string(),
    }));
    assert!(!app.links().await[0].revoked);
}
