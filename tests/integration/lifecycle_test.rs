//! Full link lifecycle: upload, share, redeem, revoke.

use filegate_core::types::{ChatId, MemberStatus, UserId};
use filegate_service::messages;
use filegate_telegram::TransportCall;

use crate::helpers::{ADMIN, TestApp};

const READER: UserId = UserId(900);

#[tokio::test]
async fn test_upload_redeem_revoke_redeem() {
    let app = TestApp::new(&["@news"]).await;
    app.transport
        .set_member_status("@news", READER, MemberStatus::Member);

    let payload = app.upload_document("BQAC-report").await;
    let (confirmation, _, revoke_data) = app.last_confirmation().unwrap();

    app.send_text(READER, &format!("/start {payload}")).await;
    app.send_text(READER, &format!("/start {payload}")).await;
    assert_eq!(app.transport.media_sent().len(), 2);

    app.press(ADMIN, confirmation, &revoke_data).await;
    assert!(app.transport.calls().contains(&TransportCall::EditText {
        message: confirmation,
        text: messages::LINK_REVOKED.to_string(),
    }));

    app.send_text(READER, &format!("/start {payload}")).await;
    assert_eq!(app.transport.media_sent().len(), 2);
    assert_eq!(
        app.texts_to(READER).last().map(String::as_str),
        Some(messages::LINK_INVALID)
    );

    // Revoking again reports success and stays revoked.
    app.press(ADMIN, confirmation, &revoke_data).await;
    assert!(app.links().await[0].revoked);
}

#[tokio::test]
async fn test_reupload_mints_independent_link() {
    let app = TestApp::new(&[]).await;

    let first = app.upload_document("BQAC-report").await;
    let (first_confirmation, _, first_revoke) = app.last_confirmation().unwrap();
    let second = app.upload_document("BQAC-report").await;
    assert_ne!(first, second);

    app.press(ADMIN, first_confirmation, &first_revoke).await;

    app.send_text(READER, &format!("/start {first}")).await;
    app.send_text(READER, &format!("/start {second}")).await;

    let media = app.transport.media_sent();
    assert_eq!(media.len(), 1);
    assert_eq!(media[0].0, ChatId::from(READER));
}

#[tokio::test]
async fn test_every_delivery_and_confirmation_is_scheduled_for_cleanup() {
    let app = TestApp::new(&[]).await;

    let payload = app.upload_document("BQAC-report").await;
    app.send_text(READER, &format!("/start {payload}")).await;

    let armed = app.scheduler.armed();
    assert_eq!(armed.len(), 2);
    assert_eq!(armed[0].0.chat_id, ChatId::from(ADMIN));
    assert_eq!(armed[1].0.chat_id, ChatId::from(READER));
}

#[tokio::test]
async fn test_failed_delivery_sends_notice_and_keeps_link() {
    let app = TestApp::new(&[]).await;
    let payload = app.upload_document("BQAC-report").await;
    app.transport.set_fail_media(true);

    app.send_text(READER, &format!("/start {payload}")).await;

    assert_eq!(
        app.texts_to(READER),
        vec![messages::ACCESSING_FILE, messages::DELIVERY_FAILED]
    );
    assert!(!app.links().await[0].revoked);

    app.transport.set_fail_media(false);
    app.send_text(READER, &format!("/start {payload}")).await;
    assert_eq!(app.transport.media_sent().len(), 1);
}
