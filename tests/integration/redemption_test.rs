//! Integration tests for gated redemption.

use filegate_core::types::{InlineButton, MemberStatus, UserId};
use filegate_service::messages;

use crate::helpers::TestApp;

const READER: UserId = UserId(500);

#[tokio::test]
async fn test_plain_start_greets_with_first_name() {
    let app = TestApp::new(&[]).await;
    app.send_text(READER, "/start").await;

    assert_eq!(
        app.texts_to(READER),
        vec!["Hello User500! Use /upload to share files (admin only).".to_string()]
    );
}

#[tokio::test]
async fn test_subscribed_user_receives_file() {
    let app = TestApp::new(&["@news", "-1001234567890"]).await;
    app.transport
        .set_member_status("@news", READER, MemberStatus::Administrator);
    app.transport
        .set_member_status("-1001234567890", READER, MemberStatus::Creator);
    let payload = app.upload_document("BQAC-report").await;

    app.send_text(READER, &format!("/start {payload}")).await;

    assert_eq!(app.texts_to(READER), vec![messages::ACCESSING_FILE]);
    let media = app.transport.media_sent();
    assert_eq!(media.len(), 1);
    assert_eq!(media[0].1.file_id, "BQAC-report");
}

#[tokio::test]
async fn test_unsubscribed_user_gets_prompt_for_every_unmet_channel() {
    let app = TestApp::new(&["@news", "@deals", "-1001234567890"]).await;
    app.transport
        .set_member_status("@news", READER, MemberStatus::Member);
    app.transport
        .set_member_status("@deals", READER, MemberStatus::Kicked);
    let payload = app.upload_document("BQAC-report").await;
    app.transport.clear_calls();

    app.send_text(READER, &format!("/start {payload}")).await;

    assert!(app.transport.media_sent().is_empty());
    // Querying stops at the first failing channel.
    assert_eq!(app.transport.member_queries(), 2);

    let (text, keyboard) = app.transport.last_text().unwrap();
    assert_eq!(text, messages::SUBSCRIBE_PROMPT);
    let buttons: Vec<InlineButton> = keyboard.unwrap().buttons().cloned().collect();
    assert_eq!(
        buttons,
        vec![InlineButton::url("Subscribe to @deals", "https://t.me/deals")]
    );
}

#[tokio::test]
async fn test_membership_lookup_failure_closes_the_gate() {
    let app = TestApp::new(&["@news"]).await;
    app.transport.fail_member_lookup("@news", READER);
    let payload = app.upload_document("BQAC-report").await;

    app.send_text(READER, &format!("/start {payload}")).await;

    assert!(app.transport.media_sent().is_empty());
    assert_eq!(app.texts_to(READER), vec![messages::SUBSCRIBE_PROMPT]);
}

#[tokio::test]
async fn test_restricted_and_left_users_are_denied() {
    for status in [MemberStatus::Restricted, MemberStatus::Left] {
        let app = TestApp::new(&["@news"]).await;
        app.transport.set_member_status("@news", READER, status);

        app.send_text(READER, "/start").await;
        assert_eq!(app.texts_to(READER), vec![messages::SUBSCRIBE_PROMPT]);
    }
}

#[tokio::test]
async fn test_garbage_payload_is_rejected() {
    let app = TestApp::new(&[]).await;

    app.send_text(READER, "/start file_does-not-exist").await;
    app.send_text(READER, "/start file_").await;

    assert_eq!(
        app.texts_to(READER),
        vec![messages::LINK_INVALID, messages::LINK_INVALID]
    );
    assert!(app.scheduler.armed().is_empty());
}

#[tokio::test]
async fn test_referral_payload_gets_greeting() {
    let app = TestApp::new(&[]).await;

    app.send_text(READER, "/start ref_campaign42").await;

    let texts = app.texts_to(READER);
    assert_eq!(texts.len(), 1);
    assert!(texts[0].starts_with("Hello "));
    assert!(app.transport.media_sent().is_empty());
}

#[tokio::test]
async fn test_start_addressed_to_bot_is_accepted() {
    let app = TestApp::new(&[]).await;
    let payload = app.upload_document("BQAC-report").await;

    app.send_text(READER, &format!("/start@FileGateBot {payload}"))
        .await;

    assert_eq!(app.transport.media_sent().len(), 1);
}
