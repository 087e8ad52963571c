use blogsmith_storage::ObjectStore;
use serde_json::json;

use crate::common::{PUBLIC_BASE_URL, TestApp, routes};

const PAGE: &str = "<!DOCTYPE html>\n<html><body><h1>Caf\u{e9} \u{1f600}</h1>\r\n<p>  spaced  </p></body></html>";

#[tokio::test]
async fn saved_webpage_round_trips_unchanged() {
    let app = TestApp::spawn().await;
    let alice = app.create_authenticated_user("alice", "securepass").await;
    let topic = app.create_topic(&alice, "Budget travel").await;

    let res = app
        .post_with_token(
            routes::SAVE_WEBPAGE,
            &json!({"user_id": alice.id, "topic_id": topic, "html_content": PAGE}),
            &alice.token,
        )
        .await;
    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(res.body["success"], true);

    let res = app
        .get_with_token(&routes::get_webpage(alice.id, topic), &alice.token)
        .await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["html_content"], PAGE);
}

#[tokio::test]
async fn saving_again_replaces_the_page() {
    let app = TestApp::spawn().await;
    let alice = app.create_authenticated_user("alice", "securepass").await;
    let topic = app.create_topic(&alice, "Budget travel").await;

    for html in ["<p>v1</p>", "<p>v2</p>"] {
        app.post_with_token(
            routes::SAVE_WEBPAGE,
            &json!({"user_id": alice.id, "topic_id": topic, "html_content": html}),
            &alice.token,
        )
        .await;
    }

    let res = app
        .get_with_token(&routes::get_webpage(alice.id, topic), &alice.token)
        .await;
    assert_eq!(res.body["html_content"], "<p>v2</p>");
}

#[tokio::test]
async fn missing_webpage_is_not_found() {
    let app = TestApp::spawn().await;
    let alice = app.create_authenticated_user("alice", "securepass").await;
    let topic = app.create_topic(&alice, "Budget travel").await;

    let res = app
        .get_with_token(&routes::get_webpage(alice.id, topic), &alice.token)
        .await;

    assert_eq!(res.status, 404);
}

#[tokio::test]
async fn empty_html_is_rejected() {
    let app = TestApp::spawn().await;
    let alice = app.create_authenticated_user("alice", "securepass").await;
    let topic = app.create_topic(&alice, "Budget travel").await;

    let res = app
        .post_with_token(
            routes::SAVE_WEBPAGE,
            &json!({"user_id": alice.id, "topic_id": topic, "html_content": ""}),
            &alice.token,
        )
        .await;

    assert_eq!(res.status, 400);
}

#[tokio::test]
async fn template_is_filled_with_stored_sections() {
    let app = TestApp::spawn().await;
    let alice = app.create_authenticated_user("alice", "securepass").await;
    let topic = app.create_topic(&alice, "Budget travel").await;
    app.save_section(&alice, topic, "TITLE", "Portugal on a shoestring")
        .await;
    app.text_model.reply_with(
        "<html><h1>{{TITLE}}</h1>{{INTRODUCTION}}<main>{{BODY}}</main>\
         <footer>{{AUTHOR_NAME}}</footer></html>",
    );

    let res = app
        .post_with_token(
            routes::GENERATE_TEMPLATE,
            &json!({"user_id": alice.id, "topic_id": topic, "additional_prompt": "dark theme"}),
            &alice.token,
        )
        .await;

    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(
        res.body["html"],
        "<html><h1>Portugal on a shoestring</h1><main></main>\
         <footer>{{AUTHOR_NAME}}</footer></html>"
    );
    assert!(app.text_model.prompts()[0].contains("dark theme"));
}

#[tokio::test]
async fn template_for_foreign_topic_is_not_found() {
    let app = TestApp::spawn().await;
    let alice = app.create_authenticated_user("alice", "securepass").await;
    let bob = app.create_authenticated_user("bob", "securepass").await;
    let topic = app.create_topic(&alice, "Budget travel").await;

    let res = app
        .post_with_token(
            routes::GENERATE_TEMPLATE,
            &json!({"user_id": bob.id, "topic_id": topic}),
            &bob.token,
        )
        .await;

    assert_eq!(res.status, 404);
}

#[tokio::test]
async fn upload_publishes_under_user_topic_key() {
    let app = TestApp::spawn().await;
    let alice = app.create_authenticated_user("alice", "securepass").await;
    let topic = app.create_topic(&alice, "Budget travel").await;

    let res = app
        .post_with_token(
            routes::UPLOAD,
            &json!({"user_id": alice.id, "topic_id": topic, "html_content": PAGE}),
            &alice.token,
        )
        .await;

    assert_eq!(res.status, 200, "{}", res.text);
    let key = format!("webpages/{}_{}.html", alice.id, topic);
    assert_eq!(res.body["s3_url"], format!("{PUBLIC_BASE_URL}/{key}"));
    assert_eq!(app.object_store.get(&key).await.unwrap(), PAGE.as_bytes());
}

#[tokio::test]
async fn upload_for_another_user_is_forbidden() {
    let app = TestApp::spawn().await;
    let alice = app.create_authenticated_user("alice", "securepass").await;
    let bob = app.create_authenticated_user("bob", "securepass").await;
    let topic = app.create_topic(&alice, "Budget travel").await;

    let res = app
        .post_with_token(
            routes::UPLOAD,
            &json!({"user_id": alice.id, "topic_id": topic, "html_content": "<p>x</p>"}),
            &bob.token,
        )
        .await;

    assert_eq!(res.status, 403);
    assert_eq!(res.body["code"], "PERMISSION_DENIED");
}
