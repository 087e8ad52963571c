use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn created_topics_are_listed_for_their_owner() {
    let app = TestApp::spawn().await;
    let alice = app.create_authenticated_user("alice", "securepass").await;

    let first = app.create_topic(&alice, "Budget travel").await;
    let second = app.create_topic(&alice, "Sourdough basics").await;

    let res = app.get_with_token(&routes::topics(alice.id), &alice.token).await;

    assert_eq!(res.status, 200, "{}", res.text);
    let topics = res.body["topics"].as_array().unwrap();
    assert_eq!(topics.len(), 2);
    assert_eq!(topics[0]["id"], first);
    assert_eq!(topics[0]["title"], "Budget travel");
    assert_eq!(topics[1]["id"], second);
}

#[tokio::test]
async fn topics_of_other_users_are_not_listed() {
    let app = TestApp::spawn().await;
    let alice = app.create_authenticated_user("alice", "securepass").await;
    let bob = app.create_authenticated_user("bob", "securepass").await;
    app.create_topic(&alice, "Budget travel").await;

    let res = app.get_with_token(&routes::topics(bob.id), &bob.token).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["topics"], json!([]));
}

#[tokio::test]
async fn listing_someone_elses_topics_is_forbidden() {
    let app = TestApp::spawn().await;
    let alice = app.create_authenticated_user("alice", "securepass").await;
    let bob = app.create_authenticated_user("bob", "securepass").await;

    let res = app.get_with_token(&routes::topics(alice.id), &bob.token).await;

    assert_eq!(res.status, 403);
    assert_eq!(res.body["code"], "PERMISSION_DENIED");
}

#[tokio::test]
async fn creating_a_topic_for_someone_else_is_forbidden() {
    let app = TestApp::spawn().await;
    let alice = app.create_authenticated_user("alice", "securepass").await;
    let bob = app.create_authenticated_user("bob", "securepass").await;

    let res = app
        .post_with_token(
            routes::TOPICS,
            &json!({"user_id": alice.id, "title": "Hijacked"}),
            &bob.token,
        )
        .await;

    assert_eq!(res.status, 403);
}

#[tokio::test]
async fn blank_title_is_rejected() {
    let app = TestApp::spawn().await;
    let alice = app.create_authenticated_user("alice", "securepass").await;

    let res = app
        .post_with_token(
            routes::TOPICS,
            &json!({"user_id": alice.id, "title": "   "}),
            &alice.token,
        )
        .await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn missing_user_id_query_is_rejected() {
    let app = TestApp::spawn().await;
    let alice = app.create_authenticated_user("alice", "securepass").await;

    let res = app.get_with_token(routes::TOPICS, &alice.token).await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}
