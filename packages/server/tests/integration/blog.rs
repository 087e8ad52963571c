use blogsmith_server::entity::blog;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn saved_sections_are_returned_by_get_blog() {
    let app = TestApp::spawn().await;
    let alice = app.create_authenticated_user("alice", "securepass").await;
    let topic = app.create_topic(&alice, "Budget travel").await;

    app.save_section(&alice, topic, "TITLE", "Portugal on a shoestring")
        .await;
    app.save_section(&alice, topic, "BODY", "<div class=\"body\"><p>Walk.</p></div>")
        .await;

    let res = app
        .get_with_token(&routes::get_blog(alice.id, topic), &alice.token)
        .await;

    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(res.body["title"], "Portugal on a shoestring");
    assert_eq!(res.body["body"], "<div class=\"body\"><p>Walk.</p></div>");
    assert!(res.body["intro"].is_null());
}

#[tokio::test]
async fn saving_a_section_twice_keeps_one_row_with_latest_value() {
    let app = TestApp::spawn().await;
    let alice = app.create_authenticated_user("alice", "securepass").await;
    let topic = app.create_topic(&alice, "Budget travel").await;

    app.save_section(&alice, topic, "INTRODUCTION", "first draft")
        .await;
    app.save_section(&alice, topic, "INTRODUCTION", "second draft")
        .await;

    let rows = blog::Entity::find().count(&app.db).await.unwrap();
    assert_eq!(rows, 1);

    let res = app
        .get_with_token(&routes::get_blog(alice.id, topic), &alice.token)
        .await;
    assert_eq!(res.body["intro"], "second draft");
}

#[tokio::test]
async fn blog_title_is_kept_when_omitted() {
    let app = TestApp::spawn().await;
    let alice = app.create_authenticated_user("alice", "securepass").await;
    let topic = app.create_topic(&alice, "Budget travel").await;

    let res = app
        .post_with_token(
            routes::SAVE_BLOG,
            &json!({
                "user_id": alice.id,
                "topic_id": topic,
                "blog_title": "Lisbon Diaries",
                "section": "TITLE",
                "content": "Day one",
            }),
            &alice.token,
        )
        .await;
    assert_eq!(res.status, 200, "{}", res.text);

    app.save_section(&alice, topic, "BODY", "<div class=\"body\"></div>")
        .await;

    let res = app
        .get_with_token(&routes::get_blog(alice.id, topic), &alice.token)
        .await;
    assert_eq!(res.body["blog_title"], "Lisbon Diaries");
    assert_eq!(res.body["title"], "Day one");
}

#[tokio::test]
async fn unknown_blog_is_not_found() {
    let app = TestApp::spawn().await;
    let alice = app.create_authenticated_user("alice", "securepass").await;
    let topic = app.create_topic(&alice, "Budget travel").await;

    let res = app
        .get_with_token(&routes::get_blog(alice.id, topic), &alice.token)
        .await;

    assert_eq!(res.status, 404);
    assert_eq!(res.body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn reading_someone_elses_blog_is_forbidden() {
    let app = TestApp::spawn().await;
    let alice = app.create_authenticated_user("alice", "securepass").await;
    let bob = app.create_authenticated_user("bob", "securepass").await;
    let topic = app.create_topic(&alice, "Budget travel").await;
    app.save_section(&alice, topic, "TITLE", "Private").await;

    let res = app
        .get_with_token(&routes::get_blog(alice.id, topic), &bob.token)
        .await;

    assert_eq!(res.status, 403);
}

#[tokio::test]
async fn saving_into_a_foreign_topic_is_not_found() {
    let app = TestApp::spawn().await;
    let alice = app.create_authenticated_user("alice", "securepass").await;
    let bob = app.create_authenticated_user("bob", "securepass").await;
    let alices_topic = app.create_topic(&alice, "Budget travel").await;

    let res = app
        .post_with_token(
            routes::SAVE_BLOG,
            &json!({
                "user_id": bob.id,
                "topic_id": alices_topic,
                "section": "TITLE",
                "content": "mine now",
            }),
            &bob.token,
        )
        .await;

    assert_eq!(res.status, 404);
}

#[tokio::test]
async fn unknown_section_kind_is_rejected() {
    let app = TestApp::spawn().await;
    let alice = app.create_authenticated_user("alice", "securepass").await;
    let topic = app.create_topic(&alice, "Budget travel").await;

    let res = app
        .post_with_token(
            routes::SAVE_BLOG,
            &json!({
                "user_id": alice.id,
                "topic_id": topic,
                "section": "FOOTER",
                "content": "x",
            }),
            &alice.token,
        )
        .await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}
