//! Integration tests for labels and comments.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, id_of};

#[tokio::test]
async fn test_label_lifecycle() {
    let app = TestApp::new();
    let alice = app.session("a@x.com").await;
    let token = alice.access_token.as_str();
    let created = app.create_project(token, "P").await;
    let project_id = id_of(&created["project"]);
    let task_id = id_of(&app.create_task(token, &id_of(&created["columns"][0]), "T").await);

    let label = app
        .request(
            "POST",
            &format!("/api/v1/projects/{project_id}/labels"),
            Some(json!({ "name": "bug" })),
            Some(token),
        )
        .await;
    assert_eq!(label.status, StatusCode::CREATED);
    assert_eq!(label.data()["color"], "#6b7280");
    let label_id = id_of(label.data());

    for _ in 0..2 {
        let attached = app
            .request(
                "POST",
                &format!("/api/v1/tasks/{task_id}/labels"),
                Some(json!({ "label_id": label_id })),
                Some(token),
            )
            .await;
        assert_eq!(attached.status, StatusCode::NO_CONTENT);
    }

    let on_task = app
        .request(
            "GET",
            &format!("/api/v1/tasks/{task_id}/labels"),
            None,
            Some(token),
        )
        .await;
    assert_eq!(on_task.data().as_array().unwrap().len(), 1);

    let detached = app
        .request(
            "DELETE",
            &format!("/api/v1/tasks/{task_id}/labels/{label_id}"),
            None,
            Some(token),
        )
        .await;
    assert_eq!(detached.status, StatusCode::NO_CONTENT);

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/v1/labels/{label_id}"),
            None,
            Some(token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let listed = app
        .request(
            "GET",
            &format!("/api/v1/projects/{project_id}/labels"),
            None,
            Some(token),
        )
        .await;
    assert!(listed.data().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_foreign_label_cannot_be_attached() {
    let app = TestApp::new();
    let alice = app.session("a@x.com").await;
    let bob = app.session("b@x.com").await;
    let mine = app.create_project(&alice.access_token, "Mine").await;
    let theirs = app.create_project(&bob.access_token, "Theirs").await;
    let task_id = id_of(
        &app.create_task(&alice.access_token, &id_of(&mine["columns"][0]), "T")
            .await,
    );
    let their_label = app
        .request(
            "POST",
            &format!("/api/v1/projects/{}/labels", id_of(&theirs["project"])),
            Some(json!({ "name": "x" })),
            Some(&bob.access_token),
        )
        .await;

    let response = app
        .request(
            "POST",
            &format!("/api/v1/tasks/{task_id}/labels"),
            Some(json!({ "label_id": id_of(their_label.data()) })),
            Some(&alice.access_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_comment_author_rules() {
    let app = TestApp::new();
    let alice = app.session("a@x.com").await;
    let bob = app.session("b@x.com").await;
    let created = app.create_project(&alice.access_token, "P").await;
    let task_id = id_of(
        &app.create_task(&alice.access_token, &id_of(&created["columns"][0]), "T")
            .await,
    );

    let comment = app
        .request(
            "POST",
            &format!("/api/v1/tasks/{task_id}/comments"),
            Some(json!({ "content": "Looks good" })),
            Some(&alice.access_token),
        )
        .await;
    assert_eq!(comment.status, StatusCode::CREATED);
    assert_eq!(comment.data()["author_id"], alice.user_id.as_str());
    let comment_id = id_of(comment.data());

    let foreign_post = app
        .request(
            "POST",
            &format!("/api/v1/tasks/{task_id}/comments"),
            Some(json!({ "content": "hi" })),
            Some(&bob.access_token),
        )
        .await;
    assert_eq!(foreign_post.status, StatusCode::FORBIDDEN);

    let foreign_edit = app
        .request(
            "PATCH",
            &format!("/api/v1/comments/{comment_id}"),
            Some(json!({ "content": "hijacked" })),
            Some(&bob.access_token),
        )
        .await;
    assert_eq!(foreign_edit.status, StatusCode::FORBIDDEN);

    let edited = app
        .request(
            "PATCH",
            &format!("/api/v1/comments/{comment_id}"),
            Some(json!({ "content": "Ship it" })),
            Some(&alice.access_token),
        )
        .await;
    assert_eq!(edited.data()["content"], "Ship it");

    let listed = app
        .request(
            "GET",
            &format!("/api/v1/tasks/{task_id}/comments"),
            None,
            Some(&alice.access_token),
        )
        .await;
    assert_eq!(listed.data().as_array().unwrap().len(), 1);

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/v1/comments/{comment_id}"),
            None,
            Some(&alice.access_token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
}
