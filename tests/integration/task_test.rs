//! Integration tests for tasks: creation, moves, filters and export.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, id_of};

#[tokio::test]
async fn test_create_task_appends() {
    let app = TestApp::new();
    let alice = app.session("a@x.com").await;
    let token = alice.access_token.as_str();
    let created = app.create_project(token, "P").await;
    let todo = id_of(&created["columns"][0]);

    let first = app.create_task(token, &todo, "One").await;
    let second = app.create_task(token, &todo, "Two").await;

    assert_eq!(first["position"], 1000.0);
    assert_eq!(second["position"], 2000.0);
    assert_eq!(first["priority"], "medium");
}

#[tokio::test]
async fn test_create_task_validation() {
    let app = TestApp::new();
    let alice = app.session("a@x.com").await;
    let token = alice.access_token.as_str();
    let created = app.create_project(token, "P").await;
    let todo = id_of(&created["columns"][0]);

    for body in [
        json!({ "title": "" }),
        json!({ "title": "T", "priority": "urgent" }),
    ] {
        let response = app
            .request(
                "POST",
                &format!("/api/v1/columns/{todo}/tasks"),
                Some(body),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{}", response.text);
    }
}

#[tokio::test]
async fn test_move_task_between_columns() {
    let app = TestApp::new();
    let alice = app.session("a@x.com").await;
    let token = alice.access_token.as_str();
    let created = app.create_project(token, "P").await;
    let todo = id_of(&created["columns"][0]);
    let done = id_of(&created["columns"][2]);
    let task_id = id_of(&app.create_task(token, &todo, "Ship").await);

    let moved = app
        .request(
            "PUT",
            &format!("/api/v1/tasks/{task_id}/move"),
            Some(json!({ "column_id": done, "position": 1500.5 })),
            Some(token),
        )
        .await;

    assert_eq!(moved.status, StatusCode::OK);
    assert_eq!(moved.data()["column_id"], done.as_str());
    assert_eq!(moved.data()["position"], 1500.5);
}

#[tokio::test]
async fn test_move_into_foreign_column_is_forbidden() {
    let app = TestApp::new();
    let alice = app.session("a@x.com").await;
    let bob = app.session("b@x.com").await;
    let mine = app.create_project(&alice.access_token, "Mine").await;
    let theirs = app.create_project(&bob.access_token, "Theirs").await;
    let task_id = id_of(
        &app.create_task(&alice.access_token, &id_of(&mine["columns"][0]), "T")
            .await,
    );

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/tasks/{task_id}/move"),
            Some(json!({ "column_id": id_of(&theirs["columns"][0]), "position": 1.0 })),
            Some(&alice.access_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_update_and_unassign() {
    let app = TestApp::new();
    let alice = app.session("a@x.com").await;
    let token = alice.access_token.as_str();
    let created = app.create_project(token, "P").await;
    let task_id = id_of(&app.create_task(token, &id_of(&created["columns"][0]), "T").await);
    let path = format!("/api/v1/tasks/{task_id}");

    let assigned = app
        .request(
            "PATCH",
            &path,
            Some(json!({ "assignee_id": alice.user_id, "priority": "high" })),
            Some(token),
        )
        .await;
    assert_eq!(assigned.status, StatusCode::OK, "{}", assigned.text);
    assert_eq!(assigned.data()["assignee_id"], alice.user_id.as_str());
    assert_eq!(assigned.data()["priority"], "high");

    let renamed = app
        .request("PATCH", &path, Some(json!({ "title": "Renamed" })), Some(token))
        .await;
    assert_eq!(renamed.data()["assignee_id"], alice.user_id.as_str());

    let cleared = app
        .request("PATCH", &path, Some(json!({ "assignee_id": null })), Some(token))
        .await;
    assert!(cleared.data()["assignee_id"].is_null());
    assert_eq!(cleared.data()["title"], "Renamed");
}

#[tokio::test]
async fn test_list_board_tasks_with_filters() {
    let app = TestApp::new();
    let alice = app.session("a@x.com").await;
    let token = alice.access_token.as_str();
    let created = app.create_project(token, "P").await;
    let board_id = id_of(&created["board"]);
    let todo = id_of(&created["columns"][0]);
    let doing = id_of(&created["columns"][1]);

    app.create_task(token, &todo, "Low").await;
    let urgent = app
        .request(
            "POST",
            &format!("/api/v1/columns/{doing}/tasks"),
            Some(json!({ "title": "Urgent", "priority": "high" })),
            Some(token),
        )
        .await;
    assert_eq!(urgent.status, StatusCode::CREATED);

    let all = app
        .request("GET", &format!("/api/v1/boards/{board_id}/tasks"), None, Some(token))
        .await;
    assert_eq!(all.data().as_array().unwrap().len(), 2);

    let high = app
        .request(
            "GET",
            &format!("/api/v1/boards/{board_id}/tasks?priority=high"),
            None,
            Some(token),
        )
        .await;
    let titles: Vec<&str> = high
        .data()
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Urgent"]);

    let in_todo = app
        .request(
            "GET",
            &format!("/api/v1/boards/{board_id}/tasks?column_id={todo}"),
            None,
            Some(token),
        )
        .await;
    assert_eq!(in_todo.data().as_array().unwrap().len(), 1);

    let bad = app
        .request(
            "GET",
            &format!("/api/v1/boards/{board_id}/tasks?assignee_id=nope"),
            None,
            Some(token),
        )
        .await;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_renumber_tasks() {
    let app = TestApp::new();
    let alice = app.session("a@x.com").await;
    let token = alice.access_token.as_str();
    let created = app.create_project(token, "P").await;
    let todo = id_of(&created["columns"][0]);
    app.create_task(token, &todo, "A").await;
    let b = id_of(&app.create_task(token, &todo, "B").await);

    app.request(
        "PUT",
        &format!("/api/v1/tasks/{b}/move"),
        Some(json!({ "column_id": todo, "position": 999.999 })),
        Some(token),
    )
    .await;

    let renumbered = app
        .request(
            "POST",
            &format!("/api/v1/columns/{todo}/tasks/renumber"),
            None,
            Some(token),
        )
        .await;
    assert_eq!(renumbered.status, StatusCode::OK);
    let layout: Vec<(&str, f64)> = renumbered
        .data()
        .as_array()
        .unwrap()
        .iter()
        .map(|t| (t["title"].as_str().unwrap(), t["position"].as_f64().unwrap()))
        .collect();
    assert_eq!(layout, vec![("B", 1000.0), ("A", 2000.0)]);
}

#[tokio::test]
async fn test_export_csv() {
    let app = TestApp::new();
    let alice = app.session("a@x.com").await;
    let token = alice.access_token.as_str();
    let created = app.create_project(token, "P").await;
    let board_id = id_of(&created["board"]);
    app.create_task(token, &id_of(&created["columns"][0]), "Write, docs")
        .await;

    let response = app
        .request(
            "GET",
            &format!("/api/v1/boards/{board_id}/tasks/export"),
            None,
            Some(token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.content_type.as_deref().unwrap().starts_with("text/csv"));
    let lines: Vec<&str> = response.text.lines().collect();
    assert_eq!(lines[0], "Title,Description,Priority,Column,Created");
    assert!(lines[1].starts_with("\"Write, docs\",,medium,To Do,"));
}

#[tokio::test]
async fn test_delete_task() {
    let app = TestApp::new();
    let alice = app.session("a@x.com").await;
    let token = alice.access_token.as_str();
    let created = app.create_project(token, "P").await;
    let task_id = id_of(&app.create_task(token, &id_of(&created["columns"][0]), "T").await);

    let deleted = app
        .request("DELETE", &format!("/api/v1/tasks/{task_id}"), None, Some(token))
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let gone = app
        .request("GET", &format!("/api/v1/tasks/{task_id}"), None, Some(token))
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}
