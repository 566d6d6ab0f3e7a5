//! Integration tests for projects, boards and columns.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, id_of};

#[tokio::test]
async fn test_project_creation_bootstraps_board() {
    let app = TestApp::new();
    let alice = app.session("a@x.com").await;

    let created = app.create_project(&alice.access_token, "Launch").await;

    assert_eq!(created["project"]["owner_id"], alice.user_id.as_str());
    assert_eq!(created["board"]["name"], "Main Board");
    let columns: Vec<(&str, f64)> = created["columns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| (c["name"].as_str().unwrap(), c["position"].as_f64().unwrap()))
        .collect();
    assert_eq!(
        columns,
        vec![("To Do", 1000.0), ("In Progress", 2000.0), ("Done", 3000.0)]
    );

    let board_id = id_of(&created["board"]);
    let listed = app
        .request(
            "GET",
            &format!("/api/v1/boards/{board_id}/columns"),
            None,
            Some(&alice.access_token),
        )
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.data().as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_projects_are_private() {
    let app = TestApp::new();
    let alice = app.session("a@x.com").await;
    let bob = app.session("b@x.com").await;
    let created = app.create_project(&alice.access_token, "Secret").await;
    let project_id = id_of(&created["project"]);
    let board_id = id_of(&created["board"]);

    let listed = app
        .request("GET", "/api/v1/projects", None, Some(&bob.access_token))
        .await;
    assert_eq!(listed.data().as_array().unwrap().len(), 0);

    for (method, path) in [
        ("GET", format!("/api/v1/projects/{project_id}")),
        ("DELETE", format!("/api/v1/projects/{project_id}")),
        ("GET", format!("/api/v1/boards/{board_id}")),
        ("GET", format!("/api/v1/boards/{board_id}/columns")),
    ] {
        let response = app
            .request(method, &path, None, Some(&bob.access_token))
            .await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "{method} {path}");
        assert_eq!(response.error_code(), "FORBIDDEN");
    }
}

#[tokio::test]
async fn test_unknown_and_malformed_ids() {
    let app = TestApp::new();
    let alice = app.session("a@x.com").await;

    let unknown = app
        .request(
            "GET",
            "/api/v1/boards/00000000-0000-0000-0000-000000000000",
            None,
            Some(&alice.access_token),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);

    let malformed = app
        .request(
            "GET",
            "/api/v1/boards/not-a-uuid",
            None,
            Some(&alice.access_token),
        )
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
    assert_eq!(malformed.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_column_append_reposition_and_renumber() {
    let app = TestApp::new();
    let alice = app.session("a@x.com").await;
    let token = alice.access_token.as_str();
    let created = app.create_project(token, "P").await;
    let board_id = id_of(&created["board"]);
    let done_id = id_of(&created["columns"][2]);

    let appended = app
        .request(
            "POST",
            &format!("/api/v1/boards/{board_id}/columns"),
            Some(json!({ "name": "Review" })),
            Some(token),
        )
        .await;
    assert_eq!(appended.status, StatusCode::CREATED);
    assert_eq!(appended.data()["position"], 4000.0);

    let moved = app
        .request(
            "PATCH",
            &format!("/api/v1/columns/{done_id}"),
            Some(json!({ "position": 500.25 })),
            Some(token),
        )
        .await;
    assert_eq!(moved.status, StatusCode::OK);
    assert_eq!(moved.data()["position"], 500.25);

    let renumbered = app
        .request(
            "POST",
            &format!("/api/v1/boards/{board_id}/columns/renumber"),
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
        .map(|c| (c["name"].as_str().unwrap(), c["position"].as_f64().unwrap()))
        .collect();
    assert_eq!(
        layout,
        vec![
            ("Done", 1000.0),
            ("To Do", 2000.0),
            ("In Progress", 3000.0),
            ("Review", 4000.0),
        ]
    );
}

#[tokio::test]
async fn test_board_crud() {
    let app = TestApp::new();
    let alice = app.session("a@x.com").await;
    let token = alice.access_token.as_str();
    let created = app.create_project(token, "P").await;
    let project_id = id_of(&created["project"]);

    let board = app
        .request(
            "POST",
            &format!("/api/v1/projects/{project_id}/boards"),
            Some(json!({ "name": "Sprint 2" })),
            Some(token),
        )
        .await;
    assert_eq!(board.status, StatusCode::CREATED);
    let board_id = id_of(board.data());

    let renamed = app
        .request(
            "PATCH",
            &format!("/api/v1/boards/{board_id}"),
            Some(json!({ "name": "Sprint 3" })),
            Some(token),
        )
        .await;
    assert_eq!(renamed.data()["name"], "Sprint 3");

    let boards = app
        .request(
            "GET",
            &format!("/api/v1/projects/{project_id}/boards"),
            None,
            Some(token),
        )
        .await;
    assert_eq!(boards.data().as_array().unwrap().len(), 2);

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/v1/boards/{board_id}"),
            None,
            Some(token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let gone = app
        .request(
            "GET",
            &format!("/api/v1/boards/{board_id}"),
            None,
            Some(token),
        )
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_project_update_validation() {
    let app = TestApp::new();
    let alice = app.session("a@x.com").await;
    let token = alice.access_token.as_str();
    let project_id = id_of(&app.create_project(token, "P").await["project"]);

    let blank = app
        .request(
            "PATCH",
            &format!("/api/v1/projects/{project_id}"),
            Some(json!({ "name": "" })),
            Some(token),
        )
        .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);

    let updated = app
        .request(
            "PATCH",
            &format!("/api/v1/projects/{project_id}"),
            Some(json!({ "description": "Q3 launch" })),
            Some(token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.data()["name"], "P");
    assert_eq!(updated.data()["description"], "Q3 launch");
}
