//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use taskboard_api::{AppState, StoreSet, build_app};
use taskboard_core::config::{
    AppConfig, AuthConfig, DatabaseConfig, LoggingConfig, PasswordHashConfig, ServerConfig,
};
use taskboard_database::memory::MemoryStores;

pub const PASSWORD: &str = "password123";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing stores, for direct inspection
    pub stores: MemoryStores,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    /// Parsed JSON body, `Null` when empty or not JSON
    pub body: Value,
    /// Raw body text
    pub text: String,
    pub content_type: Option<String>,
}

impl TestResponse {
    /// The `data` member of a success envelope.
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    /// The `error.code` member of an error envelope.
    pub fn error_code(&self) -> &str {
        self.body["error"]["code"].as_str().unwrap_or_default()
    }
}

/// A registered and logged-in user.
pub struct Session {
    pub user_id: String,
    pub access_token: String,
    pub refresh_token: String,
}

pub fn test_config() -> AppConfig {
    let mut auth = AuthConfig::with_secret("integration-test-secret");
    auth.password_hash = PasswordHashConfig::minimal();

    AppConfig {
        server: ServerConfig::default(),
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            min_connections: 0,
            connect_timeout_seconds: 1,
            run_migrations: false,
        },
        auth,
        logging: LoggingConfig::default(),
    }
}

impl TestApp {
    pub fn new() -> Self {
        let stores = MemoryStores::new();
        let state = AppState::new(test_config(), StoreSet::memory(&stores), None)
            .expect("Failed to build state");
        Self {
            router: build_app(state),
            stores,
        }
    }

    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = match body {
            Some(body) => req
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string())),
            None => req.body(Body::empty()),
        }
        .expect("Failed to build request");

        self.send(req).await
    }

    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            text,
            content_type,
        }
    }

    pub async fn register(&self, email: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/v1/auth/register",
            Some(json!({
                "email": email,
                "display_name": "Test User",
                "password": PASSWORD,
            })),
            None,
        )
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({ "email": email, "password": password })),
            None,
        )
        .await
    }

    /// Registers `email` and logs in.
    pub async fn session(&self, email: &str) -> Session {
        let registered = self.register(email).await;
        assert_eq!(registered.status, StatusCode::CREATED, "{}", registered.text);

        let login = self.login(email, PASSWORD).await;
        assert_eq!(login.status, StatusCode::OK, "{}", login.text);

        Session {
            user_id: login.data()["user"]["id"].as_str().unwrap().to_string(),
            access_token: login.data()["access_token"].as_str().unwrap().to_string(),
            refresh_token: login.data()["refresh_token"].as_str().unwrap().to_string(),
        }
    }

    /// Creates a project and returns the creation payload.
    pub async fn create_project(&self, token: &str, name: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/api/v1/projects",
                Some(json!({ "name": name })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.text);
        response.data().clone()
    }

    pub async fn create_task(&self, token: &str, column_id: &str, title: &str) -> Value {
        let response = self
            .request(
                "POST",
                &format!("/api/v1/columns/{column_id}/tasks"),
                Some(json!({ "title": title })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.text);
        response.data().clone()
    }
}

/// `value[key]` as an owned string.
pub fn id_of(value: &Value) -> String {
    value["id"].as_str().expect("missing id").to_string()
}
