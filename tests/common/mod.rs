//! Common test utilities and helpers
//!
//! - A real server on an ephemeral port with in-memory SQLite
//! - Account and category fixtures created through the API
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;

use std::net::SocketAddr;
use std::time::Duration;

use serde_json::{json, Value};
use tempfile::TempDir;
use uuid::Uuid;

use quillpost::backend::server::{config::ServerConfig, init::create_app};

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_PASSWORD: &str = "password123";

/// A running server. The upload directory lives as long as this value.
pub struct TestServer {
    pub addr: SocketAddr,
    pub http: reqwest::Client,
    pub upload_dir: TempDir,
}

/// A registered account and its bearer token
pub struct TestUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub token: String,
}

pub fn test_config(upload_dir: &TempDir) -> ServerConfig {
    ServerConfig {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        token_ttl: Duration::from_secs(60 * 60),
        port: 0,
        upload_dir: upload_dir.path().to_path_buf(),
        max_upload_bytes: 1024 * 1024,
        bcrypt_cost: 4,
    }
}

impl TestServer {
    pub async fn start() -> Self {
        let upload_dir = tempfile::tempdir().expect("Failed to create upload dir");
        let app = create_app(test_config(&upload_dir))
            .await
            .expect("Failed to build app");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("No local address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            addr,
            http: reqwest::Client::new(),
            upload_dir,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn register(&self, name: &str) -> TestUser {
        let email = format!("{}_{}@example.com", name.to_lowercase(), Uuid::new_v4().simple());
        let response = self
            .http
            .post(self.url("/api/auth/register"))
            .json(&json!({ "name": name, "email": email, "password": TEST_PASSWORD }))
            .send()
            .await
            .expect("Register request failed");
        assert_eq!(response.status(), 201, "Register should succeed");
        let body: Value = response.json().await.expect("Register body");

        TestUser {
            id: body["user"]["id"].as_str().and_then(|s| Uuid::parse_str(s).ok()).expect("user id"),
            name: name.to_string(),
            email,
            token: body["token"].as_str().expect("token").to_string(),
        }
    }

    pub async fn create_category(&self, name: &str) -> Uuid {
        let response = self
            .http
            .post(self.url("/api/categories"))
            .json(&json!({ "name": name }))
            .send()
            .await
            .expect("Category request failed");
        assert_eq!(response.status(), 201, "Category should be created");
        let body: Value = response.json().await.expect("Category body");
        body["id"].as_str().and_then(|s| Uuid::parse_str(s).ok()).expect("category id")
    }

    /// Create a post and return its id
    pub async fn create_post(&self, user: &TestUser, category: Uuid, title: &str) -> Uuid {
        let response = self
            .http
            .post(self.url("/api/posts"))
            .bearer_auth(&user.token)
            .json(&json!({
                "title": title,
                "content": format!("Content of {}", title),
                "category": category,
            }))
            .send()
            .await
            .expect("Create post request failed");
        assert_eq!(response.status(), 201, "Post should be created");
        let body: Value = response.json().await.expect("Post body");
        body["id"].as_str().and_then(|s| Uuid::parse_str(s).ok()).expect("post id")
    }

    pub async fn get_json(&self, path: &str) -> (u16, Value) {
        let response = self.http.get(self.url(path)).send().await.expect("GET failed");
        let status = response.status().as_u16();
        (status, response.json().await.unwrap_or(Value::Null))
    }
}
