//! Categories API integration tests

#![cfg(feature = "server")]

mod common;

use common::TestServer;
use serde_json::{json, Value};

#[tokio::test]
async fn test_categories_sorted_by_name() {
    let server = TestServer::start().await;
    for name in ["Zig", "Go", "Rust", "C"] {
        server.create_category(name).await;
    }

    let (status, body) = server.get_json("/api/categories").await;
    assert_eq!(status, 200);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["C", "Go", "Rust", "Zig"]);
}

#[tokio::test]
async fn test_create_category_with_description() {
    let server = TestServer::start().await;

    let response = server
        .http
        .post(server.url("/api/categories"))
        .json(&json!({ "name": "  Rust  ", "description": "Systems programming" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["name"], "Rust");
    assert_eq!(body["description"], "Systems programming");
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn test_category_validation() {
    let server = TestServer::start().await;

    let response = server
        .http
        .post(server.url("/api/categories"))
        .json(&json!({ "name": "x".repeat(51), "description": "d".repeat(201) }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "errors": [
            { "field": "description", "message": "Description cannot be more than 200 characters" },
            { "field": "name", "message": "Category name cannot be more than 50 characters" },
        ]})
    );
}

#[tokio::test]
async fn test_duplicate_category_is_server_error() {
    let server = TestServer::start().await;
    server.create_category("Rust").await;

    let response = server
        .http
        .post(server.url("/api/categories"))
        .json(&json!({ "name": "Rust" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_error_message!(body, "Server error");
}
