//! Posts API integration tests
//!
//! Runs against a real server bound to an ephemeral port.

#![cfg(feature = "server")]

mod common;

use common::TestServer;
use serde_json::{json, Value};
use uuid::Uuid;

#[tokio::test]
async fn test_create_then_get_returns_same_fields() {
    let server = TestServer::start().await;
    let user = server.register("Ada").await;
    let category = server.create_category("Rust").await;

    let response = server
        .http
        .post(server.url("/api/posts"))
        .bearer_auth(&user.token)
        .json(&json!({
            "title": "Ownership explained",
            "content": "Borrowing is not stealing.",
            "category": category,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let created: Value = response.json().await.unwrap();
    assert_eq!(created["author"], json!(user.id));
    assert_eq!(created["category"], json!(category));

    let (status, post) = server
        .get_json(&format!("/api/posts/{}", created["id"].as_str().unwrap()))
        .await;
    assert_eq!(status, 200);
    assert_eq!(post["title"], "Ownership explained");
    assert_eq!(post["content"], "Borrowing is not stealing.");
    assert_eq!(post["category"]["id"], json!(category));
    assert_eq!(post["category"]["name"], "Rust");
    assert_eq!(post["author"]["id"], json!(user.id));
    assert_eq!(post["author"]["name"], "Ada");
    assert_eq!(post["comments"], json!([]));
}

#[tokio::test]
async fn test_create_requires_token() {
    let server = TestServer::start().await;
    let category = server.create_category("Rust").await;

    let response = server
        .http
        .post(server.url("/api/posts"))
        .json(&json!({ "title": "t", "content": "c", "category": category }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 401);
    let body: Value = response.json().await.unwrap();
    assert_error_message!(body, "No token, authorization denied");
}

#[tokio::test]
async fn test_create_with_bad_token() {
    let server = TestServer::start().await;

    let response = server
        .http
        .post(server.url("/api/posts"))
        .bearer_auth("not-a-token")
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 401);
    let body: Value = response.json().await.unwrap();
    assert_error_message!(body, "Token is not valid");
}

#[tokio::test]
async fn test_create_reports_field_errors() {
    let server = TestServer::start().await;
    let user = server.register("Ada").await;

    let response = server
        .http
        .post(server.url("/api/posts"))
        .bearer_auth(&user.token)
        .json(&json!({ "title": "   ", "category": "nope" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "errors": [
            { "field": "category", "message": "Valid category is required" },
            { "field": "content", "message": "Content is required" },
            { "field": "title", "message": "Title is required" },
        ]})
    );
}

#[tokio::test]
async fn test_create_with_unknown_category() {
    let server = TestServer::start().await;
    let user = server.register("Ada").await;

    let response = server
        .http
        .post(server.url("/api/posts"))
        .bearer_auth(&user.token)
        .json(&json!({ "title": "t", "content": "c", "category": Uuid::new_v4() }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["errors"][0]["field"], "category");
}

#[tokio::test]
async fn test_title_length_limit() {
    let server = TestServer::start().await;
    let user = server.register("Ada").await;
    let category = server.create_category("Rust").await;

    let response = server
        .http
        .post(server.url("/api/posts"))
        .bearer_auth(&user.token)
        .json(&json!({ "title": "x".repeat(101), "content": "c", "category": category }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["errors"][0]["message"], "Title cannot exceed 100 characters");
}

#[tokio::test]
async fn test_search_and_pagination() {
    let server = TestServer::start().await;
    let user = server.register("Ada").await;
    let category = server.create_category("Rust").await;

    for i in 0..5 {
        server.create_post(&user, category, &format!("Learning FOO part {}", i)).await;
    }
    server.create_post(&user, category, "Unrelated").await;
    server.create_post(&user, category, "food trucks").await;

    let (status, page) = server.get_json("/api/posts?q=foo&limit=2&page=1").await;
    assert_eq!(status, 200);
    assert_eq!(page["total"], 6);
    assert_eq!(page["pages"], 3);
    assert_eq!(page["page"], 1);

    let mut seen = Vec::new();
    for n in 1..=3 {
        let (_, page) = server.get_json(&format!("/api/posts?q=foo&limit=2&page={}", n)).await;
        let posts = page["posts"].as_array().unwrap();
        assert!(posts.len() <= 2);
        for post in posts {
            let title = post["title"].as_str().unwrap().to_string();
            assert_contains!(title.to_lowercase(), "foo");
            seen.push(title);
        }
    }
    assert_eq!(seen.len(), 6);
    // Newest first
    assert_eq!(seen[0], "food trucks");
}

#[tokio::test]
async fn test_list_defaults_for_bad_params() {
    let server = TestServer::start().await;
    let user = server.register("Ada").await;
    let category = server.create_category("Rust").await;
    for i in 0..12 {
        server.create_post(&user, category, &format!("Post {}", i)).await;
    }

    let (status, page) = server.get_json("/api/posts?page=zero&limit=-4").await;
    assert_eq!(status, 200);
    assert_eq!(page["page"], 1);
    assert_eq!(page["pages"], 2);
    assert_eq!(page["posts"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_list_with_maximal_page_and_limit() {
    let server = TestServer::start().await;
    let user = server.register("Ada").await;
    let category = server.create_category("Rust").await;
    server.create_post(&user, category, "Lonely").await;

    let (status, page) = server
        .get_json("/api/posts?page=4294967295&limit=4294967295")
        .await;
    assert_eq!(status, 200);
    assert_eq!(page["posts"], json!([]));
    assert_eq!(page["total"], 1);
    assert_eq!(page["page"], 4294967295u32);
}

#[tokio::test]
async fn test_search_matches_non_ascii_case() {
    let server = TestServer::start().await;
    let user = server.register("Ada").await;
    let category = server.create_category("Rust").await;
    server.create_post(&user, category, "ÉCLAIR recipes").await;
    server.create_post(&user, category, "Eclipse notes").await;

    let (status, page) = server.get_json("/api/posts?q=%C3%A9clair").await;
    assert_eq!(status, 200);
    assert_eq!(page["total"], 1);
    assert_eq!(page["posts"][0]["title"], "ÉCLAIR recipes");
}

#[tokio::test]
async fn test_get_missing_and_malformed_ids() {
    let server = TestServer::start().await;

    let (status, body) = server.get_json(&format!("/api/posts/{}", Uuid::new_v4())).await;
    assert_eq!(status, 404);
    assert_error_message!(body, "Post not found");

    let (status, body) = server.get_json("/api/posts/not-an-id").await;
    assert_eq!(status, 400);
    assert_eq!(body["errors"][0]["field"], "id");
}

#[tokio::test]
async fn test_delete_missing_post_keeps_count() {
    let server = TestServer::start().await;
    let user = server.register("Ada").await;
    let category = server.create_category("Rust").await;
    server.create_post(&user, category, "Keep me").await;

    let response = server
        .http
        .delete(server.url(&format!("/api/posts/{}", Uuid::new_v4())))
        .bearer_auth(&user.token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let (_, page) = server.get_json("/api/posts").await;
    assert_eq!(page["total"], 1);
}

#[tokio::test]
async fn test_delete_post() {
    let server = TestServer::start().await;
    let user = server.register("Ada").await;
    let category = server.create_category("Rust").await;
    let id = server.create_post(&user, category, "Short lived").await;

    let response = server
        .http
        .delete(server.url(&format!("/api/posts/{}", id)))
        .bearer_auth(&user.token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Post deleted" }));

    let (status, _) = server.get_json(&format!("/api/posts/{}", id)).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_any_user_may_delete() {
    let server = TestServer::start().await;
    let author = server.register("Ada").await;
    let other = server.register("Grace").await;
    let category = server.create_category("Rust").await;
    let id = server.create_post(&author, category, "Shared").await;

    let response = server
        .http
        .delete(server.url(&format!("/api/posts/{}", id)))
        .bearer_auth(&other.token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_update_post() {
    let server = TestServer::start().await;
    let user = server.register("Ada").await;
    let rust = server.create_category("Rust").await;
    let go = server.create_category("Go").await;
    let id = server.create_post(&user, rust, "Before").await;

    let response = server
        .http
        .put(server.url(&format!("/api/posts/{}", id)))
        .bearer_auth(&user.token)
        .json(&json!({ "title": "After", "category": go }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["title"], "After");
    assert_eq!(updated["content"], "Content of Before");
    assert_eq!(updated["category"], json!(go));

    let response = server
        .http
        .put(server.url(&format!("/api/posts/{}", Uuid::new_v4())))
        .bearer_auth(&user.token)
        .json(&json!({ "title": "Nobody" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_update_blank_image_clears_it() {
    let server = TestServer::start().await;
    let user = server.register("Ada").await;
    let category = server.create_category("Rust").await;
    let id = server.create_post(&user, category, "Pictured").await;

    let put = |body: Value| {
        server
            .http
            .put(server.url(&format!("/api/posts/{}", id)))
            .bearer_auth(&user.token)
            .json(&body)
            .send()
    };

    let set: Value = put(json!({ "featuredImage": "/uploads/1-cat.png" }))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(set["featuredImage"], "/uploads/1-cat.png");

    let kept: Value = put(json!({ "title": "Renamed" })).await.unwrap().json().await.unwrap();
    assert_eq!(kept["featuredImage"], "/uploads/1-cat.png");

    let response = put(json!({ "featuredImage": "" })).await.unwrap();
    assert_eq!(response.status(), 200);
    let cleared: Value = response.json().await.unwrap();
    assert_eq!(cleared["featuredImage"], Value::Null);
}

#[tokio::test]
async fn test_update_rejects_blank_title() {
    let server = TestServer::start().await;
    let user = server.register("Ada").await;
    let category = server.create_category("Rust").await;
    let id = server.create_post(&user, category, "Before").await;

    let response = server
        .http
        .put(server.url(&format!("/api/posts/{}", id)))
        .bearer_auth(&user.token)
        .json(&json!({ "title": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_comment_appends_exactly_one() {
    let server = TestServer::start().await;
    let user = server.register("Ada").await;
    let category = server.create_category("Rust").await;
    let id = server.create_post(&user, category, "Discuss").await;

    for expected in 1..=2 {
        let content = format!("Comment {}", expected);
        let response = server
            .http
            .post(server.url(&format!("/api/posts/{}/comments", id)))
            .bearer_auth(&user.token)
            .json(&json!({ "content": content }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 201);
        let post: Value = response.json().await.unwrap();
        let comments = post["comments"].as_array().unwrap();
        assert_eq!(comments.len(), expected);
        assert_eq!(comments[expected - 1]["content"], json!(content));
        assert_eq!(comments[expected - 1]["user"], json!(user.id));
    }
}

#[tokio::test]
async fn test_comment_validation_and_missing_post() {
    let server = TestServer::start().await;
    let user = server.register("Ada").await;
    let category = server.create_category("Rust").await;
    let id = server.create_post(&user, category, "Discuss").await;

    let response = server
        .http
        .post(server.url(&format!("/api/posts/{}/comments", id)))
        .bearer_auth(&user.token)
        .json(&json!({ "content": "  " }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let response = server
        .http
        .post(server.url(&format!("/api/posts/{}/comments", Uuid::new_v4())))
        .bearer_auth(&user.token)
        .json(&json!({ "content": "Hello" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_malformed_json_body() {
    let server = TestServer::start().await;
    let user = server.register("Ada").await;

    let response = server
        .http
        .post(server.url("/api/posts"))
        .bearer_auth(&user.token)
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_unknown_route() {
    let server = TestServer::start().await;
    let (status, body) = server.get_json("/api/nothing-here").await;
    assert_eq!(status, 404);
    assert_error_message!(body, "Route not found");
}
