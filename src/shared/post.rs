//! Post and comment wire types.
//!
//! A post references its category and author by id. Responses that expand
//! those references ("populated" posts) use the same [`Post`] shape with
//! summary structs in place of the ids, so the two forms cannot drift apart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::shared::category::CategorySummary;
use crate::shared::user::AuthorSummary;
use crate::shared::validation::{content_required, title_required, valid_category};

/// A blog post, generic over how its references are represented
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post<C, A> {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: C,
    pub author: A,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Post as stored: references are bare ids
pub type StoredPost = Post<Uuid, Uuid>;

/// Post with category and author expanded. A reference whose target no
/// longer exists expands to `None`.
pub type PopulatedPost = Post<Option<CategorySummary>, Option<AuthorSummary>>;

/// Append-only comment on a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub user: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// One page of the post listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostPage {
    pub posts: Vec<PopulatedPost>,
    pub total: u64,
    pub page: u32,
    pub pages: u32,
}

impl PostPage {
    /// Number of pages needed for `total` items at `limit` per page.
    pub fn page_count(total: u64, limit: u32) -> u32 {
        if limit == 0 {
            return 0;
        }
        total.div_ceil(u64::from(limit)).try_into().unwrap_or(u32::MAX)
    }
}

/// Body of `POST /api/posts`
///
/// Missing fields deserialize as empty strings so they are reported as
/// field errors rather than as a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct NewPost {
    #[validate(
        custom(function = "title_required"),
        length(max = 100, message = "Title cannot exceed 100 characters")
    )]
    pub title: String,
    #[validate(custom(function = "content_required"))]
    pub content: String,
    #[validate(custom(function = "valid_category"))]
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
}

/// Body of `PUT /api/posts/{id}`; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct PostUpdate {
    #[validate(
        custom(function = "title_required"),
        length(max = 100, message = "Title cannot exceed 100 characters")
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[validate(custom(function = "content_required"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[validate(custom(function = "valid_category"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
}

impl PostUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.category.is_none()
            && self.featured_image.is_none()
    }
}

/// Body of `POST /api/posts/{id}/comments`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NewComment {
    #[validate(custom(function = "content_required"))]
    pub content: String,
}

/// Response of `POST /api/posts/upload-image`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUpload {
    pub image_url: String,
}
