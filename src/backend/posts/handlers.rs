/**
 * Post Handlers
 *
 * HTTP handlers for the `/api/posts` routes. Reads are public; every
 * mutation sits behind the auth middleware and takes the acting user from
 * `AuthUser`.
 *
 * # Responses
 *
 * - List: `{posts, total, page, pages}` with populated posts
 * - Single: populated post, or 404 `{"error": "Post not found"}`
 * - Create / update: the stored post (reference ids, not expanded)
 * - Comment: the populated post including the new comment
 */

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::categories::db::category_exists;
use crate::backend::error::BackendError;
use crate::backend::extract::{parse_id, ValidatedJson};
use crate::backend::middleware::AuthUser;
use crate::backend::posts::db::{self, PostChanges, PostDraft};
use crate::shared::{MessageBody, NewComment, NewPost, PopulatedPost, PostPage, PostUpdate, StoredPost};

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_LIMIT: u32 = 10;
const POST_NOT_FOUND: &str = "Post not found";
const INVALID_CATEGORY: &str = "Valid category is required";

/// Query string of `GET /api/posts`
///
/// Kept as raw strings so that a non-numeric or non-positive value falls
/// back to the default instead of failing the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub q: Option<String>,
}

impl ListQuery {
    fn positive(raw: Option<&str>) -> Option<u32> {
        raw.and_then(|v| v.trim().parse::<u32>().ok()).filter(|n| *n >= 1)
    }

    pub fn page(&self) -> u32 {
        Self::positive(self.page.as_deref()).unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> u32 {
        Self::positive(self.limit.as_deref()).unwrap_or(DEFAULT_LIMIT)
    }

    pub fn search(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}

/// Resolve a category reference that already passed format validation,
/// checking that the category exists.
async fn resolve_category(pool: &SqlitePool, raw: &str) -> Result<Uuid, BackendError> {
    let id = Uuid::parse_str(raw.trim())
        .map_err(|_| BackendError::invalid_field("category", INVALID_CATEGORY))?;

    if !category_exists(pool, id).await? {
        tracing::warn!("Post references unknown category {}", id);
        return Err(BackendError::invalid_field("category", INVALID_CATEGORY));
    }

    Ok(id)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// An absent `featuredImage` keeps the stored one; a blank one clears it.
fn image_change(value: Option<String>) -> Option<Option<String>> {
    value.map(|v| non_blank(Some(v)))
}

/// GET /api/posts
pub async fn list_posts(
    State(pool): State<SqlitePool>,
    Query(query): Query<ListQuery>,
) -> Result<Json<PostPage>, BackendError> {
    let page = db::list_posts(&pool, query.search(), query.page(), query.limit()).await?;
    Ok(Json(page))
}

/// GET /api/posts/{id}
pub async fn get_post(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Json<PopulatedPost>, BackendError> {
    let id = parse_id(&id)?;
    let post = db::get_post(&pool, id)
        .await?
        .ok_or_else(|| BackendError::not_found(POST_NOT_FOUND))?;
    Ok(Json(post))
}

/// POST /api/posts
pub async fn create_post(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    ValidatedJson(request): ValidatedJson<NewPost>,
) -> Result<(StatusCode, Json<StoredPost>), BackendError> {
    let category = resolve_category(&pool, &request.category).await?;

    let draft = PostDraft {
        title: request.title,
        content: request.content,
        category,
        featured_image: non_blank(request.featured_image),
    };
    let post = db::create_post(&pool, user.user_id, draft).await?;

    tracing::info!("Post {} created by {}", post.id, user.user_id);

    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<PostUpdate>,
) -> Result<Json<StoredPost>, BackendError> {
    let id = parse_id(&id)?;

    let category = match request.category.as_deref() {
        Some(raw) => Some(resolve_category(&pool, raw).await?),
        None => None,
    };

    let changes = PostChanges {
        title: request.title,
        content: request.content,
        category,
        featured_image: image_change(request.featured_image),
    };
    let post = db::update_post(&pool, id, changes)
        .await?
        .ok_or_else(|| BackendError::not_found(POST_NOT_FOUND))?;

    tracing::info!("Post {} updated by {}", post.id, user.user_id);

    Ok(Json(post))
}

/// DELETE /api/posts/{id}
///
/// Any authenticated user may delete any post.
pub async fn delete_post(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, BackendError> {
    let id = parse_id(&id)?;

    if !db::delete_post(&pool, id).await? {
        return Err(BackendError::not_found(POST_NOT_FOUND));
    }

    tracing::info!("Post {} deleted by {}", id, user.user_id);

    Ok(Json(MessageBody {
        message: "Post deleted".to_string(),
    }))
}

/// POST /api/posts/{id}/comments
pub async fn add_comment(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<NewComment>,
) -> Result<(StatusCode, Json<PopulatedPost>), BackendError> {
    let id = parse_id(&id)?;

    let post = db::add_comment(&pool, id, user.user_id, &request.content)
        .await?
        .ok_or_else(|| BackendError::not_found(POST_NOT_FOUND))?;

    Ok((StatusCode::CREATED, Json(post)))
}
