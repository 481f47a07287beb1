//! Category HTTP handlers.

use axum::{extract::State, http::StatusCode, Json};
use sqlx::SqlitePool;

use crate::backend::categories::db;
use crate::backend::error::BackendError;
use crate::backend::extract::ValidatedJson;
use crate::shared::{Category, NewCategory};

/// GET /api/categories
pub async fn list_categories(State(pool): State<SqlitePool>) -> Result<Json<Vec<Category>>, BackendError> {
    Ok(Json(db::list_categories(&pool).await?))
}

/// POST /api/categories
///
/// Duplicate names are not distinguished from other storage failures.
pub async fn create_category(
    State(pool): State<SqlitePool>,
    ValidatedJson(request): ValidatedJson<NewCategory>,
) -> Result<(StatusCode, Json<Category>), BackendError> {
    let (name, description) = request.normalized();
    let category = db::create_category(&pool, &name, description.as_deref()).await?;

    tracing::info!("Category created: {}", category.name);

    Ok((StatusCode::CREATED, Json(category)))
}
