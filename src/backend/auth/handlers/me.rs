/**
 * Get Current User Handler
 *
 * GET /api/auth/me, behind the auth middleware.
 */

use axum::{extract::State, Json};

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::UserProfile;

pub async fn get_me(
    State(app_state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<UserProfile>, BackendError> {
    let user = get_user_by_id(&app_state.pool, auth.user_id)
        .await?
        .ok_or_else(|| BackendError::not_found("User not found"))?;

    Ok(Json(user.profile()))
}
