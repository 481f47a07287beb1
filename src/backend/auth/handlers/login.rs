/**
 * Login Handler
 *
 * This module implements POST /api/auth/login.
 *
 * # Security
 *
 * - Unknown emails and wrong passwords get the same 401 response
 * - Password hashes are never returned
 */

use axum::{extract::State, Json};
use bcrypt::verify;

use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::BackendError;
use crate::backend::extract::ValidatedJson;
use crate::backend::server::state::AppState;
use crate::shared::{AuthResponse, LoginRequest};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub async fn login(
    State(app_state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    tracing::info!("Login request for: {}", request.email);

    let user = get_user_by_email(&app_state.pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.email);
            BackendError::unauthorized(INVALID_CREDENTIALS)
        })?;

    if !verify(&request.password, &user.password_hash)? {
        tracing::warn!("Invalid password for user: {}", request.email);
        return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
    }

    let token = create_token(
        &app_state.config.jwt_secret,
        user.id,
        &user.name,
        app_state.config.token_ttl,
    )?;

    Ok(Json(AuthResponse {
        token,
        user: user.profile(),
    }))
}
