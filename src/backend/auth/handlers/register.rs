/**
 * Register Handler
 *
 * This module implements the account creation handler for
 * POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate name, email and password (via `ValidatedJson`)
 * 2. Reject an email that is already registered (409)
 * 3. Hash the password with bcrypt
 * 4. Create the user and sign a token
 */

use axum::{extract::State, http::StatusCode, Json};
use bcrypt::hash;

use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::{create_user, get_user_by_email};
use crate::backend::error::BackendError;
use crate::backend::extract::ValidatedJson;
use crate::backend::server::state::AppState;
use crate::shared::{AuthResponse, RegisterRequest};

pub async fn register(
    State(app_state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    tracing::info!("Register request for email: {}", request.email);

    if get_user_by_email(&app_state.pool, &request.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(BackendError::conflict("User already exists"));
    }

    let password_hash = hash(&request.password, app_state.config.bcrypt_cost)?;

    // A concurrent registration can still win the race to the UNIQUE index
    let user = create_user(&app_state.pool, &request.name, &request.email, &password_hash)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db) if db.is_unique_violation() => BackendError::conflict("User already exists"),
            _ => BackendError::from(e),
        })?;

    let token = create_token(
        &app_state.config.jwt_secret,
        user.id,
        &user.name,
        app_state.config.token_ttl,
    )?;

    tracing::info!("User created successfully: {} ({})", user.name, user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.profile(),
        }),
    ))
}
