/**
 * API Route Configuration
 *
 * This module registers every `/api` endpoint. Routes are split into a
 * public router and a protected router; the protected one carries the auth
 * middleware as a route layer, so it only runs for requests that matched a
 * protected route. The two are then merged, which lets `GET /api/posts/{id}`
 * stay public while `PUT` and `DELETE` on the same path require a token.
 */

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::backend::auth::{get_me, login, register};
use crate::backend::categories::{create_category, list_categories};
use crate::backend::middleware::auth_middleware;
use crate::backend::posts::{
    add_comment, create_post, delete_post, get_post, list_posts, update_post, upload_image,
};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - State handed to the auth middleware
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/api/posts", get(list_posts))
        .route("/api/posts/{id}", get(get_post))
        .route("/api/categories", get(list_categories).post(create_category))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login));

    let protected = Router::new()
        .route("/api/posts", post(create_post))
        .route("/api/posts/{id}", put(update_post).delete(delete_post))
        .route("/api/posts/{id}/comments", post(add_comment))
        .route(
            "/api/posts/upload-image",
            post(upload_image).layer(DefaultBodyLimit::max(app_state.config.max_upload_bytes)),
        )
        .route("/api/auth/me", get(get_me))
        .route_layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware));

    router.merge(public).merge(protected)
}
