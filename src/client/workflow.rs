/**
 * Client Workflows
 *
 * Multi-step operations that tie the API client to the local store:
 *
 * - `refresh`: fetch the current listing page and replace the store
 * - `create_post`: optimistic add, POST, confirm, refetch
 * - `delete_post`: optimistic removal, DELETE, refetch; restore on failure
 * - `login` / `logout`: token handling plus session persistence
 *
 * A refetch that fails after a successful mutation is logged and does not
 * turn the mutation into an error.
 */

use uuid::Uuid;
use validator::Validate;

use crate::client::api::{ApiClient, ClientError};
use crate::client::listing::ListingState;
use crate::client::session::{Session, SessionStore};
use crate::client::store::PostsStore;
use crate::shared::error::collect_field_errors;
use crate::shared::{
    LoginRequest, NewComment, NewPost, PopulatedPost, RegisterRequest, StoredPost, UserProfile,
};

/// Fetch the page described by `listing` and show it.
pub async fn refresh(
    api: &ApiClient,
    store: &mut PostsStore,
    listing: &mut ListingState,
) -> Result<(), ClientError> {
    let mut page = api.list_posts(&listing.to_query()).await?;
    if listing.apply(&page) {
        tracing::debug!("Page out of range, refetching page {}", listing.page());
        page = api.list_posts(&listing.to_query()).await?;
        listing.apply(&page);
    }
    store.replace_page(&page);
    Ok(())
}

async fn refresh_after_mutation(api: &ApiClient, store: &mut PostsStore, listing: &mut ListingState) {
    if let Err(e) = refresh(api, store, listing).await {
        tracing::warn!("Refetch after mutation failed: {}", e);
    }
}

/// Create a post, showing it immediately as pending.
///
/// On failure the pending entry stays in the list and the error is
/// returned; the next refresh drops it.
pub async fn create_post(
    api: &ApiClient,
    store: &mut PostsStore,
    listing: &mut ListingState,
    draft: NewPost,
) -> Result<StoredPost, ClientError> {
    draft
        .validate()
        .map_err(|errors| ClientError::Validation(collect_field_errors(&errors)))?;

    let temp = store.add_optimistic(&draft);
    let created = api.create_post(&draft).await?;
    store.confirm_add(temp, &created);
    tracing::info!("Created post {}", created.id);

    refresh_after_mutation(api, store, listing).await;
    Ok(created)
}

/// Delete a post, hiding it immediately. If the server refuses, the post
/// reappears exactly where it was.
pub async fn delete_post(
    api: &ApiClient,
    store: &mut PostsStore,
    listing: &mut ListingState,
    id: Uuid,
) -> Result<(), ClientError> {
    let removal = store.remove_optimistic(id);

    match api.delete_post(id).await {
        Ok(_) => {
            tracing::info!("Deleted post {}", id);
            refresh_after_mutation(api, store, listing).await;
            Ok(())
        }
        Err(e) => {
            tracing::warn!("Delete of post {} failed: {}", id, e);
            if let Some(removal) = removal {
                removal.restore(store);
            }
            Err(e)
        }
    }
}

pub async fn add_comment(
    api: &ApiClient,
    post_id: Uuid,
    comment: NewComment,
) -> Result<PopulatedPost, ClientError> {
    comment
        .validate()
        .map_err(|errors| ClientError::Validation(collect_field_errors(&errors)))?;
    api.add_comment(post_id, &comment).await
}

/// Sign in, keep the token on the client and persist the session if a
/// store is given. A failure to persist is logged only.
pub async fn login(
    api: &mut ApiClient,
    sessions: Option<&SessionStore>,
    request: &LoginRequest,
) -> Result<UserProfile, ClientError> {
    let auth = api.login(request).await?;
    api.set_token(Some(auth.token.clone()));

    if let Some(sessions) = sessions {
        let session = Session {
            token: auth.token,
            user: auth.user.clone(),
        };
        if let Err(e) = sessions.save(&session) {
            tracing::warn!("Could not save session: {}", e);
        }
    }

    Ok(auth.user)
}

/// Create an account. The client stays signed out; the returned profile
/// is for confirmation only.
pub async fn register(api: &ApiClient, request: &RegisterRequest) -> Result<UserProfile, ClientError> {
    let auth = api.register(request).await?;
    Ok(auth.user)
}

/// Restore a saved session, dropping it if the server no longer accepts
/// the token.
pub async fn resume(api: &mut ApiClient, sessions: &SessionStore) -> Option<UserProfile> {
    let session = match sessions.load() {
        Ok(Some(session)) => session,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!("Ignoring unreadable session: {}", e);
            return None;
        }
    };

    api.set_token(Some(session.token));
    match api.me().await {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::info!("Saved session rejected: {}", e);
            logout(api, Some(sessions));
            None
        }
    }
}

pub fn logout(api: &mut ApiClient, sessions: Option<&SessionStore>) {
    api.clear_token();
    if let Some(sessions) = sessions {
        if let Err(e) = sessions.clear() {
            tracing::warn!("Could not clear session: {}", e);
        }
    }
}
