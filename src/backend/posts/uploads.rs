//! Image upload handler.
//!
//! Stored files are never cleaned up, but a write that fails part way
//! removes its partial file. The stored name is
//! `<unix millis>-<original name>`, opened with `create_new` so an exact
//! collision fails the request instead of overwriting an earlier file.

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::Utc;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::config::ServerConfig;
use crate::shared::ImageUpload;

/// Multipart field carrying the file
pub const IMAGE_FIELD: &str = "image";

/// Reduce a client-supplied file name to a safe final path component.
fn sanitize_file_name(original: &str) -> String {
    let base = original.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.trim_matches('.').is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

pub fn stored_file_name(millis: i64, original: &str) -> String {
    format!("{}-{}", millis, sanitize_file_name(original))
}

/// Write `data` to the freshly created file at `path`, deleting it on failure.
async fn write_or_remove<W>(file: &mut W, path: &Path, data: &[u8]) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let written = match file.write_all(data).await {
        Ok(()) => file.flush().await,
        Err(err) => Err(err),
    };

    if let Err(err) = written {
        if let Err(remove_err) = tokio::fs::remove_file(path).await {
            tracing::warn!("Failed to remove partial upload {}: {}", path.display(), remove_err);
        }
        return Err(err);
    }
    Ok(())
}

/// POST /api/posts/upload-image
pub async fn upload_image(
    State(config): State<Arc<ServerConfig>>,
    AuthUser(user): AuthUser,
    mut multipart: Multipart,
) -> Result<Json<ImageUpload>, BackendError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        let Some(original) = field.file_name().map(str::to_string) else {
            continue;
        };

        let data = field.bytes().await?;
        let name = stored_file_name(Utc::now().timestamp_millis(), &original);
        let path = config.upload_dir.join(&name);

        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;
        write_or_remove(&mut file, &path, &data).await?;

        tracing::info!("Stored upload {} ({} bytes) for {}", name, data.len(), user.user_id);

        return Ok(Json(ImageUpload {
            image_url: format!("/uploads/{}", name),
        }));
    }

    Err(BackendError::bad_request("No file uploaded"))
}
