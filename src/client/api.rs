/**
 * Blog API Client
 *
 * Typed async wrapper around the REST API. Every call returns the decoded
 * body or a `ClientError`; failures keep the server's own message from the
 * `{"error"}` envelope, or the per-field list from `{"errors"}`.
 */

use std::path::Path;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::client::config::Config;
use crate::shared::{
    AuthResponse, Category, ErrorBody, FieldError, ImageUpload, LoginRequest, MessageBody,
    NewCategory, NewComment, NewPost, PopulatedPost, PostPage, PostUpdate, RegisterRequest,
    StoredPost, UserProfile, ValidationErrorBody,
};

/// Multipart field name expected by the upload endpoint
const IMAGE_FIELD: &str = "image";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{}", .0.iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join(", "))]
    Validation(Vec<FieldError>),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ClientError {
    /// HTTP status of an API failure
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Validation(_) => Some(StatusCode::BAD_REQUEST.as_u16()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED.as_u16())
    }
}

/// Query of `GET /api/posts`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

fn image_mime(file_name: &str) -> mime_guess::Mime {
    mime_guess::from_path(file_name).first_or_octet_stream()
}

/// Decode a response body, mapping error statuses onto `ClientError`.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if status.is_success() {
        return serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()));
    }

    if let Ok(body) = serde_json::from_slice::<ValidationErrorBody>(&bytes) {
        return Err(ClientError::Validation(body.errors));
    }

    let message = match serde_json::from_slice::<ErrorBody>(&bytes) {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
    };
    tracing::debug!("API error {}: {}", status, message);

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Config,
    http: Client,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.config.set_token(token);
    }

    pub fn clear_token(&mut self) {
        self.config.clear_token();
    }

    pub fn is_authenticated(&self) -> bool {
        self.config.get_token().is_some()
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, ClientError> {
        let token = self.config.get_token().ok_or(ClientError::NotAuthenticated)?;
        Ok(request.bearer_auth(token))
    }

    // Posts

    pub async fn list_posts(&self, query: &PostQuery) -> Result<PostPage, ClientError> {
        let response = self
            .http
            .get(self.config.api_url("/api/posts"))
            .query(query)
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn get_post(&self, id: Uuid) -> Result<PopulatedPost, ClientError> {
        let response = self
            .http
            .get(self.config.api_url(&format!("/api/posts/{}", id)))
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn create_post(&self, post: &NewPost) -> Result<StoredPost, ClientError> {
        let request = self.http.post(self.config.api_url("/api/posts")).json(post);
        let response = self.authorized(request)?.send().await?;
        read_json(response).await
    }

    pub async fn update_post(&self, id: Uuid, update: &PostUpdate) -> Result<StoredPost, ClientError> {
        let request = self
            .http
            .put(self.config.api_url(&format!("/api/posts/{}", id)))
            .json(update);
        let response = self.authorized(request)?.send().await?;
        read_json(response).await
    }

    pub async fn delete_post(&self, id: Uuid) -> Result<MessageBody, ClientError> {
        let request = self
            .http
            .delete(self.config.api_url(&format!("/api/posts/{}", id)));
        let response = self.authorized(request)?.send().await?;
        read_json(response).await
    }

    pub async fn add_comment(&self, id: Uuid, comment: &NewComment) -> Result<PopulatedPost, ClientError> {
        let request = self
            .http
            .post(self.config.api_url(&format!("/api/posts/{}/comments", id)))
            .json(comment);
        let response = self.authorized(request)?.send().await?;
        read_json(response).await
    }

    /// Upload raw image bytes under the given file name.
    pub async fn upload_image(&self, file_name: &str, data: Vec<u8>) -> Result<ImageUpload, ClientError> {
        let part = reqwest::multipart::Part::bytes(data)
            .file_name(file_name.to_string())
            .mime_str(image_mime(file_name).as_ref())?;
        let form = reqwest::multipart::Form::new().part(IMAGE_FIELD, part);

        let request = self
            .http
            .post(self.config.api_url("/api/posts/upload-image"))
            .multipart(form);
        let response = self.authorized(request)?.send().await?;
        read_json(response).await
    }

    /// Read a file from disk and upload it.
    pub async fn upload_image_file(&self, path: &Path) -> Result<ImageUpload, ClientError> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        let data = tokio::fs::read(path).await?;
        self.upload_image(&file_name, data).await
    }

    // Categories

    pub async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        let response = self
            .http
            .get(self.config.api_url("/api/categories"))
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn create_category(&self, category: &NewCategory) -> Result<Category, ClientError> {
        let response = self
            .http
            .post(self.config.api_url("/api/categories"))
            .json(category)
            .send()
            .await?;
        read_json(response).await
    }

    // Accounts

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        let response = self
            .http
            .post(self.config.api_url("/api/auth/register"))
            .json(request)
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        let response = self
            .http
            .post(self.config.api_url("/api/auth/login"))
            .json(request)
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn me(&self) -> Result<UserProfile, ClientError> {
        let request = self.http.get(self.config.api_url("/api/auth/me"));
        let response = self.authorized(request)?.send().await?;
        read_json(response).await
    }
}
