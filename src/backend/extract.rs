//! Request extractors shared by the handlers.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;
use validator::Validate;

use crate::backend::error::BackendError;
use crate::shared::error::collect_field_errors;

/// JSON body that has passed its `validator` rules.
///
/// A body that is not JSON, or not the expected shape, is rejected with 400
/// and a single `{"error"}`; a body that parses but fails validation is rejected
/// with the per-field `{"errors"}` list.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                tracing::warn!("Rejected JSON body: {}", rejection.body_text());
                BackendError::bad_request(rejection.body_text())
            })?;

        value
            .validate()
            .map_err(|errors| BackendError::Validation(collect_field_errors(&errors)))?;

        Ok(ValidatedJson(value))
    }
}

/// Parse a path segment as an entity id, reporting a malformed id as a
/// validation failure on `id`.
pub fn parse_id(raw: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw).map_err(|_| BackendError::invalid_field("id", "Invalid id"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::NewCategory;
    use axum::{body::Body, http::StatusCode};

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body() {
        let ValidatedJson(category) =
            ValidatedJson::<NewCategory>::from_request(json_request(r#"{"name":"Rust"}"#), &())
                .await
                .unwrap();
        assert_eq!(category.name, "Rust");
    }

    #[tokio::test]
    async fn test_invalid_body_reports_fields() {
        let err = ValidatedJson::<NewCategory>::from_request(json_request("{}"), &())
            .await
            .unwrap_err();
        match err {
            BackendError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "name");
            }
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let err = ValidatedJson::<NewCategory>::from_request(json_request("{not json"), &())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_parse_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
        assert_eq!(parse_id("123").unwrap_err().status_code(), StatusCode::BAD_REQUEST);
    }
}
