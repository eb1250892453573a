use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::{request::Parts, StatusCode},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::AppError;

/// `{id}` path segment parsed as an integer.
#[derive(Debug, Clone, Copy)]
pub struct UserId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                warn!(error = %e, "invalid user id");
                AppError::BadRequest(e.body_text())
            })?;
        Ok(UserId(id))
    }
}

/// JSON body whose rejections come back as `AppError`.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(JsonRejection::MissingJsonContentType(e)) => {
                warn!(error = %e, "request body is not json");
                Err(AppError::UnsupportedMediaType(e.body_text()))
            }
            Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                warn!(error = %e, "request body too large");
                Err(AppError::PayloadTooLarge(e.body_text()))
            }
            Err(e) => {
                warn!(error = %e, "invalid json body");
                Err(AppError::BadRequest(e.body_text()))
            }
        }
    }
}
