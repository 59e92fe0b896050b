use axum::{
    extract::{FromRequestParts, Path},
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};

use crate::include_res;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    NotFound { what: &'static str, id: String },
    Internal(anyhow::Error),
}

impl AppError {
    pub fn not_found(what: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            what,
            id: id.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound { what, id } => {
                tracing::debug!(what, %id, "record not found");
                (
                    StatusCode::NOT_FOUND,
                    Html(include_res!(str, "/pages/errors/404.html")),
                )
                    .into_response()
            }
            AppError::Internal(err) => {
                tracing::error!("{err:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(include_res!(str, "/pages/errors/500.html")),
                )
                    .into_response()
            }
        }
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}

/// The `{id}` path segment. Anything that is not an integer names no record, so it is a 404.
#[derive(Debug, Clone, Copy)]
pub struct RecordId(pub i64);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|err| AppError::Internal(err.into()))?;
        raw.parse()
            .map(RecordId)
            .map_err(|_| AppError::not_found("record", raw))
    }
}
