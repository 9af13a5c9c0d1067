//! Extract the numeric record id from the `:id` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

pub const INVALID_ID: &str = "ID inválido";

/// Primary key of the addressed record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest(INVALID_ID.into()))?;
        raw.trim()
            .parse::<i32>()
            .map(RecordId)
            .map_err(|_| AppError::BadRequest(INVALID_ID.into()))
    }
}
