//! Success response helpers. Bodies are the bare record, without an envelope.

use crate::model::MessageBody;
use axum::{http::StatusCode, Json};
use serde::Serialize;

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn message(text: &str) -> (StatusCode, Json<MessageBody>) {
    (StatusCode::OK, Json(MessageBody::new(text)))
}
