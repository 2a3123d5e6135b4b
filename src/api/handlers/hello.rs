/*
 * Responsibility
 * - GET / (疎通用の固定メッセージ)
 */
use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::api::dto::MessageResponse;

pub async fn hello() -> impl IntoResponse {
    (StatusCode::OK, Json(MessageResponse::new("Hello, World!")))
}
