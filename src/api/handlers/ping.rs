/*
 * Responsibility
 * - POST /ping (body は読まない、validation 無し)
 */
use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::api::dto::MessageResponse;

pub async fn ping() -> impl IntoResponse {
    (StatusCode::OK, Json(MessageResponse::new("Ping!")))
}
