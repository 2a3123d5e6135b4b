/*
 * Responsibility
 * - URL 構造を定義
 * - GET / と POST /ping の 2 route のみ
 * - それ以外 (404/405) は axum のデフォルトに任せる
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{hello::hello, ping::ping};

pub fn routes() -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/ping", post(ping))
}
