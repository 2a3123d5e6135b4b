/*
 * Responsibility
 * - response DTO
 * - payload は固定文字列のみ (request DTO は無し)
 */
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
