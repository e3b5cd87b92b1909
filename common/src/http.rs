use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;

use super::error::{AppError, Res};

pub struct Success;
impl Success {
    pub fn ok<T: Serialize>(body: T) -> Res<impl Responder> {
        Result::Ok(HttpResponse::Ok().json(body))
    }
}

/// JSON extractor configuration that reports malformed bodies with the
/// same `{"error": ...}` shape as every other client error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(16 * 1024)
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}
