// src/middleware/payload_errors.rs
// Extractor failures (bad JSON body, unparsable query) are answered with the
// same `{ "error": ... }` payload as validation errors.

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{web, Error, HttpRequest};

use crate::services::forum_services::ForumError;

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error)
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error)
}

fn json_error(err: JsonPayloadError, req: &HttpRequest) -> Error {
    log::debug!("bad json body on {}: {}", req.path(), err);
    ForumError::MalformedRequest(err.to_string()).into()
}

fn query_error(err: QueryPayloadError, req: &HttpRequest) -> Error {
    log::debug!("bad query string on {}: {}", req.path(), err);
    ForumError::MalformedRequest(err.to_string()).into()
}
