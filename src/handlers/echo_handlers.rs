use actix_web::{get, web, HttpResponse};

use crate::dtos::forum_dtos::{EchoQuery, MessageOut};
use crate::services::forum_services::ForumError;

/// GET /
#[get("/")]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(MessageOut {
        message: "Welcome to the forum server's root URL!".to_string(),
    })
}

/// GET /echo/echo?message=
/// Returns the message untouched, except the word "echo" itself.
#[get("/echo/echo")]
pub async fn echo(query: web::Query<EchoQuery>) -> Result<HttpResponse, ForumError> {
    let message = query.into_inner().message;
    if message == "echo" {
        return Err(ForumError::EchoRejected);
    }
    Ok(HttpResponse::Ok().json(MessageOut { message }))
}
