pub mod config;
pub mod dtos;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod services;

use actix_web::web;

use crate::handlers::echo_handlers::{echo, root};
use crate::handlers::forum_handlers::{clear, create_comment, create_post, list_posts, view_post};
use crate::middleware::payload_errors::{json_config, query_config};
use crate::services::forum_services::ForumService;

/// State shared by every worker for the lifetime of the process.
#[derive(Default)]
pub struct AppState {
    pub forum: ForumService,
}

/// Registers every route plus the payload error handlers. `AppState` is
/// supplied by the caller so tests can build their own.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(root) // GET /
        .service(echo) // GET /echo/echo
        .service(create_post) // POST /post/create
        .service(create_comment) // POST /post/comment
        .service(view_post) // GET /post/view
        .service(list_posts) // GET /posts/list
        .service(clear); // DELETE /clear
}
