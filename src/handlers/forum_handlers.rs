// src/handlers/forum_handlers.rs - post, comment, view, list and clear routes

use actix_web::{delete, get, post, web, HttpResponse};
use log::info;

use crate::dtos::forum_dtos::{
    ClearOut, CommentIdOut, CreateCommentDTO, CreatePostDTO, PostIdOut, PostOut, PostsOut,
    ViewPostQuery,
};
use crate::services::forum_services::ForumError;
use crate::AppState;

/// POST /post/create
#[post("/post/create")]
pub async fn create_post(
    app_state: web::Data<AppState>,
    body: web::Json<CreatePostDTO>,
) -> Result<HttpResponse, ForumError> {
    let body = body.into_inner();
    info!(
        "post being created: sender={:?} title={:?}",
        body.sender, body.title
    );

    let post_id = app_state.forum.create(body.into())?;
    Ok(HttpResponse::Ok().json(PostIdOut { post_id }))
}

/// POST /post/comment
#[post("/post/comment")]
pub async fn create_comment(
    app_state: web::Data<AppState>,
    body: web::Json<CreateCommentDTO>,
) -> Result<HttpResponse, ForumError> {
    let (post_id, comment) = body.into_inner().into_parts();
    info!("comment being created on post {} by {:?}", post_id, comment.sender);

    let comment_id = app_state.forum.comment(post_id, comment)?;
    Ok(HttpResponse::Ok().json(CommentIdOut { comment_id }))
}

/// GET /post/view?postId=
#[get("/post/view")]
pub async fn view_post(
    app_state: web::Data<AppState>,
    query: web::Query<ViewPostQuery>,
) -> Result<HttpResponse, ForumError> {
    let post = app_state.forum.view(query.post_id)?;
    Ok(HttpResponse::Ok().json(PostOut { post }))
}

/// GET /posts/list
#[get("/posts/list")]
pub async fn list_posts(app_state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(PostsOut {
        posts: app_state.forum.list(),
    })
}

/// DELETE /clear
#[delete("/clear")]
pub async fn clear(app_state: web::Data<AppState>) -> HttpResponse {
    app_state.forum.clear();
    HttpResponse::Ok().json(ClearOut {})
}
