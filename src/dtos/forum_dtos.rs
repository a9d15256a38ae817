use serde::{Deserialize, Serialize};

use crate::models::post::{CommentId, NewComment, NewPost, Post, PostId, PostSummary};

// Missing text fields arrive as empty strings and fail validation like
// any other empty input.

#[derive(Debug, Deserialize)]
pub struct CreatePostDTO {
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl From<CreatePostDTO> for NewPost {
    fn from(dto: CreatePostDTO) -> Self {
        NewPost {
            sender: dto.sender,
            title: dto.title,
            content: dto.content,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentDTO {
    pub post_id: PostId,
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub comment: String,
}

impl CreateCommentDTO {
    pub fn into_parts(self) -> (PostId, NewComment) {
        (
            self.post_id,
            NewComment {
                sender: self.sender,
                comment: self.comment,
            },
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewPostQuery {
    pub post_id: PostId,
}

#[derive(Debug, Deserialize)]
pub struct EchoQuery {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostIdOut {
    pub post_id: PostId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentIdOut {
    pub comment_id: CommentId,
}

#[derive(Debug, Serialize)]
pub struct PostOut {
    pub post: Post,
}

#[derive(Debug, Serialize)]
pub struct PostsOut {
    pub posts: Vec<PostSummary>,
}

/// Serializes as `{}`.
#[derive(Debug, Serialize)]
pub struct ClearOut {}

#[derive(Debug, Serialize)]
pub struct MessageOut {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorOut {
    pub error: String,
}
