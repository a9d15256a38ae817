use serde::Serialize;

use crate::services::forum_services::ForumError;

pub type PostId = u64;
pub type CommentId = u64;

/// A forum post together with its comments, most recent comment first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub post_id: PostId,
    pub sender: String,
    pub title: String,
    pub content: String,
    pub time_sent: i64,
    pub comments: Vec<Comment>,
}

/// A reply owned by exactly one post. `comment_id` only means something
/// next to the id of that post.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub comment_id: CommentId,
    pub sender: String,
    pub comment: String,
    pub time_sent: i64,
}

/// Listing view of a post: no content, no comments.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub post_id: PostId,
    pub sender: String,
    pub title: String,
    pub time_sent: i64,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        Self {
            post_id: post.post_id,
            sender: post.sender.clone(),
            title: post.title.clone(),
            time_sent: post.time_sent,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub sender: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub sender: String,
    pub comment: String,
}

impl NewPost {
    pub fn validate(&self) -> Result<(), ForumError> {
        if self.sender.is_empty() {
            return Err(ForumError::EmptySender);
        }
        if self.title.is_empty() {
            return Err(ForumError::EmptyTitle);
        }
        if self.content.is_empty() {
            return Err(ForumError::EmptyContent);
        }
        Ok(())
    }

    pub fn into_post(self, post_id: PostId, time_sent: i64) -> Post {
        Post {
            post_id,
            sender: self.sender,
            title: self.title,
            content: self.content,
            time_sent,
            comments: Vec::new(),
        }
    }
}

impl NewComment {
    // The target post is checked by the caller before this runs.
    pub fn validate(&self) -> Result<(), ForumError> {
        if self.sender.is_empty() {
            return Err(ForumError::EmptySender);
        }
        if self.comment.is_empty() {
            return Err(ForumError::EmptyComment);
        }
        Ok(())
    }

    pub fn into_comment(self, comment_id: CommentId, time_sent: i64) -> Comment {
        Comment {
            comment_id,
            sender: self.sender,
            comment: self.comment,
            time_sent,
        }
    }
}
