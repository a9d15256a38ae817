// src/services/forum_services.rs
use std::sync::{Mutex, MutexGuard, PoisonError};

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use chrono::Utc;
use log::{debug, info, warn};
use thiserror::Error;

use crate::dtos::forum_dtos::ErrorOut;
use crate::models::post::{CommentId, NewComment, NewPost, Post, PostId, PostSummary};
use crate::repositories::forum_store::ForumStore;

/// Every rejection the forum can produce. They all reach the client the
/// same way, as `{ "error": "<message>" }` with status 200.
#[derive(Debug, Error)]
pub enum ForumError {
    #[error("sender is an empty string")]
    EmptySender,
    #[error("title is an empty string")]
    EmptyTitle,
    #[error("content is an empty string")]
    EmptyContent,
    #[error("comment is an empty string")]
    EmptyComment,
    #[error("postId {0} does not refer to a valid post")]
    UnknownPost(PostId),
    #[error("cannot echo 'echo'")]
    EchoRejected,
    #[error("malformed request: {0}")]
    MalformedRequest(String),
}

impl ResponseError for ForumError {
    fn status_code(&self) -> StatusCode {
        StatusCode::OK
    }

    fn error_response(&self) -> HttpResponse {
        warn!("request rejected: {}", self);
        HttpResponse::Ok().json(ErrorOut {
            error: self.to_string(),
        })
    }
}

struct ForumState {
    store: ForumStore,
    last_stamp: i64,
}

impl ForumState {
    /// Wall clock in whole seconds, never behind a stamp already handed out.
    fn stamp(&mut self) -> i64 {
        self.last_stamp = self.last_stamp.max(Utc::now().timestamp());
        self.last_stamp
    }
}

/// Post operations over the shared store. Each call holds the lock for its
/// whole read-validate-write sequence, so ids derived from collection
/// lengths stay unique under concurrent requests.
pub struct ForumService {
    state: Mutex<ForumState>,
}

impl Default for ForumService {
    fn default() -> Self {
        Self::new()
    }
}

impl ForumService {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ForumState {
                store: ForumStore::new(),
                last_stamp: 0,
            }),
        }
    }

    // Operations never panic half way through a store write, so the data
    // behind a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, ForumState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn create(&self, new_post: NewPost) -> Result<PostId, ForumError> {
        new_post.validate()?;

        let mut state = self.lock();
        let mut posts = state.store.get().to_vec();
        let post_id = posts.len() as PostId;
        let time_sent = state.stamp();

        posts.insert(0, new_post.into_post(post_id, time_sent));
        state.store.replace(posts);

        info!("post {} created", post_id);
        Ok(post_id)
    }

    pub fn comment(&self, post_id: PostId, new_comment: NewComment) -> Result<CommentId, ForumError> {
        let mut state = self.lock();
        let mut posts = state.store.get().to_vec();

        let index = posts
            .iter()
            .position(|p| p.post_id == post_id)
            .ok_or(ForumError::UnknownPost(post_id))?;
        new_comment.validate()?;

        let time_sent = state.stamp();
        let post = &mut posts[index];
        let comment_id = post.comments.len() as CommentId;
        post.comments.insert(0, new_comment.into_comment(comment_id, time_sent));
        state.store.replace(posts);

        info!("comment {} added to post {}", comment_id, post_id);
        Ok(comment_id)
    }

    pub fn view(&self, post_id: PostId) -> Result<Post, ForumError> {
        debug!("viewing post {}", post_id);
        self.lock()
            .store
            .get()
            .iter()
            .find(|p| p.post_id == post_id)
            .cloned()
            .ok_or(ForumError::UnknownPost(post_id))
    }

    pub fn list(&self) -> Vec<PostSummary> {
        let state = self.lock();
        let posts: Vec<PostSummary> = state.store.get().iter().map(PostSummary::from).collect();
        debug!("listing {} posts", posts.len());
        posts
    }

    pub fn clear(&self) {
        self.lock().store.replace(Vec::new());
        info!("all posts cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    fn new_post(sender: &str, title: &str, content: &str) -> NewPost {
        NewPost {
            sender: sender.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    fn new_comment(sender: &str, comment: &str) -> NewComment {
        NewComment {
            sender: sender.into(),
            comment: comment.into(),
        }
    }

    #[test]
    fn create_rejects_each_empty_field() {
        let forum = ForumService::new();
        assert!(matches!(forum.create(new_post("", "t", "c")), Err(ForumError::EmptySender)));
        assert!(matches!(forum.create(new_post("s", "", "c")), Err(ForumError::EmptyTitle)));
        assert!(matches!(forum.create(new_post("s", "t", "")), Err(ForumError::EmptyContent)));
        assert!(forum.list().is_empty());
    }

    #[test]
    fn create_issues_distinct_ids() {
        let forum = ForumService::new();
        let ids: HashSet<_> = (0..3)
            .map(|_| forum.create(new_post("Emily", "Post", "Welcome!")).unwrap())
            .collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn list_is_most_recent_first() {
        let forum = ForumService::new();
        let p1 = forum.create(new_post("a", "first", "x")).unwrap();
        let p2 = forum.create(new_post("b", "second", "y")).unwrap();
        let p3 = forum.create(new_post("c", "third", "z")).unwrap();

        let ids: Vec<_> = forum.list().iter().map(|p| p.post_id).collect();
        assert_eq!(ids, vec![p3, p2, p1]);
        assert_eq!(forum.list()[0].title, "third");
    }

    #[test]
    fn comment_validation_order() {
        let forum = ForumService::new();
        let post_id = forum.create(new_post("Zero Two", "Darling", "FRANXX")).unwrap();

        assert!(matches!(
            forum.comment(post_id + 1, new_comment("", "")),
            Err(ForumError::UnknownPost(_))
        ));
        assert!(matches!(
            forum.comment(post_id, new_comment("", "")),
            Err(ForumError::EmptySender)
        ));
        assert!(matches!(
            forum.comment(post_id, new_comment("Hiro", "")),
            Err(ForumError::EmptyComment)
        ));
        assert!(forum.view(post_id).unwrap().comments.is_empty());
    }

    #[test]
    fn comment_on_empty_forum_fails() {
        let forum = ForumService::new();
        assert!(forum.comment(999, new_comment("Hiro", "Hello")).is_err());
    }

    #[test]
    fn comments_are_most_recent_first_and_scoped_to_post() {
        let forum = ForumService::new();
        let a = forum.create(new_post("a", "a", "a")).unwrap();
        let b = forum.create(new_post("b", "b", "b")).unwrap();

        let c1 = forum.comment(a, new_comment("n", "one")).unwrap();
        let c2 = forum.comment(a, new_comment("n", "two")).unwrap();
        let c3 = forum.comment(a, new_comment("n", "three")).unwrap();
        let other = forum.comment(b, new_comment("n", "elsewhere")).unwrap();

        let texts: Vec<_> = forum
            .view(a)
            .unwrap()
            .comments
            .into_iter()
            .map(|c| (c.comment_id, c.comment))
            .collect();
        assert_eq!(
            texts,
            vec![(c3, "three".to_string()), (c2, "two".to_string()), (c1, "one".to_string())]
        );

        // ids are per post, so the first comment on `b` may reuse `c1`
        assert_eq!(other, c1);
        assert_eq!(forum.view(b).unwrap().comments.len(), 1);
    }

    #[test]
    fn view_echoes_created_fields() {
        let forum = ForumService::new();
        let before = Utc::now().timestamp();
        let post_id = forum.create(new_post("Nick", "Hello", "Welcome to the forum")).unwrap();

        let post = forum.view(post_id).unwrap();
        assert_eq!(post.post_id, post_id);
        assert_eq!(post.sender, "Nick");
        assert_eq!(post.title, "Hello");
        assert_eq!(post.content, "Welcome to the forum");
        assert!(post.comments.is_empty());
        assert!((post.time_sent - before).abs() <= 3);
    }

    #[test]
    fn view_unknown_post_fails() {
        let forum = ForumService::new();
        assert!(matches!(forum.view(0), Err(ForumError::UnknownPost(0))));
    }

    #[test]
    fn clear_discards_everything() {
        let forum = ForumService::new();
        let post_id = forum.create(new_post("s", "t", "c")).unwrap();
        forum.comment(post_id, new_comment("s", "c")).unwrap();

        forum.clear();

        assert!(forum.list().is_empty());
        assert!(forum.view(post_id).is_err());
        assert!(forum.comment(post_id, new_comment("s", "c")).is_err());
    }

    #[test]
    fn timestamps_never_decrease() {
        let forum = ForumService::new();
        let mut stamps = Vec::new();
        for i in 0..5 {
            let id = forum.create(new_post("s", &format!("t{i}"), "c")).unwrap();
            stamps.push(forum.view(id).unwrap().time_sent);
        }
        assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn concurrent_creates_get_unique_ids() {
        let forum = Arc::new(ForumService::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let forum = Arc::clone(&forum);
                thread::spawn(move || {
                    (0..25)
                        .map(|i| forum.create(new_post("s", &format!("{t}-{i}"), "c")).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: HashSet<_> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
        assert_eq!(ids.len(), 200);
        assert_eq!(forum.list().len(), 200);
    }

    #[test]
    fn error_renders_as_ok_payload() {
        let response = ForumError::EmptyTitle.error_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
