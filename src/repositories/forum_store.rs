// src/repositories/forum_store.rs - in-memory holder of every post

use crate::models::post::Post;

/// Whole-collection store. Posts are kept most recent first; there is no
/// keyed update, callers read everything and write a new collection back.
#[derive(Debug, Default)]
pub struct ForumStore {
    posts: Vec<Post>,
}

impl ForumStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> &[Post] {
        &self.posts
    }

    pub fn replace(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }
}
