//! PostStore: process-lifetime in-memory list of posts.

use std::sync::{Arc, RwLock};

use crate::error::StoreError;

use super::post::{Post, PostId, PostView};

const SEED_TITLE: &str = "Welcome";
const SEED_CONTENT: &str = "This is the first post.";

/// In-memory post store backed by a `Vec`.
///
/// Clone-friendly via Arc; every clone shares the same list. Reads take the
/// read lock; create and update take the write lock, and update performs its
/// lookup and overwrite inside a single critical section.
#[derive(Clone)]
pub struct PostStore {
    posts: Arc<RwLock<Vec<Post>>>,
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PostStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            posts: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a store holding the default welcome post.
    pub fn seeded() -> Self {
        let post = Post::new(SEED_TITLE, SEED_CONTENT);
        tracing::debug!(id = %post.id(), "seeded post store");
        Self {
            posts: Arc::new(RwLock::new(vec![post])),
        }
    }

    /// All posts in insertion order.
    pub fn list(&self) -> Result<Vec<PostView>, StoreError> {
        let posts = self
            .posts
            .read()
            .map_err(|_| StoreError::LockPoisoned("list"))?;
        Ok(posts.iter().map(Post::view).collect())
    }

    /// Append a new post built from trimmed fields.
    pub fn add(&self, title: &str, content: &str) -> Result<PostView, StoreError> {
        let post = Post::new(title, content);
        let view = post.view();
        self.posts
            .write()
            .map_err(|_| StoreError::LockPoisoned("add"))?
            .push(post);
        Ok(view)
    }

    /// Overwrite title and content of the post with `id`.
    ///
    /// Returns `Ok(None)` if no such post exists.
    pub fn update(
        &self,
        id: PostId,
        title: &str,
        content: &str,
    ) -> Result<Option<PostView>, StoreError> {
        let mut posts = self
            .posts
            .write()
            .map_err(|_| StoreError::LockPoisoned("update"))?;
        Ok(posts.iter_mut().find(|post| post.id() == id).map(|post| {
            post.revise(title, content);
            post.view()
        }))
    }

    pub fn get(&self, id: PostId) -> Result<Option<PostView>, StoreError> {
        let posts = self
            .posts
            .read()
            .map_err(|_| StoreError::LockPoisoned("get"))?;
        Ok(posts.iter().find(|post| post.id() == id).map(Post::view))
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        let posts = self
            .posts
            .read()
            .map_err(|_| StoreError::LockPoisoned("len"))?;
        Ok(posts.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}
