use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;

/// Post repository - append-only storage of board posts.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a validated post, assigning its id and creation time.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Up to `limit` posts, newest first.
    ///
    /// Ordered by `created_at` descending, ties broken by descending `id`.
    async fn list_recent(&self, limit: u64) -> Result<Vec<Post>, RepoError>;
}
