//! SQLite repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DbConn, DbErr, EntityTrait, NotSet, QueryOrder, QuerySelect, Set,
};

use board_core::domain::{NewPost, Post};
use board_core::error::RepoError;
use board_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// SQLite-backed post repository.
///
/// Each operation is a single statement, so atomicity and write
/// serialization come from SQLite itself.
pub struct SqlitePostRepository {
    db: DbConn,
}

impl SqlitePostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let (title, content, username) = post.into_parts();

        let model = post::ActiveModel {
            id: NotSet,
            title: Set(title),
            content: Set(content),
            username: Set(username),
            created_at: Set(Utc::now()),
        };

        let saved = model.insert(&self.db).await.map_err(map_db_err)?;
        tracing::debug!(post_id = saved.id, "Inserted post");

        Ok(saved.into())
    }

    async fn list_recent(&self, limit: u64) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(count = rows.len(), limit, "Listed recent posts");

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => RepoError::Connection(err.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}
