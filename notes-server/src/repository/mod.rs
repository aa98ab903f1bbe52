use async_trait::async_trait;
use deadpool_postgres::{Pool, PoolError};

use crate::models::Note;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Failed to acquire database connection: {0}")]
    Pool(#[from] PoolError),

    #[error("Database query failed: {0}")]
    Query(#[from] tokio_postgres::Error),
}

/// Storage operations backing the notes API.
///
/// Writes and their read-backs are separate calls with no transaction in
/// between, so a concurrent delete can make `find_note` return `None`
/// right after a successful write.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// All notes, newest (highest id) first.
    async fn list_notes(&self) -> Result<Vec<Note>, RepositoryError>;

    /// Inserts a note and returns the id storage assigned to it.
    async fn insert_note(&self, title: &str, content: Option<&str>)
    -> Result<i64, RepositoryError>;

    /// Overwrites title and content. Missing ids are not an error.
    async fn update_note(
        &self,
        id: i64,
        title: &str,
        content: Option<&str>,
    ) -> Result<(), RepositoryError>;

    async fn find_note(&self, id: i64) -> Result<Option<Note>, RepositoryError>;

    /// Missing ids are not an error.
    async fn delete_note(&self, id: i64) -> Result<(), RepositoryError>;
}

pub struct PgNoteRepository {
    pool: Pool,
}

impl PgNoteRepository {
    pub const fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn list_notes(&self) -> Result<Vec<Note>, RepositoryError> {
        let client = self.pool.get().await?;
        let stmt = client
            .prepare_cached("SELECT id, title, content, created_at FROM notes ORDER BY id DESC")
            .await?;
        let rows = client.query(&stmt, &[]).await?;

        rows.iter()
            .map(|row| Note::try_from(row).map_err(Into::into))
            .collect()
    }

    async fn insert_note(
        &self,
        title: &str,
        content: Option<&str>,
    ) -> Result<i64, RepositoryError> {
        let client = self.pool.get().await?;
        let stmt = client
            .prepare_cached("INSERT INTO notes (title, content) VALUES ($1, $2) RETURNING id")
            .await?;
        let row = client.query_one(&stmt, &[&title, &content]).await?;

        Ok(row.try_get("id")?)
    }

    async fn update_note(
        &self,
        id: i64,
        title: &str,
        content: Option<&str>,
    ) -> Result<(), RepositoryError> {
        let client = self.pool.get().await?;
        let stmt = client
            .prepare_cached("UPDATE notes SET title = $1, content = $2 WHERE id = $3")
            .await?;
        let updated = client.execute(&stmt, &[&title, &content, &id]).await?;

        if updated == 0 {
            tracing::debug!("update matched no note with id {}", id);
        }

        Ok(())
    }

    async fn find_note(&self, id: i64) -> Result<Option<Note>, RepositoryError> {
        let client = self.pool.get().await?;
        let stmt = client
            .prepare_cached("SELECT id, title, content, created_at FROM notes WHERE id = $1")
            .await?;
        let row = client.query_opt(&stmt, &[&id]).await?;

        Ok(row.as_ref().map(Note::try_from).transpose()?)
    }

    async fn delete_note(&self, id: i64) -> Result<(), RepositoryError> {
        let client = self.pool.get().await?;
        let stmt = client
            .prepare_cached("DELETE FROM notes WHERE id = $1")
            .await?;
        let deleted = client.execute(&stmt, &[&id]).await?;

        if deleted == 0 {
            tracing::debug!("delete matched no note with id {}", id);
        }

        Ok(())
    }
}
