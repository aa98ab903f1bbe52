use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Note {
    /// Note ID, assigned by storage
    pub id: i64,
    /// Note title
    pub title: String,
    /// Optional note body
    pub content: Option<String>,
    /// Creation time, assigned by storage
    pub created_at: DateTime<Utc>,
}

impl TryFrom<&Row> for Note {
    type Error = tokio_postgres::Error;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            content: row.try_get("content")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
