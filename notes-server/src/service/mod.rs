use crate::{
    dto::{CreateNoteRequest, UpdateNoteRequest, non_empty},
    error::{ServiceError, ValidationError},
    models::Note,
    repository::NoteRepository,
};

use std::sync::Arc;

#[derive(Clone)]
pub struct NoteService {
    repo: Arc<dyn NoteRepository>,
}

impl NoteService {
    pub fn new(repo: Arc<dyn NoteRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all_notes(&self) -> Result<Vec<Note>, ServiceError> {
        Ok(self.repo.list_notes().await?)
    }

    /// Returns `None` only if the note vanished between insert and read-back.
    pub async fn create_note(
        &self,
        request: CreateNoteRequest,
    ) -> Result<Option<Note>, ServiceError> {
        let title = non_empty(request.title).ok_or(ValidationError::TitleRequired)?;
        let content = non_empty(request.content);

        let id = self.repo.insert_note(&title, content.as_deref()).await?;
        Ok(self.repo.find_note(id).await?)
    }

    /// Returns `None` when no note has the given id.
    pub async fn update_note(
        &self,
        request: UpdateNoteRequest,
    ) -> Result<Option<Note>, ServiceError> {
        let (Some(id), Some(title)) = (request.id.filter(|&id| id != 0), non_empty(request.title))
        else {
            return Err(ValidationError::IdAndTitleRequired.into());
        };
        let content = non_empty(request.content);

        self.repo
            .update_note(id, &title, content.as_deref())
            .await?;
        Ok(self.repo.find_note(id).await?)
    }

    pub async fn delete_note(&self, id: Option<&str>) -> Result<(), ServiceError> {
        let raw = id
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::IdRequired)?;
        let id = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidId)?;

        Ok(self.repo.delete_note(id).await?)
    }
}
