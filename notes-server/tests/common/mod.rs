#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use chrono::Utc;
use deadpool_postgres::PoolError;
use serde_json::Value;
use tower::ServiceExt;

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use notes_server::{
    app,
    models::Note,
    repository::{NoteRepository, RepositoryError},
    service::NoteService,
};

/// In-memory stand-in for the notes table.
#[derive(Default)]
pub struct MemoryRepository {
    notes: Mutex<Vec<Note>>,
    next_id: AtomicUsize,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryRepository {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every subsequent call fails as if the pool were gone.
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn enter(&self) -> Result<(), RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(RepositoryError::Pool(PoolError::Closed));
        }
        Ok(())
    }
}

#[async_trait]
impl NoteRepository for MemoryRepository {
    async fn list_notes(&self) -> Result<Vec<Note>, RepositoryError> {
        self.enter()?;
        let mut notes = self.notes.lock().unwrap().clone();
        notes.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(notes)
    }

    async fn insert_note(
        &self,
        title: &str,
        content: Option<&str>,
    ) -> Result<i64, RepositoryError> {
        self.enter()?;
        let id = i64::try_from(self.next_id.fetch_add(1, Ordering::SeqCst) + 1).unwrap();
        self.notes.lock().unwrap().push(Note {
            id,
            title: title.to_string(),
            content: content.map(str::to_string),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn update_note(
        &self,
        id: i64,
        title: &str,
        content: Option<&str>,
    ) -> Result<(), RepositoryError> {
        self.enter()?;
        if let Some(note) = self.notes.lock().unwrap().iter_mut().find(|n| n.id == id) {
            note.title = title.to_string();
            note.content = content.map(str::to_string);
        }
        Ok(())
    }

    async fn find_note(&self, id: i64) -> Result<Option<Note>, RepositoryError> {
        self.enter()?;
        Ok(self
            .notes
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.id == id)
            .cloned())
    }

    async fn delete_note(&self, id: i64) -> Result<(), RepositoryError> {
        self.enter()?;
        self.notes.lock().unwrap().retain(|n| n.id != id);
        Ok(())
    }
}

pub fn test_app() -> (Router, Arc<MemoryRepository>) {
    let repo = Arc::new(MemoryRepository::default());
    let service = Arc::new(NoteService::new(repo.clone()));
    (app(service), repo)
}

/// Sends one request through the router and returns status plus parsed JSON body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
