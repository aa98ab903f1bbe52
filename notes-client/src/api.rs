use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("{0}")]
    Api(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
}

impl<T> Envelope<T> {
    fn into_result(self) -> Result<Option<T>, ClientError> {
        if self.success {
            Ok(self.data)
        } else {
            Err(ClientError::Api(
                self.error.unwrap_or_else(|| "Error".to_string()),
            ))
        }
    }
}

pub struct ApiClient {
    http: reqwest::Client,
    notes_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            notes_url: format!("{}/notes", base_url.trim_end_matches('/')),
        }
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Option<T>, ClientError> {
        response.json::<Envelope<T>>().await?.into_result()
    }

    pub async fn list(&self) -> Result<Vec<Note>, ClientError> {
        let response = self.http.get(&self.notes_url).send().await?;
        Ok(Self::decode(response).await?.unwrap_or_default())
    }

    pub async fn create(&self, title: &str, content: &str) -> Result<Option<Note>, ClientError> {
        let response = self
            .http
            .post(&self.notes_url)
            .json(&json!({ "title": title, "content": content }))
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn update(
        &self,
        id: i64,
        title: &str,
        content: &str,
    ) -> Result<Option<Note>, ClientError> {
        let response = self
            .http
            .put(&self.notes_url)
            .json(&json!({ "id": id, "title": title, "content": content }))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// The response body is not inspected; callers treat a delivered request as done.
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.http
            .delete(&self.notes_url)
            .query(&[("id", id)])
            .send()
            .await?;
        Ok(())
    }
}
