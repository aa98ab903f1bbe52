use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use utoipa::ToSchema;

/// Uniform response body: `{success, data}` on success, `{success, error}` on failure.
///
/// `data` is left out entirely when there is nothing to report, e.g. a
/// delete or an update whose note no longer exists.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub const fn ok(data: Option<T>) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

impl Envelope<()> {
    pub const fn ack() -> Self {
        Self::ok(None)
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    /// Note title, must be non-empty
    pub title: Option<String>,
    /// Note content, stored as null when absent or empty
    pub content: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateNoteRequest {
    /// Note ID, must be non-zero; numeric strings are accepted
    #[serde(default)]
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[schema(value_type = Option<i64>)]
    pub id: Option<i64>,
    /// New title, must be non-empty
    pub title: Option<String>,
    /// New content, stored as null when absent or empty
    pub content: Option<String>,
}

/// Empty strings count as absent, for both required and optional fields.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
