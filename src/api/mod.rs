//! Assistants backend access
//!
//! The view talks to the backend through the `AssistantsApi` trait. The
//! production implementation is `HttpAssistantsApi`, a thin JSON client.

use crate::types::assistant::{Assistant, AssistantInput, OpenAiAssistant};
use async_trait::async_trait;
use thiserror::Error;

pub mod http;

pub use http::{HttpAssistantsApi, HttpConfig};

/// Backend access errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to serialize/deserialize JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Operations the assistants view and its dialogs need from the backend
#[async_trait]
pub trait AssistantsApi: Send + Sync {
    async fn get_all_assistants(&self) -> Result<Vec<Assistant>, ApiError>;

    async fn create_assistant(&self, input: &AssistantInput) -> Result<Assistant, ApiError>;

    async fn update_assistant(
        &self,
        id: &str,
        input: &AssistantInput,
    ) -> Result<Assistant, ApiError>;

    async fn delete_assistant(&self, id: &str) -> Result<(), ApiError>;

    /// List assistants on the remote OpenAI account behind `credential`
    async fn list_openai_assistants(
        &self,
        credential: &str,
    ) -> Result<Vec<OpenAiAssistant>, ApiError>;
}
