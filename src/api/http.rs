//! HTTP implementation of `AssistantsApi`

use crate::api::{ApiError, AssistantsApi};
use crate::storage::settings::AppSettings;
use crate::types::assistant::{Assistant, AssistantInput, OpenAiAssistant};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Connection settings for the backend
#[derive(Clone, Debug)]
pub struct HttpConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl HttpConfig {
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            base_url: settings.api_base_url.clone(),
            api_key: settings.api_key.clone().filter(|k| !k.is_empty()),
        }
    }

    /// Reject base URLs that are not absolute http(s) URLs
    pub fn check(&self) -> Result<(), ApiError> {
        let base = self.base_url.trim();
        if base.starts_with("http://") || base.starts_with("https://") {
            Ok(())
        } else {
            Err(ApiError::InvalidBaseUrl(self.base_url.clone()))
        }
    }
}

/// JSON-over-HTTP assistants client
pub struct HttpAssistantsApi {
    config: HttpConfig,
    client: reqwest::Client,
}

impl HttpAssistantsApi {
    /// Build a client; call `HttpConfig::check` first to validate the URL
    pub fn new(config: HttpConfig) -> Self {
        let config = HttpConfig {
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            ..config
        };
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.header("Authorization", format!("Bearer {}", key)),
            None => request,
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = self.authorize(request).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!("Assistants backend error ({}): {}", status, body);
            return Err(ApiError::Status { status, body });
        }

        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl AssistantsApi for HttpAssistantsApi {
    async fn get_all_assistants(&self) -> Result<Vec<Assistant>, ApiError> {
        let assistants: Vec<Assistant> = self
            .send_json(self.client.get(self.url("assistants")))
            .await?;
        tracing::debug!("Fetched {} assistant(s)", assistants.len());
        Ok(assistants)
    }

    async fn create_assistant(&self, input: &AssistantInput) -> Result<Assistant, ApiError> {
        let created: Assistant = self
            .send_json(self.client.post(self.url("assistants")).json(input))
            .await?;
        tracing::info!("Created assistant: {}", created.id);
        Ok(created)
    }

    async fn update_assistant(
        &self,
        id: &str,
        input: &AssistantInput,
    ) -> Result<Assistant, ApiError> {
        let updated: Assistant = self
            .send_json(
                self.client
                    .put(self.url(&format!("assistants/{}", id)))
                    .json(input),
            )
            .await?;
        tracing::info!("Updated assistant: {}", id);
        Ok(updated)
    }

    async fn delete_assistant(&self, id: &str) -> Result<(), ApiError> {
        self.send(self.client.delete(self.url(&format!("assistants/{}", id))))
            .await?;
        tracing::info!("Deleted assistant: {}", id);
        Ok(())
    }

    async fn list_openai_assistants(
        &self,
        credential: &str,
    ) -> Result<Vec<OpenAiAssistant>, ApiError> {
        self.send_json(
            self.client
                .get(self.url("openai-assistants"))
                .query(&[("credential", credential)]),
        )
        .await
    }
}
