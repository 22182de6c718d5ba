//! Import dialog state
//!
//! Tracks the remote assistant list fetched for a credential. A selection
//! always pairs the picked id with the credential that list came from.

use crate::types::assistant::OpenAiAssistant;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum RemoteStatus {
    #[default]
    Idle,
    Loading,
    Loaded {
        credential: String,
        assistants: Vec<OpenAiAssistant>,
    },
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoteListState {
    pub status: RemoteStatus,
    generation: u64,
    pending_credential: Option<String>,
}

impl RemoteListState {
    /// Start fetching for `credential`; returns the fetch generation
    pub fn begin(&mut self, credential: &str) -> Option<u64> {
        let credential = credential.trim();
        if credential.is_empty() {
            self.status = RemoteStatus::Failed("Enter a credential id first".to_string());
            return None;
        }
        self.generation += 1;
        self.pending_credential = Some(credential.to_string());
        self.status = RemoteStatus::Loading;
        Some(self.generation)
    }

    /// Apply a fetch result; results of superseded fetches are dropped
    pub fn finish<E: std::fmt::Display>(
        &mut self,
        generation: u64,
        result: Result<Vec<OpenAiAssistant>, E>,
    ) -> bool {
        if generation != self.generation {
            tracing::debug!(
                "Dropping stale remote list {} (latest {})",
                generation,
                self.generation
            );
            return false;
        }
        let credential = self.pending_credential.take().unwrap_or_default();
        self.status = match result {
            Ok(assistants) => {
                tracing::debug!("Found {} remote assistant(s)", assistants.len());
                RemoteStatus::Loaded {
                    credential,
                    assistants,
                }
            }
            Err(e) => {
                tracing::error!("Failed to list remote assistants: {}", e);
                RemoteStatus::Failed(e.to_string())
            }
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        self.status == RemoteStatus::Loading
    }

    /// `(id, credential)` for a picked row of the loaded list
    pub fn select(&self, id: &str) -> Option<(String, String)> {
        match &self.status {
            RemoteStatus::Loaded {
                credential,
                assistants,
            } => assistants
                .iter()
                .find(|a| a.id == id)
                .map(|a| (a.id.clone(), credential.clone())),
            _ => None,
        }
    }
}
