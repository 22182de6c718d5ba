//! Create/edit dialog form model

use crate::state::view::{AssistantDialogProps, DialogMode};
use crate::types::assistant::{AssistantDetails, AssistantInput};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("Assistant name is required")]
    NameRequired,
    #[error("Failed to serialize assistant details: {0}")]
    Json(#[from] serde_json::Error),
}

/// Editable copy of an assistant's fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssistantDraft {
    pub name: String,
    pub description: String,
    pub model: String,
    pub instructions: String,
    pub icon_src: String,
    /// Details fields the form does not edit, carried through on save
    base: AssistantDetails,
}

impl AssistantDraft {
    /// Seed the form from the dialog props
    pub fn from_props(props: &AssistantDialogProps) -> Self {
        let (base, icon_src) = match (&props.mode, &props.data) {
            (DialogMode::Edit, Some(assistant)) => (
                assistant.parsed_details().unwrap_or_default(),
                assistant.icon_src.clone().unwrap_or_default(),
            ),
            _ => (
                AssistantDetails {
                    id: props.selected_openai_assistant_id.clone(),
                    ..Default::default()
                },
                String::new(),
            ),
        };

        Self {
            name: base.name.clone().unwrap_or_default(),
            description: base.description.clone().unwrap_or_default(),
            model: base.model.clone().unwrap_or_default(),
            instructions: base.instructions.clone().unwrap_or_default(),
            icon_src,
            base,
        }
    }

    /// Remote assistant this draft is linked to, if any
    pub fn openai_assistant_id(&self) -> Option<&str> {
        self.base.id.as_deref()
    }

    /// Build the request body
    pub fn to_input(&self, credential: Option<String>) -> Result<AssistantInput, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::NameRequired);
        }

        let details = AssistantDetails {
            name: Some(name.to_string()),
            description: non_empty(&self.description),
            model: non_empty(&self.model),
            instructions: non_empty(&self.instructions),
            ..self.base.clone()
        };

        Ok(AssistantInput::new(
            &details,
            credential.filter(|c| !c.is_empty()),
            non_empty(&self.icon_src),
        )?)
    }
}

/// Progress of the dialog's backend request
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormStatus {
    #[default]
    Editing,
    Saving,
    /// Delete was clicked and waits for a second confirmation
    ConfirmingDelete,
    Deleting,
    Failed(String),
}

impl FormStatus {
    pub fn is_busy(&self) -> bool {
        matches!(self, FormStatus::Saving | FormStatus::Deleting)
    }

    /// Whether Cancel or a backdrop click may close the dialog.
    /// A request in flight must finish so its confirm callback runs.
    pub fn can_dismiss(&self) -> bool {
        !self.is_busy()
    }

    pub fn begin_save(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        *self = FormStatus::Saving;
        true
    }

    pub fn request_delete(&mut self) {
        if !self.is_busy() {
            *self = FormStatus::ConfirmingDelete;
        }
    }

    /// Start the delete; only valid after `request_delete`
    pub fn begin_delete(&mut self) -> bool {
        if *self != FormStatus::ConfirmingDelete {
            return false;
        }
        *self = FormStatus::Deleting;
        true
    }

    pub fn abort_delete(&mut self) {
        if *self == FormStatus::ConfirmingDelete {
            *self = FormStatus::Editing;
        }
    }

    pub fn finish(&mut self) {
        *self = FormStatus::Editing;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = FormStatus::Failed(message.into());
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FormStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::assistant::Assistant;

    fn record() -> Assistant {
        Assistant {
            id: "9".to_string(),
            details: r#"{"id":"asst_9","name":"Nine","model":"gpt-4","instructions":"Count","tools":[{"type":"code_interpreter"}]}"#.to_string(),
            credential: Some("cred".to_string()),
            icon_src: Some("/nine.png".to_string()),
            created_date: None,
            updated_date: None,
        }
    }

    #[test]
    fn test_add_draft_is_blank() {
        let draft = AssistantDraft::from_props(&AssistantDialogProps::add(None, None));
        assert_eq!(draft.name, "");
        assert!(draft.openai_assistant_id().is_none());
    }

    #[test]
    fn test_import_seed_carries_remote_id() {
        let props = AssistantDialogProps::add(Some("asst_x".to_string()), Some("cred".to_string()));
        let mut draft = AssistantDraft::from_props(&props);
        assert_eq!(draft.openai_assistant_id(), Some("asst_x"));

        draft.name = "Imported".to_string();
        let input = draft.to_input(props.credential.clone()).unwrap();
        let details = AssistantDetails::parse(&input.details).unwrap();
        assert_eq!(details.id.as_deref(), Some("asst_x"));
        assert_eq!(input.credential.as_deref(), Some("cred"));
    }

    #[test]
    fn test_edit_draft_keeps_unedited_fields() {
        let props = AssistantDialogProps::edit(record());
        let mut draft = AssistantDraft::from_props(&props);
        assert_eq!(draft.name, "Nine");
        assert_eq!(draft.model, "gpt-4");
        assert_eq!(draft.icon_src, "/nine.png");

        draft.instructions = "  ".to_string();
        let input = draft.to_input(props.credential.clone()).unwrap();
        let details = AssistantDetails::parse(&input.details).unwrap();
        assert_eq!(details.id.as_deref(), Some("asst_9"));
        assert_eq!(details.tools.len(), 1);
        assert_eq!(details.instructions, None);
        assert_eq!(input.icon_src.as_deref(), Some("/nine.png"));
    }

    #[test]
    fn test_edit_save_preserves_backend_owned_keys() {
        let mut assistant = record();
        assistant.details = r#"{"id":"asst_9","name":"Nine","temperature":0.2,"top_p":0.9,"tool_resources":{"file_search":{"vector_store_ids":["vs_1"]}},"files":["f1"]}"#.to_string();
        let props = AssistantDialogProps::edit(assistant);

        let mut draft = AssistantDraft::from_props(&props);
        draft.name = "Nine v2".to_string();
        let input = draft.to_input(props.credential.clone()).unwrap();

        let saved: serde_json::Value = serde_json::from_str(&input.details).unwrap();
        assert_eq!(saved["name"], "Nine v2");
        assert_eq!(saved["id"], "asst_9");
        assert_eq!(saved["temperature"], serde_json::json!(0.2));
        assert_eq!(saved["top_p"], serde_json::json!(0.9));
        assert_eq!(saved["tool_resources"]["file_search"]["vector_store_ids"][0], "vs_1");
        assert_eq!(saved["files"][0], "f1");
    }

    #[test]
    fn test_edit_partially_valid_details_keeps_remote_id() {
        let mut assistant = record();
        assistant.details = r#"{"id":"asst_1","name":"Helper","instructions":"Hi","tools":null}"#.to_string();
        let props = AssistantDialogProps::edit(assistant);

        let draft = AssistantDraft::from_props(&props);
        assert_eq!(draft.name, "Helper");
        assert_eq!(draft.instructions, "Hi");
        assert_eq!(draft.openai_assistant_id(), Some("asst_1"));

        let input = draft.to_input(None).unwrap();
        let saved: serde_json::Value = serde_json::from_str(&input.details).unwrap();
        assert_eq!(saved["id"], "asst_1");
        assert_eq!(saved["tools"], serde_json::Value::Null);
    }

    #[test]
    fn test_busy_dialog_cannot_be_dismissed() {
        let mut status = FormStatus::default();
        assert!(status.can_dismiss());

        assert!(status.begin_save());
        assert!(!status.can_dismiss());
        assert!(!status.begin_save());

        status.fail("Backend returned 500: boom");
        assert!(status.can_dismiss());
        assert_eq!(status.error(), Some("Backend returned 500: boom"));
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let mut status = FormStatus::default();
        assert!(!status.begin_delete());

        status.request_delete();
        assert_eq!(status, FormStatus::ConfirmingDelete);
        status.abort_delete();
        assert_eq!(status, FormStatus::Editing);

        status.request_delete();
        assert!(status.begin_delete());
        assert!(!status.can_dismiss());
        status.request_delete();
        assert_eq!(status, FormStatus::Deleting);
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut draft = AssistantDraft::from_props(&AssistantDialogProps::add(None, None));
        draft.name = "   ".to_string();
        assert!(matches!(draft.to_input(None), Err(FormError::NameRequired)));
    }
}
