//! Assistant types
//!
//! Records served by the assistants backend and the view-facing data derived from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An assistant record as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assistant {
    /// Backend identifier
    pub id: String,
    /// Serialized `AssistantDetails` JSON
    #[serde(default)]
    pub details: String,
    /// Credential used to reach the remote assistant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateTime<Utc>>,
}

impl Assistant {
    /// Parse the `details` field
    ///
    /// Returns `None` only when the field is not a JSON object. Fields with an
    /// unexpected type are read as absent and kept verbatim for saving.
    pub fn parsed_details(&self) -> Option<AssistantDetails> {
        let details = AssistantDetails::parse(&self.details);
        if details.is_none() {
            tracing::debug!("Unparseable details on assistant {}", self.id);
        }
        details
    }

    /// Card data for the list grid
    pub fn card_data(&self) -> CardData {
        let details = self.parsed_details().unwrap_or_default();
        CardData {
            name: details.name,
            description: details.instructions,
            icon_src: self.icon_src.clone(),
        }
    }
}

/// Parsed contents of `Assistant::details`
///
/// Only the fields the UI reads or edits are typed. Every other key, and any
/// typed key whose value has the wrong shape, stays in `extra` so a save
/// sends it back unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssistantDetails {
    /// Remote (OpenAI) assistant id
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub model: Option<String>,
    pub instructions: Option<String>,
    pub tools: Vec<Value>,
    pub extra: Map<String, Value>,
}

impl AssistantDetails {
    /// Parse a serialized details object
    pub fn parse(raw: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => Some(Self::from_map(map)),
            _ => None,
        }
    }

    pub fn from_map(mut extra: Map<String, Value>) -> Self {
        let mut take_str = |key: &str| {
            if extra.get(key).map_or(false, Value::is_string) {
                extra.remove(key).and_then(|v| v.as_str().map(str::to_string))
            } else {
                None
            }
        };
        let id = take_str("id");
        let name = take_str("name");
        let description = take_str("description");
        let model = take_str("model");
        let instructions = take_str("instructions");

        let tools = if extra.get("tools").map_or(false, Value::is_array) {
            match extra.remove("tools") {
                Some(Value::Array(tools)) => tools,
                _ => Vec::new(),
            }
        } else {
            Vec::new()
        };

        Self {
            id,
            name,
            description,
            model,
            instructions,
            tools,
            extra,
        }
    }

    /// JSON object with typed fields laid over the preserved keys
    pub fn to_value(&self) -> Value {
        let mut map = self.extra.clone();
        let typed = [
            ("id", &self.id),
            ("name", &self.name),
            ("description", &self.description),
            ("model", &self.model),
            ("instructions", &self.instructions),
        ];
        for (key, value) in typed {
            if let Some(value) = value {
                map.insert(key.to_string(), Value::String(value.clone()));
            }
        }
        if !self.tools.is_empty() {
            map.insert("tools".to_string(), Value::Array(self.tools.clone()));
        }
        Value::Object(map)
    }
}

/// Request body for creating or updating an assistant
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantInput {
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_src: Option<String>,
}

impl AssistantInput {
    /// Build a request body from parsed details
    pub fn new(
        details: &AssistantDetails,
        credential: Option<String>,
        icon_src: Option<String>,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            details: serde_json::to_string(&details.to_value())?,
            credential,
            icon_src,
        })
    }
}

/// An assistant living on the remote OpenAI account behind a credential
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OpenAiAssistant {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
}

impl OpenAiAssistant {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(&self.id)
    }
}

/// What a grid card shows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardData {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon_src: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assistant(details: &str) -> Assistant {
        Assistant {
            id: "a1".to_string(),
            details: details.to_string(),
            credential: None,
            icon_src: Some("/icons/bot.svg".to_string()),
            created_date: None,
            updated_date: None,
        }
    }

    #[test]
    fn test_card_data_from_valid_details() {
        let a = assistant(r#"{"name":"Helper","instructions":"Be nice","model":"gpt-4"}"#);
        let card = a.card_data();
        assert_eq!(card.name.as_deref(), Some("Helper"));
        assert_eq!(card.description.as_deref(), Some("Be nice"));
        assert_eq!(card.icon_src.as_deref(), Some("/icons/bot.svg"));
    }

    #[test]
    fn test_card_data_tolerates_bad_details() {
        let card = assistant("not json").card_data();
        assert_eq!(card.name, None);
        assert_eq!(card.description, None);
        assert!(card.icon_src.is_some());

        let card = assistant("").card_data();
        assert_eq!(card.name, None);
    }

    #[test]
    fn test_card_data_reads_valid_fields_next_to_bad_ones() {
        let card = assistant(r#"{"id":"asst_1","name":"Helper","instructions":"Hi","tools":null}"#)
            .card_data();
        assert_eq!(card.name.as_deref(), Some("Helper"));
        assert_eq!(card.description.as_deref(), Some("Hi"));

        let card = assistant(r#"{"name":42,"instructions":"Still here"}"#).card_data();
        assert_eq!(card.name, None);
        assert_eq!(card.description.as_deref(), Some("Still here"));
    }

    #[test]
    fn test_details_keep_unknown_and_mistyped_keys() {
        let raw = r#"{"id":"asst_9","name":"Nine","temperature":0.2,"top_p":0.9,"tool_resources":{"code_interpreter":{"file_ids":["f1"]}},"tools":null,"model":7}"#;
        let details = AssistantDetails::parse(raw).unwrap();
        assert_eq!(details.id.as_deref(), Some("asst_9"));
        assert_eq!(details.model, None);
        assert!(details.tools.is_empty());

        let saved = details.to_value();
        assert_eq!(saved["temperature"], serde_json::json!(0.2));
        assert_eq!(saved["top_p"], serde_json::json!(0.9));
        assert_eq!(saved["tool_resources"]["code_interpreter"]["file_ids"][0], "f1");
        assert_eq!(saved["tools"], Value::Null);
        assert_eq!(saved["model"], serde_json::json!(7));
        assert_eq!(saved["name"], "Nine");
    }

    #[test]
    fn test_non_object_details_do_not_parse() {
        assert!(AssistantDetails::parse("[1,2]").is_none());
        assert!(AssistantDetails::parse("\"text\"").is_none());
        assert!(AssistantDetails::parse("").is_none());
    }

    #[test]
    fn test_assistant_wire_format() {
        let json = r#"{
            "id": "42",
            "details": "{\"name\":\"X\"}",
            "credential": "cred-1",
            "iconSrc": "/x.png",
            "createdDate": "2024-01-02T03:04:05Z"
        }"#;
        let a: Assistant = serde_json::from_str(json).unwrap();
        assert_eq!(a.id, "42");
        assert_eq!(a.credential.as_deref(), Some("cred-1"));
        assert_eq!(a.icon_src.as_deref(), Some("/x.png"));
        assert!(a.created_date.is_some());
        assert!(a.updated_date.is_none());
    }

    #[test]
    fn test_input_serializes_details_as_string() {
        let details = AssistantDetails {
            name: Some("Y".to_string()),
            ..Default::default()
        };
        let input = AssistantInput::new(&details, Some("c".to_string()), None).unwrap();
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["details"], serde_json::json!(r#"{"name":"Y"}"#));
        assert_eq!(value["credential"], "c");
        assert!(value.get("iconSrc").is_none());
    }

    #[test]
    fn test_openai_display_name_falls_back_to_id() {
        let remote = OpenAiAssistant {
            id: "asst_1".to_string(),
            name: None,
            model: None,
            instructions: None,
        };
        assert_eq!(remote.display_name(), "asst_1");
    }
}
