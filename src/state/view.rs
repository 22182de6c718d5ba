//! Assistants list view state
//!
//! Every user action and fetch completion is a transition on `ViewState`.
//! Transitions that need a side effect return a `Command` for the caller
//! to run; the state itself never performs I/O.

use crate::types::assistant::{Assistant, CardData};

/// Number of placeholders shown while the list is loading
pub const SKELETON_COUNT: usize = 3;
/// Columns of the card grid
pub const GRID_COLUMNS: usize = 3;

pub const LOAD_DIALOG_TITLE: &str = "Load Existing Assistant";
pub const ADD_DIALOG_TITLE: &str = "Add New Assistant";
pub const EDIT_DIALOG_TITLE: &str = "Edit Assistant";
pub const EMPTY_MESSAGE: &str = "No Assistants Added Yet";

/// Side effects requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Request the assistant list from the backend
    FetchAssistants,
}

/// Whether the create dialog adds a new record or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Add,
    Edit,
}

/// Props for the create/edit dialog
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantDialogProps {
    pub title: String,
    pub mode: DialogMode,
    pub cancel_button_name: String,
    pub confirm_button_name: String,
    /// Remote assistant picked in the import dialog
    pub selected_openai_assistant_id: Option<String>,
    pub credential: Option<String>,
    /// Record being edited
    pub data: Option<Assistant>,
}

impl AssistantDialogProps {
    pub fn add(selected_openai_assistant_id: Option<String>, credential: Option<String>) -> Self {
        Self {
            title: ADD_DIALOG_TITLE.to_string(),
            mode: DialogMode::Add,
            cancel_button_name: "Cancel".to_string(),
            confirm_button_name: "Add".to_string(),
            selected_openai_assistant_id,
            credential,
            data: None,
        }
    }

    pub fn edit(assistant: Assistant) -> Self {
        Self {
            title: EDIT_DIALOG_TITLE.to_string(),
            mode: DialogMode::Edit,
            cancel_button_name: "Cancel".to_string(),
            confirm_button_name: "Save".to_string(),
            selected_openai_assistant_id: None,
            credential: assistant.credential.clone(),
            data: Some(assistant),
        }
    }
}

/// Props for the import dialog
#[derive(Debug, Clone, PartialEq)]
pub struct LoadDialogProps {
    pub title: String,
}

impl Default for LoadDialogProps {
    fn default() -> Self {
        Self {
            title: LOAD_DIALOG_TITLE.to_string(),
        }
    }
}

/// Fetch lifecycle of the assistant list
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Loaded(Vec<Assistant>),
    Empty,
    Failed(String),
}

/// What the list area should render
#[derive(Debug, Clone, PartialEq)]
pub enum RenderPlan {
    Skeletons(usize),
    Cards(Vec<CardData>),
    Empty,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub list: ListState,
    pub show_assistant_dialog: bool,
    pub assistant_dialog_props: Option<AssistantDialogProps>,
    pub show_load_dialog: bool,
    pub load_dialog_props: Option<LoadDialogProps>,
    /// Id of the most recent fetch; older results are dropped
    fetch_generation: u64,
}

impl ViewState {
    /// State on mount, with the initial list request
    pub fn new() -> (Self, Command) {
        let state = Self {
            list: ListState::Loading,
            show_assistant_dialog: false,
            assistant_dialog_props: None,
            show_load_dialog: false,
            load_dialog_props: None,
            fetch_generation: 0,
        };
        (state, Command::FetchAssistants)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.list, ListState::Loading)
    }

    /// Open the import dialog
    pub fn load_existing(&mut self) {
        self.load_dialog_props = Some(LoadDialogProps::default());
        self.show_load_dialog = true;
    }

    /// Open the create dialog, optionally seeded from an import selection
    pub fn add_new(&mut self, selected_openai_assistant_id: Option<String>, credential: Option<String>) {
        self.assistant_dialog_props = Some(AssistantDialogProps::add(
            selected_openai_assistant_id,
            credential,
        ));
        self.show_assistant_dialog = true;
    }

    /// Open the create dialog in edit mode for `assistant`
    pub fn edit(&mut self, assistant: Assistant) {
        tracing::debug!("Editing assistant {}", assistant.id);
        self.assistant_dialog_props = Some(AssistantDialogProps::edit(assistant));
        self.show_assistant_dialog = true;
    }

    /// Import dialog picked a remote assistant
    pub fn on_assistant_selected(&mut self, id: String, credential: String) {
        self.show_load_dialog = false;
        self.add_new(Some(id), Some(credential));
    }

    /// Create/edit dialog finished successfully
    pub fn on_confirm(&mut self) -> Command {
        self.show_assistant_dialog = false;
        self.list = ListState::Loading;
        Command::FetchAssistants
    }

    pub fn cancel_assistant_dialog(&mut self) {
        self.show_assistant_dialog = false;
    }

    pub fn cancel_load_dialog(&mut self) {
        self.show_load_dialog = false;
    }

    /// Mark a fetch as in flight and return its generation
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_generation += 1;
        self.list = ListState::Loading;
        self.fetch_generation
    }

    /// Apply a fetch result
    ///
    /// Returns false when the result belongs to a superseded fetch and was dropped.
    pub fn finish_fetch<E: std::fmt::Display>(
        &mut self,
        generation: u64,
        result: Result<Vec<Assistant>, E>,
    ) -> bool {
        if generation != self.fetch_generation {
            tracing::debug!(
                "Dropping stale fetch result {} (latest {})",
                generation,
                self.fetch_generation
            );
            return false;
        }

        self.list = match result {
            Ok(assistants) if assistants.is_empty() => ListState::Empty,
            Ok(assistants) => ListState::Loaded(assistants),
            Err(e) => {
                tracing::error!("Failed to load assistants: {}", e);
                ListState::Failed(e.to_string())
            }
        };
        true
    }

    /// Assistant at grid position `index`, if loaded
    pub fn assistant_at(&self, index: usize) -> Option<&Assistant> {
        match &self.list {
            ListState::Loaded(assistants) => assistants.get(index),
            _ => None,
        }
    }

    pub fn render_plan(&self) -> RenderPlan {
        match &self.list {
            ListState::Loading => RenderPlan::Skeletons(SKELETON_COUNT),
            ListState::Loaded(assistants) => {
                RenderPlan::Cards(assistants.iter().map(Assistant::card_data).collect())
            }
            ListState::Empty => RenderPlan::Empty,
            ListState::Failed(message) => RenderPlan::Failed(message.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assistant(id: &str, details: &str) -> Assistant {
        Assistant {
            id: id.to_string(),
            details: details.to_string(),
            credential: Some("cred".to_string()),
            icon_src: None,
            created_date: None,
            updated_date: None,
        }
    }

    fn loaded(assistants: Vec<Assistant>) -> ViewState {
        let (mut state, _) = ViewState::new();
        let generation = state.begin_fetch();
        assert!(state.finish_fetch::<String>(generation, Ok(assistants)));
        state
    }

    #[test]
    fn test_mount_requests_list() {
        let (state, command) = ViewState::new();
        assert_eq!(command, Command::FetchAssistants);
        assert!(state.is_loading());
        assert!(!state.show_assistant_dialog);
        assert!(!state.show_load_dialog);
    }

    #[test]
    fn test_loading_shows_three_skeletons() {
        let (mut state, _) = ViewState::new();
        state.begin_fetch();
        assert_eq!(state.render_plan(), RenderPlan::Skeletons(3));
    }

    #[test]
    fn test_empty_list_renders_empty_state() {
        let state = loaded(vec![]);
        assert_eq!(state.list, ListState::Empty);
        assert_eq!(state.render_plan(), RenderPlan::Empty);
    }

    #[test]
    fn test_one_card_per_record() {
        let state = loaded(vec![
            assistant("1", r#"{"name":"One","instructions":"First"}"#),
            assistant("2", r#"{"name":"Two","instructions":"Second"}"#),
            assistant("3", "{broken"),
        ]);

        let RenderPlan::Cards(cards) = state.render_plan() else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].name.as_deref(), Some("One"));
        assert_eq!(cards[0].description.as_deref(), Some("First"));
        assert_eq!(cards[1].name.as_deref(), Some("Two"));
        assert_eq!(cards[2].name, None);
        assert_eq!(state.assistant_at(1).map(|a| a.id.as_str()), Some("2"));
        assert!(state.assistant_at(3).is_none());
    }

    #[test]
    fn test_failed_fetch_is_distinct_from_empty() {
        let (mut state, _) = ViewState::new();
        let generation = state.begin_fetch();
        state.finish_fetch(generation, Err::<Vec<Assistant>, _>("connection refused"));
        assert_eq!(
            state.render_plan(),
            RenderPlan::Failed("connection refused".to_string())
        );
    }

    #[test]
    fn test_add_opens_unseeded_create_dialog() {
        let (mut state, _) = ViewState::new();
        state.add_new(None, None);

        assert!(state.show_assistant_dialog);
        let props = state.assistant_dialog_props.unwrap();
        assert_eq!(props.mode, DialogMode::Add);
        assert_eq!(props.title, ADD_DIALOG_TITLE);
        assert_eq!(props.confirm_button_name, "Add");
        assert!(props.selected_openai_assistant_id.is_none());
        assert!(props.credential.is_none());
        assert!(props.data.is_none());
    }

    #[test]
    fn test_edit_seeds_dialog_with_record() {
        let record = assistant("7", r#"{"name":"Seven"}"#);
        let (mut state, _) = ViewState::new();
        state.edit(record.clone());

        let props = state.assistant_dialog_props.unwrap();
        assert_eq!(props.mode, DialogMode::Edit);
        assert_eq!(props.title, EDIT_DIALOG_TITLE);
        assert_eq!(props.confirm_button_name, "Save");
        assert_eq!(props.data, Some(record));
    }

    #[test]
    fn test_load_existing_opens_import_dialog() {
        let (mut state, _) = ViewState::new();
        state.load_existing();
        assert!(state.show_load_dialog);
        assert_eq!(state.load_dialog_props.unwrap().title, LOAD_DIALOG_TITLE);
    }

    #[test]
    fn test_import_selection_opens_seeded_create_dialog() {
        let (mut state, _) = ViewState::new();
        state.load_existing();
        state.on_assistant_selected("asst_abc".to_string(), "cred-9".to_string());

        assert!(!state.show_load_dialog);
        assert!(state.show_assistant_dialog);
        let props = state.assistant_dialog_props.unwrap();
        assert_eq!(props.mode, DialogMode::Add);
        assert_eq!(props.selected_openai_assistant_id.as_deref(), Some("asst_abc"));
        assert_eq!(props.credential.as_deref(), Some("cred-9"));
    }

    #[test]
    fn test_confirm_closes_dialog_and_refetches_once() {
        let mut state = loaded(vec![assistant("1", r#"{"name":"One"}"#)]);
        state.add_new(None, None);

        let commands = vec![state.on_confirm()];
        assert!(!state.show_assistant_dialog);
        assert_eq!(commands, vec![Command::FetchAssistants]);
        assert!(state.is_loading());
        assert_eq!(state.render_plan(), RenderPlan::Skeletons(SKELETON_COUNT));
    }

    #[test]
    fn test_cancel_has_no_side_effects() {
        let state_before = loaded(vec![assistant("1", "{}")]);
        let mut state = state_before.clone();
        state.add_new(None, None);
        state.cancel_assistant_dialog();
        state.load_existing();
        state.cancel_load_dialog();

        assert!(!state.show_assistant_dialog);
        assert!(!state.show_load_dialog);
        assert_eq!(state.list, state_before.list);
    }

    #[test]
    fn test_stale_fetch_result_is_dropped() {
        let (mut state, _) = ViewState::new();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        assert!(state.finish_fetch::<String>(second, Ok(vec![assistant("new", "{}")])));
        assert!(!state.finish_fetch::<String>(first, Ok(vec![])));
        assert_eq!(state.assistant_at(0).map(|a| a.id.as_str()), Some("new"));
    }
}
