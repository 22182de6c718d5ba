//! View state
//!
//! Pure state machines for the views, plus the runner that turns their
//! commands into backend calls.

pub mod assistant_form;
pub mod remote_list;
pub mod view;

use crate::api::{ApiError, AssistantsApi};
use crate::types::assistant::Assistant;
use view::Command;

/// Result of running a `Command` against the backend
#[derive(Debug)]
pub enum CommandOutput {
    Assistants(Result<Vec<Assistant>, ApiError>),
}

/// Run a command produced by a view transition
pub async fn execute(command: Command, api: &dyn AssistantsApi) -> CommandOutput {
    match command {
        Command::FetchAssistants => {
            tracing::debug!("Fetching assistants");
            CommandOutput::Assistants(api.get_all_assistants().await)
        }
    }
}
