//! Assistants list view
//!
//! Grid of assistant cards with Add / Load actions. All state lives in a
//! `ViewState` signal; event handlers call its transitions and hand any
//! returned `Command` to `dispatch`.

pub mod assistant_dialog;
pub mod load_dialog;

use crate::api::AssistantsApi;
use crate::app::AppState;
use crate::state::view::{Command, RenderPlan, ViewState, EMPTY_MESSAGE, GRID_COLUMNS};
use crate::state::{execute, CommandOutput};
use crate::ui::assistants::assistant_dialog::AssistantDialog;
use crate::ui::assistants::load_dialog::LoadAssistantDialog;
use crate::ui::components::empty_state::EmptyState;
use crate::ui::components::item_card::ItemCard;
use crate::ui::components::loading::Skeleton;
use crate::ui::components::modal::ErrorBanner;
use crate::ui::components::view_header::ViewHeader;
use dioxus::prelude::*;
use std::sync::Arc;

const GRID_CLASS: &str = "grid grid-cols-3 gap-6";

/// Inline grid layout so the columns hold without a utility stylesheet
fn grid_style() -> String {
    format!("display: grid; grid-template-columns: repeat({GRID_COLUMNS}, minmax(0, 1fr)); gap: 24px;")
}

/// Run a view command in the background and feed the result back into the view
fn dispatch(command: Command, mut view: Signal<ViewState>, api: Arc<dyn AssistantsApi>) {
    spawn(async move {
        let generation = view.write().begin_fetch();
        match execute(command, api.as_ref()).await {
            CommandOutput::Assistants(result) => {
                view.write().finish_fetch(generation, result);
            }
        }
    });
}

#[component]
pub fn AssistantsView() -> Element {
    let app_state = use_context::<AppState>();

    let mut mount_command = None;
    let mut view = use_signal(|| {
        let (state, command) = ViewState::new();
        mount_command = Some(command);
        state
    });

    let api_for_mount = app_state.api.clone();
    use_hook(move || {
        if let Some(command) = mount_command {
            dispatch(command, view, api_for_mount);
        }
    });

    let api_for_confirm = app_state.api.clone();
    let handle_confirm = move |_| {
        let command = view.write().on_confirm();
        dispatch(command, view, api_for_confirm.clone());
    };

    let api_for_retry = app_state.api.clone();
    let handle_retry = move |_| {
        dispatch(Command::FetchAssistants, view, api_for_retry.clone());
    };

    let plan = view.read().render_plan();
    let grid = grid_style();

    rsx! {
        div {
            class: "flex-1 overflow-y-auto p-8",

            div {
                class: "max-w-6xl mx-auto w-full flex flex-col gap-6",

                ViewHeader {
                    title: "OpenAI Assistants",
                    button {
                        class: "flex items-center gap-2 h-10 px-4 rounded-lg border border-[var(--border-subtle)] text-sm font-medium text-[var(--accent-primary)] hover:border-[var(--border-focus)] hover:bg-[var(--bg-hover)] transition-colors",
                        onclick: move |_| view.write().load_existing(),
                        svg { width: "16", height: "16", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2", stroke_linecap: "round", stroke_linejoin: "round", path { d: "M14 3v4a1 1 0 0 0 1 1h4" }, path { d: "M5 13V5a2 2 0 0 1 2-2h7l5 5v11a2 2 0 0 1-2 2h-5.5M2 19h7m-3-3l3 3-3 3" } }
                        "Load"
                    }
                    button {
                        class: "flex items-center gap-2 h-10 px-4 rounded-lg bg-[var(--accent-primary)] text-white text-sm font-medium hover:bg-[var(--accent-hover)] transition-colors active:scale-95",
                        onclick: move |_| view.write().add_new(None, None),
                        svg { width: "16", height: "16", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2", stroke_linecap: "round", stroke_linejoin: "round", path { d: "M12 5v14M5 12h14" } }
                        "Add"
                    }
                }

                match plan {
                    RenderPlan::Skeletons(count) => rsx! {
                        div {
                            class: GRID_CLASS,
                            style: "{grid}",
                            for i in 0..count {
                                Skeleton { key: "{i}", height: 160 }
                            }
                        }
                    },
                    RenderPlan::Cards(cards) => rsx! {
                        div {
                            class: GRID_CLASS,
                            style: "{grid}",
                            for (index, card) in cards.into_iter().enumerate() {
                                ItemCard {
                                    key: "{index}",
                                    data: card,
                                    onclick: move |_| {
                                        let selected = view.read().assistant_at(index).cloned();
                                        if let Some(assistant) = selected {
                                            view.write().edit(assistant);
                                        }
                                    },
                                }
                            }
                        }
                    },
                    RenderPlan::Empty => rsx! {
                        EmptyState { message: EMPTY_MESSAGE.to_string() }
                    },
                    RenderPlan::Failed(message) => rsx! {
                        div {
                            class: "flex flex-col items-center gap-3 py-12",
                            ErrorBanner { message: format!("Could not load assistants: {message}") }
                            button {
                                class: "px-4 py-2 rounded-lg border border-[var(--border-subtle)] text-sm text-[var(--text-secondary)] hover:bg-[var(--bg-hover)] hover:text-[var(--text-primary)] transition-colors",
                                onclick: handle_retry,
                                "Retry"
                            }
                        }
                    },
                }
            }
        }

        LoadAssistantDialog {
            show: view.read().show_load_dialog,
            dialog_props: view.read().load_dialog_props.clone(),
            on_cancel: move |_| view.write().cancel_load_dialog(),
            on_assistant_selected: move |(id, credential): (String, String)| {
                view.write().on_assistant_selected(id, credential);
            },
        }

        AssistantDialog {
            show: view.read().show_assistant_dialog,
            dialog_props: view.read().assistant_dialog_props.clone(),
            on_cancel: move |_| view.write().cancel_assistant_dialog(),
            on_confirm: handle_confirm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_style_has_three_columns() {
        let style = grid_style();
        assert!(style.contains("display: grid"));
        assert!(style.contains("repeat(3, minmax(0, 1fr))"));
    }
}
