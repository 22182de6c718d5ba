//! Import dialog: pick an assistant from a remote OpenAI account

use crate::app::AppState;
use crate::state::remote_list::{RemoteListState, RemoteStatus};
use crate::state::view::LoadDialogProps;
use crate::types::assistant::OpenAiAssistant;
use crate::ui::components::loading::Spinner;
use crate::ui::components::modal::{ErrorBanner, Modal, TextField};
use dioxus::prelude::*;

#[component]
pub fn LoadAssistantDialog(
    show: bool,
    dialog_props: Option<LoadDialogProps>,
    on_cancel: EventHandler<()>,
    on_assistant_selected: EventHandler<(String, String)>,
) -> Element {
    match dialog_props {
        Some(props) if show => rsx! {
            LoadAssistantPanel { props: props, on_cancel: on_cancel, on_assistant_selected: on_assistant_selected }
        },
        _ => rsx! {},
    }
}

#[component]
fn LoadAssistantPanel(
    on_cancel: EventHandler<()>,
    props: LoadDialogProps,
    on_assistant_selected: EventHandler<(String, String)>,
) -> Element {
    let app_state = use_context::<AppState>();
    let mut credential = use_signal(String::new);
    let mut remote = use_signal(RemoteListState::default);

    let api = app_state.api.clone();
    let handle_fetch = move |_| {
        let credential_id = credential().trim().to_string();
        let Some(generation) = remote.write().begin(&credential_id) else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            let result = api.list_openai_assistants(&credential_id).await;
            remote.write().finish(generation, result);
        });
    };

    rsx! {
        Modal {
            title: props.title.clone(),
            on_close: move |_| on_cancel.call(()),
            footer: rsx! {
                div { class: "flex-1" }
                button {
                    class: "px-4 py-2.5 rounded-lg bg-[var(--bg-tertiary)] text-[var(--text-secondary)] font-medium hover:bg-[var(--bg-hover)] hover:text-[var(--text-primary)] transition-colors",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            },

            div {
                class: "flex items-end gap-2",
                div {
                    class: "flex-1",
                    TextField {
                        label: "Credential",
                        value: credential(),
                        placeholder: "Credential id",
                        oninput: move |value| credential.set(value),
                    }
                }
                button {
                    class: "flex items-center gap-2 px-4 py-2 rounded-md bg-[var(--accent-primary)] text-white text-sm font-medium hover:bg-[var(--accent-hover)] transition-colors disabled:opacity-50",
                    disabled: remote.read().is_loading(),
                    onclick: handle_fetch,
                    "Fetch"
                }
            }

            match remote.read().status.clone() {
                RemoteStatus::Idle => rsx! {},
                RemoteStatus::Loading => rsx! {
                    div {
                        class: "flex items-center justify-center gap-3 py-6 text-[var(--text-secondary)]",
                        Spinner {}
                        span { class: "text-sm", "Loading..." }
                    }
                },
                RemoteStatus::Failed(message) => rsx! {
                    ErrorBanner { message: message }
                },
                RemoteStatus::Loaded { assistants, .. } if assistants.is_empty() => rsx! {
                    div {
                        class: "py-6 text-center text-sm text-[var(--text-tertiary)]",
                        "No assistants found for this credential"
                    }
                },
                RemoteStatus::Loaded { assistants, .. } => rsx! {
                    div {
                        class: "flex flex-col gap-1",
                        for assistant in assistants {
                            RemoteAssistantRow {
                                key: "{assistant.id}",
                                assistant: assistant.clone(),
                                onclick: move |id: String| {
                                    let selection = remote.read().select(&id);
                                    if let Some(selection) = selection {
                                        on_assistant_selected.call(selection);
                                    }
                                },
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn RemoteAssistantRow(assistant: OpenAiAssistant, onclick: EventHandler<String>) -> Element {
    let id = assistant.id.clone();
    let model = assistant.model.clone().unwrap_or_default();

    rsx! {
        button {
            class: "flex items-center justify-between gap-3 px-3 py-3 text-sm text-left rounded-md transition-colors hover:bg-[var(--bg-hover)] text-[var(--text-secondary)] hover:text-[var(--text-primary)]",
            onclick: move |_| onclick.call(id.clone()),
            span { class: "truncate font-medium", "{assistant.display_name()}" }
            span { class: "shrink-0 text-[10px] font-mono text-[var(--text-tertiary)]", "{model}" }
        }
    }
}
