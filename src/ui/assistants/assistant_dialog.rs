//! Create/edit assistant dialog

use crate::app::AppState;
use crate::state::assistant_form::{AssistantDraft, FormStatus};
use crate::state::view::{AssistantDialogProps as DialogProps, DialogMode};
use crate::ui::components::loading::Spinner;
use crate::ui::components::modal::{ErrorBanner, Modal, TextField};
use dioxus::prelude::*;

#[component]
pub fn AssistantDialog(
    show: bool,
    dialog_props: Option<DialogProps>,
    on_cancel: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    // The form mounts fresh on every open so it reseeds from the props.
    match dialog_props {
        Some(props) if show => rsx! {
            AssistantForm { props: props, on_cancel: on_cancel, on_confirm: on_confirm }
        },
        _ => rsx! {},
    }
}

#[component]
fn AssistantForm(
    on_cancel: EventHandler<()>,
    props: DialogProps,
    on_confirm: EventHandler<()>,
) -> Element {
    let app_state = use_context::<AppState>();
    let initial = props.clone();
    let mut draft = use_signal(move || AssistantDraft::from_props(&initial));
    let mut status = use_signal(FormStatus::default);

    let props_for_save = props.clone();
    let api_for_save = app_state.api.clone();
    let handle_save = move |_| {
        let input = match draft.read().to_input(props_for_save.credential.clone()) {
            Ok(input) => input,
            Err(e) => {
                status.write().fail(e.to_string());
                return;
            }
        };
        if !status.write().begin_save() {
            return;
        }
        let api = api_for_save.clone();
        let props = props_for_save.clone();
        spawn(async move {
            let result = match (props.mode, props.data.as_ref()) {
                (DialogMode::Edit, Some(existing)) => api.update_assistant(&existing.id, &input).await,
                _ => api.create_assistant(&input).await,
            };
            match result {
                Ok(_) => {
                    status.write().finish();
                    on_confirm.call(());
                }
                Err(e) => {
                    tracing::error!("Failed to save assistant: {}", e);
                    status.write().fail(e.to_string());
                }
            }
        });
    };

    let existing_id = props.data.as_ref().map(|a| a.id.clone());
    let api_for_delete = app_state.api.clone();
    let handle_delete = move |_| {
        let Some(id) = existing_id.clone() else {
            return;
        };
        if !status.write().begin_delete() {
            return;
        }
        let api = api_for_delete.clone();
        spawn(async move {
            match api.delete_assistant(&id).await {
                Ok(()) => {
                    status.write().finish();
                    on_confirm.call(());
                }
                Err(e) => {
                    tracing::error!("Failed to delete assistant {}: {}", id, e);
                    status.write().fail(e.to_string());
                }
            }
        });
    };

    let dismiss = move || {
        if status.read().can_dismiss() {
            on_cancel.call(());
        }
    };

    let remote_id = draft.read().openai_assistant_id().map(str::to_string);
    let is_edit = props.mode == DialogMode::Edit;
    let busy = status.read().is_busy();
    let confirming_delete = *status.read() == FormStatus::ConfirmingDelete;
    let error = status.read().error().map(str::to_string);

    rsx! {
        Modal {
            title: props.title.clone(),
            dismissible: !busy,
            on_close: move |_| dismiss(),
            footer: rsx! {
                if confirming_delete {
                    span {
                        class: "flex-1 self-center text-sm text-[var(--text-error)]",
                        "Delete this assistant?"
                    }
                    button {
                        class: "px-4 py-2.5 rounded-lg bg-[var(--bg-tertiary)] text-[var(--text-secondary)] font-medium hover:bg-[var(--bg-hover)] hover:text-[var(--text-primary)] transition-colors",
                        onclick: move |_| status.write().abort_delete(),
                        "Keep"
                    }
                    button {
                        class: "px-4 py-2.5 rounded-lg bg-[var(--text-error)] text-white font-medium transition-colors",
                        onclick: handle_delete,
                        "Delete"
                    }
                } else {
                    if is_edit {
                        button {
                            class: "flex items-center gap-2 px-4 py-2.5 rounded-lg text-[var(--text-error)] font-medium hover:bg-[var(--bg-error-subtle)] transition-colors disabled:opacity-50",
                            disabled: busy,
                            onclick: move |_| status.write().request_delete(),
                            if *status.read() == FormStatus::Deleting {
                                Spinner { size: 14 }
                            }
                            "Delete"
                        }
                    }
                    div { class: "flex-1" }
                    button {
                        class: "px-4 py-2.5 rounded-lg bg-[var(--bg-tertiary)] text-[var(--text-secondary)] font-medium hover:bg-[var(--bg-hover)] hover:text-[var(--text-primary)] transition-colors disabled:opacity-50",
                        disabled: busy,
                        onclick: move |_| dismiss(),
                        "{props.cancel_button_name}"
                    }
                    button {
                        class: "flex items-center gap-2 px-4 py-2.5 rounded-lg bg-[var(--accent-primary)] text-white font-medium hover:bg-[var(--accent-hover)] transition-colors disabled:opacity-50",
                        disabled: busy,
                        onclick: handle_save,
                        if *status.read() == FormStatus::Saving {
                            Spinner { size: 14 }
                        }
                        "{props.confirm_button_name}"
                    }
                }
            },

            if let Some(message) = error {
                ErrorBanner { message: message }
            }

            if let Some(remote_id) = remote_id {
                TextField {
                    label: "OpenAI Assistant",
                    value: remote_id,
                    oninput: move |_| {},
                    disabled: true,
                }
            }

            TextField {
                label: "Name",
                value: draft.read().name.clone(),
                placeholder: "My Assistant",
                oninput: move |value| draft.write().name = value,
            }
            TextField {
                label: "Description",
                value: draft.read().description.clone(),
                oninput: move |value| draft.write().description = value,
            }
            TextField {
                label: "Model",
                value: draft.read().model.clone(),
                placeholder: "gpt-4o",
                oninput: move |value| draft.write().model = value,
            }
            TextField {
                label: "Icon URL",
                value: draft.read().icon_src.clone(),
                oninput: move |value| draft.write().icon_src = value,
            }

            label {
                class: "flex flex-col gap-1.5",
                span {
                    class: "text-xs uppercase tracking-wider text-[var(--text-tertiary)]",
                    "Instructions"
                }
                textarea {
                    class: "w-full min-h-[120px] bg-[var(--bg-input)] border border-[var(--border-subtle)] text-[var(--text-primary)] text-sm rounded-md py-2 px-3 focus:outline-none focus:border-[var(--accent-primary)] resize-y",
                    value: "{draft.read().instructions}",
                    oninput: move |evt| draft.write().instructions = evt.value(),
                }
            }
        }
    }
}
