//! Modal dialog chrome
//!
//! Backdrop, header, scrollable body and footer shared by the dialogs.

use dioxus::prelude::*;

#[component]
pub fn Modal(
    title: String,
    on_close: EventHandler<()>,
    children: Element,
    footer: Element,
    // Backdrop clicks are ignored while false
    #[props(default = true)]
    dismissible: bool,
) -> Element {
    rsx! {
        // Backdrop
        div {
            class: "fixed inset-0 bg-black/60 backdrop-blur-sm z-50 flex items-center justify-center p-4",
            onclick: move |_| {
                if dismissible {
                    on_close.call(());
                }
            },

            // Dialog
            div {
                class: "w-full max-w-xl max-h-[90vh] flex flex-col bg-[var(--bg-secondary)] rounded-2xl border border-[var(--border-subtle)] shadow-2xl overflow-hidden",
                onclick: move |evt| evt.stop_propagation(),

                div {
                    class: "p-6 border-b border-[var(--border-subtle)]",
                    h2 {
                        class: "text-lg font-semibold text-[var(--text-primary)]",
                        "{title}"
                    }
                }

                div {
                    class: "p-6 space-y-4 overflow-y-auto",
                    {children}
                }

                div {
                    class: "p-6 border-t border-[var(--border-subtle)] flex gap-3",
                    {footer}
                }
            }
        }
    }
}

/// Inline error banner
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div {
            class: "w-full p-3 bg-[var(--bg-error-subtle)] border border-[var(--border-error-subtle)] rounded-lg text-sm text-[var(--text-error)]",
            "{message}"
        }
    }
}

/// Labelled single-line text input
#[component]
pub fn TextField(
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default)] placeholder: String,
    #[props(default)] disabled: bool,
) -> Element {
    rsx! {
        label {
            class: "flex flex-col gap-1.5",
            span {
                class: "text-xs uppercase tracking-wider text-[var(--text-tertiary)]",
                "{label}"
            }
            input {
                class: "w-full bg-[var(--bg-input)] border border-[var(--border-subtle)] text-[var(--text-primary)] text-sm rounded-md py-2 px-3 focus:outline-none focus:border-[var(--accent-primary)] disabled:opacity-60",
                r#type: "text",
                value: "{value}",
                placeholder: "{placeholder}",
                disabled: disabled,
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}
