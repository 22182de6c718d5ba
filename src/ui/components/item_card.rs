//! Grid card for a list item

use crate::types::assistant::CardData;
use dioxus::prelude::*;

#[component]
pub fn ItemCard(data: CardData, onclick: EventHandler<MouseEvent>) -> Element {
    let name = data
        .name
        .clone()
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "Untitled".to_string());
    let initial = name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();

    rsx! {
        button {
            class: "group flex flex-col gap-3 h-[160px] p-4 text-left rounded-xl border border-[var(--border-subtle)] bg-[var(--bg-surface)] hover:border-[var(--border-focus)] hover:bg-[var(--bg-hover)] transition-all overflow-hidden",
            onclick: move |evt| onclick.call(evt),

            div {
                class: "flex items-center gap-3 min-w-0",
                if let Some(src) = data.icon_src.as_ref() {
                    img {
                        class: "w-9 h-9 shrink-0 rounded-full object-contain bg-white p-1",
                        src: "{src}",
                        alt: "{name}",
                    }
                } else {
                    div {
                        class: "w-9 h-9 shrink-0 rounded-full flex items-center justify-center bg-[var(--bg-active)] text-[var(--accent-primary)] font-semibold",
                        "{initial}"
                    }
                }
                span {
                    class: "truncate font-semibold text-[var(--text-primary)]",
                    "{name}"
                }
            }

            if let Some(description) = data.description.as_ref() {
                p {
                    class: "text-sm text-[var(--text-secondary)] leading-relaxed overflow-hidden",
                    style: "display: -webkit-box; -webkit-line-clamp: 3; -webkit-box-orient: vertical;",
                    "{description}"
                }
            }
        }
    }
}
