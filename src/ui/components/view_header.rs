use dioxus::prelude::*;

/// Page title with right-aligned actions
#[component]
pub fn ViewHeader(title: String, children: Element) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-between gap-4",
            h1 {
                class: "text-2xl font-bold tracking-tight text-[var(--text-primary)]",
                "{title}"
            }
            div {
                class: "flex items-center gap-2",
                {children}
            }
        }
    }
}
