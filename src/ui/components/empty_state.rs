use dioxus::prelude::*;

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center gap-4 py-12 text-[var(--text-tertiary)]",
            div {
                class: "p-4",
                svg {
                    style: "height: 16vh; width: auto;",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "1",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    rect { x: "3", y: "7", width: "18", height: "13", rx: "2" }
                    path { d: "M8 7V5a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2" }
                    path { d: "M3 13h18" }
                }
            }
            div { class: "text-sm", "{message}" }
        }
    }
}
