//! Loading indicators

use dioxus::prelude::*;

#[component]
pub fn Spinner(#[props(default = 16)] size: i32) -> Element {
    rsx! {
        div {
            class: "shrink-0 rounded-full",
            style: "width: {size}px; height: {size}px; border: 2px solid var(--bg-active); border-top-color: currentColor; animation: spin 1s linear infinite;",
        }
        style {
            "@keyframes spin {{ to {{ transform: rotate(360deg); }} }}"
        }
    }
}

/// Rounded placeholder block shown while content loads
#[component]
pub fn Skeleton(
    #[props(default = 160)] height: u32,
    #[props(default)] class: String,
) -> Element {
    rsx! {
        div {
            class: "skeleton w-full rounded-xl bg-[var(--bg-active)] {class}",
            style: "height: {height}px; animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;",
        }
        style {
            "@keyframes pulse {{ 0%, 100% {{ opacity: 1; }} 50% {{ opacity: .5; }} }}"
        }
    }
}
