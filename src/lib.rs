//! Assistants Desk library
//!
//! Core library for the Assistants Desk desktop application: backend access,
//! view state and the Dioxus UI.

pub mod api;
pub mod app;
pub mod state;
pub mod storage;
pub mod types;
pub mod ui;
