//! Shared Dioxus components and chart bridge for the COVID-19 dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js and Plotly render functions via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (cards, pickers, containers, etc.)

pub mod js_bridge;
pub mod state;
pub mod components;
