//! ScholarQA Client - Dioxus web application
//!
//! This crate contains the web/desktop client for ScholarQA: ask a question
//! against the ingested literature and read extracted answers cited by DOI.

pub mod api_client;
pub mod history;
pub mod logging;
pub mod storage;
pub mod theme;

pub mod components;
pub mod routes;
pub mod views;

pub use api_client::ApiClient;
pub use routes::Route;
pub use theme::Theme;
