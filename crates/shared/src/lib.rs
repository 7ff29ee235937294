//! Shared types for the ScholarQA server and client.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
