//! Clients for the retrieval and inference upstream services.

pub mod inference;
pub mod retrieval;

pub use inference::InferenceClient;
pub use retrieval::{Candidate, RetrievalClient};
