use thiserror::Error;

use crate::state::SessionState;

pub mod json_slot;
pub mod memory;

pub use json_slot::JsonSlotRepository;
pub use memory::InMemoryRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("storage read failed: {0}")]
    Read(#[source] std::io::Error),
    #[error("storage write failed: {0}")]
    Write(#[source] std::io::Error),
    #[error("state serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Persistence seam for the session slot.
///
/// Synchronous on purpose: every store operation runs to completion within
/// the user action that triggered it, and there is exactly one writer.
pub trait SessionStateRepository: Send + Sync {
    /// `Ok(None)` when the slot has never been written.
    fn load(&self) -> Result<Option<SessionState>, RepositoryError>;
    fn save(&self, state: &SessionState) -> Result<(), RepositoryError>;
}
