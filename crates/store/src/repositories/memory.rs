use std::sync::RwLock;

use crate::state::SessionState;

use super::{RepositoryError, SessionStateRepository};

/// In-memory slot for tests and embedders without durable storage.
#[derive(Default)]
pub struct InMemoryRepository {
    slot: RwLock<Option<SessionState>>,
}

impl SessionStateRepository for InMemoryRepository {
    fn load(&self) -> Result<Option<SessionState>, RepositoryError> {
        let slot = match self.slot.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        Ok(slot.clone())
    }

    fn save(&self, state: &SessionState) -> Result<(), RepositoryError> {
        let mut slot = match self.slot.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *slot = Some(state.clone());
        Ok(())
    }
}
