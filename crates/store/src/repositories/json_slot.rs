use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::state::{slot_key, SessionState};

use super::{RepositoryError, SessionStateRepository};

/// Stores the whole session document as one JSON blob in a versioned slot
/// file under the storage root. The slot name carries the schema version,
/// so a version bump simply starts over from an empty slot.
pub struct JsonSlotRepository {
    path: PathBuf,
}

impl JsonSlotRepository {
    pub fn new(root_dir: impl AsRef<Path>) -> Self {
        Self { path: root_dir.as_ref().join(format!("{}.json", slot_key())) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStateRepository for JsonSlotRepository {
    fn load(&self) -> Result<Option<SessionState>, RepositoryError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(RepositoryError::Read(error)),
        };

        let state = serde_json::from_str(&raw)?;
        Ok(Some(state))
    }

    fn save(&self, state: &SessionState) -> Result<(), RepositoryError> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).map_err(RepositoryError::Write)?;

        let encoded = serde_json::to_vec_pretty(state)?;

        // Write-then-rename keeps the previous blob intact if the process
        // dies mid-write.
        let temp = NamedTempFile::new_in(parent).map_err(RepositoryError::Write)?;
        fs::write(temp.path(), &encoded).map_err(RepositoryError::Write)?;
        temp.persist(&self.path).map_err(|error| RepositoryError::Write(error.error))?;

        debug!(
            event_name = "store.slot_written",
            path = %self.path.display(),
            bytes = encoded.len(),
            "session state persisted"
        );
        Ok(())
    }
}
