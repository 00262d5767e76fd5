pub mod repositories;
pub mod state;
pub mod store;

pub use repositories::{
    InMemoryRepository, JsonSlotRepository, RepositoryError, SessionStateRepository,
};
pub use state::{
    slot_key, ComparisonEntry, CurrentSet, Favorite, PlanProgress, SessionState, TrainingState,
    MAX_COMPARISONS, MAX_FAVORITES, MAX_RUBBERS, STATE_SCHEMA_VERSION,
};
pub use store::{SessionStore, CUSTOM_SET_NAME};
