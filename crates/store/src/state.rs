//! The persisted session aggregate.
//!
//! Every top-level field carries `#[serde(default)]`, so a missing, partial
//! or older-shaped blob deserializes by shallow-merging over defaults:
//! stored fields override, absent fields stay at their default.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use racketlab_core::domain::combo::Combo;
use racketlab_core::domain::equipment::Equipment;
use racketlab_core::domain::training::TrainingPlan;

/// Schema version embedded in the slot key. Bumping it abandons old blobs
/// instead of migrating them.
pub const STATE_SCHEMA_VERSION: u32 = 1;

/// Name of the persistence slot for the current schema version.
pub fn slot_key() -> String {
    format!("racketlab-state-v{STATE_SCHEMA_VERSION}")
}

pub const MAX_FAVORITES: usize = 6;
pub const MAX_COMPARISONS: usize = 5;
pub const MAX_RUBBERS: usize = 2;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub favorites: Vec<Favorite>,
    #[serde(default)]
    pub comparison: Vec<ComparisonEntry>,
    #[serde(default)]
    pub current_set: CurrentSet,
    #[serde(default)]
    pub training: TrainingState,
}

/// The set the player is currently assembling. `origin` names the combo or
/// favorite it came from; `None` renders as the generic custom label.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentSet {
    #[serde(default)]
    pub blade: Option<Equipment>,
    #[serde(default)]
    pub rubbers: Vec<Equipment>,
    #[serde(default)]
    pub origin: Option<String>,
}

impl CurrentSet {
    /// Price is derived from the parts, never stored.
    pub fn total_price(&self) -> Decimal {
        let blade = self.blade.as_ref().map(|blade| blade.price).unwrap_or_default();
        let rubbers: Decimal = self.rubbers.iter().map(|rubber| rubber.price).sum();
        blade + rubbers
    }

    pub fn is_complete(&self) -> bool {
        self.blade.is_some() && self.rubbers.len() == MAX_RUBBERS
    }
}

/// Snapshot of a combo or item at the time of saving, not a live reference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: String,
    pub name: String,
    pub blade: Option<Equipment>,
    pub rubbers: Vec<Equipment>,
    pub price: Decimal,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub tempo: Option<u8>,
    pub spin: Option<u8>,
    pub control: Option<u8>,
}

impl ComparisonEntry {
    pub fn from_combo(combo: &Combo) -> Self {
        Self {
            id: combo.id.0.clone(),
            name: combo.name.clone(),
            price: combo.total_price,
            tempo: Some(combo.metrics.tempo),
            spin: Some(combo.metrics.spin),
            control: Some(combo.metrics.control),
        }
    }

    pub fn from_equipment(item: &Equipment) -> Self {
        Self {
            id: item.id.0.clone(),
            name: item.name.clone(),
            price: item.price,
            tempo: item.tempo,
            spin: item.spin,
            control: item.control,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingState {
    #[serde(default)]
    pub plan: Option<TrainingPlan>,
    /// Completion marks keyed by exercise id. Un-completing removes the
    /// entry instead of storing `false`.
    #[serde(default)]
    pub completed: BTreeMap<String, bool>,
}

/// Aggregated completion numbers for the active plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanProgress {
    pub completed_min: u32,
    pub total_min: u32,
    pub percent: u8,
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use racketlab_core::Catalog;

    use super::{slot_key, ComparisonEntry, CurrentSet, SessionState};

    #[test]
    fn slot_key_embeds_the_schema_version() {
        assert_eq!(slot_key(), "racketlab-state-v1");
    }

    #[test]
    fn a_partial_blob_merges_over_defaults() {
        let raw = r#"{"comparison":[{"id":"x","name":"X","price":"10.00",
                       "tempo":80,"spin":null,"control":75}]}"#;
        let state: SessionState = serde_json::from_str(raw).expect("partial blob parses");

        assert_eq!(state.comparison.len(), 1);
        assert!(state.favorites.is_empty());
        assert!(state.current_set.blade.is_none());
        assert!(state.training.plan.is_none());
    }

    #[test]
    fn an_empty_blob_is_the_default_state() {
        let state: SessionState = serde_json::from_str("{}").expect("empty blob parses");
        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn state_round_trips_through_json() {
        let catalog = Catalog::builtin();
        let mut state = SessionState::default();
        state.current_set = CurrentSet {
            blade: Some(catalog.equipment()[0].clone()),
            rubbers: vec![catalog.equipment()[5].clone()],
            origin: Some("Test set".to_owned()),
        };
        state.comparison.push(ComparisonEntry::from_combo(&catalog.combos()[0]));
        state.training.completed.insert("ex-serve-spin".to_owned(), true);

        let encoded = serde_json::to_string(&state).expect("state serializes");
        let decoded: SessionState = serde_json::from_str(&encoded).expect("state deserializes");
        assert_eq!(decoded, state);
    }

    #[test]
    fn current_set_price_is_the_sum_of_its_parts() {
        let catalog = Catalog::builtin();
        let blade = catalog.equipment()[0].clone();
        let rubber = catalog.equipment()[5].clone();
        let expected = blade.price + rubber.price;

        let set = CurrentSet {
            blade: Some(blade),
            rubbers: vec![rubber],
            origin: None,
        };
        assert_eq!(set.total_price(), expected);

        let empty = CurrentSet::default();
        assert_eq!(empty.total_price(), Decimal::ZERO);
    }
}
