//! The session store.
//!
//! Owns the aggregate, applies every mutation in place and re-serializes the
//! whole document afterwards. There is no diffing and no second writer.

use tracing::warn;
use uuid::Uuid;

use racketlab_core::domain::combo::Combo;
use racketlab_core::domain::equipment::{Equipment, EquipmentKind};
use racketlab_core::domain::training::{Exercise, ExerciseId, TrainingPlan};
use racketlab_core::errors::DomainError;

use crate::repositories::SessionStateRepository;
use crate::state::{
    ComparisonEntry, CurrentSet, Favorite, PlanProgress, SessionState, MAX_COMPARISONS,
    MAX_FAVORITES, MAX_RUBBERS,
};

/// Label shown for a manually assembled set.
pub const CUSTOM_SET_NAME: &str = "Custom set";

pub struct SessionStore<R> {
    repository: R,
    state: SessionState,
}

impl<R: SessionStateRepository> SessionStore<R> {
    /// Load the persisted session, falling back to defaults when the slot is
    /// absent or unreadable. A failed read is logged and never surfaced.
    pub fn open(repository: R) -> Self {
        let state = match repository.load() {
            Ok(Some(state)) => state,
            Ok(None) => SessionState::default(),
            Err(error) => {
                warn!(
                    event_name = "store.load_failed",
                    error = %error,
                    "falling back to the default session state"
                );
                SessionState::default()
            }
        };

        Self { repository, state }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Best-effort persistence: a failed write keeps the in-memory effect.
    fn persist(&self) {
        if let Err(error) = self.repository.save(&self.state) {
            warn!(
                event_name = "store.persist_failed",
                error = %error,
                "session state was not persisted"
            );
        }
    }

    /// Put a single item into the current set.
    ///
    /// A blade replaces the current blade unconditionally. A rubber toggles:
    /// already present means remove, otherwise append, evicting the oldest
    /// of two. Any manual edit turns the set into a custom one.
    pub fn apply_to_current_set(&mut self, item: &Equipment) {
        match item.kind {
            EquipmentKind::Blade => self.state.current_set.blade = Some(item.clone()),
            EquipmentKind::Rubber => {
                let rubbers = &mut self.state.current_set.rubbers;
                if let Some(index) = rubbers.iter().position(|rubber| rubber.id == item.id) {
                    rubbers.remove(index);
                } else {
                    if rubbers.len() >= MAX_RUBBERS {
                        rubbers.remove(0);
                    }
                    rubbers.push(item.clone());
                }
            }
        }
        self.state.current_set.origin = None;
        self.persist();
    }

    /// Replace the current set with a deep copy of the combo's parts, so the
    /// set stays independently editable afterwards.
    pub fn adopt_combo(&mut self, combo: &Combo) {
        self.state.current_set = CurrentSet {
            blade: Some(combo.blade.clone()),
            rubbers: combo.rubbers.iter().map(|fitting| fitting.rubber.clone()).collect(),
            origin: Some(combo.name.clone()),
        };
        self.persist();
    }

    pub fn reset_current_set(&mut self) {
        self.state.current_set = CurrentSet::default();
        self.persist();
    }

    /// Snapshot the current set as a favorite. Fails without touching any
    /// state unless the set has a blade and both rubbers.
    pub fn save_current_set_as_favorite(&mut self) -> Result<Favorite, DomainError> {
        if !self.state.current_set.is_complete() {
            return Err(DomainError::Validation(
                "a saved set needs a blade and two rubbers".to_owned(),
            ));
        }

        let set = &self.state.current_set;
        let favorite = Favorite {
            id: format!("custom-{}", Uuid::new_v4()),
            name: set.origin.clone().unwrap_or_else(|| CUSTOM_SET_NAME.to_owned()),
            blade: set.blade.clone(),
            rubbers: set.rubbers.clone(),
            price: set.total_price(),
        };

        self.push_favorite(favorite.clone());
        self.persist();
        Ok(favorite)
    }

    /// Favorite a single catalog item. Adding the same item twice is a no-op.
    pub fn add_equipment_favorite(&mut self, item: &Equipment) {
        if self.state.favorites.iter().any(|favorite| favorite.id == item.id.0) {
            return;
        }

        let favorite = Favorite {
            id: item.id.0.clone(),
            name: item.name.clone(),
            blade: item.is_blade().then(|| item.clone()),
            rubbers: if item.is_rubber() { vec![item.clone()] } else { Vec::new() },
            price: item.price,
        };
        self.push_favorite(favorite);
        self.persist();
    }

    fn push_favorite(&mut self, favorite: Favorite) {
        self.state.favorites.insert(0, favorite);
        self.state.favorites.truncate(MAX_FAVORITES);
    }

    /// Copy a favorite snapshot back into the current set.
    pub fn activate_favorite(&mut self, favorite_id: &str) -> Result<(), DomainError> {
        let favorite = self
            .state
            .favorites
            .iter()
            .find(|favorite| favorite.id == favorite_id)
            .ok_or_else(|| DomainError::UnknownEntry(favorite_id.to_owned()))?;

        self.state.current_set = CurrentSet {
            blade: favorite.blade.clone(),
            rubbers: favorite.rubbers.clone(),
            origin: Some(favorite.name.clone()),
        };
        self.persist();
        Ok(())
    }

    /// Add a snapshot to the comparison table. Duplicate ids are a no-op.
    pub fn add_comparison(&mut self, entry: ComparisonEntry) {
        if self.state.comparison.iter().any(|existing| existing.id == entry.id) {
            return;
        }
        self.state.comparison.insert(0, entry);
        self.state.comparison.truncate(MAX_COMPARISONS);
        self.persist();
    }

    /// Removing an id that is not in the table is a silent no-op.
    pub fn remove_comparison(&mut self, entry_id: &str) {
        self.state.comparison.retain(|entry| entry.id != entry_id);
        self.persist();
    }

    /// Install a freshly generated plan, resetting all completion marks.
    pub fn install_plan(&mut self, plan: TrainingPlan) {
        self.state.training.plan = Some(plan);
        self.state.training.completed.clear();
        self.persist();
    }

    /// Flip the completion mark of a plan exercise. Returns the new state.
    /// Un-completing removes the entry instead of storing `false`.
    pub fn toggle_exercise_complete(
        &mut self,
        exercise_id: &ExerciseId,
    ) -> Result<bool, DomainError> {
        let in_plan = self
            .state
            .training
            .plan
            .as_ref()
            .map_or(false, |plan| plan.contains(exercise_id));
        if !in_plan {
            return Err(DomainError::UnknownEntry(exercise_id.0.clone()));
        }

        let completed = &mut self.state.training.completed;
        let now_done = if completed.remove(&exercise_id.0).is_some() {
            false
        } else {
            completed.insert(exercise_id.0.clone(), true);
            true
        };

        self.persist();
        Ok(now_done)
    }

    /// Append an analysis drill to the plan, creating a plan when none
    /// exists. An exercise already in the plan is not added twice.
    pub fn add_drill_to_plan(&mut self, exercise: &Exercise) {
        match &mut self.state.training.plan {
            Some(plan) => {
                if !plan.contains(&exercise.id) {
                    plan.total_duration_min += exercise.duration_min;
                    plan.exercises.push(exercise.clone());
                }
            }
            None => {
                // A drill can seed a plan before any survey ran; such a plan
                // has no skill level and no goal selection.
                self.state.training.plan = Some(TrainingPlan {
                    id: Uuid::new_v4().to_string(),
                    skill_level: None,
                    goals: Vec::new(),
                    hours: 0,
                    total_duration_min: exercise.duration_min,
                    exercises: vec![exercise.clone()],
                });
            }
        }
        self.persist();
    }

    pub fn training_progress(&self) -> Option<PlanProgress> {
        let plan = self.state.training.plan.as_ref()?;
        let completed_min: u32 = plan
            .exercises
            .iter()
            .filter(|exercise| self.state.training.completed.contains_key(&exercise.id.0))
            .map(|exercise| exercise.duration_min)
            .sum();
        let total_min = plan.total_duration_min;
        let percent = if total_min == 0 {
            0
        } else {
            ((completed_min * 100 / total_min).min(100)) as u8
        };

        Some(PlanProgress { completed_min, total_min, percent })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use racketlab_core::domain::equipment::EquipmentKind;
    use racketlab_core::domain::training::ExerciseId;
    use racketlab_core::errors::DomainError;
    use racketlab_core::Catalog;

    use crate::repositories::{
        InMemoryRepository, RepositoryError, SessionStateRepository,
    };
    use crate::state::{ComparisonEntry, SessionState, MAX_COMPARISONS, MAX_FAVORITES};

    use super::SessionStore;

    fn store() -> SessionStore<InMemoryRepository> {
        SessionStore::open(InMemoryRepository::default())
    }

    fn rubber_ids(catalog: &Catalog) -> Vec<&racketlab_core::Equipment> {
        catalog.equipment().iter().filter(|item| item.kind == EquipmentKind::Rubber).collect()
    }

    #[test]
    fn a_third_rubber_evicts_the_oldest() {
        let catalog = Catalog::builtin();
        let rubbers = rubber_ids(&catalog);
        let mut store = store();

        store.apply_to_current_set(rubbers[0]);
        store.apply_to_current_set(rubbers[1]);
        store.apply_to_current_set(rubbers[2]);

        let current: Vec<_> =
            store.state().current_set.rubbers.iter().map(|rubber| &rubber.id).collect();
        assert_eq!(current, vec![&rubbers[1].id, &rubbers[2].id]);
    }

    #[test]
    fn applying_a_present_rubber_toggles_it_off() {
        let catalog = Catalog::builtin();
        let rubbers = rubber_ids(&catalog);
        let mut store = store();

        store.apply_to_current_set(rubbers[0]);
        store.apply_to_current_set(rubbers[0]);

        assert!(store.state().current_set.rubbers.is_empty());
    }

    #[test]
    fn a_manual_edit_after_adoption_makes_the_set_custom() {
        let catalog = Catalog::builtin();
        let combo = &catalog.combos()[0];
        let mut store = store();

        store.adopt_combo(combo);
        assert_eq!(store.state().current_set.origin.as_deref(), Some(combo.name.as_str()));
        assert!(store.state().current_set.is_complete());

        let blade = catalog
            .equipment()
            .iter()
            .find(|item| item.kind == EquipmentKind::Blade)
            .expect("builtin catalog has blades");
        store.apply_to_current_set(blade);
        assert_eq!(store.state().current_set.origin, None);
    }

    #[test]
    fn adopting_a_combo_copies_instead_of_aliasing() {
        let catalog = Catalog::builtin();
        let combo = &catalog.combos()[0];
        let mut store = store();

        store.adopt_combo(combo);
        let fh_id = combo.rubbers[0].rubber.id.clone();
        store.apply_to_current_set(&combo.rubbers[0].rubber);

        // Toggling the rubber off must not affect the catalog combo.
        assert!(!store.state().current_set.rubbers.iter().any(|rubber| rubber.id == fh_id));
        assert_eq!(catalog.combos()[0].rubbers[0].rubber.id, fh_id);
    }

    #[test]
    fn favorites_cap_at_six_newest_first() {
        let catalog = Catalog::builtin();
        let mut store = store();

        for item in catalog.equipment().iter().take(MAX_FAVORITES + 2) {
            store.add_equipment_favorite(item);
        }

        let favorites = &store.state().favorites;
        assert_eq!(favorites.len(), MAX_FAVORITES);
        // Newest first: the last added item leads the list.
        assert_eq!(favorites[0].id, catalog.equipment()[MAX_FAVORITES + 1].id.0);
    }

    #[test]
    fn favoriting_the_same_item_twice_is_a_no_op() {
        let catalog = Catalog::builtin();
        let item = &catalog.equipment()[0];
        let mut store = store();

        store.add_equipment_favorite(item);
        store.add_equipment_favorite(item);

        assert_eq!(store.state().favorites.len(), 1);
    }

    #[test]
    fn saving_an_incomplete_set_fails_and_mutates_nothing() {
        let catalog = Catalog::builtin();
        let rubbers = rubber_ids(&catalog);
        let mut store = store();
        store.apply_to_current_set(rubbers[0]);

        let error = store.save_current_set_as_favorite().expect_err("incomplete set");
        assert!(matches!(error, DomainError::Validation(_)));
        assert!(store.state().favorites.is_empty());
    }

    #[test]
    fn saving_a_complete_set_snapshots_name_and_derived_price() {
        let catalog = Catalog::builtin();
        let combo = &catalog.combos()[0];
        let mut store = store();

        store.adopt_combo(combo);
        let favorite = store.save_current_set_as_favorite().expect("complete set saves");

        assert_eq!(favorite.name, combo.name);
        assert_eq!(favorite.price, combo.total_price);
        assert!(favorite.id.starts_with("custom-"));
        assert_eq!(store.state().favorites.len(), 1);
    }

    #[test]
    fn activating_a_favorite_restores_the_set() {
        let catalog = Catalog::builtin();
        let combo = &catalog.combos()[0];
        let mut store = store();

        store.adopt_combo(combo);
        let favorite = store.save_current_set_as_favorite().expect("save");
        store.reset_current_set();
        assert!(store.state().current_set.blade.is_none());

        store.activate_favorite(&favorite.id).expect("favorite exists");
        assert_eq!(store.state().current_set.origin.as_deref(), Some(combo.name.as_str()));
        assert!(store.state().current_set.is_complete());

        let missing = store.activate_favorite("no-such-favorite");
        assert!(matches!(missing, Err(DomainError::UnknownEntry(_))));
    }

    #[test]
    fn comparison_caps_at_five_and_dedups_by_id() {
        let catalog = Catalog::builtin();
        let mut store = store();

        for item in catalog.equipment().iter().take(MAX_COMPARISONS + 1) {
            store.add_comparison(ComparisonEntry::from_equipment(item));
        }
        store.add_comparison(ComparisonEntry::from_equipment(&catalog.equipment()[5]));

        let comparison = &store.state().comparison;
        assert_eq!(comparison.len(), MAX_COMPARISONS);
        assert_eq!(comparison[0].id, catalog.equipment()[MAX_COMPARISONS].id.0);
    }

    #[test]
    fn removing_a_comparison_is_idempotent() {
        let catalog = Catalog::builtin();
        let mut store = store();
        store.add_comparison(ComparisonEntry::from_combo(&catalog.combos()[0]));

        store.remove_comparison(&catalog.combos()[0].id.0);
        assert!(store.state().comparison.is_empty());

        store.remove_comparison("already-gone");
        assert!(store.state().comparison.is_empty());
    }

    #[test]
    fn toggling_completion_marks_and_unmarks() {
        let catalog = Catalog::builtin();
        let mut store = store();
        let plan = racketlab_core::generate_plan(
            &catalog,
            &racketlab_core::PlanRequest {
                goals: vec!["Topspin".to_owned()],
                skill_level: racketlab_core::SkillLevel::Intermediate,
                hours: 2,
            },
        );
        let first = plan.exercises[0].id.clone();
        store.install_plan(plan);

        assert_eq!(store.toggle_exercise_complete(&first), Ok(true));
        assert!(store.state().training.completed.contains_key(&first.0));

        assert_eq!(store.toggle_exercise_complete(&first), Ok(false));
        assert!(!store.state().training.completed.contains_key(&first.0));
    }

    #[test]
    fn toggling_an_exercise_outside_the_plan_is_an_error() {
        let mut store = store();
        let result = store.toggle_exercise_complete(&ExerciseId("ex-anything".to_owned()));
        assert!(matches!(result, Err(DomainError::UnknownEntry(_))));
    }

    #[test]
    fn installing_a_plan_resets_completion() {
        let catalog = Catalog::builtin();
        let mut store = store();
        let request = racketlab_core::PlanRequest {
            goals: vec!["Serve".to_owned()],
            skill_level: racketlab_core::SkillLevel::Beginner,
            hours: 2,
        };

        let plan = racketlab_core::generate_plan(&catalog, &request);
        let first = plan.exercises[0].id.clone();
        store.install_plan(plan);
        store.toggle_exercise_complete(&first).expect("in plan");

        store.install_plan(racketlab_core::generate_plan(&catalog, &request));
        assert!(store.state().training.completed.is_empty());
    }

    #[test]
    fn a_drill_seeds_a_plan_and_is_not_added_twice() {
        let catalog = Catalog::builtin();
        let exercise = &catalog.exercises()[0];
        let mut store = store();

        store.add_drill_to_plan(exercise);
        let plan = store.state().training.plan.as_ref().expect("plan was seeded");
        assert_eq!(plan.skill_level, None);
        assert_eq!(plan.total_duration_min, exercise.duration_min);

        store.add_drill_to_plan(exercise);
        let plan = store.state().training.plan.as_ref().expect("plan still there");
        assert_eq!(plan.exercises.len(), 1);
        assert_eq!(plan.total_duration_min, exercise.duration_min);
    }

    #[test]
    fn adding_a_drill_extends_an_existing_plan() {
        let catalog = Catalog::builtin();
        let mut store = store();
        let plan = racketlab_core::generate_plan(
            &catalog,
            &racketlab_core::PlanRequest {
                goals: vec!["Footwork".to_owned()],
                skill_level: racketlab_core::SkillLevel::Beginner,
                hours: 1,
            },
        );
        let before = plan.total_duration_min;
        store.install_plan(plan);

        let extra = catalog
            .exercises()
            .iter()
            .find(|exercise| {
                !store.state().training.plan.as_ref().unwrap().contains(&exercise.id)
            })
            .expect("an exercise outside the plan exists")
            .clone();
        store.add_drill_to_plan(&extra);

        let plan = store.state().training.plan.as_ref().unwrap();
        assert_eq!(plan.total_duration_min, before + extra.duration_min);
        assert!(plan.contains(&extra.id));
    }

    #[test]
    fn progress_counts_only_completed_plan_minutes() {
        let catalog = Catalog::builtin();
        let mut store = store();
        assert_eq!(store.training_progress(), None);

        let plan = racketlab_core::generate_plan(
            &catalog,
            &racketlab_core::PlanRequest {
                goals: vec!["Topspin".to_owned()],
                skill_level: racketlab_core::SkillLevel::Intermediate,
                hours: 2,
            },
        );
        let first = plan.exercises[0].clone();
        let total = plan.total_duration_min;
        store.install_plan(plan);

        let fresh = store.training_progress().expect("plan installed");
        assert_eq!(fresh.completed_min, 0);
        assert_eq!(fresh.total_min, total);
        assert_eq!(fresh.percent, 0);

        store.toggle_exercise_complete(&first.id).expect("in plan");
        let after = store.training_progress().expect("plan installed");
        assert_eq!(after.completed_min, first.duration_min);
        assert_eq!(after.percent, (first.duration_min * 100 / total) as u8);
    }

    /// Repository that fails every write, for the best-effort contract.
    #[derive(Default)]
    struct FailingRepository {
        writes: AtomicUsize,
    }

    impl SessionStateRepository for FailingRepository {
        fn load(&self) -> Result<Option<SessionState>, RepositoryError> {
            Err(RepositoryError::Read(std::io::Error::new(
                std::io::ErrorKind::Other,
                "slot unavailable",
            )))
        }

        fn save(&self, _state: &SessionState) -> Result<(), RepositoryError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            Err(RepositoryError::Write(std::io::Error::new(
                std::io::ErrorKind::Other,
                "quota exceeded",
            )))
        }
    }

    #[test]
    fn unreadable_storage_falls_back_to_defaults_and_writes_stay_best_effort() {
        let catalog = Catalog::builtin();
        let mut store = SessionStore::open(FailingRepository::default());
        assert_eq!(store.state(), &SessionState::default());

        store.add_equipment_favorite(&catalog.equipment()[0]);

        // The write failed, the in-memory effect stands.
        assert_eq!(store.repository.writes.load(Ordering::SeqCst), 1);
        assert_eq!(store.state().favorites.len(), 1);
    }
}
