//! The typed command layer.
//!
//! The presentation adapter never touches the engines or the store directly:
//! it translates UI events into `Command` values and hands them to
//! [`RacketLab::dispatch`]. Commands carrying ids are resolved against the
//! catalog and fail with an explicit not-found error instead of being
//! silently ignored.

use racketlab_core::domain::combo::ComboId;
use racketlab_core::domain::equipment::{Equipment, EquipmentId};
use racketlab_core::domain::training::{Exercise, ExerciseId, TrainingPlan};
use racketlab_core::errors::DomainError;
use racketlab_core::{
    analyze_upload, filter_equipment, generate_plan, rank_combos, AnalysisReport, Combo,
    ExplorerFilters, FinderCriteria, PlanRequest, RankedCombo, UploadDescriptor,
};
use racketlab_store::{ComparisonEntry, Favorite, SessionStateRepository};

use crate::bootstrap::RacketLab;

#[derive(Clone, Debug)]
pub enum Command {
    RankCombos(FinderCriteria),
    FilterEquipment(ExplorerFilters),
    /// Generate a plan from the survey and install it as the active plan.
    GeneratePlan(PlanRequest),
    Analyze { focus_area: String, upload: UploadDescriptor },
    ApplyToSet { equipment_id: EquipmentId },
    AdoptCombo { combo_id: ComboId },
    SaveCurrentSet,
    FavoriteEquipment { equipment_id: EquipmentId },
    ActivateFavorite { favorite_id: String },
    CompareCombo { combo_id: ComboId },
    CompareEquipment { equipment_id: EquipmentId },
    RemoveComparison { entry_id: String },
    ResetCurrentSet,
    ToggleExerciseComplete { exercise_id: ExerciseId },
    AddDrillToPlan { exercise_id: ExerciseId },
}

#[derive(Clone, Debug)]
pub enum Outcome {
    Rankings(Vec<RankedCombo>),
    Equipment(Vec<Equipment>),
    Plan(TrainingPlan),
    Analysis(AnalysisReport),
    Saved(Favorite),
    ExerciseCompletion { exercise_id: ExerciseId, completed: bool },
    /// The mutation was applied; render from [`RacketLab::state`].
    Done,
}

impl<R: SessionStateRepository> RacketLab<R> {
    /// Single entry point for every user intent.
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome, DomainError> {
        match command {
            Command::RankCombos(criteria) => {
                Ok(Outcome::Rankings(rank_combos(&self.catalog, &criteria)))
            }
            Command::FilterEquipment(filters) => {
                Ok(Outcome::Equipment(filter_equipment(&self.catalog, &filters)))
            }
            Command::GeneratePlan(request) => {
                let plan = generate_plan(&self.catalog, &request);
                self.store.install_plan(plan.clone());
                Ok(Outcome::Plan(plan))
            }
            Command::Analyze { focus_area, upload } => {
                Ok(Outcome::Analysis(analyze_upload(&self.catalog, &focus_area, &upload)?))
            }
            Command::ApplyToSet { equipment_id } => {
                let item = self.find_equipment(&equipment_id)?.clone();
                self.store.apply_to_current_set(&item);
                Ok(Outcome::Done)
            }
            Command::AdoptCombo { combo_id } => {
                let combo = self.find_combo(&combo_id)?.clone();
                self.store.adopt_combo(&combo);
                Ok(Outcome::Done)
            }
            Command::SaveCurrentSet => {
                let favorite = self.store.save_current_set_as_favorite()?;
                Ok(Outcome::Saved(favorite))
            }
            Command::FavoriteEquipment { equipment_id } => {
                let item = self.find_equipment(&equipment_id)?.clone();
                self.store.add_equipment_favorite(&item);
                Ok(Outcome::Done)
            }
            Command::ActivateFavorite { favorite_id } => {
                self.store.activate_favorite(&favorite_id)?;
                Ok(Outcome::Done)
            }
            Command::CompareCombo { combo_id } => {
                let combo = self.find_combo(&combo_id)?;
                let entry = ComparisonEntry::from_combo(combo);
                self.store.add_comparison(entry);
                Ok(Outcome::Done)
            }
            Command::CompareEquipment { equipment_id } => {
                let item = self.find_equipment(&equipment_id)?;
                let entry = ComparisonEntry::from_equipment(item);
                self.store.add_comparison(entry);
                Ok(Outcome::Done)
            }
            Command::RemoveComparison { entry_id } => {
                self.store.remove_comparison(&entry_id);
                Ok(Outcome::Done)
            }
            Command::ResetCurrentSet => {
                self.store.reset_current_set();
                Ok(Outcome::Done)
            }
            Command::ToggleExerciseComplete { exercise_id } => {
                let completed = self.store.toggle_exercise_complete(&exercise_id)?;
                Ok(Outcome::ExerciseCompletion { exercise_id, completed })
            }
            Command::AddDrillToPlan { exercise_id } => {
                let exercise = self.find_exercise(&exercise_id)?.clone();
                self.store.add_drill_to_plan(&exercise);
                Ok(Outcome::Done)
            }
        }
    }

    fn find_equipment(&self, id: &EquipmentId) -> Result<&Equipment, DomainError> {
        self.catalog.find_equipment(id).ok_or_else(|| DomainError::UnknownEntry(id.0.clone()))
    }

    fn find_combo(&self, id: &ComboId) -> Result<&Combo, DomainError> {
        self.catalog.find_combo(id).ok_or_else(|| DomainError::UnknownEntry(id.0.clone()))
    }

    fn find_exercise(&self, id: &ExerciseId) -> Result<&Exercise, DomainError> {
        self.catalog.find_exercise(id).ok_or_else(|| DomainError::UnknownEntry(id.0.clone()))
    }
}

#[cfg(test)]
mod tests {
    use racketlab_core::domain::equipment::EquipmentId;
    use racketlab_core::errors::DomainError;
    use racketlab_core::Catalog;
    use racketlab_store::{InMemoryRepository, SessionStore};

    use crate::bootstrap::RacketLab;

    use super::Command;

    fn app() -> RacketLab<InMemoryRepository> {
        RacketLab::with_store(
            Catalog::builtin(),
            SessionStore::open(InMemoryRepository::default()),
        )
    }

    #[test]
    fn commands_with_unknown_ids_are_rejected() {
        let mut app = app();
        let result = app.dispatch(Command::ApplyToSet {
            equipment_id: EquipmentId("no-such-item".to_owned()),
        });
        assert_eq!(result.err(), Some(DomainError::UnknownEntry("no-such-item".to_owned())));
    }

    #[test]
    fn unknown_focus_areas_surface_as_not_found() {
        let mut app = app();
        let result = app.dispatch(Command::Analyze {
            focus_area: "smash".to_owned(),
            upload: racketlab_core::UploadDescriptor {
                file_name: "clip.mp4".to_owned(),
                size_bytes: 1024,
            },
        });
        assert_eq!(result.err(), Some(DomainError::UnknownFocusArea("smash".to_owned())));
    }
}
