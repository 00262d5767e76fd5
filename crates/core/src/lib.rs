pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod explorer;
pub mod finder;
pub mod insights;
pub mod planner;

pub use catalog::Catalog;
pub use domain::combo::{
    BudgetTier, Combo, ComboId, ComboMetrics, Review, RubberFitting, Side, SkillLevel,
};
pub use domain::equipment::{Equipment, EquipmentId, EquipmentKind, PlayStyle};
pub use domain::insight::{InsightEntry, ProVideo};
pub use domain::training::{
    Exercise, ExerciseId, ExerciseLevel, Intensity, MediaKind, MediaRef, TrainingPlan,
};
pub use errors::DomainError;
pub use explorer::{filter_equipment, ExplorerFilters};
pub use finder::{rank_combos, FinderCriteria, RankedCombo, SortKey};
pub use insights::{analyze_upload, AnalysisReport, UploadDescriptor};
pub use planner::{generate_plan, PlanRequest};
