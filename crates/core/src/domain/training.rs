use serde::{Deserialize, Serialize};

use crate::domain::combo::SkillLevel;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExerciseId(pub String);

/// Audience of an exercise. `All` exercises join every candidate pool but
/// never collect the exact-level bonus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseLevel {
    All,
    Beginner,
    Intermediate,
    Advanced,
}

impl ExerciseLevel {
    pub fn admits(self, level: SkillLevel) -> bool {
        self == ExerciseLevel::All || self.is_exactly(level)
    }

    pub fn is_exactly(self, level: SkillLevel) -> bool {
        matches!(
            (self, level),
            (ExerciseLevel::Beginner, SkillLevel::Beginner)
                | (ExerciseLevel::Intermediate, SkillLevel::Intermediate)
                | (ExerciseLevel::Advanced, SkillLevel::Advanced)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Moderate,
    High,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Animation,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaRef {
    pub title: String,
    pub kind: MediaKind,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: ExerciseId,
    pub title: String,
    pub category: String,
    pub level: ExerciseLevel,
    pub goals: Vec<String>,
    pub intensity: Intensity,
    pub duration_min: u32,
    pub description: String,
    pub media: MediaRef,
}

/// A generated weekly plan. `skill_level` is `None` for plans that were
/// seeded from analysis drills instead of the survey.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingPlan {
    pub id: String,
    pub skill_level: Option<SkillLevel>,
    pub goals: Vec<String>,
    pub hours: u8,
    pub total_duration_min: u32,
    pub exercises: Vec<Exercise>,
}

impl TrainingPlan {
    pub fn contains(&self, id: &ExerciseId) -> bool {
        self.exercises.iter().any(|exercise| &exercise.id == id)
    }
}
