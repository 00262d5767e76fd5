use serde::{Deserialize, Serialize};

use crate::domain::training::ExerciseId;

/// Static feedback table for one focus area. Drill ids point into the
/// exercise catalog; a dangling id is skipped at lookup time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightEntry {
    pub focus_area: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub drills: Vec<ExerciseId>,
}

/// Professional reference footage recommended alongside a focus area.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProVideo {
    pub focus_area: String,
    pub title: String,
    pub url: String,
    pub focus: String,
}
