//! Adaptive training-plan generation.
//!
//! Greedy by relevance: candidates are taken in score order until the
//! weekly minutes target is reached, and the block that crosses the target
//! is kept. Relevance order deliberately wins over tight time packing.

use uuid::Uuid;

use crate::catalog::Catalog;
use crate::domain::combo::SkillLevel;
use crate::domain::training::{Exercise, TrainingPlan};

/// Score contribution per selected goal an exercise covers.
pub const GOAL_WEIGHT: u32 = 20;
/// Score contribution for an exact skill-level match; level-independent
/// exercises stay neutral.
pub const LEVEL_WEIGHT: u32 = 15;

/// Survey answers driving plan generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanRequest {
    pub goals: Vec<String>,
    pub skill_level: SkillLevel,
    /// Weekly training target in hours.
    pub hours: u8,
}

/// Build a fresh plan for the request.
///
/// Exercises for a different specific level are excluded outright; there is
/// no adjacent-level leniency here. A non-empty candidate pool always
/// produces at least one block.
pub fn generate_plan(catalog: &Catalog, request: &PlanRequest) -> TrainingPlan {
    let minutes = u32::from(request.hours) * 60;

    let mut candidates: Vec<(&Exercise, u32)> = catalog
        .exercises()
        .iter()
        .filter(|exercise| exercise.level.admits(request.skill_level))
        .map(|exercise| (exercise, score(exercise, request)))
        .collect();
    // Stable: equally scored exercises stay in library order.
    candidates.sort_by(|a, b| b.1.cmp(&a.1));

    let mut blocks: Vec<Exercise> = Vec::new();
    let mut accumulated = 0u32;
    for (exercise, _) in &candidates {
        if accumulated >= minutes {
            break;
        }
        blocks.push((*exercise).clone());
        accumulated += exercise.duration_min;
    }

    if blocks.is_empty() {
        if let Some((top, _)) = candidates.first() {
            blocks.push((*top).clone());
        }
    }

    let total_duration_min = blocks.iter().map(|exercise| exercise.duration_min).sum();

    TrainingPlan {
        id: Uuid::new_v4().to_string(),
        skill_level: Some(request.skill_level),
        goals: request.goals.clone(),
        hours: request.hours,
        total_duration_min,
        exercises: blocks,
    }
}

fn score(exercise: &Exercise, request: &PlanRequest) -> u32 {
    let goal_matches =
        exercise.goals.iter().filter(|goal| request.goals.contains(goal)).count() as u32;
    let level_bonus =
        if exercise.level.is_exactly(request.skill_level) { LEVEL_WEIGHT } else { 0 };
    goal_matches * GOAL_WEIGHT + level_bonus
}
