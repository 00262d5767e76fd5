//! Static reference data: equipment items, pre-built combos, the training
//! library and the insight tables. Read-only input to every engine.

mod seeds;

use crate::domain::combo::{Combo, ComboId};
use crate::domain::equipment::{Equipment, EquipmentId};
use crate::domain::insight::{InsightEntry, ProVideo};
use crate::domain::training::{Exercise, ExerciseId};

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    equipment: Vec<Equipment>,
    combos: Vec<Combo>,
    goals: Vec<String>,
    exercises: Vec<Exercise>,
    insights: Vec<InsightEntry>,
    pro_videos: Vec<ProVideo>,
}

impl Catalog {
    pub fn new(
        equipment: Vec<Equipment>,
        combos: Vec<Combo>,
        goals: Vec<String>,
        exercises: Vec<Exercise>,
        insights: Vec<InsightEntry>,
        pro_videos: Vec<ProVideo>,
    ) -> Self {
        Self { equipment, combos, goals, exercises, insights, pro_videos }
    }

    /// The dataset shipped with the crate.
    pub fn builtin() -> Self {
        seeds::builtin()
    }

    pub fn equipment(&self) -> &[Equipment] {
        &self.equipment
    }

    pub fn combos(&self) -> &[Combo] {
        &self.combos
    }

    pub fn goals(&self) -> &[String] {
        &self.goals
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Distinct brands in catalog order, for the explorer's brand filter.
    pub fn brands(&self) -> Vec<String> {
        let mut brands: Vec<String> = Vec::new();
        for item in &self.equipment {
            if !brands.contains(&item.brand) {
                brands.push(item.brand.clone());
            }
        }
        brands
    }

    pub fn focus_areas(&self) -> Vec<&str> {
        self.insights.iter().map(|entry| entry.focus_area.as_str()).collect()
    }

    pub fn find_equipment(&self, id: &EquipmentId) -> Option<&Equipment> {
        self.equipment.iter().find(|item| &item.id == id)
    }

    pub fn find_combo(&self, id: &ComboId) -> Option<&Combo> {
        self.combos.iter().find(|combo| &combo.id == id)
    }

    pub fn find_exercise(&self, id: &ExerciseId) -> Option<&Exercise> {
        self.exercises.iter().find(|exercise| &exercise.id == id)
    }

    pub fn insight(&self, focus_area: &str) -> Option<&InsightEntry> {
        self.insights.iter().find(|entry| entry.focus_area == focus_area)
    }

    pub fn pro_videos(&self, focus_area: &str) -> Vec<&ProVideo> {
        self.pro_videos.iter().filter(|video| video.focus_area == focus_area).collect()
    }
}
