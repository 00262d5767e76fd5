use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::equipment::{Equipment, PlayStyle};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComboId(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    /// Ordinal position used for adjacency checks.
    pub fn rank(self) -> u8 {
        match self {
            SkillLevel::Beginner => 0,
            SkillLevel::Intermediate => 1,
            SkillLevel::Advanced => 2,
        }
    }

    /// Exact or neighbouring level. Beginner and advanced are two ranks
    /// apart and never near each other.
    pub fn is_near(self, other: SkillLevel) -> bool {
        self.rank().abs_diff(other.rank()) <= 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetTier {
    #[serde(rename = "under150")]
    Under150,
    #[serde(rename = "150-250")]
    Mid150To250,
    #[serde(rename = "over250")]
    Over250,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Forehand,
    Backhand,
}

/// One rubber sheet of a combo, tagged with the side it is glued to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RubberFitting {
    pub side: Side,
    pub rubber: Equipment,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComboMetrics {
    pub tempo: u8,
    pub spin: u8,
    pub control: u8,
    pub balance: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub user: String,
    pub quote: String,
    pub rating: f32,
}

/// A pre-curated blade plus two rubbers, one per side, with aggregate
/// metrics and player reviews.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Combo {
    pub id: ComboId,
    pub name: String,
    pub style: PlayStyle,
    pub level: SkillLevel,
    pub budget: BudgetTier,
    pub blade: Equipment,
    pub rubbers: [RubberFitting; 2],
    pub total_price: Decimal,
    pub metrics: ComboMetrics,
    pub description: String,
    pub reviews: Vec<Review>,
    pub carbon: bool,
}

#[cfg(test)]
mod tests {
    use super::SkillLevel;

    #[test]
    fn every_level_is_near_itself() {
        for level in [SkillLevel::Beginner, SkillLevel::Intermediate, SkillLevel::Advanced] {
            assert!(level.is_near(level));
        }
    }

    #[test]
    fn neighbouring_levels_are_near() {
        assert!(SkillLevel::Beginner.is_near(SkillLevel::Intermediate));
        assert!(SkillLevel::Advanced.is_near(SkillLevel::Intermediate));
    }

    #[test]
    fn beginner_and_advanced_are_not_near() {
        assert!(!SkillLevel::Beginner.is_near(SkillLevel::Advanced));
        assert!(!SkillLevel::Advanced.is_near(SkillLevel::Beginner));
    }
}
