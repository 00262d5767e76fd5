use serde::{Deserialize, Serialize};

use crate::domain::combo::{BudgetTier, Combo, SkillLevel};
use crate::domain::equipment::PlayStyle;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Descending match score.
    #[default]
    Match,
    /// Ascending total price.
    Price,
    /// Descending combo tempo.
    Tempo,
    /// Descending combo control.
    Control,
}

/// Survey answers driving the finder ranking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FinderCriteria {
    pub style: PlayStyle,
    pub level: SkillLevel,
    pub budget: BudgetTier,
    pub sort: SortKey,
    pub carbon_only: bool,
}

impl FinderCriteria {
    pub fn new(style: PlayStyle, level: SkillLevel, budget: BudgetTier) -> Self {
        Self { style, level, budget, sort: SortKey::default(), carbon_only: false }
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_carbon_only(mut self, carbon_only: bool) -> Self {
        self.carbon_only = carbon_only;
        self
    }
}

/// A combo with its attached match score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedCombo {
    pub combo: Combo,
    pub match_score: u32,
}
