use crate::catalog::Catalog;
use crate::domain::combo::Combo;

use super::types::{FinderCriteria, RankedCombo, SortKey};
use super::{BUDGET_WEIGHT, CARBON_WEIGHT, LEVEL_WEIGHT, STYLE_WEIGHT};

/// Rank every catalog combo against the criteria.
///
/// Combos scoring zero are dropped, as is anything failing an active carbon
/// filter (the filter is also part of the score, the exclusion is kept
/// separate on purpose). Stable sorting preserves catalog order between
/// equal keys, so identical inputs always produce identical output.
pub fn rank_combos(catalog: &Catalog, criteria: &FinderCriteria) -> Vec<RankedCombo> {
    let mut ranked: Vec<RankedCombo> = catalog
        .combos()
        .iter()
        .map(|combo| RankedCombo {
            match_score: match_score(combo, criteria),
            combo: combo.clone(),
        })
        .filter(|entry| !criteria.carbon_only || entry.combo.carbon)
        .filter(|entry| entry.match_score > 0)
        .collect();

    match criteria.sort {
        SortKey::Match => ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score)),
        SortKey::Price => ranked.sort_by(|a, b| a.combo.total_price.cmp(&b.combo.total_price)),
        SortKey::Tempo => ranked.sort_by(|a, b| b.combo.metrics.tempo.cmp(&a.combo.metrics.tempo)),
        SortKey::Control => {
            ranked.sort_by(|a, b| b.combo.metrics.control.cmp(&a.combo.metrics.control))
        }
    }

    ranked
}

fn match_score(combo: &Combo, criteria: &FinderCriteria) -> u32 {
    let mut score = 0;
    if combo.style == criteria.style {
        score += STYLE_WEIGHT;
    }
    if combo.level.is_near(criteria.level) {
        score += LEVEL_WEIGHT;
    }
    if combo.budget == criteria.budget {
        score += BUDGET_WEIGHT;
    }
    if !criteria.carbon_only || combo.carbon {
        score += CARBON_WEIGHT;
    }
    score
}
