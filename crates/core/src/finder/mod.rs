//! Combo matching for the equipment finder.
//!
//! Ranks every pre-built combo against the player's survey answers with a
//! weighted sum of independent boolean matches.

mod engine;
mod types;

pub use engine::rank_combos;
pub use types::{FinderCriteria, RankedCombo, SortKey};

/// Score contribution for an exact play-style match.
pub const STYLE_WEIGHT: u32 = 50;
/// Score contribution for an exact or adjacent experience level.
pub const LEVEL_WEIGHT: u32 = 30;
/// Score contribution for an exact budget-tier match.
pub const BUDGET_WEIGHT: u32 = 20;
/// Score contribution for a satisfied carbon filter (trivially satisfied
/// when the filter is off).
pub const CARBON_WEIGHT: u32 = 10;
