//! Multi-criteria equipment filtering for the explorer.
//!
//! Every active filter must pass (conjunction); the style multi-select is
//! the one OR-set, and an empty selection means no style restriction.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::catalog::Catalog;
use crate::domain::equipment::{Equipment, EquipmentKind, PlayStyle};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplorerFilters {
    /// `None` shows both blades and rubbers.
    pub kind: Option<EquipmentKind>,
    /// `None` shows every brand.
    pub brand: Option<String>,
    pub styles: HashSet<PlayStyle>,
    pub max_price: Decimal,
    pub min_tempo: u8,
    pub min_control: u8,
    pub carbon_only: bool,
}

impl Default for ExplorerFilters {
    /// The fully open position: nothing is filtered out.
    fn default() -> Self {
        Self {
            kind: None,
            brand: None,
            styles: HashSet::new(),
            max_price: Decimal::MAX,
            min_tempo: 0,
            min_control: 0,
            carbon_only: false,
        }
    }
}

/// Filter the equipment catalog, preserving catalog order.
pub fn filter_equipment(catalog: &Catalog, filters: &ExplorerFilters) -> Vec<Equipment> {
    catalog.equipment().iter().filter(|item| passes(item, filters)).cloned().collect()
}

fn passes(item: &Equipment, filters: &ExplorerFilters) -> bool {
    if let Some(kind) = filters.kind {
        if kind != item.kind {
            return false;
        }
    }
    if let Some(brand) = &filters.brand {
        if brand != &item.brand {
            return false;
        }
    }
    if !filters.styles.is_empty() && !filters.styles.contains(&item.style) {
        return false;
    }
    if item.price > filters.max_price {
        return false;
    }
    if !Equipment::clears_min(item.tempo, filters.min_tempo) {
        return false;
    }
    if !Equipment::clears_min(item.control, filters.min_control) {
        return false;
    }
    if filters.carbon_only && !item.carbon {
        return false;
    }
    true
}
