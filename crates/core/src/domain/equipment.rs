use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EquipmentId(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentKind {
    Blade,
    Rubber,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayStyle {
    Allround,
    Offensive,
    Defensive,
}

/// A single catalog item: either a blade or a rubber sheet.
///
/// Ratings are kind-specific; a field that does not apply to the kind is
/// `None` (blades carry no spin rating, rubbers no weight).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: EquipmentId,
    pub kind: EquipmentKind,
    pub name: String,
    pub brand: String,
    pub style: PlayStyle,
    pub price: Decimal,
    pub tempo: Option<u8>,
    pub spin: Option<u8>,
    pub control: Option<u8>,
    pub weight_grams: Option<u16>,
    pub carbon: bool,
    pub composition: Option<String>,
    pub hardness: Option<String>,
}

impl Equipment {
    pub fn is_blade(&self) -> bool {
        self.kind == EquipmentKind::Blade
    }

    pub fn is_rubber(&self) -> bool {
        self.kind == EquipmentKind::Rubber
    }

    /// Threshold policy for optional ratings: a zero threshold means the
    /// filter is inactive and everything passes; any positive threshold
    /// fails items that do not carry the rating at all.
    pub fn clears_min(rating: Option<u8>, min: u8) -> bool {
        if min == 0 {
            return true;
        }
        rating.map_or(false, |value| value >= min)
    }
}
