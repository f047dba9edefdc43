use crate::polytope::Polytope;
use crate::state::State5D;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RegionLabel {
    ForageSafe,
    RetreatOnly,
    Forbidden,
}

impl RegionLabel {
    pub const ALL: [RegionLabel; 3] = [
        RegionLabel::ForageSafe,
        RegionLabel::RetreatOnly,
        RegionLabel::Forbidden,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RegionLabel::ForageSafe => "forage_safe",
            RegionLabel::RetreatOnly => "retreat_only",
            RegionLabel::Forbidden => "forbidden",
        }
    }
}

impl fmt::Display for RegionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Forage polytope first, then retreat. Overlapping points are forage-safe.
pub fn classify_region(forage: &Polytope, retreat: &Polytope, state: &State5D) -> RegionLabel {
    let x = state.as_vector();
    if forage.contains(&x) {
        RegionLabel::ForageSafe
    } else if retreat.contains(&x) {
        RegionLabel::RetreatOnly
    } else {
        RegionLabel::Forbidden
    }
}

/// Soft limit starts throttling, hard limit stops actuation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RiskLimits {
    pub soft: f64,
    pub hard: f64,
}

impl RiskLimits {
    pub fn new(soft: f64, hard: f64) -> Self {
        Self { soft, hard }
    }

    pub fn is_ordered(&self) -> bool {
        self.hard > self.soft
    }
}
