use bee_core::hazard::{ChannelRatios, HazardParameters, HazardResult};
use bee_core::polytope::Polytope;
use bee_core::region::{classify_region, RegionLabel, RiskLimits};
use bee_core::state::State5D;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Throttled operation never exceeds this duty scale.
pub const THROTTLE_CEILING: f64 = 0.5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DecisionTier {
    HardStop,
    Throttled,
    Full,
}

impl DecisionTier {
    /// First matching arm wins; the arm order is the policy.
    pub fn select(region: RegionLabel, risk_index: f64, limits: &RiskLimits) -> Self {
        match region {
            RegionLabel::Forbidden => DecisionTier::HardStop,
            _ if risk_index >= limits.hard => DecisionTier::HardStop,
            RegionLabel::RetreatOnly => DecisionTier::Throttled,
            _ if risk_index > limits.soft => DecisionTier::Throttled,
            RegionLabel::ForageSafe => DecisionTier::Full,
        }
    }

    /// Throttled scale is not checked against `hard > soft`; inverted or
    /// zero limits flow through the division as-is.
    pub fn duty_scale(self, risk_index: f64, limits: &RiskLimits) -> f64 {
        match self {
            DecisionTier::HardStop => 0.0,
            DecisionTier::Throttled => (1.0 - risk_index / limits.hard).max(0.0) * THROTTLE_CEILING,
            DecisionTier::Full => 1.0,
        }
    }

    pub fn allows_foraging(self) -> bool {
        matches!(self, DecisionTier::Full)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DecisionTier::HardStop => "hard_stop",
            DecisionTier::Throttled => "throttled",
            DecisionTier::Full => "full",
        }
    }
}

impl fmt::Display for DecisionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ActuationDirective {
    pub region: RegionLabel,
    pub tier: DecisionTier,
    /// Actuator intensity multiplier in [0, 1] for ordered limits.
    pub duty_scale: f64,
    pub allow_foraging: bool,
}

/// Hazard, region and actuation evaluation over fixed configuration.
///
/// Everything is set at construction and only readable afterwards, so a
/// shared reference can be used from any number of threads.
#[derive(Debug, Clone)]
pub struct BeePolytopeGuard {
    params: HazardParameters,
    forage: Polytope,
    retreat: Polytope,
    limits: RiskLimits,
}

impl BeePolytopeGuard {
    pub fn new(
        params: HazardParameters,
        forage: Polytope,
        retreat: Polytope,
        limits: RiskLimits,
    ) -> Self {
        Self {
            params,
            forage,
            retreat,
            limits,
        }
    }

    pub fn params(&self) -> &HazardParameters {
        &self.params
    }

    pub fn forage_polytope(&self) -> &Polytope {
        &self.forage
    }

    pub fn retreat_polytope(&self) -> &Polytope {
        &self.retreat
    }

    pub fn limits(&self) -> &RiskLimits {
        &self.limits
    }

    pub fn evaluate(&self, state: &State5D, voc_ug_m3: f64) -> HazardResult {
        self.params.evaluate(state, voc_ug_m3, self.limits.soft)
    }

    pub fn channel_ratios(&self, state: &State5D, voc_ug_m3: f64) -> ChannelRatios {
        self.params.channel_ratios(state, voc_ug_m3)
    }

    pub fn classify(&self, state: &State5D) -> RegionLabel {
        classify_region(&self.forage, &self.retreat, state)
    }

    pub fn decide(&self, state: &State5D, voc_ug_m3: f64) -> ActuationDirective {
        let hazard = self.evaluate(state, voc_ug_m3);
        let region = self.classify(state);
        self.directive_for(&hazard, region)
    }

    /// Ladder over an already evaluated hazard and region.
    pub fn directive_for(&self, hazard: &HazardResult, region: RegionLabel) -> ActuationDirective {
        let tier = DecisionTier::select(region, hazard.risk_index, &self.limits);
        let duty_scale = tier.duty_scale(hazard.risk_index, &self.limits);

        if tier == DecisionTier::HardStop {
            warn!(
                region = %region,
                risk_index = hazard.risk_index,
                hard_limit = self.limits.hard,
                "bee guard hard stop"
            );
        } else {
            debug!(
                region = %region,
                tier = %tier,
                risk_index = hazard.risk_index,
                duty_scale,
                "bee guard directive"
            );
        }

        ActuationDirective {
            region,
            tier,
            duty_scale,
            allow_foraging: tier.allows_foraging(),
        }
    }
}
