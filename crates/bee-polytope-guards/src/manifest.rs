use crate::envelope::{ActuationDirective, BeePolytopeGuard};
use bee_core::hazard::{ChannelRatios, HazardParameters, HazardResult};
use bee_core::polytope::Polytope;
use bee_core::region::RiskLimits;
use bee_core::state::State5D;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Sanity problems in a guard configuration. The guard accepts all of
/// these; callers decide whether to reject.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigIssue {
    #[error("hard risk limit {hard} is not above soft limit {soft}")]
    LimitsInverted { soft: f64, hard: f64 },
    #[error("non-finite value in {0}")]
    NonFiniteValue(&'static str),
    #[error("mixture weights sum to {0}, expected 1.0")]
    WeightsNotNormalised(f64),
    #[error("negative mixture weight for {0}")]
    NegativeWeight(&'static str),
    #[error("threshold for {0} is not positive; channel contributes no risk")]
    NonPositiveThreshold(&'static str),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read guard config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("guard config JSON invalid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("guard config rejected: {}", join_issues(.0))]
    Invalid(Vec<ConfigIssue>),
}

fn join_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

const CHANNELS: [&str; 4] = ["pm25", "nox", "o3", "voc"];

/// Configuration document consumed by [`BeePolytopeGuard`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GuardConfig {
    pub hazard: HazardParameters,
    #[serde(default)]
    pub forage_polytope: Polytope,
    #[serde(default)]
    pub retreat_polytope: Polytope,
    pub limits: RiskLimits,
}

impl GuardConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let hz = &self.hazard;

        let finite_hazard = hz
            .thresholds()
            .iter()
            .chain(hz.weights().iter())
            .all(|v| v.is_finite())
            && hz.pm25_eq_viability_ug_m3.is_finite();
        if !finite_hazard {
            issues.push(ConfigIssue::NonFiniteValue("hazard"));
        }
        if !(self.limits.soft.is_finite() && self.limits.hard.is_finite()) {
            issues.push(ConfigIssue::NonFiniteValue("limits"));
        }
        for (name, poly) in [
            ("forage_polytope", &self.forage_polytope),
            ("retreat_polytope", &self.retreat_polytope),
        ] {
            let finite = poly
                .constraints
                .iter()
                .all(|h| h.bound.is_finite() && h.normal.iter().all(|v| v.is_finite()));
            if !finite {
                issues.push(ConfigIssue::NonFiniteValue(name));
            }
        }

        if !self.limits.is_ordered() {
            issues.push(ConfigIssue::LimitsInverted {
                soft: self.limits.soft,
                hard: self.limits.hard,
            });
        }

        for (channel, threshold) in CHANNELS.iter().zip(hz.thresholds()) {
            if threshold <= 0.0 {
                issues.push(ConfigIssue::NonPositiveThreshold(*channel));
            }
        }
        for (channel, weight) in CHANNELS.iter().zip(hz.weights()) {
            if weight < 0.0 {
                issues.push(ConfigIssue::NegativeWeight(*channel));
            }
        }
        let sum = hz.weight_sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            issues.push(ConfigIssue::WeightsNotNormalised(sum));
        }

        issues
    }

    pub fn into_guard(self) -> BeePolytopeGuard {
        BeePolytopeGuard::new(
            self.hazard,
            self.forage_polytope,
            self.retreat_polytope,
            self.limits,
        )
    }

    /// Like [`GuardConfig::into_guard`] but refuses any [`ConfigIssue`].
    pub fn into_validated_guard(self) -> Result<BeePolytopeGuard, ConfigError> {
        let issues = self.validate();
        if issues.is_empty() {
            Ok(self.into_guard())
        } else {
            Err(ConfigError::Invalid(issues))
        }
    }
}

impl From<&BeePolytopeGuard> for GuardConfig {
    fn from(guard: &BeePolytopeGuard) -> Self {
        Self {
            hazard: *guard.params(),
            forage_polytope: guard.forage_polytope().clone(),
            retreat_polytope: guard.retreat_polytope().clone(),
            limits: *guard.limits(),
        }
    }
}

/// One evaluation as handed to downstream routing and display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActuationReport {
    pub evaluated_at: DateTime<Utc>,
    pub guard_id: String,
    pub state: State5D,
    pub voc_ug_m3: f64,
    pub hazard: HazardResult,
    pub ratios: ChannelRatios,
    pub directive: ActuationDirective,
    pub forage_slack: Option<f64>,
    pub retreat_slack: Option<f64>,
}

impl BeePolytopeGuard {
    pub fn report(&self, guard_id: impl Into<String>, state: &State5D, voc_ug_m3: f64) -> ActuationReport {
        let hazard = self.evaluate(state, voc_ug_m3);
        let directive = self.directive_for(&hazard, self.classify(state));
        let x = state.as_vector();

        ActuationReport {
            evaluated_at: Utc::now(),
            guard_id: guard_id.into(),
            state: *state,
            voc_ug_m3,
            hazard,
            ratios: self.channel_ratios(state, voc_ug_m3),
            directive,
            forage_slack: self.forage_polytope().slack(&x),
            retreat_slack: self.retreat_polytope().slack(&x),
        }
    }
}
