use crate::state::State5D;
use serde::{Deserialize, Serialize};

/// Mixture thresholds and weights for the four pollutant channels.
///
/// The voc channel is not part of [`State5D`]; its reading is supplied per
/// evaluation. Weights are meant to sum to 1.0 but nothing here enforces it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HazardParameters {
    pub lc50_pm25_ug_m3: f64,
    pub lc50_nox_ppb: f64,
    pub lc50_o3_ppb: f64,
    pub lc50_voc_ug_m3: f64,
    pub w_pm25: f64,
    pub w_nox: f64,
    pub w_o3: f64,
    pub w_voc: f64,
    /// Upper bound of the PM2.5-equivalent viability corridor.
    pub pm25_eq_viability_ug_m3: f64,
}

/// Reading-to-threshold ratio per channel.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ChannelRatios {
    pub pm25: f64,
    pub nox: f64,
    pub o3: f64,
    pub voc: f64,
}

/// Output of one hazard evaluation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HazardResult {
    /// Weighted sum of channel ratios; unbounded above.
    pub risk_index: f64,
    pub pm25_eq: f64,
    pub within_viability: bool,
}

/// A threshold at or below zero switches the channel off.
fn guarded_ratio(reading: f64, threshold: f64) -> f64 {
    if threshold > 0.0 {
        reading / threshold
    } else {
        0.0
    }
}

impl HazardParameters {
    pub fn channel_ratios(&self, state: &State5D, voc_ug_m3: f64) -> ChannelRatios {
        ChannelRatios {
            pm25: guarded_ratio(state.pm25_ug_m3, self.lc50_pm25_ug_m3),
            nox: guarded_ratio(state.nox_ppb, self.lc50_nox_ppb),
            o3: guarded_ratio(state.o3_ppb, self.lc50_o3_ppb),
            voc: guarded_ratio(voc_ug_m3, self.lc50_voc_ug_m3),
        }
    }

    pub fn risk_index(&self, ratios: &ChannelRatios) -> f64 {
        self.w_pm25 * ratios.pm25
            + self.w_nox * ratios.nox
            + self.w_o3 * ratios.o3
            + self.w_voc * ratios.voc
    }

    /// PM2.5-equivalent index in the pm25 channel's units. pm25 enters
    /// unweighted; the other channels reuse the mixture weights.
    pub fn pm25_equivalent(&self, state: &State5D, voc_ug_m3: f64) -> f64 {
        state.pm25_ug_m3
            + self.w_nox * state.nox_ppb
            + self.w_o3 * state.o3_ppb
            + self.w_voc * voc_ug_m3
    }

    pub fn weight_sum(&self) -> f64 {
        self.w_pm25 + self.w_nox + self.w_o3 + self.w_voc
    }

    pub fn weights(&self) -> [f64; 4] {
        [self.w_pm25, self.w_nox, self.w_o3, self.w_voc]
    }

    pub fn thresholds(&self) -> [f64; 4] {
        [
            self.lc50_pm25_ug_m3,
            self.lc50_nox_ppb,
            self.lc50_o3_ppb,
            self.lc50_voc_ug_m3,
        ]
    }

    /// Full hazard evaluation. `soft_limit` is the guard's soft risk limit,
    /// which also bounds the viability corridor.
    pub fn evaluate(&self, state: &State5D, voc_ug_m3: f64, soft_limit: f64) -> HazardResult {
        let risk_index = self.risk_index(&self.channel_ratios(state, voc_ug_m3));
        let pm25_eq = self.pm25_equivalent(state, voc_ug_m3);
        let within_viability = pm25_eq <= self.pm25_eq_viability_ug_m3 && risk_index <= soft_limit;
        HazardResult {
            risk_index,
            pm25_eq,
            within_viability,
        }
    }
}
