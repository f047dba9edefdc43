use serde::{Deserialize, Serialize};

/// Number of axes in the hazard space.
pub const STATE_DIM: usize = 5;

/// One point in hazard space. Units must match the configured thresholds;
/// no conversion happens here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct State5D {
    pub pm25_ug_m3: f64,
    pub nox_ppb: f64,
    pub o3_ppb: f64,
    pub temp_c: f64,
    pub floral_m2_ha: f64,
}

impl State5D {
    pub fn new(pm25_ug_m3: f64, nox_ppb: f64, o3_ppb: f64, temp_c: f64, floral_m2_ha: f64) -> Self {
        Self {
            pm25_ug_m3,
            nox_ppb,
            o3_ppb,
            temp_c,
            floral_m2_ha,
        }
    }

    /// Axis order: pm25, nox, o3, temp, floral. Polytope rows use the same order.
    pub fn as_vector(&self) -> [f64; STATE_DIM] {
        [
            self.pm25_ug_m3,
            self.nox_ppb,
            self.o3_ppb,
            self.temp_c,
            self.floral_m2_ha,
        ]
    }

    pub fn is_finite(&self) -> bool {
        self.as_vector().iter().all(|v| v.is_finite())
    }
}
