use crate::state::STATE_DIM;
use serde::{Deserialize, Serialize};

/// Slack added to every bound so boundary points count as inside.
pub const MEMBERSHIP_TOLERANCE: f64 = 1e-9;

/// One linear constraint `normal · x <= bound`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HalfSpace {
    pub normal: [f64; STATE_DIM],
    pub bound: f64,
}

impl HalfSpace {
    pub fn new(normal: [f64; STATE_DIM], bound: f64) -> Self {
        Self { normal, bound }
    }

    pub fn dot(&self, x: &[f64; STATE_DIM]) -> f64 {
        self.normal.iter().zip(x.iter()).map(|(a, v)| a * v).sum()
    }

    pub fn is_violated_by(&self, x: &[f64; STATE_DIM]) -> bool {
        self.dot(x) > self.bound + MEMBERSHIP_TOLERANCE
    }
}

/// Convex region `{x : A x <= b}`. No structural checks: an empty
/// constraint list is all of space.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Polytope {
    #[serde(default)]
    pub constraints: Vec<HalfSpace>,
}

impl Polytope {
    pub fn new(constraints: Vec<HalfSpace>) -> Self {
        Self { constraints }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_constraint(mut self, normal: [f64; STATE_DIM], bound: f64) -> Self {
        self.constraints.push(HalfSpace::new(normal, bound));
        self
    }

    /// Axis-aligned box `lo <= x <= hi`, two rows per axis.
    pub fn from_box(lo: [f64; STATE_DIM], hi: [f64; STATE_DIM]) -> Self {
        let mut constraints = Vec::with_capacity(2 * STATE_DIM);
        for axis in 0..STATE_DIM {
            let mut upper = [0.0; STATE_DIM];
            upper[axis] = 1.0;
            constraints.push(HalfSpace::new(upper, hi[axis]));
            let mut lower = [0.0; STATE_DIM];
            lower[axis] = -1.0;
            constraints.push(HalfSpace::new(lower, -lo[axis]));
        }
        Self { constraints }
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Closed membership. A NaN coordinate never trips a row.
    pub fn contains(&self, x: &[f64; STATE_DIM]) -> bool {
        !self.constraints.iter().any(|h| h.is_violated_by(x))
    }

    /// Smallest `bound - normal · x` over all rows: positive inside,
    /// negative by the depth of the worst violation. `None` without rows.
    pub fn slack(&self, x: &[f64; STATE_DIM]) -> Option<f64> {
        self.constraints
            .iter()
            .map(|h| h.bound - h.dot(x))
            .reduce(f64::min)
    }
}
