pub mod envelope;
pub mod manifest;

pub use envelope::{ActuationDirective, BeePolytopeGuard, DecisionTier, THROTTLE_CEILING};
pub use manifest::{ActuationReport, ConfigError, ConfigIssue, GuardConfig};
