use crate::GuardMetrics;
use bee_core::state::State5D;
use bee_polytope_guards::{ActuationDirective, BeePolytopeGuard};

pub fn decide_and_record(
    guard: &BeePolytopeGuard,
    metrics: &GuardMetrics,
    guard_id: &str,
    state: &State5D,
    voc_ug_m3: f64,
) -> ActuationDirective {
    let hazard = guard.evaluate(state, voc_ug_m3);
    let directive = guard.directive_for(&hazard, guard.classify(state));
    metrics.observe(guard_id, &hazard, &directive);
    directive
}
