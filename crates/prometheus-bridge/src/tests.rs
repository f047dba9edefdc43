use crate::{decide_and_record, GuardMetrics};
use bee_core::hazard::HazardParameters;
use bee_core::polytope::Polytope;
use bee_core::region::RiskLimits;
use bee_core::state::State5D;
use bee_polytope_guards::BeePolytopeGuard;
use prometheus::Registry;

fn guard() -> BeePolytopeGuard {
    let params = HazardParameters {
        lc50_pm25_ug_m3: 12.0,
        lc50_nox_ppb: 100.0,
        lc50_o3_ppb: 70.0,
        lc50_voc_ug_m3: 500.0,
        w_pm25: 0.4,
        w_nox: 0.2,
        w_o3: 0.2,
        w_voc: 0.2,
        pm25_eq_viability_ug_m3: 8.5,
    };
    let forage = Polytope::unbounded().with_constraint([0.0, 0.0, 0.0, 1.0, 0.0], 30.0);
    let retreat = Polytope::unbounded().with_constraint([0.0, 0.0, 0.0, 1.0, 0.0], 40.0);
    BeePolytopeGuard::new(params, forage, retreat, RiskLimits::new(0.6, 1.0))
}

#[test]
fn records_last_decision() {
    let registry = Registry::new();
    let metrics = GuardMetrics::new(&registry).unwrap();
    let guard = guard();

    let meadow = State5D::new(5.0, 20.0, 10.0, 25.0, 10.0);
    let directive = decide_and_record(&guard, &metrics, "HIVE-PHX-07", &meadow, 50.0);
    assert_eq!(directive, guard.decide(&meadow, 50.0));

    assert_eq!(metrics.bee_duty_scale.with_label_values(&["HIVE-PHX-07"]).get(), 1.0);
    assert_eq!(metrics.bee_foraging_allowed.with_label_values(&["HIVE-PHX-07"]).get(), 1.0);
    let risk = metrics.bee_risk_index.with_label_values(&["HIVE-PHX-07"]).get();
    assert!((risk - 0.2552).abs() < 1e-3);

    let hot = State5D::new(0.0, 0.0, 0.0, 35.0, 10.0);
    decide_and_record(&guard, &metrics, "HIVE-PHX-07", &hot, 0.0);
    assert_eq!(metrics.bee_duty_scale.with_label_values(&["HIVE-PHX-07"]).get(), 0.5);
    assert_eq!(metrics.bee_foraging_allowed.with_label_values(&["HIVE-PHX-07"]).get(), 0.0);
}

#[test]
fn counts_regions_per_guard() {
    let registry = Registry::new();
    let metrics = GuardMetrics::new(&registry).unwrap();
    let guard = guard();

    for temp in [20.0, 25.0, 35.0, 45.0, 50.0] {
        decide_and_record(&guard, &metrics, "HIVE-A", &State5D::new(1.0, 1.0, 1.0, temp, 10.0), 1.0);
    }
    let count = |region: &str| metrics.bee_region_total.with_label_values(&["HIVE-A", region]).get();
    assert_eq!(count("forage_safe"), 2);
    assert_eq!(count("retreat_only"), 1);
    assert_eq!(count("forbidden"), 2);

    let families = registry.gather();
    assert!(families.iter().any(|f| f.get_name() == "bee_region_total"));
}

#[test]
fn double_registration_is_rejected() {
    let registry = Registry::new();
    let _first = GuardMetrics::new(&registry).unwrap();
    assert!(GuardMetrics::new(&registry).is_err());
}
