use bee_core::hazard::HazardResult;
use bee_polytope_guards::ActuationDirective;
use prometheus::{GaugeVec, IntCounterVec, Opts, Registry};

pub struct GuardMetrics {
    pub bee_risk_index: GaugeVec,
    pub bee_pm25_equivalent: GaugeVec,
    pub bee_duty_scale: GaugeVec,
    pub bee_foraging_allowed: GaugeVec,
    pub bee_region_total: IntCounterVec,
}

impl GuardMetrics {
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let bee_risk_index = GaugeVec::new(
            Opts::new("bee_risk_index", "Weighted bee hazard index"),
            &["guard_id"],
        )?;
        let bee_pm25_equivalent = GaugeVec::new(
            Opts::new("bee_pm25_equivalent", "PM2.5-equivalent index in ug/m3"),
            &["guard_id"],
        )?;
        let bee_duty_scale = GaugeVec::new(
            Opts::new("bee_duty_scale", "Actuator duty scale from the last decision"),
            &["guard_id"],
        )?;
        let bee_foraging_allowed = GaugeVec::new(
            Opts::new("bee_foraging_allowed", "1 when foraging is permitted, else 0"),
            &["guard_id"],
        )?;
        let bee_region_total = IntCounterVec::new(
            Opts::new("bee_region_total", "Decisions per region label"),
            &["guard_id", "region"],
        )?;

        registry.register(Box::new(bee_risk_index.clone()))?;
        registry.register(Box::new(bee_pm25_equivalent.clone()))?;
        registry.register(Box::new(bee_duty_scale.clone()))?;
        registry.register(Box::new(bee_foraging_allowed.clone()))?;
        registry.register(Box::new(bee_region_total.clone()))?;

        Ok(Self {
            bee_risk_index,
            bee_pm25_equivalent,
            bee_duty_scale,
            bee_foraging_allowed,
            bee_region_total,
        })
    }

    pub fn observe(&self, guard_id: &str, hazard: &HazardResult, directive: &ActuationDirective) {
        self.bee_risk_index
            .with_label_values(&[guard_id])
            .set(hazard.risk_index);
        self.bee_pm25_equivalent
            .with_label_values(&[guard_id])
            .set(hazard.pm25_eq);
        self.bee_duty_scale
            .with_label_values(&[guard_id])
            .set(directive.duty_scale);
        self.bee_foraging_allowed
            .with_label_values(&[guard_id])
            .set(if directive.allow_foraging { 1.0 } else { 0.0 });
        self.bee_region_total
            .with_label_values(&[guard_id, directive.region.as_str()])
            .inc();
    }
}
