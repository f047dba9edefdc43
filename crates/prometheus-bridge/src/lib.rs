pub mod guards;
pub mod metrics;
#[cfg(test)]
mod tests;

pub use guards::decide_and_record;
pub use metrics::GuardMetrics;
