use serde::{Deserialize, Serialize};

/// Model quality snapshot. Refreshed independently of the plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelMetrics {
    #[serde(default)]
    pub brier: Option<f64>,
}

/// One calibration bucket: predictions grouped by average predicted
/// probability, compared against their observed hit rate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReliabilityBin {
    pub p_avg: f64,
    pub y_rate: f64,
    pub n: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReliabilityResponse {
    #[serde(default)]
    pub calibration: Vec<ReliabilityBin>,
}
