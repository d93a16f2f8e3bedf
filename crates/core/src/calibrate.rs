use crate::domain::metrics::ReliabilityBin;

/// Normalized bar widths for one displayed calibration bucket, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationBar {
    pub predicted_pct: f64,
    pub actual_pct: f64,
}

/// Reduces reliability bins to display bars. The first and last bin are
/// open-ended edge buckets and are dropped; anything too short to have an
/// interior yields an empty display set.
pub fn calibration_bars(bins: &[ReliabilityBin]) -> Vec<CalibrationBar> {
    if bins.len() < 3 {
        return Vec::new();
    }

    bins[1..bins.len() - 1]
        .iter()
        .map(|bin| CalibrationBar {
            predicted_pct: (bin.p_avg * 100.0).clamp(0.0, 100.0),
            actual_pct: (bin.y_rate * 100.0).clamp(0.0, 100.0),
        })
        .collect()
}
