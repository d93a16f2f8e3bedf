use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete risk posture derived from the continuous slider value.
///
/// The band, not the raw value, is the request parameter: consumers only
/// re-fetch when the band changes, not on every slider tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    Conservative,
    Balanced,
    Aggressive,
}

impl RiskBand {
    /// Band boundaries: [0, 0.34) conservative, [0.34, 0.67) balanced,
    /// [0.67, 1] aggressive. Non-finite input falls to the most
    /// conservative band.
    pub fn from_value(r: f64) -> Self {
        if r.is_nan() || r < 0.34 {
            Self::Conservative
        } else if r < 0.67 {
            Self::Balanced
        } else {
            Self::Aggressive
        }
    }

    /// Minimum modeled win probability an idea must clear to be surfaced.
    /// Strictly decreasing across bands: more risk tolerance, lower gate.
    pub fn min_win_probability(&self) -> f64 {
        match self {
            Self::Conservative => 0.60,
            Self::Balanced => 0.56,
            Self::Aggressive => 0.53,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Balanced => "balanced",
            Self::Aggressive => "aggressive",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
