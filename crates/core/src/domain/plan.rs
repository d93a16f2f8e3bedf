use crate::domain::risk::RiskBand;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketPreset {
    Botswana,
    Global,
}

impl MarketPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Botswana => "Botswana",
            Self::Global => "Global",
        }
    }
}

impl fmt::Display for MarketPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarketPreset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "botswana" => Ok(Self::Botswana),
            "global" => Ok(Self::Global),
            other => anyhow::bail!("unknown market preset: {other} (expected botswana or global)"),
        }
    }
}

/// Parameters for one plan query. Immutable once issued; equality is what
/// the fetcher uses to dedupe identical in-flight tuples.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub daily_budget_pula: f64,
    pub bankroll_pula: f64,
    pub risk: RiskBand,
    pub preset: MarketPreset,
}

impl PlanRequest {
    pub const MIN_DAILY_BUDGET_PULA: f64 = 50.0;
    pub const MIN_BANKROLL_PULA: f64 = 500.0;

    /// Display-level floors. The scoring service does not enforce these;
    /// the input surface does, so non-finite and below-floor values are
    /// coerced here rather than rejected.
    pub fn clamped(
        daily_budget_pula: f64,
        bankroll_pula: f64,
        risk: RiskBand,
        preset: MarketPreset,
    ) -> Self {
        Self {
            daily_budget_pula: floored(daily_budget_pula, Self::MIN_DAILY_BUDGET_PULA),
            bankroll_pula: floored(bankroll_pula, Self::MIN_BANKROLL_PULA),
            risk,
            preset,
        }
    }

    pub fn query(&self) -> [(&'static str, String); 4] {
        [
            ("daily_budget_pula", format_amount(self.daily_budget_pula)),
            ("bankroll_pula", format_amount(self.bankroll_pula)),
            ("risk", self.risk.as_str().to_string()),
            ("preset", self.preset.as_str().to_string()),
        ]
    }
}

fn floored(value: f64, min: f64) -> f64 {
    if value.is_finite() && value >= min {
        value
    } else {
        min
    }
}

fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// One day's plan as returned by the scoring service. Ideas keep the
/// service's order; the client never reorders them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    pub asof: NaiveDate,
    pub preset: String,
    pub ideas: Vec<Idea>,
    pub cash: CashAdvice,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Idea {
    pub symbol: String,
    pub name: String,
    pub market: String,
    pub price: f64,
    pub p: f64,
    pub ev: f64,
    pub entry: f64,
    pub stop: f64,
    pub take: f64,
    pub size_bwp: f64,
    pub rationale: String,
    #[serde(default)]
    pub headlines: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashAdvice {
    pub suggested: bool,
    #[serde(default)]
    pub reason: Option<String>,
}
