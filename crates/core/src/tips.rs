use chrono::NaiveDate;

/// One coaching message, as selected for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tip {
    pub category: &'static str,
    pub text: &'static str,
}

/// A fixed, ordered group of candidate texts for one category. Loaded once
/// at startup and never mutated; selection picks exactly one per group.
#[derive(Debug, Clone, Copy)]
pub struct TipGroup {
    pub category: &'static str,
    pub tips: &'static [&'static str],
}

pub const DEFAULT_TIP_GROUPS: &[TipGroup] = &[
    TipGroup {
        category: "Mindset",
        tips: &[
            "Trade the plan you wrote before the open, not the one the market writes for you.",
            "A skipped trade costs nothing. A forced trade usually costs pula.",
            "You do not need today's winner. You need a hundred decent Tuesdays.",
            "If you feel the urge to double down, close the terminal and take a walk.",
            "The market reopens tomorrow. Your bankroll has to as well.",
        ],
    },
    TipGroup {
        category: "Risk",
        tips: &[
            "Size from your stop, not from your conviction.",
            "Never put more on one idea than your daily budget allows, however good it looks.",
            "Two losers in a row is information. Four is a signal to stop for the day.",
            "Your stop is a decision you made calm. Honour it when you are not.",
            "Cash is a position. Some days it is the best one on the board.",
        ],
    },
    TipGroup {
        category: "Process",
        tips: &[
            "Write down why you entered before you enter. Grade yourself at the close.",
            "Check the calibration chart weekly; trust the model only as far as it has earned.",
            "Review your exported plans on Sunday. Patterns hide in the boring rows.",
            "One market, one preset, one routine. Novelty is for the demo account.",
            "Headlines explain yesterday. Entries, stops and sizes decide tomorrow.",
        ],
    },
];

/// Polynomial fold of the ISO `YYYY-MM-DD` date string, wrapping u32.
/// The same calendar day always lands on the same seed.
pub fn date_seed(date: &str) -> u32 {
    date.bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)))
}

/// 32-bit xorshift generator. Not a crypto source, just a cheap
/// reproducible stream for cosmetic selection.
#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub fn new(seed: u32) -> Self {
        // Zero is the one fixed point of the xorshift step.
        let state = if seed == 0 { 0x9e37_79b9 } else { seed };
        Self { state }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Next draw in [0, 1).
    pub fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

/// Deterministic pick of one tip per group for a calendar date. Same date,
/// same selection, on every invocation.
pub fn select_for_date(groups: &[TipGroup], date: NaiveDate) -> Vec<Tip> {
    // NaiveDate displays as ISO `YYYY-MM-DD`, which is the seeding contract.
    select_with_seed(groups, date_seed(&date.to_string()))
}

/// Seeded pick of one tip per group, in group order. One generator draw is
/// consumed per group. The reshuffle path feeds this a clock-derived seed.
pub fn select_with_seed(groups: &[TipGroup], seed: u32) -> Vec<Tip> {
    let mut rng = XorShift32::new(seed);
    groups
        .iter()
        .filter_map(|group| {
            let draw = rng.next_unit();
            if group.tips.is_empty() {
                return None;
            }
            let idx = ((draw * group.tips.len() as f64) as usize).min(group.tips.len() - 1);
            Some(Tip {
                category: group.category,
                text: group.tips[idx],
            })
        })
        .collect()
}
