use crate::{Intensity, reps_for_weight, rounding::is_positive, weight_for_percentage};

/// Percentages of the one-rep max, ordered from the heaviest to the lightest working set.
pub const DEFAULT_LADDER: &[u32] = &[100, 95, 90, 85, 80, 75, 70, 65, 60, 55, 50];

#[derive(Debug, Clone, PartialEq)]
pub struct PercentageRow {
    pub percentage: u32,
    pub weight: f64,
    pub reps: u32,
    pub intensity: Intensity,
}

impl PercentageRow {
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.intensity.label()
    }

    #[must_use]
    pub fn color(&self) -> &'static str {
        self.intensity.color()
    }
}

/// Builds one row per ladder entry, in ladder order.
///
/// An empty table signals that no estimate is available yet.
#[must_use]
pub fn percentage_table(one_rep_max: f64, ladder: &[u32]) -> Vec<PercentageRow> {
    if !is_positive(one_rep_max) {
        return vec![];
    }

    ladder
        .iter()
        .map(|percentage| {
            let weight = weight_for_percentage(one_rep_max, f64::from(*percentage));
            PercentageRow {
                percentage: *percentage,
                weight,
                reps: reps_for_weight(one_rep_max, weight),
                intensity: Intensity::classify(f64::from(*percentage)),
            }
        })
        .collect()
}
