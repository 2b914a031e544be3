use crate::{
    DEFAULT_LADDER, PercentageRow, estimate_one_rep_max, percentage_table, reps_for_weight,
    weight_for_percentage,
};

/// State of the interactive one-rep-max calculator.
///
/// The estimate and the percentage table are recomputed on every input change.
#[derive(Debug, Clone, PartialEq)]
pub struct OneRepMaxCalculator {
    weight: f64,
    reps: u32,
    ladder: Vec<u32>,
    one_rep_max: f64,
    rows: Vec<PercentageRow>,
}

impl Default for OneRepMaxCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl OneRepMaxCalculator {
    #[must_use]
    pub fn new() -> Self {
        Self::with_input(0.0, 0)
    }

    #[must_use]
    pub fn with_input(weight: f64, reps: u32) -> Self {
        let mut calculator = Self {
            weight,
            reps,
            ladder: DEFAULT_LADDER.to_vec(),
            one_rep_max: 0.0,
            rows: vec![],
        };
        calculator.update();
        calculator
    }

    #[must_use]
    pub fn with_ladder(mut self, ladder: &[u32]) -> Self {
        self.ladder = ladder.to_vec();
        self.update();
        self
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
        self.update();
    }

    pub fn set_reps(&mut self, reps: u32) {
        self.reps = reps;
        self.update();
    }

    pub fn calculate(&mut self, weight: f64, reps: u32) {
        self.weight = weight;
        self.reps = reps;
        self.update();
    }

    pub fn reset(&mut self) {
        self.calculate(0.0, 0);
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[must_use]
    pub fn reps(&self) -> u32 {
        self.reps
    }

    #[must_use]
    pub fn one_rep_max(&self) -> f64 {
        self.one_rep_max
    }

    #[must_use]
    pub fn rows(&self) -> &[PercentageRow] {
        &self.rows
    }

    #[must_use]
    pub fn weight_for_percentage(&self, percentage: f64) -> f64 {
        weight_for_percentage(self.one_rep_max, percentage)
    }

    #[must_use]
    pub fn reps_for_weight(&self, weight: f64) -> u32 {
        reps_for_weight(self.one_rep_max, weight)
    }

    fn update(&mut self) {
        if self.weight > 0.0 && self.reps > 0 {
            self.one_rep_max = estimate_one_rep_max(self.weight, self.reps);
            self.rows = percentage_table(self.one_rep_max, &self.ladder);
        } else {
            self.one_rep_max = 0.0;
            self.rows = vec![];
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_calculator_new() {
        let calculator = OneRepMaxCalculator::new();
        assert_eq!(calculator.weight(), 0.0);
        assert_eq!(calculator.reps(), 0);
        assert_eq!(calculator.one_rep_max(), 0.0);
        assert!(calculator.rows().is_empty());
        assert_eq!(calculator, OneRepMaxCalculator::default());
    }

    #[test]
    fn test_calculator_with_input() {
        let calculator = OneRepMaxCalculator::with_input(100.0, 5);
        assert_eq!(calculator.one_rep_max(), 112.5);
        assert_eq!(calculator.rows().len(), 11);
        assert_eq!(calculator.rows()[0].weight, 112.5);
        assert_eq!(calculator.rows()[0].reps, 1);
    }

    #[test]
    fn test_calculator_set_weight_and_reps() {
        let mut calculator = OneRepMaxCalculator::new();
        calculator.set_weight(100.0);
        assert_eq!(calculator.one_rep_max(), 0.0);
        assert!(calculator.rows().is_empty());
        calculator.set_reps(5);
        assert_eq!(calculator.one_rep_max(), 112.5);
        assert_eq!(calculator.rows().len(), DEFAULT_LADDER.len());
    }

    #[test]
    fn test_calculator_calculate() {
        let mut calculator = OneRepMaxCalculator::new();
        calculator.calculate(200.0, 3);
        assert_eq!(calculator.weight(), 200.0);
        assert_eq!(calculator.reps(), 3);
        assert_eq!(calculator.one_rep_max(), 212.0);
    }

    #[test]
    fn test_calculator_reset() {
        let mut calculator = OneRepMaxCalculator::with_input(100.0, 5);
        calculator.reset();
        assert_eq!(calculator, OneRepMaxCalculator::new());
    }

    #[test]
    fn test_calculator_with_ladder() {
        let calculator = OneRepMaxCalculator::with_input(100.0, 5).with_ladder(&[80, 60]);
        assert_eq!(
            calculator
                .rows()
                .iter()
                .map(|r| (r.percentage, r.weight))
                .collect::<Vec<_>>(),
            vec![(80, 90.0), (60, 67.5)]
        );
    }

    #[rstest]
    #[case(85.0, 170.0)]
    #[case(100.0, 200.0)]
    #[case(0.0, 0.0)]
    fn test_calculator_weight_for_percentage(#[case] percentage: f64, #[case] expected: f64) {
        let calculator = OneRepMaxCalculator::with_input(200.0, 1);
        assert_eq!(calculator.weight_for_percentage(percentage), expected);
    }

    #[rstest]
    #[case(160.0, 8)]
    #[case(200.0, 1)]
    #[case(0.0, 0)]
    fn test_calculator_reps_for_weight(#[case] weight: f64, #[case] expected: u32) {
        let calculator = OneRepMaxCalculator::with_input(200.0, 1);
        assert_eq!(calculator.reps_for_weight(weight), expected);
    }

    #[test]
    fn test_calculator_without_estimate() {
        let calculator = OneRepMaxCalculator::with_input(-100.0, 5);
        assert_eq!(calculator.weight_for_percentage(80.0), 0.0);
        assert_eq!(calculator.reps_for_weight(80.0), 0);
    }
}
