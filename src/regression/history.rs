use serde::{Deserialize, Serialize};

use super::DataPoint;

/// The line's parameters and its cost at a given iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelState {
    pub theta0: f64,
    pub theta1: f64,
    pub cost: f64,
    pub iteration: usize,
}

/// Which of the two line parameters to follow in `TrainingResult::parameter_series`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    Theta0,
    Theta1,
}

/// The outcome of a training run.
///
/// The history always holds the initial state followed by one entry per iteration, and the
/// `final_*` fields mirror its last entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingResult {
    history: Vec<ModelState>,
    final_theta0: f64,
    final_theta1: f64,
    final_cost: f64,
    dataset: Vec<DataPoint>,
}

impl TrainingResult {
    /// Builds the result from the untrained state and the states recorded after each update.
    pub(super) fn new(
        initial: ModelState,
        updates: Vec<ModelState>,
        dataset: Vec<DataPoint>,
    ) -> Self {
        let last = updates.last().copied().unwrap_or(initial);

        let mut history = Vec::with_capacity(updates.len() + 1);
        history.push(initial);
        history.extend(updates);

        Self {
            history,
            final_theta0: last.theta0,
            final_theta1: last.theta1,
            final_cost: last.cost,
            dataset,
        }
    }

    pub fn history(&self) -> &[ModelState] {
        &self.history
    }

    pub fn final_theta0(&self) -> f64 {
        self.final_theta0
    }

    pub fn final_theta1(&self) -> f64 {
        self.final_theta1
    }

    pub fn final_cost(&self) -> f64 {
        self.final_cost
    }

    /// The points the model was trained on, in their original order.
    pub fn dataset(&self) -> &[DataPoint] {
        &self.dataset
    }

    /// The number of update iterations that were run.
    pub fn iterations(&self) -> usize {
        self.history.len().saturating_sub(1)
    }

    /// Cost against iteration index, ready for a cost curve.
    pub fn cost_series(&self) -> Vec<DataPoint> {
        self.history
            .iter()
            .map(|s| DataPoint::new(s.iteration as f64, s.cost))
            .collect()
    }

    /// One parameter against iteration index.
    pub fn parameter_series(&self, parameter: Parameter) -> Vec<DataPoint> {
        self.history
            .iter()
            .map(|s| {
                let value = match parameter {
                    Parameter::Theta0 => s.theta0,
                    Parameter::Theta1 => s.theta1,
                };
                DataPoint::new(s.iteration as f64, value)
            })
            .collect()
    }

    /// The smallest and largest `x` of the dataset.
    ///
    /// # Returns
    /// `None` if the dataset is empty.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let first = self.dataset.first()?.x;
        let range = self
            .dataset
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.min(p.x), hi.max(p.x)));

        Some(range)
    }
}
