use log::{debug, warn};

use super::{
    mse::{cost_unchecked, hypothesis},
    DataPoint, ModelState, TrainingResult,
};
use crate::error::{LinRegErr, Result};

/// Upper bound on the history entries reserved before a run starts.
const PREALLOCATED_STATES: usize = 10_001;

/// Batch gradient descent over the line `y = theta0 + theta1 * x`.
///
/// Every run starts at `theta0 = theta1 = 0` and performs exactly `iterations` updates, so the
/// same inputs always produce the same history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientDescent {
    learning_rate: f64,
    iterations: usize,
}

impl GradientDescent {
    /// Returns a new `GradientDescent`.
    ///
    /// # Arguments
    /// * `learning_rate` - The *length* of the steps taken on each update.
    /// * `iterations` - The amount of updates a run performs.
    pub fn new(learning_rate: f64, iterations: usize) -> Self {
        Self {
            learning_rate,
            iterations,
        }
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Fits the line to `data`, recording the state before the first update and after each one.
    ///
    /// # Arguments
    /// * `data` - The observations, must not be empty.
    ///
    /// # Returns
    /// A `TrainingResult` with `iterations + 1` history entries, or `LinRegErr::EmptyDataset`.
    pub fn train(&self, data: &[DataPoint]) -> Result<TrainingResult> {
        if data.is_empty() {
            return Err(LinRegErr::EmptyDataset);
        }

        debug!(
            "training on {} points, learning_rate = {}, iterations = {}",
            data.len(),
            self.learning_rate,
            self.iterations
        );

        let m = data.len() as f64;
        let (mut theta0, mut theta1) = (0.0, 0.0);

        let initial = ModelState {
            theta0,
            theta1,
            cost: cost_unchecked(data, theta0, theta1),
            iteration: 0,
        };

        let mut updates = Vec::with_capacity(updates_capacity(self.iterations));

        for iteration in 1..=self.iterations {
            let (sum0, sum1) = error_sums(data, theta0, theta1);

            // Both updates must see the pre-update parameters.
            let new_theta0 = theta0 - self.learning_rate * sum0 / m;
            let new_theta1 = theta1 - self.learning_rate * sum1 / m;
            (theta0, theta1) = (new_theta0, new_theta1);

            updates.push(ModelState {
                theta0,
                theta1,
                cost: cost_unchecked(data, theta0, theta1),
                iteration,
            });
        }

        let result = TrainingResult::new(initial, updates, data.to_vec());
        if !result.final_cost().is_finite() {
            warn!(
                "training diverged, final cost is {} with learning_rate = {}",
                result.final_cost(),
                self.learning_rate
            );
        }

        debug!(
            "trained theta0 = {}, theta1 = {}, cost = {}",
            result.final_theta0(),
            result.final_theta1(),
            result.final_cost()
        );

        Ok(result)
    }
}

/// The amount of update states reserved up front, capped so huge iteration counts don't allocate
/// before any work is done.
fn updates_capacity(iterations: usize) -> usize {
    iterations.min(PREALLOCATED_STATES)
}

/// Returns `(sum(err), sum(err * x))` where `err = h(x) - y`.
fn error_sums(data: &[DataPoint], theta0: f64, theta1: f64) -> (f64, f64) {
    data.iter().fold((0.0, 0.0), |(sum0, sum1), p| {
        let err = hypothesis(p.x, theta0, theta1) - p.y;
        (sum0 + err, sum1 + err * p.x)
    })
}

/// Shorthand for `GradientDescent::new(learning_rate, iterations).train(data)`.
pub fn train(data: &[DataPoint], learning_rate: f64, iterations: usize) -> Result<TrainingResult> {
    GradientDescent::new(learning_rate, iterations).train(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regression::cost;

    fn doubling() -> Vec<DataPoint> {
        vec![
            DataPoint::new(1.0, 2.0),
            DataPoint::new(2.0, 4.0),
            DataPoint::new(3.0, 6.0),
        ]
    }

    #[test]
    fn empty_dataset_is_rejected() {
        assert_eq!(train(&[], 0.1, 10), Err(LinRegErr::EmptyDataset));
    }

    #[test]
    fn zero_iterations_keeps_the_initial_state() {
        let data = doubling();
        let result = train(&data, 0.1, 0).unwrap();

        assert_eq!(result.history().len(), 1);
        assert_eq!(result.final_theta0(), 0.0);
        assert_eq!(result.final_theta1(), 0.0);
        assert_eq!(result.final_cost(), cost(&data, 0.0, 0.0).unwrap());
    }

    #[test]
    fn first_step_matches_hand_computation() {
        // errors at (0, 0): -2, -4, -6 => sum0 = -12, sum1 = -28
        let result = train(&doubling(), 0.1, 1).unwrap();
        let step = result.history()[1];

        assert_eq!(step.iteration, 1);
        assert!((step.theta0 - 0.4).abs() < 1e-12);
        assert!((step.theta1 - 0.1 * 28.0 / 3.0).abs() < 1e-12);
        assert_eq!(step.cost, cost(&doubling(), step.theta0, step.theta1).unwrap());
    }

    #[test]
    fn updates_are_simultaneous() {
        // A sequential update would compute theta1 from the already moved theta0.
        let data = doubling();
        let result = train(&data, 0.1, 2).unwrap();
        let (t0, t1) = (result.history()[1].theta0, result.history()[1].theta1);

        let (sum0, sum1) = error_sums(&data, t0, t1);
        let expected0 = t0 - 0.1 * sum0 / 3.0;
        let expected1 = t1 - 0.1 * sum1 / 3.0;

        assert_eq!(result.final_theta0(), expected0);
        assert_eq!(result.final_theta1(), expected1);
    }

    #[test]
    fn converges_on_an_exact_line() {
        let result = train(&doubling(), 0.1, 1000).unwrap();

        assert!(result.final_cost() < 1e-2);
        assert!((result.final_theta1() - 2.0).abs() < 1e-2);
        assert!(result.final_theta0().abs() < 1e-2);
    }

    #[test]
    fn reservation_is_bounded_for_huge_iteration_counts() {
        assert_eq!(updates_capacity(0), 0);
        assert_eq!(updates_capacity(250), 250);
        assert_eq!(updates_capacity(usize::MAX), PREALLOCATED_STATES);
    }

    #[test]
    fn large_learning_rate_diverges_without_stopping() {
        let result = train(&doubling(), 1.0, 50).unwrap();

        assert_eq!(result.history().len(), 51);
        assert!(result.final_cost() > result.history()[0].cost);
    }
}
