use super::DataPoint;
use crate::error::{LinRegErr, Result};

/// The hypothesis `h(x) = theta0 + theta1 * x`.
#[inline]
pub fn hypothesis(x: f64, theta0: f64, theta1: f64) -> f64 {
    theta0 + theta1 * x
}

/// Computes the half mean squared error of the line `(theta0, theta1)` over `data`.
///
/// # Arguments
/// * `data` - The observations, must not be empty.
/// * `theta0` - The intercept.
/// * `theta1` - The slope.
///
/// # Returns
/// `(1 / 2m) * sum((h(x) - y)^2)`, or `LinRegErr::EmptyDataset` if `data` is empty.
pub fn cost(data: &[DataPoint], theta0: f64, theta1: f64) -> Result<f64> {
    if data.is_empty() {
        return Err(LinRegErr::EmptyDataset);
    }

    Ok(cost_unchecked(data, theta0, theta1))
}

/// Same as `cost` for callers that already rejected an empty `data`.
pub(super) fn cost_unchecked(data: &[DataPoint], theta0: f64, theta1: f64) -> f64 {
    let m = data.len() as f64;
    let sum: f64 = data
        .iter()
        .map(|p| {
            let err = hypothesis(p.x, theta0, theta1) - p.y;
            err * err
        })
        .sum();

    sum / (2.0 * m)
}
