use super::{mse::hypothesis, DataPoint};

/// Amount of points sampled when the caller doesn't ask for a specific count.
pub const DEFAULT_POINT_COUNT: usize = 100;

/// Samples `point_count` evenly spaced points of the line `(theta0, theta1)` from `x_min` to
/// `x_max`, both included.
///
/// `point_count` must be at least 2, callers are expected to check it. With `x_min == x_max` every
/// point is the same.
pub fn sample_line(
    theta0: f64,
    theta1: f64,
    x_min: f64,
    x_max: f64,
    point_count: usize,
) -> Vec<DataPoint> {
    let step = (x_max - x_min) / (point_count as f64 - 1.0);

    (0..point_count)
        .map(|i| {
            let x = x_min + i as f64 * step;
            DataPoint::new(x, hypothesis(x, theta0, theta1))
        })
        .collect()
}
