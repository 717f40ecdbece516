//! Single feature linear regression fitted by batch gradient descent.

mod history;
mod line;
mod mse;
mod point;
mod trainer;

pub use history::{ModelState, Parameter, TrainingResult};
pub use line::{sample_line, DEFAULT_POINT_COUNT};
pub use mse::{cost, hypothesis};
pub use point::DataPoint;
pub use trainer::{train, GradientDescent};
