pub mod config;
pub mod datasets;
pub mod error;
pub mod regression;
pub mod service;

pub use error::{LinRegErr, Result};
pub use regression::{
    cost, sample_line, train, DataPoint, GradientDescent, ModelState, Parameter, TrainingResult,
};
