use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, LinRegErr>;

/// The crate's error type.
#[derive(Debug, Clone, PartialEq)]
pub enum LinRegErr {
    /// Cost or training was requested over zero points.
    EmptyDataset,
    /// A hyperparameter fell outside the range accepted at the boundary.
    InvalidHyperparameter {
        name: &'static str,
        reason: String,
    },
    /// A user supplied dataset is smaller than the boundary minimum.
    TooFewPoints { got: usize, min: usize },
    /// A user supplied point has a NaN or infinite coordinate.
    NonFinitePoint { index: usize },
    /// No predefined dataset is registered under this name.
    DatasetNotFound(String),
}

impl Display for LinRegErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinRegErr::EmptyDataset => write!(f, "The dataset must contain at least one point"),
            LinRegErr::InvalidHyperparameter { name, reason } => write!(f, "{name} {reason}"),
            LinRegErr::TooFewPoints { got, min } => {
                write!(f, "Custom data must have at least {min} points, got {got}")
            }
            LinRegErr::NonFinitePoint { index } => {
                write!(f, "Point {index} has a non finite coordinate")
            }
            LinRegErr::DatasetNotFound(name) => write!(f, "Dataset {name} not found"),
        }
    }
}

impl Error for LinRegErr {}
