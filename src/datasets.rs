use serde::Serialize;

use crate::{
    error::{LinRegErr, Result},
    regression::DataPoint,
};

/// A named, predefined dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "data")]
    pub points: Vec<DataPoint>,
}

/// Immutable mapping from dataset names to their points, in registration order.
#[derive(Debug, Clone, Default)]
pub struct DatasetRegistry {
    datasets: Vec<Dataset>,
}

impl DatasetRegistry {
    /// Creates a registry holding `datasets`.
    pub fn new(datasets: Vec<Dataset>) -> Self {
        Self { datasets }
    }

    /// The datasets shipped with the service.
    pub fn builtin() -> Self {
        Self::new(vec![
            Dataset {
                name: "sales-revenue",
                description: "Advertising spend against sales revenue",
                points: points(&[
                    (1.0, 2.5),
                    (2.0, 3.7),
                    (3.0, 4.2),
                    (4.0, 5.8),
                    (5.0, 6.1),
                    (6.0, 7.3),
                    (7.0, 8.0),
                    (8.0, 9.2),
                    (9.0, 10.1),
                    (10.0, 11.5),
                ]),
            },
            Dataset {
                name: "salary-experience",
                description: "Years of experience against salary in thousands",
                points: points(&[
                    (1.0, 40.0),
                    (2.0, 45.0),
                    (3.0, 52.0),
                    (4.0, 58.0),
                    (5.0, 65.0),
                    (6.0, 72.0),
                    (7.0, 80.0),
                    (8.0, 88.0),
                    (9.0, 95.0),
                    (10.0, 105.0),
                ]),
            },
            Dataset {
                name: "house-prices",
                description: "House size in square feet against price in thousands",
                points: points(&[
                    (500.0, 150.0),
                    (750.0, 200.0),
                    (1000.0, 250.0),
                    (1250.0, 300.0),
                    (1500.0, 350.0),
                    (1750.0, 400.0),
                    (2000.0, 450.0),
                    (2250.0, 500.0),
                    (2500.0, 550.0),
                    (2750.0, 600.0),
                ]),
            },
        ])
    }

    /// Looks a dataset up by name.
    ///
    /// # Errors
    /// `LinRegErr::DatasetNotFound` if no dataset has that name.
    pub fn get(&self, name: &str) -> Result<&Dataset> {
        self.datasets
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| LinRegErr::DatasetNotFound(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dataset> {
        self.datasets.iter()
    }
}

fn points(raw: &[(f64, f64)]) -> Vec<DataPoint> {
    raw.iter().copied().map(DataPoint::from).collect()
}
