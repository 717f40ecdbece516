use serde::{Deserialize, Serialize};

use crate::{
    config::Limits,
    datasets::DatasetRegistry,
    error::{LinRegErr, Result},
    regression::{DataPoint, GradientDescent, TrainingResult},
};

/// The dataset name that selects `custom_data` instead of the registry.
pub const CUSTOM_DATASET: &str = "custom";

/// Body of `POST /api/train`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainRequest {
    pub learning_rate: f64,
    pub iterations: i64,
    pub dataset_name: String,
    #[serde(default)]
    pub custom_data: Option<Vec<DataPoint>>,
}

impl TrainRequest {
    /// Checks the request against `limits` and resolves the points to train on.
    ///
    /// # Returns
    /// The configured trainer along with the dataset it has to run on.
    ///
    /// # Errors
    /// `InvalidHyperparameter` for an out of range learning rate or iteration count,
    /// `TooFewPoints`/`NonFinitePoint` for a bad custom dataset and `DatasetNotFound` for an unknown
    /// name.
    pub fn validate(
        self,
        limits: &Limits,
        registry: &DatasetRegistry,
    ) -> Result<(GradientDescent, Vec<DataPoint>)> {
        let lr = self.learning_rate;
        if !(lr > 0.0 && lr <= limits.max_learning_rate) {
            return Err(LinRegErr::InvalidHyperparameter {
                name: "Learning rate",
                reason: format!("must be between 0 and {}", limits.max_learning_rate),
            });
        }

        let iterations = usize::try_from(self.iterations)
            .ok()
            .filter(|n| (limits.min_iterations..=limits.max_iterations).contains(n))
            .ok_or_else(|| LinRegErr::InvalidHyperparameter {
                name: "Iterations",
                reason: format!(
                    "must be between {} and {}",
                    limits.min_iterations, limits.max_iterations
                ),
            })?;

        let data = match self.custom_data {
            Some(data) if self.dataset_name == CUSTOM_DATASET => {
                validate_custom(data, limits.min_custom_points)?
            }
            _ => registry.get(&self.dataset_name)?.points.clone(),
        };

        Ok((GradientDescent::new(lr, iterations), data))
    }
}

fn validate_custom(data: Vec<DataPoint>, min: usize) -> Result<Vec<DataPoint>> {
    if data.len() < min {
        return Err(LinRegErr::TooFewPoints {
            got: data.len(),
            min,
        });
    }

    if let Some(index) = data.iter().position(|p| !p.is_finite()) {
        return Err(LinRegErr::NonFinitePoint { index });
    }

    Ok(data)
}

/// Body returned by `POST /api/train`.
///
/// `theta0` and `theta1` repeat the final parameters for consumers that read them at the top
/// level.
#[derive(Debug, Clone, Serialize)]
pub struct TrainResponse {
    #[serde(flatten)]
    pub result: TrainingResult,
    pub theta0: f64,
    pub theta1: f64,
}

impl From<TrainingResult> for TrainResponse {
    fn from(result: TrainingResult) -> Self {
        Self {
            theta0: result.final_theta0(),
            theta1: result.final_theta1(),
            result,
        }
    }
}

/// Body of `POST /api/prediction-line`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRequest {
    pub theta0: f64,
    pub theta1: f64,
    pub x_min: f64,
    pub x_max: f64,
    #[serde(default, alias = "points")]
    pub point_count: Option<i64>,
}

impl LineRequest {
    /// Resolves the amount of points to sample.
    ///
    /// # Errors
    /// `InvalidHyperparameter` if the count is outside the accepted range.
    pub fn point_count(&self, limits: &Limits) -> Result<usize> {
        let Some(count) = self.point_count else {
            return Ok(limits.default_line_points);
        };

        usize::try_from(count)
            .ok()
            .filter(|n| (limits.min_line_points..=limits.max_line_points).contains(n))
            .ok_or_else(|| LinRegErr::InvalidHyperparameter {
                name: "Point count",
                reason: format!(
                    "must be between {} and {}",
                    limits.min_line_points, limits.max_line_points
                ),
            })
    }
}

/// Body returned by `POST /api/prediction-line`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineResponse {
    pub prediction_line: Vec<DataPoint>,
}

/// Body returned by `GET /api/datasets/{name}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetResponse {
    pub name: String,
    pub data: Vec<DataPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(learning_rate: f64, iterations: i64, name: &str) -> TrainRequest {
        TrainRequest {
            learning_rate,
            iterations,
            dataset_name: name.into(),
            custom_data: None,
        }
    }

    fn validate(req: TrainRequest) -> Result<(GradientDescent, Vec<DataPoint>)> {
        req.validate(&Limits::default(), &DatasetRegistry::builtin())
    }

    #[test]
    fn accepts_the_range_bounds() {
        let (trainer, data) = validate(request(1.0, 10_000, "sales-revenue")).unwrap();
        assert_eq!(trainer, GradientDescent::new(1.0, 10_000));
        assert_eq!(data.len(), 10);

        assert!(validate(request(0.001, 1, "sales-revenue")).is_ok());
    }

    #[test]
    fn rejects_learning_rates_out_of_range() {
        for lr in [0.0, -0.1, 1.5] {
            let err = validate(request(lr, 100, "sales-revenue")).unwrap_err();
            assert!(matches!(
                err,
                LinRegErr::InvalidHyperparameter {
                    name: "Learning rate",
                    ..
                }
            ));
        }
    }

    #[test]
    fn rejects_iterations_out_of_range() {
        for iterations in [0, -5, 10_001] {
            let err = validate(request(0.1, iterations, "sales-revenue")).unwrap_err();
            assert!(matches!(
                err,
                LinRegErr::InvalidHyperparameter {
                    name: "Iterations",
                    ..
                }
            ));
        }
    }

    #[test]
    fn unknown_dataset() {
        let err = validate(request(0.1, 10, "stocks")).unwrap_err();
        assert_eq!(err, LinRegErr::DatasetNotFound("stocks".into()));

        // "custom" without data is looked up like any other name.
        let err = validate(request(0.1, 10, CUSTOM_DATASET)).unwrap_err();
        assert_eq!(err, LinRegErr::DatasetNotFound(CUSTOM_DATASET.into()));
    }

    #[test]
    fn custom_data_needs_three_finite_points() {
        let mut req = request(0.1, 10, CUSTOM_DATASET);
        req.custom_data = Some(vec![DataPoint::new(1.0, 1.0), DataPoint::new(2.0, 2.0)]);
        assert_eq!(
            validate(req).unwrap_err(),
            LinRegErr::TooFewPoints { got: 2, min: 3 }
        );

        let mut req = request(0.1, 10, CUSTOM_DATASET);
        req.custom_data = Some(vec![
            DataPoint::new(1.0, 1.0),
            DataPoint::new(f64::INFINITY, 2.0),
            DataPoint::new(3.0, 3.0),
        ]);
        assert_eq!(validate(req).unwrap_err(), LinRegErr::NonFinitePoint { index: 1 });

        let points = vec![
            DataPoint::new(1.0, 1.0),
            DataPoint::new(2.0, 2.0),
            DataPoint::new(3.0, 3.0),
        ];
        let mut req = request(0.1, 10, CUSTOM_DATASET);
        req.custom_data = Some(points.clone());
        assert_eq!(validate(req).unwrap().1, points);
    }

    #[test]
    fn deserializes_camel_case_bodies() {
        let req: TrainRequest = serde_json::from_str(
            r#"{"learningRate":0.05,"iterations":200,"datasetName":"custom",
                "customData":[{"x":1,"y":2},{"x":2,"y":3},{"x":3,"y":4}]}"#,
        )
        .unwrap();
        assert_eq!(req.learning_rate, 0.05);
        assert_eq!(req.custom_data.map(|d| d.len()), Some(3));

        let req: LineRequest =
            serde_json::from_str(r#"{"theta0":1,"theta1":2,"xMin":0,"xMax":5,"points":6}"#).unwrap();
        assert_eq!(req.point_count(&Limits::default()), Ok(6));
    }

    #[test]
    fn point_count_defaults_and_bounds() {
        let mut req = LineRequest {
            theta0: 0.0,
            theta1: 1.0,
            x_min: 0.0,
            x_max: 1.0,
            point_count: None,
        };
        let limits = Limits::default();
        assert_eq!(req.point_count(&limits), Ok(100));

        for bad in [1, 0, -3, 10_001] {
            req.point_count = Some(bad);
            assert!(req.point_count(&limits).is_err());
        }
    }
}
