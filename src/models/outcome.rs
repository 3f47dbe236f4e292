use serde::{de, Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Body returned by the prediction endpoint.
///
/// Only `prediction` is read. It is kept as a raw JSON value because the endpoint
/// promises a 0/1 integer by convention only. Any JSON body other than `null` is accepted;
/// arrays and scalars simply carry no `prediction`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionResponse {
    pub prediction: Option<Value>
}

impl<'de> Deserialize<'de> for PredictionResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Err(de::Error::custom("Response body is null")),
            body => Ok(Self { prediction: body.get("prediction").cloned() })
        }
    }
}

impl PredictionResponse {
    pub fn outcome(&self) -> PredictionOutcome {
        PredictionOutcome::from_prediction(self.prediction.as_ref())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PredictionOutcome {
    NoFraud,
    PotentialFraud
}

impl PredictionOutcome {
    /// Only a prediction that is exactly the number zero clears the transaction.
    /// A missing field, `null`, a string or any non-zero number is treated as potential fraud.
    pub fn from_prediction(prediction: Option<&Value>) -> Self {
        match prediction {
            Some(value) if is_numeric_zero(value) => PredictionOutcome::NoFraud,
            _ => PredictionOutcome::PotentialFraud
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            PredictionOutcome::NoFraud => "No fraudulent activity detected",
            PredictionOutcome::PotentialFraud => "Potential fraudulent activity detected"
        }
    }
}

impl Display for PredictionOutcome {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message())
    }
}

fn is_numeric_zero(value: &Value) -> bool {
    value.as_f64() == Some(0.0)
}
