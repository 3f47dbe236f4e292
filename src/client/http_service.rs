use reqwest::Client;
use tracing::{debug, warn};

use crate::client::{PredictionError, PredictionService};
use crate::config::Config;
use crate::models::{PredictionResponse, SubmissionRecord};

/// Sends the form as JSON to the prediction endpoint over HTTP.
pub struct HttpPredictionService {
    client: Client,
    endpoint: String
}

impl HttpPredictionService {
    pub fn new(config: &Config) -> Result<Self, PredictionError> {
        let mut builder = Client::builder();

        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build().map_err(PredictionError::client)?,
            endpoint: config.endpoint.clone()
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PredictionService for HttpPredictionService {
    async fn predict(&self, record: SubmissionRecord) -> Result<PredictionResponse, PredictionError> {
        let response = self.client
            .post(&self.endpoint)
            .json(&record)
            .send()
            .await
            .map_err(|error| PredictionError::network(&self.endpoint, error))?;

        let status = response.status();

        //NOTE: A non-success status is not fatal on its own, the body decides whether a prediction is present.
        if !status.is_success() {
            warn!("Prediction endpoint [{}] answered with status {status}", self.endpoint);
        }

        let body = response.bytes()
            .await
            .map_err(|error| PredictionError::network(&self.endpoint, error))?;

        debug!("Prediction endpoint [{}] returned {} bytes", self.endpoint, body.len());

        serde_json::from_slice(&body).map_err(|error| PredictionError::decode(&self.endpoint, error))
    }
}
