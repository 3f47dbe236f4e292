mod errors;
mod http_service;

use std::future::Future;

use crate::models::{PredictionResponse, SubmissionRecord};

pub use errors::PredictionError;
pub use http_service::HttpPredictionService;

/// A backend able to score a submitted form.
pub trait PredictionService: Send + Sync + 'static {
    fn predict(&self, record: SubmissionRecord) -> impl Future<Output = Result<PredictionResponse, PredictionError>> + Send;
}
