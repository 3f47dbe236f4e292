mod outcome;
mod record;

pub use outcome::{PredictionOutcome, PredictionResponse};
pub use record::SubmissionRecord;
