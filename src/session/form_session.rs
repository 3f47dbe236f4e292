use std::io::Write;
use std::sync::Arc;

use tokio::select;
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, error, info};

use crate::client::{PredictionError, PredictionService};
use crate::models::{PredictionOutcome, PredictionResponse, SubmissionRecord};
use crate::session::{FormEvent, SubmissionId};
use crate::ui;

type Completion = (SubmissionId, Result<PredictionResponse, PredictionError>);

/// Owns the form state and drives it from user events and prediction completions.
///
/// Submissions run concurrently and are never cancelled or de-duplicated. Completions are
/// applied in the order they resolve, so the last response to arrive decides the outcome.
pub struct FormSession<S: PredictionService, W: Write> {
    service: Arc<S>,
    output: W,
    record: SubmissionRecord,
    outcome: Option<PredictionOutcome>,
    submissions: JoinSet<Completion>,
    next_submission: SubmissionId
}

impl<S: PredictionService, W: Write> FormSession<S, W> {
    pub fn new(service: Arc<S>, output: W) -> Self {
        Self {
            service,
            output,
            record: SubmissionRecord::new(),
            outcome: None,
            submissions: JoinSet::new(),
            next_submission: 1
        }
    }

    pub fn outcome(&self) -> Option<PredictionOutcome> {
        self.outcome
    }

    /// Processes events until the input side closes, then waits for in-flight submissions.
    pub async fn run(&mut self, mut events: mpsc::Receiver<FormEvent>) -> anyhow::Result<()> {
        ui::render_banner(&mut self.output)?;
        self.output.flush()?;

        let mut accepting = true;

        while accepting || !self.submissions.is_empty() {
            select! {
                event = events.recv(), if accepting => match event {
                    Some(event) => self.handle_event(event)?,
                    None => {
                        debug!("Input closed with {} submission(s) in flight", self.submissions.len());
                        accepting = false;
                    }
                },
                Some(joined) = self.submissions.join_next(), if !self.submissions.is_empty() => {
                    self.handle_completion(joined)?;
                }
            }

            self.output.flush()?;
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn record(&self) -> &SubmissionRecord {
        &self.record
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }

    fn handle_event(&mut self, event: FormEvent) -> anyhow::Result<()> {
        match event {
            FormEvent::SetField { field, value } => {
                self.record.set_field(field, value);
                ui::render_field(&mut self.output, field, self.record.get(field))?;
            }
            FormEvent::Show => {
                ui::render_form(&mut self.output, &self.record)?;
                ui::render_outcome(&mut self.output, self.outcome)?;
            }
            FormEvent::Help => ui::render_help(&mut self.output)?,
            FormEvent::Submit => self.submit()
        }

        Ok(())
    }

    fn submit(&mut self) {
        let submission_id = self.next_submission;
        self.next_submission += 1;

        let service = Arc::clone(&self.service);
        let snapshot = self.record.snapshot();

        info!("Submission [{submission_id}] sent for prediction");

        self.submissions.spawn(async move {
            (submission_id, service.predict(snapshot).await)
        });
    }

    fn handle_completion(&mut self, joined: Result<Completion, JoinError>) -> anyhow::Result<()> {
        match joined {
            Ok((submission_id, Ok(response))) => {
                let outcome = response.outcome();
                info!("Submission [{submission_id}] resolved: {outcome}");
                self.outcome = Some(outcome);
                ui::render_outcome(&mut self.output, self.outcome)?;
            }
            Ok((submission_id, Err(error))) => {
                //NOTE: Failures stay out of the form, the last outcome remains on screen.
                error!("Submission [{submission_id}] failed: {error}");
            }
            Err(error) => {
                error!("A submission task did not complete: {error}");
            }
        }

        Ok(())
    }
}
