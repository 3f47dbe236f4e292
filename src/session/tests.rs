use super::{FormEvent, FormSession};

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{anyhow, Result};
use serde_json::json;
use tokio::sync::mpsc;
use tokio::time::sleep;

use crate::client::{PredictionError, PredictionService};
use crate::models::{PredictionOutcome, PredictionResponse, SubmissionRecord};
use crate::types::FieldName;

type ScriptedReply = (Duration, Result<PredictionResponse, PredictionError>);

/// Answers submissions from a fixed script and records what it was sent.
struct ScriptedService {
    replies: Mutex<VecDeque<ScriptedReply>>,
    requests: Mutex<Vec<SubmissionRecord>>
}

impl ScriptedService {
    fn with_replies(replies: Vec<ScriptedReply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new())
        })
    }

    fn requests(&self) -> Vec<SubmissionRecord> {
        self.requests.lock().map(|requests| requests.clone()).unwrap_or_default()
    }
}

impl PredictionService for ScriptedService {
    async fn predict(&self, record: SubmissionRecord) -> Result<PredictionResponse, PredictionError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(record);
        }

        let next = self.replies.lock().ok().and_then(|mut replies| replies.pop_front());
        let Some((delay, reply)) = next else {
            return Err(decode_failure());
        };

        sleep(delay).await;
        reply
    }
}

fn prediction(value: serde_json::Value) -> Result<PredictionResponse, PredictionError> {
    Ok(PredictionResponse { prediction: Some(value) })
}

fn decode_failure() -> PredictionError {
    let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();

    PredictionError::decode("http://localhost:5000/predict", source)
}

fn set(field: FieldName, value: &str) -> FormEvent {
    FormEvent::SetField { field, value: value.to_string() }
}

async fn run_session(service: Arc<ScriptedService>, events: Vec<FormEvent>) -> Result<FormSession<ScriptedService, Vec<u8>>> {
    let (sender, receiver) = mpsc::channel(16);
    let mut session = FormSession::new(service, Vec::new());

    for event in events {
        sender.send(event).await?;
    }

    drop(sender);
    session.run(receiver).await?;

    Ok(session)
}

fn rendered(session: &FormSession<ScriptedService, Vec<u8>>) -> Result<String> {
    Ok(String::from_utf8(session.output().clone())?)
}

#[tokio::test]
async fn test_session_applies_field_edits_to_the_record() -> Result<()> {
    let service = ScriptedService::with_replies(vec![]);
    let session = run_session(service.clone(), vec![
        set(FieldName::UserId, "22058"),
        set(FieldName::Browser, "safari"),
        set(FieldName::UserId, "22059")
    ]).await?;

    assert_eq!(session.record().get(FieldName::UserId), "22059");
    assert_eq!(session.record().get(FieldName::Browser), "safari");
    assert_eq!(session.record().get(FieldName::Country), "");
    assert_eq!(session.outcome(), None);
    assert!(service.requests().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_session_reports_fraud_for_single_field_submission() -> Result<()> {
    let service = ScriptedService::with_replies(vec![(Duration::ZERO, prediction(json!(1)))]);
    let session = run_session(service.clone(), vec![
        set(FieldName::PurchaseValue, "100"),
        FormEvent::Submit
    ]).await?;

    assert_eq!(session.outcome(), Some(PredictionOutcome::PotentialFraud));
    assert!(rendered(&session)?.contains("Prediction Result:\nPotential fraudulent activity detected"));

    let requests = service.requests();
    let sent = requests.first().ok_or_else(|| anyhow!("no request was sent"))?;

    assert_eq!(sent.get(FieldName::PurchaseValue), "100");
    assert!(sent.iter().filter(|(field, _)| *field != FieldName::PurchaseValue).all(|(_, value)| value.is_empty()));

    Ok(())
}

#[tokio::test]
async fn test_session_reports_no_fraud_for_zero_prediction() -> Result<()> {
    let service = ScriptedService::with_replies(vec![(Duration::ZERO, prediction(json!(0)))]);
    let session = run_session(service, vec![FormEvent::Submit]).await?;

    assert_eq!(session.outcome(), Some(PredictionOutcome::NoFraud));
    assert!(rendered(&session)?.contains("No fraudulent activity detected"));

    Ok(())
}

#[tokio::test]
async fn test_failed_submission_keeps_previous_outcome() -> Result<()> {
    let service = ScriptedService::with_replies(vec![
        (Duration::ZERO, prediction(json!(0))),
        (Duration::ZERO, Err(decode_failure()))
    ]);

    let (sender, receiver) = mpsc::channel(16);
    let mut session = FormSession::new(service.clone(), Vec::new());

    let driver = tokio::spawn(async move {
        sender.send(FormEvent::Submit).await?;
        sleep(Duration::from_millis(50)).await;
        sender.send(FormEvent::Submit).await?;
        anyhow::Ok(())
    });

    session.run(receiver).await?;
    driver.await??;

    assert_eq!(service.requests().len(), 2);
    assert_eq!(session.outcome(), Some(PredictionOutcome::NoFraud));

    Ok(())
}

#[tokio::test]
async fn test_failed_first_submission_leaves_outcome_absent() -> Result<()> {
    let service = ScriptedService::with_replies(vec![(Duration::ZERO, Err(decode_failure()))]);
    let session = run_session(service, vec![FormEvent::Submit]).await?;

    assert_eq!(session.outcome(), None);
    assert!(!rendered(&session)?.contains("Prediction Result:"));

    Ok(())
}

#[tokio::test]
async fn test_last_resolved_submission_wins() -> Result<()> {
    // The first submission resolves after the second, so its answer is the one displayed.
    let service = ScriptedService::with_replies(vec![
        (Duration::from_millis(200), prediction(json!(1))),
        (Duration::from_millis(10), prediction(json!(0)))
    ]);

    let session = run_session(service, vec![FormEvent::Submit, FormEvent::Submit]).await?;
    let output = rendered(&session)?;

    assert_eq!(session.outcome(), Some(PredictionOutcome::PotentialFraud));

    let no_fraud = output.find("No fraudulent activity detected").ok_or_else(|| anyhow!("fast answer not rendered"))?;
    let fraud = output.find("Potential fraudulent activity detected").ok_or_else(|| anyhow!("slow answer not rendered"))?;

    assert!(no_fraud < fraud);

    Ok(())
}

#[tokio::test]
async fn test_submission_uses_snapshot_taken_at_submit_time() -> Result<()> {
    let service = ScriptedService::with_replies(vec![(Duration::from_millis(20), prediction(json!(0)))]);
    let session = run_session(service.clone(), vec![
        set(FieldName::Country, "Japan"),
        FormEvent::Submit,
        set(FieldName::Country, "Brazil")
    ]).await?;

    let requests = service.requests();

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].get(FieldName::Country), "Japan");
    assert_eq!(session.record().get(FieldName::Country), "Brazil");

    Ok(())
}

#[tokio::test]
async fn test_show_renders_form_and_current_outcome() -> Result<()> {
    let service = ScriptedService::with_replies(vec![]);
    let session = run_session(service, vec![
        set(FieldName::Source, "Ads"),
        FormEvent::Show,
        FormEvent::Help
    ]).await?;

    let output = rendered(&session)?;

    assert!(output.contains("Fraud Detection Prediction"));
    assert!(output.contains("Source (source) [SEO | Ads | Referral]: Ads"));
    assert!(output.contains("submit"));
    assert!(!output.contains("Prediction Result:"));

    Ok(())
}
