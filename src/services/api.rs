use std::sync::Arc;
use tokio::sync::mpsc;

use crate::api::VerifyClient;
use crate::classifier::ImageClassifier;
use crate::logic::errors::SubmitError;
use crate::logic::normalize;
use crate::model::types::{Submission, Verified};
use crate::ContentType;

/// A submission tagged with the sequence number the model assigned it
#[derive(Debug, Clone)]
pub struct SubmitRequest {
    pub seq: u64,
    pub submission: Submission,
}

#[derive(Debug)]
pub struct SubmitResponse {
    pub seq: u64,
    pub content_type: ContentType,
    pub outcome: Result<Verified, SubmitError>,
}

/// Run one submission against the service and normalize the answer
pub async fn execute_request(
    client: &VerifyClient,
    classifier: &dyn ImageClassifier,
    submission: &Submission,
) -> Result<Verified, SubmitError> {
    let query = submission.query.as_str();

    match submission.content_type {
        ContentType::Text => {
            let verdict = client.verify_text(query).await?;
            Ok(normalize::text_result(query, verdict))
        }

        ContentType::Video => {
            let Some(file) = submission.file.as_deref() else {
                return Err(SubmitError::MissingFile);
            };
            let verdict = client.verify_video(file).await?;
            Ok(normalize::video_result(query, verdict))
        }

        ContentType::Image => {
            let verdict = classifier
                .classify(query, submission.file.as_deref())
                .await?;
            Ok(normalize::image_result(query, verdict))
        }
    }
}

/// Spawn the submission worker
///
/// Each request runs in its own task: nothing is queued, deduplicated, or
/// cancelled, and responses arrive in completion order. Ordering is the
/// model's job (see `DashboardModel::complete_submission`).
pub fn spawn_submit_service(
    client: VerifyClient,
    classifier: Arc<dyn ImageClassifier>,
) -> (
    mpsc::UnboundedSender<SubmitRequest>,
    mpsc::UnboundedReceiver<SubmitResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<SubmitRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<SubmitResponse>();

    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            let client = client.clone();
            let classifier = Arc::clone(&classifier);
            let response_tx = response_tx.clone();

            tokio::spawn(async move {
                let SubmitRequest { seq, submission } = request;
                tracing::debug!("[Submit Service] START #{} ({})", seq, submission.content_type.as_str());

                let outcome = execute_request(&client, &*classifier, &submission).await;

                tracing::debug!(
                    "[Submit Service] END #{} success={}",
                    seq,
                    outcome.is_ok()
                );

                let _ = response_tx.send(SubmitResponse {
                    seq,
                    content_type: submission.content_type,
                    outcome,
                });
            });
        }
        tracing::debug!("[Submit Service] request channel closed");
    });

    (request_tx, response_rx)
}
