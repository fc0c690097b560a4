//! Submission Response Handler
//!
//! Feeds worker responses into the dashboard model and surfaces failures
//! as toasts.

use factdash::logic::errors::format_error_message;
use factdash::model::Completion;
use factdash::services::SubmitResponse;

use crate::App;

pub fn handle_submit_response(app: &mut App, response: SubmitResponse) {
    let SubmitResponse {
        seq,
        content_type,
        outcome,
    } = response;

    let failure_message = outcome.as_ref().err().map(format_error_message);

    match app.model.dashboard.complete_submission(seq, outcome) {
        Completion::Applied => {
            tracing::debug!("Applied {} result #{}", content_type.as_str(), seq);
        }
        Completion::Failed => {
            // Only the latest request's failure is worth interrupting for
            if app.model.dashboard.is_latest(seq) {
                if let Some(message) = failure_message {
                    app.model.show_toast(message);
                }
            }
        }
        Completion::Stale => {}
    }
}
