//! Applying a finished request to the view

use super::sequence::SubmissionSequence;
use crate::error::ClientError;
use crate::render::{render, AnalysisResult, ResultView};

/// What happened to a finished request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Rendered,
    /// Transport, decode or capture failure shown as `Error: ...`
    Failed,
    /// Superseded by a newer response; nothing was shown
    Stale,
}

/// Replace the busy status with the request's outcome
pub fn complete<V: ResultView + ?Sized>(
    view: &mut V,
    sequence: &mut SubmissionSequence,
    request_sequence: u64,
    outcome: Result<AnalysisResult, ClientError>,
    uploads_prefix: &str,
) -> Completion {
    if !sequence.admit(request_sequence) {
        return Completion::Stale;
    }

    match outcome {
        Ok(result) => {
            render(view, &result, uploads_prefix);
            Completion::Rendered
        }
        Err(err) => {
            view.show_status(&format!("Error: {}", err));
            Completion::Failed
        }
    }
}
