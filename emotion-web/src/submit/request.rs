//! Analysis requests

/// Where the submitted image came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionKind {
    /// The host page's upload form, posted with all its fields
    Upload,
    /// A JPEG frame captured from the live camera
    Snapshot,
}

impl SubmissionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionKind::Upload => "upload",
            SubmissionKind::Snapshot => "snapshot",
        }
    }

    /// Busy status shown while the request is outstanding
    pub fn busy_text(&self) -> &'static str {
        match self {
            SubmissionKind::Upload => crate::messages::BUSY_UPLOAD,
            SubmissionKind::Snapshot => crate::messages::BUSY_SNAPSHOT,
        }
    }
}

/// One outstanding submission: its multipart body plus bookkeeping.
/// Dropped as soon as the response has been handled.
pub struct AnalysisRequest<B> {
    pub sequence: u64,
    pub kind: SubmissionKind,
    pub body: B,
}

impl<B> AnalysisRequest<B> {
    pub fn new(sequence: u64, kind: SubmissionKind, body: B) -> Self {
        Self {
            sequence,
            kind,
            body,
        }
    }
}
