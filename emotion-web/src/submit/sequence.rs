//! Request sequencing
//!
//! Requests are never cancelled, so responses can land out of order. Each
//! submission takes a number; a response older than the newest one already
//! shown is dropped instead of overwriting it.

#[derive(Debug, Default)]
pub struct SubmissionSequence {
    issued: u64,
    rendered: Option<u64>,
}

impl SubmissionSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number for the next submission (starts at 1)
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Record a response for `sequence` if it is not stale.
    /// Returns false when a newer response has already been shown.
    pub fn admit(&mut self, sequence: u64) -> bool {
        match self.rendered {
            Some(newest) if sequence < newest => false,
            _ => {
                self.rendered = Some(sequence);
                true
            }
        }
    }

    pub fn last_rendered(&self) -> Option<u64> {
        self.rendered
    }
}
