//! Submit module - building, sending and completing analysis requests
//!
//! Re-exports only. All logic in submodules.

mod completion;
mod gate;
mod request;
mod sequence;
mod transport;

pub use completion::{complete, Completion};
pub use gate::ensure_camera;
pub use request::{AnalysisRequest, SubmissionKind};
pub use sequence::SubmissionSequence;
pub use transport::post_form;
