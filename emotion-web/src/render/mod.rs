//! Render module - turns `/analyze` responses into status, badge and breakdown
//!
//! Re-exports only. All logic in submodules.

mod emotion;
mod result;
mod view;

pub use emotion::Emotion;
pub use result::AnalysisResult;
pub use view::{breakdown_lines, render, BreakdownLine, ResultView};
