//! Result rendering against an abstract view
//!
//! `render` decides what to show; `ResultView` implementations decide how.
//! The DOM implementation lives in `dom::view`.

use std::fmt;

use super::emotion::Emotion;
use super::result::AnalysisResult;
use crate::messages;

/// Surfaces the renderer and the submission flow write to
pub trait ResultView {
    /// Replace the status area with plain text
    fn show_status(&mut self, text: &str);
    /// Replace the status area with the loader and a muted message
    fn show_busy(&mut self, text: &str);
    fn show_badge(&mut self, emoji: &str, label: &str);
    fn clear_badge(&mut self);
    fn show_breakdown(&mut self, lines: &[BreakdownLine]);
    fn clear_breakdown(&mut self);
    /// Point the preview image at `src` and make it visible
    fn show_preview(&mut self, src: &str);
}

/// One category row of the emotion breakdown
#[derive(Clone, Debug, PartialEq)]
pub struct BreakdownLine {
    pub category: String,
    pub score: f64,
}

impl BreakdownLine {
    /// Score with two decimal places (`0.9` -> `0.90`)
    pub fn score_text(&self) -> String {
        format!("{:.2}", self.score)
    }
}

impl fmt::Display for BreakdownLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}", self.category, self.score)
    }
}

/// Breakdown rows in the order the server listed the categories
pub fn breakdown_lines(result: &AnalysisResult) -> Vec<BreakdownLine> {
    result
        .emotions
        .iter()
        .flatten()
        .map(|(category, &score)| BreakdownLine {
            category: category.clone(),
            score,
        })
        .collect()
}

/// Apply one analysis result to the view
pub fn render<V: ResultView + ?Sized>(view: &mut V, result: &AnalysisResult, uploads_prefix: &str) {
    if let Some(failure) = result.failure() {
        view.show_status(&format!("Error: {}", failure));
        view.clear_badge();
        view.clear_breakdown();
        return;
    }

    view.show_status(messages::ANALYSIS_COMPLETE);

    let label = result.label();
    view.show_badge(Emotion::from_label(label).emoji(), label);

    let lines = breakdown_lines(result);
    if lines.is_empty() {
        view.clear_breakdown();
    } else {
        view.show_breakdown(&lines);
    }

    if let Some(file) = result.file.as_deref().filter(|f| !f.is_empty()) {
        view.show_preview(&format!("{}{}", uploads_prefix, file));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingView;

    fn rendered(body: &str) -> RecordingView {
        let mut view = RecordingView::default();
        render(&mut view, &AnalysisResult::from_json(body).unwrap(), "/uploads/");
        view
    }

    #[test]
    fn test_success_renders_badge_and_breakdown() {
        let view = rendered(r#"{"emotion":"Happy","emotions":{"happy":0.91,"sad":0.02}}"#);
        assert_eq!(view.status, "✅ Analysis complete");
        assert!(view.badge.contains("😄 Happy"));
        assert_eq!(view.breakdown, vec!["happy: 0.91", "sad: 0.02"]);
    }

    #[test]
    fn test_scores_use_two_decimals() {
        let view = rendered(r#"{"emotion":"happy","emotions":{"happy":0.9,"neutral":0.1234}}"#);
        assert_eq!(view.breakdown, vec!["happy: 0.90", "neutral: 0.12"]);
    }

    #[test]
    fn test_error_clears_badge_and_breakdown() {
        let mut view = rendered(r#"{"emotion":"sad","emotions":{"sad":0.8}}"#);
        let body = r#"{"error":"bad_image","message":"Unsupported format"}"#;
        render(&mut view, &AnalysisResult::from_json(body).unwrap(), "/uploads/");
        assert_eq!(view.status, "Error: Unsupported format");
        assert!(view.badge.is_empty());
        assert!(view.breakdown.is_empty());
    }

    #[test]
    fn test_error_without_message_uses_error() {
        let view = rendered(r#"{"error":"analysis_failed"}"#);
        assert_eq!(view.status, "Error: analysis_failed");
    }

    #[test]
    fn test_missing_emotion_defaults_to_unknown() {
        let view = rendered("{}");
        assert_eq!(view.badge, "🙂 Unknown");
        assert!(view.breakdown.is_empty());
    }

    #[test]
    fn test_empty_breakdown_is_cleared() {
        let mut view = rendered(r#"{"emotion":"sad","emotions":{"sad":0.5}}"#);
        let body = r#"{"emotion":"sad","emotions":{}}"#;
        render(&mut view, &AnalysisResult::from_json(body).unwrap(), "/uploads/");
        assert!(view.breakdown.is_empty());
    }

    #[test]
    fn test_file_sets_preview() {
        let view = rendered(r#"{"emotion":"fear","file":"abc.jpg"}"#);
        assert_eq!(view.preview.as_deref(), Some("/uploads/abc.jpg"));
        assert!(view.preview_visible);
    }

    #[test]
    fn test_missing_file_leaves_preview_unchanged() {
        let mut view = rendered(r#"{"emotion":"fear","file":"first.jpg"}"#);
        let next = AnalysisResult::from_json(r#"{"emotion":"sad"}"#).unwrap();
        render(&mut view, &next, "/uploads/");
        assert_eq!(view.preview.as_deref(), Some("/uploads/first.jpg"));
    }

    #[test]
    fn test_empty_file_leaves_preview_unchanged() {
        let view = rendered(r#"{"emotion":"sad","file":""}"#);
        assert_eq!(view.preview, None);
        assert!(!view.preview_visible);
        assert_eq!(view.badge, "😢 sad");
    }
}
