//! Decoded `/analyze` response

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ClientError;
use crate::messages;

/// Server response for one analysis request
///
/// Every field is optional: a success carries `emotion`/`emotions`/`file`,
/// a failure carries `error` and usually `message`. `emotions` keeps the
/// key order the server sent.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct AnalysisResult {
    #[serde(default)]
    pub emotion: Option<String>,
    #[serde(default)]
    pub emotions: Option<IndexMap<String, f64>>,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AnalysisResult {
    pub fn from_json(body: &str) -> Result<Self, ClientError> {
        serde_json::from_str(body)
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Server-reported failure text, preferring `message` over `error`
    pub fn failure(&self) -> Option<&str> {
        let error = self.error.as_deref().filter(|e| !e.is_empty())?;
        let message = self.message.as_deref().filter(|m| !m.is_empty());
        Some(message.unwrap_or(error))
    }

    pub fn label(&self) -> &str {
        match self.emotion.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => messages::UNKNOWN_EMOTION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body() {
        let result = AnalysisResult::from_json(
            r#"{"emotion":"happy","emotions":{"sad":0.02,"happy":0.91},"file":"abc.jpg"}"#,
        )
        .unwrap();
        assert_eq!(result.label(), "happy");
        assert_eq!(result.failure(), None);
        let emotions = result.emotions.as_ref().unwrap();
        let keys: Vec<&str> = emotions.keys().map(String::as_str).collect();
        assert_eq!(keys, ["sad", "happy"]);
    }

    #[test]
    fn test_failure_prefers_message() {
        let body = r#"{"error":"bad_image","message":"Unsupported format"}"#;
        let result = AnalysisResult::from_json(body).unwrap();
        assert_eq!(result.failure(), Some("Unsupported format"));

        let body = r#"{"error":"No image uploaded"}"#;
        let result = AnalysisResult::from_json(body).unwrap();
        assert_eq!(result.failure(), Some("No image uploaded"));
    }

    #[test]
    fn test_empty_error_is_not_a_failure() {
        let body = r#"{"error":"","emotion":"sad"}"#;
        let result = AnalysisResult::from_json(body).unwrap();
        assert_eq!(result.failure(), None);
    }

    #[test]
    fn test_missing_label_is_unknown() {
        let result = AnalysisResult::from_json("{}").unwrap();
        assert_eq!(result.label(), "Unknown");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let body = r#"{"emotion":"sad","region":{"x":1}}"#;
        let result = AnalysisResult::from_json(body).unwrap();
        assert_eq!(result.label(), "sad");
    }

    #[test]
    fn test_non_json_is_decode_error() {
        let err = AnalysisResult::from_json("<html>500</html>").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
