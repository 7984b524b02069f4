//! Client configuration
//!
//! Every field has a default, so the page can start with `start()` or pass
//! a partial JSON object to `start_with_config()`.

use serde::Deserialize;

use crate::error::ClientError;

/// Endpoint, upload and camera settings for one page
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Where analysis requests are POSTed
    pub endpoint: String,
    /// Prepended to the server-supplied `file` name for the preview image
    pub uploads_prefix: String,
    /// Multipart field name for camera snapshots
    pub snapshot_field: String,
    /// Filename attached to camera snapshots
    pub snapshot_filename: String,
    /// JPEG encoder quality, 0-1
    pub jpeg_quality: f64,
    /// Request camera access once the page has loaded
    pub auto_start_camera: bool,
    pub element_ids: ElementIds,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "/analyze".to_string(),
            uploads_prefix: "/uploads/".to_string(),
            snapshot_field: "image".to_string(),
            snapshot_filename: "capture.jpg".to_string(),
            jpeg_quality: 0.92,
            auto_start_camera: true,
            element_ids: ElementIds::default(),
        }
    }
}

impl ClientConfig {
    /// Parse a JSON config object; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ClientError> {
        let mut config: ClientConfig = serde_json::from_str(json)
            .map_err(|e| ClientError::Config(e.to_string()))?;
        config.jpeg_quality = config.jpeg_quality.clamp(0.0, 1.0);
        Ok(config)
    }

    /// Preview location for a stored upload
    pub fn upload_url(&self, file: &str) -> String {
        format!("{}{}", self.uploads_prefix, file)
    }
}

/// DOM ids of the elements the client drives
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ElementIds {
    pub upload_form: String,
    pub status: String,
    pub emotion_badge: String,
    pub breakdown: String,
    pub preview_image: String,
    pub video: String,
    pub capture_button: String,
    pub camera_toggle: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            upload_form: "uploadForm".to_string(),
            status: "status".to_string(),
            emotion_badge: "emotionBadge".to_string(),
            breakdown: "emotionBreakdown".to_string(),
            preview_image: "previewImage".to_string(),
            video: "camera".to_string(),
            capture_button: "snap".to_string(),
            camera_toggle: "toggleCam".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = ClientConfig::from_json("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.endpoint, "/analyze");
        assert_eq!(config.element_ids.capture_button, "snap");
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = ClientConfig::from_json(
            r#"{"endpoint":"/api/analyze","element_ids":{"status":"msg"}}"#,
        )
        .unwrap();
        assert_eq!(config.endpoint, "/api/analyze");
        assert_eq!(config.uploads_prefix, "/uploads/");
        assert_eq!(config.element_ids.status, "msg");
        assert_eq!(config.element_ids.video, "camera");
    }

    #[test]
    fn test_quality_is_clamped() {
        let config = ClientConfig::from_json(r#"{"jpeg_quality":3.5}"#).unwrap();
        assert_eq!(config.jpeg_quality, 1.0);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = ClientConfig::from_json("{endpoint").unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_upload_url() {
        let config = ClientConfig::default();
        assert_eq!(config.upload_url("abc.jpg"), "/uploads/abc.jpg");
    }
}
