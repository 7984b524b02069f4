//! User-facing status and control texts

pub const CAMERA_READY: &str = "Camera is ready ✅";
pub const CAMERA_OFF: &str = "Camera off ❌";
pub const CAMERA_DENIED: &str = "Camera permission denied or unavailable!";
pub const CAMERA_REQUIRED: &str = "Camera is OFF — Please turn it on first!";

pub const TOGGLE_TURN_ON: &str = "Turn Camera On";
pub const TOGGLE_TURN_OFF: &str = "Turn Camera Off";
pub const TOGGLE_BLOCKED: &str = "Camera Blocked";

pub const BUSY_UPLOAD: &str = "Analyzing uploaded image…";
pub const BUSY_SNAPSHOT: &str = "Analyzing camera capture…";

pub const ANALYSIS_COMPLETE: &str = "✅ Analysis complete";
pub const UNKNOWN_EMOTION: &str = "Unknown";
