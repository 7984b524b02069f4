//! Emotion Web - capture & analyze client for the emotion service
//!
//! Entry point for WASM module. Only contains:
//! - Console logging macro
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}

mod bridge;
pub mod camera;
pub mod config;
mod dom;
pub mod error;
pub mod messages;
pub mod render;
pub mod submit;

#[cfg(test)]
mod testing;

pub use config::ClientConfig;
pub use error::ClientError;

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Wire the page with the default element ids and endpoint
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    bridge::launch(ClientConfig::default())?;
    console_log!("✅ Emotion client ready");
    Ok(())
}

/// Wire the page with a JSON config; omitted fields keep their defaults
#[wasm_bindgen]
pub fn start_with_config(config_json: &str) -> Result<(), JsValue> {
    let config = ClientConfig::from_json(config_json)?;
    bridge::launch(config)?;
    console_log!("✅ Emotion client ready");
    Ok(())
}
